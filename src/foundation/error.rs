/// Convenience result type used by the fallible parts of the crate.
pub type DrawResult<T> = Result<T, DrawError>;

/// Error taxonomy for buffer construction, job handling and image interop.
///
/// The compositing entry points themselves never fail; see [`crate::draw_mask`].
#[derive(thiserror::Error, Debug)]
pub enum DrawError {
    /// Invalid user-provided values (colors, job descriptions).
    #[error("validation error: {0}")]
    Validation(String),

    /// Pixel storage that does not match the declared rectangle or stride.
    #[error("layout error: {0}")]
    Layout(String),

    /// Missing or unloadable job assets.
    #[error("asset error: {0}")]
    Asset(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DrawError {
    /// Build a [`DrawError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DrawError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`DrawError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
