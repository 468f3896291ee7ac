pub(crate) mod exec;
pub(crate) mod loader;
pub(crate) mod model;
