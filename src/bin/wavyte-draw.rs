use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use wavyte_draw::Image as _;

#[derive(Parser, Debug)]
#[command(name = "wavyte-draw", version)]
struct Cli {
    /// Log dispatch decisions and per-step progress to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a JSON draw job and write the canvas as a PNG.
    Run(RunArgs),
    /// Composite one image (optionally through a mask) onto another.
    Copy(CopyArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CopyArgs {
    /// Source image.
    #[arg(long)]
    src: PathBuf,

    /// Destination image to composite onto; a transparent canvas the size of `src` otherwise.
    #[arg(long)]
    dst: Option<PathBuf>,

    /// Coverage mask image (luma).
    #[arg(long)]
    mask: Option<PathBuf>,

    /// Destination rectangle as `x0,y0,x1,y1`; the whole destination by default.
    #[arg(long, value_parser = parse_rect)]
    rect: Option<wavyte_draw::Rect>,

    /// Source point as `x,y`.
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    sp: wavyte_draw::Point,

    /// Mask point as `x,y`.
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    mp: wavyte_draw::Point,

    /// Compositing operator.
    #[arg(long, value_enum, default_value_t = OpChoice::Over)]
    op: OpChoice,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OpChoice {
    Over,
    Src,
}

impl From<OpChoice> for wavyte_draw::Op {
    fn from(v: OpChoice) -> Self {
        match v {
            OpChoice::Over => Self::Over,
            OpChoice::Src => Self::Src,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::TRACE
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Copy(args) => cmd_copy(args),
    }
}

fn parse_ints<const N: usize>(s: &str) -> Result<[i32; N], String> {
    let parts: Vec<i32> = s
        .split(',')
        .map(|p| p.trim().parse::<i32>().map_err(|e| format!("'{p}': {e}")))
        .collect::<Result<_, _>>()?;
    parts
        .try_into()
        .map_err(|_| format!("expected {N} comma-separated integers, got '{s}'"))
}

fn parse_point(s: &str) -> Result<wavyte_draw::Point, String> {
    let [x, y] = parse_ints::<2>(s)?;
    Ok(wavyte_draw::Point::new(x, y))
}

fn parse_rect(s: &str) -> Result<wavyte_draw::Rect, String> {
    let [x0, y0, x1, y1] = parse_ints::<4>(s)?;
    Ok(wavyte_draw::Rect::new(x0, y0, x1, y1))
}

fn read_job_json(path: &Path) -> anyhow::Result<wavyte_draw::DrawJob> {
    let f = File::open(path).with_context(|| format!("open job '{}'", path.display()))?;
    let r = BufReader::new(f);
    let job: wavyte_draw::DrawJob =
        serde_json::from_reader(r).with_context(|| "parse job JSON")?;
    Ok(job)
}

fn write_png(canvas: &wavyte_draw::RgbaImage, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    canvas
        .to_straight()
        .save_with_format(out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let job = read_job_json(&args.in_path)?;
    let assets_root = args.in_path.parent().unwrap_or_else(|| Path::new("."));
    let mut loader = wavyte_draw::FsAssetLoader::new(assets_root);
    let canvas = job.execute(&mut loader)?;
    write_png(&canvas, &args.out)
}

fn open_rgba(path: &Path) -> anyhow::Result<image::RgbaImage> {
    Ok(image::open(path)
        .with_context(|| format!("decode '{}'", path.display()))?
        .to_rgba8())
}

fn cmd_copy(args: CopyArgs) -> anyhow::Result<()> {
    let src = wavyte_draw::NrgbaImage::from_image(&open_rgba(&args.src)?)?;
    let mut dst = match &args.dst {
        Some(path) => wavyte_draw::RgbaImage::from_straight(&open_rgba(path)?)?,
        None => wavyte_draw::RgbaImage::new(src.bounds()),
    };
    let mask = match &args.mask {
        Some(path) => {
            let luma = image::open(path)
                .with_context(|| format!("decode mask '{}'", path.display()))?
                .to_luma8();
            Some(wavyte_draw::AlphaImage::from_luma(&luma)?)
        }
        None => None,
    };

    let rect = args.rect.unwrap_or_else(|| dst.bounds());
    wavyte_draw::draw_mask(
        &mut dst,
        rect,
        &src,
        args.sp,
        mask.as_ref().map(|m| m as &dyn wavyte_draw::Image),
        args.mp,
        args.op.into(),
    );
    write_png(&dst, &args.out)
}
