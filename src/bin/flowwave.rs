use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use flowwave::{FlowConfig, FlowView, Fps, FrameIndex, FrameRange, PngSequenceSink};

#[derive(Parser, Debug)]
#[command(name = "flowwave", version)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the wave at one point in time as a PNG.
    Frame(FrameArgs),
    /// Render a PNG sequence of the animation.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Flow config JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured surface width.
    #[arg(long)]
    width: Option<u32>,

    /// Override the configured surface height.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Milliseconds since the animation started.
    #[arg(long, default_value_t = 0.0)]
    time_ms: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Length of the sequence in milliseconds.
    #[arg(long, default_value_t = 5_000.0)]
    duration_ms: f64,

    /// Output directory for `frame_NNNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_view(args: &ViewArgs) -> anyhow::Result<FlowView> {
    let mut config = match &args.config {
        Some(path) => FlowConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => FlowConfig::default(),
    };
    if let Some(w) = args.width {
        config.width = w;
    }
    if let Some(h) = args.height {
        config.height = h;
    }

    let mut view = FlowView::new(&config)?;
    let dims = config.dimensions();
    view.on_size_changed(dims.width, dims.height)?;
    Ok(view)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut view = load_view(&args.view)?;
    let frame = view.render_frame(args.time_ms)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    flowwave::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let mut view = load_view(&args.view)?;
    let fps = Fps::new(args.fps, 1)?;
    let frames = fps.ms_to_frames_floor(args.duration_ms).max(1);
    let range = FrameRange::new(FrameIndex(0), FrameIndex(frames))?;

    let mut sink = PngSequenceSink::new(&args.out_dir);
    let stats = view.render_range(range, fps, &mut sink)?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames_total,
        args.out_dir.display()
    );
    Ok(())
}
