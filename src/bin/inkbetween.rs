use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "inkbetween", version)]
struct Cli {
    /// Optional engine configuration JSON.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tween two keyframes at a single progress value.
    Tween(TweenArgs),
    /// Print the stroke correspondence between two keyframes as JSON.
    Match(MatchArgs),
    /// Play the whole sequence and write one SVG per frame.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct TweenArgs {
    /// Input keyframe sequence JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Index of the starting keyframe.
    #[arg(long, default_value_t = 0)]
    from: usize,

    /// Index of the ending keyframe.
    #[arg(long, default_value_t = 1)]
    to: usize,

    /// Progress between the two keyframes.
    #[arg(long, default_value_t = 0.5)]
    t: f64,

    /// Output path; format follows `--format`. Prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    #[command(flatten)]
    canvas: CanvasArgs,
}

#[derive(Parser, Debug)]
struct MatchArgs {
    /// Input keyframe sequence JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Index of the first keyframe.
    #[arg(long, default_value_t = 0)]
    from: usize,

    /// Index of the second keyframe.
    #[arg(long, default_value_t = 1)]
    to: usize,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input keyframe sequence JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory receiving `frame_NNNNN.svg` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Total duration override in milliseconds.
    #[arg(long)]
    duration_ms: Option<f64>,

    /// Frame rate override.
    #[arg(long)]
    fps: Option<u32>,

    /// Easing name override (unknown names fall back to EaseInOutCubic).
    #[arg(long)]
    easing: Option<String>,

    #[command(flatten)]
    canvas: CanvasArgs,
}

#[derive(clap::Args, Debug)]
struct CanvasArgs {
    /// SVG width.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// SVG height.
    #[arg(long, default_value_t = 600)]
    height: u32,
}

impl CanvasArgs {
    fn renderer(&self) -> inkbetween::SvgRenderer {
        inkbetween::SvgRenderer {
            width: self.width,
            height: self.height,
            ..inkbetween::SvgRenderer::default()
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Svg,
    Json,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => inkbetween::Config::load(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => inkbetween::Config::default(),
    };

    match cli.cmd {
        Command::Tween(args) => cmd_tween(args, &config),
        Command::Match(args) => cmd_match(args, &config),
        Command::Play(args) => cmd_play(args, config),
    }
}

fn read_sequence(path: &Path) -> anyhow::Result<inkbetween::KeyframeSequence> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("open keyframes '{}'", path.display()))?;
    let seq = inkbetween::KeyframeSequence::from_json_str(&s)
        .with_context(|| "parse keyframes JSON")?;
    Ok(seq)
}

fn keyframe_pair(
    seq: &inkbetween::KeyframeSequence,
    from: usize,
    to: usize,
) -> anyhow::Result<(&inkbetween::Drawing, &inkbetween::Drawing)> {
    let a = seq
        .get(from)
        .with_context(|| format!("keyframe {from} out of range (len {})", seq.len()))?;
    let b = seq
        .get(to)
        .with_context(|| format!("keyframe {to} out of range (len {})", seq.len()))?;
    Ok((a, b))
}

fn write_output(out: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    let Some(path) = out else {
        print!("{contents}");
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_tween(args: TweenArgs, config: &inkbetween::Config) -> anyhow::Result<()> {
    let seq = read_sequence(&args.in_path)?;
    let (a, b) = keyframe_pair(&seq, args.from, args.to)?;

    let strokes = inkbetween::tween_drawings(a, b, args.t, &config.tween);
    let contents = match args.format {
        OutputFormat::Svg => args.canvas.renderer().render(&strokes),
        OutputFormat::Json => {
            let drawing = inkbetween::Drawing::new(strokes);
            serde_json::to_string_pretty(&drawing).with_context(|| "serialize tween")?
        }
    };
    write_output(args.out.as_deref(), &contents)
}

fn cmd_match(args: MatchArgs, config: &inkbetween::Config) -> anyhow::Result<()> {
    let seq = read_sequence(&args.in_path)?;
    let (a, b) = keyframe_pair(&seq, args.from, args.to)?;

    let aa: Vec<&inkbetween::Stroke> = a.renderable().collect();
    let bb: Vec<&inkbetween::Stroke> = b.renderable().collect();
    let result = inkbetween::match_strokes(&aa, &bb, &config.tween);
    println!(
        "{}",
        serde_json::to_string_pretty(&result).with_context(|| "serialize match")?
    );
    Ok(())
}

fn cmd_play(args: PlayArgs, mut config: inkbetween::Config) -> anyhow::Result<()> {
    let seq = read_sequence(&args.in_path)?;
    if let Some(d) = args.duration_ms {
        config.playback.duration_ms = d;
    }
    if let Some(fps) = args.fps {
        config.playback.fps = fps;
    }
    if let Some(easing) = args.easing {
        config.playback.easing = easing;
    }
    // Files may hold more keyframes than the interactive store allows.
    config.playback.capacity = config.playback.capacity.max(seq.len());
    let frame_ms = 1000.0 / f64::from(config.playback.fps.max(1));

    let mut player = inkbetween::Player::new(config, inkbetween::ManualTime::new(0.0))?;
    for drawing in seq.keyframes {
        player.store(drawing)?;
    }
    player.play()?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let renderer = args.canvas.renderer();

    let mut index = 0usize;
    loop {
        let mut svg = None;
        let instruction = player.frame(|strokes| svg = Some(renderer.render(strokes)));
        let Some(svg) = svg else {
            break;
        };

        let path = args.out_dir.join(format!("frame_{index:05}.svg"));
        std::fs::write(&path, svg).with_context(|| format!("write '{}'", path.display()))?;
        index += 1;

        if matches!(instruction, inkbetween::RenderInstruction::Final { .. }) {
            break;
        }
        player.time().advance(frame_ms);
    }

    eprintln!("wrote {index} frames to {}", args.out_dir.display());
    Ok(())
}
