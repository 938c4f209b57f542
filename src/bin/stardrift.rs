use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stardrift", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a frame sequence as an MP4 (requires `ffmpeg` on PATH) or a PNG directory.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Page to render.
    #[arg(long, value_enum, default_value_t = SceneChoice::Landing)]
    scene: SceneChoice,

    /// Scene config JSON. Missing fields use their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Override the config seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Hold the pointer at `x,y` for the whole run.
    #[arg(long, value_parser = parse_point)]
    pointer: Option<(f64, f64)>,

    /// Treat the host as a touch device; `--pointer` then becomes a held touch.
    #[arg(long)]
    touch: bool,

    /// Extra font directories, loaded after the system fonts.
    #[arg(long = "fonts")]
    font_dirs: Vec<PathBuf>,

    /// Background image for the demo scene.
    #[arg(long)]
    background: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frame index (0-based); earlier frames are simulated first.
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of frames to render.
    #[arg(long)]
    frames: u64,

    /// Output MP4 path.
    #[arg(long, required_unless_present = "png_dir", conflicts_with = "png_dir")]
    out: Option<PathBuf>,

    /// Write `frame_00000.png`, ... into this directory instead of an MP4.
    #[arg(long)]
    png_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SceneChoice {
    Landing,
    Demo,
    Starfield,
}

impl From<SceneChoice> for stardrift::Scene {
    fn from(choice: SceneChoice) -> Self {
        match choice {
            SceneChoice::Landing => Self::Landing,
            SceneChoice::Demo => Self::Demo,
            SceneChoice::Starfield => Self::Starfield,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got '{s}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((x, y))
}

fn read_config(args: &SceneArgs) -> anyhow::Result<stardrift::SceneConfig> {
    let mut cfg = match &args.config {
        Some(path) => stardrift::SceneConfig::from_path(path)
            .with_context(|| format!("load scene config '{}'", path.display()))?,
        None => stardrift::SceneConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    Ok(cfg)
}

fn build_host(args: &SceneArgs) -> anyhow::Result<stardrift::FrameLoop> {
    anyhow::ensure!(
        args.width > 0 && args.height > 0,
        "viewport must be non-empty, got {}x{}",
        args.width,
        args.height
    );
    let cfg = read_config(args)?;
    let fonts = if args.font_dirs.is_empty() {
        stardrift::FontLibrary::system()
    } else {
        stardrift::FontLibrary::with_dirs(&args.font_dirs)
    };
    tracing::info!(faces = fonts.face_count(), "fonts loaded");

    let env = stardrift::HostEnv::new(stardrift::Viewport::new(args.width, args.height))
        .with_touch(args.touch);
    let opts = stardrift::SceneOptions {
        env,
        fonts,
        background: args.background.clone(),
    };
    let mut host = stardrift::build_scene(args.scene.into(), &cfg, opts);

    if let Some((x, y)) = args.pointer {
        let at = stardrift::Point::new(x, y);
        if args.touch {
            host.dispatch(&stardrift::InputEvent::TouchStart(at));
            host.dispatch(&stardrift::InputEvent::TouchMove(vec![at]));
        } else {
            host.dispatch(&stardrift::InputEvent::PointerMove(at));
        }
    }
    Ok(host)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut host = build_host(&args.scene)?;
    for _ in 0..args.frame {
        host.tick()?;
    }
    let frame = host.tick()?;
    host.teardown_all();

    stardrift::write_png(&args.out, &frame)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut host = build_host(&args.scene)?;

    let written = if let Some(dir) = &args.png_dir {
        let mut sink = stardrift::PngSequenceSink::new(dir);
        stardrift::render_frames(&mut host, args.frames, &mut sink)?;
        dir.display().to_string()
    } else {
        let out = args
            .out
            .as_ref()
            .context("either --out or --png-dir is required")?;
        anyhow::ensure!(
            stardrift::is_ffmpeg_on_path(),
            "ffmpeg not found on PATH; use --png-dir instead"
        );
        let mut sink = stardrift::FfmpegSink::new(out, [0, 0, 0, 255]);
        stardrift::render_frames(&mut host, args.frames, &mut sink)?;
        out.display().to_string()
    };
    host.teardown_all();

    eprintln!("wrote {written}");
    Ok(())
}
