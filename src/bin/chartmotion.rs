use std::path::{Path, PathBuf};
use std::str::FromStr as _;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use chartmotion::{
    Animator, AnimatorOpts, Capture as _, Chart, ChartKind, CpuSurface, EngineConfig,
    GalleryStore, MSG_CHART_DELETED, MSG_CHART_SAVED, MessageBus, MonotonicClock,
    QueuedScheduler, SequenceOpts,
};

#[derive(Parser, Debug)]
#[command(name = "chartmotion", version, about = "Animated chart frames, PNG and GIF export")]
struct Cli {
    /// Font file to register (repeatable). Also see CHARTMOTION_FONT_DIR.
    #[arg(long = "font", global = true)]
    fonts: Vec<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long, global = true)]
    height: Option<u32>,

    /// Gallery JSON file (overrides CHARTMOTION_DB).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Render without text when no font is configured instead of failing.
    #[arg(long = "allow-no-fonts", global = true, default_value_t = false)]
    allow_no_fonts: bool,

    /// Log at DEBUG level.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the default chart as JSON.
    New(NewArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render the entrance animation as a looping GIF.
    Gif(GifArgs),
    /// Play the animation in real time and write the settled frame as a PNG.
    Preview(PreviewArgs),
    /// Manage saved charts.
    #[command(subcommand)]
    Gallery(GalleryCommand),
}

#[derive(Parser, Debug)]
struct NewArgs {
    /// Output chart JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Chart type: circles, donut, rectangles or bars.
    #[arg(long)]
    kind: Option<String>,

    /// Chart title.
    #[arg(long)]
    title: Option<String>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input chart JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Animation progress in [0, 1].
    #[arg(long, default_value_t = 1.0)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct GifArgs {
    /// Input chart JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,

    /// Progress steps (frames + 1 are painted).
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Per-frame delay in milliseconds.
    #[arg(long = "delay-ms", default_value_t = 33)]
    delay_ms: u64,

    /// Extra copies of the final frame.
    #[arg(long, default_value_t = 15)]
    hold: u32,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input chart JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path for the settled frame.
    #[arg(long)]
    out: PathBuf,

    /// Animation length in milliseconds.
    #[arg(long = "duration-ms", default_value_t = 2000)]
    duration_ms: u64,

    /// Delay between frames in milliseconds.
    #[arg(long = "frame-ms", default_value_t = 16)]
    frame_ms: u64,
}

#[derive(Subcommand, Debug)]
enum GalleryCommand {
    /// List saved charts, newest first.
    List,
    /// Print one saved chart as JSON.
    Show { id: String },
    /// Save a chart JSON file into the gallery.
    Save {
        #[arg(long = "in")]
        in_path: PathBuf,
    },
    /// Delete a saved chart.
    Delete { id: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = engine_config(&cli)?;
    let render = Render {
        cfg: &cfg,
        allow_no_fonts: cli.allow_no_fonts,
    };
    match cli.cmd {
        Command::New(args) => cmd_new(args),
        Command::Frame(args) => cmd_frame(&render, args),
        Command::Gif(args) => cmd_gif(&render, args),
        Command::Preview(args) => cmd_preview(&render, args),
        Command::Gallery(cmd) => cmd_gallery(&render, cmd),
    }
}

struct Render<'a> {
    cfg: &'a EngineConfig,
    allow_no_fonts: bool,
}

impl Render<'_> {
    fn surface(&self) -> anyhow::Result<CpuSurface> {
        let surface = if self.allow_no_fonts {
            self.cfg.cpu_surface()?
        } else {
            self.cfg.cpu_surface_with_fonts()?
        };
        Ok(surface)
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn engine_config(cli: &Cli) -> anyhow::Result<EngineConfig> {
    let mut cfg = EngineConfig::from_env().context("read CHARTMOTION_* environment")?;
    if cli.width.is_some() || cli.height.is_some() {
        cfg.canvas = chartmotion::Canvas::new(
            cli.width.unwrap_or(cfg.canvas.width),
            cli.height.unwrap_or(cfg.canvas.height),
        )?;
    }
    cfg.font_files.extend(cli.fonts.iter().cloned());
    if let Some(db) = &cli.db {
        cfg.gallery_path = db.clone();
    }
    Ok(cfg)
}

fn cmd_new(args: NewArgs) -> anyhow::Result<()> {
    let mut chart = Chart::default();
    if let Some(kind) = &args.kind {
        chart = chart.with_kind(ChartKind::from_str(kind)?);
    }
    if let Some(title) = &args.title {
        chart = chart.with_title(title.as_str());
    }

    ensure_parent(&args.out)?;
    chartmotion::write_atomically(&args.out, chart.to_json_pretty()?.as_bytes())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frame(render: &Render<'_>, args: FrameArgs) -> anyhow::Result<()> {
    let chart = Chart::from_path(&args.in_path)?;
    let mut surface = render.surface()?;

    chartmotion::paint_frame(&mut surface, &chart, args.progress)?;
    let frame = surface.capture()?;
    let png = chartmotion::encode_png(&frame)?;

    ensure_parent(&args.out)?;
    chartmotion::write_atomically(&args.out, &png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_gif(render: &Render<'_>, args: GifArgs) -> anyhow::Result<()> {
    let chart = Chart::from_path(&args.in_path)?;
    let mut surface = render.surface()?;

    let opts = SequenceOpts {
        frame_count: args.frames,
        frame_delay: Duration::from_millis(args.delay_ms),
        hold_frames: args.hold,
        ..SequenceOpts::default()
    };
    let frames = chartmotion::export_sequence(&mut surface, &chart, &opts)?;
    let gif = chartmotion::encode_gif(&frames)?;

    ensure_parent(&args.out)?;
    chartmotion::write_atomically(&args.out, &gif)
        .with_context(|| format!("write gif '{}'", args.out.display()))?;
    eprintln!("wrote {} ({} frames)", args.out.display(), frames.len());
    Ok(())
}

fn cmd_preview(render: &Render<'_>, args: PreviewArgs) -> anyhow::Result<()> {
    let chart = Chart::from_path(&args.in_path)?;
    let mut surface = render.surface()?;

    let opts = AnimatorOpts {
        duration: Duration::from_millis(args.duration_ms),
        ..AnimatorOpts::default()
    };
    let mut painted = 0u64;
    let mut paint_err = None;
    {
        let mut animator = Animator::new(MonotonicClock::new(), QueuedScheduler::new(), opts);
        animator.animate(
            |progress| {
                if paint_err.is_some() {
                    return;
                }
                match chartmotion::paint_frame(&mut surface, &chart, progress) {
                    Ok(()) => painted += 1,
                    Err(e) => paint_err = Some(e),
                }
            },
            None,
        );
        animator.run_until_idle(Some(Duration::from_millis(args.frame_ms)));
    }
    if let Some(err) = paint_err {
        return Err(err.into());
    }

    let png = chartmotion::encode_png(&surface.capture()?)?;
    ensure_parent(&args.out)?;
    chartmotion::write_atomically(&args.out, &png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("painted {painted} frames, wrote {}", args.out.display());
    Ok(())
}

fn cmd_gallery(render: &Render<'_>, cmd: GalleryCommand) -> anyhow::Result<()> {
    let store = GalleryStore::new(&render.cfg.gallery_path);
    let bus = MessageBus::new();
    let _printer = bus.subscribe(|msg| println!("{msg}"));

    match cmd {
        GalleryCommand::List => {
            for saved in store.list()? {
                println!(
                    "{}\t{}\t{}\t{}",
                    saved.id, saved.chart.kind, saved.saved_at, saved.chart.title
                );
            }
        }
        GalleryCommand::Show { id } => {
            let saved = store
                .get(&id)?
                .with_context(|| format!("no saved chart with id '{id}'"))?;
            println!("{}", serde_json::to_string_pretty(&saved)?);
        }
        GalleryCommand::Save { in_path } => {
            let chart = Chart::from_path(&in_path)?;
            let mut surface = render.surface()?;
            let thumbnail = chartmotion::settled_thumbnail(&mut surface, &chart)?;
            let saved = store.save(&chart, thumbnail)?;
            bus.publish(MSG_CHART_SAVED);
            println!("{}", saved.id);
        }
        GalleryCommand::Delete { id } => {
            if store.delete(&id)? {
                bus.publish(MSG_CHART_DELETED);
            } else {
                eprintln!("no saved chart with id '{id}'");
            }
        }
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
