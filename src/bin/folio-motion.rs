use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use folio_motion::{
    FrameLoop, FrameLoopConfig, FrameRgba8, HostEvent, LoadedImage, ParleyRasterizer,
    ParticleField, ParticleFieldConfig, PixmapTarget, PreparedSvg, RecordingTarget, SceneFile,
    StoryConfig, StoryScene, TopographyConfig, TopographyScene, Viewport,
};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Frame interval used by every headless simulation.
const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "folio-motion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scroll a story section top to bottom and write the recorded render commands.
    Story(StoryArgs),
    /// Run the particle text field headless and write the last frame as a PNG.
    Particles(ParticlesArgs),
    /// Render the topography portrait after a pointer move.
    Topography(TopographyArgs),
    /// Print the authoring prop schema of a component.
    Props(PropsArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StoryPreset {
    About,
    Layered,
}

#[derive(Parser, Debug)]
struct ViewportArgs {
    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1440.0)]
    width: f64,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Device pixel ratio.
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,
}

impl ViewportArgs {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height).with_dpr(self.dpr)
    }
}

#[derive(Parser, Debug)]
struct StoryArgs {
    /// Scene JSON (`"kind": "story"`); overrides `--preset`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in story when no config is given.
    #[arg(long, value_enum, default_value_t = StoryPreset::About)]
    preset: StoryPreset,

    /// Scroll positions sampled between top and bottom.
    #[arg(long, default_value_t = 60)]
    steps: u32,

    /// Frames rendered after each scroll event.
    #[arg(long, default_value_t = 4)]
    frames_per_step: u32,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Output trace JSON.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ParticlesArgs {
    /// Scene JSON (`"kind": "particles"`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file used to shape the texts.
    #[arg(long)]
    font: PathBuf,

    /// Replace the configured texts (repeatable).
    #[arg(long = "text")]
    texts: Vec<String>,

    /// Frames to simulate.
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Pointer position `x,y` held during the run.
    #[arg(long, value_parser = parse_point)]
    pointer: Option<(f64, f64)>,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct TopographyArgs {
    /// Scene JSON (`"kind": "topography"`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Layered portrait SVG.
    #[arg(long)]
    svg: PathBuf,

    /// Optional bitmap drawn behind the portrait.
    #[arg(long)]
    background: Option<PathBuf>,

    /// Poster used when the background fails to decode.
    #[arg(long)]
    poster: Option<PathBuf>,

    /// Pointer position `x,y` in viewport pixels.
    #[arg(long, value_parser = parse_point)]
    pointer: Option<(f64, f64)>,

    /// Frames to simulate.
    #[arg(long, default_value_t = 60)]
    frames: u32,

    #[command(flatten)]
    viewport: ViewportArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Component {
    Story,
    Particles,
    Topography,
}

#[derive(Parser, Debug)]
struct PropsArgs {
    /// Component to describe.
    #[arg(value_enum)]
    component: Component,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Story(args) => cmd_story(args),
        Command::Particles(args) => cmd_particles(args),
        Command::Topography(args) => cmd_topography(args),
        Command::Props(args) => cmd_props(args),
    }
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected 'x,y', got '{s}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((x, y))
}

fn read_scene(path: &Path) -> anyhow::Result<SceneFile> {
    SceneFile::load_json(path).with_context(|| format!("load scene '{}'", path.display()))
}

fn create_parent_dir(out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn write_png(out: &Path, frame: &FrameRgba8) -> anyhow::Result<()> {
    create_parent_dir(out)?;
    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))
}

fn cmd_story(args: StoryArgs) -> anyhow::Result<()> {
    let (config, viewport) = match &args.config {
        Some(path) => match read_scene(path)? {
            SceneFile::Story { config, viewport } => {
                (config, viewport.unwrap_or_else(|| args.viewport.viewport()))
            }
            other => anyhow::bail!("'{}' is not a story scene: {other:?}", path.display()),
        },
        None => {
            let config = match args.preset {
                StoryPreset::About => StoryConfig::about_story(),
                StoryPreset::Layered => StoryConfig::layered(),
            };
            (config, args.viewport.viewport())
        }
    };

    let scene = StoryScene::new(config, Some(viewport))?;
    let travel = (scene.region().height_px(viewport) - viewport.height).max(0.0);
    let mut frame_loop = FrameLoop::mount(scene, FrameLoopConfig::default());
    let mut rec = RecordingTarget::new();

    frame_loop.dispatch(&HostEvent::Visibility { ratio: 1.0 });
    let steps = args.steps.max(1);
    for i in 0..=steps {
        let offset = travel * f64::from(i) / f64::from(steps);
        let section = frame_loop.scene().bounds_at(offset);
        frame_loop.dispatch(&HostEvent::Scroll { section });
        for _ in 0..args.frames_per_step.max(1) {
            frame_loop.tick(FRAME_MS, &mut rec);
        }
    }

    let stats = frame_loop.stats();
    let scene = frame_loop.unmount();
    tracing::info!(
        frames = stats.frames,
        progress = scene.progress().current,
        "story simulated"
    );

    create_parent_dir(&args.out)?;
    let f = File::create(&args.out)
        .with_context(|| format!("create trace '{}'", args.out.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), rec.commands())
        .with_context(|| format!("write trace '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_particles(args: ParticlesArgs) -> anyhow::Result<()> {
    let (mut config, viewport) = match &args.config {
        Some(path) => match read_scene(path)? {
            SceneFile::Particles { config, viewport } => {
                (config, viewport.unwrap_or_else(|| args.viewport.viewport()))
            }
            other => anyhow::bail!("'{}' is not a particles scene: {other:?}", path.display()),
        },
        None => (ParticleFieldConfig::default(), args.viewport.viewport()),
    };
    if !args.texts.is_empty() {
        config.texts = args.texts.clone();
    }

    let rasterizer = ParleyRasterizer::from_file(&args.font, config.fit)
        .with_context(|| format!("load font '{}'", args.font.display()))?;
    let field = ParticleField::new(config, rasterizer, viewport)?;
    tracing::info!(
        particles = field.pool().active_len(),
        text = field.text(),
        "particle field ready"
    );

    let mut frame_loop = FrameLoop::mount(field, FrameLoopConfig::default());
    if let Some((x, y)) = args.pointer {
        frame_loop.dispatch(&HostEvent::PointerMove { x, y });
    }
    let mut target = PixmapTarget::default();
    for _ in 0..args.frames.max(1) {
        frame_loop.tick(FRAME_MS, &mut target);
    }
    let frame = target.finish()?;
    frame_loop.unmount();

    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_topography(args: TopographyArgs) -> anyhow::Result<()> {
    let (config, viewport) = match &args.config {
        Some(path) => match read_scene(path)? {
            SceneFile::Topography { config, viewport } => {
                (config, viewport.unwrap_or_else(|| args.viewport.viewport()))
            }
            other => anyhow::bail!("'{}' is not a topography scene: {other:?}", path.display()),
        },
        None => (TopographyConfig::default(), args.viewport.viewport()),
    };

    let svg = PreparedSvg::from_file(&args.svg)
        .with_context(|| format!("load svg '{}'", args.svg.display()))?;
    let scene = TopographyScene::new(config, &svg, Some(viewport))?;
    let mut frame_loop = FrameLoop::mount(scene, FrameLoopConfig::default());
    if let Some((x, y)) = args.pointer {
        frame_loop.dispatch(&HostEvent::PointerMove { x, y });
    }
    let mut rec = RecordingTarget::new();
    for _ in 0..args.frames.max(1) {
        frame_loop.tick(FRAME_MS, &mut rec);
        rec.take();
    }
    let scene = frame_loop.unmount();

    let store = viewport_pixels(viewport);
    let mut frame = svg.render(store.0, store.1, &scene.group_transforms())?;
    if let Some(background) = &args.background {
        let loaded = folio_motion::load_image_or_fallback(background, args.poster.as_deref());
        tracing::info!(origin = ?loaded.origin, "background loaded");
        composite_over(&mut frame, &loaded);
    }

    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_props(args: PropsArgs) -> anyhow::Result<()> {
    let doc = match args.component {
        Component::Story => folio_motion::schema_json::<StoryConfig>(),
        Component::Particles => folio_motion::schema_json::<ParticleFieldConfig>(),
        Component::Topography => folio_motion::schema_json::<TopographyConfig>(),
    };
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn viewport_pixels(viewport: Viewport) -> (u32, u32) {
    let w = (viewport.width * viewport.device_pixel_ratio).round().max(1.0) as u32;
    let h = (viewport.height * viewport.device_pixel_ratio).round().max(1.0) as u32;
    (w, h)
}

/// Draw `frame` over a background stretched to the frame size.
fn composite_over(frame: &mut FrameRgba8, background: &LoadedImage) {
    let img = &background.image;
    let Some(bg) = image::RgbaImage::from_raw(img.width, img.height, img.rgba8.to_vec()) else {
        tracing::warn!("background buffer has the wrong length; skipped");
        return;
    };
    let bg = image::imageops::resize(
        &bg,
        frame.width,
        frame.height,
        image::imageops::FilterType::Triangle,
    );

    for (dst, under) in frame.data.chunks_exact_mut(4).zip(bg.pixels()) {
        let a = u32::from(dst[3]);
        let ua = u32::from(under[3]);
        let out_a = a + ua * (255 - a) / 255;
        if out_a == 0 {
            dst.copy_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        for c in 0..3 {
            let top = u32::from(dst[c]) * a;
            let bottom = u32::from(under[c]) * ua * (255 - a) / 255;
            dst[c] = ((top + bottom) / out_a) as u8;
        }
        dst[3] = out_a as u8;
    }
}
