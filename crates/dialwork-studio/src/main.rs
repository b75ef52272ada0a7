//! dialwork studio: runs the clock widget against a software host.
//!
//! The host behaves like a platform view: it honors the clock's redraw
//! requests through a `RedrawQueue`, offers one frame per `--frame-ms`, and
//! rasterizes every frame to `frame-NNNN.png` under `--out`.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use dialwork_clock::prelude::*;
use dialwork_engine::logging::{init_logging, LoggingConfig};
use dialwork_engine::render::{RasterTarget, Rasterizer};

const USAGE: &str = "usage: dialwork-studio [--theme FILE] [--size WxH] [--frames N] [--out DIR] [--frame-ms MS] [--log FILTER]";

#[derive(Debug, Clone, PartialEq)]
struct Options {
    theme: Option<PathBuf>,
    width: u32,
    height: u32,
    /// `None` runs until interrupted.
    frames: Option<u32>,
    out: PathBuf,
    frame_interval: Duration,
    /// `env_logger` filter; falls back to `RUST_LOG`.
    log_filter: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            theme: None,
            width: 480,
            height: 480,
            frames: Some(8),
            out: PathBuf::from("frames"),
            frame_interval: Duration::from_millis(250),
            log_filter: None,
        }
    }
}

fn parse_args<I>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    let mut args = args.into_iter();

    while let Some(flag) = args.next() {
        let mut value = || args.next().with_context(|| format!("{flag} expects a value\n{USAGE}"));
        match flag.as_str() {
            "--theme" => opts.theme = Some(PathBuf::from(value()?)),
            "--out" => opts.out = PathBuf::from(value()?),
            "--size" => {
                let v = value()?;
                let (w, h) = v.split_once('x').with_context(|| format!("--size expects WxH, got `{v}`"))?;
                opts.width = w.parse().with_context(|| format!("bad width in `{v}`"))?;
                opts.height = h.parse().with_context(|| format!("bad height in `{v}`"))?;
            }
            "--frames" => {
                let v = value()?;
                let n: u32 = v.parse().with_context(|| format!("bad frame count `{v}`"))?;
                opts.frames = (n > 0).then_some(n);
            }
            "--frame-ms" => {
                let v = value()?;
                let ms: u64 = v.parse().with_context(|| format!("bad frame interval `{v}`"))?;
                opts.frame_interval = Duration::from_millis(ms);
            }
            "--log" => opts.log_filter = Some(value()?),
            "-h" | "--help" => bail!("{USAGE}"),
            other => bail!("unknown argument `{other}`\n{USAGE}"),
        }
    }

    if opts.width == 0 || opts.height == 0 {
        bail!("--size must be non-zero, got {}x{}", opts.width, opts.height);
    }
    Ok(opts)
}

fn load_config(opts: &Options) -> Result<ClockConfig> {
    let Some(path) = &opts.theme else {
        return Ok(ClockConfig::default());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read theme {}", path.display()))?;
    ClockConfig::from_toml_str(&source).with_context(|| format!("failed to load theme {}", path.display()))
}

fn run(opts: Options) -> Result<()> {
    let config = load_config(&opts)?;
    std::fs::create_dir_all(&opts.out)
        .with_context(|| format!("failed to create output directory {}", opts.out.display()))?;

    let mut clock = ClockRenderer::new(config);
    clock.on_resize(opts.width as f32, opts.height as f32);

    let mut queue = RedrawQueue::new();
    // First frame, as a freshly attached view would get.
    queue.request_redraw();

    let mut draw_list = DrawList::new();
    let mut target = RasterTarget::new(opts.width, opts.height);
    let mut rasterizer = Rasterizer::new();

    let mut next_tick = Instant::now();
    let mut written: u32 = 0;

    while opts.frames.is_none_or(|n| written < n) {
        let Some(wake) = queue.next_wake(next_tick) else {
            log::warn!("clock stopped requesting redraws after {written} frames");
            break;
        };
        let now = Instant::now();
        if wake > now {
            std::thread::sleep(wake - now);
        }

        let now = Instant::now();
        if !queue.take_due(now, next_tick) {
            continue;
        }
        next_tick = now + opts.frame_interval;

        draw_list.clear();
        let state = clock.render(Some(&mut draw_list), &mut queue);
        rasterizer.render(&mut target, &mut draw_list, Color::WHITE);

        let path = opts.out.join(format!("frame-{written:04}.png"));
        target.save_png(&path)?;
        log::info!(
            "wrote {} ({:02}:{:02}:{:02})",
            path.display(),
            state.hour,
            state.minute,
            state.second,
        );
        written += 1;
    }

    let stats = queue.stats();
    log::info!(
        "{written} frames; {} immediate and {} delayed requests, {} coalesced",
        stats.immediate_requests,
        stats.delayed_requests,
        stats.coalesced,
    );
    Ok(())
}

fn main() -> Result<()> {
    let opts = parse_args(std::env::args().skip(1))?;
    init_logging(match &opts.log_filter {
        Some(filter) => LoggingConfig::with_filter(filter.as_str()),
        None => LoggingConfig::default(),
    });
    log::debug!("studio options: {opts:?}");
    run(opts)
}
