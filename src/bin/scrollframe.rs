use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scrollframe", version)]
struct Cli {
    /// Site configuration JSON. Defaults to the built-in configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the address of one frame.
    Address(AddressArgs),
    /// Print the effective site configuration as JSON.
    Config,
    /// Preload every frame from a local directory and report failures.
    Preload(PreloadArgs),
    /// Run the scroll/tick loop headlessly and print each repaint.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct AddressArgs {
    /// Frame index (0-based). Clamped into the frame set.
    #[arg(long)]
    frame: u32,
}

#[derive(Parser, Debug)]
struct PreloadArgs {
    /// Directory holding frame files named like the remote asset store.
    #[arg(long)]
    dir: PathBuf,

    /// Cap the number of worker threads. Defaults to one per frame.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Scroll fraction of the hero before the jump.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Scroll fraction of the hero after the jump.
    #[arg(long)]
    fraction: f64,

    /// Number of refresh ticks to run after the jump.
    #[arg(long, default_value_t = 60)]
    ticks: u32,

    /// Hero container height in pixels.
    #[arg(long, default_value_t = 4000.0)]
    container: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 1000.0)]
    viewport: f64,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = read_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Address(args) => cmd_address(&cfg, args),
        Command::Config => cmd_config(&cfg),
        Command::Preload(args) => cmd_preload(&cfg, args),
        Command::Simulate(args) => cmd_simulate(&cfg, args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<scrollframe::SiteConfig> {
    let Some(path) = path else {
        return Ok(scrollframe::SiteConfig::default());
    };
    let cfg = scrollframe::SiteConfig::load(path)
        .with_context(|| format!("load site config '{}'", path.display()))?;
    Ok(cfg)
}

fn cmd_address(cfg: &scrollframe::SiteConfig, args: AddressArgs) -> anyhow::Result<()> {
    let idx = cfg
        .hero
        .total_frames
        .clamp(scrollframe::FrameIndex(args.frame));
    println!("{}", cfg.hero.addressing.address(idx));
    Ok(())
}

fn cmd_config(cfg: &scrollframe::SiteConfig) -> anyhow::Result<()> {
    let json = cfg.to_json_pretty().context("serialize site config")?;
    println!("{json}");
    Ok(())
}

struct ProgressPrinter {
    last_percent: Option<u8>,
}

impl scrollframe::PreloadObserver for ProgressPrinter {
    fn on_progress(&mut self, update: scrollframe::ProgressUpdate) {
        if self.last_percent != Some(update.percent) {
            eprintln!("{}% caching frames", update.percent);
            self.last_percent = Some(update.percent);
        }
    }
}

fn cmd_preload(cfg: &scrollframe::SiteConfig, args: PreloadArgs) -> anyhow::Result<()> {
    let preloader = scrollframe::Preloader::from_hero(&cfg.hero, args.threads)?;
    let fetcher = scrollframe::DirFrameFetcher::new(&args.dir);

    let mut printer = ProgressPrinter { last_percent: None };
    let outcome = preloader
        .run(&fetcher, &mut printer)
        .with_context(|| format!("preload frames from '{}'", args.dir.display()))?;

    let report = &outcome.report;
    println!(
        "frames: {} loaded: {} failed: {}",
        report.total, report.loaded, report.failed
    );
    for idx in &report.failed_indices {
        println!("  failed: {}", preloader.addressing().file_name(*idx));
    }
    Ok(())
}

fn cmd_simulate(cfg: &scrollframe::SiteConfig, args: SimulateArgs) -> anyhow::Result<()> {
    let scheduler = scrollframe::ManualTickScheduler::new();
    let mut hero = scrollframe::HeroController::new(&cfg.hero, scheduler)?;

    for idx in cfg.hero.total_frames.indices() {
        hero.frame_settled(idx, scrollframe::LoadOutcome::Loaded);
    }

    let metrics_at = |fraction: f64| scrollframe::ScrollMetrics {
        scroll_top: fraction * (args.container - args.viewport),
        container_height: args.container,
        viewport_height: args.viewport,
    };

    let start = hero
        .on_scroll(metrics_at(args.from))
        .context("scroll metrics are degenerate (viewport must be shorter than container)")?;
    let mut settle = 0u32;
    while hero.displayed_frame() != Some(start) && settle < 10_000 {
        hero.pump();
        settle += 1;
    }

    let target = hero
        .on_scroll(metrics_at(args.fraction))
        .context("scroll metrics became degenerate")?;
    println!("target: {target}");

    for tick in 1..=args.ticks {
        if let Some(frame) = hero.pump() {
            println!(
                "tick {tick:>4}  smoothed {:>9.3}  frame {frame}",
                hero.animator().smoothed()
            );
        }
    }
    if let Some(addr) = hero.displayed_address() {
        println!("displayed: {addr}");
    }
    hero.teardown();
    Ok(())
}
