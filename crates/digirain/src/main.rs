use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;
use digirain_config::Config;

mod app;
mod logging;
mod ui;

use app::App;

/// Matrix rain with menu-driven panels, in the terminal.
#[derive(Debug, Parser)]
#[command(name = "digirain", version, about)]
struct Args {
    /// Config file to use instead of the default location.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the rain, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Target frames per second (overrides `frame_ms`).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: Option<u32>,

    /// Write logs to this file (filtered by RUST_LOG).
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// Write the default config file and exit.
    #[arg(long)]
    write_config: bool,

    /// Open this section on startup.
    #[arg(short, long, value_name = "KEY")]
    section: Option<String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::init(args.log.as_deref())?;

    if args.write_config {
        let path = args
            .config
            .clone()
            .or_else(Config::default_path)
            .ok_or_else(|| eyre!("could not determine a config directory"))?;
        Config::default().save(&path)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(fps) = args.fps {
        config.frame_ms = (1000 / u64::from(fps)).max(1);
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut app = App::new(config);
    if let Some(key) = &args.section {
        app.open_section(key)?;
    }

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}
