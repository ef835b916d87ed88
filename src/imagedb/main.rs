use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use imagedb::api::ImageDbApi;
use imagedb::config::ImageDbConfig;
use imagedb::error::Result;
use imagedb::store::simulated::SimulatedStore;

mod args;
mod cli;

use args::Cli;
use cli::Session;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    });

    let store = SimulatedStore::from_config(&config);
    log::debug!(
        "simulated store: save {:?}, delete {:?}",
        config.save_latency(),
        config.delete_latency()
    );
    let session = Session::new(ImageDbApi::new(store));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let local = tokio::task::LocalSet::new();
    local.block_on(&runtime, session.run())
}

fn load_config(cli: &Cli) -> Result<ImageDbConfig> {
    let config_dir = cli.config.clone().or_else(|| {
        ProjectDirs::from("com", "imagedb", "imagedb").map(|dirs| dirs.config_dir().to_path_buf())
    });

    let mut config = match config_dir {
        Some(dir) => ImageDbConfig::load(dir)?,
        None => ImageDbConfig::default(),
    };

    if let Some(ms) = cli.save_latency_ms {
        config.save_latency_ms = ms;
    }
    if let Some(ms) = cli.delete_latency_ms {
        config.delete_latency_ms = ms;
    }
    Ok(config)
}

/// Logs go to stderr; RUST_LOG wins over `level`.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}
