use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use authgate::config::{Config, ConfigStore};
use authgate::logging::init_tracing;
use authgate::routes::Route;
use authgate::ui::runtime;

#[derive(Parser, Debug)]
#[command(name = "authgate", version, about = "Terminal login/register UI backed by a mock auth service")]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Entry route: /, /login, or /register.
    #[arg(long, default_value = "/")]
    route: String,

    /// Override the simulated network delay in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path).context("loading configuration")?;
    if let Some(delay_ms) = cli.delay_ms {
        config.service.delay_ms = delay_ms;
    }

    let Some(entry) = Route::parse(&cli.route) else {
        bail!("unknown route '{}' (expected /, /login, or /register)", cli.route);
    };

    tracing::info!(route = entry.path(), "starting UI");
    let store = ConfigStore::new(config, path);
    runtime::run(store, entry)?;
    Ok(())
}
