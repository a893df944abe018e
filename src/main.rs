use anyhow::Context;
use clap::Parser;
use octofit::config::{Config, OriginOverrides};
use octofit::fetch::{ResourceClient, TransportTimeouts};
use octofit::logging::init_tracing;
use octofit::resource::ResourceKind;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "octofit", version, about = "Terminal client for the OctoFit Tracker REST API")]
struct Cli {
    /// Service origin, e.g. http://localhost:8000 (overrides env and config)
    #[arg(long, value_name = "URL")]
    origin: Option<String>,

    /// Config file path (default: <config_dir>/octofit/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Collection shown on startup
    #[arg(long, value_enum, value_name = "RESOURCE")]
    view: Option<ResourceKind>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let origin = config.resolve_origin(&OriginOverrides::from_env(cli.origin))?;
    let initial = cli.view.unwrap_or(config.ui.default_view);
    tracing::info!(%origin, view = initial.name(), "Starting OctoFit client");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let client = ResourceClient::new(origin, TransportTimeouts::from(&config.service))?;

    let result = octofit::ui::runtime::run(client, &config.ui, initial, runtime.handle());
    runtime.shutdown_timeout(Duration::from_millis(200));
    result.context("terminal UI failed")?;
    Ok(())
}
