use super::args::{Cli, Commands, LogLevel};
use super::handlers;
use crate::presentation::presenters::present_guidance;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Context, Result};
use market_client::Config;
use market_client::config::resolve_config_path;

/// Initialise `env_logger` at `level`; `RUST_LOG` takes precedence when set.
pub fn init_logging(level: LogLevel) {
    let _ = env_logger::Builder::new()
        .filter_level(level.into())
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        let renderer = ConsoleRenderer::detect(cli.format.into());
        return renderer.render(present_guidance());
    };

    match command {
        Commands::Search { query } => {
            let config_path = resolve_config_path(cli.config.as_deref())?;
            let config = Config::load_from(&config_path)
                .with_context(|| format!("Failed to load config from {}", config_path.display()))?
                .with_overrides(cli.api_url.as_deref());

            handlers::search::handle(&config, query.as_deref(), cli.format)
        }
    }
}
