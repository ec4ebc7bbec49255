use crate::args::OutputFormat;
use crate::browse::{BrowseSession, ConsoleBrowseView, SessionOutcome};
use crate::presentation::presenters::present_browse_all;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::ui::stdin_prompter;
use anyhow::{Context, Result};
use log::debug;
use market_client::{Config, HttpMarketClient};
use market_types::normalize_query;

pub fn handle(config: &Config, query: Option<&str>, format: OutputFormat) -> Result<()> {
    let query = normalize_query(query);
    let client = HttpMarketClient::from_config(&config.api)
        .context("Failed to set up the marketplace client")?;
    let format = crate::presentation::OutputFormat::from(format);
    let renderer = ConsoleRenderer::detect(format);

    debug!("searching {} for {:?}", client.base_url(), query);

    if query.is_none() {
        renderer.render(present_browse_all())?;
    }

    let view = ConsoleBrowseView::new(&renderer);
    let mut session = BrowseSession::new(&client, stdin_prompter(format), view, query.as_deref());

    let outcome = session
        .run()
        .with_context(|| format!("Failed to browse {}", client.base_url()))?;

    match outcome {
        SessionOutcome::Aborted => debug!("input closed, leaving the browse session"),
        outcome => debug!("browse session ended: {:?}", outcome),
    }
    Ok(())
}
