//! `vitrine search` - one-shot search.

use anyhow::{bail, Result};
use clap::Args;

use vitrine_catalog::{HttpCatalog, RetryPolicy};
use vitrine_core::config::ViewMode;
use vitrine_search::{Outcome, ResultsPresenter, SearchController};

use crate::context::Context;
use crate::presenter::TermPresenter;

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Query text
    pub query: String,

    /// Override the catalog base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override the result-shaping mode (plain or enriched)
    #[arg(long)]
    pub mode: Option<String>,

    /// Product ids to add to the wishlist after the search
    #[arg(long = "wishlist", value_delimiter = ',')]
    pub wishlist: Vec<u64>,
}

pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let mut config = ctx.config.search_config();
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(mode) = &args.mode {
        config.mode = parse_mode(mode)?;
    }

    ctx.output
        .debug(&format!("catalog endpoint: {}", config.base_url));

    let catalog = HttpCatalog::new(config.base_url.clone())
        .with_retry(RetryPolicy::new(ctx.config.catalog.max_retries));

    let mut controller = SearchController::new(&config);
    controller.set_query(&args.query);

    if controller.search(&catalog).await == Outcome::Skipped {
        ctx.output.warn("query is empty, nothing submitted");
        return Ok(());
    }

    if ctx.output.is_json() {
        match controller.last_error() {
            Some(err) => ctx.output.error(&err.to_string()),
            None => ctx.output.json(controller.results()),
        }
    } else {
        TermPresenter::new().render(controller.render_props());
    }

    for id in args.wishlist {
        controller.add_to_wishlist(id);
        ctx.output.success(&format!("wishlisted #{id}"));
    }

    Ok(())
}

/// Parse a view mode name.
fn parse_mode(value: &str) -> Result<ViewMode> {
    match value {
        "plain" => Ok(ViewMode::Plain),
        "enriched" => Ok(ViewMode::Enriched),
        other => bail!("unknown mode {other:?} (expected plain or enriched)"),
    }
}
