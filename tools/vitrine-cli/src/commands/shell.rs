//! `vitrine shell` - interactive search session.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use dialoguer::Input;

use vitrine_catalog::{HttpCatalog, RetryPolicy};
use vitrine_search::{Outcome, RecordingWishlist, ResultsPresenter, SearchController};

use crate::context::Context;
use crate::presenter::TermPresenter;

/// Arguments for the shell command.
#[derive(Args)]
pub struct ShellArgs {
    /// Override the catalog base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

pub async fn run(args: ShellArgs, ctx: &Context) -> Result<()> {
    let mut config = ctx.config.search_config();
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    let catalog = HttpCatalog::new(config.base_url.clone())
        .with_retry(RetryPolicy::new(ctx.config.catalog.max_retries));

    let wishlist = Arc::new(RecordingWishlist::new());
    let mut controller = SearchController::new(&config).with_wishlist(wishlist.clone());
    let mut presenter = TermPresenter::new();

    ctx.output.header("Vitrine search");
    ctx.output.info(&format!("catalog: {}", config.base_url));
    ctx.output
        .info("type a query, +<id> to wishlist a result, quit to leave");

    loop {
        let line: String = Input::new()
            .with_prompt("search")
            .allow_empty(true)
            .interact_text()?;

        match line.trim() {
            "quit" | "exit" => break,
            command if command.starts_with('+') => match command[1..].trim().parse::<u64>() {
                Ok(id) => {
                    controller.add_to_wishlist(id);
                    ctx.output.success(&format!("wishlisted #{id}"));
                }
                Err(_) => ctx.output.warn("usage: +<product id>"),
            },
            _ => {
                // The query goes in verbatim; blank input is silently skipped.
                controller.set_query(&line);
                if controller.search(&catalog).await == Outcome::Applied {
                    presenter.render(controller.render_props());
                }
            }
        }
    }

    let ids = wishlist.ids();
    if ids.is_empty() {
        ctx.output.info("no items wishlisted this session");
    } else {
        let listed: Vec<String> = ids.iter().map(|id| format!("#{id}")).collect();
        ctx.output.success(&format!(
            "wishlisted {} item(s): {}",
            ids.len(),
            listed.join(", ")
        ));
    }

    Ok(())
}
