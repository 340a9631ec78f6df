//! Terminal presenter for search results.

use console::style;

use vitrine_search::{RenderProps, ResultsPresenter};

/// Renders result sets as a terminal table.
///
/// A pure projection of the props: prints, never mutates.
pub struct TermPresenter;

impl TermPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TermPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsPresenter for TermPresenter {
    fn render(&mut self, props: RenderProps<'_>) {
        if let Some(err) = props.error {
            eprintln!("{} {}", style("✗").red(), style(err).red());
            if props.results.is_empty() {
                return;
            }
            eprintln!("{}", style("showing previous results").dim());
        }

        if props.results.is_empty() {
            println!("{}", style("no results").dim());
            return;
        }

        let title_width = props
            .results
            .iter()
            .map(|item| item.title.chars().count())
            .max()
            .unwrap_or(0)
            .clamp(5, 40);

        for item in props.results {
            let price = match &item.price_display {
                Some(display) => display.clone(),
                None => format!("{:.2}", item.price.to_decimal()),
            };
            println!(
                "  {}  {:title_width$}  {}",
                style(format!("#{:<5}", item.id)).dim(),
                item.title,
                style(price).green(),
            );
        }

        if let Some(total) = props.total {
            println!(
                "  {} {}",
                style("total:").bold(),
                style(total).bold().green()
            );
        }
    }
}
