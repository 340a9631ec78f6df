//! Fetch-to-view-model transformation.

use vitrine_core::config::ViewMode;
use vitrine_core::money::{Money, PriceFormat};
use vitrine_core::product::{RawProduct, ResultItem, ResultSet};

/// Shape a fetched product sequence into a renderable [`ResultSet`].
///
/// Server order is preserved. In enriched mode each item gains a
/// locale-formatted price and the total accumulates in the same pass;
/// in plain mode both are absent.
pub fn build_result_set(raw: Vec<RawProduct>, mode: ViewMode, format: &PriceFormat) -> ResultSet {
    let currency = format.currency();
    match mode {
        ViewMode::Plain => ResultSet {
            items: raw
                .into_iter()
                .map(|p| ResultItem {
                    id: p.id,
                    title: p.title,
                    price: Money::from_decimal(p.price, currency),
                    price_display: None,
                })
                .collect(),
            total: None,
        },
        ViewMode::Enriched => {
            let mut total = Money::zero(currency);
            let items = raw
                .into_iter()
                .map(|p| {
                    let price = Money::from_decimal(p.price, currency);
                    total = total + price;
                    ResultItem {
                        id: p.id,
                        title: p.title,
                        price,
                        price_display: Some(format.format(price)),
                    }
                })
                .collect();
            ResultSet {
                items,
                total: Some(total),
            }
        }
    }
}
