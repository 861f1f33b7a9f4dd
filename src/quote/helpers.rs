//! Quote formatting helpers

use super::models::QuoteCalculation;

/// Produces a human-readable one-line summary of a quote.
///
/// Example output: `"3x Lamp, 1x Rug via Dakar Centre: delivery 10000.00, total 25000.00"`.
/// Amounts are rounded for display only.
pub fn format_quote_summary(quote: &QuoteCalculation) -> String {
    let items = if quote.items.is_empty() {
        "no items".to_string()
    } else {
        quote
            .items
            .iter()
            .map(|line| format!("{}x {}", line.quantity, line.name))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "{} via {}: delivery {:.2}, total {:.2}",
        items, quote.zone.name, quote.delivery_cost, quote.total_amount
    )
}
