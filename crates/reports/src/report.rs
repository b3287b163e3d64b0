//! Tabular text reports for query outcomes.

use tracing::debug;

use stockroom_core::{DomainError, DomainResult};
use stockroom_inventory::{CategorySummary, FilteredView, QueryKind, QueryOutcome, ReorderList};

use crate::table::{currency, row, rule};

const PRODUCT_RULE: usize = 60;
const CATEGORY_RULE: usize = 30;
const VALUE_RULE: usize = 30;
const REORDER_RULE: usize = 40;

const PRODUCT_COLUMNS: [(&str, usize); 5] = [
    ("Product ID", 12),
    ("Name", 20),
    ("Category", 15),
    ("Quantity", 10),
    ("Price", 10),
];
const CATEGORY_COLUMNS: [(&str, usize); 2] = [("Category", 20), ("Count", 10)];
const REORDER_COLUMNS: [(&str, usize); 2] = [("Product Name", 25), ("Reorder Quantity", 15)];

/// Render a report for `kind` from a query outcome.
///
/// `kind` must be one of the five report tags. `result` must be present and
/// must have been produced by the same kind of query. Empty collections render
/// an explicit "no results" line instead of an empty table.
pub fn format_report(kind: &str, result: Option<&QueryOutcome>) -> DomainResult<String> {
    let kind: QueryKind = kind.parse()?;
    let outcome =
        result.ok_or_else(|| DomainError::invalid_argument("report data cannot be absent"))?;

    if outcome.kind() != kind {
        return Err(DomainError::invalid_argument(format!(
            "report type {kind} cannot render a {} result",
            outcome.kind()
        )));
    }

    debug!(%kind, "rendering report");
    Ok(render(outcome))
}

/// Render an outcome with the layout of its own kind.
pub fn render(outcome: &QueryOutcome) -> String {
    let lines = match outcome {
        QueryOutcome::LowStock(view) => product_table(
            "Low Stock Items Report:",
            view,
            "No items below the specified threshold.",
        ),
        QueryOutcome::Search(view) => {
            product_table("Search Results:", view, "No matching items found.")
        }
        QueryOutcome::Categories(summary) => category_table(summary),
        QueryOutcome::Value(total) => vec![
            "Total Inventory Value Report:".to_string(),
            rule(VALUE_RULE),
            format!("Total Value: ${}", currency(*total)),
        ],
        QueryOutcome::Reorder(list) => reorder_table(list),
    };

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn product_table(title: &str, view: &FilteredView, empty: &str) -> Vec<String> {
    let mut lines = vec![title.to_string(), rule(PRODUCT_RULE)];
    if view.is_empty() {
        lines.push(empty.to_string());
        return lines;
    }

    lines.push(row(&PRODUCT_COLUMNS));
    lines.push(rule(PRODUCT_RULE));
    for r in view {
        let quantity = r.quantity.to_string();
        let price = format!("{:.2}", r.price);
        lines.push(row(&[
            (r.id.as_str(), PRODUCT_COLUMNS[0].1),
            (r.name.as_str(), PRODUCT_COLUMNS[1].1),
            (r.category.as_str(), PRODUCT_COLUMNS[2].1),
            (quantity.as_str(), PRODUCT_COLUMNS[3].1),
            (price.as_str(), PRODUCT_COLUMNS[4].1),
        ]));
    }
    lines
}

fn category_table(summary: &CategorySummary) -> Vec<String> {
    let mut lines = vec!["Category Summary Report:".to_string(), rule(CATEGORY_RULE)];
    if summary.is_empty() {
        lines.push("No categories found.".to_string());
        return lines;
    }

    lines.push(row(&CATEGORY_COLUMNS));
    lines.push(rule(CATEGORY_RULE));
    for entry in summary.iter() {
        let count = entry.count.to_string();
        lines.push(row(&[
            (entry.category.as_str(), CATEGORY_COLUMNS[0].1),
            (count.as_str(), CATEGORY_COLUMNS[1].1),
        ]));
    }
    lines
}

fn reorder_table(list: &ReorderList) -> Vec<String> {
    let mut lines = vec!["Reorder List Report:".to_string(), rule(REORDER_RULE)];
    if list.is_empty() {
        lines.push("No items need reordering.".to_string());
        return lines;
    }

    lines.push(row(&REORDER_COLUMNS));
    lines.push(rule(REORDER_RULE));
    for entry in list.iter() {
        let quantity = entry.reorder_quantity.to_string();
        lines.push(row(&[
            (entry.name.as_str(), REORDER_COLUMNS[0].1),
            (quantity.as_str(), REORDER_COLUMNS[1].1),
        ]));
    }
    lines
}
