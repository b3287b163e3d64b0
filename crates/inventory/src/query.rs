//! Query engine: read-only traversals over a [`Catalog`].
//!
//! Each operation is a single pass with a predicate or accumulator. The
//! fallible entry points (`find_low_stock`, `search_by_name`,
//! `derive_reorder_list`) accept possibly-absent input and validate it; the
//! typed variants (`low_stock`, `search`, `reorder_list`) take already
//! validated values. Only `reorder_list` can still fail, on arithmetic
//! overflow.

use core::str::FromStr;
use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use stockroom_core::{DomainError, DomainResult};

use crate::catalog::Catalog;
use crate::product::ProductRecord;

/// Reorder quantity is `REORDER_MULTIPLIER × threshold − quantity`.
pub const REORDER_MULTIPLIER: i64 = 3;

/// Inclusive upper bound on quantity that counts as "low stock".
///
/// Always strictly positive. No upper bound is enforced here; interactive
/// callers apply their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Threshold(i64);

impl Threshold {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::out_of_range(format!(
                "low stock threshold must be positive (got {value})"
            )));
        }
        Ok(Self(value))
    }

    /// Validate a threshold that may not have been supplied at all.
    pub fn from_input(value: Option<i64>) -> DomainResult<Self> {
        match value {
            Some(v) => Self::new(v),
            None => Err(DomainError::invalid_argument(
                "low stock threshold cannot be absent",
            )),
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for Threshold {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| {
            DomainError::invalid_argument(format!("low stock threshold must be an integer (got {s:?})"))
        })?;
        Self::new(value)
    }
}

impl core::fmt::Display for Threshold {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Ordered subsequence of the catalog matching a predicate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilteredView {
    records: Vec<ProductRecord>,
}

impl FilteredView {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a FilteredView {
    type Item = &'a ProductRecord;
    type IntoIter = std::slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// One row of a [`CategorySummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Category → item count, in first-seen catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategorySummary {
    entries: Vec<CategoryCount>,
}

impl CategorySummary {
    /// Pair up a column of category names with a column of counts.
    ///
    /// Columns of differing length are paired up to the shorter one and the
    /// mismatch is logged as a data-integrity warning.
    pub fn from_columns(categories: Vec<String>, counts: Vec<usize>) -> Self {
        if categories.len() != counts.len() {
            warn!(
                categories = categories.len(),
                counts = counts.len(),
                "category summary columns differ in length; extra entries dropped"
            );
        }
        let entries = categories
            .into_iter()
            .zip(counts)
            .map(|(category, count)| CategoryCount { category, count })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CategoryCount] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryCount> {
        self.entries.iter()
    }

    pub fn get(&self, category: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the size of the summarized catalog.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }
}

/// Suggested replenishment for one low-stock product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReorderEntry {
    pub name: String,
    /// May be zero or negative; no clamping is applied.
    pub reorder_quantity: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReorderList {
    entries: Vec<ReorderEntry>,
}

impl ReorderList {
    /// Pair up a column of names with a column of quantities, stopping at the
    /// shorter one.
    pub fn from_columns(names: Vec<String>, quantities: Vec<i64>) -> Self {
        if names.len() != quantities.len() {
            warn!(
                names = names.len(),
                quantities = quantities.len(),
                "reorder list columns differ in length; extra entries dropped"
            );
        }
        let entries = names
            .into_iter()
            .zip(quantities)
            .map(|(name, reorder_quantity)| ReorderEntry {
                name,
                reorder_quantity,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ReorderEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReorderEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Catalog {
    /// Every record with `quantity <= threshold`, in catalog order.
    pub fn find_low_stock(&self, threshold: impl Into<Option<i64>>) -> DomainResult<FilteredView> {
        let threshold = Threshold::from_input(threshold.into())?;
        Ok(self.low_stock(threshold))
    }

    pub fn low_stock(&self, threshold: Threshold) -> FilteredView {
        let t = threshold.get();
        let view = FilteredView::new(
            self.iter()
                .filter(|r| r.quantity <= t)
                .cloned()
                .collect(),
        );
        debug!(threshold = t, matched = view.len(), "low-stock query");
        view
    }

    /// Case-insensitive substring match on product names.
    ///
    /// An empty term matches every record.
    pub fn search_by_name<'a>(&self, term: impl Into<Option<&'a str>>) -> DomainResult<FilteredView> {
        match term.into() {
            Some(term) => Ok(self.search(term)),
            None => Err(DomainError::invalid_argument("search term cannot be absent")),
        }
    }

    pub fn search(&self, term: &str) -> FilteredView {
        let needle = term.to_lowercase();
        let view = FilteredView::new(
            self.iter()
                .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        );
        debug!(term, matched = view.len(), "name search");
        view
    }

    /// Count records per category, preserving first-seen order.
    pub fn aggregate_by_category(&self) -> CategorySummary {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<CategoryCount> = Vec::new();

        for record in self {
            match index.get(record.category.as_str()) {
                Some(&pos) => entries[pos].count += 1,
                None => {
                    index.insert(record.category.as_str(), entries.len());
                    entries.push(CategoryCount {
                        category: record.category.clone(),
                        count: 1,
                    });
                }
            }
        }

        debug!(categories = entries.len(), "category aggregation");
        CategorySummary { entries }
    }

    /// Σ(quantity × price) over the whole catalog.
    ///
    /// Fails with `InvalidState` if any record carries a negative quantity or
    /// a negative/non-finite price, or if the sum itself overflows; no partial
    /// sum is returned.
    pub fn total_inventory_value(&self) -> DomainResult<f64> {
        let mut total = 0.0_f64;

        for record in self {
            if record.quantity < 0 {
                warn!(product = %record.id, quantity = record.quantity, "integrity check failed");
                return Err(DomainError::invalid_state(format!(
                    "quantity cannot be negative (product {})",
                    record.id
                )));
            }
            if !record.price.is_finite() || record.price < 0.0 {
                warn!(product = %record.id, price = record.price, "integrity check failed");
                return Err(DomainError::invalid_state(format!(
                    "price must be a non-negative number (product {})",
                    record.id
                )));
            }
            total += record.line_value();
        }

        if !total.is_finite() {
            warn!(records = self.len(), "inventory value overflows");
            return Err(DomainError::invalid_state("inventory value overflows"));
        }

        debug!(total, records = self.len(), "inventory valuation");
        Ok(total)
    }

    /// Reorder suggestions for every low-stock record, in catalog order.
    pub fn derive_reorder_list(&self, threshold: impl Into<Option<i64>>) -> DomainResult<ReorderList> {
        let threshold = Threshold::from_input(threshold.into())?;
        self.reorder_list(threshold)
    }

    /// Fails with `OutOfRange` when `3 × threshold` does not fit in an `i64`,
    /// and with `InvalidState` when a corrupt quantity pushes a reorder
    /// quantity out of range.
    pub fn reorder_list(&self, threshold: Threshold) -> DomainResult<ReorderList> {
        let t = threshold.get();
        let target = t.checked_mul(REORDER_MULTIPLIER).ok_or_else(|| {
            DomainError::out_of_range(format!("reorder target for threshold {t} overflows"))
        })?;

        let entries = self
            .iter()
            .filter(|r| r.quantity <= t)
            .map(|r| {
                let reorder_quantity = target.checked_sub(r.quantity).ok_or_else(|| {
                    warn!(product = %r.id, quantity = r.quantity, "reorder quantity overflows");
                    DomainError::invalid_state(format!(
                        "reorder quantity overflows (product {})",
                        r.id
                    ))
                })?;
                Ok(ReorderEntry {
                    name: r.name.clone(),
                    reorder_quantity,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        debug!(threshold = t, entries = entries.len(), "reorder list");
        Ok(ReorderList { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ProductId;

    fn seed() -> Catalog {
        Catalog::seed().unwrap()
    }

    fn record(id: &str, name: &str, category: &str, quantity: i64, price: f64) -> ProductRecord {
        ProductRecord::new(ProductId::new(id).unwrap(), name, category, quantity, price)
    }

    #[test]
    fn low_stock_returns_matching_records_in_order() {
        let view = seed().find_low_stock(15).unwrap();
        assert_eq!(view.ids(), vec!["P002", "P003"]);
    }

    #[test]
    fn low_stock_threshold_is_inclusive() {
        let view = seed().find_low_stock(8).unwrap();
        assert_eq!(view.ids(), vec!["P002"]);

        let view = seed().find_low_stock(7).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn low_stock_above_every_quantity_returns_whole_catalog() {
        let catalog = seed();
        let view = catalog.find_low_stock(55).unwrap();
        assert_eq!(view.records(), catalog.records());
    }

    #[test]
    fn low_stock_accepts_values_above_one_hundred() {
        let view = seed().find_low_stock(1_000).unwrap();
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn low_stock_rejects_absent_and_non_positive() {
        let catalog = seed();

        let err = catalog.find_low_stock(None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));

        let err = catalog.find_low_stock(-5).unwrap_err();
        assert!(matches!(err, DomainError::OutOfRange(_)));

        let err = catalog.find_low_stock(0).unwrap_err();
        assert!(matches!(err, DomainError::OutOfRange(_)));
    }

    #[test]
    fn low_stock_on_empty_catalog_is_empty() {
        let view = Catalog::empty().find_low_stock(10).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn threshold_parses_console_text() {
        assert_eq!("  12 ".parse::<Threshold>().unwrap().get(), 12);

        let err = "ten".parse::<Threshold>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));

        let err = "10.5".parse::<Threshold>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));

        let err = "-3".parse::<Threshold>().unwrap_err();
        assert!(matches!(err, DomainError::OutOfRange(_)));
    }

    #[test]
    fn empty_search_term_matches_everything() {
        let catalog = seed();
        let view = catalog.search_by_name("").unwrap();
        assert_eq!(view.len(), catalog.len());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = seed();
        let lower = catalog.search_by_name("rice").unwrap();
        let upper = catalog.search_by_name("RICE").unwrap();
        let mixed = catalog.search_by_name("Rice").unwrap();
        assert_eq!(lower.ids(), vec!["P001"]);
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);

        // "r" appears in "Rice 5kg", "Wheat Flour 1kg" and "Mobile Charger".
        let view = catalog.search_by_name("r").unwrap();
        assert_eq!(view.ids(), vec!["P001", "P002", "P003"]);
    }

    #[test]
    fn search_without_match_is_empty() {
        let view = seed().search_by_name("xyz123nonexistent").unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn search_rejects_absent_term() {
        let err = seed().search_by_name(None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn categories_in_first_seen_order() {
        let summary = seed().aggregate_by_category();
        let cats: Vec<(&str, usize)> = summary
            .iter()
            .map(|e| (e.category.as_str(), e.count))
            .collect();
        assert_eq!(cats, vec![("Grocery", 2), ("Electronics", 1)]);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.get("Electronics"), Some(1));
        assert_eq!(summary.get("Toys"), None);
    }

    #[test]
    fn single_category_catalog_collapses_to_one_entry() {
        let catalog = Catalog::from_records(vec![
            record("A", "One", "Same", 1, 1.0),
            record("B", "Two", "Same", 2, 1.0),
            record("C", "Three", "Same", 3, 1.0),
        ])
        .unwrap();
        let summary = catalog.aggregate_by_category();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary.entries()[0].category, "Same");
        assert_eq!(summary.entries()[0].count, 3);
    }

    #[test]
    fn seed_total_value() {
        let total = seed().total_inventory_value().unwrap();
        assert!((total - 16_230.00).abs() < 1e-9);
    }

    #[test]
    fn empty_catalog_total_value_is_zero() {
        assert_eq!(Catalog::empty().total_inventory_value().unwrap(), 0.0);
    }

    #[test]
    fn zero_quantities_give_zero_value() {
        let catalog = Catalog::from_records(vec![
            record("A", "One", "X", 0, 250.0),
            record("B", "Two", "X", 0, 60.0),
        ])
        .unwrap();
        assert_eq!(catalog.total_inventory_value().unwrap(), 0.0);
    }

    #[test]
    fn large_quantity_is_valued_exactly() {
        let catalog = Catalog::from_records(vec![
            record("P001", "Rice 5kg", "Grocery", 1_000_000, 250.00),
            record("P002", "Wheat Flour 1kg", "Grocery", 8, 60.00),
            record("P003", "Mobile Charger", "Electronics", 15, 300.00),
        ])
        .unwrap();
        let expected = 1_000_000.0 * 250.00 + 8.0 * 60.00 + 15.0 * 300.00;
        assert!((catalog.total_inventory_value().unwrap() - expected).abs() < 0.01);
    }

    #[test]
    fn negative_price_is_invalid_state() {
        let catalog = Catalog::from_records(vec![
            record("P001", "Rice 5kg", "Grocery", 45, -100.0),
            record("P002", "Wheat Flour 1kg", "Grocery", 8, 60.00),
        ])
        .unwrap();
        let err = catalog.total_inventory_value().unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[test]
    fn negative_quantity_is_invalid_state() {
        let catalog = Catalog::from_records(vec![
            record("P001", "Rice 5kg", "Grocery", 45, 250.0),
            record("P002", "Wheat Flour 1kg", "Grocery", -10, 60.00),
        ])
        .unwrap();
        let err = catalog.total_inventory_value().unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[test]
    fn non_finite_price_is_invalid_state() {
        let catalog =
            Catalog::from_records(vec![record("P001", "Rice 5kg", "Grocery", 1, f64::NAN)]).unwrap();
        let err = catalog.total_inventory_value().unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[test]
    fn overflowing_total_is_invalid_state() {
        let catalog = Catalog::from_records(vec![
            record("P001", "Bulk", "Grocery", i64::MAX, 1e300),
            record("P002", "Wheat Flour 1kg", "Grocery", 8, 60.00),
        ])
        .unwrap();
        let err = catalog.total_inventory_value().unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[test]
    fn reorder_list_for_seed_threshold_ten() {
        let list = seed().derive_reorder_list(10).unwrap();
        assert_eq!(
            list.entries(),
            &[ReorderEntry {
                name: "Wheat Flour 1kg".to_string(),
                reorder_quantity: 22,
            }]
        );
    }

    #[test]
    fn reorder_quantities_follow_formula_for_large_threshold() {
        let catalog = seed();
        let list = catalog.derive_reorder_list(55).unwrap();
        let got: Vec<(&str, i64)> = list
            .iter()
            .map(|e| (e.name.as_str(), e.reorder_quantity))
            .collect();
        assert_eq!(
            got,
            vec![
                ("Rice 5kg", 165 - 45),
                ("Wheat Flour 1kg", 165 - 8),
                ("Mobile Charger", 165 - 15),
            ]
        );
    }

    #[test]
    fn reorder_quantity_is_not_clamped() {
        let catalog = Catalog::from_records(vec![
            record("A", "At threshold", "X", 5, 1.0),
            record("B", "Corrupt", "X", -20, 1.0),
        ])
        .unwrap();
        let list = catalog.derive_reorder_list(5).unwrap();
        let quantities: Vec<i64> = list.iter().map(|e| e.reorder_quantity).collect();
        assert_eq!(quantities, vec![10, 35]);
    }

    #[test]
    fn unrepresentable_reorder_target_is_out_of_range() {
        let err = seed().derive_reorder_list(i64::MAX).unwrap_err();
        assert!(matches!(err, DomainError::OutOfRange(_)));

        let largest = i64::MAX / REORDER_MULTIPLIER;
        let list = seed().derive_reorder_list(largest).unwrap();
        assert_eq!(list.entries()[0].reorder_quantity, largest * REORDER_MULTIPLIER - 45);
    }

    #[test]
    fn reorder_quantity_overflow_from_corrupt_quantity_is_invalid_state() {
        let catalog =
            Catalog::from_records(vec![record("A", "Corrupt", "X", i64::MIN, 1.0)]).unwrap();
        let err = catalog.derive_reorder_list(1).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[test]
    fn reorder_rejects_zero_negative_and_absent() {
        let catalog = seed();
        assert!(matches!(
            catalog.derive_reorder_list(0).unwrap_err(),
            DomainError::OutOfRange(_)
        ));
        assert!(matches!(
            catalog.derive_reorder_list(-5).unwrap_err(),
            DomainError::OutOfRange(_)
        ));
        assert!(matches!(
            catalog.derive_reorder_list(None).unwrap_err(),
            DomainError::InvalidArgument(_)
        ));
    }

    #[test]
    fn columns_of_unequal_length_pair_to_shortest() {
        let summary = CategorySummary::from_columns(
            vec!["Grocery".to_string(), "Electronics".to_string()],
            vec![2],
        );
        assert_eq!(summary.len(), 1);
        assert_eq!(summary.get("Grocery"), Some(2));

        let list = ReorderList::from_columns(vec!["A".to_string()], vec![3, 4, 5]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].reorder_quantity, 3);
    }

    #[test]
    fn queries_leave_catalog_untouched() {
        let catalog = seed();
        let before = catalog.clone();

        let a = catalog.find_low_stock(20).unwrap();
        let b = catalog.find_low_stock(20).unwrap();
        assert_eq!(a, b);
        assert_eq!(catalog.search("o"), catalog.search("o"));
        assert_eq!(catalog.aggregate_by_category(), catalog.aggregate_by_category());
        assert_eq!(
            catalog.total_inventory_value().unwrap(),
            catalog.total_inventory_value().unwrap()
        );
        assert_eq!(
            catalog.derive_reorder_list(20).unwrap(),
            catalog.derive_reorder_list(20).unwrap()
        );

        assert_eq!(catalog, before);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_catalog() -> impl Strategy<Value = Catalog> {
            prop::collection::vec(
                (
                    "[A-Za-z][A-Za-z0-9 ]{0,15}",
                    prop::sample::select(vec!["Grocery", "Electronics", "Toys", "Garden"]),
                    0i64..200,
                    0u32..100_000,
                ),
                0..30,
            )
            .prop_map(|rows| {
                let records = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, (name, category, quantity, cents))| {
                        record(&format!("P{i:03}"), &name, category, quantity, cents as f64 / 100.0)
                    })
                    .collect();
                Catalog::from_records(records).unwrap()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: low-stock is exactly the ordered subsequence with quantity <= t.
            #[test]
            fn low_stock_is_ordered_subsequence(catalog in arb_catalog(), t in 1i64..250) {
                let view = catalog.find_low_stock(t).unwrap();
                let expected: Vec<ProductRecord> = catalog
                    .iter()
                    .filter(|r| r.quantity <= t)
                    .cloned()
                    .collect();
                prop_assert_eq!(view.records(), expected.as_slice());

                if let Some(max) = catalog.iter().map(|r| r.quantity).max() {
                    if t >= max {
                        prop_assert_eq!(view.len(), catalog.len());
                    }
                }
                if let Some(min) = catalog.iter().map(|r| r.quantity).min() {
                    if t < min {
                        prop_assert!(view.is_empty());
                    }
                }
            }

            /// Property: search ignores ASCII case.
            #[test]
            fn search_ignores_case(catalog in arb_catalog(), term in "[A-Za-z0-9 ]{0,4}") {
                let lower = catalog.search_by_name(term.to_lowercase().as_str()).unwrap();
                let upper = catalog.search_by_name(term.to_uppercase().as_str()).unwrap();
                prop_assert_eq!(lower, upper);
            }

            /// Property: category counts sum to catalog size and cover every category present.
            #[test]
            fn category_counts_cover_catalog(catalog in arb_catalog()) {
                let summary = catalog.aggregate_by_category();
                prop_assert_eq!(summary.total(), catalog.len());

                let mut present: Vec<&str> = catalog.iter().map(|r| r.category.as_str()).collect();
                present.sort_unstable();
                present.dedup();
                let mut summarized: Vec<&str> = summary.iter().map(|e| e.category.as_str()).collect();
                summarized.sort_unstable();
                prop_assert_eq!(present, summarized);
            }

            /// Property: reorder entries line up with low-stock records.
            #[test]
            fn reorder_matches_low_stock(catalog in arb_catalog(), t in 1i64..250) {
                let low = catalog.find_low_stock(t).unwrap();
                let list = catalog.derive_reorder_list(t).unwrap();
                prop_assert_eq!(low.len(), list.len());
                for (record, entry) in low.iter().zip(list.iter()) {
                    prop_assert_eq!(&record.name, &entry.name);
                    prop_assert_eq!(entry.reorder_quantity, REORDER_MULTIPLIER * t - record.quantity);
                }
            }
        }
    }
}
