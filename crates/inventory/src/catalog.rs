//! Record store: the ordered, read-only collection of product records.

use std::collections::HashSet;

use stockroom_core::{DomainError, DomainResult, ProductId};

use crate::product::ProductRecord;

/// Built-in seed data: `(id, name, category, quantity, price)`.
pub const SEED_RECORDS: &[(&str, &str, &str, i64, f64)] = &[
    ("P001", "Rice 5kg", "Grocery", 45, 250.00),
    ("P002", "Wheat Flour 1kg", "Grocery", 8, 60.00),
    ("P003", "Mobile Charger", "Electronics", 15, 300.00),
];

/// Ordered sequence of product records.
///
/// Constructed once and handed to whoever runs queries. There are no write
/// operations; every query borrows the catalog immutably.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<ProductRecord>,
}

impl Catalog {
    /// An empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog, checking structural invariants.
    ///
    /// Ids must be unique; names and categories must be non-blank. Numeric
    /// integrity (negative quantity/price) is left to the valuation check so
    /// that it is reported where the data is actually consumed.
    pub fn from_records(records: Vec<ProductRecord>) -> DomainResult<Self> {
        let mut seen: HashSet<&ProductId> = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(&record.id) {
                return Err(DomainError::invalid_state(format!(
                    "duplicate product id {}",
                    record.id
                )));
            }
            if record.name.trim().is_empty() {
                return Err(DomainError::invalid_state(format!(
                    "product {} has an empty name",
                    record.id
                )));
            }
            if record.category.trim().is_empty() {
                return Err(DomainError::invalid_state(format!(
                    "product {} has an empty category",
                    record.id
                )));
            }
        }

        Ok(Self { records })
    }

    /// The catalog the program starts with when no file is configured.
    pub fn seed() -> DomainResult<Self> {
        let records = SEED_RECORDS
            .iter()
            .map(|&(id, name, category, quantity, price)| {
                Ok(ProductRecord::new(
                    ProductId::new(id)?,
                    name,
                    category,
                    quantity,
                    price,
                ))
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Self::from_records(records)
    }

    /// Parse a JSON array of product records.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)
            .map_err(|e| DomainError::invalid_argument(format!("catalog json: {e}")))?;
        Self::from_records(records)
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

    pub fn get(&self, id: &ProductId) -> Option<&ProductRecord> {
        self.records.iter().find(|r| &r.id == id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProductRecord;
    type IntoIter = std::slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
