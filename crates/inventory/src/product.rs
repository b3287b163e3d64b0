use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;

/// A single product in the catalog.
///
/// Fields are public read-model style: the engine only ever reads them.
/// `quantity` is signed so that corrupted data stays representable and is
/// caught by the integrity check in [`Catalog::total_inventory_value`].
///
/// [`Catalog::total_inventory_value`]: crate::Catalog::total_inventory_value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    /// Unit price in currency units (e.g. `250.00`).
    pub price: f64,
}

impl ProductRecord {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            quantity,
            price,
        }
    }

    /// `quantity × price` for this record, without integrity checks.
    pub fn line_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}
