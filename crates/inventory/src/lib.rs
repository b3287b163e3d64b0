//! Inventory record store and query engine.
//!
//! This crate contains the catalog and the read-only queries over it,
//! implemented purely as deterministic domain logic (no IO, no formatting).

pub mod catalog;
pub mod product;
pub mod query;
pub mod request;

pub use catalog::{Catalog, SEED_RECORDS};
pub use stockroom_core::{DomainError, DomainResult, ProductId};
pub use product::ProductRecord;
pub use query::{
    CategoryCount, CategorySummary, FilteredView, REORDER_MULTIPLIER, ReorderEntry, ReorderList,
    Threshold,
};
pub use request::{QueryKind, QueryOutcome, QueryRequest};
