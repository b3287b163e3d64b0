//! Dynamic query boundary: JSON requests in, tagged outcomes out.
//!
//! This is where loosely-typed input (a JSON object from the command line or a
//! test) is checked before it reaches the typed engine. A field of the wrong
//! JSON type is an `InvalidArgument`; a missing field is passed on as absent
//! and rejected by the engine operation itself.

use core::str::FromStr;

use serde::Serialize;
use serde_json::Value as JsonValue;

use stockroom_core::{DomainError, DomainResult};

use crate::catalog::Catalog;
use crate::query::{CategorySummary, FilteredView, ReorderList};

/// The five query/report kinds, identified by their tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    LowStock,
    Search,
    Categories,
    Value,
    Reorder,
}

impl QueryKind {
    pub const ALL: [QueryKind; 5] = [
        QueryKind::LowStock,
        QueryKind::Search,
        QueryKind::Categories,
        QueryKind::Value,
        QueryKind::Reorder,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QueryKind::LowStock => "low_stock",
            QueryKind::Search => "search",
            QueryKind::Categories => "categories",
            QueryKind::Value => "value",
            QueryKind::Reorder => "reorder",
        }
    }
}

impl core::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueryKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DomainError::invalid_argument(format!("invalid report type {s:?}")))
    }
}

/// A single query with its (not yet validated) parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryRequest {
    LowStock { threshold: Option<i64> },
    Search { term: Option<String> },
    Categories,
    Value,
    Reorder { threshold: Option<i64> },
}

impl QueryRequest {
    pub fn kind(&self) -> QueryKind {
        match self {
            QueryRequest::LowStock { .. } => QueryKind::LowStock,
            QueryRequest::Search { .. } => QueryKind::Search,
            QueryRequest::Categories => QueryKind::Categories,
            QueryRequest::Value => QueryKind::Value,
            QueryRequest::Reorder { .. } => QueryKind::Reorder,
        }
    }

    /// Build a request from `{"kind": "<tag>", "threshold": <int>}` /
    /// `{"kind": "search", "term": "<text>"}`.
    pub fn from_value(value: &JsonValue) -> DomainResult<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| DomainError::invalid_argument("query request must be a JSON object"))?;

        let kind: QueryKind = match obj.get("kind") {
            Some(JsonValue::String(tag)) => tag.parse()?,
            Some(_) => return Err(DomainError::invalid_argument("query kind must be a string")),
            None => return Err(DomainError::invalid_argument("query kind cannot be absent")),
        };

        Ok(match kind {
            QueryKind::LowStock => QueryRequest::LowStock {
                threshold: integer_field(obj.get("threshold"))?,
            },
            QueryKind::Search => QueryRequest::Search {
                term: string_field(obj.get("term"))?,
            },
            QueryKind::Categories => QueryRequest::Categories,
            QueryKind::Value => QueryRequest::Value,
            QueryKind::Reorder => QueryRequest::Reorder {
                threshold: integer_field(obj.get("threshold"))?,
            },
        })
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        let value: JsonValue = serde_json::from_str(json)
            .map_err(|e| DomainError::invalid_argument(format!("query request json: {e}")))?;
        Self::from_value(&value)
    }

    /// Run the request against a catalog.
    pub fn execute(&self, catalog: &Catalog) -> DomainResult<QueryOutcome> {
        Ok(match self {
            QueryRequest::LowStock { threshold } => {
                QueryOutcome::LowStock(catalog.find_low_stock(*threshold)?)
            }
            QueryRequest::Search { term } => {
                QueryOutcome::Search(catalog.search_by_name(term.as_deref())?)
            }
            QueryRequest::Categories => QueryOutcome::Categories(catalog.aggregate_by_category()),
            QueryRequest::Value => QueryOutcome::Value(catalog.total_inventory_value()?),
            QueryRequest::Reorder { threshold } => {
                QueryOutcome::Reorder(catalog.derive_reorder_list(*threshold)?)
            }
        })
    }
}

fn integer_field(field: Option<&JsonValue>) -> DomainResult<Option<i64>> {
    match field {
        None | Some(JsonValue::Null) => Ok(None),
        Some(v) => v
            .as_i64()
            .map(Some)
            .ok_or_else(|| DomainError::invalid_argument("low stock threshold must be an integer")),
    }
}

fn string_field(field: Option<&JsonValue>) -> DomainResult<Option<String>> {
    match field {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DomainError::invalid_argument("search term must be a string")),
    }
}

/// Result of a query, tagged with the kind that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum QueryOutcome {
    LowStock(FilteredView),
    Search(FilteredView),
    Categories(CategorySummary),
    Value(f64),
    Reorder(ReorderList),
}

impl QueryOutcome {
    pub fn kind(&self) -> QueryKind {
        match self {
            QueryOutcome::LowStock(_) => QueryKind::LowStock,
            QueryOutcome::Search(_) => QueryKind::Search,
            QueryOutcome::Categories(_) => QueryKind::Categories,
            QueryOutcome::Value(_) => QueryKind::Value,
            QueryOutcome::Reorder(_) => QueryKind::Reorder,
        }
    }
}
