//! Order domain errors.

use std::fmt;

/// Errors that can occur when constructing or storing orders.
///
/// A query miss ("no order with that id") is deliberately not represented
/// here: `get`, `update_status` and `delete` report it through their return
/// values (`Option` / `bool`), because not-found is a normal query outcome,
/// not a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// An order must contain at least one line item.
    EmptyItems,
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyItems => {
                write!(f, "An order must contain at least one item")
            }
        }
    }
}

impl std::error::Error for OrderError {}
