//! Order status in the fulfilment lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfilment status of an order.
///
/// The wire representation is the lowercase name (`"pending"` etc.) and is
/// part of the external API contract.
///
/// The lifecycle is deliberately flat: any status may follow any other via
/// a status update. There are no terminal states and no transition table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order created, not yet picked up for processing.
    #[default]
    Pending,
    /// Order is being prepared or shipped.
    Processing,
    /// Order fulfilled.
    Completed,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Processing,
        Self::Completed,
        Self::Cancelled,
    ];

    /// The lowercase wire name of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
