//! Error types for the counter.

use crate::model::{BalanceRecordId, MenuId, OrderId, OrderStatus};
use ledger_actor::FrameworkError;
use std::fmt::Display;
use thiserror::Error;

/// Every way a counter command or query can be rejected.
///
/// A rejected command leaves the ledger exactly as it was: the ledger actor rolls back
/// whatever the command wrote before failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    /// A line asks for more than the item has in stock.
    #[error("Insufficient stock for {item} ({menu_id}): {available} available")]
    InsufficientStock {
        menu_id: MenuId,
        item: String,
        available: u16,
    },

    #[error("Insufficient balance: {required} required, {available} available")]
    InsufficientBalance { required: i64, available: i64 },

    #[error("Top-up of {nominal} is below the minimum of {minimum}")]
    BelowMinimumTopUp { nominal: i64, minimum: i64 },

    /// The order is still queued and cannot be completed.
    #[error("Order {0} is still on the waiting list")]
    OrderNotReady(OrderId),

    /// The order is already in the kitchen.
    #[error("Order {0} is in process and cannot be cancelled")]
    OrderNotCancellable(OrderId),

    #[error("Order {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Balance record {0} is already completed")]
    AlreadyCompleted(BalanceRecordId),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The command itself is malformed (empty order, duplicate email, ...).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The ledger actor is gone.
    #[error("Ledger unavailable: {0}")]
    Unavailable(#[from] FrameworkError),
}

impl CounterError {
    pub fn not_found(entity: &'static str, id: impl Display) -> Self {
        CounterError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        CounterError::InvalidRequest(reason.into())
    }

    /// Whether a caller may retry the same command unchanged.
    ///
    /// Only lookups can change outcome on retry; business-rule rejections never do.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CounterError::NotFound { .. })
    }
}
