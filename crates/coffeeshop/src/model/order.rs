//! Orders and their line items.
//!
//! An order moves through a small state machine:
//!
//! ```text
//!  admission ──► in-process ──complete──► completed
//!      │             ▲
//!      ▼             │ promotion (oldest first)
//!  waiting-list ─────┘
//!      │
//!      └──cancel──► cancelled
//! ```
//!
//! [`Order::check_transition`] is the single place that decides which moves are legal.

use crate::error::CounterError;
use crate::model::{MenuId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle state of an order. Declaration order is the display order of status groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    InProcess,
    WaitingList,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::InProcess => "in-process",
            OrderStatus::WaitingList => "waiting-list",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order. Name and price are snapshots taken at admission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: OrderId,
    pub menu_id: MenuId,
    pub menu_name: String,
    pub quantity: u16,
    pub unit_price: i64,
}

impl OrderItem {
    pub fn subtotal(&self) -> i64 {
        self.unit_price * i64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// The paying account. Admission always sets it; an order without one cannot be refunded.
    pub user_id: Option<UserId>,
    pub customer_name: String,
    pub total_bill: i64,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub created_date: DateTime<Utc>,
    pub paid_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub cancelled_date: Option<DateTime<Utc>>,
}

impl Order {
    /// Checks that this order may move to `to`.
    ///
    /// # Errors
    /// - `OrderNotReady` when completing an order that is still queued
    /// - `OrderNotCancellable` when cancelling an order already being prepared
    /// - `InvalidTransition` for same-state moves and anything leaving a terminal state
    pub fn check_transition(&self, to: OrderStatus) -> Result<(), CounterError> {
        use OrderStatus::*;
        match (self.status, to) {
            (InProcess, Completed) | (WaitingList, Cancelled) | (WaitingList, InProcess) => Ok(()),
            (WaitingList, Completed) => Err(CounterError::OrderNotReady(self.id)),
            (InProcess, Cancelled) => Err(CounterError::OrderNotCancellable(self.id)),
            (from, to) => Err(CounterError::InvalidTransition {
                id: self.id,
                from,
                to,
            }),
        }
    }

    pub fn quantity_of(&self, menu_id: MenuId) -> u16 {
        self.items
            .iter()
            .filter(|item| item.menu_id == menu_id)
            .map(|item| item.quantity)
            .sum()
    }
}

/// A requested line: which item and how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_id: MenuId,
    pub quantity: u16,
}

impl OrderLine {
    pub fn new(menu_id: MenuId, quantity: u16) -> Self {
        Self { menu_id, quantity }
    }
}

/// What the caller gets back from a successful admission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    pub total_bill: i64,
    pub status: OrderStatus,
    /// 1-based place in the waiting list, only for `waiting-list` orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiting_position: Option<usize>,
}

/// Result of completing an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub order_id: OrderId,
    /// The waiting-list order moved to `in-process`, if any was queued.
    pub promoted: Option<OrderId>,
}

/// Result of cancelling a waiting-list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cancellation {
    pub order_id: OrderId,
    pub refund: i64,
    pub balance_record: crate::model::BalanceRecordId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: OrderStatus) -> Order {
        Order {
            id: OrderId(1),
            user_id: Some(UserId(1)),
            customer_name: "Alice".into(),
            total_bill: 0,
            status,
            items: vec![],
            created_date: Utc::now(),
            paid_date: None,
            completed_date: None,
            cancelled_date: None,
        }
    }

    #[test]
    fn legal_transitions() {
        assert!(order(OrderStatus::InProcess)
            .check_transition(OrderStatus::Completed)
            .is_ok());
        assert!(order(OrderStatus::WaitingList)
            .check_transition(OrderStatus::Cancelled)
            .is_ok());
        assert!(order(OrderStatus::WaitingList)
            .check_transition(OrderStatus::InProcess)
            .is_ok());
    }

    #[test]
    fn queued_order_is_not_ready() {
        assert_eq!(
            order(OrderStatus::WaitingList).check_transition(OrderStatus::Completed),
            Err(CounterError::OrderNotReady(OrderId(1)))
        );
    }

    #[test]
    fn order_in_the_kitchen_cannot_be_cancelled() {
        assert_eq!(
            order(OrderStatus::InProcess).check_transition(OrderStatus::Cancelled),
            Err(CounterError::OrderNotCancellable(OrderId(1)))
        );
    }

    #[test]
    fn terminal_and_same_state_moves_are_invalid() {
        for (from, to) in [
            (OrderStatus::Completed, OrderStatus::Cancelled),
            (OrderStatus::Completed, OrderStatus::InProcess),
            (OrderStatus::Cancelled, OrderStatus::Completed),
            (OrderStatus::InProcess, OrderStatus::InProcess),
            (OrderStatus::WaitingList, OrderStatus::WaitingList),
        ] {
            assert_eq!(
                order(from).check_transition(to),
                Err(CounterError::InvalidTransition {
                    id: OrderId(1),
                    from,
                    to
                })
            );
        }
    }

    #[test]
    fn status_names_serialize_kebab_case() {
        let json = serde_json::to_string(&OrderStatus::WaitingList).unwrap();
        assert_eq!(json, "\"waiting-list\"");
        assert_eq!(OrderStatus::InProcess.to_string(), "in-process");
    }
}
