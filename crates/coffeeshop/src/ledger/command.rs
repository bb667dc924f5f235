//! Write-side requests and their outcomes.

use crate::model::{
    BalanceRecordId, Cancellation, Completion, MenuId, MenuItemCreate, OrderId, OrderLine,
    OrderReceipt, UserCreate, UserId,
};

/// Commands the counter ledger executes, each in its own transaction.
#[derive(Debug, Clone)]
pub enum CounterCommand {
    RegisterUser(UserCreate),
    AddMenuItem(MenuItemCreate),
    /// Adds `quantity` units to an item's stock.
    Restock { menu_id: MenuId, quantity: u16 },
    CreateOrder { user_id: UserId, lines: Vec<OrderLine> },
    CompleteOrder(OrderId),
    CancelOrder(OrderId),
    CreateTopUp { user_id: UserId, nominal: i64 },
    CompleteTopUp(BalanceRecordId),
}

/// Results from CounterCommands - variants match 1:1 with CounterCommand
#[derive(Debug, Clone, PartialEq)]
pub enum CounterOutcome {
    UserRegistered(UserId),
    MenuItemAdded(MenuId),
    Restocked { menu_id: MenuId, stock: u16 },
    OrderPlaced(OrderReceipt),
    OrderCompleted(Completion),
    OrderCancelled(Cancellation),
    TopUpRequested(BalanceRecordId),
    TopUpCompleted { user_id: UserId, balance: i64 },
}
