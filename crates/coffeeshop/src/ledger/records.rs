//! [`Record`] implementations that let the model types live in ledger tables.

use crate::model::{
    BalanceRecord, BalanceRecordId, MenuId, MenuItem, Order, OrderId, User, UserId,
};
use ledger_actor::Record;

impl Record for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

impl Record for MenuItem {
    type Id = MenuId;

    fn id(&self) -> MenuId {
        self.id
    }
}

/// Order items are stored inline, so they share the order's lifetime.
impl Record for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }
}

impl Record for BalanceRecord {
    type Id = BalanceRecordId;

    fn id(&self) -> BalanceRecordId {
        self.id
    }
}
