use crate::model::{MenuId, Order, UserId};
use serde::Serialize;

/// An order with its 1-based rank inside its status group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedOrder {
    pub rank: usize,
    pub order: Order,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRanking {
    pub rank: usize,
    pub menu_id: MenuId,
    pub menu_name: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpenderRanking {
    pub rank: usize,
    pub user_id: UserId,
    pub name: String,
    pub total_spent: i64,
    pub orders: usize,
}
