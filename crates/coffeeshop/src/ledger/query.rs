//! Read-side requests and their answers.

use crate::model::{
    BalanceRecord, Category, ItemRanking, MenuId, MenuItem, Order, OrderId, OrderStatus,
    RankedOrder, SpenderRanking, User, UserId,
};

/// Read-only requests against committed ledger state.
#[derive(Debug, Clone)]
pub enum CounterQuery {
    User(UserId),
    MenuItem(MenuId),
    /// The catalog, optionally restricted to one category.
    Menu(Option<Category>),
    Order(OrderId),
    /// Orders ranked within their status group, optionally one group only.
    Orders(Option<OrderStatus>),
    /// 1-based place of an order in the waiting list; `None` if it is not queued.
    QueuePosition(OrderId),
    BalanceRecords(UserId),
    TopItems(usize),
    TopSpenders(usize),
}

/// Answers to CounterQueries - variants match 1:1 with CounterQuery
#[derive(Debug, Clone, PartialEq)]
pub enum CounterAnswer {
    User(User),
    MenuItem(MenuItem),
    Menu(Vec<MenuItem>),
    Order(Order),
    Orders(Vec<RankedOrder>),
    QueuePosition(Option<usize>),
    BalanceRecords(Vec<BalanceRecord>),
    TopItems(Vec<ItemRanking>),
    TopSpenders(Vec<SpenderRanking>),
}
