//! # Counter Ledger
//!
//! [`CounterLedger`] is the state owned by the counter's [`LedgerActor`](ledger_actor::LedgerActor):
//! four journaled tables (users, menu, orders with their items inline, balance records) and
//! the rules that move them.
//!
//! ## Structure
//!
//! - [`command`] / [`query`] - the request and reply enums clients send
//! - [`records`] - [`Record`](ledger_actor::Record) implementations for the model types
//! - `admission` - accepting orders: stock, billing, capacity, payment
//! - `settlement` - completing and cancelling orders, waiting-list promotion
//! - `balance` - two-phase top-ups
//! - `catalog` - registering users, adding and restocking menu items
//! - `reporting` - queue ranks and completed-order rankings
//!
//! ## Transactions
//!
//! Each command runs inside a transaction opened by the actor. Handlers validate before
//! writing where they can, and any error still rolls every table back, so a rejected
//! command never leaves a partial write behind.

mod admission;
mod balance;
mod catalog;
pub mod command;
pub mod query;
pub mod records;
mod reporting;
mod settlement;

pub use command::*;
pub use query::*;

use crate::clock::{Clock, SystemClock};
use crate::config::CounterConfig;
use crate::error::CounterError;
use crate::model::{
    BalanceRecord, BalanceRecordId, MenuId, MenuItem, Order, OrderId, OrderStatus, User, UserId,
};
use ledger_actor::{Ledger, Table, Transactional};
use std::sync::Arc;

/// Runtime dependencies injected into the ledger actor.
#[derive(Clone)]
pub struct CounterContext {
    pub config: CounterConfig,
    pub clock: Arc<dyn Clock>,
}

impl CounterContext {
    pub fn new(config: CounterConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }
}

impl Default for CounterContext {
    fn default() -> Self {
        Self::new(CounterConfig::default(), Arc::new(SystemClock))
    }
}

/// All persisted counter state.
#[derive(Debug, Default)]
pub struct CounterLedger {
    users: Table<User>,
    menu: Table<MenuItem>,
    orders: Table<Order>,
    balance_records: Table<BalanceRecord>,
}

impl CounterLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &Table<User> {
        &self.users
    }

    pub fn menu(&self) -> &Table<MenuItem> {
        &self.menu
    }

    pub fn orders(&self) -> &Table<Order> {
        &self.orders
    }

    pub fn balance_records(&self) -> &Table<BalanceRecord> {
        &self.balance_records
    }

    fn user(&self, id: UserId) -> Result<&User, CounterError> {
        self.users
            .get(id)
            .ok_or_else(|| CounterError::not_found("user", id))
    }

    fn menu_item(&self, id: MenuId) -> Result<&MenuItem, CounterError> {
        self.menu
            .get(id)
            .ok_or_else(|| CounterError::not_found("menu", id))
    }

    fn order(&self, id: OrderId) -> Result<&Order, CounterError> {
        self.orders
            .get(id)
            .ok_or_else(|| CounterError::not_found("order", id))
    }

    fn balance_record(&self, id: BalanceRecordId) -> Result<&BalanceRecord, CounterError> {
        self.balance_records
            .get(id)
            .ok_or_else(|| CounterError::not_found("balance_record", id))
    }

    fn count_status(&self, status: OrderStatus) -> usize {
        self.orders.iter().filter(|o| o.status == status).count()
    }

    /// Adds `delta` to a user's balance and returns the new balance.
    ///
    /// A result outside `i64` is rejected before anything is written.
    fn adjust_balance(&mut self, id: UserId, delta: i64) -> Result<i64, CounterError> {
        let balance = self
            .user(id)?
            .balance
            .checked_add(delta)
            .ok_or_else(|| CounterError::invalid(format!("balance overflow for {id}")))?;
        self.users.update(id, |user| user.balance = balance);
        Ok(balance)
    }
}

impl Transactional for CounterLedger {
    fn begin(&mut self) {
        self.users.begin();
        self.menu.begin();
        self.orders.begin();
        self.balance_records.begin();
    }

    fn commit(&mut self) {
        self.users.commit();
        self.menu.commit();
        self.orders.commit();
        self.balance_records.commit();
    }

    fn rollback(&mut self) {
        self.users.rollback();
        self.menu.rollback();
        self.orders.rollback();
        self.balance_records.rollback();
    }
}

impl Ledger for CounterLedger {
    type Command = CounterCommand;
    type Outcome = CounterOutcome;
    type Query = CounterQuery;
    type Answer = CounterAnswer;
    type Context = CounterContext;
    type Error = CounterError;

    fn execute(
        &mut self,
        command: CounterCommand,
        ctx: &CounterContext,
    ) -> Result<CounterOutcome, CounterError> {
        match command {
            CounterCommand::RegisterUser(params) => {
                self.register_user(params).map(CounterOutcome::UserRegistered)
            }
            CounterCommand::AddMenuItem(params) => {
                self.add_menu_item(params).map(CounterOutcome::MenuItemAdded)
            }
            CounterCommand::Restock { menu_id, quantity } => self
                .restock(menu_id, quantity)
                .map(|stock| CounterOutcome::Restocked { menu_id, stock }),
            CounterCommand::CreateOrder { user_id, lines } => self
                .admit_order(ctx, user_id, lines)
                .map(CounterOutcome::OrderPlaced),
            CounterCommand::CompleteOrder(order_id) => self
                .complete_order(ctx, order_id)
                .map(CounterOutcome::OrderCompleted),
            CounterCommand::CancelOrder(order_id) => self
                .cancel_order(ctx, order_id)
                .map(CounterOutcome::OrderCancelled),
            CounterCommand::CreateTopUp { user_id, nominal } => self
                .create_top_up(ctx, user_id, nominal)
                .map(CounterOutcome::TopUpRequested),
            CounterCommand::CompleteTopUp(record_id) => self
                .complete_top_up(ctx, record_id)
                .map(|(user_id, balance)| CounterOutcome::TopUpCompleted { user_id, balance }),
        }
    }

    fn query(&self, query: CounterQuery, _ctx: &CounterContext) -> Result<CounterAnswer, CounterError> {
        match query {
            CounterQuery::User(id) => self.user(id).cloned().map(CounterAnswer::User),
            CounterQuery::MenuItem(id) => self.menu_item(id).cloned().map(CounterAnswer::MenuItem),
            CounterQuery::Menu(category) => Ok(CounterAnswer::Menu(
                self.menu
                    .iter()
                    .filter(|item| category.map_or(true, |c| item.category == c))
                    .cloned()
                    .collect(),
            )),
            CounterQuery::Order(id) => self.order(id).cloned().map(CounterAnswer::Order),
            CounterQuery::Orders(status) => Ok(CounterAnswer::Orders(self.ranked_orders(status))),
            CounterQuery::QueuePosition(id) => {
                self.queue_position(id).map(CounterAnswer::QueuePosition)
            }
            CounterQuery::BalanceRecords(user_id) => {
                self.user(user_id)?;
                Ok(CounterAnswer::BalanceRecords(
                    self.balance_records
                        .iter()
                        .filter(|record| record.user_id == user_id)
                        .cloned()
                        .collect(),
                ))
            }
            CounterQuery::TopItems(limit) => Ok(CounterAnswer::TopItems(self.top_items(limit))),
            CounterQuery::TopSpenders(limit) => {
                self.top_spenders(limit).map(CounterAnswer::TopSpenders)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::model::{Category, Completion, MenuItemCreate, OrderLine, UserCreate};
    use chrono::{DateTime, Duration};

    /// Every reading returns the same instant, so only ids break ties.
    fn frozen(capacity: usize) -> CounterContext {
        CounterContext::new(
            CounterConfig::default().with_kitchen_capacity(capacity),
            Arc::new(ManualClock::new(DateTime::<chrono::Utc>::UNIX_EPOCH, Duration::zero())),
        )
    }

    /// Runs a command the way the actor does: inside a transaction.
    fn run(
        ledger: &mut CounterLedger,
        ctx: &CounterContext,
        command: CounterCommand,
    ) -> Result<CounterOutcome, CounterError> {
        ledger.begin();
        let result = ledger.execute(command, ctx);
        if result.is_ok() {
            ledger.commit();
        } else {
            ledger.rollback();
        }
        result
    }

    fn seed(ledger: &mut CounterLedger, ctx: &CounterContext) -> (UserId, MenuId) {
        let CounterOutcome::UserRegistered(user) = run(
            ledger,
            ctx,
            CounterCommand::RegisterUser(UserCreate::member("Alice", "alice@example.com")),
        )
        .unwrap() else {
            panic!("expected UserRegistered");
        };
        let CounterOutcome::TopUpRequested(record) = run(
            ledger,
            ctx,
            CounterCommand::CreateTopUp {
                user_id: user,
                nominal: 50_000,
            },
        )
        .unwrap() else {
            panic!("expected TopUpRequested");
        };
        run(ledger, ctx, CounterCommand::CompleteTopUp(record)).unwrap();
        let CounterOutcome::MenuItemAdded(menu) = run(
            ledger,
            ctx,
            CounterCommand::AddMenuItem(MenuItemCreate::new("Tea", 1_000, 10, Category::Drinks)),
        )
        .unwrap() else {
            panic!("expected MenuItemAdded");
        };
        (user, menu)
    }

    fn place(ledger: &mut CounterLedger, ctx: &CounterContext, user: UserId, menu: MenuId) -> OrderId {
        match run(
            ledger,
            ctx,
            CounterCommand::CreateOrder {
                user_id: user,
                lines: vec![OrderLine::new(menu, 1)],
            },
        ) {
            Ok(CounterOutcome::OrderPlaced(receipt)) => receipt.order_id,
            other => panic!("expected OrderPlaced, got {other:?}"),
        }
    }

    #[test]
    fn equal_timestamps_promote_lowest_id() {
        let ctx = frozen(1);
        let mut ledger = CounterLedger::new();
        let (user, menu) = seed(&mut ledger, &ctx);

        let first = place(&mut ledger, &ctx, user, menu);
        let second = place(&mut ledger, &ctx, user, menu);
        let third = place(&mut ledger, &ctx, user, menu);

        assert_eq!(ledger.queue_position(third), Ok(Some(2)));
        let outcome = run(&mut ledger, &ctx, CounterCommand::CompleteOrder(first)).unwrap();
        assert_eq!(
            outcome,
            CounterOutcome::OrderCompleted(Completion {
                order_id: first,
                promoted: Some(second),
            })
        );
        assert_eq!(ledger.queue_position(third), Ok(Some(1)));
    }

    #[test]
    fn zero_capacity_queues_everything() {
        let ctx = frozen(0);
        let mut ledger = CounterLedger::new();
        let (user, menu) = seed(&mut ledger, &ctx);

        let order = place(&mut ledger, &ctx, user, menu);
        assert_eq!(ledger.count_status(OrderStatus::WaitingList), 1);
        assert_eq!(ledger.queue_position(order), Ok(Some(1)));
    }

    #[test]
    fn failed_command_restores_every_table() {
        let ctx = frozen(10);
        let mut ledger = CounterLedger::new();
        let (user, menu) = seed(&mut ledger, &ctx);
        let order = place(&mut ledger, &ctx, user, menu);

        let err = run(&mut ledger, &ctx, CounterCommand::CancelOrder(order)).unwrap_err();
        assert_eq!(err, CounterError::OrderNotCancellable(order));

        assert_eq!(ledger.orders().len(), 1);
        assert_eq!(ledger.balance_records().len(), 2);
        assert_eq!(ledger.user(user).map(|u| u.balance), Ok(49_000));
        assert_eq!(ledger.menu_item(menu).map(|m| m.stock), Ok(9));
        assert!(!ledger.users().in_transaction());
    }

    #[test]
    fn balance_records_of_unknown_user_is_not_found() {
        let ledger = CounterLedger::new();
        let result = ledger.query(CounterQuery::BalanceRecords(UserId(3)), &frozen(1));
        assert!(matches!(result, Err(CounterError::NotFound { entity: "user", .. })));
    }
}
