//! # Coffee Counter
//!
//! Order management for a food and beverage counter: a menu with stock, members with
//! stored-value balances, and orders that are paid on admission, queued when the kitchen
//! is full, and later completed or cancelled with a partial refund.
//!
//! ## Core Components
//!
//! - **[model]**: plain data ([`User`](model::User), [`MenuItem`](model::MenuItem),
//!   [`Order`](model::Order), [`BalanceRecord`](model::BalanceRecord)) and identifiers.
//! - **[ledger]**: [`CounterLedger`](ledger::CounterLedger), the tables and the rules for
//!   admission, settlement, top-ups and reporting.
//! - **[clients]**: typed wrappers such as [`OrderClient`](clients::OrderClient) that hide
//!   message passing.
//! - **[lifecycle]**: [`CounterSystem`](lifecycle::CounterSystem) starts the ledger actor and
//!   shuts it down.
//! - **[config]** / **[clock]**: run-time context injected into the actor.
//!
//! ## Testing
//!
//! Full flows run against [`CounterSystem`](lifecycle::CounterSystem) with a
//! [`ManualClock`](clock::ManualClock); clients are tested against
//! [`ledger_actor::mock::MockLedger`].

pub mod clients;
pub mod clock;
pub mod config;
pub mod error;
pub mod ledger;
pub mod lifecycle;
pub mod model;

pub use error::CounterError;
