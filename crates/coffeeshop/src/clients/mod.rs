//! Type-safe wrappers around [`LedgerClient<CounterLedger>`](ledger_actor::LedgerClient).
//!
//! Each client covers one area of the counter and unpacks the matching
//! [`CounterOutcome`](crate::ledger::CounterOutcome) / [`CounterAnswer`](crate::ledger::CounterAnswer)
//! variant. All of them are cheap to clone and share the same ledger actor.

pub mod balance_client;
pub mod catalog_client;
pub mod order_client;
pub mod report_client;

pub use balance_client::*;
pub use catalog_client::*;
pub use order_client::*;
pub use report_client::*;
