//! Plain data types for the counter: accounts, catalog, orders and the balance ledger.

pub mod balance;
pub mod menu;
pub mod order;
pub mod report;
pub mod user;

pub use balance::*;
pub use menu::*;
pub use order::*;
pub use report::*;
pub use user::*;
