//! # System Lifecycle
//!
//! Starting, wiring and stopping the counter.
//!
//! The whole counter is one [`LedgerActor`](ledger_actor::LedgerActor) owning a
//! [`CounterLedger`](crate::ledger::CounterLedger). [`CounterSystem`] spawns it with its
//! run-time context (configuration and clock) and hands out one typed client per area:
//!
//! ```rust,ignore
//! let system = CounterSystem::with_config(CounterConfig::from_env());
//!
//! let alice = system.catalog_client.register_user(UserCreate::member("Alice", "a@x.id")).await?;
//! let latte = system.catalog_client.add_menu_item(MenuItemCreate::new("Latte", 10_000, 5, Category::Drinks)).await?;
//! let receipt = system.order_client.create_order(alice, vec![OrderLine::new(latte, 2)]).await?;
//!
//! let ledger = system.shutdown().await?;
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the mailbox
//! 2. **Actor drains** - `receiver.recv()` returns `None` once queued requests are handled
//! 3. **Await the task** - the actor hands back the final ledger state
//!
//! Clones of the clients held elsewhere keep the actor alive; drop them first.
//!
//! ## Observability
//!
//! Call [`setup_tracing`] once at process start. Levels follow `RUST_LOG`.

pub mod counter_system;

pub use counter_system::*;
pub use ledger_actor::tracing::setup_tracing;
