//! # Ledger Actor
//!
//! This crate provides a small framework for owning multi-table state behind a single
//! Tokio actor and mutating it with all-or-nothing commands.
//!
//! ## Why an Actor in Front of the Tables?
//!
//! A store that several request handlers share needs two guarantees:
//!
//! - **Isolation**: a command that reads a row and writes it back must not interleave with
//!   another command doing the same to that row.
//! - **Atomicity**: a command that fails halfway must leave no trace.
//!
//! The actor gives isolation: it is the only owner of the state and processes one message at
//! a time, so there are no locks and no lost updates. The [`Table`] journal gives atomicity:
//! the actor opens a transaction before every command and rolls it back if the command
//! returns an error.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`Ledger`], [`Table`], [`Transactional`]) - tables and domain rules
//! 2. **Runtime Layer** ([`LedgerActor`]) - message processing and transaction control
//! 3. **Interface Layer** ([`LedgerClient`], [`LedgerHandle`]) - typed async requests
//!
//! ## Context Injection Pattern
//!
//! Dependencies reach the ledger at **runtime** via `run(context)`, not at construction.
//! A counter ledger, for instance, receives its configuration and clock this way, and tests
//! swap in a manual clock without touching the ledger type.
//!
//! ## Concurrency Model
//!
//! - The actor runs in its own Tokio task
//! - Commands and queries are processed **sequentially**
//! - Clients are cheap to clone and can be used from any number of tasks
//!
//! ## Testing
//!
//! [`mock::MockLedger`] answers client requests from scripted expectations, so domain client
//! wrappers can be tested without a running ledger. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod ledger;
pub mod message;
pub mod mock;
pub mod table;
pub mod tracing;

// Re-export core types for convenience
pub use actor::LedgerActor;
pub use client::LedgerClient;
pub use client_trait::LedgerHandle;
pub use error::FrameworkError;
pub use ledger::Ledger;
pub use message::{LedgerRequest, Response};
pub use table::{Record, Table, Transactional};
