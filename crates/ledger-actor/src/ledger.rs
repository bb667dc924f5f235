//! # Ledger Trait
//!
//! The `Ledger` trait is the contract a piece of state must satisfy to be owned by a
//! [`LedgerActor`](crate::LedgerActor). Where a resource actor manages one entity type with
//! CRUD messages, a ledger owns *several* tables and is driven by domain commands that may
//! touch any of them. The actor wraps every command in a transaction (see
//! [`Transactional`](crate::Transactional)), so a command either applies all of its writes or
//! none of them.
//!
//! # Associated Types
//! - `Command` / `Outcome`: the write side. One enum of commands, one enum of outcomes.
//! - `Query` / `Answer`: the read side. Queries never open a transaction.
//! - `Context`: dependencies injected at `run()` time (configuration, clocks, ...).
//! - `Error`: the ledger's rejection type. It must absorb [`FrameworkError`] so clients can
//!   return a single error type for both business rejections and a closed actor.

use crate::error::FrameworkError;
use crate::table::Transactional;
use std::fmt::Debug;

/// State owned by a [`LedgerActor`](crate::LedgerActor).
///
/// # Synchronous Handlers
/// `execute` and `query` are plain functions. A transaction is held open for the duration of
/// `execute`, and the actor processes nothing else meanwhile; handlers must not wait on
/// other actors or I/O while holding it.
pub trait Ledger: Transactional + Send + 'static {
    /// Write-side request (e.g. `CreateOrder`).
    type Command: Send + Debug;

    /// Result of a committed command.
    type Outcome: Send + Debug;

    /// Read-side request.
    type Query: Send + Debug;

    /// Result of a query.
    type Answer: Send + Debug;

    /// Runtime dependencies injected into every handler.
    /// Use `()` if none are needed.
    type Context: Send + Sync;

    /// Rejection type for commands and queries.
    type Error: std::error::Error + From<FrameworkError> + Send + Sync + 'static;

    /// Applies a command. Returning `Err` makes the actor roll back every write the
    /// command performed.
    fn execute(
        &mut self,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Self::Outcome, Self::Error>;

    /// Answers a query against committed state.
    fn query(&self, query: Self::Query, ctx: &Self::Context) -> Result<Self::Answer, Self::Error>;
}
