//! # Generic Messages
//!
//! This module defines the message types sent from a [`LedgerClient`](crate::LedgerClient)
//! to a [`LedgerActor`](crate::LedgerActor).

use crate::ledger::Ledger;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

/// Internal message type sent to the actor.
///
/// The split mirrors a read-write store: an `Execute` runs inside a transaction
/// that commits on success and rolls back on error, a `Query` only reads committed state.
#[derive(Debug)]
pub enum LedgerRequest<L: Ledger> {
    Execute {
        command: L::Command,
        respond_to: Response<L::Outcome, L::Error>,
    },
    Query {
        query: L::Query,
        respond_to: Response<L::Answer, L::Error>,
    },
}
