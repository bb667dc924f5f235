//! # Generic Client
//!
//! This module defines the generic client for communicating with a [`LedgerActor`](crate::LedgerActor).

use crate::error::FrameworkError;
use crate::ledger::Ledger;
use crate::message::LedgerRequest;
use tokio::sync::{mpsc, oneshot};

/// ## LedgerClient
///
/// Type-safe, async handle to a `LedgerActor<L>`. Requests go over a Tokio mpsc channel and
/// replies come back on a oneshot channel.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Flat errors** – a closed actor surfaces as `L::Error` through `From<FrameworkError>`,
///   next to the ledger's own rejections.
pub struct LedgerClient<L: Ledger> {
    sender: mpsc::Sender<LedgerRequest<L>>,
}

impl<L: Ledger> Clone for LedgerClient<L> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<L: Ledger> LedgerClient<L> {
    pub fn new(sender: mpsc::Sender<LedgerRequest<L>>) -> Self {
        Self { sender }
    }

    pub async fn execute(&self, command: L::Command) -> Result<L::Outcome, L::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::Execute {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn query(&self, query: L::Query) -> Result<L::Answer, L::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::Query { query, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// `true` once the actor has stopped receiving.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
