//! # Ledger Actor
//!
//! `LedgerActor` is the server half of the framework. It owns a [`Ledger`] and the receiver
//! end of the mailbox, and processes one request at a time in its own Tokio task.
//!
//! Sequential processing is what makes the transactions cheap: while a command runs, no
//! other command can read the rows it is about to write, so a check-then-write inside
//! `execute` cannot race with another check-then-write.

use crate::client::LedgerClient;
use crate::ledger::Ledger;
use crate::message::LedgerRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that serializes every command against a [`Ledger`].
///
/// # Usage Pattern
///
/// 1.  **Create**: `LedgerActor::new(buffer_size, ledger)` returns the actor and a client.
/// 2.  **Wire**: pass the ledger's `Context` into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use ledger_actor::{FrameworkError, Ledger, LedgerActor, Record, Table, Transactional};
///
/// #[derive(Clone, Debug)] struct Counter { id: u32, hits: u64 }
/// impl Record for Counter { type Id = u32; fn id(&self) -> u32 { self.id } }
///
/// #[derive(Default)] struct Hits { counters: Table<Counter> }
/// impl Transactional for Hits {
///     fn begin(&mut self) { self.counters.begin() }
///     fn commit(&mut self) { self.counters.commit() }
///     fn rollback(&mut self) { self.counters.rollback() }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error(transparent)]
/// struct HitsError(#[from] FrameworkError);
///
/// impl Ledger for Hits {
///     type Command = ();
///     type Outcome = u32;
///     type Query = u32;
///     type Answer = Option<u64>;
///     type Context = ();
///     type Error = HitsError;
///
///     fn execute(&mut self, _: (), _: &()) -> Result<u32, HitsError> {
///         Ok(self.counters.insert_with(|id| Counter { id, hits: 1 }))
///     }
///     fn query(&self, id: u32, _: &()) -> Result<Option<u64>, HitsError> {
///         Ok(self.counters.get(id).map(|c| c.hits))
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = LedgerActor::new(10, Hits::default());
///     tokio::spawn(actor.run(()));
///
///     let id = client.execute(()).await.unwrap();
///     assert_eq!(client.query(id).await.unwrap(), Some(1));
/// }
/// ```
pub struct LedgerActor<L: Ledger> {
    receiver: mpsc::Receiver<LedgerRequest<L>>,
    ledger: L,
    committed: u64,
    rolled_back: u64,
}

impl<L: Ledger> LedgerActor<L> {
    /// Creates a new `LedgerActor` around `ledger` and its associated [`LedgerClient`].
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the mailbox. When it is full, client calls wait
    ///   for space.
    /// * `ledger` - The initial state; usually empty.
    pub fn new(buffer_size: usize, ledger: L) -> (Self, LedgerClient<L>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            ledger,
            committed: 0,
            rolled_back: 0,
        };
        (actor, LedgerClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// Returns the ledger so callers (and tests) can inspect the final state.
    pub async fn run(mut self, context: L::Context) -> L {
        let ledger_type = std::any::type_name::<L>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(ledger_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                LedgerRequest::Execute {
                    command,
                    respond_to,
                } => {
                    debug!(ledger_type, ?command, "Execute");
                    self.ledger.begin();
                    let result = self.ledger.execute(command, &context);
                    match &result {
                        Ok(outcome) => {
                            self.ledger.commit();
                            self.committed += 1;
                            debug!(ledger_type, ?outcome, "Outcome");
                            info!(ledger_type, committed = self.committed, "Committed");
                        }
                        Err(e) => {
                            self.ledger.rollback();
                            self.rolled_back += 1;
                            warn!(ledger_type, error = %e, "Rolled back");
                        }
                    }
                    let _ = respond_to.send(result);
                }
                LedgerRequest::Query { query, respond_to } => {
                    debug!(ledger_type, ?query, "Query");
                    let _ = respond_to.send(self.ledger.query(query, &context));
                }
            }
        }

        info!(
            ledger_type,
            committed = self.committed,
            rolled_back = self.rolled_back,
            "Shutdown"
        );
        self.ledger
    }
}
