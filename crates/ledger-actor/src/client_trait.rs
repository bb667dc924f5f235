//! # LedgerHandle Trait
//!
//! Common interface for domain-specific clients: implement `inner()` and get traced
//! `execute`/`query` for free.
use crate::{Ledger, LedgerClient};
use async_trait::async_trait;

/// Trait for domain clients that wrap a [`LedgerClient`].
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// pub struct OrderClient {
///     inner: LedgerClient<CounterLedger>,
/// }
///
/// impl LedgerHandle<CounterLedger> for OrderClient {
///     fn inner(&self) -> &LedgerClient<CounterLedger> {
///         &self.inner
///     }
/// }
///
/// // execute() and query() are provided automatically
/// let outcome = order_client.execute(CounterCommand::CompleteOrder(id)).await?;
/// ```
#[async_trait]
pub trait LedgerHandle<L: Ledger>: Send + Sync {
    /// Access the inner generic LedgerClient.
    fn inner(&self) -> &LedgerClient<L>;

    /// Send a command and wait for it to commit or roll back.
    #[tracing::instrument(skip(self))]
    async fn execute(&self, command: L::Command) -> Result<L::Outcome, L::Error> {
        tracing::debug!("Sending command");
        self.inner().execute(command).await
    }

    /// Send a read-only query.
    #[tracing::instrument(skip(self))]
    async fn query(&self, query: L::Query) -> Result<L::Answer, L::Error> {
        tracing::debug!("Sending query");
        self.inner().query(query).await
    }
}
