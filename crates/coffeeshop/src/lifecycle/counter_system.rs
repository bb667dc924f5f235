use crate::clients::{BalanceClient, CatalogClient, OrderClient, ReportClient};
use crate::clock::Clock;
use crate::config::CounterConfig;
use crate::ledger::{CounterContext, CounterLedger};
use ledger_actor::LedgerActor;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running counter: one ledger actor and the clients that talk to it.
///
/// # Example
///
/// ```ignore
/// let system = CounterSystem::new();
///
/// let receipt = system.order_client.create_order(user_id, lines).await?;
/// system.order_client.complete_order(receipt.order_id).await?;
///
/// // Gracefully shut down when done
/// let ledger = system.shutdown().await?;
/// ```
pub struct CounterSystem {
    /// Order admission and settlement
    pub order_client: OrderClient,

    /// Top-ups and balance history
    pub balance_client: BalanceClient,

    /// Accounts and menu items
    pub catalog_client: CatalogClient,

    /// Read-only views and rankings
    pub report_client: ReportClient,

    handle: JoinHandle<CounterLedger>,
}

impl CounterSystem {
    /// Starts a counter with default configuration and the system clock.
    pub fn new() -> Self {
        Self::with_context(CounterContext::default())
    }

    pub fn with_config(config: CounterConfig) -> Self {
        Self::with_context(CounterContext {
            config,
            ..CounterContext::default()
        })
    }

    /// Starts a counter whose timestamps come from `clock`.
    pub fn with_clock(config: CounterConfig, clock: Arc<dyn Clock>) -> Self {
        Self::with_context(CounterContext::new(config, clock))
    }

    /// Spawns the ledger actor with `context` injected. Must be called inside a Tokio runtime.
    pub fn with_context(context: CounterContext) -> Self {
        let mailbox = context.config.mailbox_size.max(1);
        let (actor, client) = LedgerActor::new(mailbox, CounterLedger::new());

        info!(
            kitchen_capacity = context.config.kitchen_capacity,
            min_top_up = context.config.min_top_up,
            refund_percent = context.config.refund_percent,
            mailbox,
            "Starting counter"
        );
        let handle = tokio::spawn(actor.run(context));

        Self {
            order_client: OrderClient::new(client.clone()),
            balance_client: BalanceClient::new(client.clone()),
            catalog_client: CatalogClient::new(client.clone()),
            report_client: ReportClient::new(client),
            handle,
        }
    }

    /// Drops every client, waits for the actor to drain, and returns the final ledger.
    ///
    /// # Returns
    ///
    /// - `Ok(ledger)` once the actor exits
    /// - `Err(String)` if the actor task panicked
    pub async fn shutdown(self) -> Result<CounterLedger, String> {
        info!("Shutting down counter...");

        drop(self.order_client);
        drop(self.balance_client);
        drop(self.catalog_client);
        drop(self.report_client);

        match self.handle.await {
            Ok(ledger) => {
                info!(
                    orders = ledger.orders().len(),
                    balance_records = ledger.balance_records().len(),
                    "Counter shutdown complete."
                );
                Ok(ledger)
            }
            Err(e) => {
                error!("Ledger task failed: {:?}", e);
                Err(format!("Ledger task failed: {:?}", e))
            }
        }
    }
}

impl Default for CounterSystem {
    fn default() -> Self {
        Self::new()
    }
}
