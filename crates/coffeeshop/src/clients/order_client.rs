//! # Order Client
//!
//! Admission and settlement: placing, completing and cancelling orders.
use crate::error::CounterError;
use crate::ledger::{CounterCommand, CounterLedger, CounterOutcome};
use crate::model::{Cancellation, Completion, OrderId, OrderLine, OrderReceipt, UserId};
use async_trait::async_trait;
use ledger_actor::{LedgerClient, LedgerHandle};
use tracing::{debug, instrument};

/// Client for the order side of the counter.
#[derive(Clone)]
pub struct OrderClient {
    inner: LedgerClient<CounterLedger>,
}

impl OrderClient {
    pub fn new(inner: LedgerClient<CounterLedger>) -> Self {
        Self { inner }
    }

    /// Places an order for `user_id`, paying from their balance.
    ///
    /// The order goes straight to the kitchen while it has capacity and onto the
    /// waiting list otherwise; the receipt carries the queue position in that case.
    #[instrument(skip(self))]
    pub async fn create_order(
        &self,
        user_id: UserId,
        lines: Vec<OrderLine>,
    ) -> Result<OrderReceipt, CounterError> {
        debug!("Sending request");
        match self
            .execute(CounterCommand::CreateOrder { user_id, lines })
            .await?
        {
            CounterOutcome::OrderPlaced(receipt) => Ok(receipt),
            _ => unreachable!("CreateOrder must return OrderPlaced"),
        }
    }

    #[instrument(skip(self))]
    pub async fn complete_order(&self, order_id: OrderId) -> Result<Completion, CounterError> {
        debug!("Sending request");
        match self.execute(CounterCommand::CompleteOrder(order_id)).await? {
            CounterOutcome::OrderCompleted(completion) => Ok(completion),
            _ => unreachable!("CompleteOrder must return OrderCompleted"),
        }
    }

    /// Cancels a waiting-list order. The refund is credited to the ordering account.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: OrderId) -> Result<Cancellation, CounterError> {
        debug!("Sending request");
        match self.execute(CounterCommand::CancelOrder(order_id)).await? {
            CounterOutcome::OrderCancelled(cancellation) => Ok(cancellation),
            _ => unreachable!("CancelOrder must return OrderCancelled"),
        }
    }
}

#[async_trait]
impl LedgerHandle<CounterLedger> for OrderClient {
    fn inner(&self) -> &LedgerClient<CounterLedger> {
        &self.inner
    }
}
