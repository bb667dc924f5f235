//! # Report Client
//!
//! Read-only views: orders, queue positions and completed-order rankings.
use crate::error::CounterError;
use crate::ledger::{CounterAnswer, CounterLedger, CounterQuery};
use crate::model::{ItemRanking, Order, OrderId, OrderStatus, RankedOrder, SpenderRanking};
use async_trait::async_trait;
use ledger_actor::{LedgerClient, LedgerHandle};
use tracing::instrument;

#[derive(Clone)]
pub struct ReportClient {
    inner: LedgerClient<CounterLedger>,
}

impl ReportClient {
    pub fn new(inner: LedgerClient<CounterLedger>) -> Self {
        Self { inner }
    }

    /// A single order with its items.
    #[instrument(skip(self))]
    pub async fn order(&self, id: OrderId) -> Result<Order, CounterError> {
        match self.query(CounterQuery::Order(id)).await? {
            CounterAnswer::Order(order) => Ok(order),
            _ => unreachable!("Order must answer Order"),
        }
    }

    /// Orders ranked within their status group; `Some(status)` returns one group only.
    #[instrument(skip(self))]
    pub async fn orders(&self, status: Option<OrderStatus>) -> Result<Vec<RankedOrder>, CounterError> {
        match self.query(CounterQuery::Orders(status)).await? {
            CounterAnswer::Orders(orders) => Ok(orders),
            _ => unreachable!("Orders must answer Orders"),
        }
    }

    #[instrument(skip(self))]
    pub async fn queue_position(&self, id: OrderId) -> Result<Option<usize>, CounterError> {
        match self.query(CounterQuery::QueuePosition(id)).await? {
            CounterAnswer::QueuePosition(position) => Ok(position),
            _ => unreachable!("QueuePosition must answer QueuePosition"),
        }
    }

    #[instrument(skip(self))]
    pub async fn top_items(&self, limit: usize) -> Result<Vec<ItemRanking>, CounterError> {
        match self.query(CounterQuery::TopItems(limit)).await? {
            CounterAnswer::TopItems(items) => Ok(items),
            _ => unreachable!("TopItems must answer TopItems"),
        }
    }

    #[instrument(skip(self))]
    pub async fn top_spenders(&self, limit: usize) -> Result<Vec<SpenderRanking>, CounterError> {
        match self.query(CounterQuery::TopSpenders(limit)).await? {
            CounterAnswer::TopSpenders(spenders) => Ok(spenders),
            _ => unreachable!("TopSpenders must answer TopSpenders"),
        }
    }
}

#[async_trait]
impl LedgerHandle<CounterLedger> for ReportClient {
    fn inner(&self) -> &LedgerClient<CounterLedger> {
        &self.inner
    }
}
