//! # Balance Client
//!
//! Top-up requests, their confirmation, and a member's balance history.
use crate::error::CounterError;
use crate::ledger::{CounterAnswer, CounterCommand, CounterLedger, CounterOutcome, CounterQuery};
use crate::model::{BalanceRecord, BalanceRecordId, UserId};
use async_trait::async_trait;
use ledger_actor::{LedgerClient, LedgerHandle};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct BalanceClient {
    inner: LedgerClient<CounterLedger>,
}

impl BalanceClient {
    pub fn new(inner: LedgerClient<CounterLedger>) -> Self {
        Self { inner }
    }

    /// Files a pending top-up. Nothing is credited until [`complete_top_up`](Self::complete_top_up).
    #[instrument(skip(self))]
    pub async fn create_top_up(
        &self,
        user_id: UserId,
        nominal: i64,
    ) -> Result<BalanceRecordId, CounterError> {
        debug!("Sending request");
        match self
            .execute(CounterCommand::CreateTopUp { user_id, nominal })
            .await?
        {
            CounterOutcome::TopUpRequested(record_id) => Ok(record_id),
            _ => unreachable!("CreateTopUp must return TopUpRequested"),
        }
    }

    /// Confirms a pending top-up and returns the member's new balance.
    #[instrument(skip(self))]
    pub async fn complete_top_up(&self, record_id: BalanceRecordId) -> Result<i64, CounterError> {
        debug!("Sending request");
        match self.execute(CounterCommand::CompleteTopUp(record_id)).await? {
            CounterOutcome::TopUpCompleted { balance, .. } => Ok(balance),
            _ => unreachable!("CompleteTopUp must return TopUpCompleted"),
        }
    }

    /// Every balance movement of a user, oldest first.
    #[instrument(skip(self))]
    pub async fn balance_records(&self, user_id: UserId) -> Result<Vec<BalanceRecord>, CounterError> {
        match self.query(CounterQuery::BalanceRecords(user_id)).await? {
            CounterAnswer::BalanceRecords(records) => Ok(records),
            _ => unreachable!("BalanceRecords must answer BalanceRecords"),
        }
    }
}

#[async_trait]
impl LedgerHandle<CounterLedger> for BalanceClient {
    fn inner(&self) -> &LedgerClient<CounterLedger> {
        &self.inner
    }
}
