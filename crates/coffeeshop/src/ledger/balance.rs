//! Two-phase top-ups: a member requests, an admin confirms.

use super::{CounterContext, CounterLedger};
use crate::error::CounterError;
use crate::model::{BalanceRecord, BalanceRecordId, RecordStatus, RecordType, UserId};

impl CounterLedger {
    pub(super) fn create_top_up(
        &mut self,
        ctx: &CounterContext,
        user_id: UserId,
        nominal: i64,
    ) -> Result<BalanceRecordId, CounterError> {
        let member_name = self.user(user_id)?.name.clone();
        let minimum = ctx.config.min_top_up;
        if nominal < minimum {
            return Err(CounterError::BelowMinimumTopUp { nominal, minimum });
        }

        let created_date = ctx.clock.now();
        Ok(self.balance_records.insert_with(|id| BalanceRecord {
            id,
            user_id,
            member_name,
            order_id: None,
            nominal,
            created_date,
            completed_date: None,
            status: RecordStatus::Created,
            record_type: RecordType::Topup,
        }))
    }

    /// Credits a pending top-up. Returns the owner and their new balance.
    pub(super) fn complete_top_up(
        &mut self,
        ctx: &CounterContext,
        record_id: BalanceRecordId,
    ) -> Result<(UserId, i64), CounterError> {
        let record = self.balance_record(record_id)?;
        if record.status == RecordStatus::Completed {
            return Err(CounterError::AlreadyCompleted(record_id));
        }
        if record.record_type != RecordType::Topup {
            return Err(CounterError::invalid(format!("{record_id} is not a top-up")));
        }
        let (user_id, nominal) = (record.user_id, record.nominal);

        let balance = self.adjust_balance(user_id, nominal)?;
        let now = ctx.clock.now();
        self.balance_records.update(record_id, |record| {
            record.status = RecordStatus::Completed;
            record.completed_date = Some(now);
        });
        Ok((user_id, balance))
    }
}
