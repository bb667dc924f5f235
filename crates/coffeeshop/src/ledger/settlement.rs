//! Settlement: completing in-process orders and cancelling queued ones.

use super::{CounterContext, CounterLedger};
use crate::error::CounterError;
use crate::model::{
    BalanceRecord, Cancellation, Completion, OrderId, OrderStatus, RecordStatus, RecordType,
};
use tracing::debug;

impl CounterLedger {
    /// Completes an in-process order and moves the oldest queued order into the kitchen.
    pub(super) fn complete_order(
        &mut self,
        ctx: &CounterContext,
        order_id: OrderId,
    ) -> Result<Completion, CounterError> {
        self.order(order_id)?
            .check_transition(OrderStatus::Completed)?;

        let now = ctx.clock.now();
        self.orders.update(order_id, |order| {
            order.status = OrderStatus::Completed;
            order.completed_date = Some(now);
        });

        let promoted = self.oldest_waiting();
        if let Some(next) = promoted {
            self.order(next)?.check_transition(OrderStatus::InProcess)?;
            self.orders
                .update(next, |order| order.status = OrderStatus::InProcess);
            debug!(order_id = %next, "Promoted from waiting list");
        }

        Ok(Completion { order_id, promoted })
    }

    /// Cancels a waiting-list order and refunds part of its bill.
    pub(super) fn cancel_order(
        &mut self,
        ctx: &CounterContext,
        order_id: OrderId,
    ) -> Result<Cancellation, CounterError> {
        let order = self.order(order_id)?;
        order.check_transition(OrderStatus::Cancelled)?;
        let user_id = order.user_id.ok_or_else(|| {
            CounterError::invalid(format!("{order_id} has no account to refund"))
        })?;
        let refund = ctx.config.refund_for(order.total_bill)?;
        let member_name = self.user(user_id)?.name.clone();

        let now = ctx.clock.now();
        self.adjust_balance(user_id, refund)?;
        let balance_record = self.balance_records.insert_with(|id| BalanceRecord {
            id,
            user_id,
            member_name,
            order_id: Some(order_id),
            nominal: refund,
            created_date: now,
            completed_date: Some(now),
            status: RecordStatus::Completed,
            record_type: RecordType::Refund,
        });
        self.orders.update(order_id, |order| {
            order.status = OrderStatus::Cancelled;
            order.cancelled_date = Some(now);
        });

        debug!(%order_id, refund, "Order cancelled");
        Ok(Cancellation {
            order_id,
            refund,
            balance_record,
        })
    }

    /// Head of the waiting list: earliest `created_date`, then lowest id.
    fn oldest_waiting(&self) -> Option<OrderId> {
        self.orders
            .iter()
            .filter(|order| order.status == OrderStatus::WaitingList)
            .min_by_key(|order| (order.created_date, order.id))
            .map(|order| order.id)
    }
}
