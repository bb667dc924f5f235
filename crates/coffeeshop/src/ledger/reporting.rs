//! Read-only views: per-status queue ranks and completed-order rankings.

use super::CounterLedger;
use crate::error::CounterError;
use crate::model::{
    ItemRanking, MenuId, Order, OrderId, OrderStatus, RankedOrder, SpenderRanking, UserId,
};
use std::cmp::Reverse;
use std::collections::BTreeMap;

impl CounterLedger {
    /// Orders grouped by status, each group numbered from 1 by (created_date, id).
    pub(super) fn ranked_orders(&self, status: Option<OrderStatus>) -> Vec<RankedOrder> {
        let mut orders: Vec<&Order> = self
            .orders
            .iter()
            .filter(|order| status.map_or(true, |s| order.status == s))
            .collect();
        orders.sort_by_key(|order| (order.status, order.created_date, order.id));

        let mut ranked = Vec::with_capacity(orders.len());
        let mut current = None;
        let mut rank = 0;
        for order in orders {
            if current != Some(order.status) {
                current = Some(order.status);
                rank = 0;
            }
            rank += 1;
            ranked.push(RankedOrder {
                rank,
                order: order.clone(),
            });
        }
        ranked
    }

    pub(super) fn queue_position(&self, order_id: OrderId) -> Result<Option<usize>, CounterError> {
        let order = self.order(order_id)?;
        if order.status != OrderStatus::WaitingList {
            return Ok(None);
        }
        let key = (order.created_date, order.id);
        let ahead = self
            .orders
            .iter()
            .filter(|o| o.status == OrderStatus::WaitingList && (o.created_date, o.id) < key)
            .count();
        Ok(Some(ahead + 1))
    }

    pub(super) fn top_items(&self, limit: usize) -> Vec<ItemRanking> {
        let mut totals: BTreeMap<MenuId, (String, u64)> = BTreeMap::new();
        for item in self.completed().flat_map(|order| &order.items) {
            let entry = totals
                .entry(item.menu_id)
                .or_insert_with(|| (item.menu_name.clone(), 0));
            entry.1 += u64::from(item.quantity);
        }

        let mut rows: Vec<_> = totals.into_iter().collect();
        rows.sort_by_key(|(menu_id, (_, quantity))| (Reverse(*quantity), *menu_id));
        rows.into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, (menu_id, (menu_name, quantity)))| ItemRanking {
                rank: i + 1,
                menu_id,
                menu_name,
                quantity,
            })
            .collect()
    }

    pub(super) fn top_spenders(&self, limit: usize) -> Result<Vec<SpenderRanking>, CounterError> {
        let mut totals: BTreeMap<UserId, (String, i64, usize)> = BTreeMap::new();
        for order in self.completed() {
            let Some(user_id) = order.user_id else {
                continue;
            };
            let entry = totals.entry(user_id).or_insert_with(|| {
                let name = self
                    .users
                    .get(user_id)
                    .map_or_else(|| order.customer_name.clone(), |u| u.name.clone());
                (name, 0, 0)
            });
            entry.1 = entry
                .1
                .checked_add(order.total_bill)
                .ok_or_else(|| CounterError::invalid(format!("spending total overflow for {user_id}")))?;
            entry.2 += 1;
        }

        let mut rows: Vec<_> = totals.into_iter().collect();
        rows.sort_by_key(|(user_id, (_, spent, _))| (Reverse(*spent), *user_id));
        Ok(rows
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, (user_id, (name, total_spent, orders)))| SpenderRanking {
                rank: i + 1,
                user_id,
                name,
                total_spent,
                orders,
            })
            .collect())
    }

    fn completed(&self) -> impl Iterator<Item = &Order> {
        self.orders
            .iter()
            .filter(|order| order.status == OrderStatus::Completed)
    }
}
