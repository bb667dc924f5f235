//! Order admission: validate lines, bill, reserve stock, pick a lane, take payment.

use super::{CounterContext, CounterLedger};
use crate::error::CounterError;
use crate::model::{
    BalanceRecord, MenuId, Order, OrderItem, OrderLine, OrderReceipt, OrderStatus, RecordStatus,
    RecordType, UserId,
};
use std::collections::BTreeMap;
use tracing::debug;

/// A merged line with the menu snapshot taken at admission.
struct PricedLine {
    menu_id: MenuId,
    menu_name: String,
    quantity: u16,
    unit_price: i64,
}

impl CounterLedger {
    pub(super) fn admit_order(
        &mut self,
        ctx: &CounterContext,
        user_id: UserId,
        lines: Vec<OrderLine>,
    ) -> Result<OrderReceipt, CounterError> {
        let merged = merge_lines(&lines)?;
        let customer = self.user(user_id)?;
        let customer_name = customer.name.clone();
        let available_balance = customer.balance;

        let priced = self.price_lines(&merged)?;
        let total_bill = priced.iter().try_fold(0i64, |total, line| {
            line.unit_price
                .checked_mul(i64::from(line.quantity))
                .and_then(|subtotal| total.checked_add(subtotal))
                .ok_or_else(|| CounterError::invalid("order total overflows"))
        })?;

        if available_balance < total_bill {
            return Err(CounterError::InsufficientBalance {
                required: total_bill,
                available: available_balance,
            });
        }

        // Validation is done; everything below writes.
        for line in &priced {
            self.menu
                .update(line.menu_id, |item| item.stock -= line.quantity)
                .ok_or_else(|| CounterError::not_found("menu", line.menu_id))?;
        }

        let in_process = self.count_status(OrderStatus::InProcess);
        let (status, waiting_position) = if in_process >= ctx.config.kitchen_capacity {
            (
                OrderStatus::WaitingList,
                Some(self.count_status(OrderStatus::WaitingList) + 1),
            )
        } else {
            (OrderStatus::InProcess, None)
        };

        let now = ctx.clock.now();
        let order_id = self.orders.insert_with(|id| Order {
            id,
            user_id: Some(user_id),
            customer_name: customer_name.clone(),
            total_bill,
            status,
            items: priced
                .into_iter()
                .map(|line| OrderItem {
                    order_id: id,
                    menu_id: line.menu_id,
                    menu_name: line.menu_name,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                })
                .collect(),
            created_date: now,
            paid_date: Some(now),
            completed_date: None,
            cancelled_date: None,
        });

        self.adjust_balance(user_id, -total_bill)?;
        self.balance_records.insert_with(|id| BalanceRecord {
            id,
            user_id,
            member_name: customer_name,
            order_id: Some(order_id),
            nominal: total_bill,
            created_date: now,
            completed_date: Some(now),
            status: RecordStatus::Completed,
            record_type: RecordType::Payment,
        });

        debug!(%order_id, %status, total_bill, "Order admitted");
        Ok(OrderReceipt {
            order_id,
            total_bill,
            status,
            waiting_position,
        })
    }

    /// Looks up every line and checks it against current stock.
    fn price_lines(&self, lines: &BTreeMap<MenuId, u16>) -> Result<Vec<PricedLine>, CounterError> {
        lines
            .iter()
            .map(|(&menu_id, &quantity)| {
                let item = self.menu_item(menu_id)?;
                if quantity > item.stock {
                    return Err(CounterError::InsufficientStock {
                        menu_id,
                        item: item.name.clone(),
                        available: item.stock,
                    });
                }
                Ok(PricedLine {
                    menu_id,
                    menu_name: item.name.clone(),
                    quantity,
                    unit_price: item.price,
                })
            })
            .collect()
    }
}

/// Rejects empty orders and zero quantities, then sums lines naming the same item.
fn merge_lines(lines: &[OrderLine]) -> Result<BTreeMap<MenuId, u16>, CounterError> {
    if lines.is_empty() {
        return Err(CounterError::invalid("order has no lines"));
    }
    let mut merged = BTreeMap::new();
    for line in lines {
        if line.quantity == 0 {
            return Err(CounterError::invalid(format!(
                "zero quantity for {}",
                line.menu_id
            )));
        }
        let quantity: &mut u16 = merged.entry(line.menu_id).or_default();
        *quantity = quantity
            .checked_add(line.quantity)
            .ok_or_else(|| CounterError::invalid(format!("quantity overflow for {}", line.menu_id)))?;
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_lines_are_merged() {
        let merged = merge_lines(&[
            OrderLine::new(MenuId(2), 1),
            OrderLine::new(MenuId(1), 3),
            OrderLine::new(MenuId(2), 2),
        ])
        .unwrap();

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[&MenuId(1)], 3);
        assert_eq!(merged[&MenuId(2)], 3);
    }

    #[test]
    fn empty_and_zero_lines_are_rejected() {
        assert!(matches!(
            merge_lines(&[]),
            Err(CounterError::InvalidRequest(_))
        ));
        assert!(matches!(
            merge_lines(&[OrderLine::new(MenuId(1), 0)]),
            Err(CounterError::InvalidRequest(_))
        ));
    }

    #[test]
    fn merged_quantity_overflow_is_rejected() {
        let result = merge_lines(&[
            OrderLine::new(MenuId(1), u16::MAX),
            OrderLine::new(MenuId(1), 1),
        ]);
        assert!(matches!(result, Err(CounterError::InvalidRequest(_))));
    }
}
