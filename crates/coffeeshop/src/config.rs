//! Counter configuration.

use crate::error::CounterError;

/// Tunables for the counter.
///
/// # Environment Variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | COUNTER_KITCHEN_CAPACITY | 10 | in-process orders before new ones queue |
/// | COUNTER_MIN_TOP_UP | 10000 | smallest accepted top-up |
/// | COUNTER_REFUND_PERCENT | 80 | share of the bill refunded on cancellation |
/// | COUNTER_MAILBOX_SIZE | 32 | pending requests the ledger actor buffers |
///
/// ```ignore
/// COUNTER_KITCHEN_CAPACITY=4 cargo run
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterConfig {
    /// Number of `in-process` orders at which new orders go to the waiting list.
    pub kitchen_capacity: usize,
    /// Top-ups below this nominal are rejected.
    pub min_top_up: i64,
    /// Percentage of `total_bill` returned when a queued order is cancelled.
    pub refund_percent: i64,
    /// Capacity of the ledger actor's mailbox.
    pub mailbox_size: usize,
}

pub const DEFAULT_KITCHEN_CAPACITY: usize = 10;
pub const DEFAULT_MIN_TOP_UP: i64 = 10_000;
pub const DEFAULT_REFUND_PERCENT: i64 = 80;
pub const DEFAULT_MAILBOX_SIZE: usize = 32;

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            kitchen_capacity: DEFAULT_KITCHEN_CAPACITY,
            min_top_up: DEFAULT_MIN_TOP_UP,
            refund_percent: DEFAULT_REFUND_PERCENT,
            mailbox_size: DEFAULT_MAILBOX_SIZE,
        }
    }
}

impl CounterConfig {
    /// Loads the configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to the defaults. A refund percentage above
    /// 100 and a zero mailbox size are treated as unparsable.
    pub fn from_env() -> Self {
        Self {
            kitchen_capacity: std::env::var("COUNTER_KITCHEN_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_KITCHEN_CAPACITY),
            min_top_up: std::env::var("COUNTER_MIN_TOP_UP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MIN_TOP_UP),
            refund_percent: std::env::var("COUNTER_REFUND_PERCENT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|p| (0..=100).contains(p))
                .unwrap_or(DEFAULT_REFUND_PERCENT),
            mailbox_size: std::env::var("COUNTER_MAILBOX_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAILBOX_SIZE),
        }
    }

    pub fn with_kitchen_capacity(mut self, capacity: usize) -> Self {
        self.kitchen_capacity = capacity;
        self
    }

    /// Refund owed for a cancelled order, rounded down.
    ///
    /// The product is taken in `i128`, so any bill that fits in `i64` has an exact refund.
    pub fn refund_for(&self, total_bill: i64) -> Result<i64, CounterError> {
        let refund = i128::from(total_bill) * i128::from(self.refund_percent) / 100;
        i64::try_from(refund)
            .map_err(|_| CounterError::invalid(format!("refund overflow for bill {total_bill}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_counter_policy() {
        let config = CounterConfig::default();
        assert_eq!(config.kitchen_capacity, 10);
        assert_eq!(config.min_top_up, 10_000);
        assert_eq!(config.refund_percent, 80);
    }

    #[test]
    fn refund_keeps_twenty_percent() {
        let config = CounterConfig::default();
        assert_eq!(config.refund_for(20_000), Ok(16_000));
        assert_eq!(config.refund_for(12_345), Ok(9_876));
        assert_eq!(config.refund_for(0), Ok(0));
    }

    #[test]
    fn refund_of_a_huge_bill_is_exact() {
        let config = CounterConfig::default();
        let bill = i64::MAX / 4;
        let expected = i64::try_from(i128::from(bill) * 80 / 100).unwrap();
        assert_eq!(config.refund_for(bill), Ok(expected));
        assert_eq!(config.refund_for(i64::MAX).map(|r| r < i64::MAX), Ok(true));
    }

    #[test]
    fn refund_outside_i64_is_rejected() {
        let config = CounterConfig {
            refund_percent: 200,
            ..CounterConfig::default()
        };
        assert!(matches!(
            config.refund_for(i64::MAX),
            Err(CounterError::InvalidRequest(_))
        ));
    }
}
