use crate::model::{OrderId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for balance records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BalanceRecordId(pub u32);

impl From<u32> for BalanceRecordId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for BalanceRecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "balance_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Created,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    /// Balance debited for an order.
    Payment,
    /// Balance credited back for a cancelled order.
    Refund,
    /// Balance credit awaiting (or past) admin confirmation.
    Topup,
}

/// One movement of a user's balance.
///
/// `nominal` is a magnitude; `record_type` gives the direction. Once `status` is
/// `completed` the record never changes again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub id: BalanceRecordId,
    pub user_id: UserId,
    pub member_name: String,
    pub order_id: Option<OrderId>,
    pub nominal: i64,
    pub created_date: DateTime<Utc>,
    pub completed_date: Option<DateTime<Utc>>,
    pub status: RecordStatus,
    #[serde(rename = "type")]
    pub record_type: RecordType,
}

impl BalanceRecord {
    /// Signed effect on the balance once completed.
    pub fn signed_nominal(&self) -> i64 {
        match self.record_type {
            RecordType::Payment => -self.nominal,
            RecordType::Refund | RecordType::Topup => self.nominal,
        }
    }
}
