use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a payment record.
///
/// Providers pick the initial state when the record is created. A refund moves
/// any record straight to `Refunded`; no other transition is enforced.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Refunded,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Processing => "PROCESSING",
            PaymentStatus::Completed => "COMPLETED",
            PaymentStatus::Failed => "FAILED",
            PaymentStatus::Refunded => "REFUNDED",
        };
        f.write_str(label)
    }
}

/// Snapshot of a single processed payment.
///
/// Everything except `status` is fixed at creation. Records are owned by the
/// provider that created them and only handed out as clones.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PaymentRecord {
    /// Amount charged, always positive once validated.
    pub amount: Decimal,
    /// Three-letter currency code. Not checked.
    pub currency: String,
    /// Human-readable label set by the provider.
    pub description: String,
    /// Identifier unique within the issuing provider.
    pub transaction_id: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    pub status: PaymentStatus,
}

impl PaymentRecord {
    pub fn new(
        transaction_id: String,
        amount: Decimal,
        currency: impl Into<String>,
        description: impl Into<String>,
        status: PaymentStatus,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            description: description.into(),
            transaction_id,
            created_at: Utc::now(),
            status,
        }
    }

    /// Marks the record refunded, whatever its current status.
    pub fn refund(&mut self) {
        self.status = PaymentStatus::Refunded;
    }
}
