use super::payment::{PaymentRecord, PaymentStatus};
use crate::error::Result;
use crate::providers::ProviderKind;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Storage for the records issued by a single provider.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Inserts a new record. Fails if the identifier is already taken.
    async fn insert(&self, record: PaymentRecord) -> Result<()>;
    async fn get(&self, transaction_id: &str) -> Option<PaymentRecord>;
    /// Marks a record refunded. Returns `false` if the identifier is unknown.
    async fn refund(&self, transaction_id: &str) -> bool;
    async fn count(&self) -> usize;
}

pub type TransactionStoreBox = Box<dyn TransactionStore>;

/// A payment method: validation rule, record creation and record lookup.
///
/// `process_payment` does not validate. Callers go through
/// [`PaymentProcessor`](crate::application::processor::PaymentProcessor) to get
/// validate-then-process ordering.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Returns true iff `0 < amount <= limit` for this provider.
    fn validate_payment(&self, amount: Decimal) -> bool;

    async fn process_payment(&self, amount: Decimal, currency: &str) -> Result<PaymentRecord>;

    async fn refund(&self, transaction_id: &str) -> bool;

    async fn find_record(&self, transaction_id: &str) -> Option<PaymentRecord>;

    /// Stored status, or `Failed` when the identifier is unknown.
    async fn get_status(&self, transaction_id: &str) -> PaymentStatus {
        self.find_record(transaction_id)
            .await
            .map(|record| record.status)
            .unwrap_or(PaymentStatus::Failed)
    }

    async fn transaction_count(&self) -> usize;
}

pub type ProviderBox = Box<dyn PaymentProvider>;
