use crate::config::ProviderConfig;
use crate::domain::payment::{PaymentRecord, PaymentStatus};
use crate::domain::ports::{PaymentProvider, ProviderBox};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;

/// Currency used by [`PaymentProcessor::process_default_currency`].
pub const DEFAULT_CURRENCY: &str = "USD";

/// Uniform front end over a single payment provider.
///
/// The processor holds no limits and no records of its own. Validation rules
/// and the transaction store both belong to the wrapped provider.
pub struct PaymentProcessor {
    provider: ProviderBox,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor` that takes ownership of `provider`.
    pub fn new(provider: ProviderBox) -> Self {
        Self { provider }
    }

    /// Builds the configured provider and wraps it.
    pub fn from_config(config: ProviderConfig) -> Self {
        Self::new(config.build())
    }

    pub fn provider(&self) -> &dyn PaymentProvider {
        self.provider.as_ref()
    }

    /// Validates `amount` against the provider, then processes it.
    ///
    /// Returns [`PaymentError::ValidationError`] without touching the store
    /// when the provider rejects the amount.
    #[tracing::instrument(skip(self), fields(provider = %self.provider.kind()))]
    pub async fn process_transaction(&self, amount: Decimal, currency: &str) -> Result<PaymentRecord> {
        if !self.provider.validate_payment(amount) {
            tracing::warn!(%amount, "payment amount rejected");
            return Err(PaymentError::ValidationError {
                provider: self.provider.kind(),
                amount,
            });
        }
        self.provider.process_payment(amount, currency).await
    }

    pub async fn process_default_currency(&self, amount: Decimal) -> Result<PaymentRecord> {
        self.process_transaction(amount, DEFAULT_CURRENCY).await
    }

    /// Returns whether the transaction was found and marked refunded.
    pub async fn request_refund(&self, transaction_id: &str) -> bool {
        self.provider.refund(transaction_id).await
    }

    /// Current status of a transaction. Unknown ids report `Failed`; use
    /// [`find_status`](Self::find_status) to tell the two apart.
    pub async fn check_status(&self, transaction_id: &str) -> PaymentStatus {
        self.provider.get_status(transaction_id).await
    }

    /// Like `check_status`, but `None` for an unknown id.
    pub async fn find_status(&self, transaction_id: &str) -> Option<PaymentStatus> {
        self.lookup(transaction_id).await.map(|record| record.status)
    }

    pub async fn lookup(&self, transaction_id: &str) -> Option<PaymentRecord> {
        self.provider.find_record(transaction_id).await
    }

    pub async fn transaction_count(&self) -> usize {
        self.provider.transaction_count().await
    }
}
