use super::{Ledger, ProviderKind, within_limit};
use crate::domain::payment::{PaymentRecord, PaymentStatus};
use crate::domain::ports::{PaymentProvider, TransactionStoreBox};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Merchant credentials for the card network. Stored only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardCredentials {
    pub merchant_id: String,
    pub api_key: String,
}

/// Card payments. Settle immediately, capped at 5000 per transaction.
pub struct CardProvider {
    credentials: CardCredentials,
    ledger: Ledger,
}

impl CardProvider {
    pub const LIMIT: Decimal = dec!(5000);
    pub const INITIAL_STATUS: PaymentStatus = PaymentStatus::Completed;
    const PREFIX: &'static str = "CC";
    const DESCRIPTION: &'static str = "Credit card payment";

    pub fn new(credentials: CardCredentials) -> Self {
        Self {
            credentials,
            ledger: Ledger::new(Self::PREFIX),
        }
    }

    pub fn with_store(credentials: CardCredentials, store: TransactionStoreBox) -> Self {
        Self {
            credentials,
            ledger: Ledger::with_store(Self::PREFIX, store),
        }
    }

    pub fn credentials(&self) -> &CardCredentials {
        &self.credentials
    }
}

#[async_trait]
impl PaymentProvider for CardProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Card
    }

    fn validate_payment(&self, amount: Decimal) -> bool {
        within_limit(amount, Self::LIMIT)
    }

    async fn process_payment(&self, amount: Decimal, currency: &str) -> Result<PaymentRecord> {
        self.ledger
            .open(amount, currency, Self::DESCRIPTION, Self::INITIAL_STATUS)
            .await
    }

    async fn refund(&self, transaction_id: &str) -> bool {
        self.ledger.refund(transaction_id).await
    }

    async fn find_record(&self, transaction_id: &str) -> Option<PaymentRecord> {
        self.ledger.find(transaction_id).await
    }

    async fn transaction_count(&self) -> usize {
        self.ledger.len().await
    }
}
