use super::{Ledger, ProviderKind, within_limit};
use crate::domain::payment::{PaymentRecord, PaymentStatus};
use crate::domain::ports::{PaymentProvider, TransactionStoreBox};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Source account for outgoing bank transfers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankTransferCredentials {
    pub bank_id: String,
    pub account_number: String,
}

/// Bank transfers.
///
/// Allows the largest amounts (up to 50000) but does not settle on the spot:
/// records start out `Processing` rather than `Completed`.
pub struct BankTransferProvider {
    credentials: BankTransferCredentials,
    ledger: Ledger,
}

impl BankTransferProvider {
    pub const LIMIT: Decimal = dec!(50000);
    pub const INITIAL_STATUS: PaymentStatus = PaymentStatus::Processing;
    const PREFIX: &'static str = "BT";
    const DESCRIPTION: &'static str = "Bank transfer payment";

    pub fn new(credentials: BankTransferCredentials) -> Self {
        Self {
            credentials,
            ledger: Ledger::new(Self::PREFIX),
        }
    }

    pub fn with_store(credentials: BankTransferCredentials, store: TransactionStoreBox) -> Self {
        Self {
            credentials,
            ledger: Ledger::with_store(Self::PREFIX, store),
        }
    }

    pub fn credentials(&self) -> &BankTransferCredentials {
        &self.credentials
    }
}

#[async_trait]
impl PaymentProvider for BankTransferProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::BankTransfer
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

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> BankTransferProvider {
        BankTransferProvider::new(BankTransferCredentials {
            bank_id: "bank_123".to_string(),
            account_number: "acc_456".to_string(),
        })
    }

    #[test]
    fn test_validate_payment_limits() {
        let bank = provider();
        assert!(bank.validate_payment(dec!(50000)));
        assert!(bank.validate_payment(dec!(1000.00)));
        assert!(!bank.validate_payment(dec!(50000.01)));
        assert!(!bank.validate_payment(dec!(60000)));
        assert!(!bank.validate_payment(dec!(-0.01)));
    }

    #[tokio::test]
    async fn test_process_payment_starts_processing() {
        let bank = provider();
        let record = bank.process_payment(dec!(1000.00), "USD").await.unwrap();

        assert!(record.transaction_id.starts_with("BT_"));
        assert_eq!(record.status, PaymentStatus::Processing);
        assert_eq!(bank.get_status(&record.transaction_id).await, PaymentStatus::Processing);
    }

    #[tokio::test]
    async fn test_refund_while_processing() {
        let bank = provider();
        let record = bank.process_payment(dec!(1000.00), "USD").await.unwrap();

        assert!(bank.refund(&record.transaction_id).await);
        assert_eq!(bank.get_status(&record.transaction_id).await, PaymentStatus::Refunded);
    }
}
