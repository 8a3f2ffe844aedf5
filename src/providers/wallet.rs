use super::{Ledger, ProviderKind, within_limit};
use crate::domain::payment::{PaymentRecord, PaymentStatus};
use crate::domain::ports::{PaymentProvider, TransactionStoreBox};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// OAuth client credentials for the wallet service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletTransferCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Wallet-to-wallet transfers, up to 10000 per transaction.
pub struct WalletTransferProvider {
    credentials: WalletTransferCredentials,
    ledger: Ledger,
}

impl WalletTransferProvider {
    pub const LIMIT: Decimal = dec!(10000);
    pub const INITIAL_STATUS: PaymentStatus = PaymentStatus::Completed;
    const PREFIX: &'static str = "WT";
    const DESCRIPTION: &'static str = "Wallet transfer payment";

    pub fn new(credentials: WalletTransferCredentials) -> Self {
        Self {
            credentials,
            ledger: Ledger::new(Self::PREFIX),
        }
    }

    pub fn with_store(credentials: WalletTransferCredentials, store: TransactionStoreBox) -> Self {
        Self {
            credentials,
            ledger: Ledger::with_store(Self::PREFIX, store),
        }
    }

    pub fn credentials(&self) -> &WalletTransferCredentials {
        &self.credentials
    }
}

#[async_trait]
impl PaymentProvider for WalletTransferProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::WalletTransfer
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
