//! Concrete payment providers.
//!
//! The set of providers is closed: [`ProviderKind`] names every variant and
//! [`ProviderConfig::build`](crate::config::ProviderConfig::build) is the only
//! place that picks one at runtime.

pub mod bank_transfer;
pub mod card;
pub mod wallet;

pub use bank_transfer::BankTransferProvider;
pub use card::CardProvider;
pub use wallet::WalletTransferProvider;

use crate::domain::payment::{PaymentRecord, PaymentStatus};
use crate::domain::ports::TransactionStoreBox;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryTransactionStore;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    WalletTransfer,
    Card,
    BankTransfer,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderKind::WalletTransfer => "wallet_transfer",
            ProviderKind::Card => "card",
            ProviderKind::BankTransfer => "bank_transfer",
        };
        f.write_str(name)
    }
}

/// Returns true iff `0 < amount <= limit`.
pub(crate) fn within_limit(amount: Decimal, limit: Decimal) -> bool {
    amount > Decimal::ZERO && amount <= limit
}

/// Record bookkeeping shared by every provider.
///
/// Owns the provider's store and the sequence that makes transaction ids
/// unique. The counter is atomic so concurrent callers never draw the same id.
pub(crate) struct Ledger {
    prefix: &'static str,
    sequence: AtomicU64,
    store: TransactionStoreBox,
}

impl Ledger {
    pub(crate) fn new(prefix: &'static str) -> Self {
        Self::with_store(prefix, Box::new(InMemoryTransactionStore::new()))
    }

    pub(crate) fn with_store(prefix: &'static str, store: TransactionStoreBox) -> Self {
        Self {
            prefix,
            sequence: AtomicU64::new(0),
            store,
        }
    }

    fn next_transaction_id(&self) -> String {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}_{:08}", self.prefix, seq)
    }

    /// Creates a record with a fresh id and stores it.
    pub(crate) async fn open(
        &self,
        amount: Decimal,
        currency: &str,
        description: &str,
        status: PaymentStatus,
    ) -> Result<PaymentRecord> {
        let record = PaymentRecord::new(
            self.next_transaction_id(),
            amount,
            currency,
            description,
            status,
        );
        self.store.insert(record.clone()).await?;
        tracing::info!(
            transaction_id = %record.transaction_id,
            %amount,
            currency,
            status = %record.status,
            "payment recorded"
        );
        Ok(record)
    }

    pub(crate) async fn refund(&self, transaction_id: &str) -> bool {
        let refunded = self.store.refund(transaction_id).await;
        if refunded {
            tracing::info!(transaction_id, "payment refunded");
        } else {
            tracing::warn!(transaction_id, "refund requested for unknown transaction");
        }
        refunded
    }

    pub(crate) async fn find(&self, transaction_id: &str) -> Option<PaymentRecord> {
        let record = self.store.get(transaction_id).await;
        tracing::debug!(transaction_id, found = record.is_some(), "transaction lookup");
        record
    }

    pub(crate) async fn len(&self) -> usize {
        self.store.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn test_within_limit_bounds() {
        assert!(within_limit(dec!(0.01), dec!(10)));
        assert!(within_limit(dec!(10), dec!(10)));
        assert!(!within_limit(dec!(10.0001), dec!(10)));
        assert!(!within_limit(Decimal::ZERO, dec!(10)));
        assert!(!within_limit(dec!(-5), dec!(10)));
    }

    #[test]
    fn test_kind_display_matches_serde() {
        for kind in [
            ProviderKind::WalletTransfer,
            ProviderKind::Card,
            ProviderKind::BankTransfer,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[tokio::test]
    async fn test_ledger_ids_are_sequential() {
        let ledger = Ledger::new("XX");
        let first = ledger
            .open(dec!(1), "USD", "test", PaymentStatus::Completed)
            .await
            .unwrap();
        let second = ledger
            .open(dec!(1), "USD", "test", PaymentStatus::Completed)
            .await
            .unwrap();
        assert_eq!(first.transaction_id, "XX_00000001");
        assert_eq!(second.transaction_id, "XX_00000002");
        assert_eq!(ledger.len().await, 2);
    }

    #[tokio::test]
    async fn test_ledger_ids_unique_back_to_back() {
        let ledger = Ledger::new("XX");
        let mut ids = HashSet::new();
        for _ in 0..1000 {
            let record = ledger
                .open(dec!(1), "USD", "test", PaymentStatus::Pending)
                .await
                .unwrap();
            assert!(ids.insert(record.transaction_id));
        }
        assert_eq!(ledger.len().await, 1000);
    }

    #[tokio::test]
    async fn test_ledger_refund_and_find() {
        let ledger = Ledger::new("XX");
        let record = ledger
            .open(dec!(1), "USD", "test", PaymentStatus::Processing)
            .await
            .unwrap();

        assert!(ledger.refund(&record.transaction_id).await);
        let found = ledger.find(&record.transaction_id).await.unwrap();
        assert_eq!(found.status, PaymentStatus::Refunded);

        assert!(!ledger.refund("XX_99999999").await);
        assert!(ledger.find("XX_99999999").await.is_none());
    }
}
