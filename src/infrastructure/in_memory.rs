use crate::domain::payment::PaymentRecord;
use crate::domain::ports::TransactionStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for payment records.
///
/// Uses `Arc<RwLock<HashMap<String, PaymentRecord>>>` keyed by transaction id.
/// Each provider owns its own instance; nothing is shared between providers.
#[derive(Default, Clone)]
pub struct InMemoryTransactionStore {
    records: Arc<RwLock<HashMap<String, PaymentRecord>>>,
}

impl InMemoryTransactionStore {
    /// Creates a new, empty in-memory transaction store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn insert(&self, record: PaymentRecord) -> Result<()> {
        let mut records = self.records.write().await;
        match records.entry(record.transaction_id.clone()) {
            Entry::Occupied(entry) => Err(PaymentError::DuplicateTransaction(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(record);
                Ok(())
            }
        }
    }

    async fn get(&self, transaction_id: &str) -> Option<PaymentRecord> {
        let records = self.records.read().await;
        records.get(transaction_id).cloned()
    }

    async fn refund(&self, transaction_id: &str) -> bool {
        let mut records = self.records.write().await;
        match records.get_mut(transaction_id) {
            Some(record) => {
                record.refund();
                true
            }
            None => false,
        }
    }

    async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}
