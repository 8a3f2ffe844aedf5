//! Provider configuration and the factory that turns it into a provider.

use crate::domain::ports::ProviderBox;
use crate::error::Result;
use crate::providers::bank_transfer::BankTransferCredentials;
use crate::providers::card::CardCredentials;
use crate::providers::wallet::WalletTransferCredentials;
use crate::providers::{BankTransferProvider, CardProvider, ProviderKind, WalletTransferProvider};
use serde::{Deserialize, Serialize};

/// Which provider to build, with its credentials.
///
/// Deserializes from a JSON object tagged by `provider`, e.g.
/// `{"provider": "card", "merchant_id": "m-1", "api_key": "k"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum ProviderConfig {
    WalletTransfer(WalletTransferCredentials),
    Card(CardCredentials),
    BankTransfer(BankTransferCredentials),
}

impl ProviderConfig {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            ProviderConfig::WalletTransfer(_) => ProviderKind::WalletTransfer,
            ProviderConfig::Card(_) => ProviderKind::Card,
            ProviderConfig::BankTransfer(_) => ProviderKind::BankTransfer,
        }
    }

    /// Builds a fresh provider with its own empty store.
    pub fn build(self) -> ProviderBox {
        match self {
            ProviderConfig::WalletTransfer(credentials) => {
                Box::new(WalletTransferProvider::new(credentials))
            }
            ProviderConfig::Card(credentials) => Box::new(CardProvider::new(credentials)),
            ProviderConfig::BankTransfer(credentials) => {
                Box::new(BankTransferProvider::new(credentials))
            }
        }
    }
}
