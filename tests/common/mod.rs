#![allow(dead_code)]

use payproc::PaymentProcessor;
use payproc::providers::bank_transfer::BankTransferCredentials;
use payproc::providers::card::CardCredentials;
use payproc::providers::wallet::WalletTransferCredentials;
use payproc::providers::{BankTransferProvider, CardProvider, WalletTransferProvider};

pub fn wallet_credentials() -> WalletTransferCredentials {
    WalletTransferCredentials {
        client_id: "client_id".to_string(),
        client_secret: "client_secret".to_string(),
    }
}

pub fn card_credentials() -> CardCredentials {
    CardCredentials {
        merchant_id: "merchant_id".to_string(),
        api_key: "api_key".to_string(),
    }
}

pub fn bank_credentials() -> BankTransferCredentials {
    BankTransferCredentials {
        bank_id: "bank_123".to_string(),
        account_number: "acc_456".to_string(),
    }
}

pub fn wallet_processor() -> PaymentProcessor {
    PaymentProcessor::new(Box::new(WalletTransferProvider::new(wallet_credentials())))
}

pub fn card_processor() -> PaymentProcessor {
    PaymentProcessor::new(Box::new(CardProvider::new(card_credentials())))
}

pub fn bank_processor() -> PaymentProcessor {
    PaymentProcessor::new(Box::new(BankTransferProvider::new(bank_credentials())))
}
