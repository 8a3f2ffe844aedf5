use crate::providers::ProviderKind;
use miette::Diagnostic;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum PaymentError {
    #[error("Invalid payment amount for {provider}: {amount}")]
    #[diagnostic(
        code(payproc::validation),
        help("amounts must be positive and within the provider's limit")
    )]
    ValidationError { provider: ProviderKind, amount: Decimal },
    #[error("Duplicate transaction id: {0}")]
    #[diagnostic(code(payproc::duplicate_transaction))]
    DuplicateTransaction(String),
    #[error("Config error: {0}")]
    #[diagnostic(
        code(payproc::config),
        help("expected a JSON object tagged with \"provider\"")
    )]
    ConfigError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
