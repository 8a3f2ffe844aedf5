pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod providers;

pub use application::processor::{DEFAULT_CURRENCY, PaymentProcessor};
pub use config::ProviderConfig;
pub use domain::payment::{PaymentRecord, PaymentStatus};
pub use domain::ports::{PaymentProvider, ProviderBox, TransactionStore, TransactionStoreBox};
pub use error::{PaymentError, Result};
pub use providers::ProviderKind;
