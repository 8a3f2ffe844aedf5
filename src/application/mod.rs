//! Application layer containing the payment orchestration.
//!
//! `PaymentProcessor` is the single entry point over any provider. It enforces
//! validate-then-process ordering and otherwise delegates to the provider.

pub mod processor;
