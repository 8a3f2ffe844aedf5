//! Domain types and the ports the rest of the crate plugs into.

pub mod payment;
pub mod ports;
