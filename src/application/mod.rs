//! Application layer - Ports and use cases
//!
//! Services here depend on port traits only, never on a concrete adapter.

pub mod ports;
pub mod services;
