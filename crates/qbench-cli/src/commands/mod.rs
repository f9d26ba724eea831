//! CLI command implementations.

pub mod common;
pub mod device;
pub mod devices;
pub mod gateset;
pub mod gatesets;
pub mod resolve;
pub mod version;
