//! One module per contract: payload types, output types and call specs.

pub mod qbay;
pub mod qip;
pub mod qvault;
pub mod vottun_bridge;
