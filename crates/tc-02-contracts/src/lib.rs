//! # TC-02 Contract Catalog
//!
//! Fixed-size payload and output layouts for every contract operation the
//! client knows, with their call specs gathered in one static [`REGISTRY`].
//!
//! **Subsystem ID:** 02
//!
//! ## Contracts
//!
//! | Module | Index | Functions | Procedures |
//! |--------|-------|-----------|------------|
//! | `qvault` | 10 | 1 | 12 |
//! | `qip` | 11 | 1 | 3 |
//! | `qbay` | 12 | 7 | 17 |
//! | `vottun_bridge` | 13 | 5 | 7 |
//!
//! Every payload is tightly packed little-endian; sizes are fixed at compile
//! time through [`tc_01_call_engine::Wire`]. Embedded public keys stay raw
//! bytes; [`Describe`] renders them as identities for display.

#![warn(missing_docs)]
#![warn(clippy::all)]

#[macro_use]
mod macros;

pub mod contracts;
pub mod describe;
pub mod errors;
pub mod values;

// Re-exports
pub use contracts::{qbay, qip, qvault, vottun_bridge};
pub use describe::Describe;
pub use errors::ContractError;
pub use values::{
    parse_public_key, Asset, AssetName, PaymentMethod, Uri64, BRIDGE_ORDER_FEE, QBAY_MINT_FEE,
    QBAY_TRANSFER_RIGHTS_FEE, QIP_FALLBACK_UNIT_PRICE, QIP_TRANSFER_RIGHTS_FEE,
};

use tc_01_call_engine::CallRegistry;

/// Every known contract operation, addressable as `<contract>.<operation>`.
pub const REGISTRY: CallRegistry = CallRegistry::new(&[
    qvault::CALLS,
    qip::CALLS,
    qbay::CALLS,
    vottun_bridge::CALLS,
]);

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
