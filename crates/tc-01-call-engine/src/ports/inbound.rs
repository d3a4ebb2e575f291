//! # Inbound Ports
//!
//! API trait defining what the call engine can do.

use crate::domain::{BroadcastReceipt, CallError, ContractCallSpec};
use shared_crypto::KeyMaterial;

/// Contract call API - inbound port.
///
/// Every method performs one independent exchange with the node. Nothing is
/// retried; a failed broadcast must be rebuilt by the caller because the
/// scheduled tick is only valid relative to the tick read at build time.
pub trait ContractCallApi {
    /// Node's current tick.
    fn current_tick(&mut self) -> Result<u32, CallError>;

    /// Sign and broadcast a procedure call from raw payload bytes.
    ///
    /// # Panics
    ///
    /// If `spec` is not a procedure or `payload` has the wrong size.
    fn invoke_raw(
        &mut self,
        spec: &ContractCallSpec,
        payload: &[u8],
        amount: u64,
        tick_offset: u32,
        keys: &KeyMaterial,
    ) -> Result<BroadcastReceipt, CallError>;

    /// Query a function from raw input bytes; returns exactly
    /// `output_size` bytes.
    ///
    /// # Panics
    ///
    /// If `spec` is not a function or `input` has the wrong size.
    fn query_raw(
        &mut self,
        spec: &ContractCallSpec,
        input: &[u8],
        output_size: usize,
    ) -> Result<Vec<u8>, CallError>;
}
