//! # Call Engine Service
//!
//! Broadcast and query dispatch on top of a [`NodeSession`].
//!
//! ## Broadcast
//!
//! 1. read the current tick, schedule at `tick + offset`
//! 2. build and sign the envelope
//! 3. send it verbatim
//! 4. only after a successful send, derive the tx hash from the
//!    post-signature digest
//!
//! ## Query
//!
//! 1. build the query frame with a fresh dejavu
//! 2. send it, receive exactly one reply
//! 3. accept the reply only if type, dejavu and size all match

use crate::algorithms::{
    build_query, build_transaction, decode_reply, post_signature_digest, scheduled_tick, tx_hash,
    BuiltTransaction,
};
use crate::domain::{
    BroadcastReceipt, CallError, ContractCallSpec, FunctionInput, ProcedureInput, Wire,
};
use crate::ports::inbound::ContractCallApi;
use crate::ports::outbound::NodeSession;
use shared_crypto::KeyMaterial;
use tracing::{debug, info, warn};

/// Contract call engine over one node session.
pub struct CallEngineService<S: NodeSession> {
    session: S,
}

impl<S: NodeSession> CallEngineService<S> {
    /// Create a new service.
    pub fn new(session: S) -> Self {
        Self { session }
    }

    /// Borrow the session.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Mutably borrow the session.
    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    /// Take the session back.
    pub fn into_session(self) -> S {
        self.session
    }

    /// Sign and broadcast a typed procedure payload.
    pub fn invoke<P: ProcedureInput>(
        &mut self,
        payload: &P,
        amount: u64,
        tick_offset: u32,
        keys: &KeyMaterial,
    ) -> Result<BroadcastReceipt, CallError> {
        let bytes = payload.to_bytes();
        self.invoke_raw(&P::SPEC, &bytes, amount, tick_offset, keys)
    }

    /// Query a typed function and decode its output.
    pub fn query<F: FunctionInput>(&mut self, input: &F) -> Result<F::Output, CallError> {
        let raw = self.query_raw(&F::SPEC, &input.to_bytes(), F::Output::SIZE)?;
        Ok(F::Output::from_bytes(&raw)?)
    }

    fn dispatch_broadcast(
        &mut self,
        spec: &ContractCallSpec,
        built: BuiltTransaction,
    ) -> Result<BroadcastReceipt, CallError> {
        let frame = built.envelope.to_bytes();
        if let Err(e) = self.session.send(&frame) {
            warn!("[tc-01] broadcast of {} failed: {}", spec.name, e);
            return Err(e.into());
        }

        let envelope = built.envelope;
        let post = post_signature_digest(envelope.metadata(), envelope.payload(), envelope.signature());
        let receipt = BroadcastReceipt {
            tx_hash: tx_hash(&post),
            tick: envelope.metadata().tick,
            metadata: envelope.metadata().clone(),
            payload: envelope.payload().to_vec(),
            pre_signature_digest: built.pre_signature_digest,
        };
        info!(
            "[tc-01] broadcast {} ({} bytes) for tick {}: {}",
            spec.name,
            frame.len(),
            receipt.tick,
            receipt.tx_hash
        );
        Ok(receipt)
    }
}

impl<S: NodeSession> ContractCallApi for CallEngineService<S> {
    fn current_tick(&mut self) -> Result<u32, CallError> {
        self.session.current_tick()
    }

    fn invoke_raw(
        &mut self,
        spec: &ContractCallSpec,
        payload: &[u8],
        amount: u64,
        tick_offset: u32,
        keys: &KeyMaterial,
    ) -> Result<BroadcastReceipt, CallError> {
        let current = self.session.current_tick()?;
        let tick = scheduled_tick(current, tick_offset);
        debug!(
            "[tc-01] current tick {}, scheduling {} at {}",
            current, spec.name, tick
        );
        let built = build_transaction(spec, payload, amount, tick, keys);
        self.dispatch_broadcast(spec, built)
    }

    fn query_raw(
        &mut self,
        spec: &ContractCallSpec,
        input: &[u8],
        output_size: usize,
    ) -> Result<Vec<u8>, CallError> {
        let query = build_query(spec, input);
        let dejavu = query.header.dejavu();

        self.session.send(&query.to_bytes())?;
        let packet = self.session.receive()?;
        let body = decode_reply(dejavu, output_size, packet).map_err(|e| {
            warn!("[tc-01] query {} rejected: {}", spec.name, e);
            e
        })?;

        debug!("[tc-01] query {} returned {} bytes", spec.name, body.len());
        Ok(body)
    }
}
