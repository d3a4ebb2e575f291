//! # Query Codec
//!
//! A query frame is `header ++ descriptor ++ input`, with a random non-zero
//! dejavu. The reply must echo that dejavu, carry the function-reply type
//! and be exactly the output size; anything else is rejected whole.

use crate::domain::{
    ContractCallSpec, DecodeError, FunctionDescriptor, MessageType, Packet, QueryEnvelope,
    RequestResponseHeader, Wire, HEADER_SIZE,
};

/// Build a query frame for a function.
///
/// # Panics
///
/// If `spec` is a procedure, or `input` is not exactly `spec.payload_size`
/// bytes long.
pub fn build_query(spec: &ContractCallSpec, input: &[u8]) -> QueryEnvelope {
    assert!(
        !spec.is_procedure(),
        "{} is a procedure and cannot be queried",
        spec.name
    );
    assert_eq!(
        input.len(),
        spec.payload_len(),
        "input size mismatch for {}",
        spec.name
    );

    let total = HEADER_SIZE + FunctionDescriptor::SIZE + input.len();
    QueryEnvelope {
        header: RequestResponseHeader::with_random_dejavu(
            MessageType::RequestContractFunction,
            total,
        ),
        descriptor: FunctionDescriptor {
            contract_index: spec.contract_index,
            input_type: spec.operation_id,
            input_size: spec.payload_size,
        },
        input: input.to_vec(),
    }
}

/// Check a reply against the request and return its body.
pub fn decode_reply(
    request_dejavu: u32,
    expected_size: usize,
    packet: Packet,
) -> Result<Vec<u8>, DecodeError> {
    let tag = packet.header.type_tag();
    if tag != MessageType::RespondContractFunction as u8 {
        return Err(DecodeError::UnexpectedMessageType {
            expected: MessageType::RespondContractFunction as u8,
            actual: tag,
        });
    }
    if packet.header.dejavu() != request_dejavu {
        return Err(DecodeError::DejavuMismatch {
            expected: request_dejavu,
            actual: packet.header.dejavu(),
        });
    }
    if packet.body.len() != expected_size {
        return Err(DecodeError::SizeMismatch {
            expected: expected_size,
            actual: packet.body.len(),
        });
    }
    Ok(packet.body)
}
