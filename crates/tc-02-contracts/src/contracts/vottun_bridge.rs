//! # VottunBridge (contract 13)
//!
//! Qubic/Ethereum bridge orders. The 32-byte `eth_address` fields are
//! entered and shown in identity form.

use crate::describe::{nul_terminated, Describe, Lines};
use tc_01_call_engine::bytes::BytesMut;
use tc_01_call_engine::{wire_struct, DecodeError, PublicKey, Wire};

/// Contract index.
pub const CONTRACT_INDEX: u32 = 13;

// =============================================================================
// FUNCTIONS
// =============================================================================

wire_struct! {
    /// Look up an order.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GetOrder {
        /// Order id
        pub order_id: u64,
    }
}

wire_struct! {
    /// Order as stored by the bridge.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct OrderResponse {
        /// Order id
        pub order_id: u64,
        /// Origin account
        pub origin_account: PublicKey,
        /// Destination account
        pub destination_account: PublicKey,
        /// Amount
        pub amount: u64,
        /// NUL-terminated memo
        pub memo: [u8; 64],
        /// Source chain id
        pub source_chain: u32,
    }
}

wire_struct! {
    /// Reply to [`GetOrder`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct OrderReply {
        /// 0 found
        pub status: u8,
        /// The order
        pub order: OrderResponse,
        /// NUL-terminated status text
        pub message: [u8; 32],
    }
}

impl Describe for OrderReply {
    fn describe(&self) -> String {
        Lines::default()
            .field("status", self.status)
            .field("message", nul_terminated(&self.message))
            .field("order_id", self.order.order_id)
            .key("origin_account", &self.order.origin_account)
            .key("destination_account", &self.order.destination_account)
            .field("amount", self.order.amount)
            .field("memo", nul_terminated(&self.order.memo))
            .field("source_chain", self.order.source_chain)
            .finish()
    }
}

wire_struct! {
    /// Total tokens received by the bridge.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GetTotalReceivedTokens {
        /// Unused by the contract
        pub amount: u64,
    }
}

wire_struct! {
    /// Admin public key.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GetAdminId {
        /// Selector
        pub id_input: u8,
    }
}

/// Tokens currently locked. Takes no input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GetTotalLockedTokens;

impl Wire for GetTotalLockedTokens {
    const SIZE: usize = 0;

    fn encode(&self, _out: &mut BytesMut) {}

    fn decode(_buf: &mut &[u8]) -> Result<Self, DecodeError> {
        Ok(Self)
    }
}

wire_struct! {
    /// Find an order by its Ethereum side.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GetOrderByDetails {
        /// Ethereum address
        pub eth_address: PublicKey,
        /// Amount
        pub amount: u64,
        /// 0 created, 1 completed, 2 refunded
        pub status: u8,
    }
}

wire_struct! {
    /// Reply to [`GetOrderByDetails`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct OrderByDetails {
        /// 0 found
        pub status: u8,
        /// Matching order id
        pub order_id: u64,
        /// Qubic destination for EVM to Qubic orders
        pub qubic_destination: PublicKey,
    }
}

impl Describe for OrderByDetails {
    fn describe(&self) -> String {
        Lines::default()
            .field("status", self.status)
            .field("order_id", self.order_id)
            .key("qubic_destination", &self.qubic_destination)
            .finish()
    }
}

// =============================================================================
// PROCEDURES
// =============================================================================

wire_struct! {
    /// Open a bridge order. Attach [`crate::BRIDGE_ORDER_FEE`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CreateOrder {
        /// Ethereum address
        pub eth_address: PublicKey,
        /// Amount to bridge
        pub amount: u64,
        /// Direction
        pub from_qubic_to_ethereum: bool,
    }
}

wire_struct! {
    /// Admin: replace the admin.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SetAdmin {
        /// New admin
        pub address: PublicKey,
    }
}

wire_struct! {
    /// Admin: add a manager.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct AddManager {
        /// Manager
        pub address: PublicKey,
    }
}

wire_struct! {
    /// Admin: remove a manager.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct RemoveManager {
        /// Manager
        pub address: PublicKey,
    }
}

wire_struct! {
    /// Manager: mark an order completed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CompleteOrder {
        /// Order id
        pub order_id: u64,
    }
}

wire_struct! {
    /// Manager: refund an order.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct RefundOrder {
        /// Order id
        pub order_id: u64,
    }
}

wire_struct! {
    /// Move tokens into the contract.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TransferToContract {
        /// Amount
        pub amount: u64,
    }
}

contract_calls! {
    index: CONTRACT_INDEX;
    functions {
        1 "vottun_bridge.get_order": GetOrder => OrderReply;
        4 "vottun_bridge.get_total_received_tokens": GetTotalReceivedTokens => u64;
        5 "vottun_bridge.get_admin_id": GetAdminId => PublicKey;
        6 "vottun_bridge.get_total_locked_tokens": GetTotalLockedTokens => u64;
        7 "vottun_bridge.get_order_by_details": GetOrderByDetails => OrderByDetails;
    }
    procedures {
        1 "vottun_bridge.create_order": CreateOrder;
        2 "vottun_bridge.set_admin": SetAdmin;
        3 "vottun_bridge.add_manager": AddManager;
        4 "vottun_bridge.remove_manager": RemoveManager;
        5 "vottun_bridge.complete_order": CompleteOrder;
        6 "vottun_bridge.refund_order": RefundOrder;
        7 "vottun_bridge.transfer_to_contract": TransferToContract;
    }
}
