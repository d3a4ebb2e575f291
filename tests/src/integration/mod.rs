//! # Integration Flows
//!
//! Typed contract payloads from `tc-02-contracts` driven through the
//! `tc-01-call-engine` service, first against the in-crate mock session,
//! then against a real socket.

pub mod contract_flows;
pub mod fake_node;
pub mod tcp_flows;
