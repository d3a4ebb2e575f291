//! # Adapters Module
//!
//! I/O implementations of the outbound ports.

pub mod tcp_session;

pub use tcp_session::{SessionTimeouts, TcpNodeSession};
