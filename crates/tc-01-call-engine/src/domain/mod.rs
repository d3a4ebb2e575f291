//! # Domain Module
//!
//! Wire-level types of the call engine. Nothing in here performs I/O.

pub mod call_spec;
pub mod entities;
pub mod errors;
pub mod header;
pub mod wire;

pub use call_spec::*;
pub use entities::*;
pub use errors::*;
pub use header::*;
pub use wire::Wire;
