//! TC-CLI: command-line front end of the Tick-Client
//!
//! Resolves configuration, opens one node session per invocation and maps
//! each subcommand onto a broadcast or a query of the call engine.
//!
//! ```text
//! tc-cli [--config FILE] [--host H] [--port P] [--tick-offset N] <command>
//!   identity | tick | calls
//!   invoke --op NAME --input-hex HEX [--amount N]
//!   query  --op NAME --input-hex HEX --output-size N
//!   nft-count | nft-info | marketplace | list-in-market | bid
//!   ico-info | buy-token | vault-data | bridge-order | bridge-create-order
//! ```

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Command, GlobalArgs};
pub use config::{ClientConfig, ConfigError};
