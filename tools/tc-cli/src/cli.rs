//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tc_01_call_engine::PublicKey;
use tc_02_contracts::{parse_public_key, PaymentMethod};

/// TC-CLI: contract calls against a tick-based ledger node
#[derive(Parser, Debug)]
#[command(name = "tc-cli")]
#[command(about = "Broadcast contract procedures and query contract functions on a ledger node")]
#[command(version)]
pub struct Cli {
    /// Options shared by every subcommand
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct GlobalArgs {
    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Node host
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Node port
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Ticks between the current tick and the scheduled one
    #[arg(long, global = true)]
    pub tick_offset: Option<u32>,

    /// 55-letter signing seed (prefer TC_SEED)
    #[arg(long, global = true)]
    pub seed: Option<String>,

    /// Log filter, e.g. "debug" or "tc_01_call_engine=trace"
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the identity of the configured seed
    Identity,

    /// Print the node's current tick
    Tick,

    /// List every known contract operation
    Calls,

    /// Broadcast a raw procedure payload
    Invoke {
        /// Operation name, e.g. qbay.list_in_market
        #[arg(long)]
        op: String,
        /// Payload as hex
        #[arg(long, default_value = "")]
        input_hex: String,
        /// Amount attached to the transaction
        #[arg(long, default_value_t = 0)]
        amount: u64,
    },

    /// Query a function with a raw input, print the output as hex
    Query {
        /// Operation name, e.g. qbay.get_info_of_nft_by_id
        #[arg(long)]
        op: String,
        /// Input as hex
        #[arg(long, default_value = "")]
        input_hex: String,
        /// Expected output size in bytes
        #[arg(long)]
        output_size: usize,
    },

    /// QBAY: number of NFTs held by a user
    NftCount {
        /// Identity or 64-char hex public key
        #[arg(long, value_parser = parse_key)]
        user: PublicKey,
    },

    /// QBAY: NFT details by id
    NftInfo {
        /// NFT id
        #[arg(long)]
        nft_id: u32,
    },

    /// QBAY: marketplace totals
    Marketplace,

    /// QBAY: list an NFT at a fixed price
    ListInMarket {
        /// NFT id
        #[arg(long)]
        nft_id: u32,
        /// Asking price
        #[arg(long)]
        price: u64,
    },

    /// QBAY: bid on a traditional auction
    Bid {
        /// NFT id
        #[arg(long)]
        nft_id: u32,
        /// Bid
        #[arg(long)]
        price: u64,
        /// qubic or cfb
        #[arg(long, default_value = "qubic", value_parser = parse_payment)]
        payment: PaymentMethod,
    },

    /// QIP: ICO details
    IcoInfo {
        /// ICO index
        #[arg(long)]
        index: u32,
    },

    /// QIP: buy ICO tokens
    BuyToken {
        /// ICO index
        #[arg(long)]
        index: u32,
        /// Tokens wanted
        #[arg(long)]
        amount: u64,
        /// Phase whose price is used for the payment estimate
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=3))]
        phase: u32,
    },

    /// QVAULT: vault state
    VaultData,

    /// VottunBridge: order details
    BridgeOrder {
        /// Order id
        #[arg(long)]
        order_id: u64,
    },

    /// VottunBridge: open a bridge order
    BridgeCreateOrder {
        /// Ethereum address in identity form
        #[arg(long, value_parser = parse_key)]
        eth_address: PublicKey,
        /// Amount to bridge
        #[arg(long)]
        amount: u64,
        /// Bridge from Qubic to Ethereum
        #[arg(long)]
        from_qubic_to_ethereum: bool,
    },
}

fn parse_key(s: &str) -> Result<PublicKey, String> {
    parse_public_key(s).map_err(|e| e.to_string())
}

fn parse_payment(s: &str) -> Result<PaymentMethod, String> {
    PaymentMethod::parse(s).ok_or_else(|| format!("'{}' is not qubic or cfb", s))
}
