//! Subcommand execution and result presentation.

use crate::cli::Command;
use crate::config::ClientConfig;
use anyhow::{bail, ensure, Context, Result};
use shared_crypto::{encode_identity, KeyMaterial};
use std::io::Write;
use tc_01_call_engine::{
    BroadcastReceipt, CallEngineService, ContractCallApi, ContractCallSpec, NodeSession,
    ProcedureInput, TcpNodeSession,
};
use tc_02_contracts::{
    qbay, qip, qvault, vottun_bridge, Describe, PaymentMethod, BRIDGE_ORDER_FEE, REGISTRY,
};
use tracing::{info, warn};

/// Open a TCP session to the configured node.
pub fn connect(config: &ClientConfig) -> Result<TcpNodeSession> {
    let addr = (config.node.host.as_str(), config.node.port);
    TcpNodeSession::connect(addr, config.timeouts())
        .with_context(|| format!("cannot reach node {}:{}", config.node.host, config.node.port))
}

/// Signing keys from the configured seed.
pub fn signing_keys(config: &ClientConfig) -> Result<KeyMaterial> {
    let seed = config
        .seed
        .as_deref()
        .context("no seed configured; set TC_SEED or pass --seed")?;
    KeyMaterial::from_seed(seed).context("invalid seed")
}

/// Print the identity of the configured seed.
pub fn show_identity(config: &ClientConfig, out: &mut dyn Write) -> Result<()> {
    let keys = signing_keys(config)?;
    writeln!(out, "{}", encode_identity(keys.public_key()))?;
    Ok(())
}

/// Print every registered operation.
pub fn show_calls(out: &mut dyn Write) -> Result<()> {
    for spec in REGISTRY.iter() {
        writeln!(
            out,
            "{:<45} {:<9} contract={:<3} op={:<3} input={}",
            spec.name, spec.kind, spec.contract_index, spec.operation_id, spec.payload_size
        )?;
    }
    Ok(())
}

/// Run one command against a node session.
pub fn execute<S: NodeSession>(
    command: &Command,
    config: &ClientConfig,
    service: &mut CallEngineService<S>,
    out: &mut dyn Write,
) -> Result<()> {
    let offset = config.transaction.tick_offset;
    match command {
        Command::Identity => show_identity(config, out),
        Command::Calls => show_calls(out),
        Command::Tick => {
            let tick = service.current_tick().context("cannot read current tick")?;
            writeln!(out, "{}", tick)?;
            Ok(())
        }
        Command::Invoke {
            op,
            input_hex,
            amount,
        } => {
            let spec = lookup(op)?;
            ensure!(spec.is_procedure(), "{} is a function; use `query`", spec.name);
            let payload = raw_input(spec, input_hex)?;
            let keys = signing_keys(config)?;
            let receipt = service
                .invoke_raw(spec, &payload, *amount, offset, &keys)
                .with_context(|| format!("broadcast of {} failed", spec.name))?;
            print_receipt(out, &receipt)
        }
        Command::Query {
            op,
            input_hex,
            output_size,
        } => {
            let spec = lookup(op)?;
            ensure!(!spec.is_procedure(), "{} is a procedure; use `invoke`", spec.name);
            let input = raw_input(spec, input_hex)?;
            let output = service
                .query_raw(spec, &input, *output_size)
                .with_context(|| format!("query of {} failed", spec.name))?;
            writeln!(out, "{}", hex::encode(output))?;
            Ok(())
        }
        Command::NftCount { user } => {
            let count = service.query(&qbay::GetNumberOfNftForUser { user: *user })?;
            writeln!(out, "{}", count.describe())?;
            Ok(())
        }
        Command::NftInfo { nft_id } => {
            let info = service.query(&qbay::GetInfoOfNftById { nft_id: *nft_id })?;
            writeln!(out, "{}", info.describe())?;
            Ok(())
        }
        Command::Marketplace => {
            let info = service.query(&qbay::GetInfoOfMarketplace::default())?;
            writeln!(out, "{}", info.describe())?;
            Ok(())
        }
        Command::ListInMarket { nft_id, price } => {
            let payload = qbay::ListInMarket {
                price: *price,
                nft_id: *nft_id,
            };
            broadcast(service, config, out, &payload, 0)
        }
        Command::Bid {
            nft_id,
            price,
            payment,
        } => {
            let payload = qbay::BidOnTraditionalAuction {
                price: *price,
                nft_id: *nft_id,
                payment_method: *payment,
            };
            if *payment == PaymentMethod::Cfb {
                info!("Bid settles in CFB; no amount attached");
            }
            broadcast(service, config, out, &payload, payload.invocation_amount())
        }
        Command::IcoInfo { index } => {
            let info = service.query(&qip::GetIcoInfo {
                index_of_ico: *index,
            })?;
            writeln!(out, "{}", info.describe())?;
            Ok(())
        }
        Command::BuyToken {
            index,
            amount,
            phase,
        } => {
            let lookup = service.query(&qip::GetIcoInfo {
                index_of_ico: *index,
            });
            let payment = match lookup {
                Ok(info) => qip::estimate_payment(&info, *amount, *phase)?,
                Err(e) => {
                    warn!("ICO #{} lookup failed ({}); using fallback price", index, e);
                    qip::fallback_payment(*amount)
                }
            };
            writeln!(out, "estimated payment: {} (phase {} price)", payment, phase)?;
            let payload = qip::BuyToken {
                index_of_ico: *index,
                amount: *amount,
            };
            broadcast(service, config, out, &payload, payment)
        }
        Command::VaultData => {
            let data = service.query(&qvault::GetData::default())?;
            writeln!(out, "{}", data.describe())?;
            Ok(())
        }
        Command::BridgeOrder { order_id } => {
            let order = service.query(&vottun_bridge::GetOrder {
                order_id: *order_id,
            })?;
            writeln!(out, "{}", order.describe())?;
            Ok(())
        }
        Command::BridgeCreateOrder {
            eth_address,
            amount,
            from_qubic_to_ethereum,
        } => {
            let payload = vottun_bridge::CreateOrder {
                eth_address: *eth_address,
                amount: *amount,
                from_qubic_to_ethereum: *from_qubic_to_ethereum,
            };
            broadcast(service, config, out, &payload, BRIDGE_ORDER_FEE)
        }
    }
}

fn broadcast<S: NodeSession, P: ProcedureInput>(
    service: &mut CallEngineService<S>,
    config: &ClientConfig,
    out: &mut dyn Write,
    payload: &P,
    amount: u64,
) -> Result<()> {
    let keys = signing_keys(config)?;
    let receipt = service
        .invoke(payload, amount, config.transaction.tick_offset, &keys)
        .with_context(|| format!("broadcast of {} failed", P::SPEC.name))?;
    print_receipt(out, &receipt)
}

fn print_receipt(out: &mut dyn Write, receipt: &BroadcastReceipt) -> Result<()> {
    writeln!(out, "{}", receipt)?;
    writeln!(out, "{}", receipt.confirmation_hint())?;
    Ok(())
}

fn lookup(op: &str) -> Result<&'static ContractCallSpec> {
    match REGISTRY.find(op) {
        Some(spec) => Ok(spec),
        None => bail!("unknown operation '{}'; see `tc-cli calls`", op),
    }
}

fn raw_input(spec: &ContractCallSpec, input_hex: &str) -> Result<Vec<u8>> {
    let bytes = hex::decode(input_hex.trim()).context("input is not valid hex")?;
    ensure!(
        bytes.len() == spec.payload_len(),
        "{} takes {} input bytes, got {}",
        spec.name,
        spec.payload_len(),
        bytes.len()
    );
    Ok(bytes)
}
