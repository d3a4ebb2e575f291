//! # QIP Initial Coin Offerings (contract 11)
//!
//! An ICO sells an asset in three phases, each with its own price and
//! volume, and splits the proceeds across ten addresses by percent.

use crate::describe::{identity, Describe, Lines};
use crate::errors::ContractError;
use crate::values::{Asset, AssetName, QIP_FALLBACK_UNIT_PRICE};
use tc_01_call_engine::{wire_struct, PublicKey};

/// Contract index.
pub const CONTRACT_INDEX: u32 = 11;

/// Number of proceeds recipients per ICO.
pub const RECIPIENTS: usize = 10;

/// Number of sale phases.
pub const PHASES: usize = 3;

wire_struct! {
    /// Look up an ICO by index.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GetIcoInfo {
        /// ICO index
        pub index_of_ico: u32,
    }
}

wire_struct! {
    /// State of one ICO.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct IcoInfo {
        /// Who created the ICO
        pub creator_of_ico: PublicKey,
        /// Asset issuer
        pub issuer: PublicKey,
        /// Proceeds recipients
        pub addresses: [PublicKey; RECIPIENTS],
        /// Asset sold
        pub asset_name: AssetName,
        /// Price per phase
        pub prices: [u64; PHASES],
        /// Volume per phase
        pub sale_amounts: [u64; PHASES],
        /// Unsold volume per phase
        pub remaining_amounts: [u64; PHASES],
        /// Proceeds split per recipient
        pub percents: [u32; RECIPIENTS],
        /// First epoch of phase 1
        pub start_epoch: u32,
    }
}

impl IcoInfo {
    /// Price of `phase` (1, 2 or 3).
    pub fn price_for_phase(&self, phase: u32) -> Result<u64, ContractError> {
        match phase {
            1..=3 => Ok(self.prices[phase as usize - 1]),
            other => Err(ContractError::InvalidPhase(other)),
        }
    }
}

impl Describe for IcoInfo {
    fn describe(&self) -> String {
        let mut lines = Lines::default()
            .key("creator_of_ico", &self.creator_of_ico)
            .key("issuer", &self.issuer)
            .field("asset_name", self.asset_name)
            .field("start_epoch", self.start_epoch);
        for phase in 0..PHASES {
            lines = lines.field(
                &format!("phase_{}", phase + 1),
                format!(
                    "price {} sale {} remaining {}",
                    self.prices[phase], self.sale_amounts[phase], self.remaining_amounts[phase]
                ),
            );
        }
        for (slot, (address, percent)) in self.addresses.iter().zip(self.percents).enumerate() {
            lines = lines.field(
                &format!("address_{}", slot + 1),
                format!("{} ({}%)", identity(address), percent),
            );
        }
        lines.finish()
    }
}

/// Amount to attach when buying `amount` tokens at the price of `phase`.
///
/// The contract charges the price of the phase that is active when the
/// transaction executes, so this is an estimate.
pub fn estimate_payment(info: &IcoInfo, amount: u64, phase: u32) -> Result<u64, ContractError> {
    Ok(amount.saturating_mul(info.price_for_phase(phase)?))
}

/// Upper-bound estimate used when the ICO cannot be looked up.
pub fn fallback_payment(amount: u64) -> u64 {
    amount.saturating_mul(QIP_FALLBACK_UNIT_PRICE)
}

wire_struct! {
    /// Register a new ICO.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CreateIco {
        /// Asset issuer
        pub issuer: PublicKey,
        /// Proceeds recipients
        pub addresses: [PublicKey; RECIPIENTS],
        /// Asset sold
        pub asset_name: AssetName,
        /// Price per phase
        pub prices: [u64; PHASES],
        /// Volume per phase
        pub sale_amounts: [u64; PHASES],
        /// Proceeds split per recipient
        pub percents: [u32; RECIPIENTS],
        /// First epoch of phase 1
        pub start_epoch: u32,
    }
}

wire_struct! {
    /// Buy tokens. Attach [`estimate_payment`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct BuyToken {
        /// ICO index
        pub index_of_ico: u32,
        /// Tokens wanted
        pub amount: u64,
    }
}

wire_struct! {
    /// Move management of shares to another contract. Attach [`crate::QIP_TRANSFER_RIGHTS_FEE`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TransferShareManagementRights {
        /// Asset whose shares move
        pub asset: Asset,
        /// Shares to move
        pub number_of_shares: i64,
        /// Receiving contract
        pub new_managing_contract_index: u32,
    }
}

contract_calls! {
    index: CONTRACT_INDEX;
    functions {
        1 "qip.get_ico_info": GetIcoInfo => IcoInfo;
    }
    procedures {
        1 "qip.create_ico": CreateIco;
        2 "qip.buy_token": BuyToken;
        3 "qip.transfer_share_management_rights": TransferShareManagementRights;
    }
}
