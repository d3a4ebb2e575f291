//! # QVAULT (contract 10)
//!
//! Revenue vault governed by three auth addresses: changes are submitted by
//! the admin, then confirmed by an auth address. Fees are in permille.

use crate::describe::{Describe, Lines};
use tc_01_call_engine::{wire_struct, PublicKey};

/// Contract index.
pub const CONTRACT_INDEX: u32 = 10;

/// Number of auth addresses and pending slots per change kind.
pub const AUTH_SLOTS: usize = 3;

wire_struct! {
    /// Vault state. The input word is a placeholder.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GetData {
        /// Placeholder, always 10
        pub t: u32,
    }
}

impl Default for GetData {
    fn default() -> Self {
        Self { t: 10 }
    }
}

wire_struct! {
    /// Reply to [`GetData`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct VaultData {
        /// Current auth addresses
        pub auth_addresses: [PublicKey; AUTH_SLOTS],
        /// Current reinvesting address
        pub reinvesting_address: PublicKey,
        /// Current admin
        pub admin_address: PublicKey,
        /// Pending auth addresses
        pub new_auth_addresses: [PublicKey; AUTH_SLOTS],
        /// Pending reinvesting addresses
        pub new_reinvesting_addresses: [PublicKey; AUTH_SLOTS],
        /// Pending admin addresses
        pub new_admin_addresses: [PublicKey; AUTH_SLOTS],
        /// Pending bans
        pub banned_addresses: [PublicKey; AUTH_SLOTS],
        /// Pending unbans
        pub unbanned_addresses: [PublicKey; AUTH_SLOTS],
        /// QCAP holder share
        pub qcap_holder_permille: u32,
        /// Reinvesting share
        pub reinvesting_permille: u32,
        /// Computor share
        pub computor_permille: u32,
        /// Development share
        pub dev_permille: u32,
    }
}

impl Describe for VaultData {
    fn describe(&self) -> String {
        let groups: [(&str, &[PublicKey]); 6] = [
            ("auth_address", &self.auth_addresses),
            ("new_auth_address", &self.new_auth_addresses),
            ("new_reinvesting_address", &self.new_reinvesting_addresses),
            ("new_admin_address", &self.new_admin_addresses),
            ("banned_address", &self.banned_addresses),
            ("unbanned_address", &self.unbanned_addresses),
        ];
        let mut lines = Lines::default()
            .key("reinvesting_address", &self.reinvesting_address)
            .key("admin_address", &self.admin_address);
        for (name, keys) in groups {
            for (slot, key) in keys.iter().enumerate() {
                lines = lines.key(&format!("{}{}", name, slot + 1), key);
            }
        }
        lines
            .field("qcap_holder_permille", self.qcap_holder_permille)
            .field("reinvesting_permille", self.reinvesting_permille)
            .field("computor_permille", self.computor_permille)
            .field("dev_permille", self.dev_permille)
            .finish()
    }
}

/// Payload carrying one address.
macro_rules! address_payload {
    ($($(#[$meta:meta])* $name:ident;)*) => {
        $(
            wire_struct! {
                $(#[$meta])*
                #[derive(Clone, Copy, Debug, PartialEq, Eq)]
                pub struct $name {
                    /// Address
                    pub address: PublicKey,
                }
            }
        )*
    };
}

address_payload! {
    /// Admin: propose a new auth address.
    SubmitAuthAddress;
    /// Admin: propose a new reinvesting address.
    SubmitReinvestingAddress;
    /// Auth: confirm the proposed reinvesting address.
    ChangeReinvestingAddress;
    /// Auth: propose a new admin.
    SubmitAdminAddress;
    /// Auth: confirm the proposed admin.
    ChangeAdminAddress;
    /// Admin: propose a ban.
    SubmitBannedAddress;
    /// Auth: confirm a ban.
    SaveBannedAddress;
    /// Admin: propose lifting a ban.
    SubmitUnbannedAddress;
    /// Auth: confirm lifting a ban.
    SaveUnbannedAddress;
}

wire_struct! {
    /// Auth: replace auth address slot `number_of_changed_address`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeAuthAddress {
        /// Slot, 1..=3
        pub number_of_changed_address: u32,
    }
}

wire_struct! {
    /// Admin: propose a fee split.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SubmitFees {
        /// QCAP holder share
        pub qcap_holder_permille: u32,
        /// Reinvesting share
        pub reinvesting_permille: u32,
        /// Development share
        pub dev_permille: u32,
    }
}

wire_struct! {
    /// Auth: confirm the proposed fee split.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFees {
        /// QCAP holder share
        pub qcap_holder_permille: u32,
        /// Reinvesting share
        pub reinvesting_permille: u32,
        /// Development share
        pub dev_permille: u32,
    }
}

contract_calls! {
    index: CONTRACT_INDEX;
    functions {
        1 "qvault.get_data": GetData => VaultData;
    }
    procedures {
        1 "qvault.submit_auth_address": SubmitAuthAddress;
        2 "qvault.change_auth_address": ChangeAuthAddress;
        3 "qvault.submit_fees": SubmitFees;
        4 "qvault.change_fees": ChangeFees;
        5 "qvault.submit_reinvesting_address": SubmitReinvestingAddress;
        6 "qvault.change_reinvesting_address": ChangeReinvestingAddress;
        7 "qvault.submit_admin_address": SubmitAdminAddress;
        8 "qvault.change_admin_address": ChangeAdminAddress;
        9 "qvault.submit_banned_address": SubmitBannedAddress;
        10 "qvault.save_banned_address": SaveBannedAddress;
        11 "qvault.submit_unbanned_address": SubmitUnbannedAddress;
        12 "qvault.save_unbanned_address": SaveUnbannedAddress;
    }
}
