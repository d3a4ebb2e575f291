//! # Contract Call Specs
//!
//! Static description of every contract operation the client can issue.
//! Specs are compile-time constants; the registry is a read-only slice.

use super::wire::Wire;
use std::fmt;

/// State-changing procedure (signed broadcast) or read-only function
/// (request/response).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// Signed, broadcast, no reply.
    Procedure,
    /// Unsigned query with a typed reply.
    Function,
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Procedure => f.write_str("procedure"),
            Self::Function => f.write_str("function"),
        }
    }
}

/// One contract operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContractCallSpec {
    /// Registry name, `<contract>.<operation>`.
    pub name: &'static str,
    /// Numeric contract index.
    pub contract_index: u32,
    /// Procedure or function id within the contract.
    pub operation_id: u16,
    /// Procedure or function.
    pub kind: CallKind,
    /// Encoded size of the input payload.
    pub payload_size: u16,
}

impl ContractCallSpec {
    /// Procedure spec.
    pub const fn procedure(
        name: &'static str,
        contract_index: u32,
        operation_id: u16,
        payload_size: usize,
    ) -> Self {
        assert!(payload_size <= u16::MAX as usize);
        Self {
            name,
            contract_index,
            operation_id,
            kind: CallKind::Procedure,
            payload_size: payload_size as u16,
        }
    }

    /// Function spec.
    pub const fn function(
        name: &'static str,
        contract_index: u32,
        operation_id: u16,
        payload_size: usize,
    ) -> Self {
        assert!(payload_size <= u16::MAX as usize);
        Self {
            name,
            contract_index,
            operation_id,
            kind: CallKind::Function,
            payload_size: payload_size as u16,
        }
    }

    /// Whether this is a state-changing procedure.
    pub fn is_procedure(&self) -> bool {
        self.kind == CallKind::Procedure
    }

    /// Payload size as `usize`.
    pub fn payload_len(&self) -> usize {
        usize::from(self.payload_size)
    }
}

/// Typed input of a procedure.
pub trait ProcedureInput: Wire {
    /// Operation this payload belongs to.
    const SPEC: ContractCallSpec;
}

/// Typed input of a function, with its fixed-size output.
pub trait FunctionInput: Wire {
    /// Operation this input belongs to.
    const SPEC: ContractCallSpec;
    /// Decoded reply.
    type Output: Wire;
}

/// Read-only lookup over static per-contract tables of specs.
#[derive(Clone, Copy, Debug)]
pub struct CallRegistry {
    groups: &'static [&'static [ContractCallSpec]],
}

impl CallRegistry {
    /// Wrap static tables, one per contract.
    pub const fn new(groups: &'static [&'static [ContractCallSpec]]) -> Self {
        Self { groups }
    }

    /// Find a spec by name.
    pub fn find(&self, name: &str) -> Option<&'static ContractCallSpec> {
        self.iter().find(|s| s.name == name)
    }

    /// Find a spec by name.
    ///
    /// # Panics
    ///
    /// If no operation of that name is registered.
    pub fn lookup(&self, name: &str) -> &'static ContractCallSpec {
        match self.find(name) {
            Some(spec) => spec,
            None => panic!("unknown contract operation: {}", name),
        }
    }

    /// Find a spec by its wire coordinates.
    pub fn by_id(
        &self,
        contract_index: u32,
        operation_id: u16,
        kind: CallKind,
    ) -> Option<&'static ContractCallSpec> {
        self.iter().find(|s| {
            s.contract_index == contract_index && s.operation_id == operation_id && s.kind == kind
        })
    }

    /// All specs in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static ContractCallSpec> {
        let groups: &'static [&'static [ContractCallSpec]] = self.groups;
        groups.iter().flat_map(|group| group.iter())
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.len()).sum()
    }

    /// Whether no operation is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
