use {
    crate::{Error, Result},
    alloy::{
        primitives::{Address, B256, Bytes, U256, keccak256},
        sol,
        sol_types::SolCall,
    },
    serde::{Deserialize, Serialize},
};

sol! {
    /// Compound-style governor.
    interface IGovernorBravo {
        function propose(
            address[] targets,
            uint256[] values,
            string[] signatures,
            bytes[] calldatas,
            string description
        ) external returns (uint256);
    }

    /// OpenZeppelin governor.
    interface IGovernor {
        function propose(
            address[] targets,
            uint256[] values,
            bytes[] calldatas,
            string description
        ) external returns (uint256);
    }
}

/// A single contract call to be executed by the governance executor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EncodedCall {
    pub target: Address,
    pub calldata: Bytes,
    pub value: U256,
    /// Function signature for governors that encode the selector themselves.
    /// Empty when `calldata` already starts with the selector.
    pub signature: String,
}

impl EncodedCall {
    /// A call with pre-encoded calldata, no attached value and no signature.
    pub fn new(target: Address, calldata: Bytes) -> Self {
        Self {
            target,
            calldata,
            value: U256::ZERO,
            signature: String::new(),
        }
    }
}

// --------------------------------- governance --------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GovernorType {
    Bravo,
    Oz,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceMetadata {
    pub dao_name: String,
    pub governor_address: Address,
    pub governor_type: GovernorType,
}

/// Whether the simulation pipeline should create a new proposal or replay an
/// existing one. This crate only ever produces new ones.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProposalKind {
    #[default]
    New,
}

// --------------------------------- descriptor --------------------------------

/// The proposal as consumed by the simulation and submission pipeline.
///
/// `targets`, `values`, `signatures` and `calldatas` always have the same
/// length; index `i` of each describes the `i`-th call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "UncheckedProposalDescriptor")]
pub struct ProposalDescriptor {
    #[serde(rename = "type")]
    pub kind: ProposalKind,
    #[serde(flatten)]
    pub governance: GovernanceMetadata,
    pub targets: Vec<Address>,
    pub values: Vec<U256>,
    pub signatures: Vec<String>,
    pub calldatas: Vec<Bytes>,
    pub description: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UncheckedProposalDescriptor {
    #[serde(rename = "type")]
    kind: ProposalKind,
    #[serde(flatten)]
    governance: GovernanceMetadata,
    targets: Vec<Address>,
    values: Vec<U256>,
    signatures: Vec<String>,
    calldatas: Vec<Bytes>,
    description: String,
}

impl TryFrom<UncheckedProposalDescriptor> for ProposalDescriptor {
    type Error = Error;

    fn try_from(unchecked: UncheckedProposalDescriptor) -> Result<Self> {
        let descriptor = Self {
            kind: unchecked.kind,
            governance: unchecked.governance,
            targets: unchecked.targets,
            values: unchecked.values,
            signatures: unchecked.signatures,
            calldatas: unchecked.calldatas,
            description: unchecked.description,
        };

        descriptor.validate()?;

        Ok(descriptor)
    }
}

impl ProposalDescriptor {
    pub fn new(
        governance: GovernanceMetadata,
        calls: Vec<EncodedCall>,
        description: impl Into<String>,
    ) -> Result<Self> {
        let mut descriptor = Self {
            kind: ProposalKind::New,
            governance,
            targets: Vec::with_capacity(calls.len()),
            values: Vec::with_capacity(calls.len()),
            signatures: Vec::with_capacity(calls.len()),
            calldatas: Vec::with_capacity(calls.len()),
            description: description.into(),
        };

        for call in calls {
            descriptor.targets.push(call.target);
            descriptor.values.push(call.value);
            descriptor.signatures.push(call.signature);
            descriptor.calldatas.push(call.calldata);
        }

        descriptor.validate()?;

        Ok(descriptor)
    }

    /// Check that the four call sequences line up and that every call
    /// carries calldata.
    pub fn validate(&self) -> Result<()> {
        let len = self.targets.len();

        if self.values.len() != len || self.signatures.len() != len || self.calldatas.len() != len {
            return Err(Error::Misaligned {
                targets: self.targets.len(),
                values: self.values.len(),
                signatures: self.signatures.len(),
                calldatas: self.calldatas.len(),
            });
        }

        if len == 0 {
            return Err(Error::NoCalls);
        }

        for (target, calldata) in self.targets.iter().zip(&self.calldatas) {
            if calldata.is_empty() {
                return Err(Error::EmptyCalldata { target: *target });
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Zip the parallel sequences back into individual calls.
    pub fn calls(&self) -> impl Iterator<Item = EncodedCall> + '_ {
        self.targets
            .iter()
            .zip(&self.values)
            .zip(&self.signatures)
            .zip(&self.calldatas)
            .map(|(((target, value), signature), calldata)| EncodedCall {
                target: *target,
                calldata: calldata.clone(),
                value: *value,
                signature: signature.clone(),
            })
    }

    pub fn description_hash(&self) -> B256 {
        keccak256(self.description.as_bytes())
    }

    /// Calldata for the governor's `propose` function, matching its flavor.
    pub fn propose_calldata(&self) -> Bytes {
        let calldata = match self.governance.governor_type {
            GovernorType::Bravo => IGovernorBravo::proposeCall {
                targets: self.targets.clone(),
                values: self.values.clone(),
                signatures: self.signatures.clone(),
                calldatas: self.calldatas.clone(),
                description: self.description.clone(),
            }
            .abi_encode(),
            GovernorType::Oz => IGovernor::proposeCall {
                targets: self.targets.clone(),
                values: self.values.clone(),
                calldatas: self.calldatas.clone(),
                description: self.description.clone(),
            }
            .abi_encode(),
        };

        calldata.into()
    }
}

// ----------------------------------- tests -----------------------------------
