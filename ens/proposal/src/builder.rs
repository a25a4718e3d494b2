use {
    crate::{
        ProposalConfig, ResolverAbi, Result, encode_multicall, encode_set_subnode_record,
        encode_set_text,
    },
    alloy::primitives::{Address, Bytes},
    ens_types::{
        DomainHashes, EncodedCall, GovernanceMetadata, ProposalDescriptor, Subdomain,
        TextRecordEntry, TextRecordTable, parse_nonzero_address,
    },
};

/// Validated proposal inputs.
#[derive(Debug, Clone)]
pub struct ProposalInputs {
    pub subdomain: Subdomain,
    pub registry: Address,
    pub resolver: Address,
    pub owner: Address,
    pub ttl: u64,
    pub governance: GovernanceMetadata,
    pub description: String,
    pub text_records: TextRecordTable,
}

impl ProposalInputs {
    /// Validate every literal in the config. The first malformed one aborts.
    pub fn from_config(config: &ProposalConfig) -> Result<Self> {
        let text_records = config
            .text_records
            .iter()
            .map(|record| TextRecordEntry::parse(&record.chain, &record.key, &record.value))
            .collect::<ens_types::Result<Vec<_>>>()?;

        Ok(Self {
            subdomain: Subdomain::new(&config.parent_name, &config.label)?,
            registry: parse_nonzero_address(&config.registry, "registry")?,
            resolver: parse_nonzero_address(&config.resolver, "resolver")?,
            owner: parse_nonzero_address(&config.owner, "owner")?,
            ttl: config.ttl,
            governance: GovernanceMetadata {
                dao_name: config.governance.dao_name.clone(),
                governor_address: parse_nonzero_address(
                    &config.governance.governor_address,
                    "governor",
                )?,
                governor_type: config.governance.governor_type,
            },
            description: config.description.clone(),
            text_records: TextRecordTable::new(text_records)?,
        })
    }
}

/// Everything produced by one build: the descriptor plus the intermediate
/// values worth auditing before submission.
#[derive(Debug, Clone)]
pub struct Proposal {
    pub hashes: DomainHashes,
    pub registration: EncodedCall,
    /// One `setText` blob per text record, in table order.
    pub text_record_calls: Vec<Bytes>,
    pub text_records_batch: EncodedCall,
    pub descriptor: ProposalDescriptor,
}

pub struct ProposalBuilder {
    inputs: ProposalInputs,
}

impl ProposalBuilder {
    /// Fails if `resolver_abi` lacks any resolver function the proposal calls.
    pub fn new(inputs: ProposalInputs, resolver_abi: &ResolverAbi) -> Result<Self> {
        resolver_abi.ensure_resolver_interface()?;

        Ok(Self { inputs })
    }

    pub fn from_config(config: &ProposalConfig) -> Result<Self> {
        let resolver_abi = match &config.resolver_abi {
            Some(path) => ResolverAbi::from_file(path)?,
            None => ResolverAbi::embedded()?,
        };

        Self::new(ProposalInputs::from_config(config)?, &resolver_abi)
    }

    pub fn inputs(&self) -> &ProposalInputs {
        &self.inputs
    }

    pub fn build(&self) -> Result<Proposal> {
        let inputs = &self.inputs;

        let hashes = inputs.subdomain.hashes();

        tracing::info!(
            subdomain = %inputs.subdomain,
            parent_node = %hashes.parent_node,
            label_hash = %hashes.label_hash,
            node = %hashes.node,
            "Derived domain hashes"
        );

        let text_record_calls = inputs
            .text_records
            .iter()
            .map(|entry| {
                let calldata = encode_set_text(hashes.node, entry);

                tracing::info!(
                    chain = %entry.chain,
                    key = entry.chain_id,
                    %calldata,
                    "Encoded text record"
                );

                calldata
            })
            .collect::<Vec<_>>();

        let registration = EncodedCall::new(
            inputs.registry,
            encode_set_subnode_record(&hashes, inputs.owner, inputs.resolver, inputs.ttl),
        );

        let text_records_batch =
            EncodedCall::new(inputs.resolver, encode_multicall(text_record_calls.clone()));

        tracing::debug!(
            registration = %registration.calldata,
            batch = %text_records_batch.calldata,
            "Encoded registry and resolver calls"
        );

        // Registration goes first so the records are written to a node that
        // already has the intended owner and resolver.
        let calls = if text_record_calls.is_empty() {
            tracing::warn!("No text records; the proposal only registers the subdomain");
            vec![registration.clone()]
        } else {
            vec![registration.clone(), text_records_batch.clone()]
        };

        let descriptor =
            ProposalDescriptor::new(inputs.governance.clone(), calls, inputs.description.clone())?;

        tracing::info!(
            calls = descriptor.len(),
            text_records = text_record_calls.len(),
            governor = %descriptor.governance.governor_address,
            "Assembled proposal"
        );

        Ok(Proposal {
            hashes,
            registration,
            text_record_calls,
            text_records_batch,
            descriptor,
        })
    }
}

// ----------------------------------- tests -----------------------------------
