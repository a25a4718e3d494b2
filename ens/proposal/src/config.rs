use {
    crate::constants,
    ens_types::GovernorType,
    serde::{Deserialize, Serialize},
    std::path::PathBuf,
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub proposal: ProposalConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            proposal: ProposalConfig::default(),
        }
    }
}

/// Raw proposal literals. Nothing here is validated until it is turned into
/// [`ProposalInputs`](crate::ProposalInputs).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProposalConfig {
    pub parent_name: String,
    pub label: String,
    pub registry: String,
    pub resolver: String,
    /// Owner of the new subdomain, normally the governance timelock.
    pub owner: String,
    pub ttl: u64,
    pub description: String,
    /// JSON ABI to check the resolver calls against. The embedded public
    /// resolver ABI is used if unset.
    pub resolver_abi: Option<PathBuf>,
    pub governance: GovernanceConfig,
    pub text_records: Vec<TextRecordConfig>,
}

impl Default for ProposalConfig {
    fn default() -> Self {
        Self {
            parent_name: constants::PARENT_NAME.to_string(),
            label: constants::SUBDOMAIN_LABEL.to_string(),
            registry: constants::ENS_REGISTRY.to_string(),
            resolver: constants::ENS_PUBLIC_RESOLVER.to_string(),
            owner: constants::TIMELOCK.to_string(),
            ttl: constants::TTL,
            description: constants::DESCRIPTION.to_string(),
            resolver_abi: None,
            governance: GovernanceConfig::default(),
            text_records: constants::V2_DEPLOYMENTS
                .iter()
                .map(|(chain, key, value)| TextRecordConfig {
                    chain: chain.to_string(),
                    key: key.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GovernanceConfig {
    pub dao_name: String,
    pub governor_address: String,
    pub governor_type: GovernorType,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            dao_name: constants::DAO_NAME.to_string(),
            governor_address: constants::GOVERNOR_BRAVO.to_string(),
            governor_type: GovernorType::Bravo,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TextRecordConfig {
    pub chain: String,
    /// Decimal chain id.
    pub key: String,
    /// Comma-separated addresses.
    pub value: String,
}
