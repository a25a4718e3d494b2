use alloy::primitives::Address;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid address `{input}`: {reason}")]
    InvalidAddress { input: String, reason: String },

    #[error("{role} address must not be zero")]
    ZeroAddress { role: &'static str },

    #[error("name must not be empty")]
    EmptyName,

    #[error("invalid label `{label}`: {reason}")]
    InvalidLabel { label: String, reason: &'static str },

    #[error("text record `{key}` has no addresses")]
    EmptyAddressList { key: String },

    #[error("text record key `{key}` is not a decimal chain id")]
    InvalidKey { key: String },

    #[error("text record key `{key}` appears more than once (`{first}` and `{second}`)")]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },

    #[error(
        "proposal sequences are misaligned: {targets} targets, {values} values, {signatures} signatures, {calldatas} calldatas"
    )]
    Misaligned {
        targets: usize,
        values: usize,
        signatures: usize,
        calldatas: usize,
    },

    #[error("proposal has no calls")]
    NoCalls,

    #[error("call to {target} carries empty calldata")]
    EmptyCalldata { target: Address },
}

pub type Result<T> = core::result::Result<T, Error>;
