pub mod contract_bindings {
    pub mod ens_registry {
        use alloy::sol;

        sol! {
            interface EnsRegistry {
                function setSubnodeRecord(
                    bytes32 node,
                    bytes32 label,
                    address owner,
                    address resolver,
                    uint64 ttl
                ) external;
            }
        }
    }

    pub mod public_resolver {
        use alloy::sol;

        sol!(PublicResolver, "artifacts/PublicResolver.json");

        /// The JSON ABI the [`PublicResolver`] bindings are generated from.
        pub const ABI_JSON: &str = include_str!("../artifacts/PublicResolver.json");
    }
}

mod abi;
mod builder;
mod codec;
mod config;
pub mod constants;
mod error;
mod output;

pub use {abi::*, builder::*, codec::*, config::*, error::*, output::*};
