use {
    crate::{
        Error, Result,
        contract_bindings::public_resolver::{ABI_JSON, PublicResolver},
    },
    alloy::{json_abi::JsonAbi, primitives::hex, sol_types::SolCall},
    std::{fs, path::Path},
};

/// A resolver ABI description, used to confirm that the functions we encode
/// calls for actually exist on the target contract.
#[derive(Debug, Clone)]
pub struct ResolverAbi(JsonAbi);

impl ResolverAbi {
    /// The ABI the resolver bindings are generated from.
    pub fn embedded() -> Result<Self> {
        Self::from_json(ABI_JSON)
    }

    /// Load an ABI from a file, either a bare ABI array or a compiler artifact
    /// with an `abi` field.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;

        let abi = match value.get("abi") {
            Some(abi) => abi.clone(),
            None => value,
        };

        Ok(Self(serde_json::from_value(abi)?))
    }

    /// Fail unless the ABI has a function with the same name and selector as `C`.
    pub fn ensure_function<C: SolCall>(&self) -> Result<()> {
        let name = C::SIGNATURE
            .split_once('(')
            .map_or(C::SIGNATURE, |(name, _)| name);

        let found = self
            .0
            .function(name)
            .is_some_and(|overloads| overloads.iter().any(|f| f.selector().0 == C::SELECTOR));

        if !found {
            return Err(Error::MissingFunction {
                function: C::SIGNATURE,
                selector: hex::encode_prefixed(C::SELECTOR),
            });
        }

        Ok(())
    }

    /// Check every resolver function the proposal calls.
    pub fn ensure_resolver_interface(&self) -> Result<()> {
        self.ensure_function::<PublicResolver::setTextCall>()?;
        self.ensure_function::<PublicResolver::multicallCall>()
    }
}

// ----------------------------------- tests -----------------------------------
