use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Types(#[from] ens_types::Error),

    #[error(transparent)]
    Abi(#[from] alloy::sol_types::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("resolver ABI has no function `{function}` with selector {selector}")]
    MissingFunction {
        function: &'static str,
        selector: String,
    },

    #[error("expected calldata for `{function}` (selector {expected}), found selector {found}")]
    SelectorMismatch {
        function: &'static str,
        expected: String,
        found: String,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
