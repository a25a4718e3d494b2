use {
    crate::Error,
    config::{Config, Environment, File},
    serde::{Serialize, de::DeserializeOwned},
    std::path::Path,
};

/// Load a config in three layers, later ones overriding earlier ones:
///
/// 1. `D::default()`;
/// 2. the file at `path`, if given (format inferred from the extension);
/// 3. environment variables named `{env_prefix}__{section}__{key}`.
pub fn parse_config<D>(path: Option<&Path>, env_prefix: &str) -> Result<D, Error>
where
    D: Serialize + DeserializeOwned + Default,
{
    let mut builder = Config::builder().add_source(Config::try_from(&D::default())?);

    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(Environment::with_prefix(env_prefix).separator("__"))
        .build()?;

    Ok(config.try_deserialize()?)
}

// ----------------------------------- tests -----------------------------------
