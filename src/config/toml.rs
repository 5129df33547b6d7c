//! Load configuration from TOML files.

use std::path::Path;

use super::{read_config, Config, Error};

/// Load configuration from a TOML file.
pub(super) fn load_config(path: &Path) -> anyhow::Result<Config> {
    let content = read_config(path)?;

    load_config_str(content).map_err(|source| {
        Error::LoadConfig {
            config_path: path.to_owned(),
            source,
        }
        .into()
    })
}

/// Load configuration from a TOML string.
fn load_config_str<S>(content: S) -> anyhow::Result<Config>
where
    S: AsRef<str>,
{
    Ok(::toml::from_str(content.as_ref())?)
}
