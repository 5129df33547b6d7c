//! Configure the formatter and the minifier.

mod json;
mod toml;
mod yaml;

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;
use serde::Deserialize;

use crate::{cli::Opts, error::Error, FormatOptions, MinifyOptions};

/// Configuration files looked up in the current directory, in this order.
const DEFAULT_CONFIG_PATHS: [&str; 4] = [
    "stylefmt.toml",
    "stylefmt.json",
    "stylefmt.yaml",
    "stylefmt.yml",
];

/// Configuration for the formatter and the minifier.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Formatter options.
    pub format: FormatOptions,

    /// Minifier options.
    pub minify: MinifyOptions,
}

impl Config {
    /// Create a configuration from a [`Opts`] object.
    ///
    /// If no configuration file is given, the first existing file among
    /// `stylefmt.toml`, `stylefmt.json`, `stylefmt.yaml` and `stylefmt.yml`
    /// is loaded. Without any file, the default configuration is returned.
    pub fn from_opts(opts: &Opts) -> Result<Self> {
        let Some(config_path) = opts.config.clone().or_else(|| {
            DEFAULT_CONFIG_PATHS
                .into_iter()
                .map(PathBuf::from)
                .find(|path| path.exists())
        }) else {
            debug!("No configuration file");
            return Ok(Self::default());
        };

        debug!("Loading configuration from {:?}", config_path);

        Self::from_path(config_path)
    }

    /// Load a configuration file.
    ///
    /// The format is determined by the file extension: `toml`, `json`,
    /// `yaml` or `yml`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let extension = path.extension().and_then(|extension| extension.to_str());

        let config = match extension {
            Some("toml") => toml::load_config(path)?,
            Some("json") => json::load_config(path)?,
            Some("yaml" | "yml") => yaml::load_config(path)?,
            _ => {
                return Err(Error::UnknownConfigExtension {
                    config_path: path.to_owned(),
                    extension: extension.map(str::to_owned),
                }
                .into())
            },
        };

        Ok(config)
    }
}

/// Read a configuration file to a string.
fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|error| {
        Error::LoadConfig {
            config_path: path.to_owned(),
            source: error.into(),
        }
        .into()
    })
}
