use std::path::Path;

use anyhow::{bail, Context};
use confique::Config as DeriveConfig;
use serde::Deserialize;
use tracing::*;

/// Looked up in the working directory when no `--config` is given. It is fine for it to be
/// missing.
pub const DEFAULT_CONFIG_FILE: &str = "chill.toml";

#[derive(Debug, DeriveConfig)]
pub struct Config {
    /// How resolved values are printed: `pretty` JSON, `compact` single-line JSON, or `raw`,
    /// which is `compact` except that strings are printed without quotes.
    #[config(default = "pretty")]
    pub format: OutputFormat,

    /// Whether diagnostics for paths that cannot be resolved should be colored.
    #[config(default = true)]
    pub color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Pretty,
    Compact,
    Raw,
}

impl Config {
    /// Load from `explicit` if given (which then has to exist), otherwise from
    /// [`DEFAULT_CONFIG_FILE`] if present, falling back to defaults.
    pub fn discover(explicit: Option<&Path>) -> anyhow::Result<Config> {
        let builder = Config::builder();
        let builder = match explicit {
            Some(path) => {
                if !path.is_file() {
                    error!(?path, "config file does not exist");
                    bail!("config file `{}` does not exist", path.display());
                }
                builder.file(path)
            }
            None => builder.file(DEFAULT_CONFIG_FILE),
        };

        let config = builder.load().context("failed to load configuration")?;
        debug!(?config);
        Ok(config)
    }
}
