//! Layered configuration for the `bracket` binary.
//!
//! Sources, later ones winning: built-in defaults, an optional `bracket.toml`
//! (or the file given explicitly), then `BRACKET_*` environment variables.

use std::path::Path;

use serde::Deserialize;

use crate::books::DEFAULT_DB_FILE;
use crate::error::Result;
use crate::policy::SuppressionPolicy;

pub const CONFIG_NAME: &str = "bracket";
pub const ENV_PREFIX: &str = "BRACKET";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub database: String,
    pub log: String,
    pub suppress: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DEFAULT_DB_FILE.to_string(),
            log: "info".to_string(),
            suppress: String::new(),
        }
    }
}

impl Settings {
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("database", defaults.database)?
            .set_default("log", defaults.log)?
            .set_default("suppress", defaults.suppress)?;
        builder = match file {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name(CONFIG_NAME).required(false)),
        };
        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// The default policy of the `guard` command.
    pub fn suppression_policy(&self) -> Result<SuppressionPolicy> {
        self.suppress.parse()
    }
}
