use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "semcheck.toml";

/// The semcheck configuration file structure (semcheck.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SemcheckConfig {
    /// Named constraint expressions, referenced on the command line as `@name`
    pub constraints: HashMap<String, String>,
}

impl SemcheckConfig {
    /// Load the configuration.
    ///
    /// An explicitly given path must exist. Without one, `semcheck.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    log::debug!("No {} found, using empty configuration", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        log::debug!("Reading {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Resolve an `@name` reference to its expression; anything else is returned as is.
    pub fn resolve<'a>(&'a self, expression: &'a str) -> Result<&'a str> {
        let Some(name) = expression.strip_prefix('@') else {
            return Ok(expression);
        };

        match self.constraints.get(name) {
            Some(resolved) => {
                log::info!("Using constraint @{} = \"{}\"", name, resolved);
                Ok(resolved.as_str())
            }
            None => bail!("Unknown constraint alias \"@{}\"", name),
        }
    }
}
