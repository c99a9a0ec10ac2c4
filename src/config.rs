//! Optional TOML configuration file
//!
//! Every value can also be given on the command line, which takes
//! precedence over the file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use kubepage_logs::ContainerPolicy;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Kubeconfig context to connect with
    pub context: Option<String>,

    /// Namespace used when none is given
    pub namespace: Option<String>,

    /// Lines per page used when no count is given
    pub page_size: Option<i64>,

    pub container: ContainerConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerConfig {
    /// Container names to prefer over the first declared one
    pub preferred: Vec<String>,
}

impl Config {
    /// Load the config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content).context(format!("Invalid config file {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Policy for picking a container when none is requested
    pub fn container_policy(&self) -> ContainerPolicy {
        if self.container.preferred.is_empty() {
            ContainerPolicy::FirstDeclared
        } else {
            ContainerPolicy::Preferred(self.container.preferred.clone())
        }
    }
}
