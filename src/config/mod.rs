//! Gate configuration
//!
//! Implements the 3-layer configuration merge:
//! 1. Built-in gate defaults
//! 2. Config file (reload-gate.toml)
//! 3. Programmatic/CLI overrides

mod defaults;
mod file;

pub use defaults::BuiltinDefaults;
pub use file::load_config_file;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recognized gate options.
///
/// The target deliberately has no default: a gate without one cannot
/// operate, and guessing would mask the misconfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// What to recompile, e.g. an application root module or package name.
    pub target: Option<String>,

    /// Argv template for the builtin command reload engine. `{target}` is
    /// substituted; without a placeholder the target is appended.
    pub command: Vec<String>,
}

/// Partial configuration contributed by one layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateOverrides {
    /// Reload target.
    pub target: Option<String>,

    /// Reload command argv template.
    pub command: Option<Vec<String>>,
}

impl GateOverrides {
    /// True when this layer contributes nothing.
    pub fn is_empty(&self) -> bool {
        self.target.is_none() && self.command.is_none()
    }

    /// Apply this layer on top of a config; set keys win.
    fn apply(&self, config: &mut GateConfig) {
        if let Some(ref target) = self.target {
            config.target = Some(target.clone());
        }
        if let Some(ref command) = self.command {
            config.command = command.clone();
        }
    }
}

/// Origin of a configuration layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Builtin,
    File,
    Overrides,
}

/// A contributing config layer with provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSource {
    /// Origin of this layer.
    pub origin: ConfigOrigin,

    /// File path (None for builtin/overrides).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 digest of raw file bytes (None for builtin/overrides).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// Merged configuration plus where each layer came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveGateConfig {
    /// The merged configuration.
    pub config: GateConfig,

    /// Contributing layers in precedence order.
    pub sources: Vec<ConfigSource>,
}

impl EffectiveGateConfig {
    /// Build the effective configuration from layers.
    ///
    /// A file path that does not exist is skipped (config files are
    /// optional); an existing file that cannot be read or parsed is an
    /// error. A missing target is NOT an error here: the gate detects it
    /// per request and degrades to pass-through.
    pub fn build(
        file_path: Option<&Path>,
        overrides: GateOverrides,
    ) -> Result<Self, ConfigError> {
        // Layer 1: built-in defaults
        let mut config = BuiltinDefaults::default().into_config();
        let mut sources = vec![ConfigSource {
            origin: ConfigOrigin::Builtin,
            path: None,
            digest: None,
        }];

        // Layer 2: config file
        if let Some(path) = file_path {
            if path.exists() {
                let (layer, digest) = load_config_file(path)?;
                layer.apply(&mut config);
                sources.push(ConfigSource {
                    origin: ConfigOrigin::File,
                    path: Some(path.to_string_lossy().to_string()),
                    digest: Some(digest),
                });
            }
        }

        // Layer 3: overrides
        if !overrides.is_empty() {
            overrides.apply(&mut config);
            sources.push(ConfigSource {
                origin: ConfigOrigin::Overrides,
                path: None,
                digest: None,
            });
        }

        Ok(Self { config, sources })
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
