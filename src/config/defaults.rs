//! Built-in gate defaults (layer 1)

use serde::{Deserialize, Serialize};

use super::GateConfig;

/// Built-in default configuration values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Reload command argv template (default: `cargo build`).
    pub command: Vec<String>,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            command: vec!["cargo".to_string(), "build".to_string()],
        }
    }
}

impl BuiltinDefaults {
    /// Expand into a full config. The target has no builtin default.
    pub fn into_config(self) -> GateConfig {
        GateConfig {
            target: None,
            command: self.command,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command() {
        let defaults = BuiltinDefaults::default();
        assert_eq!(defaults.command, vec!["cargo", "build"]);
    }

    #[test]
    fn test_no_default_target() {
        let config = BuiltinDefaults::default().into_config();
        assert_eq!(config.target, None);
    }
}
