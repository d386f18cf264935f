//! Config file layer (layer 2)
//!
//! TOML file recognized keys: `target`, `command`. The raw file bytes are
//! digested for provenance before parsing.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::{ConfigError, GateOverrides};

/// Load a config file layer, returning the overrides it contributes and the
/// SHA-256 hex digest of the raw file bytes.
pub fn load_config_file(path: &Path) -> Result<(GateOverrides, String), ConfigError> {
    let bytes = fs::read(path).map_err(|source| ConfigError::Read {
        path: path.to_string_lossy().to_string(),
        source,
    })?;

    let digest = hex::encode(Sha256::digest(&bytes));

    let text = String::from_utf8_lossy(&bytes);
    let overrides: GateOverrides =
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_string_lossy().to_string(),
            source,
        })?;

    Ok((overrides, digest))
}
