//! Import configuration.
//!
//! Handles loading and validating `import.toml` from the destination root.
//! The file is optional — a destination without one gets stock defaults —
//! and sparse: override just the values you want.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [series]
//! prefix = "IMG"        # Filename series prefix (IMG-0001.jpeg, ...)
//!
//! [previews]
//! max_width = 400       # Preview bounding box
//! max_height = 300
//! quality = 85          # JPEG quality (1-100)
//! ```
//!
//! Unknown keys are rejected to catch typos early. The `--prefix` CLI flag
//! overrides the configured series prefix for a single run.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Name of the config file within the destination directory.
pub const CONFIG_FILENAME: &str = "import.toml";

/// Import configuration loaded from `import.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    pub series: SeriesConfig,
    pub previews: PreviewsConfig,
}

/// Filename series settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeriesConfig {
    /// Prefix of every admitted filename (`PREFIX-0001.jpeg`).
    pub prefix: String,
}

/// Preview generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewsConfig {
    pub max_width: u32,
    pub max_height: u32,
    pub quality: u32,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            series: SeriesConfig::default(),
            previews: PreviewsConfig::default(),
        }
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            prefix: "IMG".to_string(),
        }
    }
}

impl Default for PreviewsConfig {
    fn default() -> Self {
        Self {
            max_width: 400,
            max_height: 300,
            quality: 85,
        }
    }
}

/// Load config from `<dest>/import.toml`, falling back to defaults when the
/// file is absent. The result is always validated.
pub fn load_config(dest: &Path) -> Result<ImportConfig, ConfigError> {
    let path = dest.join(CONFIG_FILENAME);
    let config = if path.exists() {
        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        ImportConfig::default()
    };
    validate(&config)?;
    Ok(config)
}

/// Check invariants the types can't express. Runs on every load; callers
/// that mutate a loaded config (e.g. a CLI prefix override) re-run it.
pub fn validate(config: &ImportConfig) -> Result<(), ConfigError> {
    let prefix = &config.series.prefix;
    if prefix.is_empty() {
        return Err(ConfigError::Validation(
            "series.prefix must not be empty".to_string(),
        ));
    }
    if prefix.contains(['/', '\\', '.']) {
        return Err(ConfigError::Validation(format!(
            "series.prefix '{prefix}' must not contain path separators or dots"
        )));
    }
    if config.previews.max_width == 0 || config.previews.max_height == 0 {
        return Err(ConfigError::Validation(
            "previews.max_width and previews.max_height must be at least 1".to_string(),
        ));
    }
    if !(1..=100).contains(&config.previews.quality) {
        return Err(ConfigError::Validation(format!(
            "previews.quality must be between 1 and 100, got {}",
            config.previews.quality
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_file_absent() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.series.prefix, "IMG");
        assert_eq!(config.previews.max_width, 400);
        assert_eq!(config.previews.max_height, 300);
        assert_eq!(config.previews.quality, 85);
    }

    #[test]
    fn sparse_file_overrides_only_named_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            "[series]\nprefix = \"LOP25\"\n",
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.series.prefix, "LOP25");
        assert_eq!(config.previews.max_width, 400);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            "[series]\nprefxi = \"LOP25\"\n",
        )
        .unwrap();

        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn empty_prefix_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILENAME), "[series]\nprefix = \"\"\n").unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn prefix_with_separator_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            "[series]\nprefix = \"a/b\"\n",
        )
        .unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn out_of_range_quality_is_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            "[previews]\nquality = 0\n",
        )
        .unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }
}
