//! Gatekeeper configuration

use std::path::Path;

use attrib_domain::{Limits, MAX_ATTRIBUTION_TAG_LEN, MAX_NUM_ATTRIBUTIONS};
use serde::{Deserialize, Serialize};

use crate::GatekeeperError;

/// Configuration for combination validation
///
/// Loaded from the `[gatekeeper]` table of a TOML file or built from a
/// preset. Overrides may only tighten the platform limits.
///
/// ```toml
/// [gatekeeper]
/// max_attributions = 1000
/// enforce_tag_length = true
/// max_tag_len = 50
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Maximum number of attributions per package
    /// Default: 1000 (the platform cap)
    #[serde(default = "default_max_attributions")]
    pub max_attributions: usize,

    /// Reject tags longer than `max_tag_len` during the combination check
    /// Default: false (the manifest loader bounds tag length)
    #[serde(default)]
    pub enforce_tag_length: bool,

    /// Maximum tag length in UTF-16 code units
    /// Default: 50
    #[serde(default = "default_max_tag_len")]
    pub max_tag_len: usize,
}

fn default_max_attributions() -> usize {
    MAX_NUM_ATTRIBUTIONS
}

fn default_max_tag_len() -> usize {
    MAX_ATTRIBUTION_TAG_LEN
}

/// Top-level file layout
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    gatekeeper: Option<ValidationConfig>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_attributions: MAX_NUM_ATTRIBUTIONS,
            enforce_tag_length: false,
            max_tag_len: MAX_ATTRIBUTION_TAG_LEN,
        }
    }
}

impl ValidationConfig {
    /// Create a strict configuration (tag length enforced as well)
    pub fn strict() -> Self {
        Self {
            enforce_tag_length: true,
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML text
    ///
    /// A missing `[gatekeeper]` table yields the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use attrib_gatekeeper::ValidationConfig;
    ///
    /// let config = ValidationConfig::from_toml_str(r#"
    ///     [gatekeeper]
    ///     enforce_tag_length = true
    /// "#).unwrap();
    /// assert_eq!(config, ValidationConfig::strict());
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self, GatekeeperError> {
        let file: ConfigFile = toml::from_str(contents)?;
        let config = file.gatekeeper.unwrap_or_default();
        config.check()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GatekeeperError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Ensure values stay within the platform limits
    pub fn check(&self) -> Result<(), GatekeeperError> {
        if self.max_attributions > MAX_NUM_ATTRIBUTIONS {
            return Err(GatekeeperError::Config(format!(
                "max_attributions {} exceeds the platform cap of {}",
                self.max_attributions, MAX_NUM_ATTRIBUTIONS
            )));
        }

        if self.max_tag_len == 0 || self.max_tag_len > MAX_ATTRIBUTION_TAG_LEN {
            return Err(GatekeeperError::Config(format!(
                "max_tag_len must be in 1..={}, got {}",
                MAX_ATTRIBUTION_TAG_LEN, self.max_tag_len
            )));
        }

        Ok(())
    }

    /// Limits to apply during the combination check
    ///
    /// Values above the platform limits are clamped, so a config that skipped
    /// [`check`](Self::check) still cannot loosen them.
    pub fn limits(&self) -> Limits {
        Limits {
            max_attributions: self.max_attributions.min(MAX_NUM_ATTRIBUTIONS),
            max_tag_len: self
                .enforce_tag_length
                .then_some(self.max_tag_len.min(MAX_ATTRIBUTION_TAG_LEN)),
        }
    }
}
