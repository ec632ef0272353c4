use anyhow::{Context, Result};
use log::{debug, trace};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::{constants, types::ConfigWrapperKind};

/// The default-values table the normalizer seeds options from.
///
/// Deserializes from the same `SCREAMING_SNAKE_CASE` keys dependency-cruiser uses in its
/// `defaults.json`; keys missing from such a file keep their built-in value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct Defaults {
    pub output_to: String,
    pub output_type: String,
    pub default_config_file_name: String,
    pub old_default_rules_file_name: String,
    #[serde(rename = "RULES_FILE_NAME_SEARCH_ARRAY")]
    pub rules_file_search: Vec<String>,
    pub webpack_config: String,
    pub typescript_config: String,
    pub babel_config: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output_to: constants::OUTPUT_TO.to_string(),
            output_type: constants::OUTPUT_TYPE.to_string(),
            default_config_file_name: constants::DEFAULT_CONFIG_FILE_NAME.to_string(),
            old_default_rules_file_name: constants::OLD_DEFAULT_RULES_FILE_NAME.to_string(),
            rules_file_search: constants::RULES_FILE_NAME_SEARCH
                .iter()
                .map(|s| s.to_string())
                .collect(),
            webpack_config: constants::WEBPACK_CONFIG.to_string(),
            typescript_config: constants::TYPESCRIPT_CONFIG.to_string(),
            babel_config: constants::BABEL_CONFIG.to_string(),
        }
    }
}

impl Defaults {
    /// Load a defaults table from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading defaults from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let defaults: Defaults = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse defaults in {}", path.display()))?;
        trace!("Loaded defaults: {:?}", defaults);
        Ok(defaults)
    }

    /// File name used for a config wrapper that was switched on without naming a file
    pub fn wrapper_file_name(&self, kind: ConfigWrapperKind) -> &str {
        match kind {
            ConfigWrapperKind::Webpack => &self.webpack_config,
            ConfigWrapperKind::TypeScript => &self.typescript_config,
            ConfigWrapperKind::Babel => &self.babel_config,
        }
    }
}
