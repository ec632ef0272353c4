use anyhow::{Context, Result};
use log::debug;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::types::RuleSet;

/// Turns a rules file into a [`RuleSet`].
///
/// The normalizer hands over a path that's either absolute or starts with `./`.
pub trait RuleSetCompiler {
    fn compile(&self, file_name: &str) -> Result<RuleSet>;

    /// Called when the normalizer's working directory changes, so relative names resolve
    /// against the same directory the normalizer probed.
    fn set_base_dir(&mut self, _base_dir: &Path) {}
}

impl<F> RuleSetCompiler for F
where
    F: Fn(&str) -> Result<RuleSet>,
{
    fn compile(&self, file_name: &str) -> Result<RuleSet> {
        self(file_name)
    }
}

/// Reads JSON rules files, resolving relative names against `base_dir`.
#[derive(Debug, Clone)]
pub struct JsonRuleSetCompiler {
    pub base_dir: PathBuf,
}

impl JsonRuleSetCompiler {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }
}

impl Default for JsonRuleSetCompiler {
    fn default() -> Self {
        Self::new(".")
    }
}

impl RuleSetCompiler for JsonRuleSetCompiler {
    fn compile(&self, file_name: &str) -> Result<RuleSet> {
        let path = self.base_dir.join(file_name);
        debug!("Compiling rule set from {}", path.display());
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let rule_set = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse rule set in {}", path.display()))?;
        Ok(rule_set)
    }

    fn set_base_dir(&mut self, base_dir: &Path) {
        self.base_dir = base_dir.to_path_buf();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_json_compiler_reads_relative_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".dependency-cruiser.json"),
            r#"{ "forbidden": [], "options": { "webpackConfig": { "env": "dev" } } }"#,
        )
        .unwrap();

        let compiler = JsonRuleSetCompiler::new(temp_dir.path());
        let rule_set = compiler.compile("./.dependency-cruiser.json").unwrap();
        assert_eq!(rule_set.rest.get("forbidden"), Some(&json!([])));
        let webpack = rule_set.options.webpack_config.unwrap();
        assert!(webpack.file_name.is_none());
        assert_eq!(webpack.rest.get("env"), Some(&json!("dev")));
    }

    #[test]
    fn test_json_compiler_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let compiler = JsonRuleSetCompiler::new(temp_dir.path());
        assert!(compiler.compile("./nope.json").is_err());
    }

    #[test]
    fn test_json_compiler_rejects_js_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".dependency-cruiser.js"), "module.exports = {};").unwrap();
        let compiler = JsonRuleSetCompiler::new(temp_dir.path());
        assert!(compiler.compile("./.dependency-cruiser.js").is_err());
    }

    #[test]
    fn test_json_compiler_follows_new_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("rules.json"), r#"{ "allowed": [] }"#).unwrap();

        let mut compiler = JsonRuleSetCompiler::default();
        compiler.set_base_dir(temp_dir.path());
        assert_eq!(compiler.base_dir, temp_dir.path());
        let rule_set = compiler.compile("./rules.json").unwrap();
        assert_eq!(rule_set.rest.get("allowed"), Some(&json!([])));
    }

    #[test]
    fn test_closure_compiler() {
        let compiler = |name: &str| -> Result<RuleSet> {
            let mut rs = RuleSet::default();
            rs.rest.insert("source".to_string(), json!(name));
            Ok(rs)
        };
        let rs = compiler.compile("./rules.json").unwrap();
        assert_eq!(rs.rest.get("source"), Some(&json!("./rules.json")));
    }
}
