use log::{debug, trace};
use serde_json::Value;
use std::{fs::File, path::Path};

use crate::{
    config::Defaults,
    constants::OLD_DEFAULT_RULES_FILE_NAME,
    error::{OptionsError, Result},
};

/// Returns `value` when it is a string, `default` otherwise.
pub fn option_value_or(default: &str, value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => default.to_string(),
    }
}

/// Rules file name for an option that may or may not carry one, falling back to the
/// legacy `.dependency-cruiser.json`.
pub fn determine_rules_file_name(value: Option<&Value>) -> String {
    option_value_or(OLD_DEFAULT_RULES_FILE_NAME, value)
}

/// Finds the rules file `validate` points at.
///
/// A string names the file explicitly; anything else (typically `true` from a bare
/// `--validate`) means: use the first readable default candidate.
pub(crate) fn resolve_rules_file_name(
    validate: &Value,
    defaults: &Defaults,
    working_dir: &Path,
) -> Result<String> {
    match validate {
        Value::String(file_name) => custom_rules_file_name(file_name, working_dir),
        _ => default_rules_file_name(defaults, working_dir),
    }
}

fn custom_rules_file_name(file_name: &str, working_dir: &Path) -> Result<String> {
    if file_exists(&working_dir.join(file_name)) {
        debug!("Using rules file '{}'", file_name);
        Ok(file_name.to_string())
    } else {
        Err(OptionsError::RulesFileNotFound(file_name.to_string()))
    }
}

fn default_rules_file_name(defaults: &Defaults, working_dir: &Path) -> Result<String> {
    defaults
        .rules_file_search
        .iter()
        .find(|candidate| file_exists(&working_dir.join(candidate)))
        .map(|found| {
            debug!("Found default rules file '{}'", found);
            found.clone()
        })
        .ok_or_else(|| OptionsError::NoDefaultRulesFile(defaults.default_config_file_name.clone()))
}

/// The name the rule set compiler gets: absolute paths as-is, relative ones prefixed
/// with `./` so they can't be mistaken for a package name.
pub(crate) fn compiler_file_name(rules_file: &str) -> String {
    if Path::new(rules_file).is_absolute()
        || rules_file.starts_with("./")
        || rules_file.starts_with("../")
    {
        rules_file.to_string()
    } else {
        format!("./{}", rules_file)
    }
}

/// Read-access probe; the handle is dropped right away.
fn file_exists(path: &Path) -> bool {
    let readable = File::open(path).is_ok();
    trace!("Probing {:?}: {}", path, if readable { "readable" } else { "not readable" });
    readable
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::{fs, path::PathBuf};
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let file_path = dir.join(name);
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_option_value_or() {
        assert_eq!(option_value_or("dflt", Some(&json!("given"))), "given");
        assert_eq!(option_value_or("dflt", Some(&json!(true))), "dflt");
        assert_eq!(option_value_or("dflt", Some(&json!(null))), "dflt");
        assert_eq!(option_value_or("dflt", None), "dflt");
    }

    #[test]
    fn test_determine_rules_file_name() {
        assert_eq!(determine_rules_file_name(Some(&json!("rules.json"))), "rules.json");
        assert_eq!(determine_rules_file_name(Some(&json!(true))), ".dependency-cruiser.json");
        assert_eq!(determine_rules_file_name(None), ".dependency-cruiser.json");
    }

    #[test]
    fn test_explicit_rules_file_found() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(temp_dir.path(), "rules.json", "{}");

        let name =
            resolve_rules_file_name(&json!("rules.json"), &Defaults::default(), temp_dir.path())
                .unwrap();
        assert_eq!(name, "rules.json");
    }

    #[test]
    fn test_explicit_absolute_rules_file_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_test_file(temp_dir.path(), "rules.json", "{}");
        let abs = path.to_string_lossy().to_string();

        // Joining an absolute path replaces the working dir, so any dir will do
        let name =
            resolve_rules_file_name(&json!(abs), &Defaults::default(), Path::new("/nonexistent"))
                .unwrap();
        assert_eq!(name, abs);
    }

    #[test]
    fn test_explicit_rules_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let err = resolve_rules_file_name(
            &json!("/path/to/missing.json"),
            &Defaults::default(),
            temp_dir.path(),
        )
        .unwrap_err();

        assert!(matches!(&err, OptionsError::RulesFileNotFound(p) if p == "/path/to/missing.json"));
        let msg = err.to_string();
        assert!(msg.contains("'/path/to/missing.json'"));
        assert!(msg.contains("depcruise --init"));
    }

    #[test]
    fn test_default_search_takes_first_readable() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(temp_dir.path(), ".dependency-cruiser.json", "{}");
        create_test_file(temp_dir.path(), ".dependency-cruiser.js", "module.exports = {}");

        let name =
            resolve_rules_file_name(&json!(true), &Defaults::default(), temp_dir.path()).unwrap();
        assert_eq!(name, ".dependency-cruiser.json");
    }

    #[test]
    fn test_default_search_falls_through() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(temp_dir.path(), ".dependency-cruiser.js", "module.exports = {}");

        let name =
            resolve_rules_file_name(&json!(true), &Defaults::default(), temp_dir.path()).unwrap();
        assert_eq!(name, ".dependency-cruiser.js");
    }

    #[test]
    fn test_default_search_none_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = resolve_rules_file_name(&json!(true), &Defaults::default(), temp_dir.path())
            .unwrap_err();

        assert!(
            matches!(&err, OptionsError::NoDefaultRulesFile(n) if n == ".dependency-cruiser.js")
        );
        assert!(err.to_string().contains("'.dependency-cruiser.js(on)'"));
    }

    #[test]
    fn test_compiler_file_name() {
        assert_eq!(compiler_file_name("rules.json"), "./rules.json");
        assert_eq!(compiler_file_name("config/rules.json"), "./config/rules.json");
        assert_eq!(compiler_file_name("/etc/rules.json"), "/etc/rules.json");
    }

    #[test]
    fn test_compiler_file_name_not_prefixed_twice() {
        assert_eq!(compiler_file_name("./rules.json"), "./rules.json");
        assert_eq!(compiler_file_name("../rules.json"), "../rules.json");
        assert_eq!(compiler_file_name(&compiler_file_name("rules.json")), "./rules.json");
    }
}
