use log::trace;
use serde_json::Value;

use crate::{
    error::{OptionsError, Result},
    known::KnownOption,
};

const ONE_OR_MORE_NON_SLASHES: &str = "[^/]+";

/// Turns `"cjs, amd ,es6"` into `["cjs", "amd", "es6"]`.
///
/// Order is kept and nothing is de-duplicated. Values that are already a list of strings
/// (e.g. options that went through the normalizer before) only get trimmed.
pub(crate) fn split_module_systems(value: &Value) -> Result<Vec<String>> {
    let invalid = || OptionsError::InvalidOption {
        option: KnownOption::ModuleSystems.key(),
        expected: "a comma separated string or a list of strings",
    };

    match value {
        Value::String(s) => Ok(s.split(',').map(|part| part.trim().to_string()).collect()),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(|s| s.trim().to_string()).ok_or_else(invalid))
            .collect(),
        _ => Err(invalid()),
    }
}

/// Expands a single digit `n` into a pattern matching the first `n` folder levels, or a
/// package directly under `node_modules`. Anything else is taken to be a pattern already.
pub(crate) fn normalize_collapse(value: &Value) -> Result<String> {
    let collapse = value.as_str().ok_or(OptionsError::InvalidOption {
        option: KnownOption::Collapse.key(),
        expected: "a string",
    })?;

    let mut chars = collapse.chars();
    if let (Some(digit), None) = (chars.next(), chars.next())
        && let Some(depth) = digit.to_digit(10)
    {
        let pattern = format!(
            "^({ONE_OR_MORE_NON_SLASHES}/){{{depth}}}|node_modules/{ONE_OR_MORE_NON_SLASHES}"
        );
        trace!("Expanded collapse depth {} to '{}'", depth, pattern);
        return Ok(pattern);
    }

    Ok(collapse.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use serde_json::json;

    #[test]
    fn test_split_trims_and_keeps_order() {
        let systems = split_module_systems(&json!("cjs, amd ,es6")).unwrap();
        assert_eq!(systems, vec!["cjs", "amd", "es6"]);
    }

    #[test]
    fn test_split_keeps_duplicates_and_empty_segments() {
        let systems = split_module_systems(&json!("cjs,,cjs")).unwrap();
        assert_eq!(systems, vec!["cjs", "", "cjs"]);
    }

    #[test]
    fn test_split_single_value() {
        assert_eq!(split_module_systems(&json!("es6")).unwrap(), vec!["es6"]);
    }

    #[test]
    fn test_split_accepts_already_split_list() {
        let systems = split_module_systems(&json!(["cjs", " amd"])).unwrap();
        assert_eq!(systems, vec!["cjs", "amd"]);
    }

    #[test]
    fn test_split_rejects_other_types() {
        assert!(matches!(
            split_module_systems(&json!(42)),
            Err(OptionsError::InvalidOption { option: "moduleSystems", .. })
        ));
        assert!(split_module_systems(&json!(["cjs", 1])).is_err());
    }

    #[test]
    fn test_collapse_digit_expands() {
        assert_eq!(normalize_collapse(&json!("2")).unwrap(), "^([^/]+/){2}|node_modules/[^/]+");
        assert_eq!(normalize_collapse(&json!("0")).unwrap(), "^([^/]+/){0}|node_modules/[^/]+");
    }

    #[test]
    fn test_collapse_pattern_passes_through() {
        assert_eq!(normalize_collapse(&json!("^lib/")).unwrap(), "^lib/");
        assert_eq!(normalize_collapse(&json!("12")).unwrap(), "12");
        assert_eq!(normalize_collapse(&json!("")).unwrap(), "");
    }

    #[test]
    fn test_collapse_non_ascii_digit_passes_through() {
        // Arabic-indic three: numeric, but not a decimal digit we expand
        assert_eq!(normalize_collapse(&json!("٣")).unwrap(), "٣");
    }

    #[test]
    fn test_collapse_rejects_non_string() {
        assert!(normalize_collapse(&json!(2)).is_err());
    }

    #[test]
    fn test_collapse_pattern_matches_folder_depth() {
        let re = Regex::new(&normalize_collapse(&json!("2")).unwrap()).unwrap();

        let collapsed = |path: &str| re.find(path).map(|m| m.as_str().to_string());
        assert_eq!(collapsed("src/cli/index.js").as_deref(), Some("src/cli/"));
        assert_eq!(collapsed("src/index.js"), None);
        assert_eq!(
            collapsed("node_modules/lodash/get.js").as_deref(),
            Some("node_modules/lodash/")
        );
    }
}
