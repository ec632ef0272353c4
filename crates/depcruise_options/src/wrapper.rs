use log::debug;
use serde_json::Value;

use crate::{
    config::Defaults,
    rules_file::option_value_or,
    types::{ConfigWrapperKind, RuleSet},
};

/// Makes sure an active config wrapper ends up with a concrete `fileName` under
/// `ruleSet.options`.
///
/// `top_level` is the value of the wrapper's own option (`--webpack-config` and friends).
/// Priority: a string top-level value, then a `fileName` the rule set already has, then the
/// wrapper's default file name.
pub(crate) fn normalize_config_wrapper(
    kind: ConfigWrapperKind,
    top_level: Option<Value>,
    rule_set: &mut Option<RuleSet>,
    defaults: &Defaults,
) {
    let default_file_name = defaults.wrapper_file_name(kind);

    if let Some(value) = top_level {
        let file_name = option_value_or(default_file_name, Some(&value));
        debug!("Moving {} '{}' into the rule set options", kind.option().key(), file_name);
        rule_set
            .get_or_insert_with(RuleSet::default)
            .options
            .wrapper_mut(kind)
            .get_or_insert_with(Default::default)
            .file_name = Some(file_name);
    }

    if let Some(rule_set) = rule_set
        && let Some(wrapper) = rule_set.options.wrapper_mut(kind)
        && wrapper.file_name.as_deref().is_none_or(str::is_empty)
    {
        debug!("No file name for {}, using '{}'", kind.option().key(), default_file_name);
        wrapper.file_name = Some(default_file_name.to_string());
    }
}
