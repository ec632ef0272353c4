use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::known::KnownOption;

/// Options as handed over by an argument parser: anything goes.
pub type RawOptions = Map<String, Value>;

/// The canonical options object handed to the analysis engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedOptions {
    pub output_to: String,
    pub output_type: String,
    /// True when validation was asked for, either through `validate` or `config`
    pub validate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_systems: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_set: Option<RuleSet>,
    /// Known options the normalizer doesn't interpret, keyed by their option name
    #[serde(flatten)]
    pub passthrough: BTreeMap<String, Value>,
}

impl NormalizedOptions {
    pub(crate) fn with_outputs(output_to: String, output_type: String) -> Self {
        Self {
            output_to,
            output_type,
            validate: false,
            module_systems: None,
            collapse: None,
            rules_file: None,
            rule_set: None,
            passthrough: BTreeMap::new(),
        }
    }

    /// Value of an option that was passed through untouched
    pub fn get(&self, option: KnownOption) -> Option<&Value> {
        self.passthrough.get(option.key())
    }

    /// The configuration of one of the build-tool wrappers, if active
    pub fn config_wrapper(&self, kind: ConfigWrapperKind) -> Option<&ConfigWrapper> {
        self.rule_set.as_ref().and_then(|rs| rs.options.wrapper(kind).as_ref())
    }

    /// Converts back into an options bag, e.g. to feed it through the normalizer again.
    ///
    /// `validate` is left out when false: any `validate` key in a bag asks for validation.
    pub fn to_raw_options(&self) -> RawOptions {
        let mut raw = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => RawOptions::new(),
        };
        if !self.validate {
            raw.remove(KnownOption::Validate.key());
        }
        raw
    }
}

/// A compiled rule set. Only `options` is interpreted here; everything else (`forbidden`,
/// `allowed`, ...) is carried along as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub options: RuleSetOptions,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSetOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webpack_config: Option<ConfigWrapper>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_config: Option<ConfigWrapper>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub babel_config: Option<ConfigWrapper>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl RuleSetOptions {
    pub fn wrapper(&self, kind: ConfigWrapperKind) -> &Option<ConfigWrapper> {
        match kind {
            ConfigWrapperKind::Webpack => &self.webpack_config,
            ConfigWrapperKind::TypeScript => &self.ts_config,
            ConfigWrapperKind::Babel => &self.babel_config,
        }
    }

    pub fn wrapper_mut(&mut self, kind: ConfigWrapperKind) -> &mut Option<ConfigWrapper> {
        match kind {
            ConfigWrapperKind::Webpack => &mut self.webpack_config,
            ConfigWrapperKind::TypeScript => &mut self.ts_config,
            ConfigWrapperKind::Babel => &mut self.babel_config,
        }
    }
}

/// Where a build tool's own configuration lives, plus whatever else the rule set says
/// about it (e.g. webpack `env` or `arguments`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigWrapper {
    #[serde(rename = "fileName", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigWrapperKind {
    Webpack,
    TypeScript,
    Babel,
}

impl ConfigWrapperKind {
    pub const ALL: [ConfigWrapperKind; 3] =
        [ConfigWrapperKind::Webpack, ConfigWrapperKind::TypeScript, ConfigWrapperKind::Babel];

    /// The top-level option that selects this wrapper
    pub fn option(self) -> KnownOption {
        match self {
            ConfigWrapperKind::Webpack => KnownOption::WebpackConfig,
            ConfigWrapperKind::TypeScript => KnownOption::TsConfig,
            ConfigWrapperKind::Babel => KnownOption::BabelConfig,
        }
    }
}
