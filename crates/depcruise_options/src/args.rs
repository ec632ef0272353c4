use clap::Parser;
use serde::{Serialize, Serializer};
use std::path::PathBuf;

use crate::types::RawOptions;

#[derive(Debug, Clone, Parser, Serialize)]
#[command(name = "depcruise")]
#[command(about = "Validate and visualize dependencies in JavaScript/TypeScript projects")]
#[serde(rename_all = "camelCase")]
pub struct CruiseArgs {
    /// Files and directories to cruise
    pub files: Vec<String>,

    /// Print information about this installation
    #[arg(short, long)]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub info: bool,

    /// Validate against the rules in this file (default: .dependency-cruiser.json or .js)
    #[arg(short, long, value_name = "FILE", num_args = 0..=1)]
    #[serde(serialize_with = "flag_or_value", skip_serializing_if = "Option::is_none")]
    pub validate: Option<Option<String>>,

    /// Alias for --validate
    #[arg(short, long, value_name = "FILE", num_args = 0..=1)]
    #[serde(serialize_with = "flag_or_value", skip_serializing_if = "Option::is_none")]
    pub config: Option<Option<String>>,

    /// File to write output to; - for stdout
    #[arg(short = 'f', long, value_name = "FILE")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_to: Option<String>,

    /// Output type, e.g. err, json, dot
    #[arg(short = 'T', long, value_name = "TYPE")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_type: Option<String>,

    /// Exclude modules matching the regex
    #[arg(short = 'x', long, value_name = "REGEX")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// Only include modules matching the regex
    #[arg(short = 'I', long, value_name = "REGEX")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_only: Option<String>,

    /// Only show modules matching the regex plus their direct neighbours
    #[arg(short = 'F', long, value_name = "REGEX")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,

    /// Include modules matching the regex, but don't follow their dependencies
    #[arg(short = 'X', long, value_name = "REGEX")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_follow: Option<String>,

    /// Maximum depth to cruise (0 = no limit)
    #[arg(short = 'd', long, value_name = "N")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<String>,

    /// Comma separated list of module systems to cruise, e.g. cjs,amd,es6
    #[arg(short = 'M', long, value_name = "ITEMS")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_systems: Option<String>,

    /// Prefix for links in the dot and err outputs
    #[arg(short = 'P', long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Collapse to a folder depth (single digit) or to modules matching a regex
    #[arg(long, value_name = "REGEX|N")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse: Option<String>,

    /// Leave symlinks unresolved
    #[arg(long)]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub preserve_symlinks: bool,

    /// Detect dependencies that only exist before TypeScript compilation; `specify` marks them
    #[arg(long, value_name = "specify", num_args = 0..=1, value_parser = ["specify"])]
    #[serde(serialize_with = "flag_or_value", skip_serializing_if = "Option::is_none")]
    pub ts_pre_compilation_deps: Option<Option<String>>,

    /// Use a TypeScript config (default: tsconfig.json)
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    #[serde(serialize_with = "flag_or_value", skip_serializing_if = "Option::is_none")]
    pub ts_config: Option<Option<String>>,

    /// Use a webpack config (default: webpack.config.js)
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    #[serde(serialize_with = "flag_or_value", skip_serializing_if = "Option::is_none")]
    pub webpack_config: Option<Option<String>>,

    /// Use a babel config (default: .babelrc.json)
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    #[serde(serialize_with = "flag_or_value", skip_serializing_if = "Option::is_none")]
    pub babel_config: Option<Option<String>>,

    /// Directory to resolve and report module names against
    #[arg(long, value_name = "DIR")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,

    /// Set up a dependency-cruiser configuration file
    #[arg(long, value_name = "ONESHOT", num_args = 0..=1)]
    #[serde(serialize_with = "flag_or_value", skip_serializing_if = "Option::is_none")]
    pub init: Option<Option<String>>,

    /// JSON file with default values to use instead of the built-in ones
    #[arg(long, value_name = "FILE")]
    #[serde(skip)]
    pub defaults: Option<PathBuf>,
}

impl CruiseArgs {
    /// The arguments as an options bag, the way the normalizer takes them
    pub fn to_raw_options(&self) -> RawOptions {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => RawOptions::new(),
        }
    }
}

/// `--flag` becomes `true`, `--flag value` becomes `"value"`.
fn flag_or_value<S: Serializer>(
    value: &Option<Option<String>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(Some(v)) => serializer.serialize_str(v),
        _ => serializer.serialize_bool(true),
    }
}
