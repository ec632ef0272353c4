//! Option normalization for depcruise.
//!
//! This crate turns the options bag an argument parser produces into the canonical
//! options the dependency analysis runs on:
//! - Dropping everything that isn't a known option
//! - Seeding defaults for output type and destination
//! - Splitting module systems and expanding collapse depths into patterns
//! - Locating and compiling the rules file when validation is asked for
//! - Moving webpack/TypeScript/Babel config file names into the rule set options
//!
//! # Examples
//!
//! ```no_run
//! use depcruise_options::{JsonRuleSetCompiler, normalize};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let raw = json!({ "validate": true, "moduleSystems": "cjs,es6", "webpackConfig": true });
//! let options = normalize(raw.as_object().unwrap(), JsonRuleSetCompiler::default())?;
//!
//! assert!(options.validate);
//! println!("{}", serde_json::to_string_pretty(&options)?);
//! # Ok(())
//! # }
//! ```

mod args;
mod compiler;
mod config;
mod constants;
mod error;
mod known;
mod normalizer;
mod rules_file;
mod transform;
mod types;
mod wrapper;

// Re-export public API
pub use args::CruiseArgs;
pub use compiler::{JsonRuleSetCompiler, RuleSetCompiler};
pub use config::Defaults;
pub use constants::{
    BABEL_CONFIG, DEFAULT_CONFIG_FILE_NAME, OLD_DEFAULT_RULES_FILE_NAME, OUTPUT_TO, OUTPUT_TYPE,
    RULES_FILE_NAME_SEARCH, TYPESCRIPT_CONFIG, WEBPACK_CONFIG,
};
pub use error::{OptionsError, Result};
pub use known::KnownOption;
pub use normalizer::{OptionsNormalizer, normalize, normalize_with_known};
pub use rules_file::{determine_rules_file_name, option_value_or};
pub use types::{
    ConfigWrapper, ConfigWrapperKind, NormalizedOptions, RawOptions, RuleSet, RuleSetOptions,
};
