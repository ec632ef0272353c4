//! Built-in default values for option normalization.
//!
//! These mirror the `defaults.json` table shipped with dependency-cruiser and are the
//! values [`Defaults::default`](crate::Defaults) falls back to.
//!
//! ## Rules files
//!
//! - `.dependency-cruiser.json`: the legacy JSON rules file, still searched first
//! - `.dependency-cruiser.js`: the current default, written by `depcruise --init`

/// Where output goes when `--output-to` is not given (`-` is stdout)
pub const OUTPUT_TO: &str = "-";

/// Reporter used when `--output-type` is not given
pub const OUTPUT_TYPE: &str = "err";

/// Name used in the "no default rules file" error message
pub const DEFAULT_CONFIG_FILE_NAME: &str = ".dependency-cruiser.js";

/// Rules file name from before the JS config existed
pub const OLD_DEFAULT_RULES_FILE_NAME: &str = ".dependency-cruiser.json";

/// Rules file candidates searched, in priority order, when `--validate` has no value
pub const RULES_FILE_NAME_SEARCH: &[&str] = &[
    ".dependency-cruiser.json", // legacy
    ".dependency-cruiser.js",   // current
];

pub const WEBPACK_CONFIG: &str = "webpack.config.js";
pub const TYPESCRIPT_CONFIG: &str = "tsconfig.json";
pub const BABEL_CONFIG: &str = ".babelrc.json";
