use log::trace;
use serde_json::Value;

use crate::types::RawOptions;

/// Option identifiers the normalizer lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KnownOption {
    BaseDir,
    BabelConfig,
    Collapse,
    Config,
    DoNotFollow,
    Exclude,
    Focus,
    Help,
    IncludeOnly,
    Info,
    Init,
    MaxDepth,
    ModuleSystems,
    OutputTo,
    OutputType,
    Prefix,
    PreserveSymlinks,
    TsConfig,
    TsPreCompilationDeps,
    Validate,
    Version,
    WebpackConfig,
}

impl KnownOption {
    /// The default allow-list
    pub const ALL: &'static [KnownOption] = &[
        KnownOption::BaseDir,
        KnownOption::BabelConfig,
        KnownOption::Collapse,
        KnownOption::Config,
        KnownOption::DoNotFollow,
        KnownOption::Exclude,
        KnownOption::Focus,
        KnownOption::Help,
        KnownOption::IncludeOnly,
        KnownOption::Info,
        KnownOption::Init,
        KnownOption::MaxDepth,
        KnownOption::ModuleSystems,
        KnownOption::OutputTo,
        KnownOption::OutputType,
        KnownOption::Prefix,
        KnownOption::PreserveSymlinks,
        KnownOption::TsConfig,
        KnownOption::TsPreCompilationDeps,
        KnownOption::Validate,
        KnownOption::Version,
        KnownOption::WebpackConfig,
    ];

    /// The key this option uses in a raw options bag
    pub fn key(self) -> &'static str {
        match self {
            KnownOption::BaseDir => "baseDir",
            KnownOption::BabelConfig => "babelConfig",
            KnownOption::Collapse => "collapse",
            KnownOption::Config => "config",
            KnownOption::DoNotFollow => "doNotFollow",
            KnownOption::Exclude => "exclude",
            KnownOption::Focus => "focus",
            KnownOption::Help => "help",
            KnownOption::IncludeOnly => "includeOnly",
            KnownOption::Info => "info",
            KnownOption::Init => "init",
            KnownOption::MaxDepth => "maxDepth",
            KnownOption::ModuleSystems => "moduleSystems",
            KnownOption::OutputTo => "outputTo",
            KnownOption::OutputType => "outputType",
            KnownOption::Prefix => "prefix",
            KnownOption::PreserveSymlinks => "preserveSymlinks",
            KnownOption::TsConfig => "tsConfig",
            KnownOption::TsPreCompilationDeps => "tsPreCompilationDeps",
            KnownOption::Validate => "validate",
            KnownOption::Version => "version",
            KnownOption::WebpackConfig => "webpackConfig",
        }
    }

    pub fn from_key(key: &str) -> Option<KnownOption> {
        KnownOption::ALL.iter().copied().find(|option| option.key() == key)
    }
}

/// Keeps only the entries of `raw` whose key is in `known`.
///
/// Argument parsers tend to leave their own bookkeeping in the options bag (positional
/// arguments, help metadata); none of that should reach the analysis engine.
pub(crate) fn eject_non_cli_options(
    raw: &RawOptions,
    known: &[KnownOption],
) -> Vec<(KnownOption, Value)> {
    raw.iter()
        .filter_map(|(key, value)| match KnownOption::from_key(key) {
            Some(option) if known.contains(&option) => Some((option, value.clone())),
            _ => {
                trace!("Dropping unknown option '{}'", key);
                None
            }
        })
        .collect()
}
