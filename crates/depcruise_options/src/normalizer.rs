use log::{debug, info, trace};
use serde_json::Value;
use std::{collections::BTreeMap, path::PathBuf};

use crate::{
    compiler::RuleSetCompiler,
    config::Defaults,
    error::{OptionsError, Result},
    known::{KnownOption, eject_non_cli_options},
    rules_file::{compiler_file_name, resolve_rules_file_name},
    transform::{normalize_collapse, split_module_systems},
    types::{ConfigWrapperKind, NormalizedOptions, RawOptions},
    wrapper::normalize_config_wrapper,
};

/// Normalizes `raw` with the default known options, defaults and working directory.
pub fn normalize<C: RuleSetCompiler>(raw: &RawOptions, compiler: C) -> Result<NormalizedOptions> {
    OptionsNormalizer::new(compiler).normalize(raw)
}

/// Like [`normalize`], letting through only the options in `known`.
pub fn normalize_with_known<C: RuleSetCompiler>(
    raw: &RawOptions,
    known: &[KnownOption],
    compiler: C,
) -> Result<NormalizedOptions> {
    OptionsNormalizer::new(compiler).with_known_options(known).normalize(raw)
}

/// Turns a raw options bag into [`NormalizedOptions`].
///
/// Each call is independent: the only state is the configuration set up through the
/// `with_*` methods. Relative rules file names are probed against `working_dir`, which
/// defaults to the process' current directory.
pub struct OptionsNormalizer<C> {
    compiler: C,
    defaults: Defaults,
    known_options: Vec<KnownOption>,
    working_dir: PathBuf,
}

impl<C: RuleSetCompiler> OptionsNormalizer<C> {
    pub fn new(compiler: C) -> Self {
        Self {
            compiler,
            defaults: Defaults::default(),
            known_options: KnownOption::ALL.to_vec(),
            working_dir: PathBuf::from("."),
        }
    }

    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_known_options(mut self, known: &[KnownOption]) -> Self {
        self.known_options = known.to_vec();
        self
    }

    /// Directory relative rules files are looked up in; the compiler reads from it too.
    pub fn with_working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = working_dir.into();
        self.compiler.set_base_dir(&self.working_dir);
        self
    }

    pub fn normalize(&self, raw: &RawOptions) -> Result<NormalizedOptions> {
        debug!("Normalizing {} raw options", raw.len());
        let mut options: BTreeMap<KnownOption, Value> =
            eject_non_cli_options(raw, &self.known_options).into_iter().collect();
        trace!("Known options: {:?}", options.keys().collect::<Vec<_>>());

        let output_to = take_string(&mut options, KnownOption::OutputTo)?
            .unwrap_or_else(|| self.defaults.output_to.clone());
        let output_type = take_string(&mut options, KnownOption::OutputType)?
            .unwrap_or_else(|| self.defaults.output_type.clone());
        let mut normalized = NormalizedOptions::with_outputs(output_to, output_type);

        if let Some(value) = options.remove(&KnownOption::ModuleSystems) {
            let module_systems = split_module_systems(&value)?;
            debug!("Module systems: {:?}", module_systems);
            normalized.module_systems = Some(module_systems);
        }

        // --config <file> is the old spelling of --validate <file>
        if let Some(config) = options.get(&KnownOption::Config).cloned() {
            debug!("Treating config {} as validate", config);
            options.insert(KnownOption::Validate, config);
        }

        if let Some(value) = options.remove(&KnownOption::Collapse) {
            normalized.collapse = Some(normalize_collapse(&value)?);
        }

        let validate = options.remove(&KnownOption::Validate);
        if let Some(validate) = &validate {
            let rules_file =
                resolve_rules_file_name(validate, &self.defaults, &self.working_dir)?;
            let file_name = compiler_file_name(&rules_file);
            let rule_set = self.compiler.compile(&file_name).map_err(|source| {
                OptionsError::RuleSetCompilation { file_name: file_name.clone(), source }
            })?;
            info!("Validating against rules in {}", rules_file);
            normalized.rules_file = Some(rules_file);
            normalized.rule_set = Some(rule_set);
        }

        for kind in ConfigWrapperKind::ALL {
            normalize_config_wrapper(
                kind,
                options.remove(&kind.option()),
                &mut normalized.rule_set,
                &self.defaults,
            );
        }

        normalized.validate = validate.is_some();
        normalized.passthrough =
            options.into_iter().map(|(option, value)| (option.key().to_string(), value)).collect();

        debug!(
            "Normalized options: validate={}, output_type={}, output_to={}",
            normalized.validate, normalized.output_type, normalized.output_to
        );
        Ok(normalized)
    }
}

fn take_string(
    options: &mut BTreeMap<KnownOption, Value>,
    option: KnownOption,
) -> Result<Option<String>> {
    match options.remove(&option) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(OptionsError::InvalidOption { option: option.key(), expected: "a string" }),
    }
}
