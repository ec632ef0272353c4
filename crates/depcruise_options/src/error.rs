use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    /// An explicitly named rules file can't be read
    #[error(
        "Can't open '{0}' for reading. Does it exist? (You can create a dependency-cruiser configuration file with depcruise --init .)"
    )]
    RulesFileNotFound(String),

    /// None of the default rules file candidates can be read
    #[error("Can't open '{0}(on)' for reading. Does it exist?")]
    NoDefaultRulesFile(String),

    #[error("option '{option}' should be {expected}")]
    InvalidOption { option: &'static str, expected: &'static str },

    #[error("Failed to compile rule set from '{file_name}'")]
    RuleSetCompilation {
        file_name: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, OptionsError>;
