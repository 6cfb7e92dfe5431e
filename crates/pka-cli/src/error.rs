use pkastore::core::models::label::LabelParseError;
use pkastore::core::params::file::ParamLoadError;
use pkastore::core::params::hbond::UnsupportedContextError;
use pkastore::core::params::models::ModelParseError;
use pkastore::core::params::table::LookupError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Exit status for configuration errors, including unsupported interaction
/// contexts.
pub const CONFIG_EXIT_CODE: i32 = 9;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] ParamLoadError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Failed to set up logging: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::Load(_) => CONFIG_EXIT_CODE,
            _ => 1,
        }
    }
}

impl From<UnsupportedContextError> for CliError {
    fn from(e: UnsupportedContextError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<LabelParseError> for CliError {
    fn from(e: LabelParseError) -> Self {
        CliError::Argument(e.to_string())
    }
}

impl From<ModelParseError> for CliError {
    fn from(e: ModelParseError) -> Self {
        CliError::Argument(e.to_string())
    }
}
