use super::defaults::DefaultsConfig;
use super::models::{AppConfig, ParamsSource};
use crate::cli::Cli;
use crate::error::{CliError, Result};
use pkastore::core::params::hbond::GapPolicy;

pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let params = match &cli.params {
        Some(path) if !path.is_file() => {
            return Err(CliError::Config(format!(
                "Parameter file '{}' does not exist or is not a file",
                path.display()
            )));
        }
        Some(path) => ParamsSource::File(path.clone()),
        None => ParamsSource::Builtin,
    };

    let gap_policy = if cli.fill_gaps {
        GapPolicy::FillDegenerate
    } else {
        defaults.gap_policy
    };

    Ok(AppConfig { params, gap_policy })
}
