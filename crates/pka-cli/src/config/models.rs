use crate::error::Result;
use pkastore::ParameterStore;
use pkastore::core::params::hbond::GapPolicy;
use std::path::PathBuf;
use tracing::info;

/// Where the parameter set is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsSource {
    Builtin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub params: ParamsSource,
    pub gap_policy: GapPolicy,
}

impl AppConfig {
    pub fn load_store(&self) -> Result<ParameterStore> {
        let store = match &self.params {
            ParamsSource::Builtin => {
                info!("Using the built-in parameter set.");
                ParameterStore::builtin_with_policy(self.gap_policy)?
            }
            ParamsSource::File(path) => {
                info!("Loading parameter set from '{}'.", path.display());
                ParameterStore::load_with_policy(path, self.gap_policy)?
            }
        };
        Ok(store)
    }
}
