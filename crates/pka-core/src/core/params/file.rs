use super::hbond::{AuthoredMatrix, CompletionError};
use super::interaction::{InteractionClass, InteractionShapeError};
use super::models::{CoulombModel, CoulombParameters, DesolvationEntry, DesolvationModel};
use super::table::ParamTable;
use crate::core::models::label::{AtomClass, ResidueCategory, ResidueLabel};
use crate::core::models::record::HBondRecord;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// On-disk layout of a parameter set. See `resources/propka.params.toml`.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct ParamFile {
    pub categories: ParamTable<ResidueLabel, ResidueCategory>,
    pub charges: ParamTable<ResidueLabel>,
    pub model_pka: ParamTable<ResidueLabel>,
    pub local_radii: ParamTable<ResidueLabel>,
    pub vdw_volumes: ParamTable<AtomClass>,
    pub coulomb: ParamTable<CoulombModel, CoulombParameters>,
    pub desolvation: BTreeMap<DesolvationModel, DesolvationEntry>,
    pub interaction: BTreeMap<ResidueCategory, Vec<InteractionClass>>,
    pub hydrogen_bond: HydrogenBondSection,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct HydrogenBondSection {
    pub back_bone: ParamTable<ResidueCategory, HBondRecord>,
    pub side_chain: AuthoredMatrix,
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Category table key '{0}' is not a residue name")]
    NotAResidueName(ResidueLabel),
    #[error("Invalid side-chain hydrogen-bond matrix: {0}")]
    Completion(#[from] CompletionError),
    #[error("Invalid interaction matrix: {0}")]
    Interaction(#[from] InteractionShapeError),
    #[error("Parameters of the '{model}' model have the fields of a different model")]
    MismatchedModel { model: String },
}

impl ParamFile {
    pub(crate) fn from_path(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_str_named(&content, &path.to_string_lossy())
    }

    pub(crate) fn from_str_named(content: &str, name: &str) -> Result<Self, ParamLoadError> {
        toml::from_str(content).map_err(|e| ParamLoadError::Toml {
            path: name.to_string(),
            source: e,
        })
    }

    /// Checks that every model section is authored with its own field set,
    /// e.g. `[coulomb.Linear]` carries `max-dpka` and not `dielectric`.
    pub(crate) fn check_model_shapes(&self) -> Result<(), ParamLoadError> {
        let coulomb = self
            .coulomb
            .iter()
            .find(|&(model, params)| !model.accepts(params))
            .map(|(model, _)| model.name());
        let desolvation = self
            .desolvation
            .iter()
            .find(|&(model, entry)| !model.accepts(entry))
            .map(|(model, _)| model.name());
        match coulomb.or(desolvation) {
            Some(model) => Err(ParamLoadError::MismatchedModel {
                model: model.to_string(),
            }),
            None => Ok(()),
        }
    }
}
