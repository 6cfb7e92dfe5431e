use super::table::ParamTable;
use crate::core::models::label::{AtomClass, ResidueLabel};
use crate::core::models::record::Cutoff;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown {kind} model: '{name}'")]
pub struct ModelParseError {
    pub kind: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum CoulombModel {
    Linear,
    Coulomb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum DesolvationModel {
    Propka2,
    Contact,
    Volume,
    ScaledVolume,
}

/// Coefficients of a Coulomb model.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum CoulombParameters {
    /// Linear distance dependence capped at `max_dpka`.
    Linear {
        cutoff: Cutoff,
        #[serde(rename = "max-dpka")]
        max_dpka: f64,
        scaled: bool,
    },
    /// Screened Coulomb interaction with a uniform dielectric constant.
    Dielectric {
        cutoff: Cutoff,
        dielectric: f64,
        scaled: bool,
    },
}

impl CoulombParameters {
    pub fn cutoff(&self) -> Cutoff {
        match self {
            CoulombParameters::Linear { cutoff, .. }
            | CoulombParameters::Dielectric { cutoff, .. } => *cutoff,
        }
    }

    pub fn scaled(&self) -> bool {
        match self {
            CoulombParameters::Linear { scaled, .. }
            | CoulombParameters::Dielectric { scaled, .. } => *scaled,
        }
    }

    pub fn dielectric(&self) -> Option<f64> {
        match self {
            CoulombParameters::Dielectric { dielectric, .. } => Some(*dielectric),
            CoulombParameters::Linear { .. } => None,
        }
    }

    pub fn max_dpka(&self) -> Option<f64> {
        match self {
            CoulombParameters::Linear { max_dpka, .. } => Some(*max_dpka),
            CoulombParameters::Dielectric { .. } => None,
        }
    }
}

/// Desolvation coefficients as authored, before the shared radius and volume
/// tables are attached.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub(crate) enum DesolvationEntry {
    Contact {
        allowance: f64,
        prefactor: f64,
        local: f64,
    },
    Volume {
        allowance: f64,
        prefactor: f64,
        surface: f64,
    },
}

/// Coefficients of a desolvation model together with the table it reads
/// burial from.
#[derive(Debug, Clone, PartialEq)]
pub enum DesolvationParameters {
    /// Contact models weigh neighbours within a per-residue local radius.
    Contact {
        allowance: f64,
        prefactor: f64,
        local: f64,
        radii: Arc<ParamTable<ResidueLabel>>,
    },
    /// Volume models weigh buried atoms by their relative van der Waals volume.
    Volume {
        allowance: f64,
        prefactor: f64,
        surface: f64,
        volumes: Arc<ParamTable<AtomClass>>,
    },
}

impl DesolvationParameters {
    pub(crate) fn resolve(
        entry: DesolvationEntry,
        radii: &Arc<ParamTable<ResidueLabel>>,
        volumes: &Arc<ParamTable<AtomClass>>,
    ) -> Self {
        match entry {
            DesolvationEntry::Contact {
                allowance,
                prefactor,
                local,
            } => DesolvationParameters::Contact {
                allowance,
                prefactor,
                local,
                radii: Arc::clone(radii),
            },
            DesolvationEntry::Volume {
                allowance,
                prefactor,
                surface,
            } => DesolvationParameters::Volume {
                allowance,
                prefactor,
                surface,
                volumes: Arc::clone(volumes),
            },
        }
    }

    pub fn allowance(&self) -> f64 {
        match self {
            DesolvationParameters::Contact { allowance, .. }
            | DesolvationParameters::Volume { allowance, .. } => *allowance,
        }
    }

    pub fn prefactor(&self) -> f64 {
        match self {
            DesolvationParameters::Contact { prefactor, .. }
            | DesolvationParameters::Volume { prefactor, .. } => *prefactor,
        }
    }
}

impl CoulombModel {
    pub const ALL: [CoulombModel; 2] = [CoulombModel::Linear, CoulombModel::Coulomb];

    /// Whether `params` has the field set this model is defined by.
    pub fn accepts(self, params: &CoulombParameters) -> bool {
        matches!(
            (self, params),
            (CoulombModel::Linear, CoulombParameters::Linear { .. })
                | (CoulombModel::Coulomb, CoulombParameters::Dielectric { .. })
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            CoulombModel::Linear => "Linear",
            CoulombModel::Coulomb => "Coulomb",
        }
    }
}

impl DesolvationModel {
    pub const ALL: [DesolvationModel; 4] = [
        DesolvationModel::Propka2,
        DesolvationModel::Contact,
        DesolvationModel::Volume,
        DesolvationModel::ScaledVolume,
    ];

    pub fn is_contact(self) -> bool {
        matches!(self, DesolvationModel::Propka2 | DesolvationModel::Contact)
    }

    pub(crate) fn accepts(self, entry: &DesolvationEntry) -> bool {
        match entry {
            DesolvationEntry::Contact { .. } => self.is_contact(),
            DesolvationEntry::Volume { .. } => !self.is_contact(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DesolvationModel::Propka2 => "propka2",
            DesolvationModel::Contact => "ContactModel",
            DesolvationModel::Volume => "VolumeModel",
            DesolvationModel::ScaledVolume => "ScaledVolumeModel",
        }
    }
}

impl FromStr for CoulombModel {
    type Err = ModelParseError;

    /// Parses a Coulomb model name. Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(CoulombModel::Linear),
            "coulomb" => Ok(CoulombModel::Coulomb),
            _ => Err(ModelParseError {
                kind: "Coulomb",
                name: s.to_string(),
            }),
        }
    }
}

impl FromStr for DesolvationModel {
    type Err = ModelParseError;

    /// Parses a desolvation model name, with or without the `Model` suffix.
    /// Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propka2" => Ok(DesolvationModel::Propka2),
            "contactmodel" | "contact" => Ok(DesolvationModel::Contact),
            "volumemodel" | "volume" => Ok(DesolvationModel::Volume),
            "scaledvolumemodel" | "scaledvolume" | "scaled-volume" => {
                Ok(DesolvationModel::ScaledVolume)
            }
            _ => Err(ModelParseError {
                kind: "desolvation",
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for CoulombModel {
    type Error = ModelParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for DesolvationModel {
    type Error = ModelParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for CoulombModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for DesolvationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
