//! Hydrogen-bond interaction parameters.
//!
//! The back-bone context is authored as one complete record per category. The
//! side-chain context is a symmetric relation that is only authored for pairs
//! where the row does not come after the column; the remaining cells are
//! either marked `"reverse"` or left out, and are derived by [`complete`].

use super::table::{LookupError, ParamTable};
use crate::core::models::label::ResidueCategory;
use crate::core::models::record::HBondRecord;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

const SIDE_CHAIN_TABLE: &str = "side-chain hydrogen-bond";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "Cannot determine what type of hydrogen-bonding interactions you want: '{0}' (expected 'back-bone' or 'side-chain')"
)]
pub struct UnsupportedContextError(pub String);

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompletionError {
    #[error("No hydrogen-bond parameters authored for {row}/{column} in either direction")]
    Gap {
        row: ResidueCategory,
        column: ResidueCategory,
    },

    #[error(
        "Hydrogen-bond parameters for {row}/{column} ({forward}) disagree with {column}/{row} ({reverse})"
    )]
    Asymmetric {
        row: ResidueCategory,
        column: ResidueCategory,
        forward: HBondRecord,
        reverse: HBondRecord,
    },

    #[error("Column '{column}' under row '{row}' has no row of its own")]
    UnknownColumn {
        row: ResidueCategory,
        column: ResidueCategory,
    },

    #[error("Hydrogen-bond parameters for {row}/{column} are not finite: {record}")]
    NonFinite {
        row: ResidueCategory,
        column: ResidueCategory,
        record: HBondRecord,
    },
}

/// The two contexts in which hydrogen-bond parameters are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionContext {
    /// Interaction with back-bone NH or CO groups.
    BackBone,
    /// Interaction with side-chain NH or CO groups.
    SideChain,
}

/// What to do with a pair that is authored in neither direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GapPolicy {
    /// Fail with [`CompletionError::Gap`].
    #[default]
    Reject,
    /// Fill the pair with [`HBondRecord::DEGENERATE`].
    FillDegenerate,
}

/// How a cell of the authored side-chain matrix is filled.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AuthoredCell {
    Record(HBondRecord),
    Derived(Derivation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Derivation {
    /// Take the value of the mirrored cell.
    Reverse,
}

/// The side-chain matrix as authored, before completion.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct AuthoredMatrix {
    rows: BTreeMap<ResidueCategory, BTreeMap<ResidueCategory, AuthoredCell>>,
}

/// A fully populated, symmetric side-chain matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SideChainMatrix {
    categories: Vec<ResidueCategory>,
    cells: BTreeMap<(ResidueCategory, ResidueCategory), HBondRecord>,
}

/// Hydrogen-bond parameters of one interaction context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HydrogenBondParameters<'a> {
    BackBone(&'a ParamTable<ResidueCategory, HBondRecord>),
    SideChain(&'a SideChainMatrix),
}

impl AuthoredMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, row: ResidueCategory, column: ResidueCategory, cell: AuthoredCell) {
        self.rows.entry(row).or_default().insert(column, cell);
    }

    /// Adds `row` to the category set without authoring any cell.
    #[cfg(test)]
    fn add_row(&mut self, row: ResidueCategory) {
        self.rows.entry(row).or_default();
    }

    pub fn get(&self, row: ResidueCategory, column: ResidueCategory) -> Option<&AuthoredCell> {
        self.rows.get(&row).and_then(|cells| cells.get(&column))
    }

    pub fn categories(&self) -> impl Iterator<Item = ResidueCategory> + '_ {
        self.rows.keys().copied()
    }

    fn concrete(&self, row: ResidueCategory, column: ResidueCategory) -> Option<HBondRecord> {
        match self.get(row, column) {
            Some(AuthoredCell::Record(record)) => Some(*record),
            _ => None,
        }
    }
}

impl From<&SideChainMatrix> for AuthoredMatrix {
    fn from(matrix: &SideChainMatrix) -> Self {
        let mut authored = AuthoredMatrix::new();
        for (&(row, column), &record) in &matrix.cells {
            authored.insert(row, column, AuthoredCell::Record(record));
        }
        authored
    }
}

/// Derives a full side-chain matrix from its authored form.
///
/// For every ordered pair `(a, b)` of the authored categories: a concrete
/// cell is kept; a `"reverse"` or missing cell takes the concrete value of
/// `(b, a)`. A pair that is concrete in neither direction is handled by
/// `policy`. Authored records must be finite, and conflicting concrete values
/// for `(a, b)` and `(b, a)` are an error, so the result is always symmetric.
pub fn complete(
    authored: &AuthoredMatrix,
    policy: GapPolicy,
) -> Result<SideChainMatrix, CompletionError> {
    let categories: Vec<ResidueCategory> = authored.categories().collect();

    for (&row, cells) in &authored.rows {
        for (&column, cell) in cells {
            if !authored.rows.contains_key(&column) {
                return Err(CompletionError::UnknownColumn { row, column });
            }
            if let AuthoredCell::Record(record) = cell {
                if !record.is_finite() {
                    return Err(CompletionError::NonFinite {
                        row,
                        column,
                        record: *record,
                    });
                }
            }
        }
    }

    let mut cells = BTreeMap::new();
    for &row in &categories {
        for &column in &categories {
            let forward = authored.concrete(row, column);
            let reverse = authored.concrete(column, row);
            let record = match (forward, reverse) {
                (Some(forward), Some(reverse)) if forward != reverse => {
                    return Err(CompletionError::Asymmetric {
                        row,
                        column,
                        forward,
                        reverse,
                    });
                }
                (Some(record), _) | (None, Some(record)) => record,
                (None, None) => match policy {
                    GapPolicy::Reject => return Err(CompletionError::Gap { row, column }),
                    GapPolicy::FillDegenerate => {
                        warn!(
                            "No hydrogen-bond parameters for {}/{}; using a degenerate record.",
                            row, column
                        );
                        HBondRecord::DEGENERATE
                    }
                },
            };
            cells.insert((row, column), record);
        }
    }

    Ok(SideChainMatrix { categories, cells })
}

impl SideChainMatrix {
    pub fn get(&self, a: ResidueCategory, b: ResidueCategory) -> Result<HBondRecord, LookupError> {
        self.cells
            .get(&(a, b))
            .copied()
            .ok_or_else(|| LookupError::NotFound {
                table: SIDE_CHAIN_TABLE,
                key: format!("{a}/{b}"),
            })
    }

    /// All records of row `a`, in canonical column order.
    pub fn row(
        &self,
        a: ResidueCategory,
    ) -> Result<Vec<(ResidueCategory, HBondRecord)>, LookupError> {
        if !self.categories.contains(&a) {
            return Err(LookupError::NotFound {
                table: SIDE_CHAIN_TABLE,
                key: a.to_string(),
            });
        }
        Ok(self
            .categories
            .iter()
            .filter_map(|&b| self.cells.get(&(a, b)).map(|&record| (b, record)))
            .collect())
    }

    pub fn categories(&self) -> &[ResidueCategory] {
        &self.categories
    }

    /// Every cell, ordered by row and then column.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (ResidueCategory, ResidueCategory, HBondRecord)> + '_ {
        self.cells.iter().map(|(&(a, b), &record)| (a, b, record))
    }

    pub fn is_symmetric(&self) -> bool {
        self.cells
            .iter()
            .all(|(&(a, b), record)| self.cells.get(&(b, a)) == Some(record))
    }
}

impl InteractionContext {
    pub fn name(self) -> &'static str {
        match self {
            InteractionContext::BackBone => "back-bone",
            InteractionContext::SideChain => "side-chain",
        }
    }
}

impl FromStr for InteractionContext {
    type Err = UnsupportedContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "back-bone" | "backbone" | "back_bone" => Ok(InteractionContext::BackBone),
            "side-chain" | "sidechain" | "side_chain" => Ok(InteractionContext::SideChain),
            _ => Err(UnsupportedContextError(s.to_string())),
        }
    }
}

impl fmt::Display for InteractionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
