use phf::{Map, phf_map};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelParseError {
    #[error("Unknown residue label: '{0}'")]
    ResidueLabel(String),
    #[error("Unknown residue category: '{0}'")]
    ResidueCategory(String),
    #[error("Unknown atom class: '{0}' (expected one of C, C4, N, O, S)")]
    AtomClass(String),
}

/// A reduced class of side chains or termini sharing electrostatic and
/// hydrogen-bonding behavior.
///
/// The declaration order is the canonical ordering used by the interaction
/// matrices: the seven titratable categories first, followed by the three
/// polar, non-titratable ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum ResidueCategory {
    Carboxyl,   // COO - ASP, GLU and the C-terminus
    Cysteine,   // CYS
    Tyrosine,   // TYR
    Histidine,  // HIS
    NTerminus,  // N+
    Lysine,     // LYS
    Arginine,   // ARG
    Hydroxyl,   // ROH - SER, THR
    Amide,      // AMD - ASN, GLN
    Tryptophan, // TRP
}

/// A label used as key by the scalar parameter tables.
///
/// This is the union of raw residue names (including the two termini) and the
/// reduced category names that have no residue of the same spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum ResidueLabel {
    // --- Reduced categories without a residue namesake ---
    Carboxyl, // COO
    Hydroxyl, // ROH
    Amide,    // AMD

    // --- Termini ---
    CTerminus, // C-
    NTerminus, // N+

    // --- Residues ---
    AsparticAcid, // ASP
    GlutamicAcid, // GLU
    Histidine,    // HIS
    Cysteine,     // CYS
    Tyrosine,     // TYR
    Lysine,       // LYS
    Arginine,     // ARG
    Serine,       // SER
    Threonine,    // THR
    Asparagine,   // ASN
    Glutamine,    // GLN
    Tryptophan,   // TRP
}

/// Atom classes of the van der Waals volume table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum AtomClass {
    Carbon,            // C  - all 'C' and 'CA' atoms
    HydrophobicCarbon, // C4 - hydrophobic carbons and unidentified atoms
    Nitrogen,          // N
    Oxygen,            // O
    Sulphur,           // S
}

// Legacy data keys padded termini to three characters; both spellings map to
// the same member.
static RESIDUE_LABELS: Map<&'static str, ResidueLabel> = phf_map! {
    "COO" => ResidueLabel::Carboxyl,
    "ROH" => ResidueLabel::Hydroxyl,
    "AMD" => ResidueLabel::Amide,
    "C-" => ResidueLabel::CTerminus,
    "C- " => ResidueLabel::CTerminus,
    "N+" => ResidueLabel::NTerminus,
    "N+ " => ResidueLabel::NTerminus,
    "ASP" => ResidueLabel::AsparticAcid,
    "GLU" => ResidueLabel::GlutamicAcid,
    "HIS" => ResidueLabel::Histidine,
    "CYS" => ResidueLabel::Cysteine,
    "TYR" => ResidueLabel::Tyrosine,
    "LYS" => ResidueLabel::Lysine,
    "ARG" => ResidueLabel::Arginine,
    "SER" => ResidueLabel::Serine,
    "THR" => ResidueLabel::Threonine,
    "ASN" => ResidueLabel::Asparagine,
    "GLN" => ResidueLabel::Glutamine,
    "TRP" => ResidueLabel::Tryptophan,
};

static RESIDUE_CATEGORIES: Map<&'static str, ResidueCategory> = phf_map! {
    "COO" => ResidueCategory::Carboxyl,
    "CYS" => ResidueCategory::Cysteine,
    "TYR" => ResidueCategory::Tyrosine,
    "HIS" => ResidueCategory::Histidine,
    "N+" => ResidueCategory::NTerminus,
    "N+ " => ResidueCategory::NTerminus,
    "LYS" => ResidueCategory::Lysine,
    "ARG" => ResidueCategory::Arginine,
    "ROH" => ResidueCategory::Hydroxyl,
    "AMD" => ResidueCategory::Amide,
    "TRP" => ResidueCategory::Tryptophan,
};

impl ResidueCategory {
    /// All categories in canonical order.
    pub const ALL: [ResidueCategory; 10] = [
        ResidueCategory::Carboxyl,
        ResidueCategory::Cysteine,
        ResidueCategory::Tyrosine,
        ResidueCategory::Histidine,
        ResidueCategory::NTerminus,
        ResidueCategory::Lysine,
        ResidueCategory::Arginine,
        ResidueCategory::Hydroxyl,
        ResidueCategory::Amide,
        ResidueCategory::Tryptophan,
    ];

    /// Number of leading categories in [`ResidueCategory::ALL`] that titrate.
    pub const TITRATABLE_COUNT: usize = 7;

    /// Position in the canonical ordering.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_titratable(self) -> bool {
        self.index() < Self::TITRATABLE_COUNT
    }

    pub fn label(self) -> &'static str {
        match self {
            ResidueCategory::Carboxyl => "COO",
            ResidueCategory::Cysteine => "CYS",
            ResidueCategory::Tyrosine => "TYR",
            ResidueCategory::Histidine => "HIS",
            ResidueCategory::NTerminus => "N+",
            ResidueCategory::Lysine => "LYS",
            ResidueCategory::Arginine => "ARG",
            ResidueCategory::Hydroxyl => "ROH",
            ResidueCategory::Amide => "AMD",
            ResidueCategory::Tryptophan => "TRP",
        }
    }
}

impl ResidueLabel {
    pub const ALL: [ResidueLabel; 17] = [
        ResidueLabel::Carboxyl,
        ResidueLabel::Hydroxyl,
        ResidueLabel::Amide,
        ResidueLabel::CTerminus,
        ResidueLabel::NTerminus,
        ResidueLabel::AsparticAcid,
        ResidueLabel::GlutamicAcid,
        ResidueLabel::Histidine,
        ResidueLabel::Cysteine,
        ResidueLabel::Tyrosine,
        ResidueLabel::Lysine,
        ResidueLabel::Arginine,
        ResidueLabel::Serine,
        ResidueLabel::Threonine,
        ResidueLabel::Asparagine,
        ResidueLabel::Glutamine,
        ResidueLabel::Tryptophan,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResidueLabel::Carboxyl => "COO",
            ResidueLabel::Hydroxyl => "ROH",
            ResidueLabel::Amide => "AMD",
            ResidueLabel::CTerminus => "C-",
            ResidueLabel::NTerminus => "N+",
            ResidueLabel::AsparticAcid => "ASP",
            ResidueLabel::GlutamicAcid => "GLU",
            ResidueLabel::Histidine => "HIS",
            ResidueLabel::Cysteine => "CYS",
            ResidueLabel::Tyrosine => "TYR",
            ResidueLabel::Lysine => "LYS",
            ResidueLabel::Arginine => "ARG",
            ResidueLabel::Serine => "SER",
            ResidueLabel::Threonine => "THR",
            ResidueLabel::Asparagine => "ASN",
            ResidueLabel::Glutamine => "GLN",
            ResidueLabel::Tryptophan => "TRP",
        }
    }

    /// Whether the label names a residue (or terminus) rather than a reduced
    /// category.
    pub fn is_residue_name(self) -> bool {
        !matches!(
            self,
            ResidueLabel::Carboxyl | ResidueLabel::Hydroxyl | ResidueLabel::Amide
        )
    }
}

impl From<ResidueCategory> for ResidueLabel {
    fn from(category: ResidueCategory) -> Self {
        match category {
            ResidueCategory::Carboxyl => ResidueLabel::Carboxyl,
            ResidueCategory::Cysteine => ResidueLabel::Cysteine,
            ResidueCategory::Tyrosine => ResidueLabel::Tyrosine,
            ResidueCategory::Histidine => ResidueLabel::Histidine,
            ResidueCategory::NTerminus => ResidueLabel::NTerminus,
            ResidueCategory::Lysine => ResidueLabel::Lysine,
            ResidueCategory::Arginine => ResidueLabel::Arginine,
            ResidueCategory::Hydroxyl => ResidueLabel::Hydroxyl,
            ResidueCategory::Amide => ResidueLabel::Amide,
            ResidueCategory::Tryptophan => ResidueLabel::Tryptophan,
        }
    }
}

impl AtomClass {
    pub const ALL: [AtomClass; 5] = [
        AtomClass::Carbon,
        AtomClass::HydrophobicCarbon,
        AtomClass::Nitrogen,
        AtomClass::Oxygen,
        AtomClass::Sulphur,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            AtomClass::Carbon => "C",
            AtomClass::HydrophobicCarbon => "C4",
            AtomClass::Nitrogen => "N",
            AtomClass::Oxygen => "O",
            AtomClass::Sulphur => "S",
        }
    }
}

impl FromStr for ResidueLabel {
    type Err = LabelParseError;

    /// Parses a residue label, accepting both normalized (`"N+"`) and legacy
    /// padded (`"N+ "`) spellings. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RESIDUE_LABELS
            .get(s)
            .or_else(|| RESIDUE_LABELS.get(s.trim()))
            .copied()
            .ok_or_else(|| LabelParseError::ResidueLabel(s.to_string()))
    }
}

impl FromStr for ResidueCategory {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RESIDUE_CATEGORIES
            .get(s)
            .or_else(|| RESIDUE_CATEGORIES.get(s.trim()))
            .copied()
            .ok_or_else(|| LabelParseError::ResidueCategory(s.to_string()))
    }
}

impl FromStr for AtomClass {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "C" => Ok(AtomClass::Carbon),
            "C4" => Ok(AtomClass::HydrophobicCarbon),
            "N" => Ok(AtomClass::Nitrogen),
            "O" => Ok(AtomClass::Oxygen),
            "S" => Ok(AtomClass::Sulphur),
            _ => Err(LabelParseError::AtomClass(s.to_string())),
        }
    }
}

impl TryFrom<String> for ResidueLabel {
    type Error = LabelParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for ResidueCategory {
    type Error = LabelParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for AtomClass {
    type Error = LabelParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ResidueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ResidueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for AtomClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
