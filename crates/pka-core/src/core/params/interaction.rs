use super::table::LookupError;
use crate::core::models::label::ResidueCategory;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

const TABLE: &str = "interaction";

/// How the titration solver treats the coupling between two groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum InteractionClass {
    /// Coupled; must be solved self-consistently.
    #[serde(rename = "I")]
    Iterative,
    /// Applied once as a fixed perturbation.
    #[serde(rename = "N")]
    NonIterative,
    /// The groups cannot interact.
    #[serde(rename = "-")]
    NoInteraction,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InteractionShapeError {
    #[error("Interaction row '{row}' has {found} entries, expected {expected}")]
    RowLength {
        row: ResidueCategory,
        expected: usize,
        found: usize,
    },
}

/// Lower-triangular classification of pairwise interactions.
///
/// Rows exist for every category; columns only for the titratable ones. Row
/// `r` of a titratable category holds the cells for columns `0..=r`, the rows
/// of non-titratable categories hold one cell per titratable column.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionMatrix {
    rows: BTreeMap<ResidueCategory, Vec<InteractionClass>>,
}

impl InteractionMatrix {
    pub fn new(
        rows: BTreeMap<ResidueCategory, Vec<InteractionClass>>,
    ) -> Result<Self, InteractionShapeError> {
        for (&row, cells) in &rows {
            let expected = Self::row_len(row);
            if cells.len() != expected {
                return Err(InteractionShapeError::RowLength {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    fn row_len(row: ResidueCategory) -> usize {
        if row.is_titratable() {
            row.index() + 1
        } else {
            ResidueCategory::TITRATABLE_COUNT
        }
    }

    /// Classifies the interaction between two categories in either order.
    ///
    /// Pairs of two non-titratable categories never interact.
    pub fn classify(
        &self,
        a: ResidueCategory,
        b: ResidueCategory,
    ) -> Result<InteractionClass, LookupError> {
        let (row, column) = if a >= b { (a, b) } else { (b, a) };
        if !column.is_titratable() {
            return Ok(InteractionClass::NoInteraction);
        }
        self.cell(row, column)
    }

    /// Returns the authored cell at `(row, column)`. The row must not precede
    /// the column in canonical order.
    pub fn cell(
        &self,
        row: ResidueCategory,
        column: ResidueCategory,
    ) -> Result<InteractionClass, LookupError> {
        if row < column {
            return Err(LookupError::UpperTriangle {
                table: TABLE,
                row: row.to_string(),
                column: column.to_string(),
            });
        }
        self.rows
            .get(&row)
            .and_then(|cells| cells.get(column.index()))
            .copied()
            .ok_or_else(|| LookupError::NotFound {
                table: TABLE,
                key: format!("{row}/{column}"),
            })
    }

    pub fn rows(&self) -> impl Iterator<Item = (ResidueCategory, &[InteractionClass])> {
        self.rows.iter().map(|(&row, cells)| (row, cells.as_slice()))
    }
}

impl InteractionClass {
    pub fn symbol(self) -> &'static str {
        match self {
            InteractionClass::Iterative => "I",
            InteractionClass::NonIterative => "N",
            InteractionClass::NoInteraction => "-",
        }
    }
}

impl fmt::Display for InteractionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InteractionClass::Iterative => "iterative",
            InteractionClass::NonIterative => "non-iterative",
            InteractionClass::NoInteraction => "no interaction",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::InteractionClass::{Iterative as I, NonIterative as N};
    use crate::core::models::label::ResidueCategory::*;

    fn sample() -> InteractionMatrix {
        let rows: BTreeMap<ResidueCategory, Vec<InteractionClass>> = toml::from_str(
            r#"
            COO = ["I"]
            CYS = ["I", "I"]
            TYR = ["N", "N", "I"]
            HIS = ["I", "I", "I", "I"]
            "N+" = ["N", "N", "I", "N", "I"]
            LYS = ["N", "N", "I", "N", "N", "I"]
            ARG = ["N", "N", "N", "N", "N", "N", "I"]
            ROH = ["N", "N", "N", "-", "-", "-", "-"]
            AMD = ["N", "N", "N", "N", "-", "-", "-"]
            TRP = ["N", "N", "N", "-", "-", "-", "-"]
            "#,
        )
        .unwrap();
        InteractionMatrix::new(rows).unwrap()
    }

    #[test]
    fn classify_is_independent_of_argument_order() {
        let matrix = sample();
        for a in ResidueCategory::ALL {
            for b in ResidueCategory::ALL {
                assert_eq!(matrix.classify(a, b), matrix.classify(b, a));
            }
        }
    }

    #[test]
    fn classify_reads_lower_triangle() {
        let matrix = sample();
        assert_eq!(matrix.classify(Carboxyl, Carboxyl), Ok(I));
        assert_eq!(matrix.classify(Tyrosine, NTerminus), Ok(I));
        assert_eq!(matrix.classify(Carboxyl, Tyrosine), Ok(N));
        assert_eq!(matrix.classify(Histidine, Cysteine), Ok(I));
        assert_eq!(matrix.classify(Amide, Histidine), Ok(N));
        assert_eq!(matrix.classify(Hydroxyl, Histidine), Ok(InteractionClass::NoInteraction));
    }

    #[test]
    fn non_titratable_pairs_do_not_interact() {
        let matrix = sample();
        assert_eq!(matrix.classify(Hydroxyl, Amide), Ok(InteractionClass::NoInteraction));
        assert_eq!(
            matrix.classify(Tryptophan, Tryptophan),
            Ok(InteractionClass::NoInteraction)
        );
    }

    #[test]
    fn cell_rejects_upper_triangle() {
        let matrix = sample();
        assert!(matches!(
            matrix.cell(Carboxyl, Cysteine),
            Err(LookupError::UpperTriangle { .. })
        ));
        assert_eq!(matrix.cell(Cysteine, Carboxyl), Ok(I));
    }

    #[test]
    fn new_rejects_rows_of_wrong_length() {
        let mut rows = BTreeMap::new();
        rows.insert(Tyrosine, vec![N, N]);
        assert_eq!(
            InteractionMatrix::new(rows),
            Err(InteractionShapeError::RowLength {
                row: Tyrosine,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn missing_row_is_reported_as_not_found() {
        let mut rows = BTreeMap::new();
        rows.insert(Carboxyl, vec![I]);
        let matrix = InteractionMatrix::new(rows).unwrap();
        assert!(matches!(
            matrix.classify(Lysine, Carboxyl),
            Err(LookupError::NotFound { .. })
        ));
    }

    #[test]
    fn unknown_symbol_fails_to_deserialize() {
        let result = toml::from_str::<BTreeMap<ResidueCategory, Vec<InteractionClass>>>(
            "COO = [\"X\"]",
        );
        assert!(result.is_err());
    }
}
