use serde::Deserialize;
use std::fmt;

/// A `[near, far]` distance window in Angstroms.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Cutoff {
    pub near: f64,
    pub far: f64,
}

impl Cutoff {
    pub const fn new(near: f64, far: f64) -> Self {
        Self { near, far }
    }
}

impl From<[f64; 2]> for Cutoff {
    fn from([near, far]: [f64; 2]) -> Self {
        Self { near, far }
    }
}

/// Parameters of one hydrogen-bond interaction: an energy coefficient and the
/// distance window over which it applies.
///
/// Authored in parameter files as `[coefficient, [near, far]]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "(f64, Cutoff)")]
pub struct HBondRecord {
    pub coefficient: f64,
    pub cutoff: Cutoff,
}

impl HBondRecord {
    /// The record of a pair that does not interact: `[0.0, [0.0, 0.0]]`.
    pub const DEGENERATE: HBondRecord = HBondRecord::new(0.0, 0.0, 0.0);

    pub const fn new(coefficient: f64, near: f64, far: f64) -> Self {
        Self {
            coefficient,
            cutoff: Cutoff::new(near, far),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        *self == Self::DEGENERATE
    }

    pub fn is_finite(&self) -> bool {
        self.coefficient.is_finite() && self.cutoff.near.is_finite() && self.cutoff.far.is_finite()
    }
}

impl From<(f64, Cutoff)> for HBondRecord {
    fn from((coefficient, cutoff): (f64, Cutoff)) -> Self {
        Self {
            coefficient,
            cutoff,
        }
    }
}

impl fmt::Display for HBondRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:5.2}, [{:5.2}, {:5.2}]]",
            self.coefficient, self.cutoff.near, self.cutoff.far
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        record: HBondRecord,
    }

    #[test]
    fn record_deserializes_from_nested_array() {
        let parsed: Wrapper = toml::from_str("record = [-0.80, [2.00, 3.00]]").unwrap();
        assert_eq!(parsed.record, HBondRecord::new(-0.80, 2.00, 3.00));
        assert_eq!(parsed.record.cutoff, Cutoff::new(2.00, 3.00));
    }

    #[test]
    fn record_with_malformed_cutoff_is_rejected() {
        let result = toml::from_str::<Wrapper>("record = [-0.80, [2.00]]");
        assert!(result.is_err());
    }

    #[test]
    fn degenerate_record_is_all_zero() {
        assert!(HBondRecord::DEGENERATE.is_degenerate());
        assert_eq!(HBondRecord::default(), HBondRecord::DEGENERATE);
        assert!(!HBondRecord::new(0.80, 2.0, 3.0).is_degenerate());
    }

    #[test]
    fn is_finite_detects_nan_and_infinite_values() {
        assert!(HBondRecord::new(-1.6, 3.0, 5.0).is_finite());
        assert!(!HBondRecord::new(f64::NAN, 3.0, 5.0).is_finite());
        assert!(!HBondRecord::new(1.0, 3.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn display_formats_like_authored_form() {
        let record = HBondRecord::new(-0.8, 2.0, 3.0);
        assert_eq!(record.to_string(), "[-0.80, [ 2.00,  3.00]]");
    }
}
