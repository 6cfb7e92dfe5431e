//! # Core Models Module
//!
//! Label vocabulary and value types shared by every parameter table.
//!
//! - [`label`] - Residue labels, reduced residue categories and atom classes,
//!   with the mapping from legacy string spellings
//! - [`record`] - Hydrogen-bond interaction records and distance cutoffs

pub mod label;
pub mod record;
