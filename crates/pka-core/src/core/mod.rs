//! # Core Module
//!
//! Stateless building blocks of the parameter store.
//!
//! - **Label Vocabulary** ([`models`]) - Closed enumerations for residue labels,
//!   residue categories and atom classes, plus interaction records
//! - **Parameter Tables** ([`params`]) - Scalar tables, model descriptors, the
//!   interaction classifier and hydrogen-bond matrix completion
//! - **Export** ([`io`]) - CSV output of the completed side-chain matrix

pub mod io;
pub mod models;
pub mod params;
