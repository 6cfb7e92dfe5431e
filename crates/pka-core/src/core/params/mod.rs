//! # Parameters Module
//!
//! Parameter tables for empirical pKa prediction and the derivation of the
//! hydrogen-bond interaction matrices.
//!
//! ## Key Components
//!
//! - [`table`] - Immutable label-keyed tables and lookup results
//! - [`models`] - Coulomb and desolvation model descriptors
//! - [`interaction`] - Iterative / non-iterative interaction classifier
//! - [`hbond`] - Back-bone and side-chain hydrogen-bond parameters, including
//!   completion of the authored side-chain matrix
//! - [`file`] - TOML layout of a parameter set and its load errors

pub mod file;
pub mod hbond;
pub mod interaction;
pub mod models;
pub mod table;
