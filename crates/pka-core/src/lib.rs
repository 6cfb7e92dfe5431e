//! # pkastore
//!
//! Parameter store for empirical protein pKa prediction.
//!
//! The library owns the domain constants an empirical pKa model reads while it
//! evaluates its energy terms: residue typing, formal charges, model pKa
//! values, Coulomb and desolvation model coefficients, van der Waals volumes,
//! the iterative/non-iterative interaction classifier and the hydrogen-bond
//! interaction matrices. It performs no energy evaluation itself.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Closed label enumerations, immutable
//!   parameter tables and the completion of the side-chain hydrogen-bond
//!   matrix from its authored upper-row form.
//!
//! - **[`store`]: The Public API.** [`ParameterStore`] is an immutable snapshot
//!   built from a TOML parameter set (the embedded default or a user file) and
//!   answers every lookup.
//!
//! ```
//! use pkastore::core::models::label::{ResidueCategory, ResidueLabel};
//!
//! let store = pkastore::default_store();
//! assert_eq!(store.charge(ResidueLabel::Histidine).unwrap(), 1.0);
//! assert_eq!(store.model_pka_by_name("ASN").value(), 20.00);
//!
//! let record = store
//!     .side_chain_record(ResidueCategory::Tyrosine, ResidueCategory::Histidine)
//!     .unwrap();
//! assert_eq!(record.coefficient, -0.80);
//! ```

pub mod core;
pub mod store;

pub use store::ParameterStore;

use std::sync::OnceLock;

/// The default parameter set, in the layout accepted by
/// [`ParameterStore::from_toml_str`].
pub const BUILTIN_PARAMETERS: &str = include_str!("../resources/propka.params.toml");

static DEFAULT_STORE: OnceLock<ParameterStore> = OnceLock::new();

/// Returns the store built from [`BUILTIN_PARAMETERS`], constructing it on
/// first access.
pub fn default_store() -> &'static ParameterStore {
    DEFAULT_STORE.get_or_init(|| {
        ParameterStore::builtin()
            .expect("Failed to build the embedded default parameters. This is a library bug.")
    })
}
