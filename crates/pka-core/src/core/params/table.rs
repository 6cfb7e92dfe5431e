use serde::Deserialize;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt::Display;
use thiserror::Error;

/// Model pKa reported for any group without a tabulated value.
pub const NON_IONIZABLE_PKA: f64 = 20.00;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No entry for '{key}' in the {table} table")]
    NotFound { table: &'static str, key: String },

    #[error("Pair {row}/{column} lies in the unpopulated upper triangle of the {table} matrix")]
    UpperTriangle {
        table: &'static str,
        row: String,
        column: String,
    },
}

/// An immutable parameter table keyed by a closed label type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ParamTable<K: Ord, V = f64> {
    entries: BTreeMap<K, V>,
}

/// Result of a lookup that falls back to the whole table when the key is
/// absent or unspecified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a, K: Ord, V> {
    Value(&'a V),
    Table(&'a ParamTable<K, V>),
}

impl<K: Ord + Copy + Display, V> ParamTable<K, V> {
    pub fn new(entries: BTreeMap<K, V>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: K, table: &'static str) -> Result<&V, LookupError> {
        self.entries.get(&key).ok_or_else(|| LookupError::NotFound {
            table,
            key: key.to_string(),
        })
    }

    pub fn lookup_or_all(&self, key: Option<K>) -> Lookup<'_, K, V> {
        match key.and_then(|k| self.entries.get(&k)) {
            Some(value) => Lookup::Value(value),
            None => Lookup::Table(self),
        }
    }

    pub fn contains(&self, key: K) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a ParamTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = btree_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for ParamTable<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A model pKa value. Groups that do not titrate in the relevant pH range are
/// reported as [`ModelPka::NonIonizable`], which is not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelPka {
    Tabulated(f64),
    NonIonizable,
}

impl ModelPka {
    pub fn value(self) -> f64 {
        match self {
            ModelPka::Tabulated(pka) => pka,
            ModelPka::NonIonizable => NON_IONIZABLE_PKA,
        }
    }

    pub fn is_ionizable(self) -> bool {
        matches!(self, ModelPka::Tabulated(_))
    }
}
