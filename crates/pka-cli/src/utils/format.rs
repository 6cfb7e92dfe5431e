use pkastore::core::models::label::ResidueCategory;
use pkastore::core::params::hbond::SideChainMatrix;
use pkastore::core::params::interaction::InteractionMatrix;
use pkastore::core::params::models::{CoulombParameters, DesolvationParameters};
use std::fmt::Display;

/// Formats `key: value` lines with the keys padded to a common width.
pub fn key_value_lines<K, V, I>(entries: I) -> String
where
    K: Display,
    V: Display,
    I: IntoIterator<Item = (K, V)>,
{
    let entries: Vec<(String, String)> = entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    entries
        .iter()
        .map(|(k, v)| format!("{k:<width$} : {v}\n"))
        .collect()
}

pub fn coulomb_parameters(params: &CoulombParameters) -> String {
    let cutoff = params.cutoff();
    let mut fields = vec![format!("cutoff = [{:.2}, {:.2}]", cutoff.near, cutoff.far)];
    if let Some(max_dpka) = params.max_dpka() {
        fields.push(format!("max-dpka = {max_dpka:.2}"));
    }
    if let Some(dielectric) = params.dielectric() {
        fields.push(format!("dielectric = {dielectric:.2}"));
    }
    fields.push(format!("scaled = {}", params.scaled()));
    fields.join(", ")
}

pub fn desolvation_parameters(params: &DesolvationParameters) -> String {
    match params {
        DesolvationParameters::Contact {
            allowance,
            prefactor,
            local,
            radii,
        } => format!(
            "contact: allowance = {allowance:.2}, prefactor = {prefactor:.2}, local = {local:.2} ({} local radii)",
            radii.len()
        ),
        DesolvationParameters::Volume {
            allowance,
            prefactor,
            surface,
            volumes,
        } => format!(
            "volume: allowance = {allowance:.2}, prefactor = {prefactor:.2}, surface = {surface:.2} ({} atom volumes)",
            volumes.len()
        ),
    }
}

/// Lays out the completed side-chain matrix as a grid of coefficients, rows
/// and columns in canonical category order. Non-interacting pairs show `.`.
pub fn side_chain_grid(matrix: &SideChainMatrix) -> String {
    let categories = matrix.categories();
    let mut out = format!("{:>5}", "");
    for column in categories {
        out.push_str(&format!(" {:>6}", column.label()));
    }
    out.push('\n');
    for &row in categories {
        out.push_str(&format!("{:>5}", row.label()));
        for &column in categories {
            match matrix.get(row, column) {
                Ok(record) if record.is_degenerate() => out.push_str(&format!(" {:>6}", ".")),
                Ok(record) => out.push_str(&format!(" {:>6.2}", record.coefficient)),
                Err(_) => out.push_str(&format!(" {:>6}", "-")),
            }
        }
        out.push('\n');
    }
    out
}

/// Lays out the lower-triangle interaction classifier with its authored
/// symbols (`I`, `N`, `-`).
pub fn interaction_grid(matrix: &InteractionMatrix) -> String {
    let columns = &ResidueCategory::ALL[..ResidueCategory::TITRATABLE_COUNT];
    let mut out = format!("{:>5}", "");
    for column in columns {
        out.push_str(&format!(" {:>4}", column.label()));
    }
    out.push('\n');
    for (row, cells) in matrix.rows() {
        out.push_str(&format!("{:>5}", row.label()));
        for cell in cells {
            out.push_str(&format!(" {:>4}", cell.symbol()));
        }
        out.push('\n');
    }
    out
}
