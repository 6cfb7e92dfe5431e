use crate::cli::KeyArgs;
use crate::error::Result;
use crate::utils::format::key_value_lines;
use pkastore::ParameterStore;
use pkastore::core::models::label::{AtomClass, ResidueCategory, ResidueLabel};
use pkastore::core::params::table::{Lookup, ModelPka, ParamTable};
use std::fmt::Display;
use std::io::Write;
use tracing::{debug, warn};

pub fn category(store: &ParameterStore, args: &KeyArgs, out: &mut impl Write) -> Result<()> {
    match &args.key {
        Some(name) => {
            let category = store.residue_category(name)?;
            debug!("Residue '{}' reduces to category '{}'.", name, category);
            writeln!(out, "{category}")?;
        }
        None => {
            for category in ResidueCategory::ALL {
                let members: Vec<&str> = store
                    .members(category)
                    .into_iter()
                    .map(ResidueLabel::label)
                    .collect();
                writeln!(out, "{:<4}: {}", category.label(), members.join(", "))?;
            }
        }
    }
    Ok(())
}

pub fn charge(store: &ParameterStore, args: &KeyArgs, out: &mut impl Write) -> Result<()> {
    let label = parse_key::<ResidueLabel>(args)?;
    print_lookup(store.charges(), label, "charge", out)
}

pub fn radius(store: &ParameterStore, args: &KeyArgs, out: &mut impl Write) -> Result<()> {
    let label = parse_key::<ResidueLabel>(args)?;
    print_lookup(store.local_radii(), label, "local radius", out)
}

pub fn volume(store: &ParameterStore, args: &KeyArgs, out: &mut impl Write) -> Result<()> {
    let class = parse_key::<AtomClass>(args)?;
    print_lookup(store.vdw_volumes(), class, "van der Waals volume", out)
}

/// Unlike the other tables, any name is accepted here: groups without a
/// tabulated value are non-ionizable.
pub fn pka(store: &ParameterStore, args: &KeyArgs, out: &mut impl Write) -> Result<()> {
    match &args.key {
        Some(name) => match store.model_pka_by_name(name) {
            ModelPka::Tabulated(pka) => writeln!(out, "{pka:.2}")?,
            ModelPka::NonIonizable => {
                writeln!(out, "{:.2} (non-ionizable)", ModelPka::NonIonizable.value())?
            }
        },
        None => write!(
            out,
            "{}",
            key_value_lines(store.model_pkas().iter().map(|(k, v)| (k, format!("{v:.2}"))))
        )?,
    }
    Ok(())
}

fn parse_key<K>(args: &KeyArgs) -> Result<Option<K>>
where
    K: std::str::FromStr,
    crate::error::CliError: From<K::Err>,
{
    Ok(args.key.as_deref().map(str::parse).transpose()?)
}

/// Prints the value for `key`, or the whole table when no key is given. A
/// known label that has no entry falls back to the whole table with a warning.
fn print_lookup<K, V>(
    table: &ParamTable<K, V>,
    key: Option<K>,
    what: &str,
    out: &mut impl Write,
) -> Result<()>
where
    K: Ord + Copy + Display,
    V: Display,
{
    match table.lookup_or_all(key) {
        Lookup::Value(value) => writeln!(out, "{value}")?,
        Lookup::Table(table) => {
            if let Some(key) = key {
                warn!("No {} listed for '{}'; showing the whole table.", what, key);
            }
            write!(out, "{}", key_value_lines(table))?;
        }
    }
    Ok(())
}
