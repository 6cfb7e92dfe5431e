use crate::cli::{HbondArgs, PairArgs};
use crate::error::{CliError, Result};
use crate::utils::format::{interaction_grid, key_value_lines, side_chain_grid};
use pkastore::ParameterStore;
use pkastore::core::models::label::ResidueCategory;
use pkastore::core::params::hbond::HydrogenBondParameters;
use std::io::Write;
use tracing::debug;

fn parse_pair(args: &PairArgs) -> Result<(Option<ResidueCategory>, Option<ResidueCategory>)> {
    let first: Option<ResidueCategory> = args.first.as_deref().map(str::parse).transpose()?;
    let second: Option<ResidueCategory> = args.second.as_deref().map(str::parse).transpose()?;
    Ok((first, second))
}

pub fn hbond(store: &ParameterStore, args: &HbondArgs, out: &mut impl Write) -> Result<()> {
    let params = store.hydrogen_bond_parameters_for(&args.context)?;
    let pair = parse_pair(&args.pair)?;
    debug!("Hydrogen-bond query in '{}' context: {:?}", args.context, pair);

    match (params, pair) {
        (HydrogenBondParameters::BackBone(_), (_, Some(_))) => {
            return Err(CliError::Argument(
                "back-bone parameters are indexed by a single category".to_string(),
            ));
        }
        (HydrogenBondParameters::BackBone(table), (Some(category), None)) => {
            let record = table.get(category, "back-bone hydrogen-bond")?;
            writeln!(out, "{record}")?;
        }
        (HydrogenBondParameters::BackBone(table), (None, None)) => {
            write!(out, "{}", key_value_lines(table))?;
        }
        (HydrogenBondParameters::SideChain(matrix), (Some(a), Some(b))) => {
            writeln!(out, "{}", matrix.get(a, b)?)?;
        }
        (HydrogenBondParameters::SideChain(matrix), (Some(a), None)) => {
            write!(out, "{}", key_value_lines(matrix.row(a)?))?;
        }
        (HydrogenBondParameters::SideChain(matrix), (None, _)) => {
            write!(out, "{}", side_chain_grid(matrix))?;
        }
    }
    Ok(())
}

pub fn interaction(store: &ParameterStore, args: &PairArgs, out: &mut impl Write) -> Result<()> {
    match parse_pair(args)? {
        (Some(a), Some(b)) => writeln!(out, "{}", store.interaction(a, b)?)?,
        (Some(a), None) => {
            let classes = ResidueCategory::ALL
                .into_iter()
                .map(|b| store.interaction(a, b).map(|class| (b, class)))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            write!(out, "{}", key_value_lines(classes))?;
        }
        (None, _) => write!(out, "{}", interaction_grid(store.interaction_matrix()))?,
    }
    Ok(())
}
