use crate::cli::KeyArgs;
use crate::error::Result;
use crate::utils::format::{coulomb_parameters, desolvation_parameters};
use pkastore::ParameterStore;
use pkastore::core::params::models::{CoulombModel, DesolvationModel};
use std::io::Write;

pub fn coulomb(store: &ParameterStore, args: &KeyArgs, out: &mut impl Write) -> Result<()> {
    match &args.key {
        Some(name) => {
            let model: CoulombModel = name.parse()?;
            writeln!(out, "{}", coulomb_parameters(store.coulomb(model)?))?;
        }
        None => {
            for (model, params) in store.coulomb_models() {
                writeln!(out, "{:<8} {}", model.name(), coulomb_parameters(params))?;
            }
        }
    }
    Ok(())
}

pub fn desolvation(store: &ParameterStore, args: &KeyArgs, out: &mut impl Write) -> Result<()> {
    match &args.key {
        Some(name) => {
            let model: DesolvationModel = name.parse()?;
            writeln!(out, "{}", desolvation_parameters(store.desolvation(model)?))?;
        }
        None => {
            for (model, params) in store.desolvation_models() {
                writeln!(out, "{:<18} {}", model.name(), desolvation_parameters(params))?;
            }
        }
    }
    Ok(())
}
