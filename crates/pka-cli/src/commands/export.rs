use crate::cli::ExportArgs;
use crate::error::Result;
use pkastore::ParameterStore;
use pkastore::core::io::export::write_side_chain_matrix;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::info;

pub fn run(store: &ParameterStore, args: &ExportArgs, stdout: impl Write) -> Result<()> {
    let matrix = store.side_chain_matrix();
    match &args.output {
        Some(path) => {
            let file = BufWriter::new(File::create(path)?);
            write_side_chain_matrix(matrix, file)?;
            info!("Wrote side-chain hydrogen-bond matrix to '{}'.", path.display());
        }
        None => write_side_chain_matrix(matrix, stdout)?,
    }
    Ok(())
}
