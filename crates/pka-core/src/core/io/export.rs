use crate::core::params::hbond::SideChainMatrix;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct MatrixRow {
    row: &'static str,
    column: &'static str,
    coefficient: f64,
    near: f64,
    far: f64,
}

/// Writes every cell of the side-chain matrix as one CSV record with the
/// header `row,column,coefficient,near,far`.
pub fn write_side_chain_matrix<W: Write>(
    matrix: &SideChainMatrix,
    writer: W,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for (row, column, record) in matrix.iter() {
        writer.serialize(MatrixRow {
            row: row.label(),
            column: column.label(),
            coefficient: record.coefficient,
            near: record.cutoff.near,
            far: record.cutoff.far,
        })?;
    }
    writer.flush()?;
    Ok(())
}
