//! Export of completed parameter matrices for inspection by external tools.

pub mod export;
