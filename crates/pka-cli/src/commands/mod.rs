pub mod export;
pub mod hbond;
pub mod lookup;
pub mod models;
