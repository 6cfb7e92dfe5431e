mod builder;
mod defaults;
mod models;

pub use builder::build_config;
pub use models::{AppConfig, ParamsSource};
