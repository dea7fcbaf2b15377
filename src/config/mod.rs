//! Driver configuration: defaults, optional TOML file, environment overrides

pub mod loader;
pub mod types;

pub use loader::load_config;
pub use types::{AdjustmentConfig, AppConfig, AppSettings, TripConfig};
