//! Scenario configuration

pub mod loader;

pub use loader::{
    load_scenario, parse_line_scenario, parse_toml_scenario, ConfigError, ScenarioFile,
};
