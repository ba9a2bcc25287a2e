//! Configuration loading and application.
mod apply;
mod loader;
pub mod types;

#[cfg(test)]
mod tests;

pub use apply::apply_config;
pub use loader::{DEFAULT_CONFIG_FILES, default_config_path, load_config};

#[cfg(test)]
pub(crate) use loader::{ConfigFormat, load_config_file};
