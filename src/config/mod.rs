//! Configuration loaded from `config.toml`.
//!
//! Every key has a default, so a missing file or a partial file is fine.
//! Command-line flags override individual values after loading.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ClientConfig, Config, PlaybackConfig, ServerConfig, StorageConfig};
