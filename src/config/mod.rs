//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/briefweave/config.toml)
//! 3. Project config (.briefweave/config.toml)
//! 4. Explicit `--config` file
//! 5. Environment variables (BRIEFWEAVE_*)

mod loader;
mod types;

pub use loader::{ConfigLoader, ENV_PREFIX};
pub use types::*;
