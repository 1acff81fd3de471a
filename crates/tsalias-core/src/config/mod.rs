//! Configuration system for tsalias.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod compile_config;
pub mod paths_config;
pub mod rewrite_config;
pub mod tsalias_config;

pub use compile_config::CompileConfig;
pub use paths_config::PathsConfig;
pub use rewrite_config::RewriteConfig;
pub use tsalias_config::{CliOverrides, TsaliasConfig};
