//! Alias configuration: JSONC reading, normalization, the resulting mapping.

pub mod jsonc;
mod loader;
mod types;

pub use loader::AliasConfigLoader;
pub use types::AliasMapping;
