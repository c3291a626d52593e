//! Shared value types: colors and the immutable application config.
//!
//! # Invariants
//! - `AppConfig` is built once at startup and never mutated afterwards.

mod config;
mod types;

pub use config::{AppConfig, CubeConfig, DisplayConfig};
pub use types::Color;

pub fn crate_info() -> &'static str {
    "spincube-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
