//! Rendering Adapter: renderer-agnostic drawing surface.
//!
//! # Invariants
//! - Surfaces never mutate the scene; they only receive draw calls.
//! - Draw calls are applied in the order they are issued.
//!
//! `RecordingSurface` is the headless implementation used by tests and the
//! CLI. The wgpu backend lives in `spincube-render-wgpu` behind the same trait.

mod recording;
mod surface;

pub use recording::{DrawCall, RecordingSurface};
pub use surface::{RenderError, Surface};

pub fn crate_info() -> &'static str {
    "spincube-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
