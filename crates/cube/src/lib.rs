//! Cube: a wireframe box spinning about its own center.
//!
//! # Invariants
//! - The edge topology is fixed at construction: 12 edges over 8 corners.
//! - The rotation angle is the only mutable state; it advances once per draw.
//! - One shared angle drives the X, Y and Z rotations.

mod cube;
mod frame;
pub mod projection;
pub mod rotation;

pub use cube::{Cube, EDGE_COUNT, Edge, Segment};
pub use frame::{cube_from_config, render_frame};

pub fn crate_info() -> &'static str {
    "spincube-cube v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("cube"));
    }
}
