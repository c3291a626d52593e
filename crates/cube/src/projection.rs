//! Drop-Z projection from world space to surface pixels.

use glam::{DVec2, DVec3};

/// Map a world-space point onto the surface by discarding its Z coordinate.
pub fn drop_z(point: DVec3) -> DVec2 {
    point.truncate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_x_and_y_exactly() {
        let p = DVec3::new(-1.25, 400.5, 9999.0);
        assert_eq!(drop_z(p), DVec2::new(-1.25, 400.5));
    }

    #[test]
    fn depth_does_not_affect_result() {
        let near = DVec3::new(3.0, 4.0, -100.0);
        let far = DVec3::new(3.0, 4.0, 100.0);
        assert_eq!(drop_z(near), drop_z(far));
    }
}
