//! Axis rotations driven by a single shared angle.
//!
//! Points are rotated as row vectors multiplied on the right, first by the X
//! matrix, then Y, then Z: `p' = p * Rx * Ry * Rz`. In glam's column-vector
//! form that is `(Rx * Ry * Rz)^T * p`.

use glam::{DMat3, DVec3};

/// Standard right-handed rotation about the X axis.
pub fn rotation_x(angle: f64) -> DMat3 {
    DMat3::from_rotation_x(angle)
}

/// Standard right-handed rotation about the Y axis.
pub fn rotation_y(angle: f64) -> DMat3 {
    DMat3::from_rotation_y(angle)
}

/// Standard right-handed rotation about the Z axis.
pub fn rotation_z(angle: f64) -> DMat3 {
    DMat3::from_rotation_z(angle)
}

/// The X, Y, Z chain for one angle, as a matrix applied to column vectors.
pub fn compound_rotation(angle: f64) -> DMat3 {
    (rotation_x(angle) * rotation_y(angle) * rotation_z(angle)).transpose()
}

/// Rotate a point about the origin by the compound rotation.
pub fn rotate(point: DVec3, angle: f64) -> DVec3 {
    compound_rotation(angle) * point
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

    const EPS: f64 = 1e-9;

    fn sample_points() -> Vec<DVec3> {
        vec![
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(-100.0, 100.0, -100.0),
            DVec3::new(3.5, -7.25, 12.0),
        ]
    }

    #[test]
    fn matrices_have_textbook_form() {
        let a = 0.3_f64;
        let (s, c) = a.sin_cos();

        // Column-major: each inner triple is one column.
        let rx = DMat3::from_cols_array(&[1.0, 0.0, 0.0, 0.0, c, s, 0.0, -s, c]);
        let ry = DMat3::from_cols_array(&[c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c]);
        let rz = DMat3::from_cols_array(&[c, s, 0.0, -s, c, 0.0, 0.0, 0.0, 1.0]);

        assert!(rotation_x(a).abs_diff_eq(rx, EPS));
        assert!(rotation_y(a).abs_diff_eq(ry, EPS));
        assert!(rotation_z(a).abs_diff_eq(rz, EPS));
    }

    #[test]
    fn zero_angle_is_identity() {
        for p in sample_points() {
            assert!(rotate(p, 0.0).abs_diff_eq(p, EPS), "{p} moved");
        }
    }

    #[test]
    fn full_turn_is_periodic() {
        for angle in [0.0, FRAC_PI_4, 1.0, 2.5, -3.0, 100.0] {
            for p in sample_points() {
                let a = rotate(p, angle);
                let b = rotate(p, angle + TAU);
                assert!(a.abs_diff_eq(b, 1e-9 * p.length().max(1.0)));
            }
        }
    }

    #[test]
    fn preserves_distance_from_origin() {
        for angle in [0.1, FRAC_PI_4, 2.0, 5.0] {
            for p in sample_points() {
                let r = rotate(p, angle);
                assert!((r.length() - p.length()).abs() < 1e-9 * p.length().max(1.0));
            }
        }
    }

    #[test]
    fn applies_row_vector_chain() {
        // (1,0,0) * Rx = (1,0,0); * Ry(90°) = (0,0,1); * Rz(90°) = (0,0,1).
        let r = rotate(DVec3::X, FRAC_PI_2);
        assert!(r.abs_diff_eq(DVec3::Z, EPS), "got {r}");
    }

    #[test]
    fn compound_is_orthonormal() {
        let m = compound_rotation(0.77);
        assert!((m * m.transpose()).abs_diff_eq(DMat3::IDENTITY, EPS));
        assert!((m.determinant() - 1.0).abs() < EPS);
    }
}
