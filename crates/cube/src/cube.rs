use crate::projection::drop_z;
use crate::rotation::compound_rotation;
use glam::{DVec2, DVec3};
use spincube_common::Color;
use spincube_render::Surface;
use std::f64::consts::FRAC_PI_4;

/// Number of edges in a cube wireframe.
pub const EDGE_COUNT: usize = 12;

/// A wireframe segment in 3D: `[start, end]`.
pub type Edge = [DVec3; 2];

/// A projected segment on the surface: `[start, end]`.
pub type Segment = [DVec2; 2];

/// A wireframe cube spinning about its own center.
///
/// Edges are stored in the local frame, with one corner at the origin and
/// coordinates in `[0, side]`. Each draw re-centers them, rotates them by the
/// current angle, moves them to `position`, drops Z and draws the result.
#[derive(Debug, Clone)]
pub struct Cube {
    position: DVec3,
    angle: f64,
    half_extent_offset: DVec3,
    edges: [Edge; EDGE_COUNT],
    color: Color,
}

impl Cube {
    /// Create a cube centered at `position`, starting at 45 degrees.
    ///
    /// `side` is not validated: zero gives a degenerate cube and a negative
    /// value an inverted one.
    pub fn new(position: DVec3, side: f64) -> Self {
        Self::with_angle(position, side, FRAC_PI_4)
    }

    /// Create a cube with an explicit starting angle in radians.
    pub fn with_angle(position: DVec3, side: f64, angle: f64) -> Self {
        tracing::debug!(?position, side, angle, "cube constructed");
        Self {
            position,
            angle,
            half_extent_offset: DVec3::splat(-side / 2.0),
            edges: local_edges(side),
            color: Color::WHITE,
        }
    }

    /// Line color used by [`Cube::draw`].
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Current rotation angle in radians, shared by all three axes.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn half_extent_offset(&self) -> DVec3 {
        self.half_extent_offset
    }

    /// The fixed edges in the local frame.
    pub fn edges(&self) -> &[Edge; EDGE_COUNT] {
        &self.edges
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Edges shifted so the cube's center sits at the local origin.
    pub fn recentered_edges(&self) -> [Edge; EDGE_COUNT] {
        let offset = self.half_extent_offset;
        self.edges.map(|edge| edge.map(|p| p + offset))
    }

    /// Edges after re-centering, rotation by the current angle and
    /// translation to `position`.
    pub fn world_edges(&self) -> [Edge; EDGE_COUNT] {
        let rotation = compound_rotation(self.angle);
        let position = self.position;
        self.recentered_edges()
            .map(|edge| edge.map(|p| position + rotation * p))
    }

    /// World edges projected onto the surface, in draw order.
    pub fn screen_segments(&self) -> [Segment; EDGE_COUNT] {
        self.world_edges().map(|edge| edge.map(drop_z))
    }

    /// Draw the cube at its current angle, then advance the angle by
    /// `rotation_rate`.
    ///
    /// Edges are drawn in array order with no depth test or clipping.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S, rotation_rate: f64) {
        for [start, end] in self.screen_segments() {
            surface.draw_line(start, end, self.color);
        }
        self.angle += rotation_rate;
        tracing::trace!(angle = self.angle, "cube drawn");
    }
}

/// The 12 edges of an axis-aligned box of size `a` with a corner at the
/// origin: front face loop, four verticals, top face loop.
fn local_edges(a: f64) -> [Edge; EDGE_COUNT] {
    let p = |x: f64, y: f64, z: f64| DVec3::new(x, y, z);
    [
        // front face, z = 0
        [p(0.0, 0.0, 0.0), p(a, 0.0, 0.0)],
        [p(a, 0.0, 0.0), p(a, a, 0.0)],
        [p(a, a, 0.0), p(0.0, a, 0.0)],
        [p(0.0, a, 0.0), p(0.0, 0.0, 0.0)],
        // verticals
        [p(0.0, 0.0, 0.0), p(0.0, 0.0, a)],
        [p(a, a, 0.0), p(a, a, a)],
        [p(a, 0.0, 0.0), p(a, 0.0, a)],
        [p(0.0, a, 0.0), p(0.0, a, a)],
        // top face, z = a
        [p(0.0, 0.0, a), p(a, 0.0, a)],
        [p(a, 0.0, a), p(a, a, a)],
        [p(a, a, a), p(0.0, a, a)],
        [p(0.0, a, a), p(0.0, 0.0, a)],
    ]
}
