use bytemuck::{Pod, Zeroable};
use glam::DVec2;
use spincube_common::Color;

/// One endpoint of a line, in clip space.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Convert a pixel coordinate (origin top-left, y down) to normalized device
/// coordinates (origin center, y up).
pub fn pixel_to_ndc(p: DVec2, width: u32, height: u32) -> [f32; 2] {
    let w = width.max(1) as f64;
    let h = height.max(1) as f64;
    [(p.x / w * 2.0 - 1.0) as f32, (1.0 - p.y / h * 2.0) as f32]
}

/// Line vertices collected for the current frame.
#[derive(Debug, Clone)]
pub struct LineBatch {
    width: u32,
    height: u32,
    vertices: Vec<LineVertex>,
}

impl LineBatch {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            vertices: Vec::new(),
        }
    }

    pub fn push(&mut self, start: DVec2, end: DVec2, color: Color) {
        let color = color.to_rgba_f32();
        for p in [start, end] {
            self.vertices.push(LineVertex {
                position: pixel_to_ndc(p, self.width, self.height),
                color,
            });
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_center_map_to_clip_space() {
        assert_eq!(pixel_to_ndc(DVec2::new(0.0, 0.0), 800, 800), [-1.0, 1.0]);
        assert_eq!(pixel_to_ndc(DVec2::new(800.0, 800.0), 800, 800), [1.0, -1.0]);
        assert_eq!(pixel_to_ndc(DVec2::new(400.0, 400.0), 800, 800), [0.0, 0.0]);
    }

    #[test]
    fn non_square_display() {
        assert_eq!(pixel_to_ndc(DVec2::new(160.0, 60.0), 320, 240), [0.0, 0.5]);
    }

    #[test]
    fn offscreen_points_pass_through() {
        let [x, y] = pixel_to_ndc(DVec2::new(-800.0, 1600.0), 800, 800);
        assert_eq!(x, -3.0);
        assert_eq!(y, -3.0);
    }

    #[test]
    fn zero_size_does_not_divide_by_zero() {
        let [x, y] = pixel_to_ndc(DVec2::new(1.0, 1.0), 0, 0);
        assert!(x.is_finite() && y.is_finite());
    }

    #[test]
    fn push_adds_two_vertices_per_line() {
        let mut batch = LineBatch::new(800, 800);
        batch.push(DVec2::ZERO, DVec2::new(400.0, 400.0), Color::WHITE);
        batch.push(DVec2::ZERO, DVec2::new(800.0, 0.0), Color::BLACK);

        assert_eq!(batch.line_count(), 2);
        assert_eq!(batch.vertices().len(), 4);
        assert_eq!(batch.vertices()[1].position, [0.0, 0.0]);
        assert_eq!(batch.vertices()[1].color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(batch.vertices()[3].color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn clear_empties_batch() {
        let mut batch = LineBatch::new(800, 800);
        batch.push(DVec2::ZERO, DVec2::ONE, Color::WHITE);
        batch.clear();
        assert!(batch.vertices().is_empty());
        assert_eq!(batch.size(), (800, 800));
    }

    #[test]
    fn vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 24);
    }
}
