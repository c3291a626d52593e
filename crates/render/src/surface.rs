use glam::DVec2;
use spincube_common::Color;

/// Errors a surface can report when presenting a frame.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// A 2D drawing target with a fixed pixel resolution.
///
/// Coordinates are in pixels with the origin at the top-left corner and y
/// growing downwards. Points outside the surface are passed through as-is;
/// clipping is up to the implementation.
pub trait Surface {
    /// Resolution in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Fill the whole surface with a solid color, discarding pending lines.
    fn clear(&mut self, color: Color);

    /// Draw a straight segment between two points.
    fn draw_line(&mut self, start: DVec2, end: DVec2, color: Color);

    /// Make everything drawn since the last `clear` visible.
    fn present(&mut self) -> Result<(), RenderError>;
}
