use crate::surface::{RenderError, Surface};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use spincube_common::Color;
use std::fmt;

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCall {
    Clear(Color),
    Line {
        start: DVec2,
        end: DVec2,
        color: Color,
    },
    Present,
}

impl fmt::Display for DrawCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCall::Clear(color) => write!(f, "clear {color}"),
            DrawCall::Line { start, end, color } => write!(
                f,
                "line ({:.3}, {:.3}) -> ({:.3}, {:.3}) {color}",
                start.x, start.y, end.x, end.y
            ),
            DrawCall::Present => write!(f, "present"),
        }
    }
}

/// Headless surface that records every call in order.
///
/// Useful for tests, the CLI, and anything that wants to inspect exactly
/// what would have been drawn.
#[derive(Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
    frames_presented: u64,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
            frames_presented: 0,
        }
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Recorded line segments as `(start, end, color)`, in issue order.
    pub fn lines(&self) -> impl Iterator<Item = (DVec2, DVec2, Color)> + '_ {
        self.calls.iter().filter_map(|call| match *call {
            DrawCall::Line { start, end, color } => Some((start, end, color)),
            _ => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// Number of successful `present` calls since creation.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Drain the recorded calls. The presented-frame counter is kept.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw_line(&mut self, start: DVec2, end: DVec2, color: Color) {
        self.calls.push(DrawCall::Line { start, end, color });
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Present);
        self.frames_presented += 1;
        tracing::trace!(frame = self.frames_presented, "recorded frame");
        Ok(())
    }
}
