//! wgpu drawing surface for the spinning cube.
//!
//! Lines arrive in pixel space, are batched on the CPU for the frame, and are
//! drawn as a single line list when the frame is presented.
//!
//! # Invariants
//! - Pixel coordinates map onto the fixed display resolution, not the
//!   physical window size.
//! - No depth buffer: later lines overdraw earlier ones.

mod batch;
mod gpu;
mod shaders;
mod surface;

pub use batch::{LineBatch, LineVertex, pixel_to_ndc};
pub use gpu::LineRenderer;
pub use surface::{GpuError, WgpuSurface};
