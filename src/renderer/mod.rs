//! WebGPU rectangle renderer
//!
//! Consumes per-frame rectangle descriptors and rasterizes them into the
//! current frame buffer; no gameplay logic lives here.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::{Rect, frame_rects};
pub use vertex::Vertex;
