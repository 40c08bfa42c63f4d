//! wire4d - rotating tesseract wireframe driver
//!
//! The geometry lives in [`wire4d_geom`]; this crate owns the frame-sequence
//! driver around it: configuration, the frame loop, and output writing.

pub mod config;
pub mod writer;

// Re-export the engine surface for driver consumers
pub use wire4d_geom::{build_frame, FrameBuilder, Segment3D};
pub use wire4d_math::{Plane, Vec4};
