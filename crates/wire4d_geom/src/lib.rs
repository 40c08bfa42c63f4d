//! Tesseract wireframe geometry engine
//!
//! This crate computes the wireframe of a rotating 4D hypercube as 3D line
//! segments, one frame at a time:
//!
//! 1. [`Hypercube`] - the 16-vertex {-1,1}^4 template, rotated by a
//!    [`RotationSpec`] (ordered planes + one angle)
//! 2. [`find_edges`] - exhaustive nearest-pair scan over the rotated 4D
//!    points, yielding the 32 wireframe edges
//! 3. [`project`] - weak-perspective 4D-to-3D projection of each endpoint
//! 4. [`FrameBuilder`] / [`build_frame`] - the orchestrating entry point
//!    returning a ready-to-draw [`Segment3D`] list
//!
//! Everything here is a pure computation over immutable inputs: no I/O, no
//! shared state, no display surface. Distinct frames are independent.

mod hypercube;
mod edges;
mod project;
mod frame;

pub use hypercube::{Hypercube, RotationSpec, VERTEX_COUNT};
pub use edges::{find_edges, DEFAULT_EDGE_THRESHOLD, EDGE_COUNT};
pub use project::{project, Point3, DEFAULT_BASE_SCALE};
pub use frame::{build_frame, FrameBuilder, FrameError, Segment3D};

// Re-export commonly used math types for convenience
pub use wire4d_math::{Mat4, Plane, Vec4};
