//! Frame orchestration: rotate, extract edges, project
//!
//! [`FrameBuilder`] is the public entry point consumed by external
//! renderers. Edge extraction runs over the rotated 4D vertices *before*
//! projection; projection is not distance-preserving and would corrupt the
//! nearest-neighbor criterion.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use wire4d_math::Plane;

use crate::edges::{find_edges, DEFAULT_EDGE_THRESHOLD, EDGE_COUNT};
use crate::hypercube::{Hypercube, RotationSpec, VERTEX_COUNT};
use crate::project::{project, Point3, DEFAULT_BASE_SCALE};

/// A wireframe line segment in 3D, the unit consumed by renderers
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Segment3D {
    pub start: Point3,
    pub end: Point3,
}

impl Segment3D {
    #[inline]
    pub const fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }
}

/// Error type for frame construction
///
/// The geometry is pure arithmetic over a fixed topology, so the only
/// failures are non-finite numeric inputs. No partial results: a build
/// either returns the complete segment list or fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameError {
    /// Rotation angle is NaN or infinite
    NonFiniteAngle(f64),
    /// Projection base scale is NaN or infinite
    NonFiniteBaseScale(f64),
    /// Edge-detection threshold is NaN or infinite
    NonFiniteThreshold(f64),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::NonFiniteAngle(v) => {
                write!(f, "rotation angle is not finite: {}", v)
            }
            FrameError::NonFiniteBaseScale(v) => {
                write!(f, "projection base scale is not finite: {}", v)
            }
            FrameError::NonFiniteThreshold(v) => {
                write!(f, "edge threshold is not finite: {}", v)
            }
        }
    }
}

impl std::error::Error for FrameError {}

/// Builds ready-to-draw wireframe frames from a plane selection and angle
///
/// Holds the two projection/extraction knobs; rotation planes and angle
/// vary per frame and are passed to [`FrameBuilder::build`]. The defaults
/// select exactly the 32 true edges of the unit hypercube.
#[derive(Clone, Copy, Debug)]
pub struct FrameBuilder {
    base_scale: f64,
    edge_threshold: f64,
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self {
            base_scale: DEFAULT_BASE_SCALE,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
        }
    }
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the projection base scale (default 0.75)
    pub fn with_base_scale(mut self, base_scale: f64) -> Self {
        self.base_scale = base_scale;
        self
    }

    /// Override the edge-detection distance cutoff (default 2.1)
    pub fn with_edge_threshold(mut self, edge_threshold: f64) -> Self {
        self.edge_threshold = edge_threshold;
        self
    }

    /// Compute one wireframe frame
    ///
    /// Rotates the unit hypercube by `angle_degrees` in each listed plane
    /// (in order), extracts the wireframe edges over the rotated 4D
    /// vertices, then projects both endpoints of every edge independently.
    /// Output order follows the edge scan: stable for a given input.
    pub fn build(
        &self,
        planes: &[Plane],
        angle_degrees: f64,
    ) -> Result<Vec<Segment3D>, FrameError> {
        if !angle_degrees.is_finite() {
            return Err(FrameError::NonFiniteAngle(angle_degrees));
        }
        if !self.base_scale.is_finite() {
            return Err(FrameError::NonFiniteBaseScale(self.base_scale));
        }
        if !self.edge_threshold.is_finite() {
            return Err(FrameError::NonFiniteThreshold(self.edge_threshold));
        }

        let spec = RotationSpec::new(planes.to_vec(), angle_degrees);
        let points = Hypercube::unit().rotated(&spec);
        let edges = find_edges(&points, self.edge_threshold);

        if edges.len() != EDGE_COUNT {
            log::warn!(
                "expected {} edges from {} vertices, found {} (threshold {})",
                EDGE_COUNT,
                VERTEX_COUNT,
                edges.len(),
                self.edge_threshold
            );
        }

        let segments = edges
            .into_iter()
            .map(|(i, j)| {
                Segment3D::new(
                    project(points[i], self.base_scale),
                    project(points[j], self.base_scale),
                )
            })
            .collect();

        Ok(segments)
    }
}

/// Compute one wireframe frame with the default projection and threshold
///
/// Equivalent to `FrameBuilder::new().build(planes, angle_degrees)`.
pub fn build_frame(planes: &[Plane], angle_degrees: f64) -> Result<Vec<Segment3D>, FrameError> {
    FrameBuilder::new().build(planes, angle_degrees)
}
