//! Weak-perspective projection from 4D to 3D
//!
//! The scale factor is an affine function of w, not a true perspective
//! division: `scale = (base_scale - 1)·(w - 1) + base_scale`. At w = 1 the
//! xyz components are scaled by exactly `base_scale`; smaller w values are
//! drawn larger, which gives the familiar cell-inside-cell look. The
//! formula is a deliberate, bounded, branch-free approximation; w in
//! [-1, 1] can never send a scale factor to infinity.

use wire4d_math::Vec4;

/// Scale applied to xyz at w = 1
pub const DEFAULT_BASE_SCALE: f64 = 0.75;

/// A projected 3D point
pub type Point3 = [f64; 3];

/// Project a 4D point to 3D using the depth-weighted scale factor
pub fn project(v: Vec4, base_scale: f64) -> Point3 {
    let scale = (base_scale - 1.0) * (v.w - 1.0) + base_scale;
    v.scale_xyz(scale)
}
