//! Tesseract (4D hypercube) vertex generation and rotation
//!
//! A tesseract has 16 vertices (all combinations of ±1 for x,y,z,w) and
//! 32 edges. The canonical template is never mutated; rotation returns a
//! fresh vertex set per call.

use serde::{Serialize, Deserialize};
use wire4d_math::{mat4, Mat4, Plane, Vec4};

/// Number of vertices of the hypercube
pub const VERTEX_COUNT: usize = 16;

/// An ordered sequence of rotation planes sharing a single angle
///
/// "Rotate by this angle simultaneously in each listed plane." The
/// per-plane operators are composed in list order: for planes [p1, p2] the
/// combined operator is R(p2)·R(p1), so the first listed plane is applied
/// first. Order matters; rotations in different planes do not commute in
/// general.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationSpec {
    pub planes: Vec<Plane>,
    pub angle_degrees: f64,
}

impl RotationSpec {
    pub fn new(planes: Vec<Plane>, angle_degrees: f64) -> Self {
        Self { planes, angle_degrees }
    }

    /// Compose the per-plane operators into a single 4x4 operator
    ///
    /// An empty plane list yields the identity.
    pub fn operator(&self) -> Mat4 {
        self.planes
            .iter()
            .fold(mat4::IDENTITY, |acc, plane| {
                mat4::mul(plane.rotation(self.angle_degrees), acc)
            })
    }
}

/// The unit tesseract: 16 vertices, each coordinate in {+1, -1}
#[derive(Clone, Debug)]
pub struct Hypercube {
    vertices: [Vec4; VERTEX_COUNT],
}

impl Default for Hypercube {
    fn default() -> Self {
        Self::unit()
    }
}

impl Hypercube {
    /// The canonical unit hypercube centered at the origin
    ///
    /// Vertices are enumerated by binary counting: vertex i has coordinate
    /// +1 on axis k when bit k of i is set, -1 otherwise.
    pub fn unit() -> Self {
        let vertices = [
            Vec4::new(-1.0, -1.0, -1.0, -1.0), // 0  = 0b0000
            Vec4::new( 1.0, -1.0, -1.0, -1.0), // 1  = 0b0001
            Vec4::new(-1.0,  1.0, -1.0, -1.0), // 2  = 0b0010
            Vec4::new( 1.0,  1.0, -1.0, -1.0), // 3  = 0b0011
            Vec4::new(-1.0, -1.0,  1.0, -1.0), // 4  = 0b0100
            Vec4::new( 1.0, -1.0,  1.0, -1.0), // 5  = 0b0101
            Vec4::new(-1.0,  1.0,  1.0, -1.0), // 6  = 0b0110
            Vec4::new( 1.0,  1.0,  1.0, -1.0), // 7  = 0b0111
            Vec4::new(-1.0, -1.0, -1.0,  1.0), // 8  = 0b1000
            Vec4::new( 1.0, -1.0, -1.0,  1.0), // 9  = 0b1001
            Vec4::new(-1.0,  1.0, -1.0,  1.0), // 10 = 0b1010
            Vec4::new( 1.0,  1.0, -1.0,  1.0), // 11 = 0b1011
            Vec4::new(-1.0, -1.0,  1.0,  1.0), // 12 = 0b1100
            Vec4::new( 1.0, -1.0,  1.0,  1.0), // 13 = 0b1101
            Vec4::new(-1.0,  1.0,  1.0,  1.0), // 14 = 0b1110
            Vec4::new( 1.0,  1.0,  1.0,  1.0), // 15 = 0b1111
        ];

        Self { vertices }
    }

    /// The canonical vertex set
    #[inline]
    pub fn vertices(&self) -> &[Vec4; VERTEX_COUNT] {
        &self.vertices
    }

    /// Apply a rotation to every vertex, returning a fresh set
    ///
    /// Pure and deterministic: the same spec always yields the same
    /// rotated vertices, in template order.
    pub fn rotated(&self, spec: &RotationSpec) -> [Vec4; VERTEX_COUNT] {
        let operator = spec.operator();
        self.vertices.map(|v| mat4::transform(operator, v))
    }
}
