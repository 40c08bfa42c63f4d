//! Axis-aligned rotation planes in 4D space
//!
//! In 4D, rotations happen in planes rather than around axes. There are 6
//! axis-aligned planes: XY, YZ, XZ, XW, YW, ZW. A rotation confined to one
//! plane leaves the orthogonal plane pointwise fixed.
//!
//! The operator is built by conjugation: a change-of-basis matrix T moves
//! the plane's two axes into the first two coordinate slots, a 2D rotation
//! block is applied there, and Tᵀ maps the result back to the canonical
//! (x, y, z, w) frame.

use serde::{Serialize, Deserialize};

use crate::mat4::{self, Mat4};

/// The 6 axis-aligned rotation planes in 4D space
///
/// Serialized in lowercase (`"xy"`, `"xw"`, ...) for use in config files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    /// XY plane - rotation within the familiar 3D subspace
    XY,
    /// YZ plane - rotation within the familiar 3D subspace
    YZ,
    /// XZ plane - rotation within the familiar 3D subspace
    XZ,
    /// XW plane - rotation through the 4th dimension affecting X
    XW,
    /// YW plane - rotation through the 4th dimension affecting Y
    YW,
    /// ZW plane - rotation through the 4th dimension affecting Z
    ZW,
}

impl Plane {
    /// All six planes, in declaration order
    pub const ALL: [Plane; 6] = [
        Plane::XY,
        Plane::YZ,
        Plane::XZ,
        Plane::XW,
        Plane::YW,
        Plane::ZW,
    ];

    /// Axis order for the change-of-basis matrix (0=X, 1=Y, 2=Z, 3=W)
    ///
    /// The plane's two axes come first; the orthogonal pair fills the
    /// remaining slots.
    fn basis_order(self) -> [usize; 4] {
        match self {
            Plane::XY => [0, 1, 2, 3],
            Plane::YZ => [1, 2, 0, 3],
            Plane::XZ => [0, 2, 1, 3],
            Plane::XW => [0, 3, 1, 2],
            Plane::YW => [1, 3, 0, 2],
            Plane::ZW => [2, 3, 0, 1],
        }
    }

    /// Build the 4x4 operator rotating this plane by `angle_degrees`
    ///
    /// The returned matrix is Tᵀ·M·T: T permutes the plane's axes into the
    /// first two rows, M rotates them by the standard 2D rotation
    /// (cos/-sin, sin/cos), and Tᵀ restores the canonical frame. The
    /// orthogonal plane is left fixed.
    pub fn rotation(self, angle_degrees: f64) -> Mat4 {
        let theta = angle_degrees.to_radians();
        let (sin, cos) = theta.sin_cos();

        // 2D rotation block in the plane's own frame
        let mut block = mat4::IDENTITY;
        block[0][0] = cos;
        block[1][0] = -sin;
        block[0][1] = sin;
        block[1][1] = cos;

        // Change of basis: row i of T is the basis vector for axis order[i]
        let mut basis = [[0.0f64; 4]; 4];
        for (row, &axis) in self.basis_order().iter().enumerate() {
            basis[axis][row] = 1.0;
        }

        mat4::mul(mat4::mul(mat4::transpose(basis), block), basis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec4;

    const EPSILON: f64 = 1e-12;

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        (a.x - b.x).abs() < EPSILON
            && (a.y - b.y).abs() < EPSILON
            && (a.z - b.z).abs() < EPSILON
            && (a.w - b.w).abs() < EPSILON
    }

    fn rotate(plane: Plane, angle_degrees: f64, v: Vec4) -> Vec4 {
        mat4::transform(plane.rotation(angle_degrees), v)
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        for plane in Plane::ALL {
            assert!(vec_approx_eq(rotate(plane, 0.0, v), v),
                "{:?} at 0 degrees should not move points", plane);
        }
    }

    #[test]
    fn test_xy_rotation_90() {
        // Rotating X by 90° in the XY plane gives Y; Y gives -X
        assert!(vec_approx_eq(rotate(Plane::XY, 90.0, Vec4::X), Vec4::Y));
        assert!(vec_approx_eq(rotate(Plane::XY, 90.0, Vec4::Y), -Vec4::X));
    }

    #[test]
    fn test_yz_rotation_90() {
        assert!(vec_approx_eq(rotate(Plane::YZ, 90.0, Vec4::Y), Vec4::Z));
        assert!(vec_approx_eq(rotate(Plane::YZ, 90.0, Vec4::Z), -Vec4::Y));
    }

    #[test]
    fn test_xz_rotation_90() {
        assert!(vec_approx_eq(rotate(Plane::XZ, 90.0, Vec4::X), Vec4::Z));
        assert!(vec_approx_eq(rotate(Plane::XZ, 90.0, Vec4::Z), -Vec4::X));
    }

    #[test]
    fn test_xw_rotation_90() {
        assert!(vec_approx_eq(rotate(Plane::XW, 90.0, Vec4::X), Vec4::W));
        assert!(vec_approx_eq(rotate(Plane::XW, 90.0, Vec4::W), -Vec4::X));
    }

    #[test]
    fn test_yw_rotation_90() {
        assert!(vec_approx_eq(rotate(Plane::YW, 90.0, Vec4::Y), Vec4::W));
        assert!(vec_approx_eq(rotate(Plane::YW, 90.0, Vec4::W), -Vec4::Y));
    }

    #[test]
    fn test_zw_rotation_90() {
        assert!(vec_approx_eq(rotate(Plane::ZW, 90.0, Vec4::Z), Vec4::W));
        assert!(vec_approx_eq(rotate(Plane::ZW, 90.0, Vec4::W), -Vec4::Z));
    }

    #[test]
    fn test_orthogonal_axes_are_fixed() {
        // XW rotation must leave Y and Z untouched
        assert!(vec_approx_eq(rotate(Plane::XW, 37.0, Vec4::Y), Vec4::Y));
        assert!(vec_approx_eq(rotate(Plane::XW, 37.0, Vec4::Z), Vec4::Z));

        // XY rotation must leave Z and W untouched
        assert!(vec_approx_eq(rotate(Plane::XY, 37.0, Vec4::Z), Vec4::Z));
        assert!(vec_approx_eq(rotate(Plane::XY, 37.0, Vec4::W), Vec4::W));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        for plane in Plane::ALL {
            let rotated = rotate(plane, 53.7, v);
            assert!((v.length() - rotated.length()).abs() < 1e-9,
                "{:?} rotation should be an isometry", plane);
        }
    }

    #[test]
    fn test_full_turn_restores_input() {
        let v = Vec4::new(0.3, -1.2, 0.7, 2.4);
        for plane in Plane::ALL {
            let rotated = rotate(plane, 360.0, v);
            assert!(vec_approx_eq(rotated, v),
                "{:?} 360-degree rotation should restore the input", plane);
        }
    }

    #[test]
    fn test_opposite_angles_cancel() {
        let v = Vec4::new(1.0, -2.0, 0.5, 0.25);
        let forward = rotate(Plane::YW, 41.0, v);
        let back = rotate(Plane::YW, -41.0, forward);
        assert!(vec_approx_eq(back, v));
    }

    #[test]
    fn test_serde_lowercase_names() {
        use serde::de::value::{Error, StrDeserializer};
        use serde::Deserialize;

        // Config files spell planes in lowercase
        let de = StrDeserializer::<Error>::new("xw");
        assert_eq!(Plane::deserialize(de).unwrap(), Plane::XW);

        let de = StrDeserializer::<Error>::new("XW");
        assert!(Plane::deserialize(de).is_err());
    }
}
