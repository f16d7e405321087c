use super::point::*;

use std::ops::{Mul};

///
/// A 2D affine transformation matrix
///
/// Stored as two rows of three values: the third row is implicitly `[0, 0, 1]`.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform2D(pub [[f32; 3]; 2]);

impl Transform2D {
    ///
    /// The identity transform
    ///
    #[inline]
    pub fn identity() -> Transform2D {
        Transform2D([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        ])
    }

    ///
    /// A transform that translates by an offset
    ///
    #[inline]
    pub fn translate(dx: f32, dy: f32) -> Transform2D {
        Transform2D([
            [1.0, 0.0, dx],
            [0.0, 1.0, dy],
        ])
    }

    ///
    /// A transform that scales around the origin
    ///
    #[inline]
    pub fn scale(sx: f32, sy: f32) -> Transform2D {
        Transform2D([
            [sx, 0.0, 0.0],
            [0.0, sy, 0.0],
        ])
    }

    ///
    /// A transform that rotates anticlockwise around the origin by an angle in radians
    ///
    #[inline]
    pub fn rotate(radians: f32) -> Transform2D {
        let (sin, cos) = radians.sin_cos();

        Transform2D([
            [cos, -sin, 0.0],
            [sin,  cos, 0.0],
        ])
    }

    ///
    /// True if this is the identity transform (points pass through unchanged)
    ///
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Transform2D::identity()
    }

    ///
    /// Applies this transform to a point
    ///
    #[inline]
    pub fn apply(&self, point: Point) -> Point {
        let Transform2D([[a, b, c], [d, e, f]]) = self;

        Point::new(
            a * point.x + b * point.y + c,
            d * point.x + e * point.y + f,
        )
    }
}

impl Mul<Transform2D> for Transform2D {
    type Output = Transform2D;

    ///
    /// Composes two transforms (the right-hand transform is applied first)
    ///
    fn mul(self, other: Transform2D) -> Transform2D {
        let Transform2D(a) = self;
        let Transform2D(b) = other;

        let mut result = [[0.0; 3]; 2];

        for row in 0..2 {
            for col in 0..3 {
                result[row][col] = a[row][0] * b[0][col]
                    + a[row][1] * b[1][col]
                    + if col == 2 { a[row][2] } else { 0.0 };
            }
        }

        Transform2D(result)
    }
}
