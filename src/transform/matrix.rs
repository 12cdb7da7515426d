//! 3x3 homogeneous matrices for 2D affine transforms
//!
//! Matrices are stored row-major and used with column vectors `[x, y, 1]`, so in
//! `a * b` the right-hand matrix is applied to a point first.

use std::ops::Mul;

use glam::{DMat3, DVec2, DVec3};

/// An immutable 2D affine transform in homogeneous form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// `m[row][col]`
    pub m: [[f64; 3]; 3],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    pub const fn from_rows(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Translation by `(tx, ty)`
    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self::from_rows([[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]])
    }

    /// Axis-aligned scale about the origin
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::from_rows([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Rotation about the origin, counter-clockwise in math convention.
    ///
    /// On a y-down canvas this turns clockwise on screen.
    pub fn rotate(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Conjugate `inner` so it acts around `(cx, cy)` instead of the origin
    pub fn about_pivot(cx: f64, cy: f64, inner: Mat3) -> Self {
        Self::translate(cx, cy) * inner * Self::translate(-cx, -cy)
    }

    /// Full 3x3 product `a * b`; the bottom row is not assumed
    pub fn multiply(a: &Mat3, b: &Mat3) -> Self {
        let mut m = [[0.0; 3]; 3];
        for (r, row) in m.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| a.m[r][k] * b.m[k][c]).sum();
            }
        }
        Self { m }
    }

    /// Transform a point with implicit `w = 1`, reading only the first two rows
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let [r0, r1, _] = self.m;
        (
            r0[0] * x + r0[1] * y + r0[2],
            r1[0] * x + r1[1] * y + r1[2],
        )
    }

    #[inline]
    pub fn apply_point(&self, p: DVec2) -> DVec2 {
        let (x, y) = self.apply(p.x, p.y);
        DVec2::new(x, y)
    }

    /// Whether the bottom row is exactly `[0, 0, 1]`
    pub fn is_affine(&self) -> bool {
        self.m[2] == [0.0, 0.0, 1.0]
    }

    /// Component-wise comparison within `eps`
    pub fn abs_diff_eq(&self, other: &Mat3, eps: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        Mat3::multiply(&self, &rhs)
    }
}

impl From<Mat3> for DMat3 {
    fn from(value: Mat3) -> Self {
        let [r0, r1, r2] = value.m;
        DMat3::from_cols(
            DVec3::new(r0[0], r1[0], r2[0]),
            DVec3::new(r0[1], r1[1], r2[1]),
            DVec3::new(r0[2], r1[2], r2[2]),
        )
    }
}

impl From<DMat3> for Mat3 {
    fn from(value: DMat3) -> Self {
        let r0 = value.row(0);
        let r1 = value.row(1);
        let r2 = value.row(2);
        Mat3::from_rows([r0.to_array(), r1.to_array(), r2.to_array()])
    }
}
