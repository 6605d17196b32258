//! Vector types for pattern geometry

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// 2D vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Create a new 2D vector
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    /// Zero vector
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    /// Calculate the length (magnitude) of the vector
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Dot product
    pub fn dot(&self, other: &Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Express this world vector in a frame whose X axis is rotated by
    /// `angle` radians.
    ///
    /// Returns `(along, across)`: `x` is the component along the rotated
    /// axis, `y` the component perpendicular to it.
    pub fn to_local_frame(&self, angle: f64) -> Vector2 {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(
            self.x * cos + self.y * sin,
            self.y * cos - self.x * sin,
        )
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vector2, b: Vector2) {
        assert!((a - b).length() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_local_frame_identity() {
        let v = Vector2::new(3.0, 4.0);
        assert_close(v.to_local_frame(0.0), v);
    }

    #[test]
    fn test_local_frame_quarter_turn() {
        let v = Vector2::new(0.0, 2.0);
        assert_close(v.to_local_frame(std::f64::consts::FRAC_PI_2), Vector2::new(2.0, 0.0));

        let v = Vector2::new(2.0, 0.0);
        assert_close(v.to_local_frame(std::f64::consts::FRAC_PI_2), Vector2::new(0.0, -2.0));
    }

    #[test]
    fn test_local_frame_preserves_length() {
        let v = Vector2::new(-1.5, 7.25);
        let local = v.to_local_frame(0.7);
        assert!((local.length() - v.length()).abs() < 1e-12);
    }

    #[test]
    fn test_vector_ops() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 5.0);
        assert_eq!(a + b, Vector2::new(4.0, 7.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(a.dot(&b), 13.0);
    }
}
