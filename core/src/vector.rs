use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Immutable two-dimensional value used for positions and velocities.
///
/// Every operation returns a new value; nothing mutates in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    /// Horizontal component, growing to the right.
    pub x: f32,
    /// Vertical component, growing downward.
    pub y: f32,
}

impl Vector {
    /// Vector with both components set to zero.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum of `self` and `other`.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Both components multiplied by `scalar`.
    #[must_use]
    pub fn scale(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Returns a copy with the vertical component replaced.
    #[must_use]
    pub const fn with_y(self, y: f32) -> Self {
        Self::new(self.x, y)
    }

    /// Returns a copy with the horizontal component replaced.
    #[must_use]
    pub const fn with_x(self, x: f32) -> Self {
        Self::new(x, self.y)
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector::add(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Vector::sub(self, rhs)
    }
}

impl Mul<f32> for Vector {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::Vector;

    #[test]
    fn arithmetic_returns_new_values() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, -4.0);

        assert_eq!(a + b, Vector::new(4.0, -2.0));
        assert_eq!(a - b, Vector::new(-2.0, 6.0));
        assert_eq!(b * 0.5, Vector::new(1.5, -2.0));
        assert_eq!(a, Vector::new(1.0, 2.0), "operands stay untouched");
    }

    #[test]
    fn component_replacement_keeps_other_axis() {
        let v = Vector::new(7.0, 9.0);
        assert_eq!(v.with_y(1.0), Vector::new(7.0, 1.0));
        assert_eq!(v.with_x(1.0), Vector::new(1.0, 9.0));
    }
}
