use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Clamps one component into a magnitude band.
///
/// Magnitudes below `min` snap to zero (keeping the sign bit), magnitudes
/// above `max` are clipped to `max` with the original sign.
pub fn clamp_band(value: f64, min: f64, max: f64) -> f64 {
    let magnitude = value.abs();
    if magnitude < min {
        0.0_f64.copysign(value)
    } else if magnitude > max {
        max.copysign(value)
    } else {
        value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a new Vec2.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Calculates the magnitude (length) of the vector.
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a unit vector, or zero for a zero-length vector.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            Self::ZERO
        } else {
            self * (1.0 / mag)
        }
    }

    /// Calculates the distance between two vector points.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Clamps both components into the `[min, max]` magnitude band.
    /// See [`clamp_band`].
    pub fn clamp_band(self, min: f64, max: f64) -> Self {
        Self::new(clamp_band(self.x, min, max), clamp_band(self.y, min, max))
    }

    /// True when both components are finite numbers.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

// Scaling (Vec2 * f64)
impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

// Plain f64 division: a zero divisor yields INFINITY or NaN components.
impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Sum for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::ZERO, |acc, v| acc + v)
    }
}

impl<'a> Sum<&'a Vec2> for Vec2 {
    fn sum<I: Iterator<Item = &'a Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::ZERO, |acc, v| acc + *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_vec2_add_and_scale() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
        assert_eq!(v1 * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(3.0 * v1, Vec2::new(3.0, 6.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_vec2_magnitude_and_distance() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < EPSILON);
        assert!((Vec2::new(1.0, 2.0).distance(Vec2::new(4.0, 6.0)) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_normalize() {
        let norm_v = Vec2::new(3.0, 4.0).normalize();
        assert!((norm_v.magnitude() - 1.0).abs() < EPSILON);
        assert!((norm_v.x - 0.6).abs() < EPSILON);
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_vec2_div_by_zero_is_not_finite() {
        let v = Vec2::new(1.0, 0.0) / 0.0;
        assert!(!v.is_finite());
    }

    #[test]
    fn test_vec2_sum() {
        let forces = vec![Vec2::new(1.0, 0.0), Vec2::new(0.0, 2.0), Vec2::new(-0.5, 0.5)];
        let total: Vec2 = forces.iter().sum();
        assert_eq!(total, Vec2::new(0.5, 2.5));
        let empty: Vec<Vec2> = Vec::new();
        assert_eq!(empty.into_iter().sum::<Vec2>(), Vec2::ZERO);
    }

    #[test]
    fn test_clamp_band_edges() {
        assert_eq!(clamp_band(0.005, 0.01, 4.0), 0.0);
        assert!(clamp_band(-0.005, 0.01, 4.0).is_sign_negative());
        assert_eq!(clamp_band(10.0, 0.01, 4.0), 4.0);
        assert_eq!(clamp_band(-10.0, 0.01, 4.0), -4.0);
        assert_eq!(clamp_band(2.5, 0.01, 4.0), 2.5);
        assert_eq!(Vec2::new(-9.0, 0.001).clamp_band(0.01, 4.0), Vec2::new(-4.0, 0.0));
    }

    proptest! {
        #[test]
        fn clamped_component_respects_band(value in -1.0e6f64..1.0e6, min in 0.0f64..1.0, extra in 0.0f64..100.0) {
            let max = min + extra;
            let clamped = clamp_band(value, min, max);
            if value.abs() < min {
                prop_assert_eq!(clamped, 0.0);
            } else if value.abs() > max {
                prop_assert_eq!(clamped, max.copysign(value));
            } else {
                prop_assert_eq!(clamped, value);
            }
            prop_assert!(clamped.abs() <= max);
        }
    }
}
