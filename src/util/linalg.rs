#[allow(unused_imports)]
use crate::core::prelude::*;

use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Copy, Clone, PartialOrd, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[allow(clippy::return_self_not_must_use)]
impl Vec2 {
    pub fn right() -> Vec2 { Vec2 { x: 1., y: 0. } }
    pub fn up() -> Vec2 { Vec2 { x: 0., y: -1. } }
    pub fn left() -> Vec2 { Vec2 { x: -1., y: 0. } }
    pub fn down() -> Vec2 { Vec2 { x: 0., y: 1. } }
    pub fn one() -> Vec2 { Vec2 { x: 1., y: 1. } }
    pub fn splat(value: f32) -> Vec2 { Vec2 { x: value, y: value } }

    pub fn len_squared(&self) -> f32 { self.dot(*self) }
    pub fn len(&self) -> f32 { self.len_squared().sqrt() }

    /// Returns the unit vector in this direction, or zero for the zero vector.
    pub fn normed(&self) -> Vec2 {
        match self.len() {
            0. => Vec2::zero(),
            len => *self / len,
        }
    }
    /// In-place variant of [`Vec2::normed`].
    pub fn normalize(&mut self) {
        *self = self.normed();
    }

    pub fn dot(&self, other: Vec2) -> f32 { self.x * other.x + self.y * other.y }

    pub fn component_wise(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }
    pub fn abs(&self) -> Vec2 { Vec2 { x: self.x.abs(), y: self.y.abs() } }

    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        (*self - rhs).len() < EPSILON
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2 { x: 0., y: 0. }
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vec({}, {})", self.x, self.y)
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}
impl Mul<i32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: i32) -> Self::Output {
        self * rhs as f32
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}
impl Div<i32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: i32) -> Self::Output {
        self / rhs as f32
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

pub trait AxisAlignedExtent {
    fn aa_extent(&self) -> Vec2;
    fn centre(&self) -> Vec2;

    fn half_widths(&self) -> Vec2 { self.aa_extent() / 2 }
    fn top_left(&self) -> Vec2 { self.centre() - self.half_widths() }
    fn top_right(&self) -> Vec2 { self.top_left() + self.aa_extent().x * Vec2::right() }
    fn bottom_left(&self) -> Vec2 { self.top_left() + self.aa_extent().y * Vec2::down() }
    fn bottom_right(&self) -> Vec2 { self.top_left() + self.aa_extent() }

    fn left(&self) -> f32 { self.top_left().x }
    fn right(&self) -> f32 { self.top_right().x }
    fn top(&self) -> f32 { self.top_left().y }
    fn bottom(&self) -> f32 { self.bottom_left().y }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Vec2 Basic Operations ====================

    #[test]
    fn vec2_addition() {
        let a = Vec2 { x: 1.0, y: 2.0 };
        let b = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a + b, Vec2 { x: 4.0, y: 6.0 });
        let mut c = a;
        c += b;
        assert_eq!(c, Vec2 { x: 4.0, y: 6.0 });
    }

    #[test]
    fn vec2_subtraction() {
        let a = Vec2 { x: 5.0, y: 6.0 };
        let b = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a - b, Vec2 { x: 2.0, y: 2.0 });
        let mut c = a;
        c -= b;
        assert_eq!(c, Vec2 { x: 2.0, y: 2.0 });
    }

    #[test]
    fn vec2_scalar_multiplication() {
        let a = Vec2 { x: 1.0, y: 1.0 };
        assert_eq!(a * 2.0, Vec2 { x: 2.0, y: 2.0 });
        assert_eq!(2.0 * a, Vec2 { x: 2.0, y: 2.0 });
        assert_eq!(a * 2, Vec2 { x: 2.0, y: 2.0 });
        let mut b = a;
        b *= 3.0;
        assert_eq!(b, Vec2 { x: 3.0, y: 3.0 });
    }

    #[test]
    fn vec2_division() {
        let a = Vec2 { x: 4.0, y: 6.0 };
        assert_eq!(a / 2.0, Vec2 { x: 2.0, y: 3.0 });
        assert_eq!(a / 2, Vec2 { x: 2.0, y: 3.0 });
        let mut b = a;
        b /= 2.0;
        assert_eq!(b, Vec2 { x: 2.0, y: 3.0 });
    }

    #[test]
    fn vec2_negation() {
        let a = Vec2 { x: 1.0, y: -2.0 };
        assert_eq!(-a, Vec2 { x: -1.0, y: 2.0 });
    }

    #[test]
    fn vec2_cardinal_directions() {
        assert_eq!(Vec2::right(), Vec2 { x: 1.0, y: 0.0 });
        assert_eq!(Vec2::left(), Vec2 { x: -1.0, y: 0.0 });
        assert_eq!(Vec2::up(), Vec2 { x: 0.0, y: -1.0 });
        assert_eq!(Vec2::down(), Vec2 { x: 0.0, y: 1.0 });
        assert_eq!(Vec2::one(), Vec2 { x: 1.0, y: 1.0 });
        assert_eq!(Vec2::zero(), Vec2 { x: 0.0, y: 0.0 });
        assert_eq!(Vec2::splat(3.0), Vec2 { x: 3.0, y: 3.0 });
    }

    // ==================== Vec2 Geometric Operations ====================

    #[test]
    fn vec2_dot_product() {
        let a = Vec2 { x: 1.0, y: 2.0 };
        let b = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(b.dot(a), 11.0);
    }

    #[test]
    fn vec2_length() {
        let a = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a.len_squared(), 25.0);
        assert_eq!(a.len(), 5.0);
    }

    #[test]
    fn vec2_normed() {
        let a = Vec2 { x: 3.0, y: 4.0 };
        assert!(a.normed().almost_eq(Vec2 { x: 0.6, y: 0.8 }));
        let mut b = a;
        b.normalize();
        assert!(b.almost_eq(Vec2 { x: 0.6, y: 0.8 }));
    }

    #[test]
    fn vec2_normed_zero_is_guarded() {
        // Must not produce NaN.
        assert_eq!(Vec2::zero().normed(), Vec2::zero());
        let mut a = Vec2::zero();
        a.normalize();
        assert_eq!(a, Vec2::zero());
    }

    #[test]
    fn vec2_component_wise() {
        let a = Vec2 { x: 2.0, y: 3.0 };
        let b = Vec2 { x: 4.0, y: 5.0 };
        assert_eq!(a.component_wise(b), Vec2 { x: 8.0, y: 15.0 });
        assert_eq!(Vec2 { x: -1.0, y: -2.5 }.abs(), Vec2 { x: 1.0, y: 2.5 });
    }

    // ==================== Conversions and Display ====================

    #[test]
    fn vec2_array_conversions() {
        let v: Vec2 = [1.0_f32, 2.0_f32].into();
        assert_eq!(v, Vec2 { x: 1.0, y: 2.0 });
        let arr: [f32; 2] = v.into();
        assert_eq!(arr, [1.0, 2.0]);
    }

    #[test]
    fn vec2_display() {
        let v = Vec2 { x: 1.5, y: 2.5 };
        assert_eq!(format!("{v}"), "vec(1.5, 2.5)");
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }
}
