/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A 2-D floating-point vector, used for positions, velocities and forces.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}
impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0., 0.);

    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
    /// Returns the squared Euclidean norm.
    pub fn norm_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }
    /// Returns the Euclidean norm.
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }
    /// Euclidean distance between self and other.
    pub fn distance(&self, other: Vec2) -> f32 {
        (*self - other).norm()
    }
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }
    /// Rescales self to have norm `max_norm` if it is longer, keeping its direction.
    pub fn clamp_norm(self, max_norm: f32) -> Self {
        let norm = self.norm();
        if norm <= max_norm {
            self
        } else {
            self * (max_norm / norm)
        }
    }
    /// Draws a value uniformly in `[low, high)` on each axis, x first.
    pub fn rand_uniform<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> Self {
        let x = rng.gen_range(low..high);
        let y = rng.gen_range(low..high);
        Self::new(x, y)
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
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

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2::new(-self.x, -self.y)
    }
}
