use std::{
    any::Any,
    hash::{Hash, Hasher},
};

/// A point or displacement in 2D space.
///
/// Every operation has one canonical named form taking `self` by value and returning a new vector.
/// The operator impls (`+`, `-`, `*`, `/`) only forward to those. The single mutating method is
/// [`normalize`](#method.normalize).
///
/// No invariant is enforced on the components. Edge cases like a division by zero follow IEEE-754
/// and produce `inf` or `NaN` components instead of panicking.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    /// The horizontal component
    pub x: f32,
    /// The vertical component
    pub y: f32,
}

impl Vector2 {
    /// Create a new vector. The components are stored as-is.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The vector `(0, 0)`. This is the same as `Vector2::default()`.
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// The vector `(1, 1)`.
    pub fn one() -> Self {
        Self::splat(1.0)
    }

    /// The unit vector `(1, 0)`.
    pub fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The unit vector `(0, 1)`.
    pub fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// A vector with both components set to `value`.
    pub fn splat(value: f32) -> Self {
        Self::new(value, value)
    }

    /// The euclidean length of this vector.
    ///
    /// This is `0.0` for the zero vector and `NaN` if either component is `NaN`.
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// The squared length of this vector. Cheaper than [`length`](#method.length) when only
    /// comparing lengths.
    pub fn length_squared(self) -> f32 {
        (self.x * self.x) + (self.y * self.y)
    }

    /// The distance between this vector and `other`.
    pub fn distance_to(self, other: Self) -> f32 {
        other.subtract(self).length()
    }

    /// The squared distance between this vector and `other`.
    pub fn distance_squared_to(self, other: Self) -> f32 {
        other.subtract(self).length_squared()
    }

    /// Return this vector scaled to a length of 1.
    ///
    /// A vector with a length of exactly zero is returned unchanged. This does not panic and does
    /// not produce `NaN` components.
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return self;
        }
        self.multiply(1.0 / length)
    }

    /// Normalize this vector in place. See [`normalized`](#method.normalized).
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Componentwise sum `self + right`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, right: Self) -> Self {
        Self::new(self.x + right.x, self.y + right.y)
    }

    /// Componentwise difference `self - right`.
    pub fn subtract(self, right: Self) -> Self {
        Self::new(self.x - right.x, self.y - right.y)
    }

    /// Componentwise product of two vectors (the Hadamard product, not the dot product).
    pub fn modulate(self, right: Self) -> Self {
        Self::new(self.x * right.x, self.y * right.y)
    }

    /// Scale both components by `scale`.
    pub fn multiply(self, scale: f32) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }

    /// Divide both components by `scale`.
    ///
    /// Dividing by zero is not checked, the components become `inf` or `NaN`.
    pub fn divide(self, scale: f32) -> Self {
        Self::new(self.x / scale, self.y / scale)
    }

    /// The vector pointing in the opposite direction.
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// The dot product of two vectors.
    pub fn dot(self, right: Self) -> f32 {
        (self.x * right.x) + (self.y * right.y)
    }

    /// Reflect this vector off a surface with the given `normal`.
    ///
    /// `normal` is expected to have a length of 1. It is not normalized here.
    pub fn reflect(self, normal: Self) -> Self {
        let dot = self.dot(normal);
        Self::new(
            self.x - ((2.0 * dot) * normal.x),
            self.y - ((2.0 * dot) * normal.y),
        )
    }

    /// Linear interpolation from `self` to `end`.
    ///
    /// `factor` is not clamped, values outside of `0..=1` extrapolate along the line.
    pub fn lerp(self, end: Self, factor: f32) -> Self {
        Self::new(
            self.x + ((end.x - self.x) * factor),
            self.y + ((end.y - self.y) * factor),
        )
    }

    /// Clamp each component to the range given by `min` and `max`.
    ///
    /// The upper bound is applied before the lower bound, so if `min` is larger than `max` on an
    /// axis, that component ends up at `min`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            clamp_component(self.x, min.x, max.x),
            clamp_component(self.y, min.y, max.y),
        )
    }

    /// The componentwise minimum of two vectors.
    pub fn minimize(self, right: Self) -> Self {
        Self::new(
            if self.x < right.x { self.x } else { right.x },
            if self.y < right.y { self.y } else { right.y },
        )
    }

    /// The componentwise maximum of two vectors.
    pub fn maximize(self, right: Self) -> Self {
        Self::new(
            if self.x > right.x { self.x } else { right.x },
            if self.y > right.y { self.y } else { right.y },
        )
    }

    /// Compare against a value of unknown type.
    ///
    /// Returns `false` if `other` is not a `Vector2`.
    pub fn equals_dyn(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .map_or(false, |other| self == other)
    }

    /// Encode the vector as `x` followed by `y`, both as little-endian IEEE-754 floats.
    pub fn to_le_bytes(self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        bytes[..4].copy_from_slice(&self.x.to_le_bytes());
        bytes[4..].copy_from_slice(&self.y.to_le_bytes());
        bytes
    }

    /// Decode a vector written by [`to_le_bytes`](#method.to_le_bytes). This is bit-exact.
    pub fn from_le_bytes(bytes: [u8; 8]) -> Self {
        let [x0, x1, x2, x3, y0, y1, y2, y3] = bytes;
        Self::new(
            f32::from_le_bytes([x0, x1, x2, x3]),
            f32::from_le_bytes([y0, y1, y2, y3]),
        )
    }
}

fn clamp_component(value: f32, min: f32, max: f32) -> f32 {
    let value = if value > max { max } else { value };
    if value < min {
        min
    } else {
        value
    }
}

// `0.0` and `-0.0` compare equal, so they have to hash the same
fn hash_bits(value: f32) -> u32 {
    if value == 0.0 {
        0.0f32.to_bits()
    } else {
        value.to_bits()
    }
}

impl Hash for Vector2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_bits(self.x).hash(state);
        hash_bits(self.y).hash(state);
    }
}

impl std::ops::Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vector2::add(self, rhs)
    }
}

impl std::ops::AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = Vector2::add(*self, rhs);
    }
}

impl std::ops::Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl std::ops::SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.subtract(rhs);
    }
}

impl std::ops::Neg for Vector2 {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl std::ops::Mul<f32> for Vector2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<Vector2> for f32 {
    type Output = Vector2;
    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs.multiply(self)
    }
}

impl std::ops::MulAssign<f32> for Vector2 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.multiply(rhs);
    }
}

impl std::ops::Div<f32> for Vector2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self.divide(rhs)
    }
}

impl std::ops::DivAssign<f32> for Vector2 {
    fn div_assign(&mut self, rhs: f32) {
        *self = self.divide(rhs);
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 2]> for Vector2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for (f32, f32) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl From<Vector2> for [f32; 2] {
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}

impl From<vek::Vec2<f32>> for Vector2 {
    fn from(v: vek::Vec2<f32>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for vek::Vec2<f32> {
    fn from(v: Vector2) -> Self {
        vek::Vec2::new(v.x, v.y)
    }
}

#[cfg(feature = "mint")]
impl From<mint::Vector2<f32>> for Vector2 {
    fn from(v: mint::Vector2<f32>) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(feature = "mint")]
impl From<Vector2> for mint::Vector2<f32> {
    fn from(v: Vector2) -> Self {
        mint::Vector2 { x: v.x, y: v.y }
    }
}
