//! `mathcore::vectors` submodule implements [`Vector3Int`] - immutable three-dimensional vector with
//! `i32` coordinates, which is used to represent block positions and offsets in voxel worlds.
//!

use crate::mathcore::floats::floor_to_int;
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    error::Error,
    fmt,
    ops::{Add, Neg, Sub},
};

/// [`CoordinateError`] enum lists all errors that could occur
/// during checked conversion of floating point coordinates into [`Vector3Int`].
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CoordinateError {
    /// Coordinate is NaN or infinite.
    ///
    NonFinite(f64),
    /// Floored coordinate does not fit into `i32`.
    ///
    OutOfRange(f64),
}
impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::NonFinite(value) => {
                write!(f, "coordinate {value} is not a finite number")
            }
            CoordinateError::OutOfRange(value) => {
                write!(f, "coordinate {value} does not fit into block coordinate range")
            }
        }
    }
}
impl Error for CoordinateError {}

/// [`impl_vector_wrapping_operations`] macro implements componentwise vector-vector operations
/// that wrap around on overflow.
///
macro_rules! impl_vector_wrapping_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $wrapping:ident),)+)) => {$(
        impl $trait for $struct_name {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                $struct_name::new(
                    self.x.$wrapping(rhs.x),
                    self.y.$wrapping(rhs.y),
                    self.z.$wrapping(rhs.z),
                )
            }
        }
    )+}
}

/// [`Vector3Int`] struct represents three-dimensional vector and three-dimensional point with `i32`
/// coordinates (usually block position in voxel world).
///
/// [`Vector3Int`] is immutable: its components can only be read, and every operation
/// returns new vector.
///
/// # Ordering
/// Vectors are ordered by `y` first, then by `z` and then by `x`,
/// so sorting positions groups them by vertical layer.
///
/// ```rust
/// # use modkit::mathcore::vectors::Vector3Int;
/// let mut positions = vec![
///     Vector3Int::new(0, 5, 0),
///     Vector3Int::new(9, 3, 1),
///     Vector3Int::new(1, 3, 1),
///     Vector3Int::new(4, 3, 0),
/// ];
/// positions.sort();
/// assert_eq!(
///     positions,
///     [
///         Vector3Int::new(4, 3, 0),
///         Vector3Int::new(1, 3, 1),
///         Vector3Int::new(9, 3, 1),
///         Vector3Int::new(0, 5, 0),
///     ]
/// );
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector3Int {
    /// X component of vector.
    ///
    x: i32,
    /// Y component of vector.
    ///
    y: i32,
    /// Z component of vector.
    ///
    z: i32,
}
impl Vector3Int {
    /// Zero vector (`(0, 0, 0)`).
    ///
    pub const ZERO: Vector3Int = Vector3Int::new(0, 0, 0);

    /// Constructs vector from its components.
    ///
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Vector3Int { x, y, z }
    }
    /// Constructs vector from floating point coordinates by flooring each of them.
    ///
    /// Flooring (not truncation) is used, so point that lies inside a block is converted to
    /// position of that block even for negative coordinates.
    /// Coordinates outside of `i32` range saturate and NaN is converted to `0`;
    /// use [`Vector3Int::try_from_floats`] to reject such values.
    ///
    /// # Example
    /// ```rust
    /// # use modkit::mathcore::vectors::Vector3Int;
    /// assert_eq!(Vector3Int::from_floats(-1.5, 0.5, 2.0), Vector3Int::new(-2, 0, 2));
    /// ```
    ///
    pub fn from_floats(x: f64, y: f64, z: f64) -> Self {
        Vector3Int::new(floor_to_int(x), floor_to_int(y), floor_to_int(z))
    }
    /// Constructs vector from floating point coordinates by flooring each of them.
    ///
    /// Returns an error if any coordinate is not finite or does not fit into `i32` after flooring.
    ///
    /// # Example
    /// ```rust
    /// # use modkit::mathcore::vectors::{CoordinateError, Vector3Int};
    /// assert_eq!(Vector3Int::try_from_floats(0.5, -0.5, 3.0), Ok(Vector3Int::new(0, -1, 3)));
    /// assert_eq!(
    ///     Vector3Int::try_from_floats(0.0, f64::NAN, 0.0).map_err(|error| matches!(error, CoordinateError::NonFinite(_))),
    ///     Err(true)
    /// );
    /// ```
    ///
    pub fn try_from_floats(x: f64, y: f64, z: f64) -> Result<Self, CoordinateError> {
        /// Floors single coordinate while checking that result is representable.
        ///
        fn checked_floor(value: f64) -> Result<i32, CoordinateError> {
            if !value.is_finite() {
                return Err(CoordinateError::NonFinite(value));
            }
            let floored = value.floor();
            if floored < f64::from(i32::MIN) || floored > f64::from(i32::MAX) {
                return Err(CoordinateError::OutOfRange(value));
            }
            Ok(floored as i32)
        }

        Ok(Vector3Int::new(
            checked_floor(x)?,
            checked_floor(y)?,
            checked_floor(z)?,
        ))
    }

    /// Returns x component of vector.
    ///
    pub const fn x(&self) -> i32 {
        self.x
    }
    /// Returns y component of vector.
    ///
    pub const fn y(&self) -> i32 {
        self.y
    }
    /// Returns z component of vector.
    ///
    pub const fn z(&self) -> i32 {
        self.z
    }
    /// Returns elements of vector.
    ///
    pub const fn elements(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns new vector that is moved by given offsets.
    ///
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        self + Vector3Int::new(dx, dy, dz)
    }

    /// Returns cross product of two vectors.
    ///
    /// Computation is done with `i32` arithmetic that wraps around on overflow,
    /// so extremely large components produce meaningless (but defined) results.
    ///
    /// # Example
    /// ```rust
    /// # use modkit::mathcore::vectors::Vector3Int;
    /// let x = Vector3Int::new(1, 0, 0);
    /// let y = Vector3Int::new(0, 1, 0);
    /// assert_eq!(x.cross_product(y), Vector3Int::new(0, 0, 1));
    /// ```
    ///
    pub fn cross_product(self, other: Self) -> Self {
        Vector3Int::new(
            self.y
                .wrapping_mul(other.z)
                .wrapping_sub(self.z.wrapping_mul(other.y)),
            self.z
                .wrapping_mul(other.x)
                .wrapping_sub(self.x.wrapping_mul(other.z)),
            self.x
                .wrapping_mul(other.y)
                .wrapping_sub(self.y.wrapping_mul(other.x)),
        )
    }

    /// Returns distance from this vector to the point.
    ///
    /// # Example
    /// ```rust
    /// # use modkit::mathcore::vectors::Vector3Int;
    /// assert_eq!(Vector3Int::ZERO.distance_to(3, 4, 0), 5.0);
    /// ```
    ///
    pub fn distance_to(&self, x: i32, y: i32, z: i32) -> f64 {
        self.squared_distance_to_point(x, y, z).sqrt()
    }
    /// Returns squared distance between two vectors.
    ///
    pub fn squared_distance_to(&self, other: Self) -> f64 {
        self.squared_distance_to_point(other.x, other.y, other.z)
    }
    /// Returns squared distance from this vector to the point.
    ///
    /// It is cheaper than [`Vector3Int::distance_to`] and is enough for comparing distances.
    ///
    pub fn squared_distance_to_point(&self, x: i32, y: i32, z: i32) -> f64 {
        let dx = f64::from(self.x) - f64::from(x);
        let dy = f64::from(self.y) - f64::from(y);
        let dz = f64::from(self.z) - f64::from(z);
        dx * dx + dy * dy + dz * dz
    }
    /// Returns squared distance from the center of block at this position to the point.
    ///
    /// # Example
    /// ```rust
    /// # use modkit::mathcore::vectors::Vector3Int;
    /// assert_eq!(Vector3Int::ZERO.squared_distance_to_center(0.0, 0.0, 0.0), 0.75);
    /// assert_eq!(Vector3Int::ZERO.squared_distance_to_center(0.5, 0.5, 0.5), 0.0);
    /// ```
    ///
    pub fn squared_distance_to_center(&self, x: f64, y: f64, z: f64) -> f64 {
        let dx = f64::from(self.x) + 0.5 - x;
        let dy = f64::from(self.y) + 0.5 - y;
        let dz = f64::from(self.z) + 0.5 - z;
        dx * dx + dy * dy + dz * dz
    }
}
impl Ord for Vector3Int {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y
            .cmp(&other.y)
            .then_with(|| self.z.cmp(&other.z))
            .then_with(|| self.x.cmp(&other.x))
    }
}
impl PartialOrd for Vector3Int {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Neg for Vector3Int {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Vector3Int::new(
            self.x.wrapping_neg(),
            self.y.wrapping_neg(),
            self.z.wrapping_neg(),
        )
    }
}
impl_vector_wrapping_operations!(Vector3Int, ((Add, add, wrapping_add),
                                              (Sub, sub, wrapping_sub),));
impl From<[i32; 3]> for Vector3Int {
    fn from(arr: [i32; 3]) -> Self {
        Vector3Int::new(arr[0], arr[1], arr[2])
    }
}
impl From<Vector3Int> for [i32; 3] {
    fn from(vector: Vector3Int) -> Self {
        vector.elements()
    }
}
impl fmt::Display for Vector3Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
