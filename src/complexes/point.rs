// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{DefaultHasher, Hash, Hasher};
use std::iter::{FromIterator, zip};
use std::ops::Index;
use std::slice::Iter;

use serde::{Deserialize, Serialize};

/// A point of `n`-dimensional real space, compared and hashed by value.
///
/// Coordinates are normalized on construction so that value equality is
/// well behaved: `-0.0` is stored as `0.0` and every NaN is stored as the same
/// NaN. Two points are then equal exactly when their coordinates are
/// bitwise equal, which makes `Point` usable as a hash key and gives it a
/// total (lexicographic) order.
///
/// # Examples
///
/// ```rust
/// use simplicial::Point;
///
/// let a = Point::from([0.0, 0.0]);
/// let b = Point::from([3.0, 4.0]);
///
/// assert_eq!(a.ambient_dimension(), 2);
/// assert_eq!(a.distance(&b), 5.0);
/// assert_eq!(Point::from([-0.0, 1.0]), Point::from([0.0, 1.0]));
/// assert!(a < b);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct Point {
    coordinates: Vec<f64>,
}

fn normalize(coordinate: f64) -> f64 {
    if coordinate.is_nan() {
        f64::NAN
    } else if coordinate == 0.0 {
        0.0
    } else {
        coordinate
    }
}

impl Point {
    /// Create a new point with the given coordinates.
    #[must_use]
    pub fn new(coordinates: Vec<f64>) -> Self {
        Self {
            coordinates: coordinates.into_iter().map(normalize).collect(),
        }
    }

    /// The number of coordinates of this point.
    #[must_use]
    pub fn ambient_dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Get a reference to the coordinates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.coordinates
    }

    /// Create an iterator over the coordinates.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.coordinates.iter()
    }

    /// Euclidean distance between `self` and `other`.
    ///
    /// Both points are expected to have the same ambient dimension; this is
    /// checked only in debug builds.
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        debug_assert_eq!(
            self.ambient_dimension(),
            other.ambient_dimension(),
            "points must have the same ambient dimension"
        );

        zip(self.iter(), other.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// Hash of this point alone, used by the order-independent hashes of the
    /// point collections.
    pub(crate) fn standalone_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Order-independent, self-cancelling combination of the hashes of `points`.
pub(crate) fn xor_fold<'a>(points: impl IntoIterator<Item = &'a Point>) -> u64 {
    points
        .into_iter()
        .fold(0, |acc, point| acc ^ point.standalone_hash())
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates.len() == other.coordinates.len()
            && zip(self.iter(), other.iter()).all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinates.len().hash(state);
        for coordinate in self.iter() {
            coordinate.to_bits().hash(state);
        }
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        zip(self.iter(), other.iter())
            .map(|(a, b)| a.total_cmp(b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| self.coordinates.len().cmp(&other.coordinates.len()))
    }
}

impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl FromIterator<f64> for Point {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<f64>> for Point {
    fn from(coordinates: Vec<f64>) -> Self {
        Self::new(coordinates)
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(array: [f64; N]) -> Self {
        Self::new(array.to_vec())
    }
}

impl From<&[f64]> for Point {
    fn from(slice: &[f64]) -> Self {
        Self::new(slice.to_vec())
    }
}

impl From<Point> for Vec<f64> {
    fn from(point: Point) -> Self {
        point.coordinates
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, coord) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coord)?;
        }
        write!(f, ")")
    }
}
