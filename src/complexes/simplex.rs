// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::point::xor_fold;
use crate::{Chain, Point, SimplicialError};

/// A simplex spanned by a finite set of points.
///
/// The points are kept in the order given at construction, which is the order
/// used by [`Simplex::points`], [`Simplex::faces`] and the `Display`
/// implementation. Identity is set-based: two simplices with the same points
/// listed in a different order are equal and hash identically.
///
/// The dimension of a simplex is its *point count*, so a triangle has
/// dimension 3 and an edge dimension 2. Collaborators rely on this convention;
/// subtract one for the geometric dimension.
///
/// # Examples
///
/// ```rust
/// use simplicial::{Point, Simplex};
///
/// let a = Point::from([0.0, 0.0]);
/// let b = Point::from([1.0, 0.0]);
/// let c = Point::from([0.0, 1.0]);
///
/// let triangle = Simplex::new([a.clone(), b.clone(), c.clone()]).unwrap();
/// assert_eq!(triangle.dimension(), 3);
/// assert_eq!(triangle, Simplex::new([c.clone(), a.clone(), b.clone()]).unwrap());
///
/// let faces = triangle.faces();
/// assert_eq!(faces.len(), 3);
/// assert_eq!(faces[0], Simplex::new([b, c]).unwrap());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Simplex {
    points: Vec<Point>,
    /// The points sorted, giving equality and ordering independent of the
    /// construction order.
    canonical: Vec<Point>,
}

impl Simplex {
    /// Create a simplex from `points`.
    ///
    /// Returns [`SimplicialError::DimensionMismatch`] if the points do not all
    /// share the ambient dimension of the first point, and
    /// [`SimplicialError::DuplicatePoint`] if a point is listed twice. An
    /// empty collection is accepted and yields a simplex of dimension 0 with
    /// no faces.
    pub fn new<I>(points: I) -> Result<Self, SimplicialError>
    where
        I: IntoIterator<Item = Point>,
    {
        let points: Vec<Point> = points.into_iter().collect();

        if let Some(first) = points.first() {
            let expected = first.ambient_dimension();
            if let Some(point) = points
                .iter()
                .find(|point| point.ambient_dimension() != expected)
            {
                debug!("Rejecting simplex: point {point} is not of ambient dimension {expected}");
                return Err(SimplicialError::DimensionMismatch {
                    expected,
                    found: point.ambient_dimension(),
                });
            }
        }

        let mut canonical = points.clone();
        canonical.sort();
        if let Some(pair) = canonical.windows(2).find(|pair| pair[0] == pair[1]) {
            debug!("Rejecting simplex: point {} is repeated", pair[0]);
            return Err(SimplicialError::DuplicatePoint(pair[0].clone()));
        }

        Ok(Self { points, canonical })
    }

    /// Build a simplex from points that are already sorted, distinct and of
    /// equal ambient dimension.
    pub(crate) fn from_canonical(points: Vec<Point>) -> Self {
        Self {
            canonical: points.clone(),
            points,
        }
    }

    /// The number of points spanning the simplex.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.points.len()
    }

    /// The points of the simplex in construction order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Check whether `point` is a vertex of the simplex.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        self.canonical.binary_search(point).is_ok()
    }

    /// The codimension-1 faces of the simplex: the `i`-th face omits the
    /// `i`-th point and keeps the relative order of the others. Simplices with
    /// at most one point have no faces.
    #[must_use]
    pub fn faces(&self) -> Vec<Simplex> {
        if self.points.len() <= 1 {
            return Vec::new();
        }
        (0..self.points.len())
            .map(|index| self.face_without(index))
            .collect()
    }

    /// The boundary of the simplex: the chain of its faces.
    #[must_use]
    pub fn boundary(&self) -> Chain {
        Chain::from_validated(self.faces())
    }

    fn face_without(&self, index: usize) -> Simplex {
        let removed = &self.points[index];
        let points = self
            .points
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != index)
            .map(|(_, point)| point.clone())
            .collect();
        let canonical = self
            .canonical
            .iter()
            .filter(|point| *point != removed)
            .cloned()
            .collect();

        Simplex { points, canonical }
    }
}

impl PartialEq for Simplex {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Simplex {}

impl Hash for Simplex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(xor_fold(&self.points));
    }
}

impl PartialOrd for Simplex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Simplex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

impl TryFrom<Vec<Point>> for Simplex {
    type Error = SimplicialError;

    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Simplex> for Vec<Point> {
    fn from(simplex: Simplex) -> Self {
        simplex.points
    }
}

pub(crate) fn write_points(f: &mut Formatter<'_>, points: &[Point]) -> fmt::Result {
    write!(f, "[")?;
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", point)?;
    }
    write!(f, "]")
}

impl Display for Simplex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-simplex with points ", self.dimension())?;
        write_points(f, &self.points)
    }
}
