// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use super::point::xor_fold;
use super::simplex::write_points;
use crate::{Point, Simplex, SimplicialError};

/// A clique of points of a point cloud, optionally tagged with the rank `k`
/// at which it was discovered (for instance, the `k` of a mutual
/// `k`-nearest-neighbour graph). A clique without a rank is *unborn*.
///
/// The points form a set: repeated points are collapsed on construction. The
/// size and the diameter (largest pairwise Euclidean distance, or zero for
/// fewer than two points) are computed once on construction.
///
/// Two cliques are equal when they have the same points and the same rank,
/// and the hash accounts for both.
///
/// # Examples
///
/// ```rust
/// use simplicial::{Clique, Point};
///
/// let clique = Clique::new(
///     [Point::from([0.0, 0.0]), Point::from([3.0, 0.0]), Point::from([0.0, 4.0])],
///     Some(2),
/// )
/// .unwrap();
///
/// assert_eq!(clique.size(), 3);
/// assert_eq!(clique.diameter(), 5.0);
/// assert_eq!(clique.k(), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct Clique {
    points: Vec<Point>,
    k: Option<u32>,
    diameter: f64,
}

impl Clique {
    /// Create a clique of `points` born at rank `k`.
    ///
    /// Returns [`SimplicialError::DimensionMismatch`] if the points do not all
    /// share the ambient dimension of the first point, as their distances
    /// would be undefined. An empty collection is accepted.
    pub fn new<I>(points: I, k: Option<u32>) -> Result<Self, SimplicialError>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points: Vec<Point> = points.into_iter().collect();

        if let Some(first) = points.first() {
            let expected = first.ambient_dimension();
            if let Some(point) = points
                .iter()
                .find(|point| point.ambient_dimension() != expected)
            {
                debug!("Rejecting clique: point {point} is not of ambient dimension {expected}");
                return Err(SimplicialError::DimensionMismatch {
                    expected,
                    found: point.ambient_dimension(),
                });
            }
        }

        points.sort();
        points.dedup();

        let mut diameter: f64 = 0.0;
        for (i, p) in points.iter().enumerate() {
            for q in &points[i + 1..] {
                diameter = diameter.max(p.distance(q));
            }
        }
        trace!(
            "Constructed {}-clique with diameter {diameter} at k = {k:?}",
            points.len()
        );

        Ok(Self {
            points,
            k,
            diameter,
        })
    }

    /// The distinct points of the clique, in sorted order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The number of distinct points in the clique.
    #[must_use]
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// The rank at which the clique appeared, if any.
    #[must_use]
    pub fn k(&self) -> Option<u32> {
        self.k
    }

    /// Whether the clique has been assigned a rank.
    #[must_use]
    pub fn is_born(&self) -> bool {
        self.k.is_some()
    }

    /// The largest distance between two points of the clique.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// The simplex spanned by the points of the clique.
    #[must_use]
    pub fn to_simplex(&self) -> Simplex {
        Simplex::from_canonical(self.points.clone())
    }
}

impl PartialEq for Clique {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points && self.k == other.k
    }
}

impl Eq for Clique {}

impl Hash for Clique {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(xor_fold(&self.points));
        self.k.hash(state);
    }
}

impl Display for Clique {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-clique with points ", self.size())?;
        write_points(f, &self.points)?;
        match self.k {
            Some(k) => write!(f, " born at k = {k}"),
            None => write!(f, " (unborn)"),
        }
    }
}

impl Serialize for Clique {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (&self.points, self.k).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Clique {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (points, k) = <(Vec<Point>, Option<u32>)>::deserialize(deserializer)?;
        Clique::new(points, k).map_err(D::Error::custom)
    }
}
