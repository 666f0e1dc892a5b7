// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Chains of simplices with coefficients in the two-element field.
//!
//! A [`Chain`] is a formal sum `s_1 + s_2 + ... + s_n` of distinct simplices
//! sharing a common dimension. With coefficients modulo 2, each simplex is
//! either present or absent, so a chain is stored as a set and chain addition
//! is the symmetric difference of the two sets. A simplex occurring in both
//! summands cancels, and in particular every chain is its own inverse.
//!
//! The boundary operator sends a chain to the sum of the boundaries of its
//! simplices, each of which is the sum of that simplex's faces. Applying it
//! twice always yields the empty chain, as every codimension-2 face is reached
//! through exactly two codimension-1 faces.
//!
//! # Examples
//!
//! ```rust
//! use simplicial::{Chain, Point, Simplex};
//!
//! let a = Point::from([0.0, 0.0]);
//! let b = Point::from([1.0, 0.0]);
//! let c = Point::from([0.0, 1.0]);
//! let edge = |p: &Point, q: &Point| Simplex::new([p.clone(), q.clone()]).unwrap();
//!
//! let triangle = Chain::from(Simplex::new([a.clone(), b.clone(), c.clone()]).unwrap());
//! let outline = Chain::new([edge(&b, &c), edge(&a, &c), edge(&a, &b)]).unwrap();
//!
//! assert_eq!(triangle.boundary(), outline);
//! assert!(outline.is_cycle());
//! assert!(triangle.boundary().boundary().is_empty());
//! assert!((outline.clone() + outline).is_empty());
//! ```

use std::collections::{HashSet, hash_set};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::{Map, Sum};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use super::simplex::write_points;
use crate::{ModuleLike, Mod2, RingLike, Simplex, SimplicialError};

/// A mod-2 chain: a finite set of simplices of equal dimension.
///
/// The empty chain is the additive identity and has no dimension; see
/// [`Chain::dimension`]. Chains are immutable values under the public
/// operations: [`Chain::boundary`] and the arithmetic operators return new
/// chains.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chain {
    simplices: HashSet<Simplex>,
}

type UnitCoefficient<'a> = fn(&'a Simplex) -> (&'a Simplex, Mod2);

fn with_unit_coefficient(simplex: &Simplex) -> (&Simplex, Mod2) {
    (simplex, Mod2::one())
}

impl Chain {
    /// Create a chain from `simplices`. Repeated simplices collapse to a
    /// single occurrence.
    ///
    /// Returns [`SimplicialError::DimensionMismatch`] if the simplices do not
    /// all have the dimension of the first one. An empty collection always
    /// succeeds.
    pub fn new<I>(simplices: I) -> Result<Self, SimplicialError>
    where
        I: IntoIterator<Item = Simplex>,
    {
        let mut expected = None;
        let mut set = HashSet::new();
        for simplex in simplices {
            let found = simplex.dimension();
            match expected {
                None => expected = Some(found),
                Some(expected) if expected != found => {
                    debug!("Rejecting chain: {simplex} does not have dimension {expected}");
                    return Err(SimplicialError::DimensionMismatch { expected, found });
                }
                Some(_) => {}
            }
            set.insert(simplex);
        }

        Ok(Self { simplices: set })
    }

    /// The empty chain.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a chain from simplices already known to share a dimension.
    pub(crate) fn from_validated(simplices: impl IntoIterator<Item = Simplex>) -> Self {
        Self {
            simplices: simplices.into_iter().collect(),
        }
    }

    /// The common dimension (point count) of the simplices in the chain.
    ///
    /// The empty chain has no dimension and returns
    /// [`SimplicialError::UndefinedDimension`].
    pub fn dimension(&self) -> Result<usize, SimplicialError> {
        self.simplices
            .iter()
            .next()
            .map(Simplex::dimension)
            .ok_or(SimplicialError::UndefinedDimension)
    }

    /// The number of simplices in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    /// Check whether the chain is the empty chain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    /// Check whether `simplex` occurs in the chain.
    #[must_use]
    pub fn contains(&self, simplex: &Simplex) -> bool {
        self.simplices.contains(simplex)
    }

    /// The simplices of the chain, sorted by their point sets.
    #[must_use]
    pub fn simplices(&self) -> Vec<&Simplex> {
        let mut simplices: Vec<_> = self.simplices.iter().collect();
        simplices.sort();
        simplices
    }

    /// The boundary of the chain: the mod-2 sum of the boundaries of its
    /// simplices. The boundary of a chain of dimension `n > 1` has dimension
    /// `n - 1`; chains of single points (and the empty chain) have the empty
    /// chain as boundary.
    #[must_use]
    pub fn boundary(&self) -> Chain {
        let boundary: Chain = self.simplices.iter().map(Simplex::boundary).sum();
        trace!(
            "Boundary of a chain of {} simplices has {} simplices",
            self.len(),
            boundary.len()
        );
        boundary
    }

    /// Check whether the chain is a cycle, i.e. has empty boundary.
    #[must_use]
    pub fn is_cycle(&self) -> bool {
        self.boundary().is_empty()
    }

    /// Add `other` to `self`, returning
    /// [`SimplicialError::DimensionMismatch`] if both chains are nonempty and
    /// of different dimensions. The `+` operator panics in that case instead.
    pub fn try_add(&self, other: &Chain) -> Result<Chain, SimplicialError> {
        self.check_summand(other)?;
        let mut sum = self.clone();
        sum.toggle_all(other.simplices.iter().cloned());
        Ok(sum)
    }

    fn check_summand(&self, other: &Chain) -> Result<(), SimplicialError> {
        match (self.dimension(), other.dimension()) {
            (Ok(expected), Ok(found)) if expected != found => {
                Err(SimplicialError::DimensionMismatch { expected, found })
            }
            _ => Ok(()),
        }
    }

    /// Symmetric difference with `simplices`, which must match the dimension
    /// of `self` unless `self` is empty.
    fn toggle_all(&mut self, simplices: impl IntoIterator<Item = Simplex>) {
        for simplex in simplices {
            if !self.simplices.remove(&simplex) {
                self.simplices.insert(simplex);
            }
        }
    }
}

impl From<Simplex> for Chain {
    fn from(simplex: Simplex) -> Self {
        Self::from_validated([simplex])
    }
}

impl TryFrom<Vec<Simplex>> for Chain {
    type Error = SimplicialError;

    fn try_from(simplices: Vec<Simplex>) -> Result<Self, Self::Error> {
        Self::new(simplices)
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Simplex;
    type IntoIter = hash_set::Iter<'a, Simplex>;

    fn into_iter(self) -> Self::IntoIter {
        self.simplices.iter()
    }
}

impl ModuleLike for Chain {
    type Cell = Simplex;
    type Iter<'a>
        = Map<hash_set::Iter<'a, Simplex>, UnitCoefficient<'a>>
    where
        Self: 'a;
    type Ring = Mod2;

    fn new() -> Self {
        Self::empty()
    }

    fn clear(&mut self) {
        self.simplices.clear();
    }

    fn coef(&self, cell: &Simplex) -> Mod2 {
        Mod2::from(self.simplices.contains(cell))
    }

    /// # Panics
    /// Panics if `coef` is one and `cell` does not match the dimension of a
    /// nonempty `self`.
    fn insert_or_add(&mut self, cell: Simplex, coef: Mod2) {
        if coef.is_invertible() {
            *self += Chain::from(cell);
        }
    }

    fn scalar_mul(mut self, coef: Mod2) -> Self {
        if !coef.is_invertible() {
            self.clear();
        }
        self
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.simplices
            .iter()
            .map(with_unit_coefficient as UnitCoefficient<'_>)
    }
}

/// # Panics
/// Panics if both chains are nonempty and of different dimensions; use
/// [`Chain::try_add`] to handle that case.
impl AddAssign for Chain {
    fn add_assign(&mut self, rhs: Self) {
        if let Err(error) = self.check_summand(&rhs) {
            panic!("cannot add chains of different dimensions: {error}");
        }
        self.toggle_all(rhs.simplices);
    }
}

impl Add for Chain {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

// Every chain is its own additive inverse.
impl Neg for Chain {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self
    }
}

impl SubAssign for Chain {
    fn sub_assign(&mut self, rhs: Self) {
        *self += rhs;
    }
}

impl Sub for Chain {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Sum for Chain {
    fn sum<I: Iterator<Item = Chain>>(iter: I) -> Self {
        iter.fold(Chain::empty(), |acc, chain| acc + chain)
    }
}

impl Display for Chain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }

        for (i, simplex) in self.simplices().into_iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write_points(f, simplex.points())?;
        }
        Ok(())
    }
}

impl Serialize for Chain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.simplices().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Chain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let simplices = Vec::<Simplex>::deserialize(deserializer)?;
        Chain::new(simplices).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    fn points() -> (Point, Point, Point, Point) {
        (
            Point::from([0.0, 0.0]),
            Point::from([1.0, 0.0]),
            Point::from([0.0, 1.0]),
            Point::from([1.0, 1.0]),
        )
    }

    fn simplex(points: &[&Point]) -> Simplex {
        Simplex::new(points.iter().map(|point| (*point).clone())).unwrap()
    }

    fn create_square_edges() -> Chain {
        let (a, b, c, d) = points();
        Chain::new([
            simplex(&[&a, &b]),
            simplex(&[&b, &d]),
            simplex(&[&d, &c]),
            simplex(&[&c, &a]),
        ])
        .unwrap()
    }

    #[test]
    fn construction() {
        let (a, b, c, _) = points();
        let chain = Chain::new([simplex(&[&a, &b]), simplex(&[&b, &c])]).unwrap();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.dimension(), Ok(2));
        assert!(chain.contains(&simplex(&[&b, &a])));
        assert!(!chain.contains(&simplex(&[&a, &c])));
    }

    #[test]
    fn repeated_simplices_collapse() {
        let (a, b, _, _) = points();
        let chain = Chain::new([simplex(&[&a, &b]), simplex(&[&b, &a])]).unwrap();
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let (a, b, c, _) = points();
        assert_eq!(
            Chain::new([simplex(&[&a, &b]), simplex(&[&a, &b, &c])]),
            Err(SimplicialError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn empty_chain_has_no_dimension() {
        let empty = Chain::new(Vec::new()).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty, Chain::empty());
        assert_eq!(empty.dimension(), Err(SimplicialError::UndefinedDimension));
        assert!(empty.boundary().is_empty());
        assert!(empty.is_cycle());
    }

    #[test]
    fn addition_is_symmetric_difference() {
        let (a, b, c, _) = points();
        let first = Chain::new([simplex(&[&a, &b]), simplex(&[&b, &c])]).unwrap();
        let second = Chain::new([simplex(&[&b, &c]), simplex(&[&a, &c])]).unwrap();

        let sum = first.clone() + second.clone();
        assert_eq!(
            sum,
            Chain::new([simplex(&[&a, &b]), simplex(&[&a, &c])]).unwrap()
        );
        assert_eq!(sum, second.clone() + first.clone());
        assert_eq!(first.clone() - second.clone(), sum);
        assert_eq!(-first.clone(), first);
    }

    #[test]
    fn addition_identity_and_inverse() {
        let chain = create_square_edges();
        assert_eq!(chain.clone() + Chain::empty(), chain);
        assert_eq!(Chain::empty() + chain.clone(), chain);
        assert!((chain.clone() + chain.clone()).is_empty());

        let mut accumulated = chain.clone();
        accumulated += chain;
        assert_eq!(accumulated, Chain::empty());
    }

    #[test]
    fn addition_is_associative() {
        let (a, b, c, d) = points();
        let x = Chain::new([simplex(&[&a, &b]), simplex(&[&c, &d])]).unwrap();
        let y = Chain::new([simplex(&[&c, &d]), simplex(&[&b, &d])]).unwrap();
        let z = Chain::new([simplex(&[&a, &b]), simplex(&[&a, &c])]).unwrap();

        assert_eq!(
            (x.clone() + y.clone()) + z.clone(),
            x.clone() + (y.clone() + z.clone())
        );
        assert_eq!(
            [x.clone(), y.clone(), z.clone()].into_iter().sum::<Chain>(),
            x + y + z
        );
    }

    #[test]
    fn try_add_checks_dimensions() {
        let (a, b, c, _) = points();
        let edges = Chain::new([simplex(&[&a, &b])]).unwrap();
        let triangles = Chain::new([simplex(&[&a, &b, &c])]).unwrap();

        assert_eq!(
            edges.try_add(&triangles),
            Err(SimplicialError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(edges.try_add(&Chain::empty()), Ok(edges.clone()));
        assert_eq!(Chain::empty().try_add(&triangles), Ok(triangles));
        assert_eq!(edges.try_add(&edges), Ok(Chain::empty()));
    }

    #[test]
    #[should_panic(expected = "cannot add chains of different dimensions")]
    fn operator_addition_panics_on_mismatched_dimensions() {
        let (a, b, c, _) = points();
        let _ = Chain::from(simplex(&[&a, &b])) + Chain::from(simplex(&[&a, &b, &c]));
    }

    #[test]
    fn boundary_of_triangle() {
        let (a, b, c, _) = points();
        let triangle = Chain::from(simplex(&[&a, &b, &c]));
        let boundary = triangle.boundary();

        assert_eq!(
            boundary,
            Chain::new([
                simplex(&[&b, &c]),
                simplex(&[&a, &c]),
                simplex(&[&a, &b])
            ])
            .unwrap()
        );
        assert_eq!(boundary.dimension(), Ok(2));
        assert!(boundary.boundary().is_empty());
        assert!(!triangle.is_cycle());
        assert_eq!(triangle.boundary(), boundary);
    }

    #[test]
    fn shared_faces_cancel() {
        let (a, b, c, d) = points();
        let square = Chain::new([simplex(&[&a, &b, &d]), simplex(&[&a, &d, &c])]).unwrap();

        // The diagonal ad is shared and cancels.
        assert_eq!(square.boundary(), create_square_edges());
        assert!(square.boundary().is_cycle());
    }

    #[test]
    fn cycles_and_non_cycles() {
        let (a, b, c, _) = points();
        assert!(create_square_edges().is_cycle());

        let path = Chain::new([simplex(&[&a, &b]), simplex(&[&b, &c])]).unwrap();
        assert!(!path.is_cycle());
        assert_eq!(
            path.boundary(),
            Chain::new([simplex(&[&a]), simplex(&[&c])]).unwrap()
        );

        let vertices = Chain::new([simplex(&[&a]), simplex(&[&b])]).unwrap();
        assert!(vertices.is_cycle());
    }

    #[test]
    fn module_interface() {
        let (a, b, c, _) = points();
        let ab = simplex(&[&a, &b]);
        let bc = simplex(&[&b, &c]);

        let mut chain = <Chain as ModuleLike>::new();
        chain.insert_or_add(ab.clone(), Mod2::one());
        chain.insert_or_add(bc.clone(), Mod2::one());
        chain.insert_or_add(bc.clone(), Mod2::zero());
        assert_eq!(chain.coef(&ab), Mod2::one());
        assert_eq!(chain.coef(&bc), Mod2::one());

        chain.insert_or_add(ab.clone(), Mod2::one());
        assert_eq!(chain.coef(&ab), Mod2::zero());

        let collected: Vec<_> = ModuleLike::iter(&chain).collect();
        assert_eq!(collected, vec![(&bc, Mod2::one())]);

        assert_eq!(chain.clone().scalar_mul(Mod2::one()), chain);
        assert!(chain.clone().scalar_mul(Mod2::zero()).is_empty());

        chain.clear();
        assert!(chain.is_empty());
    }

    #[test]
    fn serialization_round_trip() {
        let chain = create_square_edges();
        let json = serde_json::to_string(&chain).unwrap();
        assert_eq!(serde_json::from_str::<Chain>(&json).unwrap(), chain);

        let mixed = "[[[0.0,0.0],[1.0,0.0]],[[0.0,0.0]]]";
        assert!(serde_json::from_str::<Chain>(mixed).is_err());
    }

    #[test]
    fn chains_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Chain>();

        let chain = create_square_edges();
        let boundaries: Vec<Chain> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| chain.boundary())).collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });
        assert!(boundaries.iter().all(Chain::is_empty));
    }

    #[test]
    fn display() {
        let (a, b, c, _) = points();
        assert_eq!(Chain::empty().to_string(), "0");
        let chain = Chain::new([simplex(&[&b, &c]), simplex(&[&a, &b])]).unwrap();
        assert_eq!(chain.to_string(), "[(0, 0), (1, 0)] + [(1, 0), (0, 1)]");
    }
}
