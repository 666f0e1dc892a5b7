// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::Point;

/// Error type for the construction and inspection of cliques, simplices and
/// chains. Every variant is raised synchronously by the operation that
/// detected it; nothing is recovered internally.
#[derive(Clone, Debug, PartialEq)]
pub enum SimplicialError {
    /// Members of a collection disagree on dimension: points of a simplex or
    /// clique with differing coordinate arity, or simplices of a chain with
    /// differing point counts.
    DimensionMismatch {
        /// Dimension of the first member of the collection.
        expected: usize,
        /// Dimension of the offending member.
        found: usize,
    },

    /// A point was listed more than once when constructing a simplex.
    DuplicatePoint(Point),

    /// The dimension of the empty chain was requested.
    UndefinedDimension,
}

impl Display for SimplicialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "dimension mismatch: expected every member to have dimension {expected}, \
                    found a member of dimension {found}"
                )
            }
            Self::DuplicatePoint(point) => {
                write!(f, "the point {point} appears more than once in the simplex")
            }
            Self::UndefinedDimension => {
                write!(f, "the empty chain has no dimension")
            }
        }
    }
}

impl Error for SimplicialError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            SimplicialError::DimensionMismatch {
                expected: 2,
                found: 3
            }
            .to_string(),
            "dimension mismatch: expected every member to have dimension 2, found a member of \
            dimension 3"
        );
        assert_eq!(
            SimplicialError::DuplicatePoint(Point::from([1.0, 0.5])).to_string(),
            "the point (1, 0.5) appears more than once in the simplex"
        );
        assert_eq!(
            SimplicialError::UndefinedDimension.to_string(),
            "the empty chain has no dimension"
        );
    }
}
