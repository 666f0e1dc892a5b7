// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `simplicial` crate provides the combinatorial algebra underlying
//! topological data analysis of point clouds: cliques of points, simplices
//! spanned by points, and chains of simplices with coefficients in the
//! two-element field together with their boundary operator.
//!
//! Discovering cliques, loading point clouds and computing homology or
//! persistence are left to the caller; this crate defines the values those
//! steps exchange.

#![warn(missing_docs)]

pub use crate::algebra::{
    Additive, AlgebraicBase, FieldLike, Mod2, ModuleLike, Multiplicative, RingLike,
};
pub use crate::complexes::{Chain, Clique, Point, Simplex, SimplicialError};

mod algebra;
mod complexes;
