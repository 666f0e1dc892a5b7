// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub use chain::Chain;
pub use clique::Clique;
pub use error::SimplicialError;
pub use point::Point;
pub use simplex::Simplex;

mod chain;
mod clique;
mod error;
mod point;
mod simplex;
