// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The two-element field `Mod2`, the coefficient field of every chain in
//! this crate.

use std::convert::From;
use std::fmt::{Display, Error, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::algebra::traits::{FieldLike, RingLike};

/// The field of integers modulo 2.
///
/// Addition is exclusive or and multiplication is conjunction, so every
/// element is its own additive inverse. This is the algebraic reason a chain
/// added to itself vanishes.
///
/// # Examples
/// ```rust
/// use simplicial::{Mod2, RingLike};
/// assert_eq!(Mod2::from(5), Mod2::one());
/// assert_eq!(Mod2::one() + Mod2::one(), Mod2::zero());
/// assert_eq!(-Mod2::one(), Mod2::one());
/// ```
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mod2 {
    value: bool,
}

impl Mod2 {
    /// Create a new `Mod2` instance with the given value modulo 2.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self {
            value: value % 2 == 1,
        }
    }

    /// The canonical integer representative, either 0 or 1.
    #[must_use]
    pub fn remainder(&self) -> u64 {
        u64::from(self.value)
    }
}

impl From<u64> for Mod2 {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<bool> for Mod2 {
    fn from(value: bool) -> Self {
        Self { value }
    }
}

impl RingLike for Mod2 {
    fn zero() -> Self {
        Self { value: false }
    }

    fn one() -> Self {
        Self { value: true }
    }

    fn is_invertible(&self) -> bool {
        self.value
    }

    fn invert(&self) -> Self {
        assert!(self.value, "attempting to invert equivalency class zero");
        *self
    }
}

impl FieldLike for Mod2 {}

impl Display for Mod2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{} (mod 2)", self.remainder())
    }
}

impl Neg for Mod2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self
    }
}

impl AddAssign for Mod2 {
    fn add_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

impl Add for Mod2 {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

// Subtraction and addition coincide in characteristic 2.
impl SubAssign for Mod2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

impl Sub for Mod2 {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl MulAssign for Mod2 {
    fn mul_assign(&mut self, rhs: Self) {
        self.value &= rhs.value;
    }
}

impl Mul for Mod2 {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}
