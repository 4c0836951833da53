//! The scalar field `F_q`, `q` the prime order of Jubjub's main subgroup.
//!
//! `q = 0x0e7db4ea6533afa906673b0101343b00a6682093ccc81082d0970e5ed6f72cb7`.
//! Unlike [`crate::field::FieldElement`] this type carries no Montgomery
//! encoding: it is a thin wrapper over [`crypto_bigint::U256`], addressed
//! externally only by bit index and bit length for the scalar-multiplication
//! ladder in `crate::curve`.

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crypto_bigint::{Encoding, U256};
use rand_core::TryRngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// The subgroup order `q`.
pub const ORDER: U256 =
    U256::from_be_hex("0e7db4ea6533afa906673b0101343b00a6682093ccc81082d0970e5ed6f72cb7");

/// An element of `Z/qZ`.
#[derive(Debug, Clone, Copy)]
pub struct Scalar(pub(crate) U256);

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(U256::conditional_select(&a.0, &b.0, choice))
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Scalar {
    /// The additive identity.
    pub const ZERO: Self = Self(U256::ZERO);
    /// The multiplicative identity.
    pub const ONE: Self = Self(U256::ONE);
    /// Twice the multiplicative identity.
    pub const TWO: Self = Self(U256::from_u8(2));

    /// `self + other mod q`.
    pub const fn add(&self, other: &Self) -> Self {
        Self(self.0.add_mod(&other.0, &ORDER))
    }

    /// `self - other mod q`.
    pub const fn sub(&self, other: &Self) -> Self {
        Self(self.0.sub_mod(&other.0, &ORDER))
    }

    /// `2 * self mod q`.
    pub const fn double(&self) -> Self {
        self.add(self)
    }

    /// `self * other mod q`.
    pub const fn mul(&self, other: &Self) -> Self {
        let wide = self.0.mul_wide(&other.0);
        Self(U256::const_rem_wide(wide, &ORDER).0)
    }

    /// `self * self mod q`.
    pub const fn square(&self) -> Self {
        let wide = self.0.square_wide();
        Self(U256::const_rem_wide(wide, &ORDER).0)
    }

    /// Returns the bit at `index`, `0` meaning the least significant bit.
    ///
    /// Used left-to-right (high-to-low, per spec.md's iteration order read
    /// in reverse by the caller) by the scalar multiplication ladder in
    /// `crate::curve`, which is explicitly variable-time (spec.md §5), so
    /// this reads the bit directly rather than through a constant-time
    /// selection.
    pub fn bit(&self, index: u32) -> bool {
        self.0.bit_vartime(index)
    }

    /// The number of bits needed to represent `self`, i.e. one plus the
    /// index of the highest set bit (`0` for the zero scalar).
    pub fn bit_length(&self) -> u32 {
        self.0.bits_vartime()
    }

    /// Builds a scalar from a 32-byte big-endian integer, reduced mod `q`
    /// if necessary (the scalar field has no canonical-encoding rejection
    /// the way [`crate::field::FieldElement::from_bytes`] does — spec.md §3
    /// describes it only by its externally observed operations).
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let n = U256::from_be_slice(bytes);
        Self(n.const_rem(&ORDER).0)
    }

    /// Encodes `self` as 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        let bytes = self.0.to_be_bytes();
        core::array::from_fn(|i| bytes[i])
    }

    /// Builds a scalar from a `u64`.
    pub fn from_u64(value: u64) -> Self {
        Self(U256::from_u64(value))
    }

    /// Samples uniformly from `[0, q)` by rejection sampling, mirroring
    /// [`crate::field::FieldElement::random`].
    pub fn random<R: TryRngCore + ?Sized>(rng: &mut R) -> Result<Self, R::Error> {
        loop {
            let mut bytes = [0u8; 32];
            rng.try_fill_bytes(&mut bytes)?;
            let candidate = U256::from_be_slice(&bytes);
            if candidate < ORDER {
                return Ok(Self(candidate));
            }
        }
    }
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;
    fn add(self, other: &Scalar) -> Scalar {
        Scalar::add(self, other)
    }
}
define_add_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl AddAssign<&Scalar> for Scalar {
    fn add_assign(&mut self, other: &Scalar) {
        *self = *self + other;
    }
}
impl AddAssign for Scalar {
    fn add_assign(&mut self, other: Scalar) {
        *self = *self + other;
    }
}

impl Sub<&Scalar> for &Scalar {
    type Output = Scalar;
    fn sub(self, other: &Scalar) -> Scalar {
        Scalar::sub(self, other)
    }
}
define_sub_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl SubAssign<&Scalar> for Scalar {
    fn sub_assign(&mut self, other: &Scalar) {
        *self = *self - other;
    }
}
impl SubAssign for Scalar {
    fn sub_assign(&mut self, other: Scalar) {
        *self = *self - other;
    }
}

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;
    fn mul(self, other: &Scalar) -> Scalar {
        Scalar::mul(self, other)
    }
}
define_mul_variants!(LHS = Scalar, RHS = Scalar, Output = Scalar);

impl MulAssign<&Scalar> for Scalar {
    fn mul_assign(&mut self, other: &Scalar) {
        *self = *self * other;
    }
}
impl MulAssign for Scalar {
    fn mul_assign(&mut self, other: Scalar) {
        *self = *self * other;
    }
}

impl Neg for &Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        Scalar::ZERO - self
    }
}
impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        -&self
    }
}
