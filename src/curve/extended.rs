//! Extended twisted Edwards coordinates `(X, Y, T, Z)`, `X*Y = T*Z`.
//!
//! Every [`ExtendedPoint`] this module hands out or accepts stores its
//! coordinates as Montgomery-domain [`FieldElement`]s.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::curve::affine::AffinePoint;
use crate::curve::projective::ProjectivePoint;
use crate::field::FieldElement;
use crate::field::constants::{
    D_MONT, GENERATOR_T_MONT, GENERATOR_X_MONT, GENERATOR_Y_MONT, TWO_D_MONT,
};

/// A point in extended twisted Edwards coordinates.
#[derive(Copy, Clone, Debug)]
pub struct ExtendedPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) t: FieldElement,
    pub(crate) z: FieldElement,
}

impl ConstantTimeEq for ExtendedPoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        let xz = self.x * other.z;
        let zx = other.x * self.z;
        let yz = self.y * other.z;
        let zy = other.y * self.z;
        xz.ct_eq(&zx) & yz.ct_eq(&zy)
    }
}

impl PartialEq for ExtendedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ExtendedPoint {}

impl ConditionallySelectable for ExtendedPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            t: FieldElement::conditional_select(&a.t, &b.t, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl Default for ExtendedPoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ExtendedPoint {
    /// The identity element, `(0, 1, 0, 1)`.
    pub const IDENTITY: ExtendedPoint = ExtendedPoint {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        t: FieldElement::ZERO,
        z: FieldElement::ONE,
    };

    /// The prime-order generator (spec.md §8 scenario 1).
    pub const GENERATOR: ExtendedPoint = ExtendedPoint {
        x: FieldElement(GENERATOR_X_MONT),
        y: FieldElement(GENERATOR_Y_MONT),
        t: FieldElement(GENERATOR_T_MONT),
        z: FieldElement::ONE,
    };

    /// Checks `(Y^2 - X^2)*Z^2 = Z^4 + d*X^2*Y^2` and `X*Y = T*Z`.
    pub fn is_on_curve(&self) -> bool {
        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();
        let lhs = (yy - xx) * zz;
        let rhs = zz.square() + FieldElement(D_MONT) * xx * yy;
        lhs == rhs && self.x * self.y == self.t * self.z
    }

    /// `(-X, Y, -T, Z)`.
    pub fn negate(&self) -> ExtendedPoint {
        ExtendedPoint {
            x: -self.x,
            y: self.y,
            t: -self.t,
            z: self.z,
        }
    }

    /// Drops `T`, landing on the three-coordinate scratch representation
    /// the doubling formula operates on.
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    /// Dedicated doubling, dbl-2008-bbjlp (spec.md §4.6), routed through
    /// [`ProjectivePoint::double`].
    pub fn double(&self) -> ExtendedPoint {
        self.to_projective().double()
    }

    /// Unified addition, add-2008-hwcd-3 (spec.md §4.6).
    pub fn add(&self, other: &ExtendedPoint) -> ExtendedPoint {
        let a = (self.y - self.x) * (other.y - other.x);
        let b = (self.y + self.x) * (other.y + other.x);
        let c = self.t * FieldElement(TWO_D_MONT) * other.t;
        let d = self.z * other.z.double();
        let e = b - a;
        let f = d - c;
        let g = d + c;
        let h = b + a;

        ExtendedPoint {
            x: e * f,
            y: g * h,
            t: e * h,
            z: f * g,
        }
    }

    /// `self - other`.
    pub fn sub(&self, other: &ExtendedPoint) -> ExtendedPoint {
        self.add(&other.negate())
    }

    /// Converts to affine coordinates by computing `Z^{-1}` via
    /// [`FieldElement::invert_mont_up`] (spec.md §4.7).
    pub fn to_affine(&self) -> AffinePoint {
        let z_inv = self.z.invert_mont_up();
        AffinePoint {
            x: self.x * z_inv,
            y: self.y * z_inv,
        }
    }
}
