//! The `Jubjub` façade: curve parameters plus the operations that drive
//! the point representations in `crate::curve`.

use crate::curve::affine::AffinePoint;
use crate::curve::extended::ExtendedPoint;
use crate::error::Error;
use crate::field::FieldElement;
use crate::field::constants::{D_MONT, TWO_D_MONT};
use crate::scalar::Scalar;

/// The Jubjub twisted Edwards curve, `a = -1`, over `F_p` (the BLS12-381
/// scalar field).
///
/// A zero-sized handle: curve parameters are compile-time constants
/// (spec.md §6), so there is nothing to carry at runtime. `Jubjub` exists
/// to name the curve-level operations (`Add`/`Sub`/`Mul`/`MulBase`) against
/// [`ExtendedPoint`], the representation they operate on.
#[derive(Copy, Clone, Debug, Default)]
pub struct Jubjub;

impl Jubjub {
    /// Twisted Edwards `d` parameter, Montgomery domain.
    pub const D: FieldElement = FieldElement(D_MONT);
    /// `2*d`, Montgomery domain.
    pub const TWO_D: FieldElement = FieldElement(TWO_D_MONT);
    /// The prime-order generator.
    pub const GENERATOR: ExtendedPoint = ExtendedPoint::GENERATOR;
    /// The identity element.
    pub const IDENTITY: ExtendedPoint = ExtendedPoint::IDENTITY;

    /// `P + Q`.
    pub fn add(p: &ExtendedPoint, q: &ExtendedPoint) -> ExtendedPoint {
        p.add(q)
    }

    /// `P - Q`.
    pub fn sub(p: &ExtendedPoint, q: &ExtendedPoint) -> ExtendedPoint {
        p.sub(q)
    }

    /// Variable-time left-to-right double-and-add scalar multiplication
    /// (spec.md §4.6), iterating low-bit to high-bit.
    ///
    /// Not constant-time: the sequence of doublings and conditional adds
    /// leaks `k`'s bit pattern via control flow and timing.
    pub fn mul(p: &ExtendedPoint, k: &Scalar) -> ExtendedPoint {
        let mut n = *p;
        let mut q = ExtendedPoint::IDENTITY;
        for i in 0..k.bit_length() {
            if k.bit(i) {
                q = q.add(&n);
            }
            n = n.double();
        }
        q
    }

    /// `Mul(G, k)`, the generator-based scalar multiplication.
    pub fn mul_base(k: &Scalar) -> ExtendedPoint {
        Self::mul(&Self::GENERATOR, k)
    }

    /// `P + Mul(G, k)`.
    pub fn add_base(p: &ExtendedPoint, k: &Scalar) -> ExtendedPoint {
        p.add(&Self::mul_base(k))
    }

    /// Checks the curve equation on an extended point.
    pub fn is_on_curve(p: &ExtendedPoint) -> bool {
        p.is_on_curve()
    }

    /// Parses a 64-byte uncompressed affine encoding into an extended
    /// point (`NewAffinePointFromUncompressed` composed with the
    /// affine-to-extended conversion, spec.md §6/§4.7).
    pub fn point_from_uncompressed(bytes: &[u8]) -> Result<ExtendedPoint, Error> {
        Ok(AffinePoint::from_uncompressed(bytes)?.to_extended())
    }
}
