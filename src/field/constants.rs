//! Field constants for Jubjub's base field, the BLS12-381 scalar field
//!
//! `p = 0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001`
//!
//! All arrays are little-endian limbs (`[0]` is least significant).

/// The modulus `p`.
pub(crate) const MODULUS: [u64; 4] = [
    0xffffffff00000001,
    0x53bda402fffe5bfe,
    0x3339d80809a1d805,
    0x73eda753299d7d48,
];

/// `p - 2`, cached for Fermat-style inversion (unused by the two
/// inversion algorithms this crate implements, kept for parity with the
/// reference field's precomputed constant table).
pub(crate) const MODULUS_MINUS_TWO: [u64; 4] = [
    0xfffffffeffffffff,
    0x53bda402fffe5bfe,
    0x3339d80809a1d805,
    0x73eda753299d7d48,
];

/// `inp = -p^{-1} mod 2^64`, the single-limb Montgomery constant.
pub(crate) const INP: u64 = 0xffff_fffe_ffff_ffff;

/// `R1 = R mod p` where `R = 2^256`. The multiplicative identity in
/// Montgomery form.
pub(crate) const R1: [u64; 4] = [
    0x00000001fffffffe,
    0x5884b7fa00034802,
    0x998c4fefecbc4ff5,
    0x1824b159acc5056f,
];

/// `R2 = R^2 mod p`, used to enter Montgomery form.
pub(crate) const R2: [u64; 4] = [
    0xc999e990f3f29c6d,
    0x2b6cedcb87925c23,
    0x05d314967254398f,
    0x0748d9d99f59ff11,
];

/// `R3 = R^3 mod p`.
pub(crate) const R3: [u64; 4] = [
    0xc62c1807439b73af,
    0x1b3e0d188cf06990,
    0x73d13c71c7b5f418,
    0x6e2a5bb9c8db33e9,
];

/// `Rinv = R^{-1} mod p`.
pub(crate) const RINV: [u64; 4] = [
    0x13f75b69fe75c040,
    0xab6fca8f09dc705f,
    0x7204078a4f77266a,
    0x1bbe869330009d57,
];

/// Jubjub's twisted Edwards `d` parameter, in standard (non-Montgomery)
/// domain.
pub(crate) const D_STANDARD: [u64; 4] = [
    0x01065fd6d6343eb1,
    0x292d7f6d37579d26,
    0xf5fd9207e6bd7fd4,
    0x2a9318e74bfa2b48,
];

/// `2 * d mod p`, in standard (non-Montgomery) domain.
pub(crate) const TWO_D_STANDARD: [u64; 4] = [
    0x020cbfadac687d62,
    0x525afeda6eaf3a4c,
    0xebfb240fcd7affa8,
    0x552631ce97f45691,
];

/// `d * R mod p` — the twisted Edwards `d` parameter pre-encoded into
/// Montgomery form, since every [`crate::field::FieldElement`] the group
/// law touches lives in that domain.
pub(crate) const D_MONT: [u64; 4] = [
    0x2a522455b974f6b0,
    0xfc6cc9ef0d9acab3,
    0x7a08fb94c27628d1,
    0x57f8f6a8fe0e262e,
];

/// `2d * R mod p`, Montgomery form of [`TWO_D_STANDARD`].
pub(crate) const TWO_D_MONT: [u64; 4] = [
    0x54a448ac72e9ed5f,
    0xa51befdb1b373967,
    0xc0d81f217b4a799e,
    0x3c0445fed27ecf14,
];

/// Montgomery form of the prime-order generator's `x` coordinate
/// (`spec.md` §8 scenario 1).
pub(crate) const GENERATOR_X_MONT: [u64; 4] = [
    0x36d32c5896c2f1c5,
    0x56f8ca079b9bc5f6,
    0x98e8d1d8a8683c8d,
    0x015ad7c5e2e165cc,
];

/// Montgomery form of the prime-order generator's `y` coordinate.
pub(crate) const GENERATOR_Y_MONT: [u64; 4] = [
    0xfe0637f4ed09b09f,
    0x5ad237c95e4b2d2c,
    0xd943ede0fed9a448,
    0x5e2655b261c9d780,
];

/// Montgomery form of the generator's extended-coordinate `t = x*y`.
pub(crate) const GENERATOR_T_MONT: [u64; 4] = [
    0x33660004481a4091,
    0x1a05eb64d68ff1f2,
    0x00384ae179e23e96,
    0x70ffecca7de90513,
];

/// Subgroup order `q`, little-endian limbs (shared with [`crate::scalar`]).
pub(crate) const SUBGROUP_ORDER: [u64; 4] = [
    0xd0970e5ed6f72cb7,
    0xa6682093ccc81082,
    0x06673b0101343b00,
    0x0e7db4ea6533afa9,
];
