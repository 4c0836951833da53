//! The Jubjub twisted Edwards curve over `F_p` (see `crate::field`).
//!
//! Mirrors the teacher's `curve::twedwards` layout: one module per point
//! representation, plus a façade module (`jubjub`) bundling the curve
//! parameters and the operations that drive them.

pub mod affine;
pub mod extended;
pub mod jubjub;
pub mod projective;

pub use affine::AffinePoint;
pub use extended::ExtendedPoint;
pub use jubjub::Jubjub;
pub use projective::ProjectivePoint;
