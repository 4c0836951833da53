//! The 256-bit prime field `F_p` underlying Jubjub (see `crate::scalar` for
//! the scalar field `F_q`).

pub(crate) mod constants;
mod element;
mod limbs;

pub use element::FieldElement;
