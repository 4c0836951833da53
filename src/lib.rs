#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![allow(non_snake_case)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    clippy::mod_module_files,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    unused_attributes,
    unused_imports,
    unused_mut,
    unused_must_use
)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

pub use rand_core;
pub use subtle;

pub mod curve;
pub mod error;
pub mod field;
pub mod scalar;

pub use curve::{AffinePoint, ExtendedPoint, Jubjub, ProjectivePoint};
pub use error::Error;
pub use field::FieldElement;
pub use scalar::Scalar;
