//! Ingress error taxonomy.
//!
//! Internal arithmetic never fails — this is the crate's only fallible
//! surface, limited to parsing externally supplied bytes.

/// Errors returned when constructing a point or field/scalar element from
/// untrusted bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An uncompressed point encoding was not exactly 64 bytes.
    #[error("uncompressed point encoding must be exactly 64 bytes")]
    MalformedInput,
    /// The parsed coordinates do not satisfy the curve equation.
    #[error("point does not satisfy the curve equation")]
    NotOnCurve,
    /// A field or scalar byte encoding was out of range.
    #[error("invalid field or scalar encoding")]
    ParseError,
}
