//! Error types for planar operations.

use thiserror::Error;

/// Errors that can occur while parsing a vector from its string form.
///
/// Geometric operations themselves never fail; only text input does.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Input is not wrapped in a `(` `)` pair.
    #[error("expected a parenthesized pair like \"(x,y)\"")]
    MissingParens,

    /// Input has the wrong number of comma-separated components.
    #[error("expected 2 components, found {0}")]
    ComponentCount(usize),

    /// A component is not a valid floating-point number.
    #[error("invalid number \"{0}\"")]
    InvalidNumber(String),
}
