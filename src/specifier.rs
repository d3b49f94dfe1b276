//! Pointer, reference and array specifiers for type names.
//!
//! A type name may be decorated with a sequence of specifiers describing derived types:
//! `System.Int32[,]*&` is "reference to pointer to two-dimensional array of `System.Int32`".
//! Specifiers are stored in textual left-to-right order, which means the *last* entry is
//! the outermost applied type.
//!
//! Rendering is canonical: a rank-1 array always renders as `[]`, even when it was parsed
//! from the non-zero-lower-bound form `[*]`.

use std::fmt;

/// A single pointer, reference or array modifier applied to a type name.
///
/// Specifiers are immutable value entries; a [`crate::TypeIdentifier`] holds them in the
/// order they appear in text. For `T[,]*` the stored order is `[Array(2), Pointer]` and
/// the described type is "pointer to array `[,]` of `T`".
///
/// # Examples
///
/// ```rust
/// use dotname::TypeSpecifier;
///
/// assert_eq!(TypeSpecifier::Pointer.to_string(), "*");
/// assert_eq!(TypeSpecifier::Reference.to_string(), "&");
/// assert_eq!(TypeSpecifier::Array(1).to_string(), "[]");
/// assert_eq!(TypeSpecifier::Array(3).to_string(), "[,,]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeSpecifier {
    /// Pointer specifier (`*`).
    Pointer,
    /// By-reference specifier (`&`).
    Reference,
    /// Array specifier with the given rank (`[]`, `[,]`, `[,,]`, ...).
    ///
    /// The rank is the number of dimensions and is always at least 1; it renders
    /// as `rank - 1` commas between brackets.
    Array(u32),
}

impl TypeSpecifier {
    /// Returns `true` if this is an array specifier.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, TypeSpecifier::Array(_))
    }

    /// Returns `true` if this is a pointer specifier.
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(self, TypeSpecifier::Pointer)
    }

    /// Returns `true` if this is a by-reference specifier.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        matches!(self, TypeSpecifier::Reference)
    }
}

impl fmt::Display for TypeSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpecifier::Pointer => f.write_str("*"),
            TypeSpecifier::Reference => f.write_str("&"),
            TypeSpecifier::Array(rank) => {
                f.write_str("[")?;
                for _ in 1..*rank {
                    f.write_str(",")?;
                }
                f.write_str("]")
            }
        }
    }
}
