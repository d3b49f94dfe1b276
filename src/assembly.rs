//! Assembly identity as carried by assembly-qualified type names.
//!
//! This module provides [`AssemblyIdentity`], the textual identity of the assembly that
//! defines a type: a simple name followed by an ordered list of `Key=Value` properties
//! (`Version`, `Culture`, `PublicKeyToken`, ...).
//!
//! Unlike a full assembly-reference model, the properties here are deliberately kept as
//! opaque key/value text. Nothing is interpreted or validated, which lets unknown or
//! vendor-specific properties round-trip verbatim and keeps this crate free of any
//! version or cryptographic-key semantics.
//!
//! # Examples
//!
//! ```rust
//! use dotname::AssemblyIdentity;
//!
//! let identity = AssemblyIdentity::parse(
//!     "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089",
//! )?;
//!
//! assert_eq!(identity.name, "mscorlib");
//! assert_eq!(identity.properties.len(), 3);
//! assert_eq!(identity.properties[0], ("Version".to_string(), "4.0.0.0".to_string()));
//! # Ok::<(), dotname::Error>(())
//! ```

use std::{fmt, fmt::Write as _, str::FromStr};

use crate::{cursor::Cursor, parser, Error, Result};

/// The identity of the assembly that defines a type, treated as opaque text.
///
/// Present on a [`crate::TypeIdentifier`] only when the name was parsed (or set) as
/// assembly-qualified. Properties are retained in parse order as raw key/value pairs;
/// double-quoted values keep their surrounding quotes so that re-rendering reproduces
/// the input exactly.
///
/// # Examples
///
/// ```rust
/// use dotname::AssemblyIdentity;
///
/// let identity = AssemblyIdentity::parse("System.Core, Version=3.5.0.0")?;
/// assert_eq!(
///     identity.full_name(),
///     "System.Core, Version=3.5.0.0",
/// );
/// # Ok::<(), dotname::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyIdentity {
    /// Simple assembly name (e.g., "mscorlib", "System.Core").
    pub name: String,

    /// Ordered `(key, value)` property pairs exactly as parsed.
    ///
    /// Typical keys are `Version`, `Culture` and `PublicKeyToken`, but arbitrary
    /// properties are preserved without interpretation. Values parsed from a
    /// double-quoted run include the quotes.
    pub properties: Vec<(String, String)>,
}

impl AssemblyIdentity {
    /// Create an identity with the given simple name and no properties.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotname::AssemblyIdentity;
    ///
    /// let identity = AssemblyIdentity::new("MyLibrary");
    /// assert_eq!(identity.full_name(), "MyLibrary");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        AssemblyIdentity {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Parse an assembly identity from display-name text.
    ///
    /// The text is a name followed by optional comma-separated `Key=Value` properties.
    /// Property values may be double-quoted, in which case embedded commas and brackets
    /// are preserved verbatim until the matching closing quote. The whole input must be
    /// consumed.
    ///
    /// # Arguments
    /// * `text` - The assembly display name to parse
    ///
    /// # Errors
    /// Returns [`Error::Empty`] when `text` is empty, or [`Error::Grammar`] when the
    /// text violates the assembly-identity grammar (missing `=` after a property key,
    /// unterminated quoted value, trailing unparsed text, ...).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotname::AssemblyIdentity;
    ///
    /// let identity = AssemblyIdentity::parse(
    ///     "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089",
    /// )?;
    /// assert_eq!(identity.name, "mscorlib");
    /// # Ok::<(), dotname::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::Empty);
        }

        let mut cursor = Cursor::new(text);
        let identity = parser::parse_assembly_identity(&mut cursor)?;

        if cursor.has_more() {
            return Err(cursor.grammar_error("end of input"));
        }

        Ok(identity)
    }

    /// Render the full display name: the simple name followed by all properties.
    ///
    /// This is the canonical textual form used when rendering an assembly-qualified
    /// type name; parsing the result yields an equal identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotname::AssemblyIdentity;
    ///
    /// let mut identity = AssemblyIdentity::new("MyLibrary");
    /// identity.properties.push(("Version".to_string(), "1.2.3.4".to_string()));
    /// assert_eq!(identity.full_name(), "MyLibrary, Version=1.2.3.4");
    /// ```
    #[must_use]
    pub fn full_name(&self) -> String {
        let mut result = String::with_capacity(self.name.len() + 32 * self.properties.len());
        result.push_str(&self.name);
        for (key, value) in &self.properties {
            let _ = write!(result, ", {key}={value}");
        }
        result
    }
}

impl fmt::Display for AssemblyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

impl FromStr for AssemblyIdentity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AssemblyIdentity::parse(s)
    }
}
