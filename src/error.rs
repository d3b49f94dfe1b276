use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Type-name parsing has exactly two failure modes: being handed no text at all, and being
/// handed text that violates the assembly-qualified type-name grammar. Grammar violations
/// carry enough context to pinpoint the failure in the original input without re-parsing.
///
/// # Examples
///
/// ```rust
/// use dotname::{Error, TypeIdentifier};
///
/// match TypeIdentifier::parse("System.Int32[") {
///     Ok(identifier) => println!("Parsed {}", identifier.full_name()),
///     Err(Error::Empty) => eprintln!("No input provided"),
///     Err(Error::Grammar { input, position, .. }) => {
///         eprintln!("Invalid type name {:?} at position {}", input, position);
///     }
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Provided input was empty.
    ///
    /// This error occurs when an empty string is provided where a non-empty
    /// type name, namespace-qualified name or assembly name was expected.
    #[error("Provided input was empty")]
    Empty,

    /// The input violates the assembly-qualified type-name grammar.
    ///
    /// Carries the complete original input together with the offending character and its
    /// zero-based character position, so callers can report precise diagnostics without
    /// retaining the input themselves.
    ///
    /// # Fields
    ///
    /// * `input` - The complete text that was being parsed
    /// * `found` - The offending character, or `None` at end of input
    /// * `position` - Zero-based character position of the offending character
    /// * `expected` - Description of what the grammar required at that position
    #[error("Invalid type name {input:?}; unexpected {} at position {position}; expected {expected}", found_description(.found))]
    Grammar {
        /// The complete text that was being parsed
        input: String,
        /// The offending character, or `None` when the input ended prematurely
        found: Option<char>,
        /// Zero-based character position at which parsing failed
        position: usize,
        /// What the grammar required at the failure position
        expected: &'static str,
    },
}

fn found_description(found: &Option<char>) -> String {
    match found {
        Some(ch) => format!("character '{ch}'"),
        None => String::from("end of input"),
    }
}
