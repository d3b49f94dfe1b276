//! The mutable type-identity model and its canonical serializer.
//!
//! This module provides [`TypeIdentifier`], the structured form of an assembly-qualified
//! type name. An identifier owns five pieces of state:
//!
//! - an optional dotted namespace
//! - a non-empty nested-type path (`Outer`, `Outer+Inner`, ...)
//! - an ordered list of pointer/reference/array [`TypeSpecifier`]s
//! - an ordered list of generic arguments, each a complete [`TypeIdentifier`] of its own
//! - an optional [`AssemblyIdentity`]
//!
//! The derived name views (`name`, `namespace_type_name`, `full_name`,
//! `assembly_qualified_name`) are recomputed from these fields on every call; there is no
//! cached derived state to invalidate. Text setters are transactional: the value is parsed
//! into a fresh temporary first and the receiver's fields are only replaced on success, so
//! a failed setter leaves the identifier exactly as it was.
//!
//! Every identifier exclusively owns its subtrees. [`Clone`] is a structural deep copy,
//! and [`TypeIdentifier::element_type`] / [`TypeIdentifier::declaring_type`] return fresh
//! identities instead of aliasing the receiver's lists.
//!
//! # Examples
//!
//! ```rust
//! use dotname::TypeIdentifier;
//!
//! let mut identifier = TypeIdentifier::parse(
//!     "System.Collections.Generic.List`1[[System.Int32, mscorlib, Version=4.0.0.0]][]",
//! )?;
//!
//! assert!(identifier.is_array());
//! assert_eq!(identifier.name(), "List`1");
//!
//! // Rename the type; everything else is untouched.
//! identifier.set_name("ImmutableList`1")?;
//! assert_eq!(
//!     identifier.full_name(),
//!     "System.Collections.Generic.ImmutableList`1[[System.Int32, mscorlib, Version=4.0.0.0]][]",
//! );
//! # Ok::<(), dotname::Error>(())
//! ```

use std::{fmt, fmt::Write as _, str::FromStr};

use crate::{
    assembly::AssemblyIdentity, cursor::Cursor, parser, specifier::TypeSpecifier, Error, Result,
};

/// The structured, mutable identity of a .NET type, independent of any loaded type.
///
/// Created by [`TypeIdentifier::parse`] from an (optionally assembly-qualified) type
/// name, and rendered back to canonical text by [`TypeIdentifier::full_name`] and
/// [`TypeIdentifier::assembly_qualified_name`]. Supports round-trip editing: renaming,
/// re-namespacing, changing the owning assembly, and editing the generic-argument and
/// specifier lists in place.
///
/// # Thread Safety
///
/// `TypeIdentifier` owns plain `String`s and `Vec`s, so it is `Send + Sync`, but it has
/// no internal locking; mutating one instance from multiple threads requires external
/// synchronization. Parsing independent inputs is freely parallel.
///
/// # Examples
///
/// ```rust
/// use dotname::TypeIdentifier;
///
/// let identifier = TypeIdentifier::parse("System.String")?;
/// assert_eq!(identifier.namespace(), Some("System"));
/// assert_eq!(identifier.name(), "String");
/// assert_eq!(identifier.full_name(), "System.String");
/// # Ok::<(), dotname::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeIdentifier {
    /// Dotted namespace; `None` for types with no namespace
    namespace: Option<String>,
    /// Root type name followed by nested-type names; never empty
    nested_path: Vec<String>,
    /// Pointer/reference/array modifiers in textual left-to-right order
    specifiers: Vec<TypeSpecifier>,
    /// Generic arguments, each an independently owned identity
    generic_arguments: Vec<TypeIdentifier>,
    /// Owning assembly, present only for assembly-qualified names
    assembly: Option<AssemblyIdentity>,
}

impl TypeIdentifier {
    /// Parse a type name, optionally assembly-qualified.
    ///
    /// This is the only way to create a [`TypeIdentifier`] from scratch; a trailing
    /// comma-led assembly clause is consumed when present.
    ///
    /// # Arguments
    /// * `text` - The type name to parse
    ///
    /// # Errors
    /// Returns [`Error::Empty`] when `text` is empty, or [`Error::Grammar`] when the
    /// type-name grammar is violated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotname::TypeIdentifier;
    ///
    /// let identifier = TypeIdentifier::parse(
    ///     "System.Int32[], mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089",
    /// )?;
    /// assert!(identifier.is_array());
    /// assert_eq!(identifier.assembly().unwrap().name, "mscorlib");
    /// # Ok::<(), dotname::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::Empty);
        }

        let mut cursor = Cursor::new(text);
        parser::parse_type_name(&mut cursor, true)
    }

    /// Assemble an identifier from already-parsed parts. `nested_path` must be non-empty.
    pub(crate) fn from_parts(
        namespace: Option<String>,
        nested_path: Vec<String>,
        specifiers: Vec<TypeSpecifier>,
        generic_arguments: Vec<TypeIdentifier>,
        assembly: Option<AssemblyIdentity>,
    ) -> Self {
        TypeIdentifier {
            namespace,
            nested_path,
            specifiers,
            generic_arguments,
            assembly,
        }
    }

    /// The simple name of the type: the last element of the nested-type path.
    #[must_use]
    pub fn name(&self) -> &str {
        self.nested_path.last().map_or("", String::as_str)
    }

    /// Replace the simple name, leaving namespace, enclosing types, specifiers, generic
    /// arguments and assembly identity untouched.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] when `value` is empty; a type always has a name.
    pub fn set_name(&mut self, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::Empty);
        }

        // nested_path is never empty
        if let Some(last) = self.nested_path.last_mut() {
            *last = value.to_string();
        }
        Ok(())
    }

    /// The dotted namespace, or `None` for a type without one.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Replace or clear the namespace.
    ///
    /// Unlike [`TypeIdentifier::set_name`], an empty or absent namespace is legal and
    /// meaningful (a root-level type), so `None` and `Some("")` both clear it.
    pub fn set_namespace(&mut self, value: Option<&str>) {
        self.namespace = match value {
            None | Some("") => None,
            Some(namespace) => Some(namespace.to_string()),
        };
    }

    /// The root type name followed by zero or more nested-type names.
    ///
    /// The slice always has at least one element; the last one is [`TypeIdentifier::name`].
    #[must_use]
    pub fn nested_path(&self) -> &[String] {
        &self.nested_path
    }

    /// The namespace-qualified nested path: dotted namespace plus `+`-joined type names,
    /// with no specifiers, generic arguments or assembly identity.
    #[must_use]
    pub fn namespace_type_name(&self) -> String {
        let mut result = String::new();
        self.write_namespace_type_name(&mut result);
        result
    }

    /// Re-parse `value` as a namespace-qualified nested path and replace the namespace
    /// and nested path. The value must be fully consumed: specifiers, generic arguments
    /// and assembly clauses are not permitted here.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] for empty input, or [`Error::Grammar`] when the value is
    /// not a plain namespace-qualified name. On error the identifier is unchanged.
    pub fn set_namespace_type_name(&mut self, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::Empty);
        }

        let mut cursor = Cursor::new(value);
        let (namespace, nested_path) = parser::parse_namespace_type_name(&mut cursor, false)?;

        self.namespace = namespace;
        self.nested_path = nested_path;
        Ok(())
    }

    /// The full name: namespace-qualified path, generic-argument block and specifiers,
    /// without the assembly clause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotname::TypeIdentifier;
    ///
    /// let identifier = TypeIdentifier::parse("System.Int32[,], mscorlib")?;
    /// assert_eq!(identifier.full_name(), "System.Int32[,]");
    /// # Ok::<(), dotname::Error>(())
    /// ```
    #[must_use]
    pub fn full_name(&self) -> String {
        let mut result = String::new();
        self.write_full_name(&mut result);
        result
    }

    /// Re-parse `value` as a full name (no assembly clause) and replace the namespace,
    /// nested path, generic arguments and specifiers. The assembly identity is untouched.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] for empty input, or [`Error::Grammar`] when the value
    /// violates the grammar. On error the identifier is unchanged.
    pub fn set_full_name(&mut self, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::Empty);
        }

        let mut cursor = Cursor::new(value);
        let parsed = parser::parse_type_name(&mut cursor, false)?;

        self.namespace = parsed.namespace;
        self.nested_path = parsed.nested_path;
        self.generic_arguments = parsed.generic_arguments;
        self.specifiers = parsed.specifiers;
        Ok(())
    }

    /// The assembly-qualified name: the full name plus `, ` and the assembly display
    /// name, when an assembly identity is present; identical to the full name otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotname::TypeIdentifier;
    ///
    /// let identifier = TypeIdentifier::parse("System.Int32, mscorlib, Version=4.0.0.0")?;
    /// assert_eq!(
    ///     identifier.assembly_qualified_name(),
    ///     "System.Int32, mscorlib, Version=4.0.0.0",
    /// );
    /// # Ok::<(), dotname::Error>(())
    /// ```
    #[must_use]
    pub fn assembly_qualified_name(&self) -> String {
        let mut result = String::new();
        self.write_assembly_qualified_name(&mut result);
        result
    }

    /// Re-parse `value` as an assembly-qualified name and replace all five fields.
    ///
    /// # Errors
    /// Returns [`Error::Empty`] for empty input, or [`Error::Grammar`] when the value
    /// violates the grammar. On error the identifier is unchanged.
    pub fn set_assembly_qualified_name(&mut self, value: &str) -> Result<()> {
        *self = Self::parse(value)?;
        Ok(())
    }

    /// The owning assembly's identity, if this name is assembly-qualified.
    #[must_use]
    pub fn assembly(&self) -> Option<&AssemblyIdentity> {
        self.assembly.as_ref()
    }

    /// Replace or remove the assembly identity directly.
    ///
    /// Setting `None` removes exactly the trailing `, assembly...` clause from subsequent
    /// renders and leaves the full name unchanged.
    pub fn set_assembly(&mut self, assembly: Option<AssemblyIdentity>) {
        self.assembly = assembly;
    }

    /// The specifier sequence in textual left-to-right order; the last entry is the
    /// outermost applied type.
    #[must_use]
    pub fn specifiers(&self) -> &[TypeSpecifier] {
        &self.specifiers
    }

    /// Mutable access to the specifier list. Edits take effect in the next render.
    pub fn specifiers_mut(&mut self) -> &mut Vec<TypeSpecifier> {
        &mut self.specifiers
    }

    /// The generic arguments; empty for non-generic types.
    #[must_use]
    pub fn generic_arguments(&self) -> &[TypeIdentifier] {
        &self.generic_arguments
    }

    /// Mutable access to the generic-argument list.
    ///
    /// Structural edits (insert, remove, reorder) take effect immediately in subsequent
    /// renders; there is no commit step.
    pub fn generic_arguments_mut(&mut self) -> &mut Vec<TypeIdentifier> {
        &mut self.generic_arguments
    }

    /// Returns `true` if the outermost (last) specifier is an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.specifiers.last().is_some_and(TypeSpecifier::is_array)
    }

    /// Returns `true` if the outermost (last) specifier is a pointer.
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        self.specifiers
            .last()
            .is_some_and(TypeSpecifier::is_pointer)
    }

    /// Returns `true` if the outermost (last) specifier is a by-reference.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.specifiers
            .last()
            .is_some_and(TypeSpecifier::is_reference)
    }

    /// The element type of an array, pointer or reference: a new identity with the
    /// outermost (last) specifier removed and everything else deep-copied, including
    /// the assembly identity.
    ///
    /// Returns `None` when there are no specifiers. The receiver is not mutated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotname::TypeIdentifier;
    ///
    /// let identifier = TypeIdentifier::parse("System.Int32[][,]")?;
    /// let element = identifier.element_type().unwrap();
    /// assert_eq!(element.full_name(), "System.Int32[]");
    /// # Ok::<(), dotname::Error>(())
    /// ```
    #[must_use]
    pub fn element_type(&self) -> Option<TypeIdentifier> {
        if self.specifiers.is_empty() {
            return None;
        }

        let mut element = self.clone();
        element.specifiers.pop();
        Some(element)
    }

    /// The enclosing type of a nested type: a new identity with the last nested-path
    /// element removed; specifiers, generic arguments and assembly identity are carried
    /// over (deep-copied).
    ///
    /// Returns `None` when the type is not nested. The receiver is not mutated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotname::TypeIdentifier;
    ///
    /// let identifier = TypeIdentifier::parse("Ns.Outer+Inner")?;
    /// let declaring = identifier.declaring_type().unwrap();
    /// assert_eq!(declaring.full_name(), "Ns.Outer");
    /// assert!(declaring.declaring_type().is_none());
    /// # Ok::<(), dotname::Error>(())
    /// ```
    #[must_use]
    pub fn declaring_type(&self) -> Option<TypeIdentifier> {
        if self.nested_path.len() <= 1 {
            return None;
        }

        let mut declaring = self.clone();
        declaring.nested_path.pop();
        Some(declaring)
    }

    fn write_namespace_type_name(&self, out: &mut String) {
        if let Some(namespace) = &self.namespace {
            out.push_str(namespace);
            out.push('.');
        }

        for (index, segment) in self.nested_path.iter().enumerate() {
            if index > 0 {
                out.push('+');
            }
            out.push_str(segment);
        }
    }

    fn write_full_name(&self, out: &mut String) {
        self.write_namespace_type_name(out);

        if !self.generic_arguments.is_empty() {
            out.push('[');
            for (index, argument) in self.generic_arguments.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }

                // An argument gets an extra bracket pair only when it carries an
                // assembly identity; the brackets are what keep that identity's
                // commas apart from the argument separators.
                if argument.assembly.is_some() {
                    out.push('[');
                    argument.write_assembly_qualified_name(out);
                    out.push(']');
                } else {
                    argument.write_full_name(out);
                }
            }
            out.push(']');
        }

        for specifier in &self.specifiers {
            let _ = write!(out, "{specifier}");
        }
    }

    fn write_assembly_qualified_name(&self, out: &mut String) {
        self.write_full_name(out);
        if let Some(assembly) = &self.assembly {
            out.push_str(", ");
            out.push_str(&assembly.full_name());
        }
    }
}

impl fmt::Display for TypeIdentifier {
    /// Renders the assembly-qualified name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.assembly_qualified_name())
    }
}

impl FromStr for TypeIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TypeIdentifier::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MSCORLIB: &str =
        "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089";

    #[test]
    fn test_parse_empty_is_rejected() {
        assert!(matches!(TypeIdentifier::parse(""), Err(Error::Empty)));
    }

    #[test]
    fn test_simple_type() {
        let identifier = TypeIdentifier::parse("Simple").unwrap();
        assert_eq!(identifier.namespace(), None);
        assert_eq!(identifier.name(), "Simple");
        assert_eq!(identifier.full_name(), "Simple");
        assert_eq!(identifier.assembly_qualified_name(), "Simple");
    }

    #[test]
    fn test_set_name_replaces_only_last_path_element() {
        let mut identifier = TypeIdentifier::parse("Ns.Outer+Inner[], lib").unwrap();
        identifier.set_name("Renamed").unwrap();

        assert_eq!(identifier.namespace(), Some("Ns"));
        assert_eq!(identifier.nested_path(), &["Outer", "Renamed"]);
        assert_eq!(identifier.full_name(), "Ns.Outer+Renamed[]");
        assert_eq!(identifier.assembly().unwrap().name, "lib");
    }

    #[test]
    fn test_set_name_rejects_empty() {
        let mut identifier = TypeIdentifier::parse("A").unwrap();
        assert!(matches!(identifier.set_name(""), Err(Error::Empty)));
        assert_eq!(identifier.name(), "A");
    }

    #[test]
    fn test_set_namespace_clears_and_replaces() {
        let mut identifier = TypeIdentifier::parse("System.String").unwrap();

        identifier.set_namespace(None);
        assert_eq!(identifier.full_name(), "String");

        identifier.set_namespace(Some("My.Lib"));
        assert_eq!(identifier.full_name(), "My.Lib.String");

        identifier.set_namespace(Some(""));
        assert_eq!(identifier.namespace(), None);
    }

    #[test]
    fn test_set_namespace_type_name_replaces_path_only() {
        let mut identifier = TypeIdentifier::parse("Ns.Old`1[[A]][], lib").unwrap();
        identifier.set_namespace_type_name("Other.New`1+Nested").unwrap();

        assert_eq!(identifier.namespace(), Some("Other"));
        assert_eq!(identifier.nested_path(), &["New`1", "Nested"]);
        // Generic arguments, specifiers and assembly identity survive.
        assert_eq!(identifier.full_name(), "Other.New`1+Nested[A][]");
        assert!(identifier.assembly().is_some());
    }

    #[test]
    fn test_set_namespace_type_name_rejects_decorated_names() {
        let mut identifier = TypeIdentifier::parse("Ns.Name").unwrap();

        assert!(matches!(
            identifier.set_namespace_type_name("Other.Name[]"),
            Err(Error::Grammar { found: Some('['), .. })
        ));
        assert!(matches!(
            identifier.set_namespace_type_name("Other.Name, lib"),
            Err(Error::Grammar { found: Some(','), .. })
        ));

        // Failed setter leaves the identifier untouched.
        assert_eq!(identifier.full_name(), "Ns.Name");
    }

    #[test]
    fn test_set_full_name_keeps_assembly() {
        let mut identifier =
            TypeIdentifier::parse(&format!("System.Int32, {MSCORLIB}")).unwrap();
        identifier.set_full_name("System.String[]").unwrap();

        assert_eq!(identifier.full_name(), "System.String[]");
        assert_eq!(
            identifier.assembly_qualified_name(),
            format!("System.String[], {MSCORLIB}"),
        );
    }

    #[test]
    fn test_set_full_name_failure_leaves_receiver_unchanged() {
        let mut identifier = TypeIdentifier::parse("System.Int32").unwrap();
        assert!(identifier.set_full_name("List`1[[Broken").is_err());
        assert_eq!(identifier.full_name(), "System.Int32");
    }

    #[test]
    fn test_set_assembly_qualified_name_replaces_everything() {
        let mut identifier = TypeIdentifier::parse("Old.Name[], oldlib").unwrap();
        identifier
            .set_assembly_qualified_name("New.Name`1[[T]]*, newlib, Version=1.0.0.0")
            .unwrap();

        assert_eq!(identifier.namespace(), Some("New"));
        assert!(identifier.is_pointer());
        assert_eq!(identifier.generic_arguments().len(), 1);
        assert_eq!(identifier.assembly().unwrap().name, "newlib");
    }

    #[test]
    fn test_removing_assembly_removes_exactly_the_trailing_clause() {
        let mut identifier =
            TypeIdentifier::parse(&format!("Ns.Dict`2[[A, lib1],[B]][], {MSCORLIB}")).unwrap();

        let full_name = identifier.full_name();
        identifier.set_assembly(None);

        assert_eq!(identifier.full_name(), full_name);
        assert_eq!(identifier.assembly_qualified_name(), full_name);
        // The generic arguments' own identities are untouched.
        assert_eq!(identifier.generic_arguments()[0].assembly().unwrap().name, "lib1");
    }

    #[test]
    fn test_generic_argument_edits_are_live() {
        let mut identifier = TypeIdentifier::parse("Dict`2[[A, lib1],[B, lib2]], lib").unwrap();

        identifier.generic_arguments_mut().remove(0);
        assert_eq!(
            identifier.assembly_qualified_name(),
            "Dict`2[[B, lib2]], lib",
        );

        identifier.generic_arguments_mut().clear();
        assert_eq!(identifier.assembly_qualified_name(), "Dict`2, lib");
    }

    #[test]
    fn test_specifier_edits_are_live() {
        let mut identifier = TypeIdentifier::parse("T[]").unwrap();
        identifier.specifiers_mut().push(TypeSpecifier::Reference);
        assert_eq!(identifier.full_name(), "T[]&");
        assert!(identifier.is_reference());
    }

    #[test]
    fn test_is_flags_reflect_only_the_last_specifier() {
        let identifier = TypeIdentifier::parse("T[,]*[]*&").unwrap();
        assert!(identifier.is_reference());
        assert!(!identifier.is_array());
        assert!(!identifier.is_pointer());

        let bare = TypeIdentifier::parse("T").unwrap();
        assert!(!bare.is_array() && !bare.is_pointer() && !bare.is_reference());
    }

    #[test]
    fn test_element_type_strips_outermost_specifier() {
        let identifier =
            TypeIdentifier::parse(&format!("System.Int32[][,], {MSCORLIB}")).unwrap();

        let element = identifier.element_type().unwrap();
        assert_eq!(element.full_name(), "System.Int32[]");
        assert_eq!(element.assembly(), identifier.assembly());

        let scalar = element.element_type().unwrap().element_type();
        assert!(scalar.is_none());
    }

    #[test]
    fn test_element_type_does_not_mutate_receiver() {
        let identifier = TypeIdentifier::parse("T[]").unwrap();
        let _ = identifier.element_type();
        assert!(identifier.is_array());
    }

    #[test]
    fn test_declaring_type() {
        let identifier = TypeIdentifier::parse("Ns.Outer+Mid+Inner, lib").unwrap();

        let declaring = identifier.declaring_type().unwrap();
        assert_eq!(declaring.namespace_type_name(), "Ns.Outer+Mid");
        assert_eq!(declaring.assembly().unwrap().name, "lib");

        assert!(TypeIdentifier::parse("Ns.Single").unwrap().declaring_type().is_none());
    }

    #[test]
    fn test_clone_is_a_deep_copy() {
        let original = TypeIdentifier::parse("Dict`2[[A, lib1],[B]]").unwrap();
        let mut copy = original.clone();

        copy.generic_arguments_mut()[0].set_name("Changed").unwrap();
        assert_eq!(original.generic_arguments()[0].name(), "A");
        assert_eq!(copy.generic_arguments()[0].name(), "Changed");
    }

    #[test]
    fn test_display_renders_assembly_qualified_name() {
        let identifier = TypeIdentifier::parse("System.Int32, mscorlib").unwrap();
        assert_eq!(identifier.to_string(), "System.Int32, mscorlib");
    }

    #[test]
    fn test_from_str() {
        let identifier: TypeIdentifier = "System.Guid".parse().unwrap();
        assert_eq!(identifier.full_name(), "System.Guid");
    }
}
