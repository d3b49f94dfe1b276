//! Recursive-descent grammar for assembly-qualified type names.
//!
//! This module implements the textual type-name grammar on top of [`Cursor`]:
//!
//! ```text
//! TypeName          = NamespaceTypeName GenericArguments? Specifier* AssemblyClause?
//! NamespaceTypeName = Identifier ( '.' Identifier )* ( '+' Identifier )*
//! GenericArguments  = '[' Argument ( ',' Argument )* ']'
//! Argument          = '[' TypeName ']'        (fully qualified, assembly clause allowed)
//!                   | TypeName                (bare, no assembly clause)
//! Specifier         = '*' | '&' | '[' ( ','* | '*'-marked dimensions ) ']'
//! AssemblyClause    = ',' AssemblyIdentity
//! AssemblyIdentity  = NameText ( ',' Key '=' Value )*
//! ```
//!
//! Identifiers treat `. + & * [ ] , \` as special; a backslash escapes the following
//! character and is retained in the stored name so serialization reproduces it verbatim.
//!
//! Two places need lookahead to disambiguate `[`: a generic-argument list is entered only
//! when the bracket is *not* immediately followed by `*`, `,` or `]` (those spell an array
//! specifier), and a bare generic argument is never allowed to consume a comma-led
//! assembly clause, so `Dict[K,V]` splits on the comma as two arguments.
//!
//! All functions are crate-private; the public entry points live on
//! [`crate::TypeIdentifier`] and [`crate::AssemblyIdentity`]. Parsing never mutates
//! caller-visible state: each function either returns a fully built value or an
//! [`crate::Error::Grammar`] pointing into the original input.

use crate::{
    cursor::Cursor, identifier::TypeIdentifier, specifier::TypeSpecifier, AssemblyIdentity,
    Result,
};

/// Characters with structural meaning in a type name.
///
/// These terminate an identifier unless escaped with a preceding backslash.
fn is_special(ch: char) -> bool {
    matches!(
        ch,
        ',' | '+' | '&' | '*' | '[' | ']' | '.' | '\\'
    )
}

/// Parse a complete type name at the cursor.
///
/// When `fully_qualified` is `true`, a trailing comma-led assembly clause is consumed;
/// when `false` the parse stops in front of any such comma, which is how bare generic
/// arguments avoid swallowing the argument separator of their enclosing list.
///
/// Trailing characters the grammar does not reach (for example an unbalanced `]` at the
/// top level) are left unconsumed; strict consumers check [`Cursor::has_more`] afterwards.
pub(crate) fn parse_type_name(
    cursor: &mut Cursor,
    fully_qualified: bool,
) -> Result<TypeIdentifier> {
    let (namespace, nested_path) = parse_namespace_type_name(cursor, true)?;

    // '[' opens a generic-argument list only when not immediately followed by one of
    // '*', ',' or ']', which would make it an array specifier instead.
    let generic_arguments = if cursor.peek() == Some('[')
        && !matches!(cursor.peek_at(1), Some('*' | ',' | ']'))
    {
        parse_generic_arguments(cursor)?
    } else {
        Vec::new()
    };

    let specifiers = parse_specifiers(cursor)?;

    let assembly = if fully_qualified && cursor.peek() == Some(',') {
        cursor.read();
        skip_whitespace(cursor);
        Some(parse_assembly_identity(cursor)?)
    } else {
        None
    };

    Ok(TypeIdentifier::from_parts(
        namespace,
        nested_path,
        specifiers,
        generic_arguments,
        assembly,
    ))
}

/// Parse a dotted namespace plus `+`-joined nested-type path.
///
/// The namespace boundary is the last `.` before any `+`; everything after it up to the
/// first `+` is the root type's simple name. With `allow_trailing = false` the input must
/// end exactly after the path, which is what the `NamespaceTypeName` setter requires.
///
/// Returns the optional namespace and the non-empty nested path.
pub(crate) fn parse_namespace_type_name(
    cursor: &mut Cursor,
    allow_trailing: bool,
) -> Result<(Option<String>, Vec<String>)> {
    let mut namespace_buf = String::new();
    let mut last_dot = None;

    // Accumulate dot-separated identifiers; the segment after the last dot is the
    // root type name and is split off below.
    while cursor.has_more() && parse_identifier_into(cursor, &mut namespace_buf) {
        if cursor.peek() == Some('.') {
            last_dot = Some(namespace_buf.len());
            namespace_buf.push('.');
            cursor.read();
        } else {
            break;
        }
    }

    if namespace_buf.is_empty() {
        return Err(cursor.grammar_error("a type name"));
    }

    let (namespace, root_name) = match last_dot {
        Some(dot) => {
            let root_name = namespace_buf[dot + 1..].to_string();
            namespace_buf.truncate(dot);
            (Some(namespace_buf), root_name)
        }
        None => (None, namespace_buf),
    };

    let mut nested_path = vec![root_name];
    while cursor.peek() == Some('+') {
        cursor.read();
        nested_path.push(parse_identifier(cursor)?);
    }

    if !allow_trailing && cursor.has_more() {
        return Err(cursor.grammar_error("end of input"));
    }

    Ok((namespace, nested_path))
}

/// Parse one identifier, failing if zero characters are consumed.
fn parse_identifier(cursor: &mut Cursor) -> Result<String> {
    let mut identifier = String::new();
    if !parse_identifier_into(cursor, &mut identifier) {
        return Err(cursor.grammar_error("an identifier"));
    }
    Ok(identifier)
}

/// Append identifier characters at the cursor to `target`.
///
/// A backslash includes the following character literally; both the backslash and the
/// escaped character are kept in the stored name. A lone trailing backslash is kept as-is.
///
/// Returns `true` if at least one character was consumed.
fn parse_identifier_into(cursor: &mut Cursor, target: &mut String) -> bool {
    let start = cursor.pos();

    while let Some(ch) = cursor.peek() {
        if ch != '\\' && is_special(ch) {
            break;
        }

        cursor.read();

        if ch == '\\' {
            if let Some(escaped) = cursor.read() {
                target.push('\\');
                target.push(escaped);
                continue;
            }
        }

        target.push(ch);
    }

    cursor.pos() > start
}

/// Parse a bracketed generic-argument list; the cursor sits on the opening `[`.
///
/// Each argument is either `[ TypeName ]` (fully qualified, closing `]` mandatory) or a
/// bare `TypeName`. The list's own closing `]` is mandatory as well.
fn parse_generic_arguments(cursor: &mut Cursor) -> Result<Vec<TypeIdentifier>> {
    let mut arguments = Vec::new();

    loop {
        // Opening '[' on the first pass, the ',' separator on subsequent ones.
        cursor.read();

        let bracketed = cursor.peek() == Some('[');
        if bracketed {
            cursor.read();
        }

        arguments.push(parse_type_name(cursor, bracketed)?);

        if bracketed {
            if cursor.peek() != Some(']') {
                return Err(cursor.grammar_error("']'"));
            }
            cursor.read();
        }

        if cursor.peek() != Some(',') {
            break;
        }
    }

    if cursor.peek() != Some(']') {
        return Err(cursor.grammar_error("']'"));
    }
    cursor.read();

    Ok(arguments)
}

/// Parse the pointer/reference/array specifier sequence.
///
/// Stops without error at `,`, `]`, end of input, or a `[` that opens something other
/// than an array specifier; any other character is a grammar violation.
fn parse_specifiers(cursor: &mut Cursor) -> Result<Vec<TypeSpecifier>> {
    let mut specifiers = Vec::new();

    while let Some(ch) = cursor.peek() {
        let specifier = match ch {
            '[' => match cursor.peek_at(1) {
                Some('*' | ']' | ',') => parse_array_specifier(cursor)?,
                _ => break,
            },
            '*' => {
                cursor.read();
                TypeSpecifier::Pointer
            }
            '&' => {
                cursor.read();
                TypeSpecifier::Reference
            }
            ',' | ']' => break,
            _ => return Err(cursor.grammar_error("one of '[', '*', '&', ',' or ']'")),
        };

        specifiers.push(specifier);
    }

    Ok(specifiers)
}

/// Parse one array specifier; the cursor sits on the opening `[`.
///
/// Rank is the comma count plus one. A `*` marks a non-zero-lower-bound dimension and is
/// accepted but normalized away on re-serialization (rank-1 arrays always render as `[]`).
fn parse_array_specifier(cursor: &mut Cursor) -> Result<TypeSpecifier> {
    cursor.read();
    let mut rank = 1u32;

    loop {
        match cursor.peek() {
            Some(',') => {
                cursor.read();
                rank += 1;
            }
            Some(']') => {
                cursor.read();
                return Ok(TypeSpecifier::Array(rank));
            }
            Some('*') => {
                cursor.read();
                if !matches!(cursor.peek(), Some(',' | ']')) {
                    return Err(cursor.grammar_error("',' or ']'"));
                }
            }
            _ => return Err(cursor.grammar_error("',', ']' or '*'")),
        }
    }
}

/// Parse an assembly identity: name text followed by `Key=Value` properties.
///
/// Name text runs until `,` or `]`; keys until `=`, whitespace, `,` or `]`; values are
/// either a double-quoted run (kept verbatim, quotes included) or an unquoted run ending
/// at `,`, `]` or whitespace. Whitespace around token boundaries is skipped.
///
/// Stops in front of a `]` so the enclosing generic-argument bracket survives.
pub(crate) fn parse_assembly_identity(cursor: &mut Cursor) -> Result<AssemblyIdentity> {
    let mut name = String::new();
    while let Some(ch) = cursor.peek() {
        if ch == ',' || ch == ']' {
            break;
        }
        cursor.read();
        name.push(ch);
    }

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(cursor.grammar_error("an assembly name"));
    }

    let mut properties = Vec::new();
    while cursor.peek() == Some(',') {
        cursor.read();
        skip_whitespace(cursor);

        let key = parse_property_key(cursor);
        if key.is_empty() {
            return Err(cursor.grammar_error("an assembly property name"));
        }

        skip_whitespace(cursor);
        if cursor.peek() != Some('=') {
            return Err(cursor.grammar_error("'='"));
        }
        cursor.read();
        skip_whitespace(cursor);

        let value = if cursor.peek() == Some('"') {
            parse_quoted_value(cursor)?
        } else {
            parse_unquoted_value(cursor)
        };

        properties.push((key, value));
        skip_whitespace(cursor);
    }

    Ok(AssemblyIdentity { name, properties })
}

/// Consume a property key: characters up to `=`, whitespace, `,` or `]`.
fn parse_property_key(cursor: &mut Cursor) -> String {
    let mut key = String::new();
    while let Some(ch) = cursor.peek() {
        if ch == '=' || ch == ',' || ch == ']' || ch.is_whitespace() {
            break;
        }
        cursor.read();
        key.push(ch);
    }
    key
}

/// Consume a double-quoted property value, returning it with its quotes.
///
/// Embedded commas and brackets are preserved verbatim until the matching closing quote.
fn parse_quoted_value(cursor: &mut Cursor) -> Result<String> {
    let mut value = String::from('"');
    cursor.read();

    loop {
        match cursor.read() {
            Some('"') => {
                value.push('"');
                return Ok(value);
            }
            Some(ch) => value.push(ch),
            None => return Err(cursor.grammar_error("a closing '\"'")),
        }
    }
}

/// Consume an unquoted property value: characters up to `,`, `]` or whitespace.
fn parse_unquoted_value(cursor: &mut Cursor) -> String {
    let mut value = String::new();
    while let Some(ch) = cursor.peek() {
        if ch == ',' || ch == ']' || ch.is_whitespace() {
            break;
        }
        cursor.read();
        value.push(ch);
    }
    value
}

fn skip_whitespace(cursor: &mut Cursor) {
    while cursor.peek().is_some_and(char::is_whitespace) {
        cursor.read();
    }
}
