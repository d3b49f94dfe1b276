// Copyright 2026 The dotname contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # dotname
//!
//! A parser, mutable model and canonical serializer for .NET assembly-qualified
//! type names.
//!
//! `dotname` turns strings such as
//! ``System.Collections.Generic.Dictionary`2[[System.Int32, mscorlib],[System.String, mscorlib]], mscorlib``
//! into a structured, editable [`TypeIdentifier`], and renders any identifier back
//! to canonical text. It works purely on names: no assembly is loaded, no type is
//! resolved, and nothing needs a .NET runtime.
//!
//! ## Features
//!
//! - **Full grammar coverage**: namespaces, nested types (`Outer+Inner`), generic
//!   arguments with per-argument assembly identities, multi-dimensional and jagged
//!   arrays, pointers, by-references, backslash escapes and quoted assembly
//!   property values
//! - **Mutable model**: rename a type, move it to another namespace, swap the
//!   owning assembly or edit generic arguments and specifiers in place, with
//!   transactional text setters that leave the identifier untouched on parse errors
//! - **Canonical output**: [`TypeIdentifier::full_name`] and
//!   [`TypeIdentifier::assembly_qualified_name`] produce normalized text that
//!   re-parses to an equal identifier
//! - **Precise errors**: [`Error::Grammar`] reports the offending character, its
//!   position and what was expected instead
//!
//! ## Quick Start
//!
//! ```rust
//! use dotname::prelude::*;
//!
//! let mut identifier = TypeIdentifier::parse(
//!     "System.Collections.Generic.List`1[[System.Int32, mscorlib, Version=4.0.0.0]]",
//! )?;
//!
//! assert_eq!(identifier.name(), "List`1");
//! assert_eq!(identifier.namespace(), Some("System.Collections.Generic"));
//!
//! let argument = &identifier.generic_arguments()[0];
//! assert_eq!(argument.full_name(), "System.Int32");
//! assert_eq!(argument.assembly().unwrap().name, "mscorlib");
//!
//! identifier.set_namespace(Some("My.Collections"));
//! assert_eq!(
//!     identifier.full_name(),
//!     "My.Collections.List`1[[System.Int32, mscorlib, Version=4.0.0.0]]",
//! );
//! # Ok::<(), dotname::Error>(())
//! ```
//!
//! ## Architecture
//!
//! The crate is a single pipeline:
//!
//! 1. A character cursor walks the input with one- and two-character lookahead.
//! 2. A recursive-descent parser builds the identifier tree in one pass, with no
//!    backtracking.
//! 3. The model ([`TypeIdentifier`], [`TypeSpecifier`], [`AssemblyIdentity`])
//!    holds the parsed structure and accepts edits.
//! 4. The serializer renders canonical text from the model on demand; derived
//!    names are never cached.

pub(crate) mod cursor;
pub(crate) mod parser;

mod assembly;
mod error;
mod identifier;
mod specifier;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use dotname::prelude::*;
///
/// let identifier = TypeIdentifier::parse("System.String, mscorlib")?;
/// assert_eq!(identifier.full_name(), "System.String");
/// # Ok::<(), dotname::Error>(())
/// ```
pub mod prelude;

/// Convenience alias for operations that can fail with a [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for all parsing and mutation failures in this crate.
///
/// See [`Error`] for the individual variants and the diagnostic detail carried
/// by grammar errors.
pub use error::Error;

/// The identity of an assembly: its simple name plus ordered key/value properties.
///
/// See [`AssemblyIdentity`] for parsing and display-name rendering.
pub use assembly::AssemblyIdentity;

/// The structured, mutable identity of a .NET type.
///
/// This is the crate's central type; see [`TypeIdentifier`] for the full API.
pub use identifier::TypeIdentifier;

/// A pointer, by-reference or array modifier applied to a type.
///
/// See [`TypeSpecifier`] for ordering semantics and textual rendering.
pub use specifier::TypeSpecifier;
