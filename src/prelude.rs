//! Re-exports of the types most users need, for convenient glob imports.

pub use crate::{AssemblyIdentity, Error, Result, TypeIdentifier, TypeSpecifier};
