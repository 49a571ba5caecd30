//! Type queries for tsz-essentials.
//!
//! The engine reasons about types only through the [`TypeOracle`] trait. This
//! crate defines that trait, the handle and flag types it speaks in, the
//! in-memory [`TypeInterner`] oracle, and the type-shape classifier that
//! picks a completion snippet for a property type.

pub mod types;
pub use types::{
    FunctionShape, IntrinsicKind, LiteralValue, ObjectFlags, ObjectShape, PropertySymbol,
    TypeFlags, TypeId, TypeKey,
};

mod oracle;
pub use oracle::TypeOracle;

mod intern;
pub use intern::TypeInterner;

pub mod type_shape;
pub use type_shape::{
    TypeShape, classify_type_shape, is_array_type, is_boolean_type, is_function_type,
    is_plain_object_type, is_string_type, properties_for_completion,
};

#[cfg(test)]
#[path = "tests/intern_tests.rs"]
mod intern_tests;

#[cfg(test)]
#[path = "tests/type_shape_tests.rs"]
mod type_shape_tests;
