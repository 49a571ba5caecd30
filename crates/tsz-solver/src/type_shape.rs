//! Type shape classification.
//!
//! Maps a type to the coarse [`TypeShape`] used to pick a completion snippet.
//! Union types match a shape when every member other than `undefined`
//! matches it; a union made only of `undefined` matches nothing.

use crate::oracle::TypeOracle;
use crate::types::{ObjectFlags, PropertySymbol, TypeFlags, TypeId};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;
use tsz_common::limits::MAX_UNION_CLASSIFY_DEPTH;

/// Presentation shape of a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeShape {
    String,
    Boolean,
    Array,
    PlainObject,
    Function,
    None,
}

/// Classify `ty`, checking shapes in precedence order.
///
/// Function comes first and short-circuits: a union with any callable
/// member is a function. Array is checked before plain object, since array
/// types are object types too.
pub fn classify_type_shape<O: TypeOracle + ?Sized>(oracle: &O, ty: TypeId) -> TypeShape {
    if oracle.is_undefined(ty) {
        TypeShape::None
    } else if is_function_type(oracle, ty) {
        TypeShape::Function
    } else if is_string_type(oracle, ty) {
        TypeShape::String
    } else if is_boolean_type(oracle, ty) {
        TypeShape::Boolean
    } else if is_array_type(oracle, ty) {
        TypeShape::Array
    } else if is_plain_object_type(oracle, ty) {
        TypeShape::PlainObject
    } else {
        TypeShape::None
    }
}

/// Whether `ty` has a call signature, or is a union with a callable member.
pub fn is_function_type<O: TypeOracle + ?Sized>(oracle: &O, ty: TypeId) -> bool {
    function_at(oracle, ty, 0)
}

fn function_at<O: TypeOracle + ?Sized>(oracle: &O, ty: TypeId, depth: u32) -> bool {
    if oracle.call_signature_count(ty) > 0 {
        return true;
    }
    if depth >= MAX_UNION_CLASSIFY_DEPTH {
        return false;
    }
    oracle.union_members(ty).is_some_and(|members| {
        members
            .iter()
            .any(|&member| function_at(oracle, member, depth + 1))
    })
}

/// Whether `ty` is a union whose every member, ignoring `undefined`,
/// satisfies `matches`.
fn every_defined_member<O: TypeOracle + ?Sized>(
    oracle: &O,
    ty: TypeId,
    depth: u32,
    matches: fn(&O, TypeId, u32) -> bool,
) -> bool {
    if depth >= MAX_UNION_CLASSIFY_DEPTH {
        return false;
    }
    let Some(members) = oracle.union_members(ty) else {
        return false;
    };
    let mut defined = members
        .iter()
        .copied()
        .filter(|&member| !oracle.is_undefined(member))
        .peekable();
    defined.peek().is_some() && defined.all(|member| matches(oracle, member, depth + 1))
}

/// String, string literal and template literal types.
pub fn is_string_type<O: TypeOracle + ?Sized>(oracle: &O, ty: TypeId) -> bool {
    string_at(oracle, ty, 0)
}

fn string_at<O: TypeOracle + ?Sized>(oracle: &O, ty: TypeId, depth: u32) -> bool {
    let flags = oracle.type_flags(ty);
    if flags.contains(TypeFlags::UNDEFINED) {
        return false;
    }
    if flags.intersects(TypeFlags::STRING_LIKE) {
        return true;
    }
    every_defined_member(oracle, ty, depth, string_at)
}

/// The primitive `boolean`. Boolean literals alone do not count.
pub fn is_boolean_type<O: TypeOracle + ?Sized>(oracle: &O, ty: TypeId) -> bool {
    boolean_at(oracle, ty, 0)
}

fn boolean_at<O: TypeOracle + ?Sized>(oracle: &O, ty: TypeId, depth: u32) -> bool {
    let flags = oracle.type_flags(ty);
    if flags.contains(TypeFlags::UNDEFINED) {
        return false;
    }
    if flags.contains(TypeFlags::BOOLEAN) {
        return true;
    }
    every_defined_member(oracle, ty, depth, boolean_at)
}

/// Array-like types, tuples included. `any` is never an array.
pub fn is_array_type<O: TypeOracle + ?Sized>(oracle: &O, ty: TypeId) -> bool {
    array_at(oracle, ty, 0)
}

fn array_at<O: TypeOracle + ?Sized>(oracle: &O, ty: TypeId, depth: u32) -> bool {
    let flags = oracle.type_flags(ty);
    if flags.intersects(TypeFlags::ANY | TypeFlags::UNDEFINED) {
        return false;
    }
    if oracle.is_array_like(ty) {
        return true;
    }
    every_defined_member(oracle, ty, depth, array_at)
}

/// Object types other than arrays, class instances and `RegExp`.
pub fn is_plain_object_type<O: TypeOracle + ?Sized>(oracle: &O, ty: TypeId) -> bool {
    plain_object_at(oracle, ty, 0)
}

fn plain_object_at<O: TypeOracle + ?Sized>(oracle: &O, ty: TypeId, depth: u32) -> bool {
    let flags = oracle.type_flags(ty);
    if flags.contains(TypeFlags::UNDEFINED) || oracle.is_array_like(ty) {
        return false;
    }
    if flags.contains(TypeFlags::OBJECT) {
        return !oracle.object_flags(ty).contains(ObjectFlags::CLASS)
            && oracle.symbol_name(ty) != Some("RegExp");
    }
    every_defined_member(oracle, ty, depth, plain_object_at)
}

/// Properties an object literal of type `ty` can be completed with.
///
/// Every plain-object member of a union contributes its properties; callable
/// members contribute nothing. When several members contribute, a name
/// declared by more than one of them is dropped, since no single value
/// snippet fits every branch.
pub fn properties_for_completion<O: TypeOracle + ?Sized>(
    oracle: &O,
    ty: TypeId,
) -> Vec<PropertySymbol> {
    let members = match oracle.union_members(ty) {
        Some(members) => members.to_vec(),
        None => vec![ty],
    };

    let mut contributing = 0;
    let mut properties = Vec::new();
    for member in members {
        if is_function_type(oracle, member) || !is_plain_object_type(oracle, member) {
            continue;
        }
        contributing += 1;
        properties.extend(oracle.properties_of_type(member));
    }

    if contributing <= 1 {
        return properties;
    }

    let mut occurrences: FxHashMap<&str, usize> = FxHashMap::default();
    for property in &properties {
        *occurrences.entry(property.name.as_str()).or_default() += 1;
    }
    let shared: Vec<String> = occurrences
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(name, _)| name.to_string())
        .collect();
    if !shared.is_empty() {
        trace!(?shared, contributing, "dropping properties shared by union members");
    }
    properties.retain(|property| !shared.contains(&property.name));
    properties
}
