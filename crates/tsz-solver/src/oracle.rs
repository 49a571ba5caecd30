//! The `TypeOracle` trait: type queries answered by the host checker.
//!
//! The engine never infers types. Everything it needs to know about a type
//! goes through this trait, which the host implements over its own checker
//! (and [`crate::TypeInterner`] implements for embedding and tests).

use crate::types::{ObjectFlags, PropertySymbol, TypeFlags, TypeId};
use tsz_parser::NodeIndex;

pub trait TypeOracle {
    fn type_flags(&self, ty: TypeId) -> TypeFlags;

    /// Object flags; empty for non-object types.
    fn object_flags(&self, ty: TypeId) -> ObjectFlags;

    /// Members of a union type, `None` for any other type.
    fn union_members(&self, ty: TypeId) -> Option<&[TypeId]>;

    fn call_signature_count(&self, ty: TypeId) -> usize;

    /// Arrays, readonly arrays and tuples.
    fn is_array_like(&self, ty: TypeId) -> bool;

    /// Name of the symbol declaring the type (`RegExp`, a class name, ...).
    fn symbol_name(&self, ty: TypeId) -> Option<&str>;

    /// The type the context expects for the expression at `node`.
    fn contextual_type(&self, node: NodeIndex) -> Option<TypeId>;

    /// Properties of an object type, in declaration order.
    fn properties_of_type(&self, ty: TypeId) -> Vec<PropertySymbol>;

    /// Type of `property` as seen from `use_site`.
    fn type_of_property_at(&self, property: &PropertySymbol, use_site: NodeIndex)
    -> Option<TypeId>;

    #[inline]
    fn is_union(&self, ty: TypeId) -> bool {
        self.type_flags(ty).contains(TypeFlags::UNION)
    }

    #[inline]
    fn is_undefined(&self, ty: TypeId) -> bool {
        self.type_flags(ty).contains(TypeFlags::UNDEFINED)
    }
}
