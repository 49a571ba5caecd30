//! Type interning for structural deduplication.
//!
//! `TypeInterner` is the in-memory [`TypeOracle`]: embedders that convert a
//! foreign checker's types once per request, and tests, build types through
//! its constructors. Each unique [`TypeKey`] is stored once and its position
//! in the table is its [`TypeId`], so intrinsics pre-registered in
//! [`IntrinsicKind::ALL`] order line up with the `TypeId` constants.

use crate::oracle::TypeOracle;
use crate::types::{
    FunctionShape, IntrinsicKind, LiteralValue, ObjectFlags, ObjectShape, PropertySymbol,
    TypeFlags, TypeId, TypeKey,
};
use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashMap};
use tsz_parser::NodeIndex;

#[derive(Clone, Debug)]
pub struct TypeInterner {
    types: IndexSet<TypeKey, FxBuildHasher>,
    /// Contextual types keyed by expression node.
    contextual_types: FxHashMap<NodeIndex, TypeId>,
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInterner {
    /// Create a new interner with pre-registered intrinsics.
    pub fn new() -> Self {
        let mut types = IndexSet::with_hasher(FxBuildHasher);
        for kind in IntrinsicKind::ALL {
            types.insert(TypeKey::Intrinsic(kind));
        }
        TypeInterner {
            types,
            contextual_types: FxHashMap::default(),
        }
    }

    pub fn intern(&mut self, key: TypeKey) -> TypeId {
        let (index, _) = self.types.insert_full(key);
        TypeId(index as u32)
    }

    pub fn lookup(&self, id: TypeId) -> Option<&TypeKey> {
        self.types.get_index(id.0 as usize)
    }

    /// Number of interned types, intrinsics included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn literal_string(&mut self, value: &str) -> TypeId {
        self.intern(TypeKey::Literal(LiteralValue::String(value.to_string())))
    }

    pub fn literal_number(&mut self, value: f64) -> TypeId {
        self.intern(TypeKey::Literal(LiteralValue::Number(value.to_bits())))
    }

    pub fn literal_boolean(&mut self, value: bool) -> TypeId {
        self.intern(TypeKey::Literal(LiteralValue::Boolean(value)))
    }

    /// A template literal type, given its literal text parts.
    pub fn template_literal(&mut self, parts: &[&str]) -> TypeId {
        let parts = parts.iter().map(|part| part.to_string()).collect();
        self.intern(TypeKey::TemplateLiteral(parts))
    }

    /// Intern a union type.
    ///
    /// Nested unions are flattened and duplicate members dropped, keeping
    /// first-occurrence order. An empty union is `never`; a single member is
    /// returned as-is.
    pub fn union(&mut self, members: Vec<TypeId>) -> TypeId {
        let mut flat: Vec<TypeId> = Vec::with_capacity(members.len());
        for member in members {
            match self.lookup(member) {
                Some(TypeKey::Union(inner)) => {
                    for &inner_member in inner {
                        if !flat.contains(&inner_member) {
                            flat.push(inner_member);
                        }
                    }
                }
                _ => {
                    if !flat.contains(&member) {
                        flat.push(member);
                    }
                }
            }
        }

        match flat.len() {
            0 => TypeId::NEVER,
            1 => flat[0],
            _ => self.intern(TypeKey::Union(flat)),
        }
    }

    /// `ty | undefined`
    pub fn optional_of(&mut self, ty: TypeId) -> TypeId {
        self.union(vec![ty, TypeId::UNDEFINED])
    }

    /// An anonymous object type (`{ a: string }`).
    pub fn object(&mut self, properties: Vec<PropertySymbol>) -> TypeId {
        self.object_with(properties, None, ObjectFlags::ANONYMOUS)
    }

    pub fn interface(&mut self, name: &str, properties: Vec<PropertySymbol>) -> TypeId {
        self.object_with(properties, Some(name), ObjectFlags::INTERFACE)
    }

    /// The instance type of a class.
    pub fn class_instance(&mut self, name: &str, properties: Vec<PropertySymbol>) -> TypeId {
        self.object_with(properties, Some(name), ObjectFlags::CLASS)
    }

    /// The built-in `RegExp` interface type.
    pub fn regexp(&mut self) -> TypeId {
        let properties = vec![
            PropertySymbol::new("source", TypeId::STRING),
            PropertySymbol::new("flags", TypeId::STRING),
            PropertySymbol::new("lastIndex", TypeId::NUMBER),
        ];
        self.interface("RegExp", properties)
    }

    fn object_with(
        &mut self,
        properties: Vec<PropertySymbol>,
        symbol: Option<&str>,
        flags: ObjectFlags,
    ) -> TypeId {
        let properties = properties
            .into_iter()
            .map(|mut property| {
                if property.optional {
                    property.type_id = self.optional_of(property.type_id);
                }
                property
            })
            .collect();
        self.intern(TypeKey::Object(ObjectShape {
            properties,
            symbol: symbol.map(str::to_string),
            flags,
        }))
    }

    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.intern(TypeKey::Array(element))
    }

    pub fn tuple(&mut self, elements: Vec<TypeId>) -> TypeId {
        self.intern(TypeKey::Tuple(elements))
    }

    /// A function type with a single call signature.
    pub fn function(&mut self, params: Vec<TypeId>, return_type: TypeId) -> TypeId {
        self.intern(TypeKey::Function(FunctionShape {
            params,
            return_type,
        }))
    }

    /// Record the type the context expects at `node`.
    pub fn set_contextual_type(&mut self, node: NodeIndex, ty: TypeId) {
        self.contextual_types.insert(node, ty);
    }
}

impl TypeOracle for TypeInterner {
    fn type_flags(&self, ty: TypeId) -> TypeFlags {
        match self.lookup(ty) {
            Some(TypeKey::Intrinsic(kind)) => kind.type_flags(),
            Some(TypeKey::Literal(LiteralValue::String(_))) => TypeFlags::STRING_LITERAL,
            Some(TypeKey::Literal(LiteralValue::Number(_))) => TypeFlags::NUMBER_LITERAL,
            Some(TypeKey::Literal(LiteralValue::Boolean(_))) => TypeFlags::BOOLEAN_LITERAL,
            Some(TypeKey::TemplateLiteral(_)) => TypeFlags::TEMPLATE_LITERAL,
            Some(TypeKey::Union(_)) => TypeFlags::UNION,
            Some(
                TypeKey::Object(_) | TypeKey::Array(_) | TypeKey::Tuple(_) | TypeKey::Function(_),
            ) => TypeFlags::OBJECT,
            None => TypeFlags::empty(),
        }
    }

    fn object_flags(&self, ty: TypeId) -> ObjectFlags {
        match self.lookup(ty) {
            Some(TypeKey::Object(shape)) => shape.flags,
            Some(TypeKey::Array(_)) => ObjectFlags::REFERENCE,
            Some(TypeKey::Tuple(_)) => ObjectFlags::REFERENCE | ObjectFlags::TUPLE,
            Some(TypeKey::Function(_)) => ObjectFlags::ANONYMOUS,
            _ => ObjectFlags::empty(),
        }
    }

    fn union_members(&self, ty: TypeId) -> Option<&[TypeId]> {
        match self.lookup(ty) {
            Some(TypeKey::Union(members)) => Some(members),
            _ => None,
        }
    }

    fn call_signature_count(&self, ty: TypeId) -> usize {
        match self.lookup(ty) {
            Some(TypeKey::Function(_)) => 1,
            _ => 0,
        }
    }

    fn is_array_like(&self, ty: TypeId) -> bool {
        matches!(self.lookup(ty), Some(TypeKey::Array(_) | TypeKey::Tuple(_)))
    }

    fn symbol_name(&self, ty: TypeId) -> Option<&str> {
        match self.lookup(ty) {
            Some(TypeKey::Object(shape)) => shape.symbol.as_deref(),
            Some(TypeKey::Array(_)) => Some("Array"),
            _ => None,
        }
    }

    fn contextual_type(&self, node: NodeIndex) -> Option<TypeId> {
        self.contextual_types.get(&node).copied()
    }

    fn properties_of_type(&self, ty: TypeId) -> Vec<PropertySymbol> {
        match self.lookup(ty) {
            Some(TypeKey::Object(shape)) => shape.properties.clone(),
            _ => Vec::new(),
        }
    }

    fn type_of_property_at(
        &self,
        property: &PropertySymbol,
        _use_site: NodeIndex,
    ) -> Option<TypeId> {
        Some(property.type_id)
    }
}
