//! Type representation for the in-memory oracle.
//!
//! Types are identified by [`TypeId`], a lightweight handle into the
//! [`crate::TypeInterner`]. Structural content lives in [`TypeKey`]; two types
//! with the same key share one id, so type equality is id equality.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Handle to an interned type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const ANY: TypeId = TypeId(0);
    pub const UNKNOWN: TypeId = TypeId(1);
    pub const NEVER: TypeId = TypeId(2);
    pub const VOID: TypeId = TypeId(3);
    pub const UNDEFINED: TypeId = TypeId(4);
    pub const NULL: TypeId = TypeId(5);
    pub const BOOLEAN: TypeId = TypeId(6);
    pub const NUMBER: TypeId = TypeId(7);
    pub const STRING: TypeId = TypeId(8);
    pub const BIGINT: TypeId = TypeId(9);
    pub const SYMBOL: TypeId = TypeId(10);
    /// The non-primitive `object` keyword type.
    pub const OBJECT: TypeId = TypeId(11);

    /// Number of pre-registered intrinsic types.
    pub const INTRINSIC_COUNT: u32 = 12;

    #[inline]
    pub const fn is_intrinsic(self) -> bool {
        self.0 < Self::INTRINSIC_COUNT
    }
}

/// Built-in keyword types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntrinsicKind {
    Any,
    Unknown,
    Never,
    Void,
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Bigint,
    Symbol,
    Object,
}

impl IntrinsicKind {
    /// All intrinsics, in `TypeId` order.
    pub const ALL: [IntrinsicKind; TypeId::INTRINSIC_COUNT as usize] = [
        IntrinsicKind::Any,
        IntrinsicKind::Unknown,
        IntrinsicKind::Never,
        IntrinsicKind::Void,
        IntrinsicKind::Undefined,
        IntrinsicKind::Null,
        IntrinsicKind::Boolean,
        IntrinsicKind::Number,
        IntrinsicKind::String,
        IntrinsicKind::Bigint,
        IntrinsicKind::Symbol,
        IntrinsicKind::Object,
    ];

    pub const fn type_flags(self) -> TypeFlags {
        match self {
            IntrinsicKind::Any => TypeFlags::ANY,
            IntrinsicKind::Unknown => TypeFlags::UNKNOWN,
            IntrinsicKind::Never => TypeFlags::NEVER,
            IntrinsicKind::Void => TypeFlags::VOID,
            IntrinsicKind::Undefined => TypeFlags::UNDEFINED,
            IntrinsicKind::Null => TypeFlags::NULL,
            IntrinsicKind::Boolean => TypeFlags::BOOLEAN,
            IntrinsicKind::Number => TypeFlags::NUMBER,
            IntrinsicKind::String => TypeFlags::STRING,
            IntrinsicKind::Bigint => TypeFlags::BIGINT,
            IntrinsicKind::Symbol => TypeFlags::ES_SYMBOL,
            IntrinsicKind::Object => TypeFlags::NON_PRIMITIVE,
        }
    }
}

/// Literal value types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    String(String),
    /// Stored as IEEE-754 bits so the key stays hashable.
    Number(u64),
    Boolean(bool),
}

/// A property of an object type.
///
/// `type_id` is the declared type; for an optional property it already
/// includes `undefined`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertySymbol {
    pub name: String,
    pub type_id: TypeId,
    pub optional: bool,
}

impl PropertySymbol {
    pub fn new(name: impl Into<String>, type_id: TypeId) -> Self {
        PropertySymbol {
            name: name.into(),
            type_id,
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, type_id: TypeId) -> Self {
        PropertySymbol {
            name: name.into(),
            type_id,
            optional: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectShape {
    pub properties: Vec<PropertySymbol>,
    /// Name of the declaring symbol, `None` for anonymous object types.
    pub symbol: Option<String>,
    pub flags: ObjectFlags,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionShape {
    pub params: Vec<TypeId>,
    pub return_type: TypeId,
}

/// Structural content of a type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKey {
    Intrinsic(IntrinsicKind),
    Literal(LiteralValue),
    TemplateLiteral(Vec<String>),
    /// Members in declaration order, never nested, at least two.
    Union(Vec<TypeId>),
    Object(ObjectShape),
    Array(TypeId),
    Tuple(Vec<TypeId>),
    Function(FunctionShape),
}

bitflags! {
    /// Coarse type categories, in the manner of a checker's `TypeFlags`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u32 {
        const ANY = 1 << 0;
        const UNKNOWN = 1 << 1;
        const STRING = 1 << 2;
        const NUMBER = 1 << 3;
        const BOOLEAN = 1 << 4;
        const BIGINT = 1 << 5;
        const STRING_LITERAL = 1 << 6;
        const NUMBER_LITERAL = 1 << 7;
        const BOOLEAN_LITERAL = 1 << 8;
        const TEMPLATE_LITERAL = 1 << 9;
        const ES_SYMBOL = 1 << 10;
        const VOID = 1 << 11;
        const UNDEFINED = 1 << 12;
        const NULL = 1 << 13;
        const NEVER = 1 << 14;
        const OBJECT = 1 << 15;
        const UNION = 1 << 16;
        const NON_PRIMITIVE = 1 << 17;

        const STRING_LIKE = Self::STRING.bits()
            | Self::STRING_LITERAL.bits()
            | Self::TEMPLATE_LITERAL.bits();
        const BOOLEAN_LIKE = Self::BOOLEAN.bits() | Self::BOOLEAN_LITERAL.bits();
    }
}

bitflags! {
    /// Flags on object types.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ObjectFlags: u32 {
        const CLASS = 1 << 0;
        const INTERFACE = 1 << 1;
        const REFERENCE = 1 << 2;
        const TUPLE = 1 << 3;
        const ANONYMOUS = 1 << 4;
    }
}
