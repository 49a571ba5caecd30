//! Node kinds and stored node data.

use super::base::NodeIndex;
use serde::{Deserialize, Serialize};

/// The syntax kinds the engine distinguishes.
///
/// Hosts map their own kind tags onto this set; anything the engine never
/// inspects structurally may be reported as [`SyntaxKind::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum SyntaxKind {
    Unknown = 0,
    SourceFile,

    // Tokens and literals
    Identifier,
    PrivateIdentifier,
    StringLiteral,
    NumericLiteral,
    NoSubstitutionTemplateLiteral,
    TemplateExpression,

    // Expressions
    ObjectLiteralExpression,
    PropertyAssignment,
    ShorthandPropertyAssignment,
    SpreadAssignment,
    MethodDeclaration,
    ArrayLiteralExpression,
    CallExpression,
    NewExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    ParenthesizedExpression,
    ArrowFunction,
    FunctionExpression,
    BinaryExpression,
    ConditionalExpression,
    AsExpression,
    SatisfiesExpression,

    // Statements and declarations
    VariableStatement,
    VariableDeclarationList,
    VariableDeclaration,
    FunctionDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    TypeAliasDeclaration,
    EnumDeclaration,
    ModuleDeclaration,
    ImportDeclaration,
    ExportDeclaration,
    ExportAssignment,
    Parameter,
    Block,
    ExpressionStatement,
    ReturnStatement,
    IfStatement,
    ForStatement,
    WhileStatement,

    // Types
    TypeReference,
    TypeLiteral,
    PropertySignature,
    UnionType,

    // JSX
    JsxElement,
    JsxSelfClosingElement,
    JsxOpeningElement,
    JsxClosingElement,
    JsxFragment,
    JsxOpeningFragment,
    JsxClosingFragment,
    JsxAttributes,
    JsxAttribute,
    JsxSpreadAttribute,
    JsxExpression,
    JsxText,
}

impl SyntaxKind {
    #[inline]
    pub const fn is_identifier(self) -> bool {
        matches!(self, SyntaxKind::Identifier | SyntaxKind::PrivateIdentifier)
    }

    #[inline]
    pub const fn is_jsx_element_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::JsxElement | SyntaxKind::JsxSelfClosingElement | SyntaxKind::JsxFragment
        )
    }

    #[inline]
    pub const fn is_string_literal_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral
        )
    }
}

/// A stored node.
///
/// `pos` is the full start (leading trivia included), `start` the first
/// significant character. Links are indices into the owning arena.
#[derive(Clone, Debug)]
pub struct Node {
    pub kind: SyntaxKind,
    pub pos: u32,
    pub start: u32,
    pub end: u32,
    pub parent: NodeIndex,
    pub children: Vec<NodeIndex>,
}

impl Node {
    #[inline]
    pub fn leading_trivia_width(&self) -> u32 {
        self.start - self.pos
    }
}
