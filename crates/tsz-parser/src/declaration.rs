//! Structured function declarations.
//!
//! Refactors that rebuild a declaration (rather than patching its text) go
//! through this small model: a standalone signature line is parsed into a
//! [`FunctionDeclaration`], transformed, and printed back with
//! [`crate::DeclarationPrinter`].
//!
//! The parser only understands the declaration header. Types, initializers
//! and type parameters are kept as verbatim text; bracket nesting (including
//! `<...>` in generic types) and string literals are respected when looking
//! for separators.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// Leading keywords such as `export`, `default`, `async`.
    pub modifiers: Vec<String>,
    pub asterisk_token: bool,
    pub name: String,
    /// Text between `<` and `>`, if the function is generic.
    pub type_parameters: Option<String>,
    pub parameters: Vec<ParameterDeclaration>,
    pub return_type: Option<TypeNode>,
    /// `None` for an overload or ambient declaration, otherwise the body
    /// statements, one per entry.
    pub body: Option<Vec<String>>,
}

impl FunctionDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            modifiers: Vec::new(),
            asterisk_token: false,
            name: name.into(),
            type_parameters: None,
            parameters: Vec::new(),
            return_type: None,
            body: Some(Vec::new()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDeclaration {
    pub dot_dot_dot_token: bool,
    pub name: BindingName,
    pub question_token: bool,
    pub type_annotation: Option<TypeNode>,
    pub initializer: Option<String>,
}

impl ParameterDeclaration {
    pub fn new(name: BindingName, type_annotation: Option<TypeNode>) -> Self {
        Self {
            dot_dot_dot_token: false,
            name,
            question_token: false,
            type_annotation,
            initializer: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindingName {
    Identifier(String),
    ObjectBindingPattern(Vec<BindingElement>),
    /// A destructuring pattern kept as source text.
    Pattern(String),
}

impl BindingName {
    /// The identifier text, if this is a plain identifier.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            BindingName::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

/// One element of an object binding pattern: `name` or `property_name: name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingElement {
    pub property_name: Option<String>,
    pub name: String,
}

impl BindingElement {
    pub fn shorthand(name: impl Into<String>) -> Self {
        Self {
            property_name: None,
            name: name.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeNode {
    /// A type reproduced verbatim.
    Text(String),
    /// An inline object type `{ a: A; b?: B; }`.
    TypeLiteral(Vec<PropertySignature>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySignature {
    pub name: String,
    pub question_token: bool,
    pub type_node: Option<TypeNode>,
}

// ---------------------------------------------------------------------------
// Bracket-aware scanning
// ---------------------------------------------------------------------------

/// Bytes of `text` outside string literals, with the bracket depth in effect
/// before each byte.
struct CodeBytes<'a> {
    bytes: &'a [u8],
    idx: usize,
    depth: i32,
    prev: u8,
}

impl<'a> CodeBytes<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            idx: 0,
            depth: 0,
            prev: 0,
        }
    }

    fn skip_string(&mut self, quote: u8) {
        while self.idx < self.bytes.len() {
            let ch = self.bytes[self.idx];
            self.idx += 1;
            if ch == b'\\' {
                self.idx += 1;
            } else if ch == quote {
                break;
            }
        }
    }
}

impl Iterator for CodeBytes<'_> {
    type Item = (usize, u8, i32);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.bytes.len() {
            let idx = self.idx;
            let ch = self.bytes[idx];
            self.idx += 1;

            if matches!(ch, b'"' | b'\'' | b'`') {
                self.skip_string(ch);
                self.prev = ch;
                continue;
            }

            let depth = self.depth;
            match ch {
                b'(' | b'[' | b'{' | b'<' => self.depth += 1,
                b')' | b']' | b'}' => self.depth -= 1,
                // `=>` is an arrow, not a closing angle bracket.
                b'>' if self.prev != b'=' => self.depth -= 1,
                _ => {}
            }
            self.prev = ch;
            return Some((idx, ch, depth));
        }
        None
    }
}

#[inline]
fn is_closer(prev: u8, ch: u8) -> bool {
    matches!(ch, b')' | b']' | b'}') || (ch == b'>' && prev != b'=')
}

/// Index of the bracket closing the one at `open_idx`.
pub fn find_matching_close(text: &str, open_idx: usize) -> Option<usize> {
    let tail = text.get(open_idx..)?;
    if !matches!(tail.as_bytes().first(), Some(b'(' | b'[' | b'{' | b'<')) {
        return None;
    }
    let mut prev = 0u8;
    for (idx, ch, depth) in CodeBytes::new(tail) {
        if idx > 0 && depth == 1 && is_closer(prev, ch) {
            return Some(open_idx + idx);
        }
        prev = ch;
    }
    None
}

/// Split `text` at every `separator` outside brackets and strings.
///
/// Pieces are trimmed; empty pieces (such as after a trailing comma) are
/// dropped.
pub fn split_top_level(text: &str, separator: u8) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut piece_start = 0;
    for (idx, ch, depth) in CodeBytes::new(text) {
        if ch == separator && depth == 0 {
            pieces.push(&text[piece_start..idx]);
            piece_start = idx + 1;
        }
    }
    pieces.push(&text[piece_start..]);
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Index of the first top-level `=` that starts an initializer (not `=>`).
fn find_initializer(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    CodeBytes::new(text)
        .find(|&(idx, ch, depth)| ch == b'=' && depth == 0 && bytes.get(idx + 1) != Some(&b'>'))
        .map(|(idx, _, _)| idx)
}

/// Index of the last `target` byte outside brackets and strings.
fn rfind_top_level(text: &str, target: u8) -> Option<usize> {
    CodeBytes::new(text)
        .filter(|&(_, ch, depth)| ch == target && depth == 0)
        .map(|(idx, _, _)| idx)
        .last()
}

#[inline]
fn is_identifier_byte(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_' || ch == b'$' || ch >= 0x80
}

fn take_identifier(text: &str) -> &str {
    let len = text.bytes().take_while(|&ch| is_identifier_byte(ch)).count();
    &text[..len]
}

fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(keyword)?;
    match rest.bytes().next() {
        Some(ch) if is_identifier_byte(ch) => None,
        _ => Some(rest.trim_start()),
    }
}

// ---------------------------------------------------------------------------
// Signature parsing
// ---------------------------------------------------------------------------

const MODIFIER_KEYWORDS: [&str; 4] = ["export", "default", "declare", "async"];

/// Parse a standalone function declaration header such as
/// `function newFunction(a: number, b: string): JSX.Element {`.
///
/// Only the header is read: a trailing `{`, `{ }` or `{}` marks a body,
/// whose contents are not parsed. Returns `None` when the text is not a
/// function declaration.
pub fn parse_function_signature(text: &str) -> Option<FunctionDeclaration> {
    let mut rest = text.trim();

    let mut modifiers = Vec::new();
    'modifiers: loop {
        for keyword in MODIFIER_KEYWORDS {
            if let Some(after) = strip_keyword(rest, keyword) {
                modifiers.push(keyword.to_string());
                rest = after;
                continue 'modifiers;
            }
        }
        break;
    }

    rest = strip_keyword(rest, "function")?;
    let asterisk_token = rest.starts_with('*');
    if asterisk_token {
        rest = rest[1..].trim_start();
    }

    let name = take_identifier(rest);
    if name.is_empty() {
        return None;
    }
    rest = rest[name.len()..].trim_start();

    let mut type_parameters = None;
    if rest.starts_with('<') {
        let close = find_matching_close(rest, 0)?;
        type_parameters = Some(rest[1..close].trim().to_string());
        rest = rest[close + 1..].trim_start();
    }

    if !rest.starts_with('(') {
        return None;
    }
    let close = find_matching_close(rest, 0)?;
    let parameters = split_top_level(&rest[1..close], b',')
        .into_iter()
        .map(parse_parameter)
        .collect::<Option<Vec<_>>>()?;
    rest = rest[close + 1..].trim_start();

    let (return_type, has_body) = if let Some(after) = rest.strip_prefix(':') {
        match rfind_top_level(after, b'{') {
            Some(brace) if !is_type_literal_tail(after, brace) => (after[..brace].trim(), true),
            _ => (after.trim().trim_end_matches(';').trim_end(), false),
        }
    } else if rest.starts_with('{') {
        ("", true)
    } else if rest.is_empty() || rest == ";" {
        ("", false)
    } else {
        return None;
    };

    Some(FunctionDeclaration {
        modifiers,
        asterisk_token,
        name: name.to_string(),
        type_parameters,
        parameters,
        return_type: (!return_type.is_empty()).then(|| TypeNode::Text(return_type.to_string())),
        body: has_body.then(Vec::new),
    })
}

/// Whether the top-level `{` at `brace` starts a type literal that is the
/// whole remainder of a bodiless declaration (`: { a: string };`).
fn is_type_literal_tail(after: &str, brace: usize) -> bool {
    let before = after[..brace].trim();
    if !before.is_empty() {
        return false;
    }
    match find_matching_close(after, brace) {
        Some(close) => {
            let tail = after[close + 1..].trim();
            tail.is_empty() || tail == ";"
        }
        None => false,
    }
}

/// Parse one parameter: `...name?: Type = initializer`.
fn parse_parameter(text: &str) -> Option<ParameterDeclaration> {
    let mut rest = text.trim();

    let dot_dot_dot_token = rest.starts_with("...");
    if dot_dot_dot_token {
        rest = rest[3..].trim_start();
    }

    let name = if rest.starts_with('{') || rest.starts_with('[') {
        let close = find_matching_close(rest, 0)?;
        let pattern = &rest[..=close];
        rest = rest[close + 1..].trim_start();
        BindingName::Pattern(pattern.to_string())
    } else {
        let ident = take_identifier(rest);
        if ident.is_empty() {
            return None;
        }
        rest = rest[ident.len()..].trim_start();
        BindingName::Identifier(ident.to_string())
    };

    let question_token = rest.starts_with('?');
    if question_token {
        rest = rest[1..].trim_start();
    }

    let (annotation, initializer) = match find_initializer(rest) {
        Some(eq) => (&rest[..eq], Some(rest[eq + 1..].trim().to_string())),
        None => (rest, None),
    };

    let type_annotation = match annotation.trim().strip_prefix(':') {
        Some(ty) if !ty.trim().is_empty() => Some(TypeNode::Text(ty.trim().to_string())),
        Some(_) => return None,
        None if annotation.trim().is_empty() => None,
        None => return None,
    };

    Some(ParameterDeclaration {
        dot_dot_dot_token,
        name,
        question_token,
        type_annotation,
        initializer,
    })
}
