//! Token records as reported by `agalang-core tokens`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A 1-based source position.
#[derive(
    Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The span a token occupies in its source file.
///
/// `length` and `file_name` are emitted by the compiler but are optional on input.
/// Keys this crate does not know about are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Location {
    pub fn new(start: Position, end: Position) -> Self {
        Location {
            start,
            end,
            length: None,
            file_name: None,
            extra: Map::new(),
        }
    }
}

/// Kind of symbol a token refers to.
///
/// Names the compiler adds later land in `Unknown` with their spelling intact.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyntaxTokenType {
    Class,
    Function,
    Variable,
    Parameter,
    Module,
    KeywordControl,
    #[serde(untagged)]
    Unknown(String),
}

impl SyntaxTokenType {
    /// Name used by editors for semantic highlighting.
    pub fn semantic_name(&self) -> &str {
        match self {
            SyntaxTokenType::Class => "class",
            SyntaxTokenType::Function => "function",
            SyntaxTokenType::Variable => "variable",
            SyntaxTokenType::Parameter => "parameter",
            SyntaxTokenType::Module => "module",
            SyntaxTokenType::KeywordControl => "keyword",
            SyntaxTokenType::Unknown(name) => name,
        }
    }
}

impl fmt::Display for SyntaxTokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.semantic_name())
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyntaxTokenModifier {
    Constant,
    Iterable,
    #[serde(untagged)]
    Unknown(String),
}

impl SyntaxTokenModifier {
    pub fn semantic_name(&self) -> &str {
        match self {
            SyntaxTokenModifier::Constant => "readonly",
            SyntaxTokenModifier::Iterable => "iterable",
            SyntaxTokenModifier::Unknown(name) => name,
        }
    }
}

impl fmt::Display for SyntaxTokenModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.semantic_name())
    }
}

/// One token of the dump.
///
/// `definition` is where the referenced symbol was declared and `location` is
/// where this occurrence appears. Everything else is carried through exactly
/// as the compiler wrote it: absent fields stay absent, and `data_type` plus
/// any key not listed here live in `extra`.
///
/// # Example
/// ```
/// use agal_tokens::{Location, Position, TokenRecord};
///
/// let token = TokenRecord::new(
///     Position::new(3, 5),
///     Location::new(Position::new(3, 5), Position::new(3, 9)),
/// );
/// assert!(token.is_declaration_site());
/// assert!(!token.is_original_decl());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub definition: Position,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<SyntaxTokenType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_modifier: Option<Vec<SyntaxTokenModifier>>,
    #[serde(default, rename = "is_original_decl", skip_serializing_if = "Option::is_none")]
    pub original_decl: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenRecord {
    pub fn new(definition: Position, location: Location) -> Self {
        TokenRecord {
            definition,
            location,
            token_type: None,
            token_modifier: None,
            original_decl: None,
            extra: Map::new(),
        }
    }

    /// True when this occurrence starts exactly where its symbol was declared.
    pub fn is_declaration_site(&self) -> bool {
        self.definition.line == self.location.start.line
            && self.definition.column == self.location.start.column
    }

    pub fn modifiers(&self) -> &[SyntaxTokenModifier] {
        self.token_modifier.as_deref().unwrap_or(&[])
    }

    /// Inferred type of the symbol, `None` when absent or `null`.
    pub fn data_type(&self) -> Option<&Value> {
        self.extra.get("data_type").filter(|v| !v.is_null())
    }

    pub fn is_original_decl(&self) -> bool {
        self.original_decl.unwrap_or(false)
    }
}

/// What the compiler prints on stdout for a successful `tokens` run.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDump {
    pub tokens: Vec<TokenRecord>,
    /// Export types of the module, kept opaque.
    pub module: Option<Value>,
}
