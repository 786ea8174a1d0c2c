//! Primitive tokens of the emitted C++ text.
//!
//! The printer only ever sees these three shapes: a keyword, a symbol, or opaque text (identifiers, literals).

use std::fmt;

/// Reserved words the generator can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Static,
    Extern,
    Constexpr,
    Volatile,
    Const,
    Virtual,
    If,
    Else,
    Switch,
    Case,
    Default,
    For,
    While,
    Break,
    Continue,
    Return,
    Public,
    Protected,
    Private,
    Class,
    Struct,
    Union,
    Enum,
    Namespace,
    Using,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Static => "static",
            Keyword::Extern => "extern",
            Keyword::Constexpr => "constexpr",
            Keyword::Volatile => "volatile",
            Keyword::Const => "const",
            Keyword::Virtual => "virtual",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Switch => "switch",
            Keyword::Case => "case",
            Keyword::Default => "default",
            Keyword::For => "for",
            Keyword::While => "while",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::Return => "return",
            Keyword::Public => "public",
            Keyword::Protected => "protected",
            Keyword::Private => "private",
            Keyword::Class => "class",
            Keyword::Struct => "struct",
            Keyword::Union => "union",
            Keyword::Enum => "enum",
            Keyword::Namespace => "namespace",
            Keyword::Using => "using",
        }
    }
}

/// Punctuation and layout symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Space,
    Newline,
    Colon,
    ScopeResolution,
    Semicolon,
    Comma,
    Dot,
    Ampersand,
    Assign,
    /// `{` - opens an indented block
    OpenBrace,
    /// `}` - closes an indented block
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenAngle,
    CloseAngle,
    DoubleQuote,
    Solidus,
    Hash,
}

impl Symbol {
    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::Space => " ",
            Symbol::Newline => "\n",
            Symbol::Colon => ":",
            Symbol::ScopeResolution => "::",
            Symbol::Semicolon => ";",
            Symbol::Comma => ",",
            Symbol::Dot => ".",
            Symbol::Ampersand => "&",
            Symbol::Assign => "=",
            Symbol::OpenBrace => "{",
            Symbol::CloseBrace => "}",
            Symbol::OpenParen => "(",
            Symbol::CloseParen => ")",
            Symbol::OpenBracket => "[",
            Symbol::CloseBracket => "]",
            Symbol::OpenAngle => "<",
            Symbol::CloseAngle => ">",
            Symbol::DoubleQuote => "\"",
            Symbol::Solidus => "/",
            Symbol::Hash => "#",
        }
    }
}

/// One unit of the flat token sequence produced by emission.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Keyword(Keyword),
    Symbol(Symbol),
    Text(String),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Keyword(keyword) => keyword.as_str(),
            Token::Symbol(symbol) => symbol.as_str(),
            Token::Text(text) => text,
        }
    }
}

impl From<Keyword> for Token {
    fn from(keyword: Keyword) -> Self {
        Token::Keyword(keyword)
    }
}

impl From<Symbol> for Token {
    fn from(symbol: Symbol) -> Self {
        Token::Symbol(symbol)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
