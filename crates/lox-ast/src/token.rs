//! Lexical tokens.

use lox_common::{Position, Range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifier that can be assigned to but never read. It never names a
/// binding.
pub const BLANK_IDENT: &str = "_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Semicolon,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    Question,
    Colon,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Literals
    Ident,
    String,
    Number,

    // Keywords
    And,
    Or,
    True,
    False,
    Nil,
    If,
    Else,
    While,
    For,
    Break,
    Continue,
    Fun,
    Return,
    Var,
    Print,

    Eof,
}

/// One token of Lox source text.
///
/// Two tokens are equal only when kind, text and position all match, so every
/// occurrence of an identifier is a distinct map key even when the names are
/// the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub start: Position,
    pub end: Position,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, start: Position, end: Position) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            start,
            end,
        }
    }

    /// Identifier token starting at `start` and ending at the end of `name` on
    /// the same line.
    pub fn ident(name: impl Into<String>, start: Position) -> Self {
        let lexeme = name.into();
        let end = Position::new(start.line, start.column + lexeme.len() as u32);
        Token {
            kind: TokenKind::Ident,
            lexeme,
            start,
            end,
        }
    }

    pub const fn range(&self) -> Range {
        Range::new(self.start, self.end)
    }

    pub fn is_blank(&self) -> bool {
        self.lexeme == BLANK_IDENT
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme)
    }
}
