use std::fmt::{self, Display, Formatter};
use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    static ref INTEGER : Regex = Regex::new(r"^[+-]?\d+$").unwrap();
    static ref NUMBER  : Regex = Regex::new(r"^[+-]?(\d+([.]\d*)?([eE][+-]?\d+)?|[.]\d+([eE][+-]?\d+)?)$").unwrap();
}

/// (line, token)
pub type Spanned<T> = (usize, T);

#[derive(Debug, Clone, PartialEq)]
pub enum Tokens {
    /// Identifiers and bare numeric literals.
    Word(String),
    /// Quoted string with escapes already resolved.
    STR(String),
    LeftBracket,
    RightBracket
}

impl Tokens {
    pub fn is_number(&self) -> bool {
        match self {
            Tokens::Word(s) => NUMBER.is_match(s),
            _               => false
        }
    }

    pub fn is_integer(&self) -> bool {
        match self {
            Tokens::Word(s) => INTEGER.is_match(s),
            _               => false
        }
    }

    pub fn is_bool(&self) -> bool {
        match self {
            Tokens::Word(s) => s == "true" || s == "false",
            _               => false
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Tokens::STR(_))
    }

    /// Whether the token can be a value in a parameter list.
    pub fn is_parameter(&self) -> bool {
        self.is_string() || self.is_number() || self.is_bool()
    }
}

impl Display for Tokens {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Tokens::Word(s)      => write!(f, "{}", s),
            Tokens::STR(s)       => write!(f, "\"{}\"", s),
            Tokens::LeftBracket  => write!(f, "["),
            Tokens::RightBracket => write!(f, "]")
        }
    }
}
