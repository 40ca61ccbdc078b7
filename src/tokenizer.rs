use std::fmt;

use crate::lexer::{Lexeme, Lexer};
use crate::utils::Result;

// Member sets of the character classes
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const ALPHANUMERIC: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
pub const WHITESPACE: &str = " \t\n\r\x0b\x0c";
pub const PRINTABLE: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
    r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##,
    " \t\n\r\x0b\x0c"
);

/// The closed set of token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Literal,

    Alphanum,
    Alphabetical,
    Lowercase,
    Uppercase,
    Digit,
    Punctuation,
    Space,
    AnyPrintable,

    GroupOpen,
    GroupClose,

    ChoiceOpen,
    ChoiceClose,
    Or,

    QuantifierMaybe,
    QuantifierTimes,

    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Literal => "literal",
            TokenKind::Alphanum => "'\\w'",
            TokenKind::Alphabetical => "'\\a'",
            TokenKind::Lowercase => "'\\l'",
            TokenKind::Uppercase => "'\\u'",
            TokenKind::Digit => "'\\d'",
            TokenKind::Punctuation => "'\\p'",
            TokenKind::Space => "'\\s'",
            TokenKind::AnyPrintable => "'.'",
            TokenKind::GroupOpen => "'('",
            TokenKind::GroupClose => "')'",
            TokenKind::ChoiceOpen => "'['",
            TokenKind::ChoiceClose => "']'",
            TokenKind::Or => "'|'",
            TokenKind::QuantifierMaybe => "'?'",
            TokenKind::QuantifierTimes => "'{...}'",
            TokenKind::End => "end of input",
        };
        write!(f, "{}", text)
    }
}

/// A classified lexeme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The literal character or the quantifier's brace text, empty otherwise
    pub value: String,
}

impl Token {
    /// A token without a payload
    pub fn new(kind: TokenKind) -> Self {
        Token {
            kind,
            value: String::new(),
        }
    }

    /// A token carrying literal or quantifier text
    pub fn with_value(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }

    fn literal(c: char) -> Self {
        Token::with_value(TokenKind::Literal, c)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Literal | TokenKind::QuantifierTimes => write!(f, "'{}'", self.value),
            kind => write!(f, "{}", kind),
        }
    }
}

/// Maps lexemes to tokens, with one token of lookahead
#[derive(Debug, Clone)]
pub struct Tokenizer {
    lexer: Lexer,
    next: Option<Token>,
}

impl Tokenizer {
    /// Classify the lexemes produced by `lexer`
    pub fn new(lexer: Lexer) -> Self {
        Tokenizer { lexer, next: None }
    }

    /// Look at the next token without consuming it
    pub fn peek_token(&mut self) -> Result<&Token> {
        let token = match self.next.take() {
            Some(token) => token,
            None => self.read_token()?,
        };
        Ok(self.next.insert(token))
    }

    /// Consume and return the next token
    pub fn pop_token(&mut self) -> Result<Token> {
        match self.next.take() {
            Some(token) => Ok(token),
            None => self.read_token(),
        }
    }

    fn read_token(&mut self) -> Result<Token> {
        let token = match self.lexer.pop_lexeme()? {
            Lexeme::End => Token::new(TokenKind::End),

            Lexeme::Escape('w') => Token::new(TokenKind::Alphanum),
            Lexeme::Escape('a') => Token::new(TokenKind::Alphabetical),
            Lexeme::Escape('l') => Token::new(TokenKind::Lowercase),
            Lexeme::Escape('u') => Token::new(TokenKind::Uppercase),
            Lexeme::Escape('d') => Token::new(TokenKind::Digit),
            Lexeme::Escape('p') => Token::new(TokenKind::Punctuation),
            Lexeme::Escape('s') => Token::new(TokenKind::Space),
            // Unknown escapes fall back to the escaped character
            Lexeme::Escape(c) => Token::literal(c),

            Lexeme::Char('.') => Token::new(TokenKind::AnyPrintable),
            Lexeme::Char('(') => Token::new(TokenKind::GroupOpen),
            Lexeme::Char(')') => Token::new(TokenKind::GroupClose),
            Lexeme::Char('[') => Token::new(TokenKind::ChoiceOpen),
            Lexeme::Char(']') => Token::new(TokenKind::ChoiceClose),
            Lexeme::Char('|') => Token::new(TokenKind::Or),
            Lexeme::Char('?') => Token::new(TokenKind::QuantifierMaybe),
            Lexeme::Char(c) => Token::literal(c),

            Lexeme::Braced(text) => Token::with_value(TokenKind::QuantifierTimes, text),
        };
        Ok(token)
    }
}
