//! Genex is a generative pattern engine.
//!
//! A genex pattern looks like a small regular expression, but instead of
//! matching text it is compiled into a tree that produces random strings
//! belonging to the pattern's language. This is handy for synthesizing
//! realistic-looking field values such as phone numbers or tokens.
//!
//! | Syntax | Meaning |
//! |---|---|
//! | `x` | the literal character `x` |
//! | `\w \a \l \u \d \p \s` | alphanumeric, letter, lowercase, uppercase, digit, punctuation, whitespace |
//! | `.` | any printable character |
//! | `(...)` | group |
//! | `[...]` | one of the enclosed items |
//! | `X\|Y` | `X` or `Y` |
//! | `X?` | `X` or nothing |
//! | `X{n}` / `X{m,n}` | `X` repeated `n` times / between `m` and `n` times |
//!
//! # Example
//!
//! ```rust
//! use genex::compile;
//!
//! let pattern = compile(r"(320|333|347)\d{7}").unwrap();
//! let number = pattern.generate();
//! assert_eq!(number.len(), 10);
//! assert!(number.chars().all(|c| c.is_ascii_digit()));
//! ```

pub mod genex;
pub mod lexer;
pub mod parser;
pub mod scanner;
pub mod tokenizer;
pub mod utils;

pub use genex::{Genex, Node, Pattern, compile};
pub use utils::{GenexError, Result};

// Re-export the pipeline stages
pub use lexer::{Lexeme, Lexer};
pub use parser::{MergeMode, Parser};
pub use scanner::Scanner;
pub use tokenizer::{Token, TokenKind, Tokenizer};
