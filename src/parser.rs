use crate::genex::Genex;
use crate::lexer::Lexer;
use crate::scanner::Scanner;
use crate::tokenizer::{
    ALPHANUMERIC, DIGITS, LETTERS, LOWERCASE, PRINTABLE, PUNCTUATION, Token, TokenKind,
    Tokenizer, UPPERCASE, WHITESPACE,
};
use crate::utils::{GenexError, Result};

/// How the sequence parsed at one nesting level is combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    Concat,
    Choose,
}

impl MergeMode {
    fn merge(self, sequence: Vec<Genex>) -> Result<Genex> {
        match self {
            MergeMode::Concat => Ok(Genex::concat(sequence)),
            MergeMode::Choose => Genex::choose(sequence),
        }
    }
}

/// Recursive-descent parser turning a token stream into a [`Genex`] tree
#[derive(Debug, Clone)]
pub struct Parser {
    tokenizer: Tokenizer,
}

impl Parser {
    /// Parse the tokens produced by `tokenizer`
    pub fn new(tokenizer: Tokenizer) -> Self {
        Parser { tokenizer }
    }

    /// Build the whole scan, lex and tokenize pipeline over `pattern`
    pub fn from_pattern(pattern: &str) -> Self {
        Parser::new(Tokenizer::new(Lexer::new(Scanner::new(pattern))))
    }

    /// Parse the complete pattern
    pub fn parse(&mut self) -> Result<Genex> {
        self.parse_until(&[TokenKind::End], MergeMode::Concat)
    }

    /// Parse until a token of one of `end_kinds` is consumed, combining the
    /// accumulated nodes according to `merge`
    pub fn parse_until(&mut self, end_kinds: &[TokenKind], merge: MergeMode) -> Result<Genex> {
        self.parse_level(end_kinds, merge, false)
    }

    /// `after_or` marks the right-hand side of a `|`, which must not be empty
    fn parse_level(
        &mut self,
        end_kinds: &[TokenKind],
        merge: MergeMode,
        after_or: bool,
    ) -> Result<Genex> {
        let mut sequence: Vec<Genex> = Vec::new();

        loop {
            let token = self.tokenizer.pop_token()?;

            if end_kinds.contains(&token.kind) {
                break;
            }

            match token.kind {
                TokenKind::End => {
                    let expected = end_kinds
                        .iter()
                        .map(|kind| kind.to_string())
                        .collect::<Vec<_>>()
                        .join(" or ");
                    return Err(GenexError::UnexpectedEndOfInput(format!(
                        "expected {}",
                        expected
                    )));
                }

                TokenKind::Literal => sequence.push(Genex::one_of(&token.value)?),

                TokenKind::Alphanum => sequence.push(Genex::one_of(ALPHANUMERIC)?),
                TokenKind::Alphabetical => sequence.push(Genex::one_of(LETTERS)?),
                TokenKind::Lowercase => sequence.push(Genex::one_of(LOWERCASE)?),
                TokenKind::Uppercase => sequence.push(Genex::one_of(UPPERCASE)?),
                TokenKind::Digit => sequence.push(Genex::one_of(DIGITS)?),
                TokenKind::Punctuation => sequence.push(Genex::one_of(PUNCTUATION)?),
                TokenKind::Space => sequence.push(Genex::one_of(WHITESPACE)?),
                TokenKind::AnyPrintable => sequence.push(Genex::one_of(PRINTABLE)?),

                TokenKind::QuantifierMaybe => {
                    let prev = Self::take_last(&mut sequence, &token)?;
                    sequence.push(Genex::optional(prev));
                }

                TokenKind::QuantifierTimes => {
                    let prev = Self::take_last(&mut sequence, &token)?;
                    sequence.push(Self::apply_times(prev, &token.value)?);
                }

                TokenKind::GroupOpen => {
                    let group = self.parse_until(&[TokenKind::GroupClose], MergeMode::Concat)?;
                    sequence.push(group);
                }

                TokenKind::ChoiceOpen => {
                    let choice = self.parse_until(&[TokenKind::ChoiceClose], MergeMode::Choose)?;
                    sequence.push(choice);
                }

                TokenKind::GroupClose | TokenKind::ChoiceClose => {
                    return Err(GenexError::UnexpectedToken(token.to_string()));
                }

                TokenKind::Or => {
                    if sequence.is_empty() {
                        return Err(GenexError::EmptyAlternative(
                            "nothing before '|'".to_string(),
                        ));
                    }
                    let first = merge.merge(sequence)?;
                    let remainder = self.parse_level(end_kinds, merge, true)?;
                    return Genex::choose(vec![first, remainder]);
                }
            }
        }

        if after_or && sequence.is_empty() {
            return Err(GenexError::EmptyAlternative(
                "nothing after '|'".to_string(),
            ));
        }
        merge.merge(sequence)
    }

    /// Remove the node a quantifier applies to
    fn take_last(sequence: &mut Vec<Genex>, quantifier: &Token) -> Result<Genex> {
        sequence
            .pop()
            .ok_or_else(|| GenexError::DanglingQuantifier(quantifier.to_string()))
    }

    /// Apply a `{n}` or `{min,max}` quantifier to `node`
    fn apply_times(node: Genex, text: &str) -> Result<Genex> {
        let malformed = || GenexError::MalformedQuantifier(text.to_string());

        let body = text
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(malformed)?;
        let bounds = body
            .split(',')
            .map(|bound| bound.trim().parse::<usize>().map_err(|_| malformed()))
            .collect::<Result<Vec<_>>>()?;

        match bounds.as_slice() {
            [times] => Ok(Genex::repeat(node, *times)),
            [min, max] if min <= max => Genex::repeat_between(node, *min, *max),
            _ => Err(malformed()),
        }
    }
}
