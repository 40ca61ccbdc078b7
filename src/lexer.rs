use crate::scanner::Scanner;
use crate::utils::{GenexError, Result};

/// One token's worth of raw pattern text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme {
    /// A single ordinary character
    Char(char),
    /// A backslash followed by exactly one character
    Escape(char),
    /// Brace-delimited quantifier text, braces included
    Braced(String),
    /// End of the pattern
    End,
}

/// Groups scanner characters into lexemes, with one lexeme of lookahead
#[derive(Debug, Clone)]
pub struct Lexer {
    scanner: Scanner,
    next: Option<Lexeme>,
}

impl Lexer {
    /// Group the characters of `scanner`
    pub fn new(scanner: Scanner) -> Self {
        Lexer {
            scanner,
            next: None,
        }
    }

    /// Look at the next lexeme without consuming it
    pub fn peek_lexeme(&mut self) -> Result<&Lexeme> {
        let lexeme = match self.next.take() {
            Some(lexeme) => lexeme,
            None => self.read_lexeme()?,
        };
        Ok(self.next.insert(lexeme))
    }

    /// Consume and return the next lexeme; [`Lexeme::End`] repeats once reached
    pub fn pop_lexeme(&mut self) -> Result<Lexeme> {
        match self.next.take() {
            Some(lexeme) => Ok(lexeme),
            None => self.read_lexeme(),
        }
    }

    fn read_lexeme(&mut self) -> Result<Lexeme> {
        if self.scanner.at_end() {
            return Ok(Lexeme::End);
        }

        match self.scanner.pop_char()? {
            '\\' => {
                let escaped = self.scanner.pop_char().map_err(|_| {
                    GenexError::UnexpectedEndOfInput("expected a character after '\\'".to_string())
                })?;
                Ok(Lexeme::Escape(escaped))
            }
            '{' => {
                let mut text = String::from('{');
                loop {
                    if self.scanner.at_end() {
                        return Err(GenexError::UnbalancedQuantifier(format!(
                            "end of input while looking for '}}' after {}",
                            text
                        )));
                    }
                    let c = self.scanner.pop_char()?;
                    text.push(c);
                    if c == '}' {
                        return Ok(Lexeme::Braced(text));
                    }
                }
            }
            '}' => Err(GenexError::UnbalancedQuantifier(format!(
                "'}}' without matching '{{' at offset {}",
                self.scanner.position() - 1
            ))),
            c => Ok(Lexeme::Char(c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(pattern: &str) -> Result<Vec<Lexeme>> {
        let mut lexer = Lexer::new(Scanner::new(pattern));
        let mut lexemes = Vec::new();
        loop {
            let lexeme = lexer.pop_lexeme()?;
            if lexeme == Lexeme::End {
                return Ok(lexemes);
            }
            lexemes.push(lexeme);
        }
    }

    #[test]
    fn test_lexeme_grouping() {
        let lexemes = lex_all(r"a\d{2,5}(").unwrap();
        assert_eq!(
            lexemes,
            vec![
                Lexeme::Char('a'),
                Lexeme::Escape('d'),
                Lexeme::Braced("{2,5}".to_string()),
                Lexeme::Char('('),
            ]
        );
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut lexer = Lexer::new(Scanner::new("xy"));
        assert_eq!(lexer.peek_lexeme().unwrap(), &Lexeme::Char('x'));
        assert_eq!(lexer.peek_lexeme().unwrap(), &Lexeme::Char('x'));
        assert_eq!(lexer.pop_lexeme().unwrap(), Lexeme::Char('x'));
        assert_eq!(lexer.pop_lexeme().unwrap(), Lexeme::Char('y'));
        assert_eq!(lexer.pop_lexeme().unwrap(), Lexeme::End);
        assert_eq!(lexer.pop_lexeme().unwrap(), Lexeme::End);
    }

    #[test]
    fn test_trailing_backslash() {
        assert!(matches!(
            lex_all("ab\\"),
            Err(GenexError::UnexpectedEndOfInput(_))
        ));
    }

    #[test]
    fn test_unbalanced_braces() {
        assert!(matches!(
            lex_all("a{3"),
            Err(GenexError::UnbalancedQuantifier(_))
        ));
        assert!(matches!(
            lex_all("a}3"),
            Err(GenexError::UnbalancedQuantifier(_))
        ));
    }

    #[test]
    fn test_braces_close_at_first_brace() {
        // "{{3}" is one lexeme, the trailing '}' is bare
        let err = lex_all("{{3}}").unwrap_err();
        assert!(matches!(err, GenexError::UnbalancedQuantifier(_)));
    }
}
