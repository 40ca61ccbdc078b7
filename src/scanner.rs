use crate::utils::{GenexError, Result};

/// Cursor over the raw characters of a pattern
#[derive(Debug, Clone)]
pub struct Scanner {
    chars: Vec<char>,
    index: usize,
}

impl Scanner {
    /// Start a cursor at the first character of `pattern`
    pub fn new(pattern: &str) -> Self {
        Scanner {
            chars: pattern.chars().collect(),
            index: 0,
        }
    }

    /// True once every character has been consumed
    pub fn at_end(&self) -> bool {
        self.index == self.chars.len()
    }

    /// Current zero-based character offset
    pub fn position(&self) -> usize {
        self.index
    }

    /// The character under the cursor, without advancing
    pub fn peek_char(&self) -> Result<char> {
        self.chars.get(self.index).copied().ok_or_else(|| {
            GenexError::UnexpectedEndOfInput(format!("no character at offset {}", self.index))
        })
    }

    /// The character under the cursor; advances past it
    pub fn pop_char(&mut self) -> Result<char> {
        let c = self.peek_char()?;
        self.index += 1;
        Ok(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_all() {
        let mut scanner = Scanner::new("a\\é");
        assert!(!scanner.at_end());
        assert_eq!(scanner.peek_char().unwrap(), 'a');
        assert_eq!(scanner.pop_char().unwrap(), 'a');
        assert_eq!(scanner.pop_char().unwrap(), '\\');
        assert_eq!(scanner.position(), 2);
        assert_eq!(scanner.pop_char().unwrap(), 'é');
        assert!(scanner.at_end());
    }

    #[test]
    fn test_read_past_end() {
        let mut scanner = Scanner::new("");
        assert!(scanner.at_end());
        assert!(matches!(
            scanner.peek_char(),
            Err(GenexError::UnexpectedEndOfInput(_))
        ));
        assert!(matches!(
            scanner.pop_char(),
            Err(GenexError::UnexpectedEndOfInput(_))
        ));
    }
}
