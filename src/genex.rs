use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use crate::parser::Parser;
use crate::utils::{GenexError, Result};

/// The shape of one [`Genex`] node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    /// One character drawn from a non-empty candidate set
    SingleChar(Vec<char>),
    /// Every child in order
    Concat(Vec<Genex>),
    /// Exactly one of a non-empty list of children, picked uniformly
    Choose(Vec<Genex>),
    /// The child generated `n` independent times
    Repeat(Box<Genex>, usize),
    /// The child or nothing, with equal odds
    Optional(Box<Genex>),
}

/// A node of a compiled pattern, able to produce random strings from its language.
///
/// Nodes are only built through the constructors below, which reject empty
/// candidate sets and empty choices, so generation never has to pick from
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Genex(Node);

impl Genex {
    /// A single fixed character
    pub fn literal(c: char) -> Self {
        Genex(Node::SingleChar(vec![c]))
    }

    /// One character drawn uniformly from `choices`
    pub fn one_of(choices: &str) -> Result<Self> {
        let choices: Vec<char> = choices.chars().collect();
        if choices.is_empty() {
            return Err(GenexError::EmptyCharset);
        }
        Ok(Genex(Node::SingleChar(choices)))
    }

    /// Every node in order; an empty list generates the empty string
    pub fn concat(nodes: Vec<Genex>) -> Self {
        Genex(Node::Concat(nodes))
    }

    /// One node picked uniformly per generation
    pub fn choose(nodes: Vec<Genex>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(GenexError::EmptyChoice);
        }
        Ok(Genex(Node::Choose(nodes)))
    }

    /// `node` generated `times` independent times
    pub fn repeat(node: Genex, times: usize) -> Self {
        Genex(Node::Repeat(Box::new(node), times))
    }

    /// `node` or the empty string, with equal odds
    pub fn optional(node: Genex) -> Self {
        Genex(Node::Optional(Box::new(node)))
    }

    /// A repeat count drawn uniformly from `min..=max` on every generation.
    ///
    /// Builds one `Repeat` per count, each holding its own copy of `node`, so
    /// memory grows with `max - min + 1`. Ranges in the millions are costly.
    pub fn repeat_between(node: Genex, min: usize, max: usize) -> Result<Self> {
        Genex::choose(
            (min..=max)
                .map(|times| Genex::repeat(node.clone(), times))
                .collect(),
        )
    }

    /// The shape of this node
    pub fn node(&self) -> &Node {
        &self.0
    }

    /// Generate a string using the thread-local random source
    pub fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        self.generate_with(&mut rng)
    }

    /// Generate a string drawing from the given random source
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut result = String::new();
        self.write_into(rng, &mut result);
        result
    }

    fn write_into<R: Rng + ?Sized>(&self, rng: &mut R, result: &mut String) {
        match &self.0 {
            Node::SingleChar(choices) => match choices.as_slice() {
                [c] => result.push(*c),
                _ => result.push(choices[rng.gen_range(0..choices.len())]),
            },
            Node::Concat(children) => {
                for child in children {
                    child.write_into(rng, result);
                }
            }
            Node::Choose(children) => {
                children[rng.gen_range(0..children.len())].write_into(rng, result);
            }
            Node::Repeat(child, times) => {
                for _ in 0..*times {
                    child.write_into(rng, result);
                }
            }
            Node::Optional(child) => {
                if rng.gen_bool(0.5) {
                    child.write_into(rng, result);
                }
            }
        }
    }
}

/// A compiled pattern together with its source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pattern {
    source: String,
    ast: Genex,
}

impl Pattern {
    /// Compile a pattern, failing on malformed input
    pub fn new(pattern: &str) -> Result<Self> {
        let ast = Parser::from_pattern(pattern).parse()?;
        Ok(Pattern {
            source: pattern.to_string(),
            ast,
        })
    }

    /// Generate one sample using the thread-local random source
    pub fn generate(&self) -> String {
        self.ast.generate()
    }

    /// Generate one sample drawing from `rng`
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.ast.generate_with(rng)
    }

    /// An endless stream of independent samples drawn from `rng`
    pub fn samples<'a, R: Rng + ?Sized>(
        &'a self,
        rng: &'a mut R,
    ) -> impl Iterator<Item = String> + 'a {
        std::iter::repeat_with(move || self.ast.generate_with(&mut *rng))
    }

    /// The compiled tree
    pub fn ast(&self) -> &Genex {
        &self.ast
    }

    /// The pattern text this was compiled from
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Pattern {
    type Err = GenexError;

    fn from_str(s: &str) -> Result<Self> {
        Pattern::new(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// Compile a genex pattern into a reusable [`Pattern`]
pub fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern)
}
