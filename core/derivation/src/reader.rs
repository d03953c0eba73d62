//! Reader for the bracketed derivation format of the Japanese CCGBank.
//!
//! ```text
//! {< S[mod=nm,form=base,fin=t] {NP[case=ga,mod=nm,fin=f] 太郎/太郎/名詞/_} {S\NP 走る}}
//! ```
//!
//! An internal node is `{RULE CATEGORY CHILD...}`, a leaf is
//! `{CATEGORY TOKEN}` where the token is `surface/base/pos/inflection` or a
//! bare word. One derivation per line; text in front of the first `{` on a
//! line, or on a preceding line with no derivation (`ID=12, log probability=...`),
//! is kept as the sentence id.

use rebranch_category::Category;
use serde::{Deserialize, Serialize};

use crate::{
    errors::DerivationError,
    rule::Rule,
    tree::{Derivation, Token},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub id: String,
    pub tree: Derivation,
}

/// Parses a single derivation.
///
/// # Errors
///
/// Returns a [`DerivationError`] describing the first malformed node.
pub fn parse_derivation(text: &str) -> Result<Derivation, DerivationError> {
    let mut reader = Reader::new(text);
    reader.skip_whitespace();
    let tree = reader.parse_node()?;
    reader.skip_whitespace();
    if reader.pos < text.len() {
        return Err(DerivationError::TrailingInput { offset: reader.pos });
    }
    Ok(tree)
}

/// Reads every derivation in `input`, one result per derivation line.
///
/// A malformed line produces an error tagged with its 1-based line number
/// and does not affect the lines around it.
#[must_use]
pub fn read_derivations(input: &str) -> Vec<Result<Sentence, DerivationError>> {
    let mut results = Vec::new();
    let mut pending_id: Option<String> = None;

    for (index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(start) = line.find('{') else {
            pending_id = Some(line.to_string());
            continue;
        };

        let prefix = line[..start].trim();
        let id = if prefix.is_empty() {
            pending_id
                .take()
                .unwrap_or_else(|| (results.len() + 1).to_string())
        } else {
            pending_id = None;
            prefix.to_string()
        };
        let result = parse_derivation(&line[start..])
            .map(|tree| Sentence { id, tree })
            .map_err(|source| DerivationError::AtLine {
                line: index + 1,
                source: Box::new(source),
            });
        results.push(result);
    }
    results
}

struct Reader<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn parse_node(&mut self) -> Result<Derivation, DerivationError> {
        let open = self.pos;
        self.expect('{', "`{`")?;
        self.skip_whitespace();

        let head_offset = self.pos;
        let head = self.word();
        if head.is_empty() {
            return Err(DerivationError::Expected {
                expected: "rule or category",
                offset: head_offset,
            });
        }

        if let Ok(rule) = head.parse::<Rule>() {
            self.skip_whitespace();
            let category = self.category()?;
            let mut children = Vec::new();
            loop {
                self.skip_whitespace();
                match self.peek() {
                    Some('{') => children.push(self.parse_node()?),
                    _ => break,
                }
            }
            self.expect('}', "`}`")?;
            return build_internal(rule, category, children, open);
        }

        if is_rule_like(head) {
            return Err(DerivationError::UnknownRule {
                symbol: head.to_string(),
                offset: head_offset,
            });
        }

        let category = parse_category(head, head_offset)?;
        self.skip_whitespace();
        let token_offset = self.pos;
        let token = self.until('}').trim();
        if token.is_empty() {
            return Err(DerivationError::MissingToken {
                offset: token_offset,
            });
        }
        let token = Token::parse(token);
        self.expect('}', "`}`")?;
        Ok(Derivation::leaf(category, token))
    }

    fn category(&mut self) -> Result<Category, DerivationError> {
        let offset = self.pos;
        let text = self.word();
        if text.is_empty() {
            return Err(DerivationError::Expected {
                expected: "category",
                offset,
            });
        }
        parse_category(text, offset)
    }

    /// Consumes up to the next whitespace or brace.
    fn word(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '{' || c == '}' {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.text[start..self.pos]
    }

    fn until(&mut self, stop: char) -> &'a str {
        let start = self.pos;
        let len = self.text[start..].find(stop).unwrap_or(self.text.len() - start);
        self.pos = start + len;
        &self.text[start..self.pos]
    }

    fn expect(&mut self, expected: char, name: &'static str) -> Result<(), DerivationError> {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            Ok(())
        } else {
            Err(DerivationError::Expected {
                expected: name,
                offset: self.pos,
            })
        }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.pos += c.len_utf8();
        }
    }
}

fn parse_category(text: &str, offset: usize) -> Result<Category, DerivationError> {
    Category::parse(text).map_err(|source| DerivationError::InvalidCategory {
        text: text.to_string(),
        offset,
        source,
    })
}

fn build_internal(
    rule: Rule,
    category: Category,
    children: Vec<Derivation>,
    offset: usize,
) -> Result<Derivation, DerivationError> {
    let found = children.len();
    let mut children = children.into_iter();
    match (rule.arity(), children.next(), children.next(), children.next()) {
        (1, Some(child), None, None) => Ok(Derivation::unary(rule, category, child)),
        (2, Some(left), Some(right), None) => Ok(Derivation::binary(rule, category, left, right)),
        (expected, ..) => Err(DerivationError::ChildCount {
            rule,
            expected,
            found,
            offset,
        }),
    }
}

/// Heads that can only be meant as rule symbols, e.g. `>Bx9` or `<T`.
fn is_rule_like(head: &str) -> bool {
    head.starts_with('>') || head.starts_with('<')
}
