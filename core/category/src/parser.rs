//! Recursive-descent reader for category notation.
//!
//! Categories and unification patterns share one surface syntax. The
//! [`Grammar`] trait decides what an atom or a slash means in each setting,
//! so the descent itself is written once.

use crate::{
    category::{Category, Features, Slash},
    errors::CategoryError,
    unification::{Pattern, SlashPattern},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlashToken {
    Forward,
    Backward,
    Any,
}

pub(crate) trait Grammar {
    type Output;

    fn atom(base: String, features: Features, offset: usize) -> Result<Self::Output, CategoryError>;

    fn functor(
        left: Self::Output,
        slash: SlashToken,
        right: Self::Output,
        offset: usize,
    ) -> Result<Self::Output, CategoryError>;
}

struct CategoryGrammar;

impl Grammar for CategoryGrammar {
    type Output = Category;

    fn atom(base: String, features: Features, _offset: usize) -> Result<Category, CategoryError> {
        Ok(Category::atom_with_features(base, features))
    }

    fn functor(
        left: Category,
        slash: SlashToken,
        right: Category,
        offset: usize,
    ) -> Result<Category, CategoryError> {
        let slash = match slash {
            SlashToken::Forward => Slash::Forward,
            SlashToken::Backward => Slash::Backward,
            SlashToken::Any => return Err(CategoryError::WildcardInCategory { offset }),
        };
        Ok(Category::functor(left, slash, right))
    }
}

struct PatternGrammar;

impl Grammar for PatternGrammar {
    type Output = Pattern;

    fn atom(base: String, features: Features, offset: usize) -> Result<Pattern, CategoryError> {
        if !features.is_empty() {
            return Err(CategoryError::FeaturedPatternVariable { name: base, offset });
        }
        Ok(Pattern::var(base))
    }

    fn functor(
        left: Pattern,
        slash: SlashToken,
        right: Pattern,
        offset: usize,
    ) -> Result<Pattern, CategoryError> {
        let slash = match slash {
            SlashToken::Forward => SlashPattern::Exact(Slash::Forward),
            SlashToken::Backward => SlashPattern::Exact(Slash::Backward),
            SlashToken::Any => {
                if !matches!(right, Pattern::Var(_)) {
                    return Err(CategoryError::WildcardWithoutVariable { offset });
                }
                SlashPattern::Any
            }
        };
        Ok(Pattern::functor(left, slash, right))
    }
}

pub(crate) fn parse_category(text: &str) -> Result<Category, CategoryError> {
    parse_with::<CategoryGrammar>(text)
}

pub(crate) fn parse_pattern(text: &str) -> Result<Pattern, CategoryError> {
    parse_with::<PatternGrammar>(text)
}

fn parse_with<G: Grammar>(text: &str) -> Result<G::Output, CategoryError> {
    let mut parser = Parser::new(text);
    let output = parser.parse_slashed::<G>()?;
    parser.skip_whitespace();
    match parser.peek() {
        None => Ok(output),
        Some(found) => Err(CategoryError::UnexpectedChar {
            found,
            offset: parser.pos,
        }),
    }
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// `operand (slash operand)*`, folded to the left.
    fn parse_slashed<G: Grammar>(&mut self) -> Result<G::Output, CategoryError> {
        let mut left = self.parse_operand::<G>()?;
        loop {
            self.skip_whitespace();
            let slash = match self.peek() {
                Some('/') => SlashToken::Forward,
                Some('\\') => SlashToken::Backward,
                Some('|') => SlashToken::Any,
                _ => return Ok(left),
            };
            let offset = self.pos;
            self.bump();
            let right = self.parse_operand::<G>()?;
            left = G::functor(left, slash, right, offset)?;
        }
    }

    fn parse_operand<G: Grammar>(&mut self) -> Result<G::Output, CategoryError> {
        self.skip_whitespace();
        match self.peek() {
            Some('(') => {
                self.bump();
                let inner = self.parse_slashed::<G>()?;
                self.skip_whitespace();
                self.expect(')')?;
                Ok(inner)
            }
            Some(_) => self.parse_atom::<G>(),
            None => Err(CategoryError::UnexpectedEnd { offset: self.pos }),
        }
    }

    fn parse_atom<G: Grammar>(&mut self) -> Result<G::Output, CategoryError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_atom_char(c) {
                self.bump();
            } else {
                break;
            }
        }
        if self.pos == start {
            return match self.peek() {
                Some(found) => Err(CategoryError::UnexpectedChar {
                    found,
                    offset: self.pos,
                }),
                None => Err(CategoryError::EmptyAtom { offset: start }),
            };
        }
        let base = self.text[start..self.pos].to_string();
        let features = if self.peek() == Some('[') {
            self.parse_features()?
        } else {
            Features::new()
        };
        G::atom(base, features, start)
    }

    fn parse_features(&mut self) -> Result<Features, CategoryError> {
        self.expect('[')?;
        let start = self.pos;
        let Some(len) = self.text[start..].find(']') else {
            return Err(CategoryError::UnexpectedEnd {
                offset: self.text.len(),
            });
        };
        let body = &self.text[start..start + len];
        self.pos = start + len + 1;

        let mut features = Features::new();
        for item in body.split(',') {
            let item = item.trim();
            let malformed = || CategoryError::MalformedFeature {
                feature: item.to_string(),
                offset: start,
            };
            if item.is_empty() {
                return Err(malformed());
            }
            match item.split_once('=') {
                Some((name, value)) if !name.is_empty() && !value.is_empty() => {
                    features.insert(name, value);
                }
                Some(_) => return Err(malformed()),
                None => features.insert(item, ""),
            }
        }
        Ok(features)
    }

    fn expect(&mut self, expected: char) -> Result<(), CategoryError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(found) => Err(CategoryError::UnexpectedChar {
                found,
                offset: self.pos,
            }),
            None => Err(CategoryError::UnexpectedEnd { offset: self.pos }),
        }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }
}

fn is_atom_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '/' | '\\' | '|' | '(' | ')' | '[' | ']' | ',' | '{' | '}')
}
