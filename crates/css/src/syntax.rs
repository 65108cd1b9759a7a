use thiserror::Error;

// One piece of a compound selector: "input", "#id", ".class", "[type='range']"
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimpleSelector {
    Universal,
    Type(String),  // element/tag selector
    Id(String),    // #id selector
    Class(String), // .class selector
    Attribute { name: String, value: Option<String> },
}

// Simple selectors that must all match the same element: "input.big[type=range]"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompoundSelector {
    pub parts: Vec<SimpleSelector>,
}

// Comma-separated alternatives: "input[type='range'], div"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorList {
    pub selectors: Vec<CompoundSelector>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unexpected `{ch}` at byte {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("expected a name at byte {0}")]
    MissingName(usize),
    #[error("unterminated attribute selector starting at byte {0}")]
    UnterminatedAttribute(usize),
    #[error("unterminated string starting at byte {0}")]
    UnterminatedString(usize),
    #[error("combinators are not supported (byte {0})")]
    Combinator(usize),
}

impl std::str::FromStr for SelectorList {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_selector_list(s)
    }
}

// input: "input[type='range'], div"
// output: SelectorList { selectors: [Compound[Type(input), Attribute{type, range}], Compound[Type(div)]] }
pub fn parse_selector_list(input: &str) -> Result<SelectorList, SelectorError> {
    let mut selectors = Vec::new();
    let mut start = 0;
    for part in split_top_level_commas(input) {
        selectors.push(parse_compound(part, start)?);
        start += part.len() + 1;
    }
    Ok(SelectorList { selectors })
}

// Commas inside quoted attribute values do not split the list.
fn split_top_level_commas(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut last = 0;
    for (i, c) in input.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, ',') => {
                parts.push(&input[last..i]);
                last = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[last..]);
    parts
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    base: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn abs(&self) -> usize {
        self.base + self.pos
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn name(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while self.peek().is_some_and(is_name_char) {
            self.bump();
        }
        if start == self.pos {
            return Err(SelectorError::MissingName(self.abs()));
        }
        Ok(self.src[start..self.pos].to_string())
    }

    fn quoted(&mut self, quote: char, open: usize) -> Result<String, SelectorError> {
        let start = self.pos;
        loop {
            match self.bump() {
                Some(c) if c == quote => {
                    return Ok(self.src[start..self.pos - 1].to_string());
                }
                Some(_) => {}
                None => return Err(SelectorError::UnterminatedString(open)),
            }
        }
    }

    fn attribute(&mut self) -> Result<SimpleSelector, SelectorError> {
        let open = self.abs() - 1;
        self.skip_ws();
        let name = self.name()?.to_ascii_lowercase();
        self.skip_ws();
        match self.bump() {
            Some(']') => Ok(SimpleSelector::Attribute { name, value: None }),
            Some('=') => {
                self.skip_ws();
                let value = match self.peek() {
                    Some(q @ ('"' | '\'')) => {
                        let at = self.abs();
                        self.bump();
                        self.quoted(q, at)?
                    }
                    Some(_) => self.name()?,
                    None => return Err(SelectorError::UnterminatedAttribute(open)),
                };
                self.skip_ws();
                match self.bump() {
                    Some(']') => Ok(SimpleSelector::Attribute {
                        name,
                        value: Some(value),
                    }),
                    Some(ch) => Err(SelectorError::UnexpectedChar {
                        ch,
                        pos: self.abs() - ch.len_utf8(),
                    }),
                    None => Err(SelectorError::UnterminatedAttribute(open)),
                }
            }
            Some(ch) => Err(SelectorError::UnexpectedChar {
                ch,
                pos: self.abs() - ch.len_utf8(),
            }),
            None => Err(SelectorError::UnterminatedAttribute(open)),
        }
    }
}

// input: "input.big[type=range]" (offset is the byte position within the full list)
fn parse_compound(s: &str, offset: usize) -> Result<CompoundSelector, SelectorError> {
    let leading = s.len() - s.trim_start().len();
    let src = s.trim();
    if src.is_empty() {
        return Err(SelectorError::Empty);
    }
    let mut cur = Cursor {
        src,
        pos: 0,
        base: offset + leading,
    };
    let mut parts = Vec::new();

    match cur.peek() {
        Some('*') => {
            cur.bump();
            parts.push(SimpleSelector::Universal);
        }
        Some(c) if is_name_char(c) => {
            parts.push(SimpleSelector::Type(cur.name()?.to_ascii_lowercase()));
        }
        _ => {}
    }

    while let Some(c) = cur.peek() {
        let pos = cur.abs();
        cur.bump();
        let part = match c {
            '#' => SimpleSelector::Id(cur.name()?),
            '.' => SimpleSelector::Class(cur.name()?),
            '[' => cur.attribute()?,
            c if c.is_whitespace() || matches!(c, '>' | '+' | '~') => {
                return Err(SelectorError::Combinator(pos));
            }
            ch => return Err(SelectorError::UnexpectedChar { ch, pos }),
        };
        parts.push(part);
    }

    Ok(CompoundSelector { parts })
}
