// src/core/document/parser.rs

//! A recursive-descent JSON parser that records the byte offsets of every node.
//!
//! The tree it builds is only used for locating matches, so scalar values are
//! validated but not materialized. Object keys are decoded because path
//! segments name properties by their decoded text.

use super::node::{DocumentNode, ScalarKind};
use crate::core::errors::LocateError;
use indexmap::IndexMap;

/// Nesting limit used when the caller does not supply one. Matches `serde_json`.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Hard nesting cap. The parser recurses once per level, and this depth stays
/// well inside a 2 MiB thread stack.
pub const MAX_DEPTH_LIMIT: usize = 512;

/// Parses `bytes` into a `DocumentNode` tree.
///
/// `max_depth` is clamped to `MAX_DEPTH_LIMIT`.
pub fn parse_document(bytes: &[u8], max_depth: usize) -> Result<DocumentNode, LocateError> {
    let mut parser = Parser {
        bytes,
        pos: 0,
        depth: 0,
        max_depth: max_depth.min(MAX_DEPTH_LIMIT),
    };
    parser.skip_whitespace();
    let root = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.pos < bytes.len() {
        return Err(parser.error("trailing characters after JSON value"));
    }
    Ok(root)
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl Parser<'_> {
    fn error(&self, reason: impl Into<String>) -> LocateError {
        LocateError::DocumentParse {
            offset: self.pos,
            reason: reason.into(),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), LocateError> {
        match self.peek() {
            Some(b) if b == byte => {
                self.pos += 1;
                Ok(())
            }
            Some(b) => Err(self.error(format!(
                "expected '{}', found '{}'",
                byte as char,
                (b as char).escape_default()
            ))),
            None => Err(self.error(format!("expected '{}', found end of input", byte as char))),
        }
    }

    fn parse_value(&mut self) -> Result<DocumentNode, LocateError> {
        match self.peek() {
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => {
                let start = self.pos;
                self.read_string(None)?;
                Ok(self.scalar(start, ScalarKind::String))
            }
            Some(b'-' | b'0'..=b'9') => {
                let start = self.pos;
                self.read_number()?;
                Ok(self.scalar(start, ScalarKind::Number))
            }
            Some(b't') => self.parse_literal(b"true", ScalarKind::Bool),
            Some(b'f') => self.parse_literal(b"false", ScalarKind::Bool),
            Some(b'n') => self.parse_literal(b"null", ScalarKind::Null),
            Some(b) => Err(self.error(format!(
                "unexpected character '{}'",
                (b as char).escape_default()
            ))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    /// Builds a scalar spanning from `start` to the byte before the cursor.
    fn scalar(&self, start: usize, kind: ScalarKind) -> DocumentNode {
        DocumentNode::Scalar {
            start,
            end: self.pos - 1,
            kind,
        }
    }

    fn enter(&mut self) -> Result<(), LocateError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(self.error(format!("nesting exceeds {} levels", self.max_depth)));
        }
        Ok(())
    }

    fn parse_object(&mut self) -> Result<DocumentNode, LocateError> {
        let start = self.pos;
        self.enter()?;
        self.pos += 1;
        let mut members = IndexMap::new();

        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
        } else {
            loop {
                self.skip_whitespace();
                if self.peek() != Some(b'"') {
                    return Err(self.error("expected string key"));
                }
                let mut key = Vec::new();
                self.read_string(Some(&mut key))?;
                let key = String::from_utf8(key)
                    .map_err(|_| self.error("object key is not valid UTF-8"))?;

                self.skip_whitespace();
                self.expect(b':')?;
                self.skip_whitespace();
                let value = self.parse_value()?;
                members.insert(key, value);

                self.skip_whitespace();
                match self.peek() {
                    Some(b',') => self.pos += 1,
                    Some(b'}') => {
                        self.pos += 1;
                        break;
                    }
                    _ => return Err(self.error("expected ',' or '}' in object")),
                }
            }
        }

        self.depth -= 1;
        Ok(DocumentNode::Object {
            start,
            end: self.pos - 1,
            members,
        })
    }

    fn parse_array(&mut self) -> Result<DocumentNode, LocateError> {
        let start = self.pos;
        self.enter()?;
        self.pos += 1;
        let mut items = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
        } else {
            loop {
                self.skip_whitespace();
                items.push(self.parse_value()?);
                self.skip_whitespace();
                match self.peek() {
                    Some(b',') => self.pos += 1,
                    Some(b']') => {
                        self.pos += 1;
                        break;
                    }
                    _ => return Err(self.error("expected ',' or ']' in array")),
                }
            }
        }

        self.depth -= 1;
        Ok(DocumentNode::Array {
            start,
            end: self.pos - 1,
            items,
        })
    }

    fn parse_literal(
        &mut self,
        literal: &'static [u8],
        kind: ScalarKind,
    ) -> Result<DocumentNode, LocateError> {
        let start = self.pos;
        if !self.bytes[start..].starts_with(literal) {
            return Err(self.error("invalid literal"));
        }
        self.pos += literal.len();
        Ok(self.scalar(start, kind))
    }

    fn read_number(&mut self) -> Result<(), LocateError> {
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        match self.peek() {
            Some(b'0') => self.pos += 1,
            Some(b'1'..=b'9') => self.skip_digits(),
            _ => return Err(self.error("invalid number")),
        }
        if self.peek() == Some(b'.') {
            self.pos += 1;
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(self.error("expected digit after decimal point"));
            }
            self.skip_digits();
        }
        if let Some(b'e' | b'E') = self.peek() {
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(self.error("expected digit in exponent"));
            }
            self.skip_digits();
        }
        Ok(())
    }

    fn skip_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
    }

    /// Consumes a string literal, cursor on the opening quote.
    /// When `out` is given the decoded bytes are appended to it.
    fn read_string(&mut self, mut out: Option<&mut Vec<u8>>) -> Result<(), LocateError> {
        self.pos += 1;
        loop {
            let Some(b) = self.peek() else {
                return Err(self.error("unterminated string"));
            };
            match b {
                b'"' => {
                    self.pos += 1;
                    return Ok(());
                }
                b'\\' => {
                    self.pos += 1;
                    let decoded = self.read_escape()?;
                    if let Some(buf) = out.as_deref_mut() {
                        let mut utf8 = [0u8; 4];
                        buf.extend_from_slice(decoded.encode_utf8(&mut utf8).as_bytes());
                    }
                }
                0x00..=0x1f => return Err(self.error("control character in string")),
                _ => {
                    self.pos += 1;
                    if let Some(buf) = out.as_deref_mut() {
                        buf.push(b);
                    }
                }
            }
        }
    }

    /// Decodes one escape sequence, cursor just past the backslash.
    fn read_escape(&mut self) -> Result<char, LocateError> {
        let Some(b) = self.peek() else {
            return Err(self.error("unterminated escape"));
        };
        self.pos += 1;
        let c = match b {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\x08',
            b'f' => '\x0C',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => {
                let high = self.read_hex4()?;
                if (0xD800..0xDC00).contains(&high)
                    && self.bytes[self.pos..].starts_with(b"\\u")
                {
                    let save = self.pos;
                    self.pos += 2;
                    let low = self.read_hex4()?;
                    if (0xDC00..0xE000).contains(&low) {
                        let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                        return Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                    }
                    self.pos = save;
                }
                // Lone surrogates decode to U+FFFD.
                char::from_u32(high).unwrap_or(char::REPLACEMENT_CHARACTER)
            }
            _ => {
                self.pos -= 1;
                return Err(self.error(format!(
                    "invalid escape '\\{}'",
                    (b as char).escape_default()
                )));
            }
        };
        Ok(c)
    }

    fn read_hex4(&mut self) -> Result<u32, LocateError> {
        let Some(digits) = self.bytes.get(self.pos..self.pos + 4) else {
            return Err(self.error("truncated unicode escape"));
        };
        let mut value = 0u32;
        for &d in digits {
            let nibble = (d as char)
                .to_digit(16)
                .ok_or_else(|| self.error("invalid hex digit in unicode escape"))?;
            value = value * 16 + nibble;
        }
        self.pos += 4;
        Ok(value)
    }
}
