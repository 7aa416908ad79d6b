//! JavaScript source artifact holding a base64-encoded asset
//!
//! An artifact is a single statement of the form
//! `const RAIN_SOUND_BASE64 = "<base64>";` with no trailing newline.

use std::fmt;
use crate::encoding;
use crate::error::{EmbedError, Result};

pub const DEFAULT_IDENTIFIER: &str = "RAIN_SOUND_BASE64";

const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "export", "extends", "false",
    "finally", "for", "function", "if", "implements", "import", "in",
    "instanceof", "interface", "let", "new", "null", "package", "private",
    "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    identifier: String,
    payload: String,
}

impl Artifact {
    pub fn new<S: Into<String>, P: Into<String>>(identifier: S, payload: P) -> Result<Self> {
        let identifier = identifier.into();
        if !is_valid_identifier(&identifier) {
            return Err(EmbedError::artifact(format!("Invalid identifier: {:?}", identifier)));
        }
        Ok(Self { identifier, payload: payload.into() })
    }

    /// Build an artifact by encoding raw asset bytes
    pub fn from_bytes<S: Into<String>>(identifier: S, bytes: &[u8]) -> Result<Self> {
        Self::new(identifier, encoding::encode(bytes))
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn render(&self) -> String {
        format!("const {} = \"{}\";", self.identifier, self.payload)
    }

    /// Parse a rendered artifact, tolerating whitespace around the tokens
    pub fn parse(text: &str) -> Result<Self> {
        let rest = text.trim();
        let rest = rest
            .strip_prefix("const")
            .filter(|r| r.starts_with(char::is_whitespace))
            .ok_or_else(|| EmbedError::artifact("Expected `const` declaration"))?
            .trim_start();

        let name_end = rest
            .find(|c: char| c.is_whitespace() || c == '=')
            .ok_or_else(|| EmbedError::artifact("Expected `=` after identifier"))?;
        let (identifier, rest) = rest.split_at(name_end);

        let rest = rest
            .trim_start()
            .strip_prefix('=')
            .ok_or_else(|| EmbedError::artifact("Expected `=` after identifier"))?
            .trim_start();

        let rest = rest
            .strip_prefix('"')
            .ok_or_else(|| EmbedError::artifact("Expected double-quoted string"))?;
        let quote_end = rest
            .find('"')
            .ok_or_else(|| EmbedError::artifact("Unterminated string literal"))?;
        let (payload, rest) = rest.split_at(quote_end);

        if payload.contains('\\') {
            return Err(EmbedError::artifact("Escape sequences are not supported in payload"));
        }

        let rest = rest[1..]
            .trim_start()
            .strip_prefix(';')
            .ok_or_else(|| EmbedError::artifact("Expected `;` after string literal"))?;
        if !rest.trim().is_empty() {
            return Err(EmbedError::artifact("Unexpected content after declaration"));
        }

        Self::new(identifier, payload)
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        encoding::decode(&self.payload)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Check that `name` can be declared as a constant
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        return false;
    }
    !RESERVED_WORDS.contains(&name)
}
