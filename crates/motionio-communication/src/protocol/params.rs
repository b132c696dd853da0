//! Parameter parser
//!
//! Tokenizes a reply line on whitespace and classifies each token as
//! integer, real, or opaque string. Classification is exact: a token
//! is an Integer only if the whole text parses as a base-10 integer,
//! a Real only if the whole text parses as a float and is not already
//! an Integer, otherwise a String.

use motionio_core::constants::MAX_REPLY_TOKENS;
use motionio_core::{ProtocolError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of one reply token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Whole token parsed as a base-10 integer.
    Integer,
    /// Whole token parsed as a floating value (and not an integer).
    Real,
    /// Anything else; kept as raw text.
    String,
}

/// One typed token from a reply line.
///
/// Tokens are built fresh on every parse call; nothing is carried
/// over between replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Raw text exactly as received.
    pub raw: String,
    /// Classification of the token.
    pub kind: TokenKind,
    /// Numeric value when `kind` is `Integer`.
    pub int_value: Option<i64>,
    /// Numeric value when `kind` is `Real`.
    pub real_value: Option<f64>,
}

impl Token {
    /// Classify a raw token.
    fn classify(raw: &str) -> Self {
        if let Ok(v) = raw.parse::<i64>() {
            return Token {
                raw: raw.to_string(),
                kind: TokenKind::Integer,
                int_value: Some(v),
                real_value: None,
            };
        }

        if let Ok(v) = raw.parse::<f64>() {
            return Token {
                raw: raw.to_string(),
                kind: TokenKind::Real,
                int_value: None,
                real_value: Some(v),
            };
        }

        Token {
            raw: raw.to_string(),
            kind: TokenKind::String,
            int_value: None,
            real_value: None,
        }
    }

    /// Numeric value of an Integer or Real token.
    pub fn as_f64(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Integer => self.int_value.map(|v| v as f64),
            TokenKind::Real => self.real_value,
            TokenKind::String => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Tokenize and classify a reply line.
///
/// Splits on any run of space, CR, or LF, discarding empty tokens.
/// An empty or all-whitespace line is a malformed reply, and more
/// than [`MAX_REPLY_TOKENS`] tokens is rejected outright rather than
/// truncated.
pub fn parse_reply(line: &str) -> Result<Vec<Token>> {
    let raw_tokens: Vec<&str> = line
        .split(|c| c == ' ' || c == '\r' || c == '\n')
        .filter(|t| !t.is_empty())
        .collect();

    if raw_tokens.is_empty() {
        return Err(ProtocolError::MalformedReply {
            reason: "empty reply line".to_string(),
        }
        .into());
    }

    if raw_tokens.len() > MAX_REPLY_TOKENS {
        return Err(ProtocolError::TooManyTokens {
            count: raw_tokens.len(),
            max: MAX_REPLY_TOKENS,
        }
        .into());
    }

    Ok(raw_tokens.into_iter().map(Token::classify).collect())
}
