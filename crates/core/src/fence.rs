//! Fence info-string parsing.
//!
//! The text after the opening backticks of a fenced code block names the
//! language and an optional attribute list, e.g.
//! `san export=preview caption="hello world"`. The `export` and `caption`
//! attributes drive preview compilation and are lifted into dedicated
//! fields; everything else rides along in [`FenceDescriptor::attrs`] and
//! serializes together with the descriptor.

use std::collections::BTreeMap;

use serde::Serialize;

/// Parsed form of a code fence info string.
///
/// Serializing the descriptor yields the `metadata` JSON handed to entry
/// templates; unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FenceDescriptor {
    /// Language identifier (first bare token), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// `export=...` attribute; `preview` requests live-preview compilation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<String>,
    /// `caption=...` attribute, surfaced to the entry template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Remaining attributes, keyed by name. Bare flags record an empty value.
    #[serde(flatten)]
    pub attrs: BTreeMap<String, String>,
}

/// Parse a fence info string into a [`FenceDescriptor`].
///
/// Pure and infallible: tokens that fit no rule are kept as bare
/// attributes, and an empty or whitespace-only info string yields the
/// default descriptor. A leading `key=value` token is treated as an
/// attribute, leaving the language unset.
pub fn parse_fence_info(info: &str) -> FenceDescriptor {
    let mut descriptor = FenceDescriptor::default();
    for (position, token) in split_tokens(info).into_iter().enumerate() {
        match split_attr(&token) {
            Some((key, value)) => match key {
                "export" => descriptor.export = Some(value.to_string()),
                "caption" => descriptor.caption = Some(value.to_string()),
                _ => {
                    descriptor.attrs.insert(key.to_string(), value.to_string());
                }
            },
            None => {
                if position == 0 {
                    descriptor.lang = Some(token);
                } else {
                    descriptor.attrs.insert(token, String::new());
                }
            }
        }
    }
    descriptor
}

/// Split an info string into whitespace-separated tokens, keeping quoted
/// spans (single or double quotes) inside one token.
fn split_tokens(info: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in info.chars() {
        match quote {
            Some(q) => {
                current.push(ch);
                if ch == q {
                    quote = None;
                }
            }
            None if ch == '\'' || ch == '"' => {
                quote = Some(ch);
                current.push(ch);
            }
            None if ch.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            None => current.push(ch),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Split a `key=value` token, stripping one layer of matching quotes from
/// the value. Returns `None` for tokens without `=` or with an empty key.
fn split_attr(token: &str) -> Option<(&str, &str)> {
    let (key, value) = token.split_once('=')?;
    if key.is_empty() {
        return None;
    }
    Some((key, unquote(value)))
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'\'' || first == b'"') && bytes[bytes.len() - 1] == first {
            return &value[1..value.len() - 1];
        }
    }
    value
}
