//! The `type|payload$` envelope that records which serializer produced a payload.
//!
//! Envelopes are usually embedded in noisy text (hook output mixing log lines
//! and results), so extraction never expects the input to be a single
//! envelope. [`find_last`] locates the most recent one in a single left to
//! right pass.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{PAYLOAD_TERMINATOR, TYPE_SEPARATOR};
use crate::error::{Error, Result};

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").expect("tag pattern is valid"));

static HEADER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_.\-]*\|").expect("header pattern is valid"));

/// An envelope header and the text following it, borrowed from the input.
///
/// `body` always holds at least one `$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    pub tag: &'a str,
    body: &'a str,
}

impl<'a> Envelope<'a> {
    /// Payload ending at the first `$` after the header.
    pub fn payload(&self) -> &'a str {
        let end = self.body.find(PAYLOAD_TERMINATOR).unwrap_or(self.body.len());
        &self.body[..end]
    }

    /// Every payload this header can close on, longest first.
    ///
    /// A payload containing `$` only decodes when it runs up to a later
    /// terminator, so callers try these in order.
    pub fn payloads(&self) -> impl Iterator<Item = &'a str> {
        let body = self.body;
        body.rmatch_indices(PAYLOAD_TERMINATOR).map(move |(end, _)| &body[..end])
    }
}

/// Ensures `tag` can be used as a serializer type.
///
/// # Errors
/// * `Error::InvalidSerializerType` if the tag does not match `[A-Za-z_][A-Za-z0-9_.-]*`
pub fn validate_tag(tag: &str) -> Result<()> {
    if TAG_PATTERN.is_match(tag) {
        Ok(())
    } else {
        Err(Error::InvalidSerializerType { tag: tag.to_string() })
    }
}

/// Builds `tag|payload$`.
pub fn frame(tag: &str, payload: &str) -> String {
    let mut envelope = String::with_capacity(tag.len() + payload.len() + 2);
    envelope.push_str(tag);
    envelope.push(TYPE_SEPARATOR);
    envelope.push_str(payload);
    envelope.push(PAYLOAD_TERMINATOR);
    envelope
}

/// Finds the last envelope in `input`.
///
/// Headers are matched left to right without overlap: a payload runs up to
/// the first `$` after its header, and the search for the next header resumes
/// there. A `word|` inside a payload is therefore never mistaken for a header.
pub fn find_last(input: &str) -> Option<Envelope<'_>> {
    let mut last = None;
    let mut position = 0;

    while let Some(header) = HEADER_PATTERN.find_at(input, position) {
        let body = &input[header.end()..];
        let Some(terminator) = body.find(PAYLOAD_TERMINATOR) else {
            break;
        };
        let tag = &input[header.start()..header.end() - TYPE_SEPARATOR.len_utf8()];
        last = Some(Envelope { tag, body });
        position = header.end() + terminator;
    }

    last
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame() {
        assert_eq!(frame("json", "{}"), "json|{}$");
    }

    #[test]
    fn test_validate_tag() {
        for tag in ["v_a-l.idTyPe0123456789", "_type", "Type", "json"] {
            assert!(validate_tag(tag).is_ok(), "{tag} should be valid");
        }
        for tag in ["9type", "-type", ".type", "typ|e", "typ:e", "typ!e", ""] {
            assert!(validate_tag(tag).is_err(), "{tag} should be invalid");
        }
    }

    #[test]
    fn test_find_last_prefers_last_envelope() {
        let envelope = find_last("dummy text dummy|P1$ another dummy text dummy|P2$").unwrap();
        assert_eq!(envelope.tag, "dummy");
        assert_eq!(envelope.payload(), "P2");
    }

    #[test]
    fn test_find_last_keeps_dollar_inside_payload() {
        let envelope = find_last(r#"log line json|{"price":"$5"}$"#).unwrap();
        assert_eq!(envelope.tag, "json");
        assert_eq!(envelope.payload(), r#"{"price":""#);
        let payloads: Vec<_> = envelope.payloads().collect();
        assert_eq!(payloads, vec![r#"{"price":"$5"}"#, r#"{"price":""#]);
    }

    #[test]
    fn test_find_last_skips_pipes_inside_payload() {
        let envelope = find_last(r#"json|{"cmd":"a|b"}$"#).unwrap();
        assert_eq!(envelope.tag, "json");
        assert_eq!(envelope.payload(), r#"{"cmd":"a|b"}"#);
    }

    #[test]
    fn test_find_last_picks_unregistered_later_header() {
        let envelope = find_last(r#"json|{"old":1}$ later: not_registered|x$"#).unwrap();
        assert_eq!(envelope.tag, "not_registered");
        assert_eq!(envelope.payload(), "x");
    }

    #[test]
    fn test_find_last_strips_leading_digits_from_tag() {
        assert_eq!(find_last("9type|payload$").unwrap().tag, "type");
    }

    #[test]
    fn test_find_last_on_large_noisy_input() {
        let input = "a|$".repeat(100_000);
        let envelope = find_last(&input).unwrap();
        assert_eq!(envelope.tag, "a");
        assert_eq!(envelope.payloads().collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_find_last_without_envelope() {
        assert!(find_last(r#"{"my_key":"my_val"}"#).is_none());
        assert!(find_last("json|no terminator").is_none());
        assert!(find_last("$ json|").is_none());
    }
}
