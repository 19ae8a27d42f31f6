// SPDX-License-Identifier: MPL-2.0
//! Keybind token extraction.
//!
//! A keybind token is an alphabetic run wrapped in square brackets, such as
//! `[E]` or `[CTRL]`. Only the first token in a text is treated as a keybind:
//! it is removed from the body and shown as a badge. Later tokens stay in the
//! body as literal text.

use regex::Regex;
use std::sync::LazyLock;

static KEYBIND_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([A-Za-z]+)\]").expect("keybind pattern is valid"));

/// Result of splitting a display text into its keybind and body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedText {
    /// Uppercased keybind label without brackets.
    pub keybind: Option<String>,
    /// Text handed to the markdown renderer.
    pub body: String,
}

/// Splits `text` into the first keybind token and the remaining body.
///
/// ```
/// use hud_text::hud::keybind::extract_keybind;
///
/// let parsed = extract_keybind("[e] interact");
/// assert_eq!(parsed.keybind.as_deref(), Some("E"));
/// assert_eq!(parsed.body, " interact");
/// ```
#[must_use]
pub fn extract_keybind(text: &str) -> ParsedText {
    let Some(captures) = KEYBIND_TOKEN.captures(text) else {
        return ParsedText {
            keybind: None,
            body: text.to_string(),
        };
    };

    // Group 0 always exists on a successful capture.
    let whole = captures.get(0).map_or(0..0, |m| m.range());
    let label = captures
        .get(1)
        .map(|m| m.as_str().to_ascii_uppercase())
        .unwrap_or_default();

    let mut body = String::with_capacity(text.len() - whole.len());
    body.push_str(&text[..whole.start]);
    body.push_str(&text[whole.end..]);

    ParsedText {
        keybind: Some(label),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_token_becomes_keybind() {
        let parsed = extract_keybind("[E] interact");
        assert_eq!(parsed.keybind.as_deref(), Some("E"));
        assert_eq!(parsed.body, " interact");
    }

    #[test]
    fn token_is_uppercased() {
        let parsed = extract_keybind("Press [ctrl] to continue");
        assert_eq!(parsed.keybind.as_deref(), Some("CTRL"));
        assert_eq!(parsed.body, "Press  to continue");
    }

    #[test]
    fn only_first_token_is_consumed() {
        let parsed = extract_keybind("Press [CTRL] then [E]");
        assert_eq!(parsed.keybind.as_deref(), Some("CTRL"));
        assert_eq!(parsed.body, "Press  then [E]");
    }

    #[test]
    fn plain_text_is_untouched() {
        let parsed = extract_keybind("Hello World");
        assert_eq!(parsed.keybind, None);
        assert_eq!(parsed.body, "Hello World");
    }

    #[test]
    fn non_alphabetic_brackets_are_not_keybinds() {
        for text in ["[E1] open", "[ ] box", "[] empty", "[-] dash", "[É] accent"] {
            let parsed = extract_keybind(text);
            assert_eq!(parsed.keybind, None, "{text:?}");
            assert_eq!(parsed.body, text);
        }
    }

    #[test]
    fn skips_invalid_tokens_to_find_a_valid_one() {
        let parsed = extract_keybind("[1] or [G]");
        assert_eq!(parsed.keybind.as_deref(), Some("G"));
        assert_eq!(parsed.body, "[1] or ");
    }

    #[test]
    fn token_only_text_leaves_empty_body() {
        let parsed = extract_keybind("[F]");
        assert_eq!(parsed.keybind.as_deref(), Some("F"));
        assert!(parsed.body.is_empty());
    }

    #[test]
    fn markdown_around_token_is_preserved() {
        let parsed = extract_keybind("**Hold** [E] to _open_");
        assert_eq!(parsed.body, "**Hold**  to _open_");
    }
}
