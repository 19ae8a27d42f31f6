// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icon set for the overlay.
//!
//! Icons are embedded at compile time via `rust-embed` and their handles are
//! built once and cached in a `OnceLock`.
//!
//! # Naming
//!
//! Icons are looked up by Font Awesome style names. Style prefixes are
//! stripped, so `"star"`, `"fa-star"` and `"fas fa-star"` resolve to the same
//! glyph. A few legacy names are accepted as aliases (`"info-circle"` is
//! `"circle-info"`).
//!
//! ```
//! use hud_text::ui::icons;
//!
//! assert_eq!(icons::canonical_name("fa-solid fa-Star"), "star");
//! assert!(icons::contains("warning"));
//! assert!(!icons::contains("not-a-real-icon"));
//! ```

use iced::widget::svg::Handle;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(RustEmbed)]
#[folder = "assets/icons/"]
struct Asset;

/// Glyph shown in place of an identifier that matches no embedded icon.
pub const FALLBACK_ICON: &str = "circle-question";

/// Legacy and shorthand names mapped to file names.
const ALIASES: &[(&str, &str)] = &[
    ("info", "circle-info"),
    ("info-circle", "circle-info"),
    ("check-circle", "circle-check"),
    ("times-circle", "circle-xmark"),
    ("question", "circle-question"),
    ("question-circle", "circle-question"),
    ("warning", "triangle-exclamation"),
    ("exclamation-triangle", "triangle-exclamation"),
    ("times", "xmark"),
    ("close", "xmark"),
    ("hand-paper", "hand"),
    ("cog", "gear"),
    ("unlock", "lock-open"),
    ("door", "door-open"),
    ("box-open", "box"),
    ("exclamation-circle", "circle-exclamation"),
    ("map-marker", "location-dot"),
    ("map-marker-alt", "location-dot"),
    ("home", "house"),
    ("search", "magnifying-glass"),
    ("shopping-cart", "cart-shopping"),
    ("mobile", "mobile-screen"),
    ("mobile-alt", "mobile-screen"),
    ("trash-can", "trash"),
    ("gas", "gas-pump"),
    ("volume-up", "volume-high"),
    ("power", "power-off"),
    ("comment-dots", "comment"),
];

/// Prefixes that select a Font Awesome style rather than a glyph.
const STYLE_PREFIXES: &[&str] = &["fas", "far", "fab", "fa-solid", "fa-regular", "fa"];

fn handles() -> &'static HashMap<String, Handle> {
    static HANDLES: OnceLock<HashMap<String, Handle>> = OnceLock::new();
    HANDLES.get_or_init(|| {
        Asset::iter()
            .filter_map(|file| {
                let name = file.strip_suffix(".svg")?.to_owned();
                let content = Asset::get(&file)?;
                Some((name, Handle::from_memory(content.data.into_owned())))
            })
            .collect()
    })
}

/// Normalizes an icon identifier to the file name it refers to.
///
/// Whitespace separated class lists keep their last glyph word; an `fa-`
/// prefix is dropped; aliases are resolved. The result is lowercase.
#[must_use]
pub fn canonical_name(identifier: &str) -> String {
    let glyph = identifier
        .split_whitespace()
        .rfind(|word| !STYLE_PREFIXES.contains(&word.to_ascii_lowercase().as_str()))
        .unwrap_or_default()
        .to_ascii_lowercase();
    let glyph = glyph.strip_prefix("fa-").unwrap_or(&glyph);

    ALIASES
        .iter()
        .find(|(alias, _)| *alias == glyph)
        .map_or_else(|| glyph.to_owned(), |(_, target)| (*target).to_owned())
}

/// Returns the cached handle for `identifier`, if the icon exists.
#[must_use]
pub fn lookup(identifier: &str) -> Option<Handle> {
    handles().get(&canonical_name(identifier)).cloned()
}

/// Returns the handle for `identifier`, or the [`FALLBACK_ICON`] glyph when
/// the identifier names no embedded icon.
///
/// Identifiers with no glyph word at all (`""`, `"fas"`) yield `None`.
#[must_use]
pub fn lookup_or_fallback(identifier: &str) -> Option<Handle> {
    if canonical_name(identifier).is_empty() {
        return None;
    }

    lookup(identifier).or_else(|| {
        tracing::debug!(icon = identifier, "unknown icon, rendering fallback");
        handles().get(FALLBACK_ICON).cloned()
    })
}

/// Returns true if `identifier` resolves to an embedded icon.
#[must_use]
pub fn contains(identifier: &str) -> bool {
    handles().contains_key(&canonical_name(identifier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_is_embedded() {
        assert!(contains("star"));
        assert!(lookup("star").is_some());
    }

    #[test]
    fn prefixes_are_stripped() {
        assert_eq!(canonical_name("fa-star"), "star");
        assert_eq!(canonical_name("fas fa-star"), "star");
        assert_eq!(canonical_name("fa-solid fa-hand"), "hand");
        assert_eq!(canonical_name("  KEY "), "key");
    }

    #[test]
    fn aliases_resolve_to_embedded_icons() {
        for (alias, target) in ALIASES {
            assert_eq!(canonical_name(alias), *target);
            assert!(contains(alias), "alias {alias} points to a missing icon");
        }
    }

    #[test]
    fn unknown_or_empty_names_resolve_to_nothing() {
        assert!(lookup("definitely-not-an-icon").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("fas").is_none());
    }

    #[test]
    fn unknown_names_fall_back_to_question_mark() {
        assert!(contains(FALLBACK_ICON));
        assert!(lookup_or_fallback("definitely-not-an-icon").is_some());
        assert!(lookup_or_fallback("fa-solid fa-dragon-egg").is_some());
        assert!(lookup_or_fallback("").is_none());
        assert!(lookup_or_fallback("fa-solid").is_none());
    }

    #[test]
    fn common_game_prompts_have_their_own_glyph() {
        for name in [
            "car-side",
            "gas-pump",
            "circle-exclamation",
            "hand-holding",
            "wrench",
            "location-dot",
            "fa-house",
            "fas fa-magnifying-glass",
            "map-marker-alt",
            "shopping-cart",
        ] {
            assert!(contains(name), "{name} should be embedded");
        }
    }
}
