//! Classification of single content elements into unit descriptors.
//!
//! Headings are always indexed. Code is only indexed when it forms a block: the `code` element
//! must sit directly in a `pre` and carry enough text to be more than an inline snippet.
//! Everything else is left to the plain-text fallback applied to a whole message.

use crate::config::Policy;
use crate::unit::UnitKind;
use scraper::ElementRef;

/// Language reported for code blocks without a recognisable class token.
pub const DEFAULT_LANGUAGE: &str = "code";

const LANGUAGE_PREFIXES: [&str; 2] = ["language-", "lang-"];

#[derive(Clone, Debug, PartialEq, Eq)]
/// Classification of an element, ready to become a unit once an id is assigned.
pub struct Descriptor {
    /// Structural type of the element.
    pub kind: UnitKind,
    /// Trimmed display text.
    pub text: String,
}

#[must_use]
/// Classifies a heading or code element, returning `None` for anything that should be skipped.
pub fn classify(element: ElementRef<'_>, policy: &Policy) -> Option<Descriptor> {
    let name = element.value().name();

    if let Some(level) = heading_level(name) {
        return Some(Descriptor {
            kind: UnitKind::Heading { level },
            text: text_of(element),
        });
    }

    if name == "code" && parent_is_pre(element) {
        let raw: String = element.text().collect();
        if raw.chars().count() < policy.min_code_len {
            return None;
        }
        return Some(Descriptor {
            kind: UnitKind::Code {
                language: detect_language(element),
            },
            text: truncate(raw.trim(), policy.code_preview_len),
        });
    }

    None
}

#[must_use]
/// Describes a whole container as a single plain-text unit.
pub fn describe_text(container: ElementRef<'_>) -> Descriptor {
    Descriptor {
        kind: UnitKind::Text,
        text: text_of(container),
    }
}

#[must_use]
/// Full trimmed text content of an element.
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[must_use]
/// Cuts text to `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn heading_level(name: &str) -> Option<u8> {
    let digit = name.strip_prefix('h')?;
    match digit.parse::<u8>() {
        Ok(level @ 1..=6) => Some(level),
        _ => None,
    }
}

fn parent_is_pre(element: ElementRef<'_>) -> bool {
    element
        .parent()
        .and_then(ElementRef::wrap)
        .is_some_and(|parent| parent.value().name() == "pre")
}

fn detect_language(element: ElementRef<'_>) -> String {
    element
        .value()
        .attr("class")
        .unwrap_or_default()
        .split_whitespace()
        .find_map(|class| {
            LANGUAGE_PREFIXES
                .iter()
                .find_map(|prefix| class.strip_prefix(prefix))
                .filter(|language| !language.is_empty())
        })
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_string()
}

#[cfg(test)]
#[path = "tests/classify.rs"]
mod tests;
