//! Strategy for ChatGPT conversation pages.
//!
//! Turns are rendered as `article` elements. Older layouts lack those and mark each turn with a
//! `data-message-author-role` attribute instead. The rendered reply sits in a `.markdown`
//! wrapper, and plain prompts in a `.whitespace-pre-wrap` one.

use super::{selector, MessageNode};
use crate::unit::Role;
use scraper::{ElementRef, Selector};

/// Prefix of every unit id produced by this strategy.
pub const ID_PREFIX: &str = "gpt-msg";

const HOSTS: [&str; 2] = ["chatgpt.com", "openai.com"];
const ROLE_ATTR: &str = "data-message-author-role";
const CONTENT_SELECTORS: [&str; 2] = [".markdown", ".whitespace-pre-wrap"];

#[must_use]
/// Matches any host identifier mentioning a ChatGPT domain, including subdomains.
pub fn can_handle(site: &str) -> bool {
    HOSTS.iter().any(|host| site.contains(host))
}

#[must_use]
/// Lists the conversation turns in document order.
pub fn messages(root: ElementRef<'_>) -> Vec<MessageNode<'_>> {
    let (Some(articles), Some(by_role), Some(user_marker)) = (
        selector("article"),
        selector(&format!("[{ROLE_ATTR}]")),
        selector(&format!("[{ROLE_ATTR}=\"user\"]")),
    ) else {
        return Vec::new();
    };
    let content_selectors: Vec<Selector> =
        CONTENT_SELECTORS.iter().filter_map(|css| selector(css)).collect();

    let mut elements: Vec<ElementRef<'_>> = root.select(&articles).collect();
    if elements.is_empty() {
        elements = root.select(&by_role).collect();
    }
    if elements.is_empty() {
        tracing::debug!("no conversation turns found");
    }

    elements
        .into_iter()
        .map(|element| {
            let is_user = element.value().attr(ROLE_ATTR) == Some("user")
                || element.select(&user_marker).next().is_some();
            let content = content_selectors
                .iter()
                .find_map(|content| element.select(content).next())
                .unwrap_or(element);
            MessageNode {
                role: if is_user { Role::Author } else { Role::Assistant },
                element,
                content,
            }
        })
        .collect()
}
