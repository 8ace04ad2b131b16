//! Strategy for local test pages.
//!
//! Local pages wrap the conversation in a `.chat-container` whose `.message` children carry a
//! `user` class on author turns. They are served from the loopback host while developing.

use super::{selector, MessageNode};
use crate::unit::Role;
use scraper::ElementRef;

/// Prefix of every unit id produced by this strategy.
pub const ID_PREFIX: &str = "msg";

const HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

#[must_use]
/// Matches the loopback host names exactly.
pub fn can_handle(site: &str) -> bool {
    HOSTS.contains(&site)
}

#[must_use]
/// Lists the message containers under the first chat container, in document order.
pub fn messages(root: ElementRef<'_>) -> Vec<MessageNode<'_>> {
    let (Some(container_selector), Some(message_selector)) =
        (selector(".chat-container"), selector(".message"))
    else {
        return Vec::new();
    };
    let Some(container) = root.select(&container_selector).next() else {
        tracing::debug!("no chat container found");
        return Vec::new();
    };

    container
        .select(&message_selector)
        .map(|element| {
            let role = if element.value().classes().any(|class| class == "user") {
                Role::Author
            } else {
                Role::Assistant
            };
            MessageNode {
                role,
                element,
                content: element,
            }
        })
        .collect()
}
