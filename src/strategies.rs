//! Site-specific extraction strategies.
//!
//! Each chat site lays out its conversation differently, so each gets a strategy that knows how
//! to find the message containers and tell author turns from assistant turns. Everything after
//! that is shared: author turns become a single text unit, assistant turns are walked for
//! headings and code blocks in document order, depths are assigned per message, and the whole
//! stream is partitioned into sections.
//!
//! The set of strategies is closed and ordered. The first one whose host check passes handles the
//! page, and a site that no strategy recognises produces no outline at all.

pub mod chatgpt;
pub mod local;

use crate::classify::{classify, describe_text, text_of};
use crate::config::Policy;
use crate::hierarchy::assign_depths;
use crate::section::{partition, Section};
use crate::unit::{Role, Unit, UnitKind};
use scraper::{ElementRef, Selector};

/// Elements inspected inside an assistant message, in a single document-order walk.
const STRUCTURAL_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, code";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Extraction strategy for one family of chat sites.
pub enum Strategy {
    /// Local test pages served from the loopback host.
    Local,
    /// ChatGPT conversation pages.
    ChatGpt,
}

/// Message container located by a strategy.
pub struct MessageNode<'a> {
    /// Author of the turn.
    pub role: Role,
    /// Container of the whole turn, referenced by author units.
    pub element: ElementRef<'a>,
    /// Sub-container holding the rendered content.
    pub content: ElementRef<'a>,
}

impl Strategy {
    /// Strategies in the order they are tried.
    pub const REGISTERED: [Self; 2] = [Self::Local, Self::ChatGpt];

    #[must_use]
    /// Picks the first registered strategy that handles the site.
    pub fn select(site: &str) -> Option<Self> {
        Self::REGISTERED
            .into_iter()
            .find(|strategy| strategy.can_handle(site))
    }

    #[must_use]
    /// Human-readable name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::ChatGpt => "chatgpt",
        }
    }

    #[must_use]
    /// Whether this strategy understands pages from the given host.
    pub fn can_handle(self, site: &str) -> bool {
        match self {
            Self::Local => local::can_handle(site),
            Self::ChatGpt => chatgpt::can_handle(site),
        }
    }

    #[must_use]
    /// Extracts the sectioned outline of the conversation under `root`.
    pub fn parse<'a>(self, root: ElementRef<'a>, policy: &Policy) -> Vec<Section<'a>> {
        let (prefix, messages) = match self {
            Self::Local => (local::ID_PREFIX, local::messages(root)),
            Self::ChatGpt => (chatgpt::ID_PREFIX, chatgpt::messages(root)),
        };
        let Some(structural) = selector(STRUCTURAL_SELECTOR) else {
            return Vec::new();
        };

        let mut stream = Vec::new();
        for (index, message) in messages.iter().enumerate() {
            let base = format!("{prefix}-{index}");
            let units = extract_message(&base, index, message, &structural, policy);
            tracing::debug!(message = %base, units = units.len(), "extracted message");
            stream.extend(units);
        }

        partition(stream)
    }
}

/// Compiles a selector, logging instead of failing when it is malformed.
pub(crate) fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::error!(selector = css, "invalid selector: {e:?}");
            None
        }
    }
}

fn extract_message<'a>(
    base: &str,
    index: usize,
    message: &MessageNode<'a>,
    structural: &Selector,
    policy: &Policy,
) -> Vec<Unit<'a>> {
    if message.role == Role::Author {
        return vec![Unit::new(
            base,
            Role::Author,
            text_of(message.content),
            UnitKind::Text,
            index,
            Some(message.element),
        )];
    }

    let mut units = Vec::new();
    for element in message.content.select(structural) {
        let Some(descriptor) = classify(element, policy) else {
            continue;
        };
        let id = match descriptor.kind {
            UnitKind::Heading { level } => format!("{base}-h{level}-{}", units.len()),
            _ => format!("{base}-code-{}", units.len()),
        };
        units.push(Unit::new(
            id,
            Role::Assistant,
            descriptor.text,
            descriptor.kind,
            index,
            Some(element),
        ));
    }

    if units.is_empty() {
        let descriptor = describe_text(message.content);
        units.push(Unit::new(
            format!("{base}-text"),
            Role::Assistant,
            descriptor.text,
            descriptor.kind,
            index,
            Some(message.content),
        ));
    }

    assign_depths(&mut units);
    units
}

#[cfg(test)]
#[path = "tests/strategies.rs"]
mod tests;
