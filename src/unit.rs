//! Unit representation for extracted conversation content.
//!
//! A unit is the smallest indexed piece of a conversation: a heading, a code block, or a block
//! of plain text. Units keep the document order of the content they were built from and carry a
//! non-owning reference back to their source element so that the outline can be used to jump to
//! the original content.

use scraper::ElementRef;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Who produced the message a unit belongs to.
pub enum Role {
    /// The person writing prompts.
    Author,
    /// The model answering them.
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "contentType", rename_all = "lowercase")]
/// Structural type of a unit.
///
/// The heading level and code language live on their variants, so a level can only exist on a
/// heading and a language only on a code block.
pub enum UnitKind {
    /// Plain text, used for author messages and for assistant messages without structure.
    Text,
    /// Heading with a level from 1 to 6.
    Heading {
        #[serde(rename = "headingLevel")]
        /// Level taken verbatim from the source tag.
        level: u8,
    },
    /// Preformatted code block.
    Code {
        /// Language detected from class tokens, `"code"` when unknown.
        language: String,
    },
    /// Reserved for list items; no strategy produces these yet.
    List,
}

impl UnitKind {
    #[must_use]
    /// Returns the heading level when this is a heading.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Self::Heading { level } => Some(*level),
            _ => None,
        }
    }

    #[must_use]
    /// Whether this unit opens a new section.
    pub fn is_top_level_heading(&self) -> bool {
        self.heading_level() == Some(1)
    }
}

#[derive(Clone, Debug)]
/// Indexed piece of a conversation, tied to the document it was extracted from.
pub struct Unit<'a> {
    /// Identifier unique within a conversation, stable while content positions are unchanged.
    pub id: String,
    /// Author of the enclosing message.
    pub role: Role,
    /// Display text, trimmed and (for code) truncated to a preview.
    pub text: String,
    /// Heading, code or text classification.
    pub kind: UnitKind,
    /// Nesting level under preceding headings of the same message.
    pub depth: usize,
    /// Position of the enclosing message within the conversation.
    pub message_index: usize,
    /// Element the unit was built from, owned by the parsed document.
    pub source: Option<ElementRef<'a>>,
}

impl<'a> Unit<'a> {
    #[must_use]
    /// Creates a unit at depth 0; depths are filled in by [`crate::hierarchy::assign_depths`].
    pub fn new(
        id: impl Into<String>,
        role: Role,
        text: impl Into<String>,
        kind: UnitKind,
        message_index: usize,
        source: Option<ElementRef<'a>>,
    ) -> Self {
        Self {
            id: id.into(),
            role,
            text: text.into(),
            kind,
            depth: 0,
            message_index,
            source,
        }
    }
}
