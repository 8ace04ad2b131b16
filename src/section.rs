//! Section representation for extracted conversations.
//!
//! A section groups the units that follow a top-level heading. Every conversation starts in an
//! implicit "Conversation" section, and each level-1 heading opens a new one titled with the
//! heading's text. Sections partition the unit stream: every unit lands in exactly one section,
//! in order, and sections left empty are dropped.

use crate::unit::Unit;

/// Identifier of the implicit section that opens every conversation.
pub const DEFAULT_SECTION_ID: &str = "default";
/// Title of the implicit section that opens every conversation.
pub const DEFAULT_SECTION_TITLE: &str = "Conversation";

#[derive(Clone, Debug)]
/// Titled run of units bounded by top-level headings.
pub struct Section<'a> {
    /// Identifier derived from the message that opened the section.
    pub id: String,
    /// Text of the opening heading, or the default title.
    pub title: String,
    /// Units in document order.
    pub units: Vec<Unit<'a>>,
}

impl<'a> Section<'a> {
    fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            units: Vec::new(),
        }
    }
}

#[must_use]
/// Splits a conversation's unit stream at level-1 headings.
///
/// The opening heading belongs to the section it opens. A second level-1 heading from the same
/// message gets a numbered id so that section ids stay unique.
pub fn partition(units: Vec<Unit<'_>>) -> Vec<Section<'_>> {
    let mut sections = vec![Section::new(DEFAULT_SECTION_ID, DEFAULT_SECTION_TITLE)];
    let mut opened_in: Option<(usize, usize)> = None;

    for unit in units {
        if unit.kind.is_top_level_heading() {
            let id = match opened_in {
                Some((message, count)) if message == unit.message_index => {
                    opened_in = Some((message, count + 1));
                    format!("section-{}-{}", message, count + 1)
                }
                _ => {
                    opened_in = Some((unit.message_index, 0));
                    format!("section-{}", unit.message_index)
                }
            };
            sections.push(Section::new(id, unit.text.clone()));
        }

        if let Some(current) = sections.last_mut() {
            current.units.push(unit);
        }
    }

    sections.retain(|section| !section.units.is_empty());
    sections
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
