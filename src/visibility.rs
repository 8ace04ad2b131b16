//! Collapse-aware projection of an outline.
//!
//! The collapse state belongs to whoever displays the outline and is passed in fresh on every
//! call. Because depths come from a pre-order walk, the descendants of any unit form the
//! contiguous run of deeper units right after it, so hiding a subtree is a single forward pass.

use crate::export::{ExportedSection, ExportedUnit};
use crate::unit::Unit;
use std::collections::HashSet;

/// Anything that can be shown as a row in an outline.
pub trait OutlineNode {
    /// Identifier matched against the collapsed set.
    fn id(&self) -> &str;
    /// Nesting level of the row.
    fn depth(&self) -> usize;
    /// Text searched by [`visible_sections`].
    fn text(&self) -> &str;
}

impl OutlineNode for Unit<'_> {
    fn id(&self) -> &str {
        &self.id
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn text(&self) -> &str {
        &self.text
    }
}

impl OutlineNode for ExportedUnit {
    fn id(&self) -> &str {
        &self.id
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn text(&self) -> &str {
        &self.text
    }
}

#[must_use]
/// Returns the units left visible once every collapsed unit's descendants are hidden.
///
/// Collapsed units themselves stay visible. With an empty set the input comes back unchanged.
pub fn project<'u, T: OutlineNode>(units: &'u [T], collapsed: &HashSet<String>) -> Vec<&'u T> {
    project_indexed(units, collapsed)
        .into_iter()
        .map(|(_, unit)| unit)
        .collect()
}

#[must_use]
/// Like [`project`], but pairs each visible unit with its index in `units`.
pub fn project_indexed<'u, T: OutlineNode>(
    units: &'u [T],
    collapsed: &HashSet<String>,
) -> Vec<(usize, &'u T)> {
    let mut visible = Vec::with_capacity(units.len());
    let mut skip_below: Option<usize> = None;

    for (index, unit) in units.iter().enumerate() {
        if skip_below.is_some_and(|depth| unit.depth() > depth) {
            continue;
        }
        skip_below = None;
        visible.push((index, unit));

        if collapsed.contains(unit.id()) {
            skip_below = Some(unit.depth());
        }
    }

    visible
}

#[must_use]
/// Whether the unit at `index` has any descendants and so can be collapsed.
pub fn has_descendants<T: OutlineNode>(units: &[T], index: usize) -> bool {
    let next = index.checked_add(1).and_then(|next| units.get(next));
    match (units.get(index), next) {
        (Some(unit), Some(next)) => next.depth() > unit.depth(),
        _ => false,
    }
}

#[derive(Debug, PartialEq, Eq)]
/// Section as displayed, with only the rows that should be shown.
pub struct VisibleSection<'s> {
    /// The section being displayed.
    pub section: &'s ExportedSection,
    /// Rows in document order, each with its index in the section's units.
    pub units: Vec<(usize, &'s ExportedUnit)>,
}

#[must_use]
/// Applies the search query, or collapse state when no query is given, to every section.
///
/// Searching matches unit text case-insensitively and ignores collapse state so that every hit
/// is shown. A section survives a search only if one of its units matches or its title does.
pub fn visible_sections<'s>(
    sections: &'s [ExportedSection],
    query: &str,
    collapsed: &HashSet<String>,
) -> Vec<VisibleSection<'s>> {
    let needle = query.trim().to_lowercase();

    sections
        .iter()
        .filter_map(|section| {
            let units: Vec<_> = if needle.is_empty() {
                project_indexed(&section.units, collapsed)
            } else {
                section
                    .units
                    .iter()
                    .enumerate()
                    .filter(|(_, unit)| unit.text().to_lowercase().contains(&needle))
                    .collect()
            };
            let keep = needle.is_empty()
                || !units.is_empty()
                || section.title.to_lowercase().contains(&needle);
            keep.then_some(VisibleSection { section, units })
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/visibility.rs"]
mod tests;
