//! Depth reconstruction from a flat run of units.
//!
//! Rendered conversations contain no nesting information beyond heading levels, and those levels
//! skip, repeat and arrive out of order. Depth is rebuilt with a stack of open headings: a heading
//! closes every open heading at its own level or deeper, then nests under whatever is left.
//! Non-heading units nest under the most recent open heading.

use crate::unit::Unit;

/// Assigns a depth to every unit in a single pass over the slice.
///
/// Equal levels are siblings, and only a strictly higher level nests. For levels 1, 3, 2 the
/// depths are 0, 1, 1: the level 2 heading closes the level 3 heading and stays under level 1.
pub fn assign_depths(units: &mut [Unit<'_>]) {
    let mut open: Vec<(u8, usize)> = Vec::new();

    for (index, unit) in units.iter_mut().enumerate() {
        if let Some(level) = unit.kind.heading_level() {
            while open.last().is_some_and(|&(top, _)| top >= level) {
                open.pop();
            }
            unit.depth = open.len();
            open.push((level, index));
        } else {
            unit.depth = open.len();
        }
    }
}

#[cfg(test)]
#[path = "tests/hierarchy.rs"]
mod tests;
