//! Page context tying a site identity to the strategy that parses it.
//!
//! The strategy is chosen once per page and kept for as long as it matches. If no strategy
//! matched, selection is retried on the next pass, which lets client-side navigation switch an
//! unsupported page to a supported one without starting over.

use crate::config::Policy;
use crate::section::Section;
use crate::strategies::Strategy;
use scraper::{ElementRef, Html};

/// Re-runs extraction on demand for one page.
pub struct Outliner {
    site: String,
    active: Option<Strategy>,
    policy: Policy,
}

impl Outliner {
    #[must_use]
    /// Creates a page context and selects a strategy for the site straight away.
    pub fn new(site: impl Into<String>, policy: Policy) -> Self {
        let mut outliner = Self {
            site: site.into(),
            active: None,
            policy,
        };
        outliner.select_strategy();
        outliner
    }

    #[must_use]
    /// Host identifier strategies are matched against.
    pub fn site(&self) -> &str {
        &self.site
    }

    #[must_use]
    /// Strategy currently parsing the page, if any matched.
    pub fn active(&self) -> Option<Strategy> {
        self.active
    }

    /// Records a new host identifier after navigation.
    ///
    /// An active strategy stays in place for the life of the page; the new identity only
    /// matters while nothing has matched yet.
    pub fn set_site(&mut self, site: impl Into<String>) {
        self.site = site.into();
    }

    fn select_strategy(&mut self) {
        self.active = Strategy::select(&self.site);
        match self.active {
            Some(strategy) => {
                tracing::info!(site = %self.site, strategy = strategy.name(), "selected strategy");
            }
            None => tracing::debug!(site = %self.site, "no matching strategy"),
        }
    }

    /// Extracts a fresh outline from the document, replacing nothing in place.
    ///
    /// Unsupported sites produce an empty outline.
    pub fn reparse<'a>(&mut self, document: &'a Html) -> Vec<Section<'a>> {
        if self.active.is_none() {
            self.select_strategy();
        }
        let Some(strategy) = self.active else {
            return Vec::new();
        };

        let sections = strategy.parse(document.root_element(), &self.policy);
        tracing::debug!(
            strategy = strategy.name(),
            sections = sections.len(),
            units = sections.iter().map(|s| s.units.len()).sum::<usize>(),
            "outline extracted"
        );
        sections
    }
}

#[must_use]
/// Finds the element a unit was extracted from, for jumping to it.
///
/// Unknown ids are not an error; they simply locate nothing.
pub fn locate<'a>(sections: &[Section<'a>], unit_id: &str) -> Option<ElementRef<'a>> {
    sections
        .iter()
        .flat_map(|section| &section.units)
        .find(|unit| unit.id == unit_id)
        .and_then(|unit| unit.source)
}

#[cfg(test)]
#[path = "tests/outliner.rs"]
mod tests;
