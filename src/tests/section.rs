use super::{partition, DEFAULT_SECTION_ID, DEFAULT_SECTION_TITLE};
use crate::unit::{Role, Unit, UnitKind};

fn text(id: &str, message: usize) -> Unit<'static> {
    Unit::new(id, Role::Author, id, UnitKind::Text, message, None)
}

fn heading(id: &str, title: &str, level: u8, message: usize) -> Unit<'static> {
    Unit::new(
        id,
        Role::Assistant,
        title,
        UnitKind::Heading { level },
        message,
        None,
    )
}

fn ids(units: &[Unit<'_>]) -> Vec<String> {
    units.iter().map(|u| u.id.clone()).collect()
}

#[test]
fn test_no_top_level_heading_gives_single_section() {
    let units = vec![
        text("a", 0),
        heading("b", "Two", 2, 1),
        text("c", 2),
        heading("d", "Three", 3, 3),
    ];
    let sections = partition(units);

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].id, DEFAULT_SECTION_ID);
    assert_eq!(sections[0].title, DEFAULT_SECTION_TITLE);
    assert_eq!(ids(&sections[0].units), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_two_top_level_headings_open_two_sections() {
    let units = vec![
        text("prompt", 0),
        heading("intro", "Intro", 1, 1),
        heading("detail", "Detail", 2, 1),
        text("follow-up", 2),
        heading("summary", "Summary", 1, 3),
        heading("more", "More", 2, 3),
    ];
    let sections = partition(units);

    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0].title, "Conversation");
    assert_eq!(ids(&sections[0].units), vec!["prompt"]);
    assert_eq!(sections[1].id, "section-1");
    assert_eq!(sections[1].title, "Intro");
    assert_eq!(ids(&sections[1].units), vec!["intro", "detail", "follow-up"]);
    assert_eq!(sections[2].id, "section-3");
    assert_eq!(sections[2].title, "Summary");
    assert_eq!(ids(&sections[2].units), vec!["summary", "more"]);

    let total: usize = sections.iter().map(|s| s.units.len()).sum();
    assert_eq!(total, 6, "no unit may be duplicated or lost");
}

#[test]
fn test_leading_heading_drops_empty_default_section() {
    let sections = partition(vec![heading("intro", "Intro", 1, 0), text("x", 0)]);

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Intro");
}

#[test]
fn test_repeated_top_level_headings_in_one_message() {
    // Each heading belongs to the section it opens, so back-to-back headings never leave an
    // empty section behind.
    let units = vec![
        heading("a", "First", 1, 4),
        heading("b", "Second", 1, 4),
        text("body", 4),
        heading("c", "Third", 1, 4),
    ];
    let sections = partition(units);

    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
    let section_ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(section_ids, vec!["section-4", "section-4-1", "section-4-2"]);
}

#[test]
fn test_empty_stream_gives_no_sections() {
    assert!(partition(Vec::new()).is_empty());
}
