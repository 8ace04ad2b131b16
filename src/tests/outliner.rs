use super::{locate, Outliner};
use crate::config::Policy;
use crate::export::export;
use crate::strategies::Strategy;
use crate::visibility::{has_descendants, project};
use scraper::Html;
use std::collections::HashSet;

/// One prompt, then a reply with H1, H2, a 40 character python block and another H2.
fn scenario_page() -> String {
    let code = "import sys\nprint(sys.argv[1:])  # my arg";
    assert_eq!(code.chars().count(), 40);
    format!(
        r#"<div class="chat-container">
          <div class="message user">Write me a script</div>
          <div class="message ai">
            <h1>Intro</h1>
            <h2>Background</h2>
            <pre><code class="language-python">{code}</code></pre>
            <h2>Next</h2>
          </div>
        </div>"#
    )
}

#[test]
fn test_end_to_end_scenario() {
    let document = Html::parse_document(&scenario_page());
    let mut outliner = Outliner::new("localhost", Policy::default());
    let sections = outliner.reparse(&document);

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].title, "Conversation");
    assert_eq!(sections[1].title, "Intro");

    let units = &sections[1].units;
    let texts: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Intro",
            "Background",
            "import sys\nprint(sys.argv[1:])  # my arg",
            "Next"
        ]
    );
    let depths: Vec<usize> = units.iter().map(|u| u.depth).collect();
    assert_eq!(depths, vec![0, 1, 2, 1]);

    let collapsed: HashSet<String> = [units[0].id.clone()].into_iter().collect();
    let visible = project(units, &collapsed);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].text, "Intro");
    assert!(has_descendants(units, 0));
}

#[test]
fn test_projection_matches_on_exported_snapshot() {
    let document = Html::parse_document(&scenario_page());
    let sections = Outliner::new("localhost", Policy::default()).reparse(&document);
    let snapshot = export(&sections, 50);

    let collapsed: HashSet<String> = ["msg-1-h2-1".to_string()].into_iter().collect();
    let visible: Vec<&str> = project(&snapshot[1].units, &collapsed)
        .into_iter()
        .map(|u| u.id.as_str())
        .collect();

    assert_eq!(visible, vec!["msg-1-h1-0", "msg-1-h2-1", "msg-1-h2-3"]);
}

#[test]
fn test_unsupported_site_gives_empty_outline() {
    let document = Html::parse_document(&scenario_page());
    let mut outliner = Outliner::new("example.com", Policy::default());

    assert_eq!(outliner.active(), None);
    assert!(outliner.reparse(&document).is_empty());
}

#[test]
fn test_navigation_reselects_when_nothing_matched() {
    let document = Html::parse_document(&scenario_page());
    let mut outliner = Outliner::new("example.com", Policy::default());
    assert!(outliner.reparse(&document).is_empty());

    outliner.set_site("127.0.0.1");

    assert_eq!(outliner.reparse(&document).len(), 2);
    assert_eq!(outliner.active(), Some(Strategy::Local));
    assert_eq!(outliner.site(), "127.0.0.1");
}

#[test]
fn test_active_strategy_is_kept_for_the_page() {
    let document = Html::parse_document(&scenario_page());
    let mut outliner = Outliner::new("localhost", Policy::default());

    outliner.set_site("chatgpt.com");

    assert_eq!(outliner.reparse(&document).len(), 2);
    assert_eq!(outliner.active(), Some(Strategy::Local));
}

#[test]
fn test_reparse_is_stable_for_unchanged_content() {
    let document = Html::parse_document(&scenario_page());
    let mut outliner = Outliner::new("localhost", Policy::default());

    let first: Vec<String> = outliner
        .reparse(&document)
        .iter()
        .flat_map(|s| s.units.iter().map(|u| u.id.clone()))
        .collect();
    let second: Vec<String> = outliner
        .reparse(&document)
        .iter()
        .flat_map(|s| s.units.iter().map(|u| u.id.clone()))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_locate_finds_source_element() {
    let document = Html::parse_document(&scenario_page());
    let sections = Outliner::new("localhost", Policy::default()).reparse(&document);

    let code = locate(&sections, "msg-1-code-2").unwrap();
    assert_eq!(code.value().name(), "code");
    assert_eq!(code.value().attr("class"), Some("language-python"));

    let heading = locate(&sections, "msg-1-h1-0").unwrap();
    assert_eq!(heading.text().collect::<String>(), "Intro");
}

#[test]
fn test_locate_unknown_id_is_none() {
    let document = Html::parse_document(&scenario_page());
    let sections = Outliner::new("localhost", Policy::default()).reparse(&document);

    assert!(locate(&sections, "msg-99").is_none());
    assert!(locate(&[], "msg-0").is_none());
}

#[test]
fn test_policy_thresholds_are_applied() {
    let document = Html::parse_document(&scenario_page());
    let policy = Policy {
        min_code_len: 41,
        code_preview_len: 100,
    };
    let sections = Outliner::new("localhost", policy).reparse(&document);

    assert!(sections[1]
        .units
        .iter()
        .all(|u| !u.id.contains("-code-")));
    assert_eq!(sections[1].units.len(), 3);
}
