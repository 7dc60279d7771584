use super::*;
use crate::storage::MemoryStore;

#[test]
fn load_content_defaults_to_empty() {
    let store = MemoryStore::default();
    assert_eq!(load_content(&store).unwrap(), "");
}

#[test]
fn save_content_stores_raw_html() {
    let store = MemoryStore::default();
    save_content(&store, "<p><b>hi</b></p>").unwrap();
    assert_eq!(store.raw(RICH_TEXT_KEY).as_deref(), Some("<p><b>hi</b></p>"));
    assert_eq!(load_content(&store).unwrap(), "<p><b>hi</b></p>");
}

#[test]
fn save_content_reports_write_failure() {
    let store = MemoryStore::default();
    store.set_fail_writes(true);
    assert!(save_content(&store, "x").is_err());
}

#[test]
fn heading_actions_use_format_block() {
    assert_eq!(FormatAction::Heading1.command(), EditCommand { name: "formatBlock", value: Some("h1") });
    assert_eq!(FormatAction::Heading2.command(), EditCommand { name: "formatBlock", value: Some("h2") });
    assert_eq!(FormatAction::Paragraph.command(), EditCommand { name: "formatBlock", value: Some("p") });
}

#[test]
fn inline_and_list_actions_take_no_value() {
    for action in [
        FormatAction::Bold,
        FormatAction::Italic,
        FormatAction::Underline,
        FormatAction::OrderedList,
        FormatAction::BulletList,
        FormatAction::Clean,
    ] {
        assert_eq!(action.command().value, None, "{action:?}");
    }
}

#[test]
fn clean_removes_formatting() {
    assert_eq!(FormatAction::Clean.command().name, "removeFormat");
}

#[test]
fn toolbar_lists_every_action_once() {
    for (i, a) in FormatAction::ALL.iter().enumerate() {
        for b in &FormatAction::ALL[i + 1..] {
            assert_ne!(a, b);
            assert_ne!(a.label(), b.label());
        }
    }
}
