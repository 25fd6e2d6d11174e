use crate::support::buffer_text;
use bugterm::constants::{DETAIL_EMPTY_TEXT, LIST_EMPTY_TEXT, LIST_FOOTER, MESSAGE_POPUP_FOOTER};
use bugterm::ui::components::{BugDetailView, BugListView, MessagePopup};
use bugterm::ui::{Action, UiOptions, UiState, View};
use bugterm::{BugCache, BugStore};
use ratatui::{backend::TestBackend, Terminal};

fn render(width: u16, height: u16, view: &mut dyn View) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| view.layout(f, f.area())).unwrap();
    buffer_text(terminal.backend().buffer())
}

fn sample_store() -> BugCache {
    let mut store = BugCache::in_memory("alice");
    let id = store.create_bug("Crash on start", "Steps to reproduce").unwrap();
    store.add_comment(&id, "Seen on 1.2 as well").unwrap();
    store.create_bug("Typo in README", "teh").unwrap();
    store
}

#[test]
fn test_list_view_renders_bugs() {
    let store = sample_store();
    let mut view = BugListView::new("%Y-%m-%d");
    view.set_bugs(store.bugs().unwrap());

    let text = render(100, 12, &mut view);
    assert!(text.contains("Crash on start"));
    assert!(text.contains("Typo in README"));
    assert!(text.contains("open"));
    assert!(text.contains(LIST_FOOTER));
}

#[test]
fn test_list_view_empty_text() {
    let mut view = BugListView::new("%Y-%m-%d");
    let text = render(100, 12, &mut view);
    assert!(text.contains(LIST_EMPTY_TEXT));
}

#[test]
fn test_list_view_filter_hides_rows() {
    let store = sample_store();
    let mut view = BugListView::new("%Y-%m-%d");
    view.set_bugs(store.bugs().unwrap());
    view.set_filter("  readme ");

    let text = render(100, 12, &mut view);
    assert!(text.contains("Typo in README"));
    assert!(!text.contains("Crash on start"));
    assert!(text.contains("[filter: readme]"));
}

#[test]
fn test_detail_view_renders_comment_thread() {
    let store = sample_store();
    let bug = store
        .bugs()
        .unwrap()
        .into_iter()
        .find(|bug| bug.title == "Crash on start")
        .unwrap();
    let mut view = BugDetailView::new("%Y-%m-%d");
    view.set_bug(bug);

    let text = render(80, 20, &mut view);
    assert!(text.contains("Crash on start"));
    assert!(text.contains("Steps to reproduce"));
    assert!(text.contains("Seen on 1.2 as well"));
    assert!(text.contains("#1 alice commented"));
}

#[test]
fn test_detail_view_without_bug() {
    let mut view = BugDetailView::new("%Y-%m-%d");
    let text = render(80, 10, &mut view);
    assert!(text.contains(DETAIL_EMPTY_TEXT));
}

#[test]
fn test_hidden_message_popup_draws_nothing() {
    let mut popup = MessagePopup::new();
    let text = render(60, 10, &mut popup);
    assert!(text.chars().all(|c| c == ' ' || c == '\n'));

    popup.activate("Error", "Empty title, aborting.");
    let text = render(60, 10, &mut popup);
    assert!(text.contains("Empty title, aborting."));
    assert!(text.contains(MESSAGE_POPUP_FOOTER));
}

#[test]
fn test_both_popups_visible_at_once() {
    let mut state = UiState::new(&UiOptions::default());
    state.message.activate("Error", "Empty message, aborting.");
    state.input.activate("Filter by title", "cra", Box::new(Action::ApplyFilter));

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| state.layout(f)).unwrap();
    let text = buffer_text(terminal.backend().buffer());

    assert!(text.contains("Empty message, aborting."));
    assert!(text.contains("Filter by title"));
    assert!(text.contains("cra"));
}
