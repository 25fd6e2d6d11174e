use crate::support::{code, ctrl_c, key, FakeConsole, FakeEditor, RecordingStore};
use bugterm::constants::{MSG_POPUP_ERROR_TITLE, NOTICE_EMPTY_MESSAGE, NOTICE_EMPTY_TITLE};
use bugterm::ui::{Ui, UiOptions, ViewKind};
use bugterm::{BugStore, UiError};
use crossterm::event::KeyCode;

#[test]
fn test_new_bug_switches_to_detail_view() {
    let mut store = RecordingStore::new();
    let mut console = FakeConsole::with_keys([key('n'), ctrl_c()]);
    let probe = console.clone();
    let mut editor = FakeEditor::watching(&probe).with_draft("Crash on start", "Steps to reproduce");

    {
        let mut ui = Ui::new(&mut store, &mut editor, &mut console, &UiOptions::default());
        ui.run().unwrap();

        let state = ui.state();
        assert!(state.is_active(ViewKind::Detail));
        assert_eq!(state.detail.bug().unwrap().title, "Crash on start");
        assert!(!state.message.is_visible());
        assert_eq!(state.list.bugs().len(), 1, "list should be refreshed after the restart");
    }

    assert_eq!(store.mutations, vec!["create:Crash on start"]);
    assert_eq!(editor.calls, vec!["create"]);
    assert_eq!(probe.acquired(), 2);
    assert_eq!(probe.released(), 2);
    assert_eq!(probe.live(), 0);
}

#[test]
fn test_terminal_released_before_editor_runs() {
    let mut store = RecordingStore::new();
    let id = store.seed("Typo in README", "teh");
    let mut console = FakeConsole::with_keys([key('n'), code(KeyCode::Enter), key('c'), key('t'), ctrl_c()]);
    let probe = console.clone();
    let mut editor = FakeEditor::watching(&probe)
        .with_draft("Second bug", "body")
        .with_text("a comment")
        .with_text("a title");

    {
        let mut ui = Ui::new(&mut store, &mut editor, &mut console, &UiOptions::default());
        // After the new bug the detail view is active, so Enter is unbound there
        // and 'c' and 't' act on the new bug.
        ui.run().unwrap();
    }

    assert_eq!(editor.calls, vec!["create", "comment", "title:Second bug"]);
    assert_eq!(editor.live_at_call, vec![0, 0, 0]);
    assert_eq!(probe.live(), 0);
    assert_eq!(store.inner.snapshot(&id).unwrap().title, "Typo in README");
}

#[test]
fn test_empty_new_bug_shows_notice_without_mutation() {
    let mut store = RecordingStore::new();
    let mut console = FakeConsole::with_keys([key('n'), ctrl_c()]);
    let probe = console.clone();
    let mut editor = FakeEditor::watching(&probe);

    {
        let mut ui = Ui::new(&mut store, &mut editor, &mut console, &UiOptions::default());
        ui.run().unwrap();

        let state = ui.state();
        assert!(state.is_active(ViewKind::List));
        assert!(state.message.is_visible());
        assert_eq!(state.message.title(), MSG_POPUP_ERROR_TITLE);
        assert_eq!(state.message.message(), NOTICE_EMPTY_TITLE);
    }

    assert!(store.mutations.is_empty());
    assert_eq!(probe.acquired(), 2);
    assert!(probe.last_frame().contains(NOTICE_EMPTY_TITLE));
}

#[test]
fn test_add_comment_stays_on_detail_view() {
    let mut store = RecordingStore::new();
    let id = store.seed("Crash on start", "Steps");
    let mut console = FakeConsole::with_keys([code(KeyCode::Enter), key('c'), ctrl_c()]);
    let mut editor = FakeEditor::default().with_text("Still happens on 1.2");

    {
        let mut ui = Ui::new(&mut store, &mut editor, &mut console, &UiOptions::default());
        ui.run().unwrap();

        let state = ui.state();
        assert!(state.is_active(ViewKind::Detail));
        let bug = state.detail.bug().unwrap();
        assert_eq!(bug.id, id);
        assert_eq!(bug.comments.len(), 2, "detail should show the new comment after the restart");
        assert_eq!(bug.comments[1].message, "Still happens on 1.2");
    }

    assert_eq!(store.mutations, vec!["comment:Still happens on 1.2"]);
}

#[test]
fn test_set_title_passes_current_title_to_editor() {
    let mut store = RecordingStore::new();
    let id = store.seed("Old title", "Steps");
    let mut console = FakeConsole::with_keys([code(KeyCode::Enter), key('t'), ctrl_c()]);
    let mut editor = FakeEditor::default().with_text("New title");

    {
        let mut ui = Ui::new(&mut store, &mut editor, &mut console, &UiOptions::default());
        ui.run().unwrap();

        let state = ui.state();
        assert!(state.is_active(ViewKind::Detail));
        assert_eq!(state.detail.bug().unwrap().title, "New title");
        assert_eq!(state.list.bugs()[0].title, "New title");
    }

    assert_eq!(editor.calls, vec!["title:Old title"]);
    assert_eq!(store.mutations, vec!["title:New title"]);
    assert_eq!(store.inner.snapshot(&id).unwrap().title, "New title");
}

#[test]
fn test_empty_comment_and_title_never_mutate() {
    let mut store = RecordingStore::new();
    store.seed("Old title", "Steps");
    let mut console = FakeConsole::with_keys([code(KeyCode::Enter), key('c'), key('t'), ctrl_c()]);
    let mut editor = FakeEditor::default();

    {
        let mut ui = Ui::new(&mut store, &mut editor, &mut console, &UiOptions::default());
        ui.run().unwrap();

        let state = ui.state();
        assert!(state.is_active(ViewKind::Detail));
        assert!(state.message.is_visible());
        assert_eq!(state.message.message(), NOTICE_EMPTY_TITLE);
        assert_eq!(state.detail.bug().unwrap().comments.len(), 1);
    }

    assert_eq!(editor.calls, vec!["comment", "title:Old title"]);
    assert!(store.mutations.is_empty());
}

#[test]
fn test_empty_comment_notice() {
    let mut store = RecordingStore::new();
    store.seed("Crash", "Steps");
    let mut console = FakeConsole::with_keys([code(KeyCode::Enter), key('c'), ctrl_c()]);
    let mut editor = FakeEditor::default();

    let mut ui = Ui::new(&mut store, &mut editor, &mut console, &UiOptions::default());
    ui.run().unwrap();

    assert_eq!(ui.state().message.message(), NOTICE_EMPTY_MESSAGE);
}

#[test]
fn test_mutation_failure_is_returned_without_restart() {
    let mut store = RecordingStore::new();
    store.fail_mutations = true;
    let mut console = FakeConsole::with_keys([key('n'), ctrl_c()]);
    let probe = console.clone();
    let mut editor = FakeEditor::default().with_draft("Crash", "Steps");

    let result = bugterm::run(&mut store, &mut editor, &mut console, &UiOptions::default());

    assert!(matches!(result, Err(UiError::Store(_))));
    assert_eq!(probe.acquired(), 1, "no new loop instance after a failed mutation");
    assert_eq!(probe.live(), 0);
    assert_eq!(probe.keys_left(), 1);
    assert_eq!(store.mutations, vec!["create:Crash"]);
}

#[test]
fn test_editor_failure_is_fatal() {
    let mut store = RecordingStore::new();
    let mut console = FakeConsole::with_keys([key('n'), ctrl_c()]);
    let probe = console.clone();
    let mut editor = FakeEditor::default();
    editor.fail = true;

    let result = bugterm::run(&mut store, &mut editor, &mut console, &UiOptions::default());

    assert!(matches!(result, Err(UiError::Editor(_))));
    assert_eq!(probe.acquired(), 1);
    assert_eq!(probe.live(), 0);
    assert!(store.mutations.is_empty());
}

#[test]
fn test_reacquire_failure_is_fatal() {
    let mut store = RecordingStore::new();
    let mut console = FakeConsole::with_keys([key('n'), ctrl_c()]);
    let probe = console.clone();
    let mut editor = FakeEditor::default().with_draft("Crash", "Steps");

    {
        let mut ui = Ui::new(&mut store, &mut editor, &mut console, &UiOptions::default());
        ui.init_loop(None).unwrap();
        probe.log.borrow_mut().fail_acquire = true;

        let result = ui.run_loop();
        assert!(matches!(result, Err(UiError::Terminal(_))));
        assert!(ui.is_suspended());
    }

    // The mutation happened before the failed restart
    assert_eq!(store.mutations, vec!["create:Crash"]);
    assert_eq!(probe.live(), 0);
}
