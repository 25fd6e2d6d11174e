use crate::support::{code, ctrl_c, key, FakeConsole, FakeEditor, RecordingStore};
use bugterm::ui::{Action, Console, Context, Keymap, Ui, UiOptions, UiState, ViewKind};
use bugterm::UiError;
use crossterm::event::{KeyCode, KeyModifiers};

fn resolve(keymap: &Keymap, state: &UiState, c: char) -> Option<Action> {
    keymap
        .resolve(&key(c), |context| state.is_eligible(context))
        .map(|binding| binding.action.clone())
}

#[test]
fn test_default_bindings_registration_order() {
    let state = UiState::new(&UiOptions::default());
    let keymap = state.keybindings().unwrap();

    let first = &keymap.bindings()[0];
    assert_eq!(first.context, Context::Global);
    assert_eq!(first.action, Action::Quit);

    // Contexts appear in dispatch priority order, each as one contiguous run
    let mut contexts: Vec<Context> = keymap.bindings().iter().map(|binding| binding.context).collect();
    contexts.dedup();
    assert_eq!(
        contexts,
        vec![
            Context::Global,
            Context::List,
            Context::Detail,
            Context::MessagePopup,
            Context::InputPopup
        ]
    );
}

#[test]
fn test_view_binding_wins_over_message_popup() {
    let mut keymap = Keymap::new();
    keymap.bind(Context::Global, KeyCode::Char('c'), KeyModifiers::CONTROL, Action::Quit).unwrap();
    keymap.bind_key(Context::List, KeyCode::Char('x'), Action::SelectNext).unwrap();
    keymap.bind_key(Context::MessagePopup, KeyCode::Char('x'), Action::DismissMessage).unwrap();

    let mut state = UiState::new(&UiOptions::default());
    assert_eq!(resolve(&keymap, &state, 'x'), Some(Action::SelectNext));

    state.message.activate("Error", "boom");
    assert_eq!(resolve(&keymap, &state, 'x'), Some(Action::SelectNext));

    // With the list inactive only the popup binding is left
    let mut screen = FakeConsole::default().acquire().unwrap();
    state.activate(ViewKind::Detail, screen.as_mut()).unwrap();
    assert_eq!(resolve(&keymap, &state, 'x'), Some(Action::DismissMessage));

    state.message.deactivate();
    assert_eq!(resolve(&keymap, &state, 'x'), None);
}

#[test]
fn test_quit_binding_resolves_first_everywhere() {
    let mut state = UiState::new(&UiOptions::default());
    let keymap = state.keybindings().unwrap();
    let quit = |state: &UiState| {
        keymap
            .resolve(&ctrl_c(), |context| state.is_eligible(context))
            .map(|binding| binding.action.clone())
    };

    assert_eq!(quit(&state), Some(Action::Quit));

    state.message.activate("Error", "boom");
    state.input.activate("Filter", "", Box::new(Action::ApplyFilter));
    assert_eq!(quit(&state), Some(Action::Quit));

    let mut screen = FakeConsole::default().acquire().unwrap();
    state.activate(ViewKind::Detail, screen.as_mut()).unwrap();
    assert_eq!(quit(&state), Some(Action::Quit));
}

#[test]
fn test_input_popup_is_modal() {
    let mut state = UiState::new(&UiOptions::default());
    let keymap = state.keybindings().unwrap();

    assert_eq!(resolve(&keymap, &state, 'n'), Some(Action::NewBug));

    state.input.activate("Filter", "", Box::new(Action::ApplyFilter));
    assert_eq!(resolve(&keymap, &state, 'n'), None);
    assert_eq!(resolve(&keymap, &state, 'q'), None);
}

#[test]
fn test_duplicate_binding_in_one_context_is_rejected() {
    let mut keymap = Keymap::new();
    keymap.bind_key(Context::List, KeyCode::Char('x'), Action::SelectNext).unwrap();

    let result = keymap.bind_key(Context::List, KeyCode::Char('x'), Action::Quit);
    assert!(matches!(result, Err(UiError::DuplicateBinding { context: Context::List, .. })));

    // Same key in another context is fine
    assert!(keymap.bind_key(Context::Detail, KeyCode::Char('x'), Action::Quit).is_ok());
}

#[test]
fn test_filter_typing_does_not_trigger_view_bindings() {
    let mut store = RecordingStore::new();
    store.seed("Crash on start", "Steps");
    store.seed("Typo in README", "teh");
    let mut console = FakeConsole::with_keys([
        key('/'),
        key('n'),
        code(KeyCode::Backspace),
        key('c'),
        key('r'),
        code(KeyCode::Enter),
        ctrl_c(),
    ]);
    let mut editor = FakeEditor::default();

    {
        let mut ui = Ui::new(&mut store, &mut editor, &mut console, &UiOptions::default());
        ui.run().unwrap();

        let state = ui.state();
        assert!(!state.input.is_visible());
        assert_eq!(state.list.filter(), "cr");
        assert_eq!(state.list.visible().len(), 1);
        assert_eq!(state.list.selected_bug().unwrap().title, "Crash on start");
    }

    assert!(editor.calls.is_empty());
}

#[test]
fn test_cancel_filter_keeps_previous_filter() {
    let mut store = RecordingStore::new();
    store.seed("Crash on start", "Steps");
    let mut console = FakeConsole::with_keys([key('/'), key('z'), code(KeyCode::Esc), ctrl_c()]);
    let mut editor = FakeEditor::default();

    let mut ui = Ui::new(&mut store, &mut editor, &mut console, &UiOptions::default());
    ui.run().unwrap();

    assert!(!ui.state().input.is_visible());
    assert_eq!(ui.state().list.filter(), "");
}

#[test]
fn test_message_popup_dismissed_with_escape() {
    let mut store = RecordingStore::new();
    let mut console = FakeConsole::with_keys([key('n'), code(KeyCode::Esc), ctrl_c()]);
    let mut editor = FakeEditor::default();

    let mut ui = Ui::new(&mut store, &mut editor, &mut console, &UiOptions::default());
    ui.run().unwrap();

    assert!(!ui.state().message.is_visible());
}

#[test]
fn test_list_navigation_through_run_loop() {
    let mut store = RecordingStore::new();
    store.seed("First", "a");
    store.seed("Second", "b");
    store.seed("Third", "c");
    let mut console = FakeConsole::with_keys([key('j'), key('j'), key('j'), key('k'), ctrl_c()]);
    let mut editor = FakeEditor::default();

    let mut ui = Ui::new(&mut store, &mut editor, &mut console, &UiOptions::default());
    ui.run().unwrap();

    // Three steps down wrap back to the top, one step up lands on the last row
    assert_eq!(ui.state().list.selected_index(), 2);
}
