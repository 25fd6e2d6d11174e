/// What a keybinding asks the UI to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Bug list navigation
    SelectNext,
    SelectPrevious,
    OpenSelected,
    OpenFilter,
    ApplyFilter(String),

    // Bug detail navigation
    ScrollDown,
    ScrollUp,
    ShowList,

    // Editor handoffs
    NewBug,
    AddComment,
    SetTitle,

    // Popups
    DismissMessage,
    SubmitInput,
    CancelInput,

    // App control
    Quit,
    None,
}
