//! UI module for Bugterm
//!
//! This module handles all user interface components, rendering, and user
//! interactions, and the hand-over of the terminal to the external editor.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;

pub use app::{Flow, PostInit, Ui, UiOptions, UiState};
pub use self::core::{Action, Console, Context, CrosstermConsole, Keymap, Screen, UiError, View, ViewKind};
pub use layout::LayoutManager;

use crate::backend::BugStore;
use crate::editor::Editor;

/// Launch the terminal UI on `store`, starting on the bug list.
///
/// Blocks until the user quits (`Ok(())`) or a fatal error occurs (the first
/// such error is returned). The terminal is released in both cases.
pub fn run(
    store: &mut dyn BugStore,
    editor: &mut dyn Editor,
    console: &mut dyn Console,
    options: &UiOptions,
) -> Result<(), UiError> {
    Ui::new(store, editor, console, options).run()
}
