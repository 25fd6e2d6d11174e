use super::error::UiError;
use super::keymap::{Context, Keymap};
use super::terminal::Screen;
use ratatui::{layout::Rect, Frame};
use std::fmt;

/// The mutually exclusive full-screen views. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    List,
    Detail,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKind::List => write!(f, "list"),
            ViewKind::Detail => write!(f, "detail"),
        }
    }
}

/// Capability set shared by full-screen views and popups.
pub trait View {
    /// Keybinding context this view registers under
    fn context(&self) -> Context;

    /// Register this view's bindings. Called for every new loop instance,
    /// since bindings do not survive a terminal release.
    fn keybindings(&self, keymap: &mut Keymap) -> Result<(), UiError>;

    fn layout(&mut self, f: &mut Frame, area: Rect);

    /// Release view-local state tied to the current terminal grab.
    /// Only fails on terminal I/O errors.
    fn disable(&mut self, screen: &mut dyn Screen) -> Result<(), UiError>;
}
