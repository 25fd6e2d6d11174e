//! Core UI functionality for the Bugterm application.
//!
//! This module contains the building blocks the views and the loop lifecycle
//! are made of. It has no knowledge of bugs; it only knows views, keys and the
//! terminal.
//!
//! # Module Components
//!
//! - [`actions`] - Actions produced by keybindings and executed by the UI
//! - [`component`] - The [`View`] capability set and view identifiers
//! - [`error`] - The [`UiError`] type surfaced by the terminal UI
//! - [`keymap`] - Keybinding table installed for each render loop instance
//! - [`terminal`] - Terminal capability: acquire, draw, read keys, release
//!
//! # Architecture
//!
//! 1. **Views** implement the [`View`] trait: keybindings, layout and disable
//! 2. **Keybindings** map a key in a [`Context`] to an [`Action`]
//! 3. **Actions** are executed by the UI against its state
//! 4. **Screens** are live terminal grabs handed out by a [`Console`]

pub mod actions;
pub mod component;
pub mod error;
pub mod keymap;
pub mod terminal;

pub use actions::Action;
pub use component::{View, ViewKind};
pub use error::UiError;
pub use keymap::{Binding, Context, Keymap};
pub use terminal::{Console, CrosstermConsole, Screen};
