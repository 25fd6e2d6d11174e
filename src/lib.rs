//! Bugterm - A Terminal User Interface (TUI) for a local bug tracker
//!
//! This library provides a terminal-based interface for browsing bugs,
//! reading their comment threads, and filing new bugs, comments and title
//! changes through the user's own text editor. The terminal is handed over
//! to the editor and taken back without losing UI state.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`backend`] - Bug data model and the storage interface the UI drives
//! * [`config`] - Application configuration management
//! * [`editor`] - External editor invocation for titles, messages and comments
//! * [`ui`] - Terminal user interface, views and the render loop lifecycle

/// Bug storage abstraction and the default JSON-backed cache
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// External editor integration
pub mod editor;

/// Logging setup for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

pub use backend::{Bug, BugCache, BugId, BugStore, Comment, Status, StoreError};
pub use editor::{BugDraft, Editor, EditorError, ExternalEditor};
pub use ui::{run, UiError};
