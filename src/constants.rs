//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Popup titles
pub const MSG_POPUP_ERROR_TITLE: &str = "Error";
pub const INPUT_POPUP_FILTER_TITLE: &str = "Filter by title";

// Empty editor input notices
pub const NOTICE_EMPTY_TITLE: &str = "Empty title, aborting.";
pub const NOTICE_EMPTY_MESSAGE: &str = "Empty message, aborting.";

// View titles
pub const LIST_VIEW_TITLE: &str = " Bugs ";
pub const DETAIL_VIEW_TITLE: &str = " Bug ";
pub const LIST_EMPTY_TEXT: &str = "No bugs yet. Press 'n' to file one.";
pub const DETAIL_EMPTY_TEXT: &str = "No bug selected.";

// Footer hints
pub const LIST_FOOTER: &str = "[q] Quit [n] New bug [Enter] Open [/] Filter [j/k] Move";
pub const DETAIL_FOOTER: &str = "[q] Back [c] Comment [t] Title [j/k] Scroll";
pub const MESSAGE_POPUP_FOOTER: &str = "[Esc/Space] Dismiss";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// Config/storage file names
pub const APP_DIR_NAME: &str = "bugterm";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "bugterm.toml";
pub const STORE_FILE_NAME: &str = "bugs.json";
pub const LOG_FILE_NAME: &str = "bugterm.log";

/// Editor used when neither `$VISUAL`, `$EDITOR` nor the config name one
pub const DEFAULT_EDITOR: &str = "vi";

/// Default timestamp format for bug and comment dates
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

// UI Layout Constants
/// Height of the input popup strip at the bottom of the screen
pub const INPUT_POPUP_HEIGHT: u16 = 3;
/// Message popup width as a percentage of the main area
pub const MESSAGE_POPUP_WIDTH_PERCENT: u16 = 50;
/// Message popup height in rows
pub const MESSAGE_POPUP_HEIGHT: u16 = 7;
/// Number of characters of a bug id shown in lists
pub const SHORT_ID_LEN: usize = 7;
