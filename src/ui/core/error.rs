use super::keymap::Context;
use crate::backend::StoreError;
use crate::editor::EditorError;

/// Fatal errors of the terminal UI.
///
/// An empty editor input is not an error: it only arms the message popup.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error("Key {key} is bound twice in the {context} context")]
    DuplicateBinding { context: Context, key: String },

    #[error("No render loop is running")]
    Suspended,
}
