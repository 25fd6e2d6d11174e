//! Keybinding table.
//!
//! A [`Keymap`] belongs to one render loop instance and is rebuilt every time
//! the loop is started. Bindings are kept in registration order and the first
//! eligible match wins, so the order of registration is the dispatch priority.

use super::actions::Action;
use super::component::ViewKind;
use super::error::UiError;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;

/// Where a binding applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    /// Always eligible
    Global,
    List,
    Detail,
    MessagePopup,
    InputPopup,
}

impl From<ViewKind> for Context {
    fn from(kind: ViewKind) -> Self {
        match kind {
            ViewKind::List => Context::List,
            ViewKind::Detail => Context::Detail,
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Context::Global => "global",
            Context::List => "list",
            Context::Detail => "detail",
            Context::MessagePopup => "message popup",
            Context::InputPopup => "input popup",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub context: Context,
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: Action,
}

impl Binding {
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && normalize(self.key, self.modifiers) == normalize(event.code, event.modifiers)
    }
}

// Terminals report SHIFT on upper-case characters inconsistently
fn normalize(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    let mut modifiers = modifiers;
    if let KeyCode::Char(_) = code {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    modifiers
}

#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Binding>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding. Binding the same key twice in one context is an error.
    pub fn bind(
        &mut self,
        context: Context,
        key: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
    ) -> Result<(), UiError> {
        let duplicate = self.bindings.iter().any(|binding| {
            binding.context == context
                && binding.key == key
                && normalize(binding.key, binding.modifiers) == normalize(key, modifiers)
        });
        if duplicate {
            return Err(UiError::DuplicateBinding {
                context,
                key: format!("{:?}", key),
            });
        }

        self.bindings.push(Binding {
            context,
            key,
            modifiers,
            action,
        });
        Ok(())
    }

    /// Shorthand for a binding without modifiers
    pub fn bind_key(&mut self, context: Context, key: KeyCode, action: Action) -> Result<(), UiError> {
        self.bind(context, key, KeyModifiers::NONE, action)
    }

    /// First binding matching `event` whose context is eligible
    pub fn resolve(&self, event: &KeyEvent, eligible: impl Fn(Context) -> bool) -> Option<&Binding> {
        self.bindings
            .iter()
            .find(|binding| binding.matches(event) && eligible(binding.context))
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
