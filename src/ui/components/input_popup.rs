//! Single-line prompt drawn in the bottom strip of the screen.
//!
//! While visible the prompt is modal: it owns text entry, and full-screen
//! view bindings are not dispatched.

use crate::ui::components::common::create_input_paragraph;
use crate::ui::core::{Action, Context, Keymap, Screen, UiError, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, widgets::Clear, Frame};

/// Turns the submitted text into the action to run next
pub type SubmitFn = Box<dyn FnOnce(String) -> Action>;

#[derive(Default)]
pub struct InputPopup {
    visible: bool,
    title: String,
    input_buffer: String,
    on_submit: Option<SubmitFn>,
}

impl InputPopup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate(&mut self, title: impl Into<String>, initial: impl Into<String>, on_submit: SubmitFn) {
        self.title = title.into();
        self.input_buffer = initial.into();
        self.on_submit = Some(on_submit);
        self.visible = true;
    }

    pub fn deactivate(&mut self) {
        self.visible = false;
        self.on_submit = None;
        self.input_buffer.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    /// Apply an unbound key to the buffer. Returns whether the key was consumed.
    pub fn edit(&mut self, key: &KeyEvent) -> bool {
        if !self.visible {
            return false;
        }
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.input_buffer.push(c);
                true
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                true
            }
            _ => false,
        }
    }

    /// Hide the popup and hand the buffer to the submit callback
    pub fn submit(&mut self) -> Action {
        let text = std::mem::take(&mut self.input_buffer);
        let on_submit = self.on_submit.take();
        self.deactivate();
        match on_submit {
            Some(callback) => callback(text),
            None => Action::None,
        }
    }
}

impl View for InputPopup {
    fn context(&self) -> Context {
        Context::InputPopup
    }

    fn keybindings(&self, keymap: &mut Keymap) -> Result<(), UiError> {
        keymap.bind_key(self.context(), KeyCode::Enter, Action::SubmitInput)?;
        keymap.bind_key(self.context(), KeyCode::Esc, Action::CancelInput)?;
        Ok(())
    }

    fn layout(&mut self, f: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        f.render_widget(Clear, area);
        f.render_widget(create_input_paragraph(&self.input_buffer, &self.title), area);
    }

    fn disable(&mut self, _screen: &mut dyn Screen) -> Result<(), UiError> {
        self.deactivate();
        Ok(())
    }
}
