//! One-shot notice drawn over the active view.

use crate::constants::MESSAGE_POPUP_FOOTER;
use crate::ui::components::common::{create_dialog_block, create_footer_paragraph};
use crate::ui::core::{Action, Context, Keymap, Screen, UiError, View};
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Default)]
pub struct MessagePopup {
    visible: bool,
    title: String,
    message: String,
}

impl MessagePopup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the popup. It stays visible, across loop restarts, until dismissed.
    pub fn activate(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.title = title.into();
        self.message = message.into();
        self.visible = true;
    }

    pub fn deactivate(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl View for MessagePopup {
    fn context(&self) -> Context {
        Context::MessagePopup
    }

    fn keybindings(&self, keymap: &mut Keymap) -> Result<(), UiError> {
        keymap.bind_key(self.context(), KeyCode::Esc, Action::DismissMessage)?;
        keymap.bind_key(self.context(), KeyCode::Char(' '), Action::DismissMessage)?;
        Ok(())
    }

    fn layout(&mut self, f: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let block = create_dialog_block(&self.title, Color::Red);
        let inner = block.inner(area);
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let [text_area, footer_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        let text = Paragraph::new(self.message.as_str())
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(text, text_area);
        f.render_widget(create_footer_paragraph(MESSAGE_POPUP_FOOTER), footer_area);
    }

    fn disable(&mut self, _screen: &mut dyn Screen) -> Result<(), UiError> {
        self.deactivate();
        Ok(())
    }
}
