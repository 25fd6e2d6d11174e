//! Full-screen table of bugs.

use crate::backend::Bug;
use crate::constants::{LIST_EMPTY_TEXT, LIST_FOOTER, LIST_VIEW_TITLE};
use crate::ui::components::common::create_footer_paragraph;
use crate::ui::core::{Action, Context, Keymap, Screen, UiError, View};
use crate::ui::layout::LayoutManager;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub struct BugListView {
    bugs: Vec<Bug>,
    filter: String,
    selected_index: usize,
    table_state: TableState,
    date_format: String,
}

impl BugListView {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            bugs: Vec::new(),
            filter: String::new(),
            selected_index: 0,
            table_state: TableState::default(),
            date_format: date_format.into(),
        }
    }

    /// Replace the listed bugs, keeping the selection on the same bug if it is still visible
    pub fn set_bugs(&mut self, bugs: Vec<Bug>) {
        let selected_id = self.selected_bug().map(|bug| bug.id);
        self.bugs = bugs;

        self.selected_index = selected_id
            .and_then(|id| self.visible().iter().position(|bug| bug.id == id))
            .unwrap_or(0);
        self.update_table_state();
    }

    pub fn bugs(&self) -> &[Bug] {
        &self.bugs
    }

    /// Bugs matching the current title filter, in display order
    pub fn visible(&self) -> Vec<&Bug> {
        let needle = self.filter.to_lowercase();
        self.bugs
            .iter()
            .filter(|bug| needle.is_empty() || bug.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into().trim().to_string();
        self.selected_index = 0;
        self.update_table_state();
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_bug(&self) -> Option<&Bug> {
        self.visible().get(self.selected_index).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
            self.update_table_state();
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected_index = if self.selected_index == 0 {
                len - 1
            } else {
                self.selected_index - 1
            };
            self.update_table_state();
        }
    }

    fn update_table_state(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected_index = 0;
            self.table_state.select(None);
        } else {
            self.selected_index = self.selected_index.min(len - 1);
            self.table_state.select(Some(self.selected_index));
        }
    }

    fn create_rows(&self) -> Vec<Row<'static>> {
        self.visible()
            .into_iter()
            .map(|bug| {
                let status_color = match bug.status {
                    crate::backend::Status::Open => Color::Green,
                    crate::backend::Status::Closed => Color::DarkGray,
                };
                Row::new(vec![
                    Cell::from(bug.id.short()).style(Style::default().fg(Color::Cyan)),
                    Cell::from(bug.status.to_string()).style(Style::default().fg(status_color)),
                    Cell::from(bug.title.clone()),
                    Cell::from(format!("💬 {}", bug.reply_count())),
                    Cell::from(bug.edited_at.format(&self.date_format).to_string())
                        .style(Style::default().fg(Color::Gray)),
                ])
            })
            .collect()
    }

    fn block_title(&self) -> String {
        if self.filter.is_empty() {
            LIST_VIEW_TITLE.to_string()
        } else {
            format!("{}[filter: {}] ", LIST_VIEW_TITLE, self.filter)
        }
    }
}

impl View for BugListView {
    fn context(&self) -> Context {
        Context::List
    }

    fn keybindings(&self, keymap: &mut Keymap) -> Result<(), UiError> {
        let context = self.context();
        keymap.bind_key(context, KeyCode::Char('j'), Action::SelectNext)?;
        keymap.bind_key(context, KeyCode::Down, Action::SelectNext)?;
        keymap.bind_key(context, KeyCode::Char('k'), Action::SelectPrevious)?;
        keymap.bind_key(context, KeyCode::Up, Action::SelectPrevious)?;
        keymap.bind_key(context, KeyCode::Enter, Action::OpenSelected)?;
        keymap.bind_key(context, KeyCode::Char('n'), Action::NewBug)?;
        keymap.bind_key(context, KeyCode::Char('/'), Action::OpenFilter)?;
        keymap.bind_key(context, KeyCode::Char('q'), Action::Quit)?;
        Ok(())
    }

    fn layout(&mut self, f: &mut Frame, area: Rect) {
        let (content_area, footer_area) = LayoutManager::view_layout(area);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.block_title())
            .title_style(Style::default().add_modifier(Modifier::BOLD));

        if self.visible().is_empty() {
            let empty = Paragraph::new(Line::from(LIST_EMPTY_TEXT))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray))
                .block(block);
            f.render_widget(empty, content_area);
        } else {
            let header = Row::new(vec!["ID", "Status", "Title", "Comments", "Edited"])
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let widths = [
                Constraint::Length(8),
                Constraint::Length(7),
                Constraint::Min(20),
                Constraint::Length(9),
                Constraint::Length(17),
            ];
            let table = Table::new(self.create_rows(), widths)
                .header(header)
                .block(block)
                .row_highlight_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD));
            f.render_stateful_widget(table, content_area, &mut self.table_state);
        }

        f.render_widget(create_footer_paragraph(LIST_FOOTER), footer_area);
    }

    fn disable(&mut self, screen: &mut dyn Screen) -> Result<(), UiError> {
        screen.clear()?;
        Ok(())
    }
}
