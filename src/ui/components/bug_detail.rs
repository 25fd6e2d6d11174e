//! Full-screen view of one bug and its comment thread.

use crate::backend::{Bug, BugId};
use crate::constants::{DETAIL_EMPTY_TEXT, DETAIL_FOOTER, DETAIL_VIEW_TITLE};
use crate::ui::components::common::create_footer_paragraph;
use crate::ui::core::{Action, Context, Keymap, Screen, UiError, View};
use crate::ui::layout::LayoutManager;
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct BugDetailView {
    bug: Option<Bug>,
    scroll: u16,
    date_format: String,
}

impl BugDetailView {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            bug: None,
            scroll: 0,
            date_format: date_format.into(),
        }
    }

    /// Swap the displayed bug. Scroll position is kept when it is the same bug.
    pub fn set_bug(&mut self, bug: Bug) {
        if self.bug_id() != Some(bug.id) {
            self.scroll = 0;
        }
        self.bug = Some(bug);
    }

    pub fn bug(&self) -> Option<&Bug> {
        self.bug.as_ref()
    }

    pub fn bug_id(&self) -> Option<BugId> {
        self.bug.as_ref().map(|bug| bug.id)
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_down(&mut self) {
        let max = self.content_lines().len().saturating_sub(1);
        let max = u16::try_from(max).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn content_lines(&self) -> Vec<Line<'static>> {
        let Some(bug) = &self.bug else {
            return vec![Line::from(Span::styled(
                DETAIL_EMPTY_TEXT,
                Style::default().fg(Color::Gray),
            ))];
        };

        let mut lines = vec![
            Line::from(Span::styled(
                bug.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(format!("[{}] ", bug.status), Style::default().fg(Color::Green)),
                Span::styled(bug.id.short(), Style::default().fg(Color::Cyan)),
                Span::raw(format!(
                    " opened by {} on {}",
                    bug.author,
                    bug.created_at.format(&self.date_format)
                )),
            ]),
            Line::from(""),
        ];

        for (index, comment) in bug.comments.iter().enumerate() {
            let heading = if index == 0 {
                format!("{} wrote on {}", comment.author, comment.created_at.format(&self.date_format))
            } else {
                format!(
                    "#{} {} commented on {}",
                    index,
                    comment.author,
                    comment.created_at.format(&self.date_format)
                )
            };
            lines.push(Line::from(Span::styled(heading, Style::default().fg(Color::Yellow))));

            if comment.message.trim().is_empty() {
                lines.push(Line::from(Span::styled(
                    "No description provided.",
                    Style::default().fg(Color::DarkGray),
                )));
            } else {
                lines.extend(comment.message.lines().map(|line| Line::from(format!("  {}", line))));
            }
            lines.push(Line::from(""));
        }

        lines
    }
}

impl View for BugDetailView {
    fn context(&self) -> Context {
        Context::Detail
    }

    fn keybindings(&self, keymap: &mut Keymap) -> Result<(), UiError> {
        let context = self.context();
        keymap.bind_key(context, KeyCode::Char('j'), Action::ScrollDown)?;
        keymap.bind_key(context, KeyCode::Down, Action::ScrollDown)?;
        keymap.bind_key(context, KeyCode::Char('k'), Action::ScrollUp)?;
        keymap.bind_key(context, KeyCode::Up, Action::ScrollUp)?;
        keymap.bind_key(context, KeyCode::Char('c'), Action::AddComment)?;
        keymap.bind_key(context, KeyCode::Char('t'), Action::SetTitle)?;
        keymap.bind_key(context, KeyCode::Char('q'), Action::ShowList)?;
        keymap.bind_key(context, KeyCode::Left, Action::ShowList)?;
        Ok(())
    }

    fn layout(&mut self, f: &mut Frame, area: Rect) {
        let (content_area, footer_area) = LayoutManager::view_layout(area);
        let paragraph = Paragraph::new(self.content_lines())
            .block(Block::default().borders(Borders::ALL).title(DETAIL_VIEW_TITLE))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));

        f.render_widget(paragraph, content_area);
        f.render_widget(create_footer_paragraph(DETAIL_FOOTER), footer_area);
    }

    fn disable(&mut self, screen: &mut dyn Screen) -> Result<(), UiError> {
        screen.clear()?;
        self.scroll = 0;
        Ok(())
    }
}
