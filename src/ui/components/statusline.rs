//! Status Line Component
//!
//! Displays mode indicator, transient messages, and session info.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::input::InputMode;
use crate::ui::tabs::AppTab;

/// Message type for status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::White,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Status line widget
pub struct StatusLine<'a> {
    mode: InputMode,
    message: Option<(&'a str, MessageType)>,
    username: Option<&'a str>,
    member_count: Option<usize>,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            message: None,
            username: None,
            member_count: None,
        }
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }

    pub fn username(mut self, name: &'a str) -> Self {
        self.username = Some(name);
        self
    }

    pub fn member_count(mut self, count: usize) -> Self {
        self.member_count = Some(count);
        self
    }
}

impl<'a> Widget for StatusLine<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mut x = area.x;

        let mode_style = match self.mode {
            InputMode::Normal => Style::default().fg(Color::Black).bg(Color::Blue),
            InputMode::Insert => Style::default().fg(Color::Black).bg(Color::Green),
            InputMode::Confirm => Style::default().fg(Color::Black).bg(Color::Red),
        };

        let mode_text = format!(" {} ", self.mode.indicator());
        buf.set_string(x, area.y, &mode_text, mode_style.add_modifier(Modifier::BOLD));
        x += mode_text.len() as u16;

        buf.set_string(x, area.y, " ", Style::default().bg(Color::DarkGray));
        x += 1;

        if let Some((msg, msg_type)) = self.message {
            buf.set_string(
                x,
                area.y,
                msg,
                Style::default().fg(msg_type.color()).bg(Color::DarkGray),
            );
        }

        let mut right_parts: Vec<String> = Vec::new();
        if let Some(count) = self.member_count {
            right_parts.push(format!("{} members", count));
        }
        if let Some(user) = self.username {
            right_parts.push(format!("@{}", user));
        }

        let right_text = right_parts.join("  ");
        let right_x = area.x + area.width.saturating_sub(right_text.len() as u16 + 1);
        buf.set_string(
            right_x,
            area.y,
            &right_text,
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        );
    }
}

/// Help bar widget
pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl<'a> HelpBar<'a> {
    pub fn new(hints: Vec<(&'a str, &'a str)>) -> Self {
        Self { hints }
    }

    pub fn for_context(mode: InputMode, tab: AppTab) -> Self {
        let hints = match mode {
            InputMode::Normal => match tab {
                AppTab::AddMember | AppTab::EditMember => vec![
                    ("1-4", "tab"),
                    ("j/k", "field"),
                    ("i/Enter", "edit"),
                    ("Space", "gender"),
                    ("s", "save"),
                    ("q", "quit"),
                ],
                AppTab::ViewAll => vec![
                    ("1-4", "tab"),
                    ("j/k", "navigate"),
                    ("e", "edit"),
                    ("dd/x", "delete"),
                    ("r", "refresh"),
                    ("q", "quit"),
                ],
                AppTab::Insights => vec![("1-4", "tab"), ("r", "refresh"), ("q", "quit")],
            },
            InputMode::Insert => vec![("Esc", "done"), ("Enter", "next field")],
            InputMode::Confirm => vec![("y", "yes"), ("n", "no")],
        };
        Self { hints }
    }
}

impl<'a> Widget for HelpBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
        }
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
