//! Auth Screen Component
//!
//! Login and register dialog shown before the main interface unlocks.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Clear, Widget},
};

use super::popup::{centered_rect_fixed, InputField};
use crate::input::text;

/// Whether the screen submits a login or a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => " Sign In ",
            Self::Register => " Create Account ",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

const FIELD_USERNAME: usize = 0;
const FIELD_PASSWORD: usize = 1;

/// Auth form state
#[derive(Debug, Clone)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub username: String,
    pub password: String,
    pub active_field: usize,
    pub cursor: usize,
    pub error: Option<String>,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthForm {
    pub fn new() -> Self {
        Self {
            mode: AuthMode::Login,
            username: String::new(),
            password: String::new(),
            active_field: FIELD_USERNAME,
            cursor: 0,
            error: None,
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
        self.error = None;
    }

    pub fn on_password_field(&self) -> bool {
        self.active_field == FIELD_PASSWORD
    }

    fn active_value_mut(&mut self) -> &mut String {
        if self.active_field == FIELD_USERNAME {
            &mut self.username
        } else {
            &mut self.password
        }
    }

    fn active_value(&self) -> &str {
        if self.active_field == FIELD_USERNAME {
            &self.username
        } else {
            &self.password
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = (self.active_field + 1) % 2;
        self.cursor = self.active_value().len();
    }

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor;
        self.active_value_mut().insert(cursor, c);
        self.cursor += c.len_utf8();
        self.error = None;
    }

    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            let cursor = text::prev_boundary(self.active_value(), self.cursor);
            self.active_value_mut().remove(cursor);
            self.cursor = cursor;
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = text::prev_boundary(self.active_value(), self.cursor);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = text::next_boundary(self.active_value(), self.cursor);
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
        self.active_field = FIELD_USERNAME;
        self.cursor = 0;
    }
}

/// Auth screen widget
pub struct AuthScreen<'a> {
    form: &'a AuthForm,
}

impl<'a> AuthScreen<'a> {
    pub fn new(form: &'a AuthForm) -> Self {
        Self { form }
    }
}

impl Widget for AuthScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = if self.form.error.is_some() { 12 } else { 11 };
        let popup_area = centered_rect_fixed(46, height, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .title(self.form.mode.title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let username_cursor = if self.form.active_field == FIELD_USERNAME {
            self.form.cursor
        } else {
            self.form.username.len()
        };
        let password_cursor = if self.form.on_password_field() {
            self.form.cursor
        } else {
            self.form.password.len()
        };

        InputField::new("Username", &self.form.username, username_cursor)
            .render(Rect::new(inner.x + 1, inner.y, inner.width - 2, 2), buf);

        InputField::new("Password", &self.form.password, password_cursor)
            .masked()
            .render(Rect::new(inner.x + 1, inner.y + 3, inner.width - 2, 2), buf);

        let mut y = inner.y + 6;
        if let Some(ref err) = self.form.error {
            buf.set_string(inner.x + 1, y, err, Style::default().fg(Color::Red));
            y += 1;
        }

        let switch_hint = match self.form.mode {
            AuthMode::Login => "Tab switch field  Ctrl-r register  Enter sign in",
            AuthMode::Register => "Tab switch field  Ctrl-r sign in  Enter create",
        };
        let hint = Line::from(Span::styled(
            switch_hint,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ));
        buf.set_line(inner.x + 1, y + 1, &hint, inner.width - 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle() {
        let mut form = AuthForm::new();
        assert_eq!(form.mode, AuthMode::Login);
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::Register);
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::Login);
    }

    #[test]
    fn test_typing_targets_active_field() {
        let mut form = AuthForm::new();
        form.insert_char('a');
        form.insert_char('b');
        assert_eq!(form.username, "ab");

        form.next_field();
        form.insert_char('x');
        assert_eq!(form.password, "x");
        assert_eq!(form.username, "ab");
    }

    #[test]
    fn test_typing_clears_error() {
        let mut form = AuthForm::new();
        form.set_error("Invalid username or password");
        form.insert_char('a');
        assert!(form.error.is_none());
    }

    #[test]
    fn test_multibyte_credentials_edit_cleanly() {
        let mut form = AuthForm::new();
        form.insert_char('é');
        form.insert_char('e');
        assert_eq!(form.username, "ée");

        form.delete_char();
        assert_eq!(form.username, "é");
        form.delete_char();
        assert!(form.username.is_empty());
        assert_eq!(form.cursor, 0);
    }

    #[test]
    fn test_clear_resets_fields() {
        let mut form = AuthForm::new();
        form.insert_char('a');
        form.next_field();
        form.insert_char('b');
        form.clear();
        assert!(form.username.is_empty());
        assert!(form.password.is_empty());
        assert_eq!(form.active_field, 0);
        assert_eq!(form.cursor, 0);
    }
}
