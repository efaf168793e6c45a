//! Renderer
//!
//! Main rendering logic for the application.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Paragraph, Wrap},
    Frame,
};

use super::components::{
    AuthForm, AuthScreen, ConfirmDialog, EmptyState, HelpBar, InputField, MemberForm,
    MemberFormWidget, MemberRow, MemberTable, MessageType, StatusLine, TableViewState,
};
use super::tabs::{AppTab, TabBar};
use crate::input::InputMode;

pub struct UiState<'a> {
    pub tab: AppTab,
    pub mode: InputMode,
    pub rows: &'a [MemberRow],
    pub table_state: &'a mut TableViewState,
    /// Form backing the active form tab, when one is shown
    pub form: Option<&'a MemberForm>,
    /// Id lookup input on the edit tab before a member is loaded
    pub edit_target: Option<(&'a str, usize)>,
    pub message: Option<(&'a str, MessageType)>,
    pub confirm_message: Option<&'a str>,
    pub username: &'a str,
    pub member_count: usize,
}

pub struct Renderer;

impl Renderer {
    pub fn render(frame: &mut Frame, state: &mut UiState) {
        let size = frame.area();
        let chunks = create_main_layout(size);

        frame.render_widget(TabBar::new(state.tab), chunks[0]);
        render_content(frame, chunks[1], state);
        render_status_line(frame, chunks[2], state);
        render_help_bar(frame, chunks[3], state);
        render_overlays(frame, size, state);
    }

    /// Standalone auth screen, rendered before the main loop unlocks
    pub fn render_auth(frame: &mut Frame, form: &AuthForm) {
        let area = frame.area();
        let banner = Paragraph::new(Line::from(Span::styled(
            "kintree",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )))
        .centered();
        frame.render_widget(banner, Rect::new(area.x, area.y + 1, area.width, 1));
        frame.render_widget(AuthScreen::new(form), area);
    }
}

fn create_main_layout(size: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size)
}

fn render_content(frame: &mut Frame, area: Rect, state: &mut UiState) {
    match state.tab {
        AppTab::AddMember => render_form(frame, area, state.form, state.mode),
        AppTab::EditMember => render_edit_tab(frame, area, state),
        AppTab::ViewAll => render_table(frame, area, state),
        AppTab::Insights => render_insights(frame, area, state.member_count),
    }
}

fn render_form(frame: &mut Frame, area: Rect, form: Option<&MemberForm>, mode: InputMode) {
    if let Some(form) = form {
        let widget = MemberFormWidget::new(form, mode.is_text_input());
        frame.render_widget(widget, area);
    }
}

fn render_edit_tab(frame: &mut Frame, area: Rect, state: &mut UiState) {
    if state.form.is_some() {
        render_form(frame, area, state.form, state.mode);
        return;
    }

    // No member loaded yet: prompt for an id
    let block = Block::default()
        .title(" Edit Family Member ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some((value, cursor)) = state.edit_target {
        let input_area = Rect::new(
            inner.x + 1,
            inner.y + 1,
            inner.width.saturating_sub(2).min(40),
            2,
        );
        frame.render_widget(InputField::new("Member id", value, cursor), input_area);
    }

    let help = Paragraph::new(
        "Type a member id and press Enter to load it, or pick a member \
         with 'e' on the View all tab.",
    )
    .style(Style::default().fg(Color::DarkGray))
    .wrap(Wrap { trim: true });
    frame.render_widget(
        help,
        Rect::new(inner.x + 1, inner.y + 4, inner.width.saturating_sub(2), 3),
    );
}

fn render_table(frame: &mut Frame, area: Rect, state: &mut UiState) {
    if state.rows.is_empty() {
        let empty = EmptyState::new("No family members yet").hint("Press '1' to add one");
        frame.render_widget(empty, area);
        return;
    }

    let block = Block::default()
        .title(" Members ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta));
    let table = MemberTable::new(state.rows).block(block);
    frame.render_stateful_widget(table, area, state.table_state);
}

fn render_insights(frame: &mut Frame, area: Rect, member_count: usize) {
    let block = Block::default()
        .title(" Insights ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from(Span::styled(
            "Family insights",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("{} members on record.", member_count)),
        Line::from(""),
        Line::from(Span::styled(
            "Generated summaries are not available in this build.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: true });
    frame.render_widget(
        paragraph,
        Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), inner.height),
    );
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &UiState) {
    let mut status = StatusLine::new(state.mode)
        .username(state.username)
        .member_count(state.member_count);

    if let Some((msg, msg_type)) = state.message {
        status = status.message(msg, msg_type);
    }

    frame.render_widget(status, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, state: &UiState) {
    let help_bar = HelpBar::for_context(state.mode, state.tab);
    frame.render_widget(help_bar, area);
}

fn render_overlays(frame: &mut Frame, area: Rect, state: &UiState) {
    if state.mode != InputMode::Confirm {
        return;
    }
    if let Some(msg) = state.confirm_message {
        let dialog = ConfirmDialog::new(" Confirm ", msg);
        frame.render_widget(dialog, area);
    }
}
