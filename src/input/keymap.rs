//! Keymap
//!
//! Key bindings mapped to actions. Text entry inside forms is dispatched
//! directly to the focused field and does not go through this table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::tabs::AppTab;

/// Actions that can be triggered by key presses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Tabs
    GotoTab(AppTab),
    NextTab,
    PrevTab,

    // Navigation
    MoveUp,
    MoveDown,
    MoveToTop,
    MoveToBottom,

    // Context-dependent select: edit the highlighted member on the overview
    // tab, load the edit target on the edit tab, start editing the focused
    // field on form tabs
    Select,
    BeginInsert,
    Back,

    // CRUD
    SubmitForm,
    CycleOption(bool),
    EditSelected,
    Delete,
    Refresh,

    // Confirmation
    Confirm,
    Cancel,

    // Application
    Logout,
    Quit,
    ForceQuit,

    // No action
    None,
}

/// Map key event to action in normal mode
pub fn normal_mode_action(key: KeyEvent, pending: Option<char>) -> (Action, Option<char>) {
    match (key.code, key.modifiers, pending) {
        // Tabs
        (KeyCode::Char('1'), _, _) => (Action::GotoTab(AppTab::AddMember), None),
        (KeyCode::Char('2'), _, _) => (Action::GotoTab(AppTab::EditMember), None),
        (KeyCode::Char('3'), _, _) => (Action::GotoTab(AppTab::ViewAll), None),
        (KeyCode::Char('4'), _, _) => (Action::GotoTab(AppTab::Insights), None),
        (KeyCode::Tab, _, _) => (Action::NextTab, None),
        (KeyCode::BackTab, _, _) => (Action::PrevTab, None),

        // Navigation
        (KeyCode::Char('j') | KeyCode::Down, _, _) => (Action::MoveDown, None),
        (KeyCode::Char('k') | KeyCode::Up, _, _) => (Action::MoveUp, None),
        (KeyCode::Char('g'), _, None) => (Action::None, Some('g')),
        (KeyCode::Char('g'), _, Some('g')) => (Action::MoveToTop, None),
        (KeyCode::Char('G'), _, _) => (Action::MoveToBottom, None),

        // Selection
        (KeyCode::Enter, _, _) => (Action::Select, None),
        (KeyCode::Char('i'), _, _) => (Action::BeginInsert, None),
        (KeyCode::Esc, _, _) => (Action::Back, None),

        // CRUD
        (KeyCode::Char('s'), _, _) => (Action::SubmitForm, None),
        (KeyCode::Char(' '), m, _) => (Action::CycleOption(m != KeyModifiers::CONTROL), None),
        (KeyCode::Char('e'), _, _) => (Action::EditSelected, None),
        (KeyCode::Char('d'), _, None) => (Action::None, Some('d')),
        (KeyCode::Char('d'), _, Some('d')) => (Action::Delete, None),
        (KeyCode::Char('x'), _, _) => (Action::Delete, None),
        (KeyCode::Char('r'), _, _) => (Action::Refresh, None),

        // Application
        (KeyCode::Char('L'), _, _) => (Action::Logout, None),
        (KeyCode::Char('q'), _, _) => (Action::Quit, None),
        (KeyCode::Char('Q'), _, _) => (Action::ForceQuit, None),

        _ => (Action::None, None),
    }
}

/// Map key event to action in confirm mode
pub fn confirm_action(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::Confirm,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::Cancel,
        _ => Action::None,
    }
}
