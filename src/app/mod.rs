//! Application State
//!
//! Core application logic tying together store, registry, UI, and input.

mod actions;
mod config;
mod input;
mod members;

use std::time::Instant;

use ratatui::Frame;

use crate::input::modes::ModeState;
use crate::registry::Registry;
use crate::store::Store;
use crate::ui::components::{MemberForm, MemberRow, MessageType, TableViewState};
use crate::ui::renderer::{Renderer, UiState};
use crate::ui::tabs::AppTab;

pub use config::{AppConfig, PendingAction};

pub struct App {
    pub config: AppConfig,
    pub store: Store,
    pub registry: Registry,
    pub username: String,
    pub mode_state: ModeState,
    pub tab: AppTab,
    pub table_state: TableViewState,
    pub rows: Vec<MemberRow>,
    pub add_form: MemberForm,
    pub edit_form: Option<MemberForm>,
    pub edit_target: String,
    pub edit_target_cursor: usize,
    pub message: Option<(String, MessageType, Instant)>,
    pub pending_action: Option<PendingAction>,
    pub should_quit: bool,
    pub wants_logout: bool,
}

impl App {
    pub fn new(config: AppConfig, store: Store, registry: Registry, username: String) -> Self {
        let mut app = Self {
            config,
            store,
            registry,
            username,
            mode_state: ModeState::new(),
            tab: AppTab::ViewAll,
            table_state: TableViewState::new(),
            rows: Vec::new(),
            add_form: MemberForm::new(),
            edit_form: None,
            edit_target: String::new(),
            edit_target_cursor: 0,
            message: None,
            pending_action: None,
            should_quit: false,
            wants_logout: false,
        };
        app.rebuild_rows();
        app
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.check_message_expiry();

        let message = self.message.as_ref().map(|(m, t, _)| (m.as_str(), *t));
        let confirm_message = self.pending_action.as_ref().map(|a| a.confirm_message());

        let form = match self.tab {
            AppTab::AddMember => Some(&self.add_form),
            AppTab::EditMember => self.edit_form.as_ref(),
            _ => None,
        };

        let edit_target = (self.tab == AppTab::EditMember && self.edit_form.is_none())
            .then_some((self.edit_target.as_str(), self.edit_target_cursor));

        let mut state = UiState {
            tab: self.tab,
            mode: self.mode_state.mode,
            rows: &self.rows,
            table_state: &mut self.table_state,
            form,
            edit_target,
            message,
            confirm_message: confirm_message.as_deref(),
            username: &self.username,
            member_count: self.registry.len(),
        };

        Renderer::render(frame, &mut state);
    }

    fn check_message_expiry(&mut self) {
        let timeout = self.config.message_timeout;
        let expired = self
            .message
            .as_ref()
            .is_some_and(|(_, _, time)| time.elapsed() > timeout);

        if expired {
            self.message = None;
        }
    }

    pub fn set_message(&mut self, msg: &str, msg_type: MessageType) {
        self.message = Some((msg.to_string(), msg_type, Instant::now()));
    }

    /// Form backing the active tab, if any
    pub fn active_form_mut(&mut self) -> Option<&mut MemberForm> {
        match self.tab {
            AppTab::AddMember => Some(&mut self.add_form),
            AppTab::EditMember => self.edit_form.as_mut(),
            _ => None,
        }
    }

    pub fn switch_tab(&mut self, tab: AppTab) {
        self.tab = tab;
        self.mode_state.to_normal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreConfig;

    fn test_app() -> App {
        let mut store = Store::open(StoreConfig::in_memory()).unwrap();
        crate::auth::ensure_default_account(&mut store).unwrap();
        let registry = Registry::load(&store).unwrap();
        App::new(AppConfig::default(), store, registry, "admin".to_string())
    }

    #[test]
    fn test_message_expires_after_timeout() {
        let mut app = test_app();
        app.config.message_timeout = std::time::Duration::from_secs(0);
        app.set_message("saved", MessageType::Success);

        std::thread::sleep(std::time::Duration::from_millis(5));
        app.check_message_expiry();
        assert!(app.message.is_none());
    }

    #[test]
    fn test_message_survives_within_timeout() {
        let mut app = test_app();
        app.set_message("saved", MessageType::Success);
        app.check_message_expiry();
        assert!(app.message.is_some());
    }

    #[test]
    fn test_starts_on_view_all_tab() {
        // Each session builds a fresh App, so logout lands back here too
        let app = test_app();
        assert_eq!(app.tab, AppTab::ViewAll);
    }

    #[test]
    fn test_active_form_follows_tab() {
        let mut app = test_app();
        assert!(app.active_form_mut().is_none());

        app.switch_tab(AppTab::AddMember);
        assert!(app.active_form_mut().is_some());

        app.switch_tab(AppTab::EditMember);
        assert!(app.active_form_mut().is_none());
    }
}
