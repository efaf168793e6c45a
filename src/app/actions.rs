use crate::input::keymap::Action;
use crate::ui::components::MessageType;
use crate::ui::tabs::AppTab;

use super::config::PendingAction;
use super::App;

impl App {
    /// Dispatch a resolved action. Returns true when the main loop should exit.
    pub fn execute_action(&mut self, action: Action) -> bool {
        match action {
            Action::GotoTab(tab) => self.switch_tab(tab),
            Action::NextTab => self.switch_tab(self.tab.next()),
            Action::PrevTab => self.switch_tab(self.tab.prev()),

            Action::MoveUp => self.move_focus(true),
            Action::MoveDown => self.move_focus(false),
            Action::MoveToTop => self.table_state.move_to_top(),
            Action::MoveToBottom => self.table_state.move_to_bottom(),

            Action::Select => self.select(),
            Action::BeginInsert => self.begin_insert(),
            Action::Back => self.go_back(),

            Action::SubmitForm => self.submit_active_form(),
            Action::CycleOption(forward) => self.cycle_option(forward),
            Action::EditSelected => {
                if self.tab == AppTab::ViewAll {
                    self.edit_selected();
                }
            }
            Action::Delete => self.initiate_delete(),
            Action::Refresh => self.refresh_data(),

            Action::Confirm => self.handle_confirm(),
            Action::Cancel => self.cancel_pending(),

            Action::Logout => {
                self.wants_logout = true;
                return true;
            }
            Action::Quit | Action::ForceQuit => {
                self.should_quit = true;
                return true;
            }

            Action::None => {}
        }

        false
    }

    fn move_focus(&mut self, up: bool) {
        if self.tab == AppTab::ViewAll {
            if up {
                self.table_state.move_up();
            } else {
                self.table_state.move_down();
            }
            return;
        }
        if let Some(form) = self.active_form_mut() {
            if up {
                form.prev_field();
            } else {
                form.next_field();
            }
        }
    }

    fn select(&mut self) {
        match self.tab {
            AppTab::ViewAll => self.edit_selected(),
            AppTab::EditMember if self.edit_form.is_none() => {
                let id = self.edit_target.clone();
                self.load_member_for_edit(&id);
            }
            _ => self.begin_insert(),
        }
    }

    fn begin_insert(&mut self) {
        if !self.tab.is_form_tab() {
            return;
        }

        let editable = match self.tab {
            AppTab::EditMember if self.edit_form.is_none() => true,
            _ => self
                .active_form_mut()
                .is_some_and(|f| f.active_field_editable()),
        };
        if editable {
            self.mode_state.to_insert();
        }
    }

    fn go_back(&mut self) {
        if self.tab == AppTab::EditMember && self.edit_form.is_some() {
            self.edit_form = None;
            self.set_message("Edit cancelled", MessageType::Info);
            return;
        }
        self.message = None;
    }

    fn cycle_option(&mut self, forward: bool) {
        if let Some(form) = self.active_form_mut() {
            form.cycle_gender(forward);
        }
    }

    fn initiate_delete(&mut self) {
        if self.tab != AppTab::ViewAll {
            return;
        }
        let Some(idx) = self.table_state.selected() else {
            return;
        };
        let Some(row) = self.rows.get(idx) else {
            return;
        };

        self.pending_action = Some(PendingAction::DeleteMember(row.id.clone()));
        self.mode_state.to_confirm();
    }

    fn cancel_pending(&mut self) {
        self.pending_action = None;
        self.mode_state.to_normal();
    }

    fn handle_confirm(&mut self) {
        let Some(action) = self.pending_action.take() else {
            self.mode_state.to_normal();
            return;
        };

        match action {
            PendingAction::DeleteMember(id) => self.delete_member(&id),
        }

        self.mode_state.to_normal();
    }
}
