//! Member Operations
//!
//! Registry calls driven by the UI, with toast feedback.

use crate::registry::RegistryError;
use crate::ui::components::{MemberForm, MemberRow, MessageType};
use crate::ui::tabs::AppTab;

use super::App;

impl App {
    /// Rebuild table rows from the registry cache
    pub fn rebuild_rows(&mut self) {
        self.rows = self
            .registry
            .members()
            .values()
            .map(MemberRow::from_member)
            .collect();
        self.table_state.set_total(self.rows.len());
    }

    /// Re-read the persisted mapping, discarding the in-memory cache
    pub fn refresh_data(&mut self) {
        match self.registry.refresh(&self.store) {
            Ok(_) => {
                self.rebuild_rows();
                self.set_message("Data refreshed", MessageType::Info);
            }
            Err(e) => self.set_message(&format!("Refresh failed: {}", e), MessageType::Error),
        }
    }

    /// Load a member into the edit form by id
    pub fn load_member_for_edit(&mut self, id: &str) {
        let id = id.trim();
        if id.is_empty() {
            self.set_message("Enter a member id to load", MessageType::Warning);
            return;
        }

        match self.registry.get_by_id(id) {
            Some(member) => {
                self.edit_form = Some(MemberForm::for_edit(member));
                self.edit_target.clear();
                self.edit_target_cursor = 0;
                self.set_message(&format!("Loaded member '{}'", id), MessageType::Info);
            }
            None => {
                self.set_message(&format!("No member with id '{}'", id), MessageType::Error)
            }
        }
    }

    /// Load the highlighted table row into the edit form and switch tabs
    pub fn edit_selected(&mut self) {
        let Some(idx) = self.table_state.selected() else {
            return;
        };
        let Some(row) = self.rows.get(idx) else {
            return;
        };

        let id = row.id.clone();
        self.load_member_for_edit(&id);
        if self.edit_form.is_some() {
            self.switch_tab(AppTab::EditMember);
        }
    }

    /// Validate and persist the form on the active tab
    pub fn submit_active_form(&mut self) {
        match self.tab {
            AppTab::AddMember => self.submit_add(),
            AppTab::EditMember => self.submit_edit(),
            _ => {}
        }
    }

    fn submit_add(&mut self) {
        let ids = self.registry.list_ids();
        if let Err(e) = self.add_form.validate(&ids) {
            self.set_message(&e, MessageType::Error);
            return;
        }

        let member = self.add_form.to_member();
        let id = member.id.clone();
        match self.registry.add(&mut self.store, member) {
            Ok(()) => {
                self.add_form = MemberForm::new();
                self.rebuild_rows();
                self.mode_state.to_normal();
                self.set_message(&format!("Member '{}' added", id), MessageType::Success);
            }
            Err(e) => self.report_registry_error(e),
        }
    }

    fn submit_edit(&mut self) {
        let Some(form) = self.edit_form.as_ref() else {
            self.set_message("Load a member first", MessageType::Warning);
            return;
        };

        let mut ids = self.registry.list_ids();
        if let Some(own_id) = &form.editing_id {
            ids.remove(own_id);
        }
        if let Err(e) = form.validate(&ids) {
            self.set_message(&e, MessageType::Error);
            return;
        }

        let member = form.to_member();
        let id = member.id.clone();
        match self.registry.edit(&mut self.store, member) {
            Ok(()) => {
                self.edit_form = None;
                self.rebuild_rows();
                self.mode_state.to_normal();
                self.set_message(&format!("Member '{}' updated", id), MessageType::Success);
            }
            Err(e) => self.report_registry_error(e),
        }
    }

    /// Remove a member after the delete has been confirmed
    pub fn delete_member(&mut self, id: &str) {
        match self.registry.remove(&mut self.store, id) {
            Ok(()) => {
                self.rebuild_rows();
                self.set_message(&format!("Member '{}' removed", id), MessageType::Success);
            }
            Err(e) => self.report_registry_error(e),
        }
    }

    fn report_registry_error(&mut self, e: RegistryError) {
        let msg_type = match e {
            RegistryError::DuplicateId(_) | RegistryError::NotFound(_) => MessageType::Warning,
            RegistryError::Store(_) => MessageType::Error,
        };
        self.set_message(&e.to_string(), msg_type);
    }
}
