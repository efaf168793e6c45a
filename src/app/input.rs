use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::keymap::{confirm_action, normal_mode_action};
use crate::input::modes::InputMode;
use crate::input::text;
use crate::ui::components::MemberForm;
use crate::ui::tabs::AppTab;

use super::App;

impl App {
    /// Route a key event. Returns true when the main loop should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match self.mode_state.mode {
            InputMode::Normal => {
                let (action, pending) = normal_mode_action(key, self.mode_state.pending);
                self.mode_state.pending = pending;
                self.execute_action(action)
            }
            InputMode::Insert => {
                self.handle_insert_key(key);
                false
            }
            InputMode::Confirm => self.execute_action(confirm_action(key)),
        }
    }

    fn handle_insert_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.mode_state.to_normal();
            return;
        }

        if self.tab == AppTab::EditMember && self.edit_form.is_none() {
            self.handle_edit_target_key(key);
            return;
        }

        let Some(form) = self.active_form_mut() else {
            self.mode_state.to_normal();
            return;
        };
        dispatch_form_key(form, key.code, key.modifiers);
    }

    /// Text input for the id lookup on the edit tab
    fn handle_edit_target_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => {
                let id = self.edit_target.clone();
                self.mode_state.to_normal();
                self.load_member_for_edit(&id);
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.edit_target.insert(self.edit_target_cursor, c);
                self.edit_target_cursor += c.len_utf8();
            }
            (KeyCode::Backspace, _) => {
                if self.edit_target_cursor > 0 {
                    self.edit_target_cursor =
                        text::prev_boundary(&self.edit_target, self.edit_target_cursor);
                    self.edit_target.remove(self.edit_target_cursor);
                }
            }
            (KeyCode::Left, _) => {
                self.edit_target_cursor =
                    text::prev_boundary(&self.edit_target, self.edit_target_cursor);
            }
            (KeyCode::Right, _) => {
                self.edit_target_cursor =
                    text::next_boundary(&self.edit_target, self.edit_target_cursor);
            }
            _ => {}
        }
    }
}

fn dispatch_form_key(form: &mut MemberForm, code: KeyCode, mods: KeyModifiers) {
    match (code, mods) {
        (KeyCode::Enter, _) | (KeyCode::Tab, KeyModifiers::NONE) | (KeyCode::Down, _) => {
            form.next_field()
        }
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => form.prev_field(),
        (KeyCode::Char(' '), m) if form.is_select_field() => {
            form.cycle_gender(m != KeyModifiers::CONTROL)
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => form.insert_char(c),
        (KeyCode::Backspace, _) => form.delete_char(),
        (KeyCode::Left, _) => form.cursor_left(),
        (KeyCode::Right, _) => form.cursor_right(),
        _ => {}
    }
}
