//! Member Form Component
//!
//! Multi-field form for adding and editing family members.

use std::collections::BTreeSet;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Widget},
};

use crate::input::text;
use crate::store::{FamilyMember, Gender};

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    pub required: bool,
    pub field_type: FieldType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Select,
}

impl FormField {
    pub fn text(label: &'static str, required: bool) -> Self {
        Self {
            label,
            value: String::new(),
            required,
            field_type: FieldType::Text,
        }
    }

    pub fn select(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            required: true,
            field_type: FieldType::Select,
        }
    }
}

// Field indexes
const FIELD_ID: usize = 0;
const FIELD_FIRST_NAME: usize = 1;
const FIELD_LAST_NAME: usize = 2;
const FIELD_BIRTH_DATE: usize = 3;
const FIELD_GENDER: usize = 4;
const FIELD_PARENT1: usize = 5;
const FIELD_PARENT2: usize = 6;
const FIELD_PARTNER: usize = 7;

/// Member form state
#[derive(Debug, Clone)]
pub struct MemberForm {
    pub fields: Vec<FormField>,
    pub active_field: usize,
    pub cursor: usize,
    pub gender: Gender,
    /// When set, the form edits this member and the id field is locked
    pub editing_id: Option<String>,
}

impl Default for MemberForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberForm {
    pub fn new() -> Self {
        let mut gender_field = FormField::select("Gender");
        gender_field.value = Gender::Unknown.display_name().to_string();

        Self {
            fields: vec![
                FormField::text("Member id", true),
                FormField::text("First name", true),
                FormField::text("Last name", true),
                FormField::text("Birth date (DD-MM-YYYY)", false),
                gender_field,
                FormField::text("Parent 1 id", false),
                FormField::text("Parent 2 id", false),
                FormField::text("Partner id", false),
            ],
            active_field: 0,
            cursor: 0,
            gender: Gender::Unknown,
            editing_id: None,
        }
    }

    /// Build a form pre-filled from an existing member; its id is locked
    pub fn for_edit(member: &FamilyMember) -> Self {
        let mut form = Self::new();
        form.editing_id = Some(member.id.clone());
        form.gender = member.gender;

        form.fields[FIELD_ID].value = member.id.clone();
        form.fields[FIELD_FIRST_NAME].value = member.first_name.clone();
        form.fields[FIELD_LAST_NAME].value = member.last_name.clone();
        form.fields[FIELD_BIRTH_DATE].value = member.birth_date.clone();
        form.fields[FIELD_GENDER].value = member.gender.display_name().to_string();
        form.fields[FIELD_PARENT1].value = member.parent1_id.clone().unwrap_or_default();
        form.fields[FIELD_PARENT2].value = member.parent2_id.clone().unwrap_or_default();
        form.fields[FIELD_PARTNER].value = member.partner_id.clone().unwrap_or_default();

        // Start on the first editable field
        form.active_field = FIELD_FIRST_NAME;
        form.cursor = form.fields[FIELD_FIRST_NAME].value.len();
        form
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Whether the active field accepts typed text
    pub fn active_field_editable(&self) -> bool {
        if self.fields[self.active_field].field_type == FieldType::Select {
            return false;
        }
        !(self.active_field == FIELD_ID && self.is_editing())
    }

    pub fn is_select_field(&self) -> bool {
        self.fields[self.active_field].field_type == FieldType::Select
    }

    pub fn next_field(&mut self) {
        self.active_field = (self.active_field + 1) % self.fields.len();
        if self.is_editing() && self.active_field == FIELD_ID {
            self.active_field += 1;
        }
        self.cursor = self.fields[self.active_field].value.len();
    }

    pub fn prev_field(&mut self) {
        self.active_field = if self.active_field == 0 {
            self.fields.len() - 1
        } else {
            self.active_field - 1
        };
        if self.is_editing() && self.active_field == FIELD_ID {
            self.active_field = self.fields.len() - 1;
        }
        self.cursor = self.fields[self.active_field].value.len();
    }

    pub fn insert_char(&mut self, c: char) {
        if !self.active_field_editable() {
            return;
        }
        let field = &mut self.fields[self.active_field];
        field.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if !self.active_field_editable() {
            return;
        }
        if self.cursor > 0 {
            let field = &mut self.fields[self.active_field];
            self.cursor = text::prev_boundary(&field.value, self.cursor);
            field.value.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        let value = &self.fields[self.active_field].value;
        self.cursor = text::prev_boundary(value, self.cursor);
    }

    pub fn cursor_right(&mut self) {
        let value = &self.fields[self.active_field].value;
        self.cursor = text::next_boundary(value, self.cursor);
    }

    pub fn cycle_gender(&mut self, forward: bool) {
        if self.is_select_field() {
            self.gender = self.gender.cycle(forward);
            self.fields[FIELD_GENDER].value = self.gender.display_name().to_string();
        }
    }

    /// Presence and duplicate-id pre-check. `existing_ids` must already
    /// exclude the edited member's own id.
    pub fn validate(&self, existing_ids: &BTreeSet<String>) -> Result<(), String> {
        for field in &self.fields {
            if field.required
                && field.field_type == FieldType::Text
                && field.value.trim().is_empty()
            {
                return Err(format!("{} is required", field.label));
            }
        }

        let id = self.fields[FIELD_ID].value.trim();
        if !self.is_editing() && existing_ids.contains(id) {
            return Err(format!("Member id '{}' already exists", id));
        }

        Ok(())
    }

    /// Build a member record from the form contents
    pub fn to_member(&self) -> FamilyMember {
        let mut member = FamilyMember::new(
            self.fields[FIELD_ID].value.trim(),
            self.fields[FIELD_FIRST_NAME].value.trim(),
            self.fields[FIELD_LAST_NAME].value.trim(),
            self.fields[FIELD_BIRTH_DATE].value.trim(),
            self.gender,
        );
        member.parent1_id = optional(&self.fields[FIELD_PARENT1].value);
        member.parent2_id = optional(&self.fields[FIELD_PARENT2].value);
        member.partner_id = optional(&self.fields[FIELD_PARTNER].value);
        member
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Member form widget
pub struct MemberFormWidget<'a> {
    form: &'a MemberForm,
    title: &'a str,
    editing_field: bool,
}

impl<'a> MemberFormWidget<'a> {
    pub fn new(form: &'a MemberForm, editing_field: bool) -> Self {
        let title = if form.is_editing() {
            " Edit Family Member "
        } else {
            " New Family Member "
        };
        Self {
            form,
            title,
            editing_field,
        }
    }
}

impl<'a> Widget for MemberFormWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        block.render(area, buf);

        let label_width = 26u16;
        let mut y = inner.y + 1;

        for (i, field) in self.form.fields.iter().enumerate() {
            if y >= inner.y + inner.height.saturating_sub(1) {
                break;
            }

            let is_active = i == self.form.active_field;
            let locked = field.field_type == FieldType::Text
                && i == 0
                && self.form.is_editing();

            let label = if field.required {
                format!("{}*:", field.label)
            } else {
                format!("{}:", field.label)
            };

            let label_style = if is_active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            buf.set_string(inner.x + 1, y, &label, label_style);

            let value_x = inner.x + 1 + label_width;
            let value_width = inner.width.saturating_sub(label_width + 2);

            let display_value = if field.field_type == FieldType::Select {
                format!("{} [Space to change]", field.value)
            } else {
                field.value.clone()
            };

            let value_style = if locked {
                Style::default().fg(Color::DarkGray)
            } else if field.field_type == FieldType::Select {
                Style::default().fg(Color::Yellow)
            } else if is_active && self.editing_field {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };

            buf.set_string(value_x, y, &display_value, value_style);

            // Cursor when the field is being edited
            if is_active && self.editing_field && field.field_type == FieldType::Text {
                let cursor_x = value_x + text::column(&field.value, self.form.cursor) as u16;
                if cursor_x < value_x + value_width {
                    if let Some(cell) = buf.cell_mut((cursor_x, y)) {
                        cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
                    }
                }
            }

            y += 2;
        }

        let help_y = inner.y + inner.height.saturating_sub(1);
        let help = Line::from(vec![
            Span::styled("j/k", Style::default().fg(Color::Cyan)),
            Span::raw(" field  "),
            Span::styled("i/Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" edit  "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" gender  "),
            Span::styled("s", Style::default().fg(Color::Cyan)),
            Span::raw(" save  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" back"),
        ]);
        buf.set_line(inner.x + 1, help_y, &help, inner.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> MemberForm {
        let mut form = MemberForm::new();
        form.fields[FIELD_ID].value = "p1".to_string();
        form.fields[FIELD_FIRST_NAME].value = "Anna".to_string();
        form.fields[FIELD_LAST_NAME].value = "Jansen".to_string();
        form.fields[FIELD_BIRTH_DATE].value = "01-02-1983".to_string();
        form
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = MemberForm::new();
        assert_eq!(form.active_field, 0);

        form.prev_field();
        assert_eq!(form.active_field, form.fields.len() - 1);

        form.next_field();
        assert_eq!(form.active_field, 0);
    }

    #[test]
    fn test_edit_form_skips_locked_id_field() {
        let member = FamilyMember::new("p1", "Anna", "Jansen", "01-02-1983", Gender::Female);
        let mut form = MemberForm::for_edit(&member);
        assert_eq!(form.active_field, FIELD_FIRST_NAME);

        form.prev_field();
        form.next_field();
        assert_ne!(form.active_field, FIELD_ID);

        // Typing into the id field is a no-op
        form.active_field = FIELD_ID;
        form.insert_char('x');
        assert_eq!(form.fields[FIELD_ID].value, "p1");
    }

    #[test]
    fn test_validate_requires_presence() {
        let form = MemberForm::new();
        let err = form.validate(&BTreeSet::new()).unwrap_err();
        assert!(err.contains("required"));

        assert!(filled_form().validate(&BTreeSet::new()).is_ok());
    }

    #[test]
    fn test_validate_blocks_duplicate_id() {
        let form = filled_form();
        let mut ids = BTreeSet::new();
        ids.insert("p1".to_string());

        let err = form.validate(&ids).unwrap_err();
        assert!(err.contains("already exists"));
    }

    #[test]
    fn test_validate_allows_own_id_when_editing() {
        let member = FamilyMember::new("p1", "Anna", "Jansen", "01-02-1983", Gender::Female);
        let form = MemberForm::for_edit(&member);

        // Caller excludes the edited member's own id from the set
        assert!(form.validate(&BTreeSet::new()).is_ok());
    }

    #[test]
    fn test_to_member_treats_blank_references_as_none() {
        let mut form = filled_form();
        form.fields[FIELD_PARENT1].value = "  ".to_string();
        form.fields[FIELD_PARTNER].value = "p2".to_string();

        let member = form.to_member();
        assert_eq!(member.id, "p1");
        assert!(member.parent1_id.is_none());
        assert_eq!(member.partner_id.as_deref(), Some("p2"));
    }

    #[test]
    fn test_multibyte_input_keeps_cursor_on_char_boundary() {
        let mut form = MemberForm::new();
        form.active_field = FIELD_FIRST_NAME;

        form.insert_char('é');
        form.insert_char('e');
        assert_eq!(form.fields[FIELD_FIRST_NAME].value, "ée");
        assert_eq!(form.cursor, "ée".len());

        form.cursor_left();
        form.cursor_left();
        assert_eq!(form.cursor, 0);
        form.cursor_right();
        assert_eq!(form.cursor, 'é'.len_utf8());

        form.delete_char();
        assert_eq!(form.fields[FIELD_FIRST_NAME].value, "e");
        assert_eq!(form.cursor, 0);
    }

    #[test]
    fn test_cycle_gender_only_on_select_field() {
        let mut form = MemberForm::new();
        form.cycle_gender(true);
        assert_eq!(form.gender, Gender::Unknown);

        form.active_field = FIELD_GENDER;
        form.cycle_gender(true);
        assert_eq!(form.gender, Gender::Male);
        assert_eq!(form.fields[FIELD_GENDER].value, "Male");
    }
}
