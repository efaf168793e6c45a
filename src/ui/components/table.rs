//! Member Table Component
//!
//! Displays family members in a scrollable table on the overview tab.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::store::FamilyMember;

/// Row data derived from a member record
#[derive(Debug, Clone)]
pub struct MemberRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub gender: String,
    pub parent1_id: String,
    pub parent2_id: String,
    pub partner_id: String,
}

impl MemberRow {
    pub fn from_member(member: &FamilyMember) -> Self {
        Self {
            id: member.id.clone(),
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
            birth_date: member.birth_date.clone(),
            gender: member.gender.display_name().to_string(),
            parent1_id: member.parent1_id.clone().unwrap_or_else(|| "-".to_string()),
            parent2_id: member.parent2_id.clone().unwrap_or_else(|| "-".to_string()),
            partner_id: member.partner_id.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Selection state for the member table
#[derive(Debug, Clone)]
pub struct TableViewState {
    pub selected: Option<usize>,
    pub total: usize,
    table_state: TableState,
}

impl Default for TableViewState {
    fn default() -> Self {
        Self {
            selected: None,
            total: 0,
            table_state: TableState::default(),
        }
    }
}

impl TableViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
        self.table_state.select(index);
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.select(clamp_selection(self.selected, total));
    }

    pub fn move_up(&mut self) {
        if self.total == 0 {
            return;
        }
        let new_index = self.selected.unwrap_or(0).saturating_sub(1);
        self.select(Some(new_index));
    }

    pub fn move_down(&mut self) {
        if self.total == 0 {
            return;
        }
        let new_index = self.selected.map_or(0, |i| (i + 1).min(self.total - 1));
        self.select(Some(new_index));
    }

    pub fn move_to_top(&mut self) {
        if self.total > 0 {
            self.select(Some(0));
        }
    }

    pub fn move_to_bottom(&mut self) {
        if self.total > 0 {
            self.select(Some(self.total - 1));
        }
    }

    pub fn table_state_mut(&mut self) -> &mut TableState {
        &mut self.table_state
    }
}

fn clamp_selection(selected: Option<usize>, total: usize) -> Option<usize> {
    if total == 0 {
        return None;
    }
    match selected {
        Some(sel) if sel >= total => Some(total - 1),
        Some(sel) => Some(sel),
        None => Some(0),
    }
}

/// Member table widget
pub struct MemberTable<'a> {
    rows: &'a [MemberRow],
    block: Option<Block<'a>>,
    highlight_style: Style,
}

impl<'a> MemberTable<'a> {
    pub fn new(rows: &'a [MemberRow]) -> Self {
        Self {
            rows,
            block: None,
            highlight_style: Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

const HEADERS: [&str; 8] = [
    "Id", "First name", "Last name", "Born", "Gender", "Parent 1", "Parent 2", "Partner",
];

fn column_constraints() -> [Constraint; 8] {
    [
        Constraint::Length(10),
        Constraint::Min(12),
        Constraint::Min(12),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
    ]
}

impl<'a> StatefulWidget for MemberTable<'a> {
    type State = TableViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let header = Row::new(
            HEADERS
                .iter()
                .map(|h| Cell::from(*h))
                .collect::<Vec<Cell>>(),
        )
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.id.as_str()).style(Style::default().fg(Color::Cyan)),
                    Cell::from(row.first_name.as_str()),
                    Cell::from(row.last_name.as_str()),
                    Cell::from(row.birth_date.as_str()).style(Style::default().fg(Color::Gray)),
                    Cell::from(row.gender.as_str()).style(Style::default().fg(Color::Gray)),
                    Cell::from(row.parent1_id.as_str()).style(Style::default().fg(Color::DarkGray)),
                    Cell::from(row.parent2_id.as_str()).style(Style::default().fg(Color::DarkGray)),
                    Cell::from(row.partner_id.as_str()).style(Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect();

        let table = Table::new(rows, column_constraints())
            .header(header)
            .row_highlight_style(self.highlight_style)
            .highlight_symbol("▸ ");

        let table = match self.block {
            Some(block) => table.block(block),
            None => table,
        };

        StatefulWidget::render(table, area, buf, state.table_state_mut());
    }
}

/// Placeholder shown when the registry has no members
pub struct EmptyState<'a> {
    message: &'a str,
    hint: Option<&'a str>,
}

impl<'a> EmptyState<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            hint: None,
        }
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }
}

fn center_x(area: &Rect, text_len: usize) -> u16 {
    area.x + (area.width.saturating_sub(text_len as u16)) / 2
}

impl<'a> Widget for EmptyState<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Members ");
        let inner = block.inner(area);
        block.render(area, buf);

        let center_y = inner.y + inner.height / 2;
        let msg_x = center_x(&inner, self.message.len());
        buf.set_string(msg_x, center_y, self.message, Style::default().fg(Color::DarkGray));

        if let Some(hint) = self.hint {
            let hint_x = center_x(&inner, hint.len());
            buf.set_string(
                hint_x,
                center_y + 1,
                hint,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Gender;

    #[test]
    fn test_table_state_navigation() {
        let mut state = TableViewState::new();
        state.set_total(5);

        assert_eq!(state.selected(), Some(0));

        state.move_down();
        assert_eq!(state.selected(), Some(1));

        state.move_up();
        assert_eq!(state.selected(), Some(0));

        state.move_to_bottom();
        assert_eq!(state.selected(), Some(4));

        state.move_to_top();
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_table_state_empty() {
        let mut state = TableViewState::new();
        state.set_total(0);

        state.move_down();
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_selection_clamped_after_shrink() {
        let mut state = TableViewState::new();
        state.set_total(5);
        state.move_to_bottom();

        state.set_total(2);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_row_from_member_fills_missing_references() {
        let mut member = FamilyMember::new("p1", "Anna", "Jansen", "01-02-1983", Gender::Female);
        member.partner_id = Some("p2".to_string());

        let row = MemberRow::from_member(&member);
        assert_eq!(row.parent1_id, "-");
        assert_eq!(row.partner_id, "p2");
        assert_eq!(row.gender, "Female");
    }
}
