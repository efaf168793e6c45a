//! Tab Bar
//!
//! The four application tabs and the bar rendering them.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs, Widget},
};

/// Application tab enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTab {
    AddMember,
    EditMember,
    ViewAll,
    Insights,
}

impl AppTab {
    pub const ALL: [AppTab; 4] = [
        AppTab::AddMember,
        AppTab::EditMember,
        AppTab::ViewAll,
        AppTab::Insights,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::AddMember => "Add member",
            Self::EditMember => "Edit member",
            Self::ViewAll => "View all",
            Self::Insights => "Insights",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Tabs whose content is a member form
    pub fn is_form_tab(&self) -> bool {
        matches!(self, Self::AddMember | Self::EditMember)
    }
}

/// Tab bar widget
pub struct TabBar {
    active: AppTab,
}

impl TabBar {
    pub fn new(active: AppTab) -> Self {
        Self { active }
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = AppTab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.title())))
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM).title(" Family Tree "))
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .select(self.active.index());

        tabs.render(area, buf);
    }
}
