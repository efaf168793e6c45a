//! UI Module
//!
//! Terminal user interface using ratatui.

pub mod components;
pub mod renderer;
pub mod tabs;

// Re-exports
pub use components::{
    AuthForm, AuthMode, AuthScreen, ConfirmDialog, EmptyState, HelpBar, MemberForm,
    MemberFormWidget, MemberRow, MemberTable, MessageType, StatusLine, TableViewState,
};
pub use renderer::{Renderer, UiState};
pub use tabs::{AppTab, TabBar};
