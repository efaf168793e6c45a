//! UI Components
//!
//! Reusable TUI widgets for the family record keeper.

pub mod auth;
pub mod form;
pub mod popup;
pub mod statusline;
pub mod table;

// Re-exports
pub use auth::{AuthForm, AuthMode, AuthScreen};
pub use form::{MemberForm, MemberFormWidget};
pub use popup::{ConfirmDialog, InputField};
pub use statusline::{HelpBar, MessageType, StatusLine};
pub use table::{EmptyState, MemberRow, MemberTable, TableViewState};
