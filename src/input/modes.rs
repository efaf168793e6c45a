//! Input Modes
//!
//! Modal editing state for the tabbed interface.

/// Input mode enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal navigation mode
    Normal,
    /// Editing the focused text field
    Insert,
    /// Confirmation dialog
    Confirm,
}

impl InputMode {
    /// Get mode indicator for the status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Confirm => "CONFIRM",
        }
    }

    /// Check if mode routes keys into a text field
    pub fn is_text_input(&self) -> bool {
        matches!(self, Self::Insert)
    }
}

/// Mode state with pending key sequence (for multi-key commands like gg, dd)
#[derive(Debug, Clone)]
pub struct ModeState {
    pub mode: InputMode,
    pub pending: Option<char>,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            pending: None,
        }
    }
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to a new mode, clearing any pending sequence
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.pending = None;
    }

    pub fn to_normal(&mut self) {
        self.set_mode(InputMode::Normal);
    }

    pub fn to_insert(&mut self) {
        self.set_mode(InputMode::Insert);
    }

    pub fn to_confirm(&mut self) {
        self.set_mode(InputMode::Confirm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_transitions() {
        let mut state = ModeState::new();
        assert_eq!(state.mode, InputMode::Normal);

        state.to_insert();
        assert_eq!(state.mode, InputMode::Insert);

        state.to_confirm();
        assert_eq!(state.mode, InputMode::Confirm);

        state.to_normal();
        assert_eq!(state.mode, InputMode::Normal);
    }

    #[test]
    fn test_mode_switch_clears_pending() {
        let mut state = ModeState::new();
        state.pending = Some('d');
        state.to_insert();
        assert_eq!(state.pending, None);
    }

    #[test]
    fn test_is_text_input() {
        assert!(!InputMode::Normal.is_text_input());
        assert!(InputMode::Insert.is_text_input());
        assert!(!InputMode::Confirm.is_text_input());
    }
}
