use std::path::PathBuf;
use std::time::Duration;

use crate::store::connection::default_store_path;

pub struct AppConfig {
    pub store_path: PathBuf,
    pub message_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            message_timeout: Duration::from_secs(4),
        }
    }
}

#[derive(Debug, Clone)]
pub enum PendingAction {
    DeleteMember(String),
}

impl PendingAction {
    pub fn confirm_message(&self) -> String {
        match self {
            Self::DeleteMember(id) => format!("Delete member '{}'?", id),
        }
    }
}
