use serde::{Deserialize, Serialize};

use super::list_query::Searchable;

/// System log record served by `/logs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemLogEntry {
    pub id: i64,
    pub timestamp: String,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub source: String, // "client" or "server"
    pub message: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl SystemLogEntry {
    pub fn is_error(&self) -> bool {
        self.level.eq_ignore_ascii_case("error")
    }
}

impl Searchable for SystemLogEntry {
    fn search_haystack(&self) -> Vec<String> {
        vec![self.level.clone(), self.source.clone(), self.message.clone()]
    }
}
