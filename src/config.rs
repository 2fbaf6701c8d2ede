//! Runtime configuration handed to the entry point by the host dispatcher

use serde::{Deserialize, Serialize};

/// Options recognized by the entry point
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Project codes allowed to be processed. Empty means no restriction.
    #[serde(default)]
    pub project_code_filter: Vec<String>,
}

impl Config {
    /// Whether a project with the given code passes the allow-list filter
    pub fn allows(&self, project_code: Option<&str>) -> bool {
        if self.project_code_filter.is_empty() {
            return true;
        }
        project_code.is_some_and(|code| self.project_code_filter.iter().any(|allowed| allowed == code))
    }
}
