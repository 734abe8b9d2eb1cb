//! Build metadata stamped into artifact headers.

use chrono::Local;

/// Who generated the artifacts, and when.
pub trait BuildMetadata {
    fn author(&self) -> String;
    fn timestamp(&self) -> String;
}

/// Reads the account name from the environment and the local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMetadata;

impl BuildMetadata for SystemMetadata {
    fn author(&self) -> String {
        ["USER", "USERNAME", "LOGNAME"]
            .iter()
            .find_map(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| "unknown".to_string())
    }

    fn timestamp(&self) -> String {
        Local::now().format("%m/%d/%Y %H:%M:%S").to_string()
    }
}

/// Fixed values, for reproducible output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedMetadata {
    pub author: String,
    pub timestamp: String,
}

impl FixedMetadata {
    pub fn new(author: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            timestamp: timestamp.into(),
        }
    }
}

impl BuildMetadata for FixedMetadata {
    fn author(&self) -> String {
        self.author.clone()
    }

    fn timestamp(&self) -> String {
        self.timestamp.clone()
    }
}
