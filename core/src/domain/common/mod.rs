use std::{fmt, path::PathBuf, str::FromStr, time::Duration};

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct EcoRevealConfig {
    pub classifier: ClassifierConfig,
    pub history: HistoryConfig,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClassifierKind {
    #[default]
    Local,
    Remote,
}

impl ClassifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierKind::Local => "local",
            ClassifierKind::Remote => "remote",
        }
    }
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassifierKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "heuristic" => Ok(ClassifierKind::Local),
            "remote" | "gemini" => Ok(ClassifierKind::Remote),
            other => Err(CoreError::ConfigurationError(format!(
                "unknown classifier backend: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    pub kind: ClassifierKind,
    pub llm: LLMConfig,
    /// Upper bound on a single remote inference call.
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

#[derive(Clone, Debug)]
pub struct HistoryConfig {
    pub path: PathBuf,
    pub capacity: usize,
}

pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_kind_parse() {
        assert_eq!("local".parse::<ClassifierKind>(), Ok(ClassifierKind::Local));
        assert_eq!(" Remote ".parse::<ClassifierKind>(), Ok(ClassifierKind::Remote));
        assert!("onnx".parse::<ClassifierKind>().is_err());
    }

    #[test]
    fn test_uuid_v7_is_time_ordered() {
        let first = generate_uuid_v7();
        std::thread::sleep(Duration::from_millis(2));
        let second = generate_uuid_v7();
        assert!(first < second);
    }
}
