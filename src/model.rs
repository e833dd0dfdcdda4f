// Core structs: RawRecord, NormalizedRecord, Snapshot, and the error enums
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

/// One record exactly as the upstream API returned it.
pub type RawRecord = Map<String, Value>;

/// A record with snake_case keys and string values only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedRecord(pub IndexMap<String, String>);

impl NormalizedRecord {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The document written to `aqi.json`.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub source: String,
    pub generated_utc: String,
    pub count: usize,
    pub records: Vec<NormalizedRecord>,
}

impl Snapshot {
    pub fn new(source: String, generated_utc: String, records: Vec<NormalizedRecord>) -> Self {
        Self {
            source,
            generated_utc,
            count: records.len(),
            records,
        }
    }

    /// Line printed to stdout after a successful write.
    pub fn summary_line(&self, path: &Path) -> String {
        format!("✅ Generated {} ({} records)", path.display(), self.count)
    }
}

#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub url: String,
    pub api_key: String,
    pub offset: u32,
    pub limit: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for url: {url} - {body}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },
    #[error("request to {url} timed out")]
    Timeout { url: String },
    #[error("request failed: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("response body is not a JSON object")]
    NotAnObject,
    #[error("`records` is not an array")]
    RecordsNotArray,
    #[error("record #{0} is not a JSON object")]
    RecordNotObject(usize),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Everything that can end a run, mapped onto the process exit code.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParserError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SnapshotError {
    pub fn exit_code(&self) -> u8 {
        match self {
            SnapshotError::Config(_) => 1,
            SnapshotError::Fetch(FetchError::Status { .. }) => 2,
            _ => 3,
        }
    }

    /// Line printed to stderr before exiting with [`SnapshotError::exit_code`].
    pub fn diagnostic(&self) -> String {
        match self {
            SnapshotError::Config(e) => format!("❌ Configuration error: {}", e),
            SnapshotError::Fetch(e @ FetchError::Status { .. }) => format!("❌ {}", e),
            other => format!("❌ Other error: {}", other),
        }
    }
}
