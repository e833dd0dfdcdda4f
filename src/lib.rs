//! Fetches real-time air-quality records from the MoENV open-data API and
//! writes a normalized JSON snapshot to disk.

pub mod config;
pub mod fetcher;
pub mod model;
pub mod normalizer;
pub mod parser;
pub mod pipeline;
pub mod storage;
pub mod utils;

pub use config::AppConfig;
pub use model::{NormalizedRecord, Snapshot, SnapshotError};
pub use pipeline::run;
