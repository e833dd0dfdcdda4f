use crate::config::AppConfig;
use crate::fetcher::RecordFetcher;
use crate::model::{FetchRequest, Snapshot, SnapshotError};
use crate::normalizer::normalize_all;
use crate::parser::{MoenvParser, Parser};
use crate::storage::JsonFileStorage;
use crate::utils::format_utc;
use chrono::Utc;
use tracing::info;

/// Fetches one page of records, normalizes them and writes the snapshot.
pub async fn run(
    config: &AppConfig,
    fetcher: &dyn RecordFetcher,
    storage: &JsonFileStorage,
) -> Result<Snapshot, SnapshotError> {
    let source = config.source_url();
    let request = FetchRequest {
        url: source.clone(),
        api_key: config.api_key.clone(),
        offset: config.offset,
        limit: config.limit,
    };

    info!("Fetching dataset {}...", config.dataset);
    let body = fetcher.fetch(&request).await?;

    info!("Parsing response ({} bytes)...", body.len());
    let raw = MoenvParser::new().parse(&body)?;

    let records = normalize_all(&raw);
    info!("Normalized {} records", records.len());

    let snapshot = Snapshot::new(source, format_utc(Utc::now()), records);
    storage.save(&snapshot)?;

    Ok(snapshot)
}
