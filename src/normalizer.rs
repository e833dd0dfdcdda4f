use crate::model::{NormalizedRecord, RawRecord};
use crate::utils::to_snake_key;
use indexmap::IndexMap;
use serde_json::Value;

/// Keys every normalized record carries, in backfill order.
pub const DEFAULT_KEYS: [&str; 11] = [
    "sitename",
    "aqi",
    "pm2_5",
    "pm10",
    "no2",
    "o3",
    "so2",
    "co",
    "publishtime",
    "status",
    "county",
];

pub fn normalize_all(records: &[RawRecord]) -> Vec<NormalizedRecord> {
    records.iter().map(normalize_record).collect()
}

pub fn normalize_record(record: &RawRecord) -> NormalizedRecord {
    let mut out: IndexMap<String, String> = IndexMap::with_capacity(record.len() + DEFAULT_KEYS.len());

    for (key, value) in record {
        // later duplicates overwrite in place
        out.insert(to_snake_key(key), stringify(value));
    }

    for key in DEFAULT_KEYS {
        out.entry(key.to_string()).or_default();
    }

    NormalizedRecord(out)
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        // arbitrary_precision keeps the upstream digits verbatim
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
