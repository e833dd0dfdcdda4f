// MoENV open-data JSON parsing
use crate::model::{ParserError, RawRecord};
use serde_json::Value;

pub trait Parser {
    fn parse(&self, body: &str) -> Result<Vec<RawRecord>, ParserError>;
}

pub struct MoenvParser;

impl MoenvParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MoenvParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for MoenvParser {
    /// Extracts the `records` array. A missing or null `records` yields no records.
    fn parse(&self, body: &str) -> Result<Vec<RawRecord>, ParserError> {
        let document: Value = serde_json::from_str(body)?;
        let Value::Object(mut root) = document else {
            return Err(ParserError::NotAnObject);
        };

        let records = match root.remove("records") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(ParserError::RecordsNotArray),
        };

        records
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(map) => Ok(map),
                _ => Err(ParserError::RecordNotObject(i)),
            })
            .collect()
    }
}
