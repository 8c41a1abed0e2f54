//! Request body validation.
//!
//! Shape errors are caught here and never reach the allocator.

use memsim_core::{Algorithm, ValidationError};
use serde_json::{Map, Value};

/// A validated allocation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub processes: Vec<u64>,
    pub partitions: Vec<u64>,
    pub algorithm: Algorithm,
}

/// Parse and validate a raw `/submit` body.
pub fn parse_submission(body: &[u8]) -> Result<Submission, ValidationError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ValidationError::MissingPayload)?;
    let fields = match value {
        Value::Object(map) if !map.is_empty() => map,
        _ => return Err(ValidationError::MissingPayload),
    };

    let processes = size_list(&fields, "processes").ok_or(ValidationError::InvalidProcesses)?;
    let partitions = size_list(&fields, "partitions").ok_or(ValidationError::InvalidPartitions)?;
    let algorithm = fields
        .get("algorithm")
        .and_then(Value::as_str)
        .and_then(|token| token.parse::<Algorithm>().ok())
        .ok_or(ValidationError::InvalidAlgorithm)?;

    Ok(Submission {
        processes,
        partitions,
        algorithm,
    })
}

/// `Some` only for an array whose elements are all non-negative integers.
fn size_list(fields: &Map<String, Value>, key: &str) -> Option<Vec<u64>> {
    fields.get(key)?.as_array()?.iter().map(Value::as_u64).collect()
}
