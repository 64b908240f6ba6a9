pub mod finding;
pub mod patient;
pub mod plan;
pub mod serum;
pub mod stone;
pub mod triage;
pub mod urine;

use serde_json::Value;

use crate::error::CoreError;

/// Check that every field in `required` is present and non-null in a JSON
/// record, returning the first absent one as [`CoreError::MissingField`].
pub(crate) fn require_fields(
    record: &Value,
    kind: &str,
    required: &[&str],
) -> Result<(), CoreError> {
    let object = record
        .as_object()
        .ok_or_else(|| CoreError::InvalidRecord(format!("{kind} must be a JSON object")))?;

    match required
        .iter()
        .find(|field| object.get(**field).is_none_or(Value::is_null))
    {
        Some(field) => Err(CoreError::MissingField((*field).to_string())),
        None => Ok(()),
    }
}
