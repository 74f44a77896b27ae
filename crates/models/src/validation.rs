use crate::errors::ModelError;

/// Reject blank values for a required text field.
pub fn require(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::missing(field));
    }
    Ok(())
}

/// Check every `(field, value)` pair, reporting the first blank one.
pub fn require_all(fields: &[(&str, &str)]) -> Result<(), ModelError> {
    fields.iter().try_for_each(|(field, value)| require(field, value))
}
