use crate::server::error::Error;

/// Trims a required text field, rejecting it if nothing is left.
///
/// # Arguments
/// - `name` - Field name used in the validation message
/// - `value` - Raw value from the request body
pub fn required_field(name: &str, value: String) -> Result<String, Error> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::Validation(format!("{} is required", name)));
    }

    Ok(value.to_string())
}
