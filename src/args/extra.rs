//! `ESPv2_ARGS` parsing.
//!
//! The value is comma-separated by default. An argument that itself needs a
//! comma can use the alternate form `^<delim>^<payload>`, for example
//! `^++^--cors_allow_methods=GET,POST++--cors_allow_credentials`.

use crate::error::LaunchError;

const DEFAULT_DELIMITER: &str = ",";
const CARET: char = '^';

/// Message served when the delimiter prefix is empty.
pub const MALFORMED_ARGS_MESSAGE: &str = "Malformed ESPv2_ARGS environment variable.";

/// Split a raw `ESPv2_ARGS` value into individual arguments.
///
/// Pieces are returned verbatim, empty ones included.
pub fn parse_extra_args(raw: &str) -> Result<Vec<String>, LaunchError> {
    let (delimiter, payload) = split_delimiter(raw);

    if delimiter.is_empty() {
        return Err(LaunchError::MalformedConfiguration(
            MALFORMED_ARGS_MESSAGE.to_string(),
        ));
    }

    Ok(payload.split(delimiter).map(str::to_string).collect())
}

/// Separate a `^<delim>^` prefix from the payload, if present.
fn split_delimiter(raw: &str) -> (&str, &str) {
    raw.strip_prefix(CARET)
        .and_then(|rest| rest.split_once(CARET))
        .unwrap_or((DEFAULT_DELIMITER, raw))
}
