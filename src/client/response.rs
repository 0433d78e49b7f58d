use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::error;

use super::error::ClassifaiError;

const DEFAULT_ERROR_MESSAGE: &str = "Unknown error";

/// Map a transport response to a typed result.
///
/// Pure function of `(status, body)`. A 200 body is deserialized into the
/// caller's type; a non-200 body is classified into an error variant by
/// exact status code. A body that is not valid JSON is treated as
/// `{"error": <raw text>}`.
pub(crate) fn map_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<T, ClassifaiError> {
    let data = parse_body(body);

    if status == 200 {
        return serde_json::from_value(data)
            .map_err(|e| ClassifaiError::ParseResponse(e.to_string()));
    }

    let err = api_error(status, data);
    error!("API error {status}: {err}");
    Err(err)
}

fn parse_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| serde_json::json!({ "error": body }))
}

fn api_error(status: u16, body: Value) -> ClassifaiError {
    let mut message = body
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_ERROR_MESSAGE)
        .to_string();

    if let Some(detail) = body.get("detail").filter(|d| !d.is_null()) {
        let detail = match detail.as_str() {
            Some(s) => s.to_string(),
            None => detail.to_string(),
        };
        message = format!("{message}: {detail}");
    }

    let (message, status_code, body) = (message, status, Some(body));
    match status {
        401 => ClassifaiError::Auth {
            message,
            status_code,
            body,
        },
        429 => ClassifaiError::RateLimit {
            message,
            status_code,
            body,
        },
        400 => ClassifaiError::Validation {
            message,
            status_code,
            body,
        },
        404 => ClassifaiError::NotFound {
            message,
            status_code,
            body,
        },
        _ => ClassifaiError::Api {
            message,
            status_code,
            body,
        },
    }
}
