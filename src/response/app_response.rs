use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

/// `dd/MM/yyyy - HH:mm:ss`, server local time.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y - %H:%M:%S";

fn serialize_timestamp<S: Serializer>(timestamp: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.format(TIMESTAMP_FORMAT).to_string())
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

/// Field-level sub-error
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub field: String,
    pub message: String,
}

impl ErrorDetail {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Envelope for every successful response with a body.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse<T> {
    #[serde(serialize_with = "serialize_timestamp")]
    pub time_stamp: DateTime<Local>,
    #[serde(serialize_with = "serialize_status")]
    pub status_code: StatusCode,
    pub message: String,
    pub payload: T,
}

impl<T> SuccessResponse<T> {
    /// Create a success response with default 200 OK status
    pub fn send(message: impl Into<String>, payload: T) -> Self {
        Self {
            time_stamp: Local::now(),
            status_code: StatusCode::OK,
            message: message.into(),
            payload,
        }
    }

    /// Set custom status code (builder pattern)
    pub fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }
}

impl<T> IntoResponse for SuccessResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}

/// Envelope for every failure.
///
/// A copy is stored in the response extensions so the outermost layer can
/// stamp the request path on it.
#[derive(Clone, Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Local>,
    #[serde(serialize_with = "serialize_status")]
    pub status: StatusCode,
    pub error: String,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            status,
            error: error.into(),
            path: String::new(),
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: Vec<ErrorDetail>) -> Self {
        self.details = details;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(&self)).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let mut response = SuccessResponse::send("Group found", json!({"id": 1}));
        response.time_stamp = timestamp;

        let value = serde_json::to_value(response.with_status(StatusCode::CREATED)).unwrap();

        assert_eq!(
            value,
            json!({
                "timeStamp": "09/03/2024 - 07:05:01",
                "statusCode": 201,
                "message": "Group found",
                "payload": {"id": 1}
            })
        );
    }

    #[test]
    fn test_error_envelope_omits_empty_details() {
        let value = serde_json::to_value(
            ErrorResponse::new(StatusCode::CONFLICT, "Conflict", "duplicate").with_path("/v1/groups"),
        )
        .unwrap();

        assert_eq!(value["status"], 409);
        assert_eq!(value["error"], "Conflict");
        assert_eq!(value["path"], "/v1/groups");
        assert!(value.get("details").is_none());
        assert!(value["timestamp"].as_str().unwrap().contains(" - "));
    }
}
