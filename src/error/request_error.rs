use crate::error::{AppError, ErrorDescription};
use crate::response::app_response::ErrorDetail;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::{Validate, ValidationErrorsKind};

#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    ValidationError(#[from] validator::ValidationErrors),
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    #[error(transparent)]
    PathRejection(#[from] PathRejection),
}

/// JSON body that has been deserialized and passed its validation rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedRequest<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedRequest<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(RequestError::JsonRejection)?;
        value.validate().map_err(RequestError::ValidationError)?;
        Ok(ValidatedRequest(value))
    }
}

/// Path parameters whose parse failures are reported through the error envelope.
#[derive(Debug, Clone, Copy)]
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(RequestError::PathRejection)?;
        Ok(PathParam(value))
    }
}

impl RequestError {
    pub(crate) fn describe(&self) -> ErrorDescription {
        match self {
            RequestError::ValidationError(errors) => ErrorDescription::new(
                StatusCode::BAD_REQUEST,
                "Bad Request",
                "Validation failed",
            )
            .with_details(convert_validation_errors_to_details(errors)),
            RequestError::JsonRejection(rejection) => ErrorDescription::new(
                StatusCode::BAD_REQUEST,
                "Bad Request",
                "Malformed JSON request",
            )
            .with_details(vec![
                ErrorDetail::new("json", "The JSON request body is malformed or invalid."),
                ErrorDetail::new("message", rejection.body_text()),
            ]),
            RequestError::PathRejection(rejection) => ErrorDescription::new(
                StatusCode::BAD_REQUEST,
                "Bad Request",
                "Invalid path parameter",
            )
            .with_details(vec![ErrorDetail::new("path", rejection.body_text())]),
        }
    }
}

fn convert_validation_errors_to_details(errors: &validator::ValidationErrors) -> Vec<ErrorDetail> {
    let mut details = Vec::new();
    collect_details(errors, "", &mut details);
    // HashMap iteration order is arbitrary; keep responses stable.
    details.sort_by(|a, b| a.field.cmp(&b.field));
    details
}

fn collect_details(errors: &validator::ValidationErrors, prefix: &str, details: &mut Vec<ErrorDetail>) {
    for (field, kind) in errors.errors() {
        let path = format!("{}{}", prefix, to_camel_case(field));
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| describe_validation_code(&error.code).to_string());
                    details.push(ErrorDetail::new(path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_details(nested, &format!("{}.", path), details),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_details(nested, &format!("{}[{}].", path, index), details);
                }
            }
        }
    }
}

/// Struct fields are snake_case, the wire format is camelCase.
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn describe_validation_code(code: &str) -> &'static str {
    match code {
        "required" => "must not be null",
        "length" => "has an invalid length",
        "range" => "is out of range",
        "email" => "must be a well-formed email address",
        _ => "Invalid value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Owner {
        #[validate(required(message = "id is required"))]
        id: Option<i64>,
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(required(message = "name is required"))]
        name: Option<String>,
        #[validate(range(exclusive_min = 0.0))]
        body_size: f64,
        #[validate(nested)]
        owner: Owner,
    }

    #[test]
    fn test_validation_errors_become_field_details() {
        let errors = Sample {
            name: None,
            body_size: 0.0,
            owner: Owner { id: None },
        }
        .validate()
        .unwrap_err();
        let description = RequestError::ValidationError(errors).describe();

        assert_eq!(description.status, StatusCode::BAD_REQUEST);
        assert_eq!(description.message, "Validation failed");
        assert_eq!(
            description.details,
            vec![
                ErrorDetail::new("bodySize", "is out of range"),
                ErrorDetail::new("name", "name is required"),
                ErrorDetail::new("owner.id", "id is required"),
            ]
        );
    }
}
