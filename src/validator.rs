use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use securedash_core::AppError;

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    // field_errors() is a HashMap; keep the message stable.
    messages.sort();
    messages.join(", ")
}

fn rejection_message(rejection: &JsonRejection) -> String {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return "Missing 'Content-Type: application/json' header".to_string();
    }

    let error_msg = rejection.body_text();

    if let Some(field) = error_msg
        .split("missing field `")
        .nth(1)
        .and_then(|s| s.split('`').next())
    {
        return format!("{} is required", field);
    }

    if error_msg.contains("invalid type") {
        return "Invalid field type in request".to_string();
    }

    "Invalid request body".to_string()
}

/// JSON body extractor that also runs `validator` rules.
///
/// Every failure (bad content type, malformed JSON, missing field, failed
/// rule) is a `400` with a readable message.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection_message(&rejection)))?;

        value
            .validate()
            .map_err(|errors| AppError::bad_request(format_errors(&errors)))?;

        Ok(ValidatedJson(value))
    }
}
