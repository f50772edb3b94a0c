use super::error::ApiError;
use axum::{
    async_trait,
    extract::{rejection::QueryRejection, FromRequestParts, Query},
    http::request::Parts,
    RequestPartsExt,
};
use serde::{
    de::{self, DeserializeOwned},
    Deserialize, Deserializer,
};
use std::error::Error;
use validator::{Validate, ValidationErrors};

/// Flattens field errors into their messages, ordered by field name.
pub fn messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| (field.to_string(), errors))
        .collect::<Vec<_>>();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect()
}

/// Reads a query-string integer, failing with `message` instead of the
/// parser's own wording.
pub fn integer<'de, D>(deserializer: D, message: &'static str) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .parse()
        .map_err(|_| de::Error::custom(message))
}

/// The innermost cause of a binding failure is the deserializer's own
/// message (e.g. "page must be an integer"); the rejection wrapper only adds
/// a generic prefix.
fn binding_message(rejection: &QueryRejection) -> String {
    let mut cause: &dyn Error = rejection;
    while let Some(source) = cause.source() {
        cause = source;
    }

    match cause.to_string() {
        message if message.is_empty() => rejection.body_text(),
        message => message,
    }
}

/// Query-string extractor that both binds and validates `T`. Binding and
/// constraint failures are both reported as validation failures.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = parts
            .extract::<Query<T>>()
            .await
            .map_err(|rejection| ApiError::validation(binding_message(&rejection)))?;

        value.validate()?;

        Ok(Self(value))
    }
}
