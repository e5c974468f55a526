//! Request extraction and input rules for the board routes.
//!
//! Text is judged the way the board stores it: trimmed. A reply padded with
//! whitespace is measured without the padding.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError};

use crate::board::MAX_REPLY_LENGTH;
use crate::web::error::ApiError;

/// JSON body that passed its validation rules.
///
/// Unreadable bodies become `MALFORMED_REQUEST`, rule failures `INVALID_INPUT`.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Query string that passed its validation rules.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Text and passwords must hold something besides whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("Must not be empty".into()));
    }
    Ok(())
}

/// Reply text: not blank, and at most [`MAX_REPLY_LENGTH`] characters once trimmed.
pub fn reply_text(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if value.trim().chars().count() > MAX_REPLY_LENGTH {
        return Err(ValidationError::new("reply_text").with_message(
            format!("Must be at most {MAX_REPLY_LENGTH} characters").into(),
        ));
    }
    Ok(())
}
