//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that reports every failure as 422.
///
/// axum's own `Json` answers with 400, 415 or 422 depending on what went
/// wrong. Here a missing content type, an empty or malformed body and a
/// missing or mistyped field all become `AppError::UnprocessableEntity`.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                log_rejection(&rejection);
                Err(AppError::UnprocessableEntity)
            }
        }
    }
}

fn log_rejection(rejection: &JsonRejection) {
    tracing::debug!(reason = %rejection.body_text(), "rejected request body");
}
