//! Extractors that reject with [`ApiError`], so a malformed request gets the
//! same JSON error body as every other failure.

use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Query, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::{
    database::models::Payload,
    errors::{field_errors, ApiError, FieldErrors},
};

#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// A JSON body that has passed its `validator` rules.
///
/// Bodies that are well-formed JSON but do not fit the payload type (a
/// missing field, a wrong type) are reported as validation failures too,
/// under the `body` key.
pub struct ValidatedJson<T>(pub T);

fn invalid<T: Payload>(errors: FieldErrors) -> ApiError {
    ApiError::Validation {
        message: format!("Invalid {} data", T::KIND),
        errors,
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Payload + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::JsonDataError(err) => {
                    let errors = FieldErrors::from([("body".to_string(), vec![err.body_text()])]);
                    invalid::<T>(errors)
                }
                other => ApiError::from(other),
            })?;

        value
            .validate()
            .map_err(|errors| invalid::<T>(field_errors(&errors)))?;
        Ok(Self(value))
    }
}
