use axum::extract::{FromRequest, Request, rejection::JsonRejection};

use crate::error::AppError;

/// `axum::Json` with the rejection folded into the domain error shape: a
/// missing, malformed or incomplete body is a 400 with an `{"error": ...}`
/// body instead of axum's bare 415/422 responses.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!("rejected request body: {rejection}");
                Err(AppError::Validation("Invalid request body"))
            }
        }
    }
}
