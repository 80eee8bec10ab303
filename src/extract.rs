use axum::{
    async_trait,
    body::{to_bytes, Body},
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::Error;

pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// `axum::Json` whose rejections come back through [`Error`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);

/// Body of a sparse update. An empty (or all-whitespace) body, with or
/// without a content type, reads as `T::default()`; anything else must be
/// JSON.
#[derive(Debug)]
pub struct PatchJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for PatchJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| Error::BadRequest(format!("Failed to read the request body: {}", e)))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
