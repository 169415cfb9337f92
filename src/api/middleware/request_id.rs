//! Request correlation ids.
//!
//! Every request gets an id: the caller's `x-request-id` header when one
//! is supplied, a fresh UUID otherwise. The id rides in the request
//! extensions for downstream middleware and is echoed on the response so
//! clients can quote it when reporting a failure.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header carrying the correlation id in both directions.
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Correlation id attached to the current request.
#[derive(Clone, Debug)]
pub struct RequestId(String);

impl RequestId {
    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Middleware assigning the correlation id.
///
/// A caller-supplied `x-request-id` is trusted as-is; otherwise a fresh
/// UUID v4 is minted. The response always carries the id back.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let id = match request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(supplied) => RequestId(supplied.to_string()),
        None => RequestId::generate(),
    };

    request.extensions_mut().insert(id.clone());

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(id.as_str()) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), value);
    }

    response
}
