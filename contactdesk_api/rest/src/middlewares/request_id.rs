//! Assign each request a unique ID

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use base64::{display::Base64Display, engine::general_purpose::URL_SAFE_NO_PAD};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(middleware))
}

async fn middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::new();
    request.extensions_mut().insert(request_id);
    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub Uuid);

impl RequestId {
    fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Base64Display::new(self.0.as_bytes(), &URL_SAFE_NO_PAD).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let id = RequestId(Uuid::nil());
        assert_eq!(id.to_string(), "AAAAAAAAAAAAAAAAAAAAAA");
    }

    #[test]
    fn unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }
}
