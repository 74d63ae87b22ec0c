use std::net::SocketAddr;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use contactdesk_core_contact_contracts::MockContactFeatureService;
use contactdesk_core_health_contracts::MockHealthFeatureService;
use serde_json::Value;
use tower::ServiceExt;

use crate::{RestServer, RestServerConfig};

mod contact;

fn make_router(health: MockHealthFeatureService, contact: MockContactFeatureService) -> Router {
    RestServer {
        config: RestServerConfig {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        },
        health,
        contact,
    }
    .router()
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    fn content_type(&self) -> &str {
        self.headers
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
    }
}

async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

async fn get(router: Router, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

async fn post(router: Router, uri: &str, body: impl Into<Body>) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    send(router, request).await
}
