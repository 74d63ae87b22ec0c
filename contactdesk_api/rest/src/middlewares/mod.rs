use axum::Router;

pub mod panic_handler;
pub mod request_id;
pub mod trace;

/// Adds all middlewares, the request id being assigned first.
pub fn add(router: Router<()>) -> Router<()> {
    let router = panic_handler::add(router);
    let router = trace::add(router);
    request_id::add(router)
}
