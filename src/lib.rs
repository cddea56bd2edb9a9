use axum::Router;
use axum::extract::State;
use std::sync::Arc;

pub mod api;
pub mod app_env;
pub mod db;
pub mod domain;
pub mod dto;
pub mod external_connections;
pub mod logging;
pub mod persistence;
pub mod routing_utils;

/// Data shared with every request handler
pub struct SharedData {
    pub ext_cxn: persistence::ExternalConnectivity,
}

/// Extractor for [SharedData] in route handlers
pub type AppState = State<Arc<SharedData>>;

/// Assembles the full application: todo routes, API documentation and request tracing
pub fn app_router(shared_data: Arc<SharedData>) -> Router {
    let router = Router::new()
        .nest(api::todo::TODO_API_ROOT, api::todo::todo_routes())
        .merge(api::swagger_main::build_documentation())
        .with_state(shared_data);

    logging::attach_tracing_http(router)
}
