use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, Config, SecurityHeadersLayer};
use crate::graphql::AppSchema;
use crate::handlers::{graphiql, graphql_handler, health_check, route_not_found};
use crate::store::SharedStore;

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
    pub store: SharedStore,
}

pub fn create_routes(state: AppState, config: &Config) -> Router {
    let graphql_route = if config.graphiql {
        get(graphiql).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new()
        .route("/health", get(health_check))
        .route(GRAPHQL_PATH, graphql_route)
        .fallback(route_not_found)
        .with_state(state)
        .layer(SecurityHeadersLayer::new(config.production, !config.graphiql))
        .layer(create_cors_layer(config.cors_allowed_origins.as_deref()))
        .layer(TraceLayer::new_for_http())
}
