use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;

use crate::routes::{AppState, GRAPHQL_PATH};
use crate::store::StoreCounts;
use crate::utils::error::AppError;
use crate::utils::response::Envelope;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
    records: StoreCounts,
}

pub async fn health_check(State(state): State<AppState>) -> Response {
    let records = state.store.read().await.counts();
    let payload = HealthPayload {
        status: "ok",
        service: "gathering-api",
        records,
    };

    Envelope::ok(payload, "Health check successful").into_response()
}

pub async fn graphql_handler(
    State(state): State<AppState>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(request.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
