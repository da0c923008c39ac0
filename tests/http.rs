use axum::http::StatusCode;
use axum_test::TestServer;
use gathering_server::config::Config;
use gathering_server::graphql::build_schema;
use gathering_server::routes::{create_routes, AppState};
use gathering_server::store::{Seed, Store};
use serde_json::{json, Value};

fn config(graphiql: bool) -> Config {
    Config::from_lookup(|key| match key {
        "GRAPHIQL" => Some(graphiql.to_string()),
        _ => None,
    })
    .unwrap()
}

fn server_with(store: Store, config: &Config) -> TestServer {
    let store = store.into_shared();
    let state = AppState {
        schema: build_schema(store.clone()),
        store,
    };
    TestServer::new(create_routes(state, config)).unwrap()
}

fn server() -> TestServer {
    server_with(Store::new(), &config(true))
}

#[tokio::test]
async fn test_health_endpoint_reports_record_counts() {
    let seed = Seed::from_json(
        r#"{ "users": [
            { "id": "1", "username": "a", "email": "a@x.com" },
            { "id": "2", "username": "b", "email": "b@x.com" }
        ] }"#,
    )
    .unwrap();
    let server = server_with(Store::from_seed(seed).unwrap(), &config(true));

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(
        body["data"]["records"],
        json!({ "users": 2, "events": 0, "locations": 0, "participants": 0 })
    );
}

#[tokio::test]
async fn test_graphql_post_round_trip() {
    let server = server();

    let response = server
        .post("/graphql")
        .json(&json!({
            "query": "mutation Add($data: addLocationInput!) { addLocation(data: $data) { id name lat } }",
            "variables": { "data": { "name": "Pier", "desc": "Harbour", "lat": 53.5, "lng": 9.9 } }
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body.get("errors").is_none(), "{body}");
    let id = body["data"]["addLocation"]["id"].as_str().unwrap().to_string();

    let response = server
        .post("/graphql")
        .json(&json!({
            "query": "query Get($id: ID!) { location(id: $id) { name lat } locations { id } }",
            "variables": { "id": id }
        }))
        .await;

    let body: Value = response.json();
    assert_eq!(body["data"]["location"], json!({ "name": "Pier", "lat": 53.5 }));
    assert_eq!(body["data"]["locations"], json!([{ "id": id }]));
}

#[tokio::test]
async fn test_graphql_not_found_is_reported_in_errors() {
    let server = server();

    let response = server
        .post("/graphql")
        .json(&json!({ "query": "mutation { deleteEvent(id: \"missing\") { id } }" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["errors"][0]["message"], "Event not found: missing");
    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_introspection_is_enabled() {
    let server = server();

    let response = server
        .post("/graphql")
        .json(&json!({ "query": "{ __type(name: \"Event\") { fields { name } } }" }))
        .await;

    let body: Value = response.json();
    let fields: Vec<&str> = body["data"]["__type"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|field| field["name"].as_str())
        .collect();
    for expected in ["id", "location_id", "user_id", "user", "location", "participant"] {
        assert!(fields.contains(&expected), "missing field {expected}");
    }
}

#[tokio::test]
async fn test_graphiql_page_and_relaxed_csp() {
    let server = server();

    let response = server.get("/graphql").await;

    response.assert_status_ok();
    assert!(response.text().contains("graphiql"));
    assert!(response.headers().get("content-security-policy").is_none());
    assert_eq!(response.headers()["x-frame-options"], "DENY");
}

#[tokio::test]
async fn test_graphiql_disabled_sends_strict_csp() {
    let server = server_with(Store::new(), &config(false));

    let response = server.get("/graphql").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);

    let response = server.get("/health").await;
    assert_eq!(
        response.headers()["content-security-policy"],
        "default-src 'none'; frame-ancestors 'none'"
    );
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    assert!(response.headers().get("strict-transport-security").is_none());
}

#[tokio::test]
async fn test_unknown_route_returns_error_envelope() {
    let server = server();

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "ROUTE_NOT_FOUND");
    assert_eq!(body["error"]["message"], "No route for /nonexistent");
}
