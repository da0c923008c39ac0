use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use gathering_server::config::Config;
use gathering_server::graphql::build_schema;
use gathering_server::routes::{create_routes, AppState, GRAPHQL_PATH};
use gathering_server::store::{Seed, Store};
use gathering_server::utils::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gathering_server=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let store = match &config.seed_file {
        Some(path) => Store::from_seed(Seed::load(path).await?)?,
        None => Store::new(),
    };
    let store = store.into_shared();

    let state = AppState {
        schema: build_schema(store.clone()),
        store,
    };
    let app = create_routes(state, &config);

    let addr = config.addr();
    tracing::info!("🚀 Server running at http://{}{}", addr, GRAPHQL_PATH);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
