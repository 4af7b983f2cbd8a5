use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use protocol::{Query, QueryKind, QueryRequest, QueryResponse};
use sources::{FixtureSource, RemoteSource, ResultSource, Source};

#[derive(Clone)]
struct AppState {
    source: Arc<Source>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr: SocketAddr = env::var("GEOSCOPE_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:9400".to_string())
        .parse()
        .expect("invalid GEOSCOPE_ADDR");

    let source = match env::var("GEOSCOPE_UPSTREAM") {
        Ok(upstream) => {
            info!("proxying queries to {upstream}");
            Source::Remote(RemoteSource::new(upstream))
        }
        Err(_) => Source::Fixture(FixtureSource),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/api/query", post(post_query))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState {
            source: Arc::new(source),
        });

    info!("query server listening on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

async fn healthz() -> Response {
    (StatusCode::OK, "ok").into_response()
}

async fn post_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Response {
    Json(handle_query(&state.source, request).await).into_response()
}

/// Empty query text is a silent no-op, not an error: the caller gets
/// the empty envelope with a 200.
async fn handle_query(source: &Source, request: QueryRequest) -> QueryResponse {
    let Some(query) = Query::new(request.query, QueryKind::General, request.radius_km) else {
        return QueryResponse::default();
    };
    let outcome = source.fetch(&query).await;
    QueryResponse::from_outcome(outcome)
}

#[cfg(test)]
mod tests {
    use super::handle_query;
    use protocol::QueryRequest;
    use sources::{FixtureSource, Source};

    #[tokio::test(start_paused = true)]
    async fn empty_query_gets_the_empty_envelope() {
        let source = Source::Fixture(FixtureSource);
        let request = QueryRequest {
            query: "   ".to_string(),
            radius_km: 10.0,
        };
        let envelope = handle_query(&source, request).await;
        assert!(envelope.results.is_empty());
        assert_eq!(envelope.center, None);
    }

    #[tokio::test(start_paused = true)]
    async fn delhi_query_serves_the_fixture_set() {
        let source = Source::Fixture(FixtureSource);
        let request = QueryRequest {
            query: "nearest river to 28.61, 77.21".to_string(),
            radius_km: 10.0,
        };
        let envelope = handle_query(&source, request).await;
        assert_eq!(envelope.results.len(), 3);
        assert!(envelope.center.is_some());
        // the envelope carries no holes when produced from an outcome
        assert!(envelope.results.iter().all(Option::is_some));
    }
}
