//! In-process axum server serving a [`Catalog`].
//!
//! Runs on its own thread with a dedicated tokio runtime so blocking clients
//! can talk to it from plain `#[test]` functions.

use axum::Router;
use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use serde::Deserialize;
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::thread;
use tokio::sync::oneshot;

use crate::fixtures::Catalog;

#[derive(Debug, Default)]
struct RequestLog {
    targets: Vec<String>,
    last_headers: Vec<String>,
}

#[derive(Clone)]
struct MarketState {
    catalog: Arc<Catalog>,
    log: Arc<Mutex<RequestLog>>,
}

impl MarketState {
    fn record(&self, uri: &OriginalUri, headers: &HeaderMap) {
        let target = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string());

        let mut log = self.log.lock().unwrap();
        log.targets.push(target);
        log.last_headers = headers
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value.to_str().unwrap_or_default()))
            .collect();
    }
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    page: usize,
    q: Option<String>,
}

/// A running mock marketplace. The server stops when dropped.
pub struct MockMarket {
    addr: SocketAddr,
    log: Arc<Mutex<RequestLog>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockMarket {
    /// Bind to an ephemeral localhost port and start serving `catalog`.
    pub fn start(catalog: Catalog) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind mock market");
        listener
            .set_nonblocking(true)
            .expect("Failed to configure mock market listener");
        let addr = listener.local_addr().expect("Failed to read mock market address");

        let log = Arc::new(Mutex::new(RequestLog::default()));
        let state = MarketState {
            catalog: Arc::new(catalog),
            log: Arc::clone(&log),
        };
        let (shutdown, stopped) = oneshot::channel::<()>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build mock market runtime");

            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener)
                    .expect("Failed to adopt mock market listener");
                axum::serve(listener, router(state))
                    .with_graceful_shutdown(async {
                        let _ = stopped.await;
                    })
                    .await
                    .expect("Mock market server failed");
            });
        });

        Self {
            addr,
            log,
            shutdown: Some(shutdown),
        }
    }

    /// Base URL to hand to the client, without trailing slash.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Request targets (path plus query string) in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.log.lock().unwrap().targets.clone()
    }

    /// Number of requests that hit the search endpoint.
    pub fn search_count(&self) -> usize {
        self.requests()
            .iter()
            .filter(|target| target.starts_with("/search/"))
            .count()
    }

    /// Number of requests that hit the listing endpoint.
    pub fn listing_count(&self) -> usize {
        self.requests()
            .iter()
            .filter(|target| target.starts_with("/listings/"))
            .count()
    }

    /// Headers of the most recent request, as lowercase `name: value` lines.
    pub fn last_headers(&self) -> Vec<String> {
        self.log.lock().unwrap().last_headers.clone()
    }
}

impl Drop for MockMarket {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

fn router(state: MarketState) -> Router {
    Router::new()
        .route("/search/", get(search))
        .route("/listings/{id}/", get(listing))
        .with_state(state)
}

async fn search(
    State(state): State<MarketState>,
    uri: OriginalUri,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    state.record(&uri, &headers);
    json_response(state.catalog.search(params.q.as_deref(), params.page))
}

async fn listing(
    State(state): State<MarketState>,
    uri: OriginalUri,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    state.record(&uri, &headers);
    json_response(state.catalog.listing(&id))
}

fn json_response((status, body): (u16, String)) -> impl IntoResponse {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}
