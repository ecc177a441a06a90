use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use category_core::{CategoryStore, Dispatcher, Request, Response};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

pub mod config;

pub use config::{Config, ConfigError};

pub type Db = Arc<RwLock<CategoryStore>>;

#[derive(Clone)]
struct AppState {
    db: Db,
    dispatcher: Arc<Dispatcher>,
}

/// Router over the starter categories.
pub fn app() -> Router {
    app_with(CategoryStore::seeded())
}

pub fn app_with(store: CategoryStore) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(store)),
        dispatcher: Arc::new(Dispatcher::new()),
    };
    Router::new()
        .route("/requests", post(handle_request))
        .with_state(state)
}

pub async fn run(listener: TcpListener, store: CategoryStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

// A JSON `null` body is the absent request. The write lock covers the whole
// dispatch so an existence check and its mutation cannot interleave.
async fn handle_request(
    State(state): State<AppState>,
    Json(request): Json<Option<Request>>,
) -> Json<Response> {
    let mut store = state.db.write().await;
    let response = state.dispatcher.handle(&mut *store, request.as_ref());
    debug!(status = %response.status, "request handled");
    Json(response)
}
