use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{expand_handler, health_handler, minify_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .nest(
                "/v1",
                Router::new()
                    .route("/minify", post(minify_handler))
                    .route("/expand", get(expand_handler)),
            )
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
