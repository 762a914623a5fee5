pub mod albums;
pub mod fallback;
pub mod json;
pub mod state;

use axum::{routing::get, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use crate::http::state::AppState;

/// HEAD is routed to the fallback explicitly; otherwise axum would answer it
/// with the GET handler.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/albums",
            get(albums::list_albums)
                .post(albums::create_album)
                .head(fallback::page_not_found)
                .fallback(fallback::page_not_found),
        )
        .route(
            "/albums/{id}",
            get(albums::get_album)
                .head(fallback::page_not_found)
                .fallback(fallback::page_not_found),
        )
        .fallback(fallback::page_not_found)
        .layer(CatchPanicLayer::custom(fallback::handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
