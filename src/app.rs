//! HTTP router assembly.

use std::path::Path;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeFile, trace::TraceLayer};

use crate::{handlers, middleware, state::AppState};

/// Build the application router.
///
/// # Routes
///
/// - `GET /` - static landing page from `<static_dir>/index.html`
/// - `POST /login` - public
/// - `GET /quotes`, `POST /quotes` - require the token
pub fn router(state: AppState, static_dir: &Path) -> Router {
    // The token check runs before any body extraction, so an unauthenticated
    // request is answered with 401 whatever its body looks like.
    let authenticated_routes = Router::new()
        .route(
            "/quotes",
            get(handlers::quotes::list_quotes).post(handlers::quotes::create_quote),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route("/login", post(handlers::auth::login))
        .merge(authenticated_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
