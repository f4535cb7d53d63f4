use axum::{
    Extension, Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::email_signups::use_cases::sign_up::inbound::http as sign_up_http;
use crate::shell::config::AppConfig;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route("/api/email-signup", post(sign_up_http::handle))
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Cross origin access for the marketing site when it is served from another origin.
/// Without a configured origin no CORS headers are emitted.
pub fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    config.cors_allowed_origin.clone().map(|origin| {
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    })
}
