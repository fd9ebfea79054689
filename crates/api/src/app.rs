use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use shared::jwt::JwtConfig;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{Config, SecurityConfig};
use crate::middleware::{
    metrics_handler, metrics_middleware, security_headers_middleware, trace_id, RateLimiterState,
};
use crate::routes::{artists, auth, contact, content, events, health};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub jwt: Arc<JwtConfig>,
    pub rate_limiter: Option<Arc<RateLimiterState>>,
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        jwt: Arc::new(config.jwt.to_jwt_config()),
        rate_limiter: RateLimiterState::new(config.security.rate_limit_per_minute).map(Arc::new),
        config: config.clone(),
    };

    // `/content/:key` carries both the key lookup (GET) and the id-addressed
    // writes (PUT, DELETE); the handlers parse the segment accordingly.
    let content_routes = Router::new()
        .route(
            "/content",
            get(content::list_content).post(content::create_content),
        )
        .route(
            "/content/:key",
            get(content::get_content_by_key)
                .put(content::update_content_by_id)
                .delete(content::delete_content),
        )
        .route("/content/key/:key", put(content::upsert_content_by_key));

    let artist_routes = Router::new()
        .route(
            "/artists",
            get(artists::list_artists).post(artists::create_artist),
        )
        .route("/artists/featured", get(artists::list_featured_artists))
        .route(
            "/artists/:id",
            get(artists::get_artist)
                .put(artists::update_artist)
                .delete(artists::delete_artist),
        );

    let event_routes = Router::new()
        .route("/events", get(events::list_events).post(events::create_event))
        .route("/events/upcoming", get(events::list_upcoming_events))
        .route("/events/past", get(events::list_past_events))
        .route(
            "/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        );

    let contact_routes = Router::new()
        .route(
            "/contact",
            get(contact::list_contact_messages).post(contact::submit_contact),
        )
        .route("/contact/:id", delete(contact::delete_contact_message))
        .route("/contact/:id/read", put(contact::mark_contact_message_read));

    let auth_routes = Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/setup", post(auth::setup));

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::ready))
        .route("/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(content_routes)
        .merge(artist_routes)
        .merge(event_routes)
        .merge(contact_routes)
        .merge(auth_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors_layer(&config.security))
        .with_state(state)
}
