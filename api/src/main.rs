//! Portfolio API Server
//!
//! Backend for a personal portfolio site: public read endpoints for the
//! published content, a bearer-token admin API for managing it, and a
//! rate-limited contact form. Uses hexagonal (ports & adapters)
//! architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod db;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::{
    NoopNotifier, PostgresMessageRepository, PostgresProjectRepository, PostgresSkillRepository,
    PostgresTestimonialRepository, PostgresUserRepository, WebhookNotifier,
};
use app::{AuthService, ContactService, PortfolioService};
use config::Config;
use domain::ports::Notifier;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresUserRepository>>,
    pub portfolio_service: Arc<
        PortfolioService<
            PostgresProjectRepository,
            PostgresSkillRepository,
            PostgresTestimonialRepository,
        >,
    >,
    pub contact_service: Arc<ContactService<PostgresMessageRepository, dyn Notifier>>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Portfolio API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    db::init_schema(&db)
        .await
        .expect("Failed to initialize schema");

    // Create adapters
    let project_repo = Arc::new(PostgresProjectRepository::new(db.clone()));
    let skill_repo = Arc::new(PostgresSkillRepository::new(db.clone()));
    let testimonial_repo = Arc::new(PostgresTestimonialRepository::new(db.clone()));
    let message_repo = Arc::new(PostgresMessageRepository::new(db.clone()));
    let user_repo = Arc::new(PostgresUserRepository::new(db.clone()));

    // Webhook notifications are optional; without a URL they become no-ops
    let notifier: Arc<dyn Notifier> = match &config.contact_webhook_url {
        Some(url) => Arc::new(WebhookNotifier::new(url.clone())),
        None => Arc::new(NoopNotifier),
    };

    // Create application services
    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        config.auth_secret.clone(),
    ));

    auth_service
        .ensure_admin(&config.admin_email, &config.admin_password, &config.admin_name)
        .await
        .expect("Failed to seed admin user");

    let portfolio_service = Arc::new(PortfolioService::new(
        project_repo.clone(),
        skill_repo.clone(),
        testimonial_repo.clone(),
    ));

    let contact_service = Arc::new(ContactService::new(message_repo.clone(), notifier));

    // Create app state
    let state = AppState {
        auth_service,
        portfolio_service,
        contact_service,
        config: config.clone(),
    };

    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    // (SmartIpKeyExtractor requires X-Forwarded-For headers from reverse proxy)
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Rate-limited routes (contact form, login)
    let rate_limited_routes = Router::new()
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/admin/login", post(handlers::login))
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        // Public content (published rows only)
        .route("/api/projects", get(handlers::list_public_projects))
        .route("/api/projects/:id", get(handlers::get_public_project))
        .route("/api/skills", get(handlers::list_public_skills))
        .route("/api/testimonials", get(handlers::list_public_testimonials))
        // Merge rate-limited routes
        .merge(rate_limited_routes)
        // Admin routes (bearer token required)
        .nest(
            "/api/admin",
            Router::new()
                .route("/verify", get(handlers::verify))
                // Projects
                .route(
                    "/projects",
                    get(handlers::list_projects).post(handlers::create_project),
                )
                .route(
                    "/projects/:id",
                    get(handlers::get_project)
                        .put(handlers::update_project)
                        .delete(handlers::delete_project),
                )
                // Skills
                .route(
                    "/skills",
                    get(handlers::list_skills).post(handlers::create_skill),
                )
                .route(
                    "/skills/:id",
                    get(handlers::get_skill)
                        .put(handlers::update_skill)
                        .delete(handlers::delete_skill),
                )
                // Testimonials
                .route(
                    "/testimonials",
                    get(handlers::list_testimonials).post(handlers::create_testimonial),
                )
                .route(
                    "/testimonials/:id",
                    get(handlers::get_testimonial)
                        .put(handlers::update_testimonial)
                        .delete(handlers::delete_testimonial),
                )
                // Contact inbox
                .route("/messages", get(handlers::list_messages))
                .route(
                    "/messages/:id",
                    put(handlers::update_message).delete(handlers::delete_message),
                )
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth::auth_middleware,
                )),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
