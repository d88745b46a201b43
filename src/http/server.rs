//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout)
//! - Resolve page URLs against the route registry
//! - Expose the mounted routes for link generation (sitemap, routes.json)

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::schema::SiteSection;
use crate::config::SiteConfig;
use crate::http::request::{request_id, MakeRequestUuid};
use crate::http::response;
use crate::lifecycle::shutdown_signal;
use crate::observability::metrics;
use crate::routing::{Link, RouteRegistry};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RouteRegistry>,
    pub site: Arc<SiteSection>,
}

/// HTTP host for the documentation site.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving `registry`.
    pub fn new(config: SiteConfig, registry: Arc<RouteRegistry>) -> Self {
        let state = AppState {
            registry,
            site: Arc::new(config.site.clone()),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        Router::new()
            .route("/healthz", get(healthz))
            .route("/sitemap.xml", get(sitemap_handler))
            .route("/routes.json", get(routes_handler))
            .route("/", get(page_handler))
            .route("/{*path}", get(page_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                        tracing::info_span!(
                            "http_request",
                            method = %req.method(),
                            uri = %req.uri(),
                            request_id = %request_id(req.headers()),
                        )
                    }))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// The assembled router, for driving the host without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Resolve the request path and answer with the page shell or a 404.
async fn page_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let start = Instant::now();
    let path = uri.path();

    match state.registry.resolve(path) {
        Ok(resolved) => {
            metrics::record_resolution(true, start);
            tracing::debug!(
                path = %path,
                prefix = %resolved.prefix,
                component = resolved.entry.component.name,
                "Route resolved"
            );
            Html(response::page_shell(resolved.entry)).into_response()
        }
        Err(e) => {
            metrics::record_resolution(false, start);
            tracing::debug!(path = %path, error = %e, "No route matched");
            (
                StatusCode::NOT_FOUND,
                Html(response::not_found_shell(&state.site.app_title, path)),
            )
                .into_response()
        }
    }
}

async fn sitemap_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = response::sitemap(&state.site.base_url, &state.registry.links());
    ([(header::CONTENT_TYPE, "application/xml")], body)
}

async fn routes_handler(State(state): State<AppState>) -> Json<Vec<Link>> {
    Json(state.registry.links())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::build_registry;
    use axum::body::to_bytes;
    use tower::ServiceExt;

    fn server() -> HttpServer {
        let config = SiteConfig::default();
        let registry = build_registry(&config).unwrap();
        HttpServer::new(config, registry)
    }

    async fn fetch(uri: &str) -> (StatusCode, String) {
        let res = server()
            .router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_page_hit() {
        let (status, body) = fetch("/faq/hybrid-application").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Hybrid application - FAQ</title>"));
        assert!(body.contains("<app-hybrid-application>"));
    }

    #[tokio::test]
    async fn test_page_miss() {
        let (status, body) = fetch("/faq/unknown").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found - Documentation"));

        let (status, _) = fetch("/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_routes_json() {
        let (status, body) = fetch("/routes.json").await;
        assert_eq!(status, StatusCode::OK);

        let links: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(links.len(), 5);
        assert_eq!(links[0]["url"], "/faq/global-prefix");
        assert_eq!(links[0]["component"], "GlobalPrefixComponent");
    }

    #[tokio::test]
    async fn test_request_id_is_set() {
        let res = server()
            .router()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key("x-request-id"));
    }
}
