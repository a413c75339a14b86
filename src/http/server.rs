//! Fallback error server.
//!
//! # Responsibilities
//! - Bind the platform-assigned PORT when the proxy cannot be started
//! - Answer every request, any method and any path, with 503
//! - Surface the startup error message as the plain-text body
//!
//! # Design Decisions
//! - A single Axum fallback handler; there are no routes
//! - The body is formatted once, at construction
//! - Requests are traced at INFO; the intended 503 is not a failure
//! - No graceful shutdown: the platform kills the container

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Router,
};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::error::LaunchError;

/// HTTP server that reports a startup error to every caller.
pub struct ErrorServer {
    router: Router,
}

impl ErrorServer {
    /// Create a server that serves `message` followed by a newline.
    pub fn new(message: &str) -> Self {
        let body: Arc<str> = format!("{}\n", message).into();
        let router = Router::new()
            .fallback(error_handler)
            .with_state(body)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO))
                    .on_failure(()),
            );

        Self { router }
    }

    /// The Axum router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on the given listener until an I/O error occurs.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Error server listening");

        axum::serve(listener, self.router).await?;

        tracing::info!("Error server stopped");
        Ok(())
    }
}

async fn error_handler(State(body): State<Arc<str>>) -> impl IntoResponse {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        [(header::CONTENT_TYPE, "text/plain")],
        body.to_string(),
    )
}

/// Resolve the wildcard bind address for a PORT value.
pub fn bind_address(port: &str) -> Result<SocketAddr, LaunchError> {
    let port: u16 = port.parse().map_err(|source| LaunchError::InvalidPort {
        value: port.to_string(),
        source,
    })?;
    Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
}

/// Bind `0.0.0.0:<port>` and serve `message` forever.
///
/// Returns only if the port is unusable or the listener fails.
pub async fn serve_error(port: &str, message: &str) -> Result<(), LaunchError> {
    tracing::error!("Serving error handler with '{}'.", message);

    let addr = bind_address(port)?;
    let listener = TcpListener::bind(addr).await?;
    ErrorServer::new(message).run(listener).await?;
    Ok(())
}
