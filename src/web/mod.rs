//! Static asset server
//!
//! Boundary component: serves files under a fixed root with a fixed
//! extension table. `/` maps to the index document. Every failure — missing
//! file, permission error, path escape — is the same uniform 404 response.
//! No directory listing, no range requests, no caching headers.

use std::path::{Component, Path, PathBuf};

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use log::{debug, error};

/// Fixed body for every unresolvable request
pub const NOT_FOUND_BODY: &str = "<h1>404 Not Found</h1>";

/// Extension to content-type table.
pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("wav") => "audio/wav",
        Some("mp4") => "video/mp4",
        Some("woff") => "application/font-woff",
        Some("ttf") => "application/font-ttf",
        Some("eot") => "application/vnd.ms-fontobject",
        Some("otf") => "application/font-otf",
        Some("wasm") => "application/wasm",
        Some("webp") => "image/webp",
        Some("webm") => "video/webm",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// Resolve a request path against the serving root. `/` maps to the index
/// document; any component that would step outside the root resolves to
/// nothing.
pub fn resolve_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let trimmed = request_path.trim_start_matches('/');
    let relative = if trimmed.is_empty() { "index.html" } else { trimmed };

    let mut resolved = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(resolved)
}

#[derive(Clone)]
struct ServeRoot(PathBuf);

/// Build the server: every route falls through to the file responder.
pub fn router(root: PathBuf) -> Router {
    Router::new()
        .fallback(serve_file)
        .with_state(ServeRoot(root))
}

async fn serve_file(State(ServeRoot(root)): State<ServeRoot>, uri: Uri) -> Response {
    let Some(path) = resolve_path(&root, uri.path()) else {
        error!("file not found: {}", uri.path());
        return not_found();
    };

    match tokio::fs::read(&path).await {
        Ok(data) => {
            debug!("{} -> {}", uri.path(), path.display());
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, content_type(&path))],
                data,
            )
                .into_response()
        }
        // All read errors collapse to the same 404; the client learns
        // nothing about the cause.
        Err(e) => {
            error!("file not found: {} ({})", path.display(), e);
            not_found()
        }
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/html")],
        NOT_FOUND_BODY,
    )
        .into_response()
}
