use std::path::{Component, Path, PathBuf};

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Resolve a request path inside `root`. Absolute paths and any `..` or
/// prefix component are rejected.
pub(super) fn resolve_path(root: &Path, request: &str) -> Option<PathBuf> {
    let rel = Path::new(request.trim_start_matches('/'));
    let mut out = root.to_path_buf();
    for component in rel.components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if out == root {
        return None;
    }
    Some(out)
}

pub(super) fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("json") => "application/json",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "not found\n").into_response()
}

pub(super) async fn serve_file(root: &Path, request: &str) -> Response {
    let Some(path) = resolve_path(root, request) else {
        tracing::debug!(path = request, "rejected path");
        return not_found();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "served");
            ([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response()
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), "not served: {}", err);
            not_found()
        }
    }
}
