use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::Json;
use clap::Parser;

#[path = "talks_server/static_files.rs"]
mod static_files;
use self::static_files::*;

#[derive(Parser)]
#[command(name = "talks-server")]
#[command(about = "Serve a static talks site directory", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Directory holding index.html and the talk collection
    #[arg(long, default_value = "./site")]
    site_dir: PathBuf,
}

#[derive(Clone)]
struct AppState {
    site_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    talks::logging::init("info");
    let args = Args::parse();

    let site_dir = args
        .site_dir
        .canonicalize()
        .with_context(|| format!("open site dir {}", args.site_dir.display()))?;

    let state = Arc::new(AppState { site_dir });

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(index))
        .route("/*path", get(file))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    tracing::info!(addr = %local_addr, "talks-server listening");

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

async fn index(State(state): State<Arc<AppState>>) -> Response {
    serve_file(&state.site_dir, "index.html").await
}

async fn file(State(state): State<Arc<AppState>>, Path(path): Path<String>) -> Response {
    serve_file(&state.site_dir, &path).await
}
