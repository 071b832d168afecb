//! Web server module for groverweb.
//!
//! Hosts the single-page Grover animation demo: bootstraps the on-disk
//! asset layout, compiles the template set, then serves `GET /` plus the
//! `/static` asset tree until the process is terminated.
//!
use std::io;
use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::services::ServeDir;

use crate::{config::CONFIG, templates};

/// Application state shared by request handlers
pub(crate) struct AppState {
    /// Compiled template set
    pub(crate) templates: RwLock<tera::Tera>,
    /// Re-read templates from disk before each render
    pub(crate) reload: bool,
}

/// Start the web server after bootstrapping the asset layout
///
/// Exits the process with a message, before binding the socket, when the
/// template set cannot be compiled. Infrastructure faults (directory
/// creation, port binding) panic as-is.
pub async fn run() {
    let base = CONFIG.base_dir.clone();

    ensure_asset_dirs(&base).unwrap();

    let tera = match templates::load(&base) {
        Ok(tera) => tera,
        Err(err) => {
            eprintln!(
                "❌ Could not compile the templates under {}: {}",
                base.join("templates").display(),
                err
            );
            eprintln!("   Fix or restore the template files, then start the server again.");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState {
        templates: RwLock::new(tera),
        reload: CONFIG.debug,
    });

    let addr = format!("{}:{}", CONFIG.host, CONFIG.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    println!("🚀 Grover animation demo on http://{}", addr);

    axum::serve(listener, app(state, &base)).await.unwrap();
}

/// Create (if missing) the template and static asset directories
pub(crate) fn ensure_asset_dirs(base: &Path) -> io::Result<()> {
    std::fs::create_dir_all(base.join("templates"))?;
    std::fs::create_dir_all(base.join("static").join("js"))?;
    std::fs::create_dir_all(base.join("static").join("css"))?;
    Ok(())
}

/// Build the router: the index route plus the static asset tree
pub(crate) fn app(state: Arc<AppState>, base: &Path) -> Router {
    Router::new()
        .route("/", get(index_page))
        .nest_service("/static", ServeDir::new(base.join("static")))
        .with_state(state)
}

/// Render and serve the Grover animation page
async fn index_page(State(state): State<Arc<AppState>>) -> Response {
    if state.reload {
        if let Err(err) = state.templates.write().await.full_reload() {
            return render_failure(err);
        }
    }

    let tera = state.templates.read().await;
    match templates::render_index(&tera) {
        Ok(body) => Html(body).into_response(),
        Err(err) => render_failure(err),
    }
}

/// Map a template failure to a plain 500 response
fn render_failure(err: tera::Error) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("template error: {err}"),
    )
        .into_response()
}
