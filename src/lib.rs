use anyhow::Result;
use axum::{routing::get, Router};
use diesel::sqlite::SqliteConnection;
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::services::ServeDir;
use tracing::info;

pub mod cli;
pub mod config;
mod context;
mod controller;
pub mod error;
pub mod model;
pub mod repo;
mod schema;
pub mod view;

pub use context::{create_context, AppContext};

use config::Config;
use error::FlatbedError;

pub type Connection = SyncConnectionWrapper<SqliteConnection>;

pub struct Flatbed {
    context: AppContext,
    listen_addr: SocketAddr,
}

impl Flatbed {
    pub async fn boot(config: Config) -> Result<Self> {
        let listen_addr = config.listen_addr;
        let context = create_context(&config).await?;

        Ok(Self {
            context,
            listen_addr,
        })
    }

    /// Route surface: the posts listing on `/`, the static about page, and
    /// static assets. Anything else falls through to the 404 handler.
    pub fn router(context: AppContext) -> Router {
        Router::new()
            .route("/", get(controller::home))
            .route("/about", get(controller::about))
            .nest_service("/static", ServeDir::new("static"))
            .fallback(|| async { FlatbedError::NotFound })
            .with_state(context)
    }

    pub async fn serve(self) -> Result<()> {
        let router = Self::router(self.context);

        // Enable livereload for debug builds.
        #[cfg(debug_assertions)]
        let (router, _watcher) = livereload(router)?;

        let listener = tokio::net::TcpListener::bind(self.listen_addr).await?;
        info!("listening on {}", listener.local_addr()?);

        axum::serve(listener, router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(debug_assertions)]
fn livereload(router: Router) -> Result<(Router, notify::RecommendedWatcher)> {
    use notify::Watcher;

    let livereload = tower_livereload::LiveReloadLayer::new();
    let reloader = livereload.reloader();

    let router = router.layer(livereload);

    let mut watcher = notify::recommended_watcher(move |_| reloader.reload())?;
    watcher.watch(
        std::path::Path::new("static"),
        notify::RecursiveMode::Recursive,
    )?;

    Ok((router, watcher))
}
