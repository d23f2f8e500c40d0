use anyhow::Result;
use diesel::sqlite::SqliteConnection;
use diesel::Connection as _;
use diesel_async::pooled_connection::deadpool::Pool;
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::{AsyncConnection, SimpleAsyncConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use futures::FutureExt;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::model::{CreatePost, Post};
use crate::repo::{DatabasePosts, PostRepository};
use crate::Connection;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Per-process state handed to the router. Handlers only ever see the
/// repository capability; the pool lives inside it.
#[derive(Clone)]
pub struct AppContext {
    pub posts: Arc<dyn PostRepository>,
}

pub async fn create_context(config: &Config) -> Result<AppContext> {
    run_migrations(&config.database_url)?;

    let mut manager_config = ManagerConfig::default();
    manager_config.custom_setup = Box::new(|url| {
        async {
            let mut conn = SyncConnectionWrapper::<SqliteConnection>::establish(url).await?;

            let query = "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
            PRAGMA busy_timeout = 30000;
            ";
            conn.batch_execute(query)
                .await
                .map_err(diesel::ConnectionError::CouldntSetupConfiguration)?;

            Ok(conn)
        }
        .boxed()
    });

    let manager = AsyncDieselConnectionManager::<Connection>::new_with_config(
        &config.database_url,
        manager_config,
    );

    let database = Pool::builder(manager)
        .max_size(config.database_pool_size)
        .build()?;

    seed_demo_posts(&database).await?;

    Ok(AppContext {
        posts: Arc::new(DatabasePosts::new(database)),
    })
}

fn run_migrations(database_url: &str) -> Result<()> {
    let mut conn = SqliteConnection::establish(database_url)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("running migrations: {e}"))?;

    Ok(())
}

/// A fresh database starts with a handful of fake posts so the listing has
/// something to show.
async fn seed_demo_posts(database: &Pool<Connection>) -> Result<()> {
    let mut conn = database.get().await?;

    if !Post::list(&mut conn).await?.is_empty() {
        return Ok(());
    }

    for _ in 0..5 {
        let post = Post::fake();
        CreatePost::new(&post.title, &post.content)
            .save(&mut conn)
            .await?;
        info!("seeded demo post: {}", post.title);
    }

    Ok(())
}
