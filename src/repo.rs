use anyhow::Result;
use diesel_async::pooled_connection::deadpool::Pool;

use crate::model::Post;
use crate::Connection;

/// Read access to persisted posts. Injected into the context so handlers
/// can be exercised against a test double.
#[async_trait::async_trait]
pub trait PostRepository: Send + Sync {
    /// Every post, newest first. Must return an empty Vec rather than any
    /// kind of "missing" value when there are no posts.
    async fn posts(&self) -> Result<Vec<Post>>;
}

pub struct DatabasePosts {
    pool: Pool<Connection>,
}

impl DatabasePosts {
    pub fn new(pool: Pool<Connection>) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PostRepository for DatabasePosts {
    async fn posts(&self) -> Result<Vec<Post>> {
        let mut conn = self.pool.get().await?;

        Ok(Post::list(&mut conn).await?)
    }
}
