use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::{Dummy, Fake, Faker};

use crate::schema::post;
use crate::Connection;

#[derive(Clone, Debug, PartialEq, Dummy, Queryable, Identifiable, Selectable)]
#[diesel(table_name = post)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Post {
    #[dummy(expr = "0")]
    pub id: i32,
    #[dummy(faker = "Sentence(3..8)")]
    pub title: String,
    #[dummy(faker = "Paragraph(2..6)")]
    pub content: String,
    #[dummy(expr = "Utc::now()")]
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn fake() -> Self {
        Faker.fake()
    }

    /// Every post, newest first. Empty is fine.
    pub async fn list(conn: &mut Connection) -> QueryResult<Vec<Self>> {
        post::table
            .select(Self::as_select())
            .order_by(post::created_at.desc())
            .load(conn)
            .await
    }

    pub async fn find(id: i32, conn: &mut Connection) -> QueryResult<Self> {
        post::table
            .find(id)
            .select(Self::as_select())
            .first(conn)
            .await
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = post)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CreatePost<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub created_at: DateTime<Utc>,
}

impl<'a> CreatePost<'a> {
    pub fn new(title: &'a str, content: &'a str) -> Self {
        Self {
            title,
            content,
            created_at: Utc::now(),
        }
    }

    pub async fn save(&self, conn: &mut Connection) -> QueryResult<Post> {
        diesel::insert_into(post::table)
            .values(self)
            .returning(Post::as_returning())
            .get_result(conn)
            .await
    }
}

#[cfg(test)]
mod tests {
    use diesel_async::{AsyncConnection, SimpleAsyncConnection};

    use super::*;

    const CREATE_POST_TABLE: &str =
        include_str!("../../migrations/2025-08-20-000000_create_post/up.sql");

    async fn test_connection() -> Connection {
        let mut conn = Connection::establish(":memory:").await.unwrap();
        conn.batch_execute(CREATE_POST_TABLE).await.unwrap();

        conn
    }

    #[tokio::test]
    async fn list_returns_posts_newest_first() {
        let mut conn = test_connection().await;

        CreatePost {
            title: "older",
            content: "first words",
            created_at: Utc::now() - chrono::Duration::minutes(5),
        }
        .save(&mut conn)
        .await
        .unwrap();
        CreatePost::new("newer", "latest words")
            .save(&mut conn)
            .await
            .unwrap();

        let posts = Post::list(&mut conn).await.unwrap();

        let titles: Vec<_> = posts.iter().map(|post| post.title.as_str()).collect();
        assert_eq!(titles, ["newer", "older"]);
    }

    #[tokio::test]
    async fn list_on_an_empty_table_is_empty() {
        let mut conn = test_connection().await;

        assert!(Post::list(&mut conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_loads_a_saved_post() {
        let mut conn = test_connection().await;

        let saved = CreatePost::new("hello", "some words")
            .save(&mut conn)
            .await
            .unwrap();

        let found = Post::find(saved.id, &mut conn).await.unwrap();

        assert_eq!(found.id, saved.id);
        assert_eq!(found.title, "hello");
        assert_eq!(found.content, "some words");
    }
}
