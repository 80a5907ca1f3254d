// SqliteDatabase: rusqlite backend implementing the Database trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Sync.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::{BatchOutcome, FeedState, NewArticle, StoredArticle};
use super::queries;
use super::traits::Database;

pub struct SqliteDatabase {
    conn: Mutex<Connection>,
}

impl SqliteDatabase {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn article_exists(&self, link: &str) -> Result<bool> {
        let conn = self.conn.lock().await;
        queries::article_exists(&conn, link)
    }

    async fn store_feed_articles(&self, articles: &[NewArticle]) -> Result<BatchOutcome> {
        let mut conn = self.conn.lock().await;
        queries::store_feed_articles(&mut conn, articles)
    }

    async fn article_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        queries::article_count(&conn)
    }

    async fn category_counts(&self) -> Result<Vec<(String, i64)>> {
        let conn = self.conn.lock().await;
        queries::category_counts(&conn)
    }

    async fn recent_articles(
        &self,
        category: Option<&str>,
        limit: u32,
    ) -> Result<Vec<StoredArticle>> {
        let conn = self.conn.lock().await;
        queries::recent_articles(&conn, category, limit)
    }

    async fn set_feed_state(
        &self,
        feed_url: &str,
        status: &str,
        articles_added: i64,
    ) -> Result<()> {
        let conn = self.conn.lock().await;
        queries::set_feed_state(&conn, feed_url, status, articles_added)
    }

    async fn get_all_feed_state(&self) -> Result<Vec<FeedState>> {
        let conn = self.conn.lock().await;
        queries::get_all_feed_state(&conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::create_tables;

    fn test_db() -> SqliteDatabase {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        SqliteDatabase::new(conn)
    }

    fn article(link: &str) -> NewArticle {
        NewArticle {
            title: "t".to_string(),
            link: link.to_string(),
            description: "d".to_string(),
            published_date: None,
            category: "Others".to_string(),
            feed_url: "https://feed".to_string(),
        }
    }

    #[tokio::test]
    async fn test_trait_store_and_count() {
        let db = test_db();
        let outcome = db
            .store_feed_articles(&[article("https://a"), article("https://b")])
            .await
            .unwrap();
        assert_eq!(outcome.inserted, 2);
        assert_eq!(db.article_count().await.unwrap(), 2);
        assert!(db.article_exists("https://a").await.unwrap());
        assert_eq!(db.table_count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_trait_feed_state_roundtrip() {
        let db = test_db();
        assert!(db.get_all_feed_state().await.unwrap().is_empty());
        db.set_feed_state("https://feed", "ok", 5).await.unwrap();
        let states = db.get_all_feed_state().await.unwrap();
        assert_eq!(states[0].articles_added, 5);
    }

    #[tokio::test]
    async fn test_shared_behind_arc() {
        let db: std::sync::Arc<dyn Database> = std::sync::Arc::new(test_db());
        db.store_feed_articles(&[article("https://a")]).await.unwrap();
        let counts = db.category_counts().await.unwrap();
        assert_eq!(counts, vec![("Others".to_string(), 1)]);
    }
}
