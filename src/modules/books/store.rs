//! Storage capability for books and its SQLite adapter.

use async_trait::async_trait;
use bookshelf_db::DbPool;
use bookshelf_http::AppError;
use thiserror::Error;

use super::models::Book;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),

    /// An overwrite targeted a row that no longer exists
    #[error("book {0} not found")]
    NotFound(i64),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound,
            other => AppError::Internal(other.into()),
        }
    }
}

/// Keyed record store the handlers delegate to.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Every stored book, in store order
    async fn find_all(&self) -> Result<Vec<Book>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, StoreError>;

    /// Number of stored books
    async fn count(&self) -> Result<i64, StoreError>;

    /// Insert when `book.id` is `None` (the store assigns the id),
    /// otherwise overwrite the row with that id. Returns the stored record.
    /// Overwriting a row that is gone fails with `StoreError::NotFound`;
    /// it never recreates it.
    async fn save(&self, book: Book) -> Result<Book, StoreError>;

    /// Remove the record. Records without an id were never stored.
    async fn delete(&self, book: &Book) -> Result<(), StoreError>;
}

/// `BookStore` backed by the `books` table
#[derive(Clone)]
pub struct SqlBookStore {
    pool: DbPool,
}

impl SqlBookStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for SqlBookStore {
    async fn find_all(&self) -> Result<Vec<Book>, StoreError> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, genre, price FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, StoreError> {
        let row = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, genre, price FROM books WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn save(&self, book: Book) -> Result<Book, StoreError> {
        let saved = match book.id {
            None => {
                sqlx::query_as::<_, Book>(
                    r#"
                    INSERT INTO books (title, author, genre, price)
                    VALUES (?1, ?2, ?3, ?4)
                    RETURNING id, title, author, genre, price
                    "#,
                )
                .bind(&book.title)
                .bind(&book.author)
                .bind(&book.genre)
                .bind(book.price)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => sqlx::query_as::<_, Book>(
                r#"
                    UPDATE books
                    SET title = ?1, author = ?2, genre = ?3, price = ?4
                    WHERE id = ?5
                    RETURNING id, title, author, genre, price
                    "#,
            )
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.genre)
            .bind(book.price)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))?,
        };
        Ok(saved)
    }

    async fn delete(&self, book: &Book) -> Result<(), StoreError> {
        let Some(id) = book.id else {
            return Ok(());
        };
        sqlx::query("DELETE FROM books WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
