use serde::{Deserialize, Serialize};

use super::validation::{validate, ValidationError};

/// A stored book record.
///
/// `id` is `None` only before the record is first persisted; the store
/// assigns it and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub price: f64,
}

impl Book {
    /// Overwrite every mutable field with the payload's values.
    /// The payload must already have passed validation.
    pub fn apply(&mut self, payload: BookPayload) {
        self.title = payload.title.unwrap_or_default();
        self.author = payload.author.unwrap_or_default();
        self.genre = payload.genre;
        self.price = payload.price;
    }
}

/// Incoming create/update body.
///
/// Every field may be absent so that a missing title or author reaches
/// validation instead of failing JSON decoding. A missing `price` reads as 0.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookPayload {
    /// Accepted for shape compatibility; never used for assignment
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub price: f64,
}

impl BookPayload {
    /// Validate the payload and turn it into a record carrying `id`
    pub fn into_book(self, id: Option<i64>) -> Result<Book, ValidationError> {
        validate(&self)?;

        Ok(Book {
            id,
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            genre: self.genre,
            price: self.price,
        })
    }
}
