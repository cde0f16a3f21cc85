//! HTTP handlers for `/books`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bookshelf_http::{AppError, AppResult};

use super::{
    models::{Book, BookPayload},
    store::BookStore,
    validation::ValidationError,
};

pub type SharedStore = Arc<dyn BookStore>;

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Routes of the books module, relative to its mount point
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(list_books).post(create_book))
        .route(
            "/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .with_state(store)
}

fn decode(payload: Result<Json<BookPayload>, JsonRejection>) -> AppResult<BookPayload> {
    payload
        .map(|Json(payload)| payload)
        .map_err(|rejection| AppError::bad_request(rejection.body_text()))
}

async fn list_books(State(store): State<SharedStore>) -> AppResult<Json<Vec<Book>>> {
    let books = store.find_all().await?;
    Ok(Json(books))
}

async fn get_book(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> AppResult<Json<Book>> {
    store
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound)
}

async fn create_book(
    State(store): State<SharedStore>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> AppResult<Json<Book>> {
    // The store assigns the id; whatever the client sent is dropped here.
    let book = decode(payload)?.into_book(None)?;
    let saved = store.save(book).await?;

    tracing::info!(book_id = ?saved.id, "book created");
    Ok(Json(saved))
}

async fn update_book(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> AppResult<Json<Book>> {
    // A bad body is rejected before the lookup, even for unknown ids.
    let payload = decode(payload)?;
    super::validation::validate(&payload)?;

    let mut book = store.find_by_id(id).await?.ok_or(AppError::NotFound)?;
    book.apply(payload);
    let saved = store.save(book).await?;

    tracing::info!(book_id = id, "book updated");
    Ok(Json(saved))
}

async fn delete_book(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let book = store.find_by_id(id).await?.ok_or(AppError::NotFound)?;
    store.delete(&book).await?;

    tracing::info!(book_id = id, "book deleted");
    Ok(StatusCode::NO_CONTENT)
}
