//! HTTP handlers for the `/books` resource.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use bookshelf_http::{error::AppError, extract::JsonBody, response::ApiResponse};
use tokio::sync::RwLock;

use super::collection::BookCollection;
use super::models::{BookCreated, BookDetail, BookError, BookList, BookPayload};

/// Collection shared by every handler; writers take the lock exclusively.
pub type SharedBooks = Arc<RwLock<BookCollection>>;

/// Which operation failed, used to phrase the failure message
#[derive(Debug, Clone, Copy)]
enum Action {
    Add,
    Get,
    Update,
    Delete,
}

impl Action {
    fn failure_prefix(self) -> &'static str {
        match self {
            Action::Add => "Failed to add book",
            Action::Get => "Failed to get book",
            Action::Update => "Failed to update book",
            Action::Delete => "Failed to delete book",
        }
    }

    fn reject(self, error: BookError) -> AppError {
        match (self, error) {
            (Action::Get, BookError::NotFound) => AppError::not_found("Book not found"),
            (_, BookError::NotFound) => {
                AppError::not_found(format!("{}. {}", self.failure_prefix(), error))
            }
            (_, BookError::MissingName | BookError::ReadPageExceedsPageCount) => {
                AppError::validation(format!("{}. {}", self.failure_prefix(), error))
            }
        }
    }
}

pub fn router(books: SharedBooks) -> Router {
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route(
            "/books/{book_id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .with_state(books)
}

async fn add_book(
    State(books): State<SharedBooks>,
    JsonBody(payload): JsonBody<BookPayload>,
) -> Result<ApiResponse<BookCreated>, AppError> {
    let book_id = books
        .write()
        .await
        .create(payload)
        .map_err(|e| Action::Add.reject(e))?;

    tracing::info!(book_id = %book_id, "book added");
    Ok(ApiResponse::created(BookCreated { book_id }).with_message("Book added successfully"))
}

async fn list_books(State(books): State<SharedBooks>) -> ApiResponse<BookList> {
    let books = books.read().await.list();
    ApiResponse::ok(BookList { books })
}

async fn get_book(
    State(books): State<SharedBooks>,
    Path(book_id): Path<String>,
) -> Result<ApiResponse<BookDetail>, AppError> {
    let book = books
        .read()
        .await
        .get(&book_id)
        .cloned()
        .map_err(|e| Action::Get.reject(e))?;

    Ok(ApiResponse::ok(BookDetail { book }))
}

async fn update_book(
    State(books): State<SharedBooks>,
    Path(book_id): Path<String>,
    JsonBody(payload): JsonBody<BookPayload>,
) -> Result<ApiResponse, AppError> {
    books
        .write()
        .await
        .update(&book_id, payload)
        .map_err(|e| Action::Update.reject(e))?;

    tracing::info!(book_id = %book_id, "book updated");
    Ok(ApiResponse::message("Book updated successfully"))
}

async fn delete_book(
    State(books): State<SharedBooks>,
    Path(book_id): Path<String>,
) -> Result<ApiResponse, AppError> {
    books
        .write()
        .await
        .delete(&book_id)
        .map_err(|e| Action::Delete.reject(e))?;

    tracing::info!(book_id = %book_id, "book deleted");
    Ok(ApiResponse::message("Book deleted successfully"))
}
