//! Ordered in-memory book collection.

use time::OffsetDateTime;
use uuid::Uuid;

use super::models::{Book, BookError, BookPayload, BookSummary};

/// Books in insertion order. Lookups are linear scans by id.
#[derive(Debug, Default)]
pub struct BookCollection {
    books: Vec<Book>,
}

impl BookCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Validate and append a new book, returning its id.
    pub fn create(&mut self, payload: BookPayload) -> Result<String, BookError> {
        let details = payload.validate()?;
        let id = Uuid::now_v7().to_string();

        let book = Book::new(id.clone(), details, OffsetDateTime::now_utc());
        self.books.push(book);
        Ok(id)
    }

    pub fn list(&self) -> Vec<BookSummary> {
        self.books.iter().map(Book::summary_view).collect()
    }

    pub fn get(&self, id: &str) -> Result<&Book, BookError> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .ok_or(BookError::NotFound)
    }

    /// Replace the mutable fields of `id`. An unknown id wins over an invalid payload.
    pub fn update(&mut self, id: &str, payload: BookPayload) -> Result<&Book, BookError> {
        let book = self
            .books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(BookError::NotFound)?;

        let details = payload.validate()?;
        book.apply(details, OffsetDateTime::now_utc());
        Ok(&*book)
    }

    pub fn delete(&mut self, id: &str) -> Result<Book, BookError> {
        let index = self
            .books
            .iter()
            .position(|book| book.id == id)
            .ok_or(BookError::NotFound)?;

        Ok(self.books.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, page_count: u32, read_page: u32) -> BookPayload {
        BookPayload {
            name: Some(name.to_string()),
            publisher: Some("Ace".to_string()),
            page_count,
            read_page,
            ..BookPayload::default()
        }
    }

    #[test]
    fn create_appends_with_unique_ids() {
        let mut books = BookCollection::new();
        let first = books.create(payload("Dune", 412, 0)).unwrap();
        let second = books.create(payload("Emma", 300, 300)).unwrap();

        assert_ne!(first, second);
        assert_eq!(books.len(), 2);
        assert_eq!(books.list()[0].id, first);
        assert_eq!(books.list()[1].id, second);
    }

    #[test]
    fn create_sets_finished_and_timestamps() {
        let mut books = BookCollection::new();
        let id = books.create(payload("Emma", 300, 300)).unwrap();
        let book = books.get(&id).unwrap();

        assert!(book.finished);
        assert_eq!(book.inserted_at, book.updated_at);
    }

    #[test]
    fn invalid_create_leaves_collection_untouched() {
        let mut books = BookCollection::new();
        assert_eq!(
            books.create(payload("Dune", 10, 11)),
            Err(BookError::ReadPageExceedsPageCount)
        );
        assert_eq!(
            books.create(BookPayload::default()),
            Err(BookError::MissingName)
        );
        assert!(books.is_empty());
    }

    #[test]
    fn list_projects_summary_fields() {
        let mut books = BookCollection::new();
        let id = books.create(payload("Dune", 412, 0)).unwrap();

        assert_eq!(
            books.list(),
            vec![BookSummary {
                id,
                name: "Dune".to_string(),
                publisher: Some("Ace".to_string()),
            }]
        );
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let books = BookCollection::new();
        assert_eq!(books.get("missing"), Err(BookError::NotFound));
    }

    #[test]
    fn update_replaces_fields_and_keeps_identity() {
        let mut books = BookCollection::new();
        let id = books.create(payload("Dune", 412, 0)).unwrap();
        books.create(payload("Emma", 300, 0)).unwrap();
        let inserted_at = books.get(&id).unwrap().inserted_at;

        let updated = books
            .update(
                &id,
                BookPayload {
                    name: Some("Dune Messiah".to_string()),
                    page_count: 256,
                    read_page: 256,
                    reading: true,
                    ..BookPayload::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Dune Messiah");
        assert_eq!(updated.publisher, None);
        assert!(updated.finished);
        assert!(updated.reading);
        assert_eq!(updated.inserted_at, inserted_at);
        assert!(updated.updated_at >= inserted_at);
        assert_eq!(books.list()[0].id, id);
    }

    #[test]
    fn update_checks_existence_before_payload() {
        let mut books = BookCollection::new();
        assert_eq!(
            books.update("missing", BookPayload::default()).map(|b| b.id.clone()),
            Err(BookError::NotFound)
        );
    }

    #[test]
    fn invalid_update_keeps_previous_state() {
        let mut books = BookCollection::new();
        let id = books.create(payload("Dune", 412, 10)).unwrap();

        assert_eq!(
            books.update(&id, payload("Dune", 412, 500)).map(|b| b.id.clone()),
            Err(BookError::ReadPageExceedsPageCount)
        );
        assert_eq!(books.get(&id).unwrap().read_page, 10);
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut books = BookCollection::new();
        let keep = books.create(payload("Dune", 412, 0)).unwrap();
        let gone = books.create(payload("Emma", 300, 0)).unwrap();

        let removed = books.delete(&gone).unwrap();
        assert_eq!(removed.id, gone);
        assert_eq!(books.len(), 1);
        assert!(books.get(&keep).is_ok());
        assert_eq!(books.delete(&gone), Err(BookError::NotFound));
    }
}
