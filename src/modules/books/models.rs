use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

/// A stored book record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Server-generated identifier
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
    /// `true` once `read_page` reaches `page_count`
    pub finished: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub inserted_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Book {
    pub(crate) fn new(id: String, details: BookDetails, now: OffsetDateTime) -> Self {
        let mut book = Self {
            id,
            name: String::new(),
            year: None,
            author: None,
            summary: None,
            publisher: None,
            page_count: 0,
            read_page: 0,
            reading: false,
            finished: false,
            inserted_at: now,
            updated_at: now,
        };
        book.apply(details, now);
        book
    }

    /// Replace every mutable field; `id` and `inserted_at` are kept.
    pub(crate) fn apply(&mut self, details: BookDetails, now: OffsetDateTime) {
        self.finished = details.page_count == details.read_page;
        self.name = details.name;
        self.year = details.year;
        self.author = details.author;
        self.summary = details.summary;
        self.publisher = details.publisher;
        self.page_count = details.page_count;
        self.read_page = details.read_page;
        self.reading = details.reading;
        self.updated_at = now;
    }

    pub fn summary_view(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// Request body for creating or replacing a book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub read_page: u32,
    #[serde(default)]
    pub reading: bool,
}

impl BookPayload {
    /// Check the payload; the name is checked before the page counts.
    pub fn validate(self) -> Result<BookDetails, BookError> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(BookError::MissingName),
        };

        if self.read_page > self.page_count {
            return Err(BookError::ReadPageExceedsPageCount);
        }

        Ok(BookDetails {
            name,
            year: self.year,
            author: self.author,
            summary: self.summary,
            publisher: self.publisher,
            page_count: self.page_count,
            read_page: self.read_page,
            reading: self.reading,
        })
    }
}

/// Validated mutable fields of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetails {
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

/// List projection of a book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

/// `data` of a successful create.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookCreated {
    pub book_id: String,
}

/// `data` of the list route.
#[derive(Debug, Clone, Serialize)]
pub struct BookList {
    pub books: Vec<BookSummary>,
}

/// `data` of the detail route.
#[derive(Debug, Clone, Serialize)]
pub struct BookDetail {
    pub book: Book,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BookError {
    #[error("Please provide the book name")]
    MissingName,
    #[error("readPage must not be greater than pageCount")]
    ReadPageExceedsPageCount,
    #[error("Id not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> BookPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_or_empty_name_is_rejected() {
        assert_eq!(
            payload(json!({"pageCount": 10})).validate(),
            Err(BookError::MissingName)
        );
        assert_eq!(
            payload(json!({"name": "", "pageCount": 10})).validate(),
            Err(BookError::MissingName)
        );
    }

    #[test]
    fn name_is_checked_before_page_counts() {
        assert_eq!(
            payload(json!({"pageCount": 1, "readPage": 5})).validate(),
            Err(BookError::MissingName)
        );
    }

    #[test]
    fn read_page_beyond_page_count_is_rejected() {
        assert_eq!(
            payload(json!({"name": "Dune", "pageCount": 100, "readPage": 101})).validate(),
            Err(BookError::ReadPageExceedsPageCount)
        );
    }

    #[test]
    fn absent_counts_default_to_zero() {
        let details = payload(json!({"name": "Dune"})).validate().unwrap();
        assert_eq!(details.page_count, 0);
        assert_eq!(details.read_page, 0);
        assert!(!details.reading);
    }

    #[test]
    fn finished_tracks_page_counts() {
        let now = OffsetDateTime::now_utc();
        let details = payload(json!({"name": "Dune", "pageCount": 412, "readPage": 412}))
            .validate()
            .unwrap();
        let mut book = Book::new("b1".to_string(), details, now);
        assert!(book.finished);

        let details = payload(json!({"name": "Dune", "pageCount": 412, "readPage": 40}))
            .validate()
            .unwrap();
        book.apply(details, now);
        assert!(!book.finished);
    }

    #[test]
    fn book_serializes_in_camel_case() {
        let now = OffsetDateTime::UNIX_EPOCH;
        let details = payload(json!({
            "name": "Dune",
            "year": 1965,
            "publisher": "Chilton",
            "pageCount": 412,
            "readPage": 12,
            "reading": true
        }))
        .validate()
        .unwrap();
        let value = serde_json::to_value(Book::new("b1".to_string(), details, now)).unwrap();

        assert_eq!(value["pageCount"], 412);
        assert_eq!(value["readPage"], 12);
        assert_eq!(value["finished"], false);
        assert_eq!(value["author"], serde_json::Value::Null);
        assert_eq!(value["insertedAt"], "1970-01-01T00:00:00Z");
        assert_eq!(value["insertedAt"], value["updatedAt"]);
    }
}
