//! Catalog use-case service and form-input validation.
//!
//! # Responsibility
//! - Provide the stable entry points both front ends call on user actions
//!   (save, update, delete, search, list).
//! - Turn raw form input into validated `BookDetails` before persistence.
//!
//! # Invariants
//! - A blank search term means "show everything"; both front ends expect
//!   that from their search box.
//! - Form parsing trims every field and rejects incomplete input before any
//!   repository call.

use crate::model::book::{Book, BookDetails, BookId, BookValidationError, ReleaseDate};
use crate::repo::book_repo::{BookRepository, RepoResult};

/// Raw form fields as captured by a front end, prior to validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub release_date: String,
    pub publisher: String,
    pub price: String,
}

impl BookForm {
    /// Validates and converts raw input into persistable details.
    ///
    /// Every field is trimmed first; all five are required. The price must
    /// read as a finite, non-negative number and the date as a real
    /// `YYYY-MM-DD` calendar date.
    pub fn parse(&self) -> Result<BookDetails, BookValidationError> {
        let title = required_field("title", &self.title)?;
        let author = required_field("author", &self.author)?;
        let date_text = required_field("release_date", &self.release_date)?;
        let publisher = required_field("publisher", &self.publisher)?;
        let price_text = required_field("price", &self.price)?;

        let release_date = ReleaseDate::parse(&date_text)?;
        let price: f64 = price_text
            .parse()
            .map_err(|_| BookValidationError::UnparseablePrice {
                value: price_text.clone(),
            })?;

        let details = BookDetails {
            title,
            author,
            release_date,
            publisher,
            price,
        };
        details.validate()?;
        Ok(details)
    }
}

fn required_field(field: &'static str, value: &str) -> Result<String, BookValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BookValidationError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

/// Use-case façade over the repository contract.
pub struct CatalogService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists already-validated details and returns the assigned id.
    pub fn add_book(&self, details: &BookDetails) -> RepoResult<BookId> {
        self.repo.insert_book(details)
    }

    /// Parses raw form input and persists it as a new book.
    pub fn save_form(&self, form: &BookForm) -> RepoResult<BookId> {
        let details = form.parse()?;
        self.repo.insert_book(&details)
    }

    /// Parses raw form input and replaces the fields of book `id`.
    ///
    /// Returns `Ok(false)` when no row carries that id.
    pub fn update_form(&self, id: BookId, form: &BookForm) -> RepoResult<bool> {
        let details = form.parse()?;
        self.repo.update_book(&Book::from_details(id, details))
    }

    /// Replaces the fields of an existing book.
    pub fn update_book(&self, book: &Book) -> RepoResult<bool> {
        self.repo.update_book(book)
    }

    /// Looks one book up by id.
    pub fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        self.repo.get_book(id)
    }

    /// Lists the whole catalog in the configured order.
    pub fn list_books(&self) -> RepoResult<Vec<Book>> {
        self.repo.list_books()
    }

    /// Searches by title or author substring; a blank term lists everything.
    pub fn search_catalog(&self, term: &str) -> RepoResult<Vec<Book>> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return self.repo.list_books();
        }
        self.repo.search_books(trimmed)
    }

    /// Removes a book; `Ok(false)` when it was already gone.
    pub fn delete_book(&self, id: BookId) -> RepoResult<bool> {
        self.repo.delete_book(id)
    }

    /// Publisher names offered to the form's selection widget.
    pub fn list_publishers(&self) -> RepoResult<Vec<String>> {
        self.repo.list_publishers()
    }
}
