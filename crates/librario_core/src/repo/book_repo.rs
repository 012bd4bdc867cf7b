//! Book repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and substring-search APIs over the `books` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Search terms are matched literally; `%`, `_` and `\` carry no wildcard
//!   meaning.

use crate::config::{CatalogConfig, ListOrder, PublisherPolicy};
use crate::db::schema::DEFAULT_PUBLISHERS;
use crate::db::DbError;
use crate::model::book::{Book, BookDetails, BookId, BookValidationError, ReleaseDate};
use rusqlite::{params, Connection, Row, Rows};
use std::error::Error;
use std::fmt::{Display, Formatter};

const BOOK_SELECT_SQL: &str =
    "SELECT id, title, author, release_date, publisher, price FROM books";

const BOOK_COLUMNS: &[&str] = &["id", "title", "author", "release_date", "publisher", "price"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for book persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(BookValidationError),
    Db(DbError),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted book data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "store is missing required table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "store is missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<BookValidationError> for RepoError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Statement(value))
    }
}

/// Repository interface for book CRUD and search operations.
pub trait BookRepository {
    /// Persists a new book and returns the store-assigned id.
    fn insert_book(&self, details: &BookDetails) -> RepoResult<BookId>;
    /// Returns every book in the configured deterministic order.
    fn list_books(&self) -> RepoResult<Vec<Book>>;
    /// Exact primary-key lookup; `None` when the id is absent.
    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>>;
    /// Case-insensitive literal substring match over title or author.
    fn search_books(&self, term: &str) -> RepoResult<Vec<Book>>;
    /// Replaces the five business fields of the row with `book.id`.
    ///
    /// Returns `Ok(false)` when no row carries that id.
    fn update_book(&self, book: &Book) -> RepoResult<bool>;
    /// Physically removes one row; `Ok(false)` when it was already gone.
    fn delete_book(&self, id: BookId) -> RepoResult<bool>;
    /// Publisher names in alphabetical order, per the configured policy.
    fn list_publishers(&self) -> RepoResult<Vec<String>>;
}

/// SQLite-backed book repository.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
    config: CatalogConfig,
}

impl<'conn> SqliteBookRepository<'conn> {
    /// Constructs a repository over a bootstrapped connection.
    ///
    /// Fails when the tables the configured policy depends on are absent,
    /// so queries can never run against an uninitialized store.
    pub fn try_new(conn: &'conn Connection, config: CatalogConfig) -> RepoResult<Self> {
        ensure_connection_ready(conn, &config)?;
        Ok(Self { conn, config })
    }

    fn order_clause(&self) -> &'static str {
        match self.config.list_order {
            ListOrder::TitleAsc => " ORDER BY title ASC, id ASC",
            ListOrder::NewestFirst => " ORDER BY id DESC",
        }
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn insert_book(&self, details: &BookDetails) -> RepoResult<BookId> {
        details.validate()?;

        self.conn.execute(
            "INSERT INTO books (title, author, release_date, publisher, price)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                details.title.as_str(),
                details.author.as_str(),
                details.release_date.to_string(),
                details.publisher.as_str(),
                details.price,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_books(&self) -> RepoResult<Vec<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL}{};", self.order_clause()))?;
        let mut rows = stmt.query([])?;
        collect_books(&mut rows)
    }

    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_book_row(row)?));
        }

        Ok(None)
    }

    fn search_books(&self, term: &str) -> RepoResult<Vec<Book>> {
        let pattern = format!("%{}%", escape_like_pattern(term));
        let mut stmt = self.conn.prepare(&format!(
            "{BOOK_SELECT_SQL}
             WHERE title LIKE ?1 ESCAPE '\\'
                OR author LIKE ?1 ESCAPE '\\'{};",
            self.order_clause()
        ))?;

        let mut rows = stmt.query([pattern.as_str()])?;
        collect_books(&mut rows)
    }

    fn update_book(&self, book: &Book) -> RepoResult<bool> {
        book.validate()?;

        let changed = self.conn.execute(
            "UPDATE books
             SET title = ?1, author = ?2, release_date = ?3, publisher = ?4, price = ?5
             WHERE id = ?6;",
            params![
                book.title.as_str(),
                book.author.as_str(),
                book.release_date.to_string(),
                book.publisher.as_str(),
                book.price,
                book.id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete_book(&self, id: BookId) -> RepoResult<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM books WHERE id = ?1;", [id])?;
        Ok(deleted > 0)
    }

    fn list_publishers(&self) -> RepoResult<Vec<String>> {
        match self.config.publisher_policy {
            PublisherPolicy::Reference => {
                let mut stmt = self
                    .conn
                    .prepare("SELECT name FROM publishers ORDER BY name ASC;")?;
                let mut rows = stmt.query([])?;
                let mut names = Vec::new();
                while let Some(row) = rows.next()? {
                    names.push(row.get(0)?);
                }
                Ok(names)
            }
            PublisherPolicy::FreeText => {
                let mut names: Vec<String> = DEFAULT_PUBLISHERS
                    .iter()
                    .map(|name| (*name).to_string())
                    .collect();
                names.sort();
                Ok(names)
            }
        }
    }
}

/// Escapes `%`, `_` and the escape character itself, so a term is matched
/// literally under `LIKE ... ESCAPE '\'`. A book titled `100% Wool` must
/// stay findable by the text `100%`.
fn escape_like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn collect_books(rows: &mut Rows<'_>) -> RepoResult<Vec<Book>> {
    let mut books = Vec::new();
    while let Some(row) = rows.next()? {
        books.push(parse_book_row(row)?);
    }
    Ok(books)
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    let date_text: String = row.get("release_date")?;
    let release_date = ReleaseDate::parse(&date_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid release date `{date_text}` in books.release_date"
        ))
    })?;

    let book = Book {
        id: row.get("id")?,
        title: row.get("title")?,
        author: row.get("author")?,
        release_date,
        publisher: row.get("publisher")?,
        price: row.get("price")?,
    };
    book.validate()?;
    Ok(book)
}

fn ensure_connection_ready(conn: &Connection, config: &CatalogConfig) -> RepoResult<()> {
    if !table_exists(conn, "books")? {
        return Err(RepoError::MissingRequiredTable("books"));
    }
    for column in BOOK_COLUMNS.iter().copied() {
        if !table_has_column(conn, "books", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "books",
                column,
            });
        }
    }

    if config.publisher_policy == PublisherPolicy::Reference {
        if !table_exists(conn, "publishers")? {
            return Err(RepoError::MissingRequiredTable("publishers"));
        }
        if !table_has_column(conn, "publishers", "name")? {
            return Err(RepoError::MissingRequiredColumn {
                table: "publishers",
                column: "name",
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
