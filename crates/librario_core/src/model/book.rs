//! Book domain model.
//!
//! # Responsibility
//! - Define the catalog record and its id-less insert shape.
//! - Enforce field invariants before any row reaches the store.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused for another book.
//! - Title, author and publisher are non-blank; price is finite and `>= 0`.
//! - `ReleaseDate` only holds real calendar dates.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned row identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookId = i64;

static RELEASE_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid release date regex"));

/// Validation error for book fields and raw form input.
#[derive(Debug, Clone, PartialEq)]
pub enum BookValidationError {
    /// A required text field is blank.
    EmptyField { field: &'static str },
    /// The release date is not a real `YYYY-MM-DD` calendar date.
    InvalidReleaseDate { value: String },
    /// The raw price input could not be read as a number.
    UnparseablePrice { value: String },
    /// The price is NaN or infinite.
    NonFinitePrice,
    /// The price is below zero.
    NegativePrice { price: f64 },
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} is required"),
            Self::InvalidReleaseDate { value } => {
                write!(f, "invalid release date `{value}`; expected YYYY-MM-DD")
            }
            Self::UnparseablePrice { value } => {
                write!(f, "invalid price `{value}`; expected a number")
            }
            Self::NonFinitePrice => write!(f, "price must be a finite number"),
            Self::NegativePrice { price } => {
                write!(f, "price must not be negative, got {price}")
            }
        }
    }
}

impl Error for BookValidationError {}

/// Calendar date a book was released, kept in `YYYY-MM-DD` text form in the
/// store.
///
/// Construction is validating, so an in-memory value is always a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReleaseDate {
    year: i32,
    month: u8,
    day: u8,
}

impl ReleaseDate {
    /// Builds a date from components, rejecting impossible calendar dates.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, BookValidationError> {
        let valid = (1..=9999).contains(&year)
            && (1..=12).contains(&month)
            && day >= 1
            && day <= days_in_month(year, month);
        if !valid {
            return Err(BookValidationError::InvalidReleaseDate {
                value: format!("{year:04}-{month:02}-{day:02}"),
            });
        }
        Ok(Self { year, month, day })
    }

    /// Parses the `YYYY-MM-DD` text form used by the store and both front
    /// ends.
    pub fn parse(value: &str) -> Result<Self, BookValidationError> {
        let invalid = || BookValidationError::InvalidReleaseDate {
            value: value.to_string(),
        };

        let captures = RELEASE_DATE_RE.captures(value.trim()).ok_or_else(invalid)?;
        let year: i32 = captures[1].parse().map_err(|_| invalid())?;
        let month: u8 = captures[2].parse().map_err(|_| invalid())?;
        let day: u8 = captures[3].parse().map_err(|_| invalid())?;

        Self::new(year, month, day).map_err(|_| invalid())
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u8 {
        self.month
    }

    pub fn day(self) -> u8 {
        self.day
    }
}

impl Display for ReleaseDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for ReleaseDate {
    type Err = BookValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for ReleaseDate {
    type Error = BookValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ReleaseDate> for String {
    fn from(value: ReleaseDate) -> Self {
        value.to_string()
    }
}

/// The five business fields of a book, before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetails {
    pub title: String,
    pub author: String,
    pub release_date: ReleaseDate,
    pub publisher: String,
    pub price: f64,
}

impl BookDetails {
    /// Checks the field invariants enforced on every write path.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        validate_fields(&self.title, &self.author, &self.publisher, self.price)
    }
}

/// A persisted catalog row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Store-assigned, unique, immutable once created.
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub release_date: ReleaseDate,
    pub publisher: String,
    pub price: f64,
}

impl Book {
    /// Attaches a store-assigned id to validated details.
    pub fn from_details(id: BookId, details: BookDetails) -> Self {
        Self {
            id,
            title: details.title,
            author: details.author,
            release_date: details.release_date,
            publisher: details.publisher,
            price: details.price,
        }
    }

    /// Checks the field invariants enforced on every write path.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        validate_fields(&self.title, &self.author, &self.publisher, self.price)
    }
}

impl Display for Book {
    /// List-cell rendering shared by both front ends.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({})", self.title, self.author, self.publisher)
    }
}

fn validate_fields(
    title: &str,
    author: &str,
    publisher: &str,
    price: f64,
) -> Result<(), BookValidationError> {
    if title.trim().is_empty() {
        return Err(BookValidationError::EmptyField { field: "title" });
    }
    if author.trim().is_empty() {
        return Err(BookValidationError::EmptyField { field: "author" });
    }
    if publisher.trim().is_empty() {
        return Err(BookValidationError::EmptyField { field: "publisher" });
    }
    if !price.is_finite() {
        return Err(BookValidationError::NonFinitePrice);
    }
    if price < 0.0 {
        return Err(BookValidationError::NegativePrice { price });
    }
    Ok(())
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::{days_in_month, is_leap_year};

    #[test]
    fn century_leap_year_rules() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn february_length_follows_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }
}
