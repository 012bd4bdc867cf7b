use librario_core::{Book, BookDetails, BookValidationError, ReleaseDate};

fn sample_details() -> BookDetails {
    BookDetails {
        title: "The Left Hand of Darkness".to_string(),
        author: "Ursula K. Le Guin".to_string(),
        release_date: ReleaseDate::parse("1969-03-01").unwrap(),
        publisher: "Macmillan".to_string(),
        price: 9.99,
    }
}

#[test]
fn valid_details_pass_validation() {
    sample_details().validate().unwrap();
}

#[test]
fn blank_required_fields_are_rejected() {
    let mut details = sample_details();
    details.title = "   ".to_string();
    assert_eq!(
        details.validate().unwrap_err(),
        BookValidationError::EmptyField { field: "title" }
    );

    let mut details = sample_details();
    details.author = String::new();
    assert_eq!(
        details.validate().unwrap_err(),
        BookValidationError::EmptyField { field: "author" }
    );

    let mut details = sample_details();
    details.publisher = "\t".to_string();
    assert_eq!(
        details.validate().unwrap_err(),
        BookValidationError::EmptyField { field: "publisher" }
    );
}

#[test]
fn negative_price_is_rejected_and_zero_is_accepted() {
    let mut details = sample_details();
    details.price = -1.0;
    assert_eq!(
        details.validate().unwrap_err(),
        BookValidationError::NegativePrice { price: -1.0 }
    );

    details.price = 0.0;
    details.validate().unwrap();
}

#[test]
fn non_finite_price_is_rejected() {
    let mut details = sample_details();
    details.price = f64::NAN;
    assert_eq!(
        details.validate().unwrap_err(),
        BookValidationError::NonFinitePrice
    );

    details.price = f64::INFINITY;
    assert_eq!(
        details.validate().unwrap_err(),
        BookValidationError::NonFinitePrice
    );
}

#[test]
fn release_date_parses_real_calendar_dates() {
    let date = ReleaseDate::parse("1999-12-31").unwrap();
    assert_eq!(date.year(), 1999);
    assert_eq!(date.month(), 12);
    assert_eq!(date.day(), 31);

    // Leap day is only valid in leap years.
    ReleaseDate::parse("2024-02-29").unwrap();
    ReleaseDate::parse("2023-02-29").unwrap_err();
}

#[test]
fn release_date_rejects_malformed_and_impossible_input() {
    for value in [
        "",
        "garbage",
        "2024-13-01",
        "2024-00-10",
        "2024-04-31",
        "2024-1-5",
        "31-12-1999",
        "1999/12/31",
    ] {
        let err = ReleaseDate::parse(value).unwrap_err();
        assert_eq!(
            err,
            BookValidationError::InvalidReleaseDate {
                value: value.to_string()
            },
            "`{value}` should not parse"
        );
    }
}

#[test]
fn release_date_display_roundtrip() {
    let date = ReleaseDate::parse("2001-06-05").unwrap();
    assert_eq!(date.to_string(), "2001-06-05");
    assert_eq!("2001-06-05".parse::<ReleaseDate>().unwrap(), date);
}

#[test]
fn release_dates_order_chronologically() {
    let earlier = ReleaseDate::parse("1990-12-31").unwrap();
    let later = ReleaseDate::parse("1991-01-01").unwrap();
    assert!(earlier < later);
}

#[test]
fn book_display_matches_list_cell_rendering() {
    let book = Book::from_details(7, sample_details());
    assert_eq!(
        book.to_string(),
        "The Left Hand of Darkness - Ursula K. Le Guin (Macmillan)"
    );
}

#[test]
fn from_details_attaches_the_assigned_id() {
    let details = sample_details();
    let book = Book::from_details(42, details.clone());
    assert_eq!(book.id, 42);
    assert_eq!(book.title, details.title);
    assert_eq!(book.release_date, details.release_date);
    assert_eq!(book.price, details.price);
}

#[test]
fn book_serialization_uses_iso_date_wire_format() {
    let book = Book::from_details(3, sample_details());

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["title"], "The Left Hand of Darkness");
    assert_eq!(json["release_date"], "1969-03-01");
    assert_eq!(json["price"], 9.99);

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, book);
}

#[test]
fn deserialization_rejects_invalid_release_date() {
    let value = serde_json::json!({
        "id": 1,
        "title": "Bad Date",
        "author": "Nobody",
        "release_date": "2023-02-29",
        "publisher": "Macmillan",
        "price": 1.0
    });

    let err = serde_json::from_value::<Book>(value).unwrap_err();
    assert!(
        err.to_string().contains("expected YYYY-MM-DD"),
        "unexpected error: {err}"
    );
}
