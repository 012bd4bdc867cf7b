use librario_core::{
    open_db_in_memory, BookForm, BookValidationError, CatalogConfig, CatalogService, ReleaseDate,
    RepoError, SqliteBookRepository,
};

fn filled_form() -> BookForm {
    BookForm {
        title: "  The Hobbit  ".to_string(),
        author: "J. R. R. Tolkien".to_string(),
        release_date: "1937-09-21".to_string(),
        publisher: " HarperCollins ".to_string(),
        price: " 14.25 ".to_string(),
    }
}

#[test]
fn parse_trims_fields_and_builds_details() {
    let details = filled_form().parse().unwrap();

    assert_eq!(details.title, "The Hobbit");
    assert_eq!(details.author, "J. R. R. Tolkien");
    assert_eq!(details.release_date, ReleaseDate::parse("1937-09-21").unwrap());
    assert_eq!(details.publisher, "HarperCollins");
    assert_eq!(details.price, 14.25);
}

#[test]
fn parse_reports_the_first_missing_field_by_name() {
    let cases: &[(&str, fn(&mut BookForm))] = &[
        ("title", |form| form.title = "  ".to_string()),
        ("author", |form| form.author = String::new()),
        ("release_date", |form| form.release_date = String::new()),
        ("publisher", |form| form.publisher = "\t".to_string()),
        ("price", |form| form.price = String::new()),
    ];

    for (field, blank_out) in cases.iter().copied() {
        let mut form = filled_form();
        blank_out(&mut form);
        assert_eq!(
            form.parse().unwrap_err(),
            BookValidationError::EmptyField { field },
            "blank {field} should be reported"
        );
    }
}

#[test]
fn parse_rejects_unreadable_price_text() {
    let mut form = filled_form();
    form.price = "fourteen".to_string();
    assert_eq!(
        form.parse().unwrap_err(),
        BookValidationError::UnparseablePrice {
            value: "fourteen".to_string()
        }
    );
}

#[test]
fn parse_rejects_negative_price_and_accepts_zero() {
    let mut form = filled_form();
    form.price = "-1".to_string();
    assert_eq!(
        form.parse().unwrap_err(),
        BookValidationError::NegativePrice { price: -1.0 }
    );

    form.price = "0".to_string();
    assert_eq!(form.parse().unwrap().price, 0.0);
}

#[test]
fn parse_rejects_impossible_release_date() {
    let mut form = filled_form();
    form.release_date = "1937-02-30".to_string();
    assert_eq!(
        form.parse().unwrap_err(),
        BookValidationError::InvalidReleaseDate {
            value: "1937-02-30".to_string()
        }
    );
}

#[test]
fn save_form_persists_and_update_form_reports_missing_rows() {
    let config = CatalogConfig::default();
    let conn = open_db_in_memory(&config).unwrap();
    let repo = SqliteBookRepository::try_new(&conn, config).unwrap();
    let service = CatalogService::new(repo);

    let id = service.save_form(&filled_form()).unwrap();
    assert!(id > 0);

    let mut revised = filled_form();
    revised.price = "9.99".to_string();
    assert!(service.update_form(id, &revised).unwrap());
    assert_eq!(service.get_book(id).unwrap().unwrap().price, 9.99);

    assert!(!service.update_form(id + 1_000, &revised).unwrap());
}

#[test]
fn form_validation_failure_surfaces_as_a_typed_error() {
    let config = CatalogConfig::default();
    let conn = open_db_in_memory(&config).unwrap();
    let repo = SqliteBookRepository::try_new(&conn, config).unwrap();
    let service = CatalogService::new(repo);

    let mut form = filled_form();
    form.title = String::new();
    let err = service.save_form(&form).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(BookValidationError::EmptyField { field: "title" })
    ));
    assert!(service.list_books().unwrap().is_empty());
}
