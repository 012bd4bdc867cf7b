//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise the core crate end to end against an in-memory store.
//! - Keep output deterministic for quick local sanity checks.

use librario_core::{
    open_db_in_memory, BookDetails, CatalogConfig, CatalogService, ReleaseDate,
    SqliteBookRepository,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("librario smoke run failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogConfig::default();
    let conn = open_db_in_memory(&config)?;
    let repo = SqliteBookRepository::try_new(&conn, config)?;
    let service = CatalogService::new(repo);

    let id = service.add_book(&BookDetails {
        title: "The Name of the Rose".to_string(),
        author: "Umberto Eco".to_string(),
        release_date: ReleaseDate::parse("1980-10-01")?,
        publisher: "Editorial Planeta".to_string(),
        price: 18.50,
    })?;

    println!("librario_core version={}", librario_core::core_version());
    println!("inserted book id={id}");
    for book in service.list_books()? {
        println!("{book}");
    }
    println!("publishers={}", service.list_publishers()?.len());

    Ok(())
}
