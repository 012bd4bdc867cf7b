//! Deployment policy configuration for the catalog store.
//!
//! # Responsibility
//! - Capture the per-deployment choices callers must make explicitly: list
//!   ordering and publisher-catalog mode.
//! - Keep policy a plain value passed at construction time, not hidden
//!   global state.
//!
//! # Invariants
//! - Policy values are immutable once a connection or repository is built
//!   from them.

/// Deterministic ordering applied by book listing and search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    /// Catalog-style listing: title ascending, id as tiebreak.
    #[default]
    TitleAsc,
    /// Library-style listing: most recently inserted first.
    NewestFirst,
}

/// How publisher names are managed for the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublisherPolicy {
    /// A `publishers` reference table exists and is seeded with the default
    /// names on first schema creation.
    #[default]
    Reference,
    /// No reference table; the built-in suggestion list backs
    /// `list_publishers` so callers keep a single code path.
    FreeText,
}

impl PublisherPolicy {
    /// Stable lowercase label used in diagnostic events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::FreeText => "free_text",
        }
    }
}

/// Per-deployment policy handed to schema bootstrap and repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogConfig {
    pub list_order: ListOrder,
    pub publisher_policy: PublisherPolicy,
}
