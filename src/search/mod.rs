use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use sqlx::{Postgres, QueryBuilder};

/// Full-text search over market descriptions.
///
/// A provider restricts a market query to the identifiers matching a piece
/// of free text. Callers hold it as `Option<Arc<dyn SearchProvider>>`; when
/// it is absent, search criteria are ignored.
pub trait SearchProvider: Send + Sync + fmt::Debug {
    /// Append a subquery yielding the `market_id`s that match `text`.
    fn push_match_subquery(&self, builder: &mut QueryBuilder<'_, Postgres>, text: &str);
}

/// Which search backend to build at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBackend {
    Postgres,
    Disabled,
}

impl FromStr for SearchBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "pg" => Ok(SearchBackend::Postgres),
            "none" | "disabled" | "off" => Ok(SearchBackend::Disabled),
            other => Err(anyhow::anyhow!(
                "SEARCH_PROVIDER must be 'postgres' or 'none', got '{other}'"
            )),
        }
    }
}

/// Postgres `tsvector` search over the `search_markets` table.
#[derive(Debug, Clone, Default)]
pub struct PostgresFullTextSearch;

impl SearchProvider for PostgresFullTextSearch {
    fn push_match_subquery(&self, builder: &mut QueryBuilder<'_, Postgres>, text: &str) {
        builder.push(
            "SELECT search_markets.market_id FROM search_markets \
             WHERE to_tsvector('english', search_markets.content) @@ plainto_tsquery('english', ",
        );
        builder.push_bind(text.to_owned());
        builder.push(")");
    }
}

pub fn create_search_provider(backend: SearchBackend) -> Option<Arc<dyn SearchProvider>> {
    match backend {
        SearchBackend::Postgres => Some(Arc::new(PostgresFullTextSearch)),
        SearchBackend::Disabled => None,
    }
}
