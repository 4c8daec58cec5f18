//! Portfolio persistence: pluggable store behind a trait.
//!
//! Default: `PgPortfolioStore` (JSONB documents in Postgres).
//! `AppState` holds an `Arc<dyn PortfolioStore>`.
//!
//! Slug collisions are resolved here, not in the pipeline: the first document
//! keeps the derived slug, later ones get `-2`, `-3`, ... appended.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::portfolio::{CreatedPortfolio, PortfolioDocument, StoredPortfolio};

pub mod postgres;

/// Slug used when a name yields no slug characters at all.
pub const FALLBACK_SLUG: &str = "portfolio";

/// Path segments under `/api/v1/portfolios/` that a fixed route already owns.
pub const RESERVED_SLUGS: &[&str] = &["generate"];

#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Stores the document as-is, except that the slug may be disambiguated.
    async fn create(&self, document: PortfolioDocument) -> Result<CreatedPortfolio, AppError>;

    async fn get_by_slug(&self, slug: &str) -> Result<Option<StoredPortfolio>, AppError>;

    /// All portfolios, newest `generated_at` first.
    async fn list(&self) -> Result<Vec<StoredPortfolio>, AppError>;
}

/// Picks the first free slug among `base`, `base-2`, `base-3`, ...
pub fn next_available_slug(base: &str, taken: &[String]) -> String {
    let base = if base.is_empty() { FALLBACK_SLUG } else { base };
    let is_taken = |candidate: &str| {
        RESERVED_SLUGS.contains(&candidate) || taken.iter().any(|t| t == candidate)
    };

    if !is_taken(base) {
        return base.to_string();
    }

    (2u32..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or_else(|| base.to_string())
}
