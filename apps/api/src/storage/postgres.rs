use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::portfolio::{CreatedPortfolio, PortfolioDocument, StoredPortfolio};
use crate::storage::{next_available_slug, PortfolioStore, FALLBACK_SLUG};

#[derive(Debug, FromRow)]
struct PortfolioRow {
    id: Uuid,
    document: Value,
}

impl TryFrom<PortfolioRow> for StoredPortfolio {
    type Error = AppError;

    fn try_from(row: PortfolioRow) -> Result<Self, Self::Error> {
        let document: PortfolioDocument = serde_json::from_value(row.document).map_err(|e| {
            AppError::Internal(anyhow!("Stored portfolio {} is unreadable: {e}", row.id))
        })?;
        Ok(StoredPortfolio {
            id: row.id,
            document,
        })
    }
}

/// Postgres-backed store. Documents live in `portfolios.document` as JSONB;
/// `slug`, `name`, `theme` and `generated_at` are copied into columns for lookup.
#[derive(Clone)]
pub struct PgPortfolioStore {
    pool: PgPool,
}

impl PgPortfolioStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioStore for PgPortfolioStore {
    async fn create(&self, mut document: PortfolioDocument) -> Result<CreatedPortfolio, AppError> {
        let base = if document.slug.is_empty() {
            FALLBACK_SLUG.to_string()
        } else {
            document.slug.clone()
        };

        let taken: Vec<String> =
            sqlx::query_scalar("SELECT slug FROM portfolios WHERE slug = $1 OR slug LIKE $2")
                .bind(&base)
                .bind(format!("{base}-%"))
                .fetch_all(&self.pool)
                .await?;

        document.slug = next_available_slug(&base, &taken);

        let id = Uuid::new_v4();
        let document_value = serde_json::to_value(&document)
            .map_err(|e| AppError::Internal(anyhow!("Failed to serialize portfolio: {e}")))?;

        let result = sqlx::query(
            r#"
            INSERT INTO portfolios (id, slug, name, theme, document, generated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(&document.slug)
        .bind(&document.name)
        .bind(document.theme.as_str())
        .bind(&document_value)
        .bind(document.generated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {}
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(AppError::Conflict(format!(
                    "Slug '{}' was taken concurrently",
                    document.slug
                )));
            }
            Err(e) => return Err(e.into()),
        }

        info!("Stored portfolio {id} with slug '{}'", document.slug);

        Ok(CreatedPortfolio {
            id,
            slug: document.slug,
        })
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<StoredPortfolio>, AppError> {
        let row = sqlx::query_as::<_, PortfolioRow>(
            "SELECT id, document FROM portfolios WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        row.map(StoredPortfolio::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<StoredPortfolio>, AppError> {
        let rows = sqlx::query_as::<_, PortfolioRow>(
            "SELECT id, document FROM portfolios ORDER BY generated_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(StoredPortfolio::try_from).collect()
    }
}
