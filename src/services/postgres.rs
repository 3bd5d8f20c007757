use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use std::time::Duration;
use crate::models::{FundingOpportunity, FundingStage};
use crate::services::repository::{OpportunityFilter, OpportunityRepository, RepositoryError};

const SELECT_OPPORTUNITIES: &str = r#"
    SELECT id, startup_name, fund_name, stage, sector, amount_eur, year
    FROM funding_opportunities
"#;

/// Connection settings for [`PostgresRepository`]
#[derive(Debug, Clone)]
pub struct PostgresOptions {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub run_migrations: bool,
}

impl Default for PostgresOptions {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }
}

/// PostgreSQL-backed opportunity repository
///
/// Reads the `funding_opportunities` table populated by the data importer.
/// Legacy rows may carry NULLs: text columns read as empty strings, amounts
/// as 0 and years as absent.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Connect to PostgreSQL and optionally run embedded migrations
    pub async fn connect(database_url: &str, options: &PostgresOptions) -> Result<Self, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(options.max_connections)
            .min_connections(options.min_connections)
            .acquire_timeout(options.acquire_timeout)
            .idle_timeout(options.idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        if options.run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database migrations applied");
        }

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OpportunityRepository for PostgresRepository {
    async fn top_by_amount(&self, limit: usize) -> Result<Vec<FundingOpportunity>, RepositoryError> {
        let query = format!(
            "{} ORDER BY amount_eur DESC NULLS LAST, id ASC LIMIT $1",
            SELECT_OPPORTUNITIES
        );

        let rows = sqlx::query(&query)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;

        let opportunities = rows
            .iter()
            .map(opportunity_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} opportunities (limit {})", opportunities.len(), limit);

        Ok(opportunities)
    }

    async fn list(
        &self,
        filter: &OpportunityFilter,
        limit: usize,
    ) -> Result<Vec<FundingOpportunity>, RepositoryError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_OPPORTUNITIES);
        builder.push(" WHERE 1=1");

        if let Some(category) = filter.category() {
            builder.push(" AND fund_name ILIKE ").push_bind(format!("%{}%", category));
        }

        if let Some(sector) = filter.sector() {
            builder.push(" AND sector ILIKE ").push_bind(format!("%{}%", sector));
        }

        if let Some(stage) = filter.stage() {
            builder.push(" AND stage = ").push_bind(stage.to_string());
        }

        builder
            .push(" ORDER BY amount_eur DESC NULLS LAST, id ASC LIMIT ")
            .push_bind(limit as i64);

        let rows = builder.build().fetch_all(&self.pool).await?;

        rows.iter()
            .map(opportunity_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM funding_opportunities")
            .fetch_one(&self.pool)
            .await?;

        let count: i64 = row.try_get("count")?;
        Ok(count.max(0) as usize)
    }

    async fn health_check(&self) -> Result<bool, RepositoryError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn opportunity_from_row(row: &PgRow) -> Result<FundingOpportunity, sqlx::Error> {
    let stage: Option<String> = row.try_get("stage")?;

    Ok(FundingOpportunity {
        id: row.try_get("id")?,
        startup_name: row.try_get("startup_name")?,
        fund_name: row.try_get::<Option<String>, _>("fund_name")?.unwrap_or_default(),
        stage: stage.map(FundingStage::from).unwrap_or_default(),
        sector: row.try_get::<Option<String>, _>("sector")?.unwrap_or_default(),
        amount_eur: row.try_get::<Option<f64>, _>("amount_eur")?.unwrap_or(0.0),
        year: row.try_get("year")?,
    })
}
