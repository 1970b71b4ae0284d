use crate::DbError;
use async_trait::async_trait;
use core_types::Country;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgPool, Postgres};

/// The persistence contract the scenario layer is written against.
///
/// Implementations report a write that collides with an existing key as
/// `DbError::DuplicateKey` and an update or delete of a missing key as
/// `DbError::NotFound`.
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Every stored country, ordered by alpha-2 code.
    async fn select_all(&self) -> Result<Vec<Country>, DbError>;

    async fn select_by_code(&self, code: &str) -> Result<Option<Country>, DbError>;

    async fn insert(&self, country: &Country) -> Result<(), DbError>;

    /// Replaces every field of the row keyed by `code`, including the key itself.
    async fn update(&self, code: &str, country: &Country) -> Result<(), DbError>;

    async fn delete(&self, code: &str) -> Result<(), DbError>;
}

/// The `DbRepository` stores countries in the PostgreSQL `countries` table
/// (see `sql/schema.sql`). It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the configured database and probes it once, so that a
    /// misconfiguration is fatal at startup.
    pub async fn connect(settings: &configuration::DatabaseSettings) -> Result<Self, DbError> {
        let pool = crate::connect(settings).await?;
        crate::probe(&pool).await?;
        Ok(Self::new(pool))
    }

    /// Each statement runs on its own pooled connection, which goes back to
    /// the pool when the returned guard is dropped, on success or failure.
    async fn acquire(&self) -> Result<PoolConnection<Postgres>, DbError> {
        self.pool.acquire().await.map_err(DbError::ConnectionError)
    }
}

#[async_trait]
impl CountryRepository for DbRepository {
    async fn select_all(&self) -> Result<Vec<Country>, DbError> {
        let mut conn = self.acquire().await?;
        let countries = sqlx::query_as::<_, Country>(
            r#"
            SELECT short_name, full_name, iso_alpha2, iso_alpha3, iso_numeric, population, area
            FROM countries
            ORDER BY iso_alpha2 ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(countries)
    }

    async fn select_by_code(&self, code: &str) -> Result<Option<Country>, DbError> {
        let mut conn = self.acquire().await?;
        let country = sqlx::query_as::<_, Country>(
            r#"
            SELECT short_name, full_name, iso_alpha2, iso_alpha3, iso_numeric, population, area
            FROM countries
            WHERE iso_alpha2 = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(country)
    }

    async fn insert(&self, country: &Country) -> Result<(), DbError> {
        let mut conn = self.acquire().await?;
        sqlx::query(
            r#"
            INSERT INTO countries (short_name, full_name, iso_alpha2, iso_alpha3, iso_numeric, population, area)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&country.short_name)
        .bind(country.full_name.as_deref())
        .bind(&country.iso_alpha2)
        .bind(&country.iso_alpha3)
        .bind(&country.iso_numeric)
        .bind(country.population)
        .bind(country.area)
        .execute(&mut *conn)
        .await
        .map_err(|e| DbError::from_write(e, &country.iso_alpha2))?;

        tracing::debug!(code = %country.iso_alpha2, "Country row inserted.");
        Ok(())
    }

    async fn update(&self, code: &str, country: &Country) -> Result<(), DbError> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query(
            r#"
            UPDATE countries SET
                short_name = $1,
                full_name = $2,
                iso_alpha2 = $3,
                iso_alpha3 = $4,
                iso_numeric = $5,
                population = $6,
                area = $7
            WHERE iso_alpha2 = $8
            "#,
        )
        .bind(&country.short_name)
        .bind(country.full_name.as_deref())
        .bind(&country.iso_alpha2)
        .bind(&country.iso_alpha3)
        .bind(&country.iso_numeric)
        .bind(country.population)
        .bind(country.area)
        .bind(code)
        .execute(&mut *conn)
        .await
        .map_err(|e| DbError::from_write(e, &country.iso_alpha2))?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }
        tracing::debug!(code, new_code = %country.iso_alpha2, "Country row updated.");
        Ok(())
    }

    async fn delete(&self, code: &str) -> Result<(), DbError> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query("DELETE FROM countries WHERE iso_alpha2 = $1")
            .bind(code)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }
        tracing::debug!(code, "Country row deleted.");
        Ok(())
    }
}
