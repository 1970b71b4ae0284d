use crate::repository::CountryRepository;
use crate::DbError;
use async_trait::async_trait;
use core_types::Country;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// A `CountryRepository` that keeps the directory in process memory.
///
/// Rows are keyed and ordered by alpha-2 code, mirroring the primary key of
/// the SQL table. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    rows: RwLock<BTreeMap<String, Country>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `countries`. Later entries win
    /// when two share a code.
    pub fn with_countries(countries: impl IntoIterator<Item = Country>) -> Self {
        let rows = countries
            .into_iter()
            .map(|country| (country.iso_alpha2.clone(), country))
            .collect();
        Self {
            rows: RwLock::new(rows),
        }
    }
}

#[async_trait]
impl CountryRepository for InMemoryRepository {
    async fn select_all(&self) -> Result<Vec<Country>, DbError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn select_by_code(&self, code: &str) -> Result<Option<Country>, DbError> {
        Ok(self.rows.read().await.get(code).cloned())
    }

    async fn insert(&self, country: &Country) -> Result<(), DbError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&country.iso_alpha2) {
            return Err(DbError::DuplicateKey(country.iso_alpha2.clone()));
        }
        rows.insert(country.iso_alpha2.clone(), country.clone());
        Ok(())
    }

    async fn update(&self, code: &str, country: &Country) -> Result<(), DbError> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(code) {
            return Err(DbError::NotFound);
        }
        if country.iso_alpha2 != code && rows.contains_key(&country.iso_alpha2) {
            return Err(DbError::DuplicateKey(country.iso_alpha2.clone()));
        }
        rows.remove(code);
        rows.insert(country.iso_alpha2.clone(), country.clone());
        Ok(())
    }

    async fn delete(&self, code: &str) -> Result<(), DbError> {
        match self.rows.write().await.remove(code) {
            Some(_) => Ok(()),
            None => Err(DbError::NotFound),
        }
    }
}
