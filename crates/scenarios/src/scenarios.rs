use crate::error::ScenarioError;
use core_types::{validate_code, Country};
use database::CountryRepository;
use std::sync::Arc;

pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Use-case entry points for the country directory.
///
/// Stateless apart from the shared repository handle, so it is cheap to
/// clone into every request handler.
#[derive(Clone)]
pub struct CountryScenarios {
    repository: Arc<dyn CountryRepository>,
}

impl CountryScenarios {
    pub fn new(repository: Arc<dyn CountryRepository>) -> Self {
        Self { repository }
    }

    /// Every country in the directory. No validation applies.
    pub async fn get_all(&self) -> ScenarioResult<Vec<Country>> {
        self.repository
            .select_all()
            .await
            .map_err(ScenarioError::Storage)
    }

    /// # Errors
    /// `InvalidCode` for a malformed code, `NotFound` when no row has it.
    pub async fn get(&self, code: &str) -> ScenarioResult<Country> {
        ensure_valid(code)?;
        self.find(code)
            .await?
            .ok_or_else(|| ScenarioError::NotFound {
                code: code.to_string(),
            })
    }

    /// Adds `country` to the directory.
    ///
    /// # Errors
    /// `InvalidCode` for a malformed `iso_alpha2`, `DuplicateCode` when the
    /// code is already taken.
    pub async fn store(&self, country: &Country) -> ScenarioResult<()> {
        let code = country.iso_alpha2.as_str();
        ensure_valid(code)?;

        if self.find(code).await?.is_some() {
            return Err(ScenarioError::DuplicateCode {
                code: code.to_string(),
            });
        }

        self.repository
            .insert(country)
            .await
            .map_err(|e| ScenarioError::from_storage(e, code))?;
        tracing::info!(code, name = %country.short_name, "Country stored.");
        Ok(())
    }

    /// Replaces the country stored under `code` with `country`. The key
    /// itself may change.
    ///
    /// # Errors
    /// `InvalidCode` when either code is malformed (the path code is checked
    /// first), `NotFound` when nothing is stored under `code`, `DuplicateCode`
    /// when the new code belongs to another row.
    pub async fn edit(&self, code: &str, country: &Country) -> ScenarioResult<()> {
        let new_code = country.iso_alpha2.as_str();
        ensure_valid(code)?;
        ensure_valid(new_code)?;

        if self.find(code).await?.is_none() {
            return Err(ScenarioError::NotFound {
                code: code.to_string(),
            });
        }
        if new_code != code && self.find(new_code).await?.is_some() {
            return Err(ScenarioError::DuplicateCode {
                code: new_code.to_string(),
            });
        }

        self.repository
            .update(code, country)
            .await
            .map_err(|e| ScenarioError::from_storage(e, code))?;
        tracing::info!(code, new_code, "Country edited.");
        Ok(())
    }

    /// # Errors
    /// `InvalidCode` for a malformed code, `NotFound` when no row has it.
    pub async fn delete(&self, code: &str) -> ScenarioResult<()> {
        ensure_valid(code)?;

        if self.find(code).await?.is_none() {
            return Err(ScenarioError::NotFound {
                code: code.to_string(),
            });
        }

        self.repository
            .delete(code)
            .await
            .map_err(|e| ScenarioError::from_storage(e, code))?;
        tracing::info!(code, "Country deleted.");
        Ok(())
    }

    async fn find(&self, code: &str) -> ScenarioResult<Option<Country>> {
        self.repository
            .select_by_code(code)
            .await
            .map_err(ScenarioError::Storage)
    }
}

fn ensure_valid(code: &str) -> ScenarioResult<()> {
    if validate_code(code) {
        Ok(())
    } else {
        tracing::debug!(code, "Rejected malformed country code.");
        Err(ScenarioError::invalid_code(code))
    }
}
