//! Typed routes of the API. Handlers take their path as the first extractor.

use axum_extra::routing::TypedPath;
use serde::Deserialize;

/// `/api`
#[derive(Debug, TypedPath)]
#[typed_path("/api")]
pub struct ApiRoot;

/// `/api/ping`
#[derive(Debug, TypedPath)]
#[typed_path("/api/ping")]
pub struct Ping;

/// `/api/country`
#[derive(Debug, TypedPath)]
#[typed_path("/api/country")]
pub struct Countries;

/// `/api/country/:code`
#[derive(Debug, TypedPath, Deserialize)]
#[typed_path("/api/country/:code")]
pub struct CountryByCode {
    pub code: String,
}
