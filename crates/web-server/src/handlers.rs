use crate::{
    error::AppError,
    origin::RequestOrigin,
    paths::{ApiRoot, Countries, CountryByCode, Ping},
    AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use core_types::{Country, CountryPreview};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub message: &'static str,
    pub host: String,
    pub protocol: String,
}

#[derive(Debug, Serialize)]
pub struct Pong {
    pub message: &'static str,
}

/// # GET /api
pub async fn index(_: ApiRoot, origin: RequestOrigin) -> Json<ServerInfo> {
    Json(ServerInfo {
        message: "server is running",
        host: origin.host,
        protocol: origin.scheme,
    })
}

/// # GET /api/ping
pub async fn ping(_: Ping) -> Json<Pong> {
    Json(Pong { message: "pong" })
}

/// # GET /api/country
/// Previews of every country in the directory.
pub async fn list_countries(
    _: Countries,
    origin: RequestOrigin,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CountryPreview>>, AppError> {
    let previews = state
        .scenarios
        .get_all()
        .await?
        .iter()
        .map(|country| preview(country, &origin))
        .collect();
    Ok(Json(previews))
}

/// # GET /api/country/:code
pub async fn get_country(
    CountryByCode { code }: CountryByCode,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Country>, AppError> {
    let country = state.scenarios.get(&code).await?;
    Ok(Json(country))
}

/// # POST /api/country
pub async fn store_country(
    _: Countries,
    origin: RequestOrigin,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Country>, JsonRejection>,
) -> Result<Json<CountryPreview>, AppError> {
    let Json(country) = payload?;
    state.scenarios.store(&country).await?;
    Ok(Json(preview(&country, &origin)))
}

/// # DELETE /api/country/:code
pub async fn delete_country(
    CountryByCode { code }: CountryByCode,
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, AppError> {
    state.scenarios.delete(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// # PATCH /api/country/:code
/// Replaces the whole record; the body may carry a new alpha-2 code.
pub async fn edit_country(
    CountryByCode { code }: CountryByCode,
    origin: RequestOrigin,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Country>, JsonRejection>,
) -> Result<Json<CountryPreview>, AppError> {
    let Json(country) = payload?;
    state.scenarios.edit(&code, &country).await?;
    Ok(Json(preview(&country, &origin)))
}

fn preview(country: &Country, origin: &RequestOrigin) -> CountryPreview {
    CountryPreview::new(country, &origin.scheme, &origin.host)
}
