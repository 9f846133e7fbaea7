//! Location catalog handlers

use axum::{extract::Path, Json};
use serde::Serialize;
use shared::locations::{self, City, Region};

use crate::error::{AppError, AppResult};

#[derive(Serialize)]
pub struct RegionsResponse {
    pub regions: &'static [Region],
}

/// List every region with its cities
pub async fn list_regions() -> Json<RegionsResponse> {
    Json(RegionsResponse {
        regions: locations::regions(),
    })
}

/// Get one region
pub async fn get_region(Path(region): Path<String>) -> AppResult<Json<&'static Region>> {
    locations::find_region(&region)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Region".to_string()))
}

/// Get one city by its English name
pub async fn get_city(
    Path((region, city_en)): Path<(String, String)>,
) -> AppResult<Json<&'static City>> {
    locations::find_city(&region, &city_en)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("City".to_string()))
}
