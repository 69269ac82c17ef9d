//! Carbon footprint handler

use axum::{Json, extract::State, http::StatusCode};
use domain::{
    entities::{FootprintResult, Itinerary, StopFields},
    value_objects::CarParameters,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::{error::ApiError, middleware::ApiJson, state::AppState};

/// One itinerary stop: both `lat` and `lng`, or an `address`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct StopRequest {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<String>,
}

impl From<StopRequest> for StopFields {
    fn from(stop: StopRequest) -> Self {
        Self {
            lat: stop.lat,
            lng: stop.lng,
            address: stop.address,
        }
    }
}

/// Vehicle characteristics used to refine the car factor
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CarParamsRequest {
    pub cylinders: u32,
    /// Fuel consumption
    pub consumption: f64,
}

/// Footprint request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FootprintRequest {
    pub itinerary: Vec<StopRequest>,
    #[serde(default)]
    pub car_params: Option<CarParamsRequest>,
}

/// Footprint per transport mode, in grams of CO2
///
/// Mirrors `FootprintResult` so the domain type stays free of OpenAPI derives.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResponse {
    pub car_footprint: f64,
    pub bus_footprint: f64,
    pub truck_footprint: f64,
    pub train_footprint: f64,
    pub plane_footprint: f64,
    pub walking_footprint: f64,
    pub biking_footprint: f64,
}

impl From<FootprintResult> for FootprintResponse {
    fn from(result: FootprintResult) -> Self {
        Self {
            car_footprint: result.car_footprint,
            bus_footprint: result.bus_footprint,
            truck_footprint: result.truck_footprint,
            train_footprint: result.train_footprint,
            plane_footprint: result.plane_footprint,
            walking_footprint: result.walking_footprint,
            biking_footprint: result.biking_footprint,
        }
    }
}

/// Estimate the footprint of an itinerary
#[utoipa::path(
    post,
    path = "/api/footprint",
    tag = "footprint",
    request_body = FootprintRequest,
    responses(
        (status = 201, description = "Footprint per transport mode", body = FootprintResponse),
        (status = 400, description = "Malformed stop or unresolvable address", body = crate::error::ErrorResponse),
        (status = 500, description = "Emission model unavailable", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(stops = request.itinerary.len()))]
pub async fn compute_footprint(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FootprintRequest>,
) -> Result<(StatusCode, Json<FootprintResponse>), ApiError> {
    let itinerary = Itinerary::from_fields(request.itinerary.into_iter().map(StopFields::from))?;
    let car = request
        .car_params
        .map(|p| CarParameters::new(p.cylinders, p.consumption))
        .transpose()?;

    let result = state.footprint_service.estimate(&itinerary, car).await?;
    Ok((StatusCode::CREATED, Json(result.into())))
}
