use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::prescriptions::{CreatePrescriptionRequest, PrescriptionList, PrescriptionWithPatient},
    error::{AppResult, ErrorBody},
    middleware::json::{AppJson, AppQuery},
    routes::params::{PrescriptionQuery, path_id},
    services::prescription_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/prescription",
            get(list_prescriptions).post(create_prescription),
        )
        .route("/prescription/{id}", get(get_prescription))
}

#[utoipa::path(
    get,
    path = "/api/prescription",
    params(
        ("page" = Option<String>, Query, description = "Page number, default 1"),
        ("limit" = Option<String>, Query, description = "Items per page, default 10"),
        ("patientId" = Option<String>, Query, description = "Filter by patient id or code")
    ),
    responses(
        (status = 200, description = "Paged prescriptions with patient", body = PrescriptionList)
    ),
    tag = "Prescriptions"
)]
pub async fn list_prescriptions(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PrescriptionQuery>,
) -> AppResult<Json<PrescriptionList>> {
    let resp = prescription_service::list_prescriptions(&state, query)?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/prescription/{id}",
    params(
        ("id" = i64, Path, description = "Prescription ID")
    ),
    responses(
        (status = 200, description = "Prescription with patient", body = PrescriptionWithPatient),
        (status = 404, description = "Prescription not found", body = ErrorBody)
    ),
    tag = "Prescriptions"
)]
pub async fn get_prescription(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<PrescriptionWithPatient>> {
    let id = path_id(&id, "Prescription")?;
    let resp = prescription_service::get_prescription(&state, id)?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/prescription",
    request_body = CreatePrescriptionRequest,
    responses(
        (status = 201, description = "Prescription created", body = PrescriptionWithPatient),
        (status = 400, description = "patientId, rightEye, leftEye are required", body = ErrorBody)
    ),
    tag = "Prescriptions"
)]
pub async fn create_prescription(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePrescriptionRequest>,
) -> AppResult<(StatusCode, Json<PrescriptionWithPatient>)> {
    let resp = prescription_service::create_prescription(&state, payload)?;
    Ok((StatusCode::CREATED, Json(resp)))
}
