use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::patients::{CreatePatientRequest, PatientList},
    error::{AppResult, ErrorBody},
    middleware::{
        auth::StaffToken,
        json::{AppJson, AppQuery},
    },
    models::Patient,
    routes::params::{SearchQuery, path_id},
    services::patient_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/patients", get(all_patients))
        .route("/patient", get(list_patients).post(create_patient))
        .route("/patient/{id}", get(get_patient))
}

#[utoipa::path(
    get,
    path = "/api/patients",
    responses(
        (status = 200, description = "Every patient", body = Vec<Patient>)
    ),
    tag = "Patients"
)]
pub async fn all_patients(State(state): State<AppState>) -> AppResult<Json<Vec<Patient>>> {
    Ok(Json(patient_service::all_patients(&state)?))
}

#[utoipa::path(
    get,
    path = "/api/patient",
    params(
        ("page" = Option<String>, Query, description = "Page number, default 1"),
        ("limit" = Option<String>, Query, description = "Items per page, default 10"),
        ("search" = Option<String>, Query, description = "Case-insensitive name filter")
    ),
    responses(
        (status = 200, description = "Paged patients", body = PatientList)
    ),
    tag = "Patients"
)]
pub async fn list_patients(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SearchQuery>,
) -> AppResult<Json<PatientList>> {
    let resp = patient_service::list_patients(&state, query)?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/patient/{id}",
    params(
        ("id" = String, Path, description = "Patient ID or patient code, e.g. PAT001")
    ),
    responses(
        (status = 200, description = "Patient", body = Patient),
        (status = 404, description = "Patient not found", body = ErrorBody)
    ),
    tag = "Patients"
)]
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Patient>> {
    let id = path_id(&id, "Patient")?;
    Ok(Json(patient_service::get_patient(&state, id)?))
}

#[utoipa::path(
    post,
    path = "/api/patient",
    request_body = CreatePatientRequest,
    responses(
        (status = 201, description = "Patient created", body = Patient),
        (status = 400, description = "name, age, gender are required", body = ErrorBody),
        (status = 401, description = "Missing bearer token", body = ErrorBody),
        (status = 403, description = "Invalid token", body = ErrorBody)
    ),
    security(("bearer_auth" = [])),
    tag = "Patients"
)]
pub async fn create_patient(
    State(state): State<AppState>,
    token: StaffToken,
    AppJson(payload): AppJson<CreatePatientRequest>,
) -> AppResult<(StatusCode, Json<Patient>)> {
    let patient = patient_service::create_patient(&state, token, payload)?;
    Ok((StatusCode::CREATED, Json(patient)))
}
