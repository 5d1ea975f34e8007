use crate::{
    audit::log_audit,
    dto::patients::{CreatePatientRequest, PatientList},
    error::{AppError, AppResult},
    middleware::auth::StaffToken,
    models::{Address, Id, Patient, PatientDraft},
    response::paginate,
    routes::params::SearchQuery,
    state::AppState,
};

pub fn all_patients(state: &AppState) -> AppResult<Vec<Patient>> {
    Ok(state.store.patients()?)
}

pub fn list_patients(state: &AppState, query: SearchQuery) -> AppResult<PatientList> {
    let mut patients = state.store.patients()?;
    if let Some(needle) = query.needle() {
        patients.retain(|p| p.name.to_lowercase().contains(&needle));
    }

    let (patients, meta) = paginate(patients, &query.pagination);
    tracing::debug!(total = meta.total, page = meta.page, "listed patients");
    Ok(PatientList { patients, meta })
}

pub fn get_patient(state: &AppState, id: Id) -> AppResult<Patient> {
    match state.store.patient(id)? {
        Some(p) => Ok(p),
        None => Err(AppError::not_found("Patient")),
    }
}

/// Registers a patient. Requires the staff token; name, age and gender
/// must be present and non-empty.
pub fn create_patient(
    state: &AppState,
    _token: StaffToken,
    payload: CreatePatientRequest,
) -> AppResult<Patient> {
    let required = (
        payload.name.filter(|n| !n.trim().is_empty()),
        payload.age.filter(|a| *a > 0),
        payload.gender.filter(|g| !g.trim().is_empty()),
    );
    let (name, age, gender) = match required {
        (Some(name), Some(age), Some(gender)) => (name, age, gender),
        _ => {
            return Err(AppError::BadRequest(
                "name, age, gender are required".into(),
            ));
        }
    };

    let patient = state.store.insert_patient(PatientDraft {
        name,
        age,
        gender,
        email: payload.email.unwrap_or_default(),
        phone: payload.phone.unwrap_or_default(),
        address: Address {
            city: payload.address.unwrap_or_default(),
            state: String::new(),
        },
        medical_history: payload.medical_history.unwrap_or_default(),
        shop_id: payload.shop_id,
    })?;

    log_audit(
        "patient_create",
        "patients",
        serde_json::json!({ "patient_id": patient.id }),
    );
    Ok(patient)
}
