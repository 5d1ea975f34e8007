use std::collections::HashMap;

use crate::{
    audit::log_audit,
    dto::prescriptions::{
        CreatePrescriptionRequest, PatientSummary, PrescriptionList, PrescriptionWithPatient,
    },
    error::{AppError, AppResult},
    models::{Id, Patient, Prescription, PrescriptionDraft},
    response::paginate,
    routes::params::{PrescriptionQuery, parse_id},
    state::AppState,
};

pub fn list_prescriptions(
    state: &AppState,
    query: PrescriptionQuery,
) -> AppResult<PrescriptionList> {
    let mut prescriptions = state.store.prescriptions()?;
    if let Some(raw) = query.patient_id.as_deref().filter(|s| !s.is_empty()) {
        // An unparseable filter matches nothing rather than everything.
        let patient_id = parse_id(raw);
        prescriptions.retain(|p| Some(p.patient_id) == patient_id);
    }

    let (page, meta) = paginate(prescriptions, &query.pagination);

    let patients: HashMap<Id, Patient> = state
        .store
        .patients()?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();
    let prescriptions = page
        .into_iter()
        .map(|prescription| {
            let patient = patients.get(&prescription.patient_id).map(PatientSummary::from);
            PrescriptionWithPatient {
                prescription,
                patient,
            }
        })
        .collect();

    tracing::debug!(total = meta.total, page = meta.page, "listed prescriptions");
    Ok(PrescriptionList {
        prescriptions,
        meta,
    })
}

pub fn get_prescription(state: &AppState, id: Id) -> AppResult<PrescriptionWithPatient> {
    let prescription = match state.store.prescription(id)? {
        Some(p) => p,
        None => return Err(AppError::not_found("Prescription")),
    };
    with_patient(state, prescription)
}

pub fn create_prescription(
    state: &AppState,
    payload: CreatePrescriptionRequest,
) -> AppResult<PrescriptionWithPatient> {
    let missing = || AppError::BadRequest("patientId, rightEye, leftEye are required".into());

    let raw_id = payload.patient_id.filter(|id| !id.is_blank()).ok_or_else(missing)?;
    let right_eye = payload.right_eye.ok_or_else(missing)?;
    let left_eye = payload.left_eye.ok_or_else(missing)?;
    let patient_id = raw_id.resolve().ok_or_else(|| {
        AppError::BadRequest("patientId must be a numeric id or patient code".into())
    })?;

    let prescription = state.store.insert_prescription(PrescriptionDraft {
        patient_id,
        right_eye,
        left_eye,
    })?;

    log_audit(
        "prescription_create",
        "prescriptions",
        serde_json::json!({
            "prescription_id": prescription.id,
            "patient_id": prescription.patient_id,
        }),
    );
    with_patient(state, prescription)
}

fn with_patient(
    state: &AppState,
    prescription: Prescription,
) -> AppResult<PrescriptionWithPatient> {
    let patient = state
        .store
        .patient(prescription.patient_id)?
        .as_ref()
        .map(PatientSummary::from);
    Ok(PrescriptionWithPatient {
        prescription,
        patient,
    })
}
