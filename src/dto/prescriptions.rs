use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::{EyeMeasurement, Id, Patient, Prescription},
    response::PageMeta,
};

/// An id as clients send it: a number, a numeric string or a legacy
/// patient code such as `"PAT001"`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(untagged)]
pub enum IdInput {
    Number(i64),
    Text(String),
}

impl IdInput {
    pub fn resolve(&self) -> Option<Id> {
        match self {
            IdInput::Number(n) if *n > 0 => Some(*n),
            IdInput::Number(_) => None,
            IdInput::Text(s) => crate::routes::params::parse_id(s),
        }
    }

    /// Zero and the empty string count as "not provided".
    pub fn is_blank(&self) -> bool {
        match self {
            IdInput::Number(n) => *n == 0,
            IdInput::Text(s) => s.trim().is_empty(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescriptionRequest {
    pub patient_id: Option<IdInput>,
    pub right_eye: Option<EyeMeasurement>,
    pub left_eye: Option<EyeMeasurement>,
}

/// Reduced patient projection embedded in prescription responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PatientSummary {
    pub id: Id,
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
}

impl From<&Patient> for PatientSummary {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name.clone(),
            age: patient.age,
            gender: patient.gender.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PrescriptionWithPatient {
    #[serde(flatten)]
    pub prescription: Prescription,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<PatientSummary>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PrescriptionList {
    pub prescriptions: Vec<PrescriptionWithPatient>,
    #[serde(flatten)]
    pub meta: PageMeta,
}
