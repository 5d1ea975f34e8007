use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::{Id, Patient},
    response::PageMeta,
};

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePatientRequest {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// City line of the address
    pub address: Option<String>,
    pub medical_history: Option<String>,
    pub shop_id: Option<Id>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PatientList {
    pub patients: Vec<Patient>,
    #[serde(flatten)]
    pub meta: PageMeta,
}
