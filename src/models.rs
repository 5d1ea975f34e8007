use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier shared by every record. Assigned by the store, always positive.
pub type Id = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EyePair {
    pub right: f64,
    pub left: f64,
}

/// Summary refraction kept on the patient card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VisionSummary {
    pub sphere: EyePair,
    pub cylinder: EyePair,
    pub axis: EyePair,
    pub add: EyePair,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: Id,
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub medical_history: String,
    pub insurance_provider: String,
    pub insurance_policy_number: String,
    pub prescription: VisionSummary,
    pub last_visit: NaiveDate,
    pub loyalty_points: Option<u32>,
    pub loyalty_tier: Option<LoyaltyTier>,
    pub shop_id: Option<Id>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Id,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One eye of a full optical prescription. Every value is optional because
/// the intake form lets staff fill only what was measured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EyeMeasurement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sph: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cyl: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bc: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: Id,
    pub patient_id: Id,
    pub right_eye: EyeMeasurement,
    pub left_eye: EyeMeasurement,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ProductType {
    Eyewear,
    Service,
    #[serde(rename = "Contact Lenses")]
    ContactLenses,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Id,
    pub sku: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
    Overdue,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub product_id: Option<Id>,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Id,
    pub invoice_number: String,
    pub patient_id: Option<Id>,
    pub customer_id: Option<Id>,
    pub patient_name: String,
    pub staff_id: Option<Id>,
    pub payment_method: Option<String>,
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub discount: f64,
    pub status: InvoiceStatus,
    pub items: Vec<InvoiceItem>,
    pub shop_id: Option<Id>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PurchaseOrderStatus {
    Received,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderItem {
    pub product_id: Id,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: Id,
    pub po_number: String,
    pub supplier: String,
    pub order_date: NaiveDate,
    pub total: f64,
    pub status: PurchaseOrderStatus,
    pub items: Vec<PurchaseOrderItem>,
    pub shop_id: Id,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Id,
    pub patient_id: Id,
    pub patient_name: String,
    pub doctor_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: AppointmentStatus,
    pub shop_id: Id,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Shop {
    pub id: Id,
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Login-bearing staff record: doctors, counter staff and admins share it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Id,
    pub name: String,
    pub email: String,
    pub last_login: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoticeStatus {
    Pending,
    Paid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminPaymentNotice {
    pub admin_email: String,
    pub amount_due: f64,
    pub due_date: DateTime<Utc>,
    pub lock_on_expire: bool,
    pub status: NoticeStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub address: String,
    pub customer_count: u32,
}

// Drafts carry validated input; the store fills in id and timestamps.

#[derive(Debug, Clone)]
pub struct PatientDraft {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub medical_history: String,
    pub shop_id: Option<Id>,
}

#[derive(Debug, Clone)]
pub struct CustomerDraft {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PrescriptionDraft {
    pub patient_id: Id,
    pub right_eye: EyeMeasurement,
    pub left_eye: EyeMeasurement,
}

/// Invoice input for a walk-in sale; `customer_id` and `patient_name` come
/// from the customer created alongside it.
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    pub invoice_number: String,
    pub staff_id: Id,
    pub payment_method: String,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub discount: f64,
    pub status: InvoiceStatus,
    pub items: Vec<InvoiceItem>,
}
