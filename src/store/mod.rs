//! Repository boundary for clinic data.
//!
//! Handlers only see [`ClinicStore`]; the in-memory implementation is the one
//! wired in today and tests build a fresh one per case.

use thiserror::Error;

use crate::models::{
    Account, AdminPaymentNotice, Appointment, Customer, CustomerDraft, Hotspot, Id, Invoice,
    InvoiceDraft, Patient, PatientDraft, Prescription, PrescriptionDraft, Product, PurchaseOrder,
    Shop,
};

pub mod memory;
pub mod seed;

pub use memory::InMemoryStore;
pub use seed::Collections;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

pub trait ClinicStore: Send + Sync {
    fn patients(&self) -> StoreResult<Vec<Patient>>;
    fn patient(&self, id: Id) -> StoreResult<Option<Patient>>;
    fn insert_patient(&self, draft: PatientDraft) -> StoreResult<Patient>;

    fn customers(&self) -> StoreResult<Vec<Customer>>;
    fn customer(&self, id: Id) -> StoreResult<Option<Customer>>;
    fn insert_customer(&self, draft: CustomerDraft) -> StoreResult<Customer>;

    fn prescriptions(&self) -> StoreResult<Vec<Prescription>>;
    fn prescription(&self, id: Id) -> StoreResult<Option<Prescription>>;
    fn insert_prescription(&self, draft: PrescriptionDraft) -> StoreResult<Prescription>;

    fn invoices(&self) -> StoreResult<Vec<Invoice>>;
    /// Inserts the customer and its invoice as one unit: either both are
    /// visible to readers or neither is.
    fn insert_walk_in(
        &self,
        customer: CustomerDraft,
        invoice: InvoiceDraft,
    ) -> StoreResult<(Customer, Invoice)>;

    fn products(&self) -> StoreResult<Vec<Product>>;
    fn purchase_orders(&self) -> StoreResult<Vec<PurchaseOrder>>;
    fn appointments(&self) -> StoreResult<Vec<Appointment>>;
    fn shops(&self) -> StoreResult<Vec<Shop>>;
    fn doctors(&self) -> StoreResult<Vec<Account>>;
    fn staff(&self) -> StoreResult<Vec<Account>>;
    fn admins(&self) -> StoreResult<Vec<Account>>;
    fn admin_payment_notices(&self) -> StoreResult<Vec<AdminPaymentNotice>>;
    fn hotspots(&self) -> StoreResult<Vec<Hotspot>>;
}
