use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::models::{
    Account, AdminPaymentNotice, Appointment, Customer, CustomerDraft, Hotspot, Id,
    Invoice, InvoiceDraft, Patient, PatientDraft, Prescription, PrescriptionDraft, Product,
    PurchaseOrder, Shop, VisionSummary,
};

use super::{ClinicStore, Collections, StoreError, StoreResult, seed};

/// Process-lifetime store. Every call takes the lock once, so readers never
/// see half of a multi-record insert.
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

struct Inner {
    data: Collections,
    next_ids: NextIds,
}

struct NextIds {
    patient: Id,
    customer: Id,
    prescription: Id,
    invoice: Id,
}

impl NextIds {
    fn after(data: &Collections) -> Self {
        fn next<T>(items: &[T], id: impl Fn(&T) -> Id) -> Id {
            items.iter().map(id).max().unwrap_or(0) + 1
        }
        Self {
            patient: next(&data.patients, |p| p.id),
            customer: next(&data.customers, |c| c.id),
            prescription: next(&data.prescriptions, |p| p.id),
            invoice: next(&data.invoices, |i| i.id),
        }
    }
}

fn take(counter: &mut Id) -> Id {
    let id = *counter;
    *counter += 1;
    id
}

impl InMemoryStore {
    pub fn new(data: Collections) -> Self {
        let next_ids = NextIds::after(&data);
        Self {
            inner: RwLock::new(Inner { data, next_ids }),
        }
    }

    /// Store preloaded with the demo data set.
    pub fn seeded() -> Self {
        Self::new(seed::demo_data(Utc::now()))
    }

    pub fn empty() -> Self {
        Self::new(Collections::default())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Inner>> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Inner>> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }

    fn snapshot<T: Clone>(&self, pick: impl Fn(&Collections) -> &Vec<T>) -> StoreResult<Vec<T>> {
        Ok(pick(&self.read()?.data).clone())
    }
}

impl ClinicStore for InMemoryStore {
    fn patients(&self) -> StoreResult<Vec<Patient>> {
        self.snapshot(|d| &d.patients)
    }

    fn patient(&self, id: Id) -> StoreResult<Option<Patient>> {
        let guard = self.read()?;
        Ok(guard.data.patients.iter().find(|p| p.id == id).cloned())
    }

    fn insert_patient(&self, draft: PatientDraft) -> StoreResult<Patient> {
        let mut guard = self.write()?;
        let inner = &mut *guard;
        let now = Utc::now();
        let patient = Patient {
            id: take(&mut inner.next_ids.patient),
            name: draft.name,
            age: Some(draft.age),
            gender: Some(draft.gender),
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            medical_history: draft.medical_history,
            insurance_provider: String::new(),
            insurance_policy_number: String::new(),
            prescription: VisionSummary::default(),
            last_visit: now.date_naive(),
            loyalty_points: None,
            loyalty_tier: None,
            shop_id: draft.shop_id,
            created_at: now,
            updated_at: now,
        };
        inner.data.patients.push(patient.clone());
        Ok(patient)
    }

    fn customers(&self) -> StoreResult<Vec<Customer>> {
        self.snapshot(|d| &d.customers)
    }

    fn customer(&self, id: Id) -> StoreResult<Option<Customer>> {
        let guard = self.read()?;
        Ok(guard.data.customers.iter().find(|c| c.id == id).cloned())
    }

    fn insert_customer(&self, draft: CustomerDraft) -> StoreResult<Customer> {
        let mut guard = self.write()?;
        Ok(push_customer(&mut guard, draft))
    }

    fn prescriptions(&self) -> StoreResult<Vec<Prescription>> {
        self.snapshot(|d| &d.prescriptions)
    }

    fn prescription(&self, id: Id) -> StoreResult<Option<Prescription>> {
        let guard = self.read()?;
        Ok(guard.data.prescriptions.iter().find(|p| p.id == id).cloned())
    }

    fn insert_prescription(&self, draft: PrescriptionDraft) -> StoreResult<Prescription> {
        let mut guard = self.write()?;
        let inner = &mut *guard;
        let now = Utc::now();
        let prescription = Prescription {
            id: take(&mut inner.next_ids.prescription),
            patient_id: draft.patient_id,
            right_eye: draft.right_eye,
            left_eye: draft.left_eye,
            created_at: now,
            updated_at: now,
        };
        inner.data.prescriptions.push(prescription.clone());
        Ok(prescription)
    }

    fn invoices(&self) -> StoreResult<Vec<Invoice>> {
        self.snapshot(|d| &d.invoices)
    }

    fn insert_walk_in(
        &self,
        customer: CustomerDraft,
        draft: InvoiceDraft,
    ) -> StoreResult<(Customer, Invoice)> {
        let mut guard = self.write()?;
        let customer = push_customer(&mut guard, customer);

        let inner = &mut *guard;
        let invoice = Invoice {
            id: take(&mut inner.next_ids.invoice),
            invoice_number: draft.invoice_number,
            patient_id: None,
            customer_id: Some(customer.id),
            patient_name: customer.name.clone(),
            staff_id: Some(draft.staff_id),
            payment_method: Some(draft.payment_method),
            issue_date: customer.created_at.date_naive(),
            due_date: None,
            total_amount: draft.total_amount,
            paid_amount: draft.paid_amount,
            discount: draft.discount,
            status: draft.status,
            items: draft.items,
            shop_id: None,
            created_at: customer.created_at,
            updated_at: customer.created_at,
        };
        inner.data.invoices.push(invoice.clone());
        Ok((customer, invoice))
    }

    fn products(&self) -> StoreResult<Vec<Product>> {
        self.snapshot(|d| &d.products)
    }

    fn purchase_orders(&self) -> StoreResult<Vec<PurchaseOrder>> {
        self.snapshot(|d| &d.purchase_orders)
    }

    fn appointments(&self) -> StoreResult<Vec<Appointment>> {
        self.snapshot(|d| &d.appointments)
    }

    fn shops(&self) -> StoreResult<Vec<Shop>> {
        self.snapshot(|d| &d.shops)
    }

    fn doctors(&self) -> StoreResult<Vec<Account>> {
        self.snapshot(|d| &d.doctors)
    }

    fn staff(&self) -> StoreResult<Vec<Account>> {
        self.snapshot(|d| &d.staff)
    }

    fn admins(&self) -> StoreResult<Vec<Account>> {
        self.snapshot(|d| &d.admins)
    }

    fn admin_payment_notices(&self) -> StoreResult<Vec<AdminPaymentNotice>> {
        self.snapshot(|d| &d.admin_payment_notices)
    }

    fn hotspots(&self) -> StoreResult<Vec<Hotspot>> {
        self.snapshot(|d| &d.hotspots)
    }
}

fn push_customer(inner: &mut Inner, draft: CustomerDraft) -> Customer {
    let now = Utc::now();
    let customer = Customer {
        id: take(&mut inner.next_ids.customer),
        name: draft.name,
        phone: draft.phone,
        address: draft.address,
        created_at: now,
        updated_at: now,
    };
    inner.data.customers.push(customer.clone());
    customer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EyeMeasurement, InvoiceStatus};

    fn customer_draft(name: &str) -> CustomerDraft {
        CustomerDraft {
            name: name.into(),
            phone: None,
            address: None,
        }
    }

    #[test]
    fn seeded_store_continues_ids_after_demo_data() {
        let store = InMemoryStore::seeded();
        assert_eq!(store.patients().unwrap().len(), 5);
        assert_eq!(store.products().unwrap().len(), 11);

        let customer = store.insert_customer(customer_draft("Test")).unwrap();
        assert_eq!(customer.id, 2);

        let prescription = store
            .insert_prescription(PrescriptionDraft {
                patient_id: 3,
                right_eye: EyeMeasurement::default(),
                left_eye: EyeMeasurement::default(),
            })
            .unwrap();
        assert_eq!(prescription.id, 2);
        assert_eq!(store.prescription(2).unwrap().unwrap().patient_id, 3);
    }

    #[test]
    fn empty_store_starts_at_one() {
        let store = InMemoryStore::empty();
        let first = store.insert_customer(customer_draft("A")).unwrap();
        let second = store.insert_customer(customer_draft("B")).unwrap();
        assert_eq!((first.id, second.id), (1, 2));
        assert!(store.customer(3).unwrap().is_none());
    }

    #[test]
    fn walk_in_links_invoice_to_new_customer() {
        let store = InMemoryStore::seeded();
        let (customer, invoice) = store
            .insert_walk_in(
                customer_draft("Walk-in Customer"),
                InvoiceDraft {
                    invoice_number: "INV-TEST".into(),
                    staff_id: 1,
                    payment_method: "cash".into(),
                    total_amount: 15.0,
                    paid_amount: 0.0,
                    discount: 5.0,
                    status: InvoiceStatus::Unpaid,
                    items: Vec::new(),
                },
            )
            .unwrap();

        assert_eq!(invoice.customer_id, Some(customer.id));
        assert_eq!(invoice.id, 8);
        assert_eq!(store.invoices().unwrap().len(), 8);
        assert_eq!(store.customers().unwrap().len(), 2);
    }
}
