//! Read-only demo collections.

use crate::{
    error::AppResult,
    models::{
        Account, AdminPaymentNotice, Appointment, Invoice, Product, PurchaseOrder, Shop,
    },
    state::AppState,
};

pub fn products(state: &AppState) -> AppResult<Vec<Product>> {
    Ok(state.store.products()?)
}

pub fn invoices(state: &AppState) -> AppResult<Vec<Invoice>> {
    Ok(state.store.invoices()?)
}

pub fn purchase_orders(state: &AppState) -> AppResult<Vec<PurchaseOrder>> {
    Ok(state.store.purchase_orders()?)
}

pub fn appointments(state: &AppState) -> AppResult<Vec<Appointment>> {
    Ok(state.store.appointments()?)
}

pub fn shops(state: &AppState) -> AppResult<Vec<Shop>> {
    Ok(state.store.shops()?)
}

pub fn doctors(state: &AppState) -> AppResult<Vec<Account>> {
    Ok(state.store.doctors()?)
}

pub fn staff(state: &AppState) -> AppResult<Vec<Account>> {
    Ok(state.store.staff()?)
}

pub fn admins(state: &AppState) -> AppResult<Vec<Account>> {
    Ok(state.store.admins()?)
}

pub fn admin_payment_notices(state: &AppState) -> AppResult<Vec<AdminPaymentNotice>> {
    Ok(state.store.admin_payment_notices()?)
}
