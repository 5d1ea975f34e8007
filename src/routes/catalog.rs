use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult,
    models::{Account, AdminPaymentNotice, Appointment, Invoice, Product, PurchaseOrder, Shop},
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/invoices", get(list_invoices))
        .route("/purchase-orders", get(list_purchase_orders))
        .route("/appointments", get(list_appointments))
        .route("/shops", get(list_shops))
        .route("/doctors", get(list_doctors))
        .route("/staff", get(list_staff))
        .route("/admins", get(list_admins))
        .route("/admin-payment-notices", get(list_admin_payment_notices))
}

#[utoipa::path(get, path = "/api/products", responses((status = 200, description = "OK", body = Vec<Product>)), tag = "Catalog")]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(catalog_service::products(&state)?))
}

#[utoipa::path(get, path = "/api/invoices", responses((status = 200, description = "OK", body = Vec<Invoice>)), tag = "Catalog")]
pub async fn list_invoices(State(state): State<AppState>) -> AppResult<Json<Vec<Invoice>>> {
    Ok(Json(catalog_service::invoices(&state)?))
}

#[utoipa::path(get, path = "/api/purchase-orders", responses((status = 200, description = "OK", body = Vec<PurchaseOrder>)), tag = "Catalog")]
pub async fn list_purchase_orders(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PurchaseOrder>>> {
    Ok(Json(catalog_service::purchase_orders(&state)?))
}

#[utoipa::path(get, path = "/api/appointments", responses((status = 200, description = "OK", body = Vec<Appointment>)), tag = "Catalog")]
pub async fn list_appointments(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Appointment>>> {
    Ok(Json(catalog_service::appointments(&state)?))
}

#[utoipa::path(get, path = "/api/shops", responses((status = 200, description = "OK", body = Vec<Shop>)), tag = "Catalog")]
pub async fn list_shops(State(state): State<AppState>) -> AppResult<Json<Vec<Shop>>> {
    Ok(Json(catalog_service::shops(&state)?))
}

#[utoipa::path(get, path = "/api/doctors", responses((status = 200, description = "OK", body = Vec<Account>)), tag = "Staff")]
pub async fn list_doctors(State(state): State<AppState>) -> AppResult<Json<Vec<Account>>> {
    Ok(Json(catalog_service::doctors(&state)?))
}

#[utoipa::path(get, path = "/api/staff", responses((status = 200, description = "OK", body = Vec<Account>)), tag = "Staff")]
pub async fn list_staff(State(state): State<AppState>) -> AppResult<Json<Vec<Account>>> {
    Ok(Json(catalog_service::staff(&state)?))
}

#[utoipa::path(get, path = "/api/admins", responses((status = 200, description = "OK", body = Vec<Account>)), tag = "Staff")]
pub async fn list_admins(State(state): State<AppState>) -> AppResult<Json<Vec<Account>>> {
    Ok(Json(catalog_service::admins(&state)?))
}

#[utoipa::path(
    get,
    path = "/api/admin-payment-notices",
    responses((status = 200, description = "OK", body = Vec<AdminPaymentNotice>)),
    tag = "Staff"
)]
pub async fn list_admin_payment_notices(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AdminPaymentNotice>>> {
    Ok(Json(catalog_service::admin_payment_notices(&state)?))
}
