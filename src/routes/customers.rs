use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::{
        customers::{CreateCustomerRequest, CustomerDetail, CustomerList},
        invoices::{WalkInInvoice, WalkInInvoiceRequest},
    },
    error::{AppResult, ErrorBody},
    middleware::json::{AppJson, AppQuery},
    models::{Customer, Hotspot},
    routes::params::{SearchQuery, path_id},
    services::customer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customer", get(list_customers).post(create_customer))
        .route("/customer/hotspots", get(customer_hotspots))
        .route("/customer/invoice", post(create_walk_in_invoice))
        .route("/customer/{id}", get(get_customer))
}

#[utoipa::path(
    get,
    path = "/api/customer",
    params(
        ("page" = Option<String>, Query, description = "Page number, default 1"),
        ("limit" = Option<String>, Query, description = "Items per page, default 10"),
        ("search" = Option<String>, Query, description = "Case-insensitive name filter")
    ),
    responses(
        (status = 200, description = "Paged customers", body = CustomerList),
        (status = 400, description = "Undecodable query", body = ErrorBody)
    ),
    tag = "Customers"
)]
pub async fn list_customers(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SearchQuery>,
) -> AppResult<Json<CustomerList>> {
    let resp = customer_service::list_customers(&state, query)?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/customer",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "name is required", body = ErrorBody)
    ),
    tag = "Customers"
)]
pub async fn create_customer(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCustomerRequest>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let customer = customer_service::create_customer(&state, payload)?;
    Ok((StatusCode::CREATED, Json(customer)))
}

#[utoipa::path(
    get,
    path = "/api/customer/{id}",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer with related invoices", body = CustomerDetail),
        (status = 404, description = "Customer not found", body = ErrorBody)
    ),
    tag = "Customers"
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CustomerDetail>> {
    let id = path_id(&id, "Customer")?;
    let resp = customer_service::get_customer(&state, id)?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/customer/hotspots",
    responses(
        (status = 200, description = "Demo address hotspots", body = Vec<Hotspot>)
    ),
    tag = "Customers"
)]
pub async fn customer_hotspots(State(state): State<AppState>) -> AppResult<Json<Vec<Hotspot>>> {
    Ok(Json(customer_service::hotspots(&state)?))
}

#[utoipa::path(
    post,
    path = "/api/customer/invoice",
    request_body = WalkInInvoiceRequest,
    responses(
        (status = 201, description = "Customer and invoice created", body = WalkInInvoice),
        (status = 400, description = "Missing customer or items", body = ErrorBody)
    ),
    tag = "Customers"
)]
pub async fn create_walk_in_invoice(
    State(state): State<AppState>,
    AppJson(payload): AppJson<WalkInInvoiceRequest>,
) -> AppResult<(StatusCode, Json<WalkInInvoice>)> {
    let invoice = customer_service::create_walk_in_invoice(&state, payload)?;
    Ok((StatusCode::CREATED, Json(invoice)))
}
