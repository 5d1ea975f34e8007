use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::{
        customers::{CreateCustomerRequest, CustomerDetail, CustomerList},
        invoices::{InvoiceSummary, WalkInInvoice, WalkInInvoiceRequest},
    },
    error::{AppError, AppResult},
    models::{Customer, CustomerDraft, Hotspot, Id, InvoiceDraft, InvoiceItem, InvoiceStatus},
    response::paginate,
    routes::params::SearchQuery,
    state::AppState,
};

const WALK_IN_NAME: &str = "Walk-in Customer";
const DEFAULT_PAYMENT_METHOD: &str = "cash";
const DEFAULT_STAFF_ID: Id = 1;
const DEFAULT_ITEM_NAME: &str = "Item";

pub fn list_customers(state: &AppState, query: SearchQuery) -> AppResult<CustomerList> {
    let mut customers = state.store.customers()?;
    if let Some(needle) = query.needle() {
        customers.retain(|c| c.name.to_lowercase().contains(&needle));
    }

    let (customers, meta) = paginate(customers, &query.pagination);
    tracing::debug!(total = meta.total, page = meta.page, "listed customers");
    Ok(CustomerList { customers, meta })
}

pub fn create_customer(state: &AppState, payload: CreateCustomerRequest) -> AppResult<Customer> {
    let name = payload
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("name is required".into()))?;

    let customer = state.store.insert_customer(CustomerDraft {
        name,
        phone: payload.phone,
        address: payload.address,
    })?;

    log_audit(
        "customer_create",
        "customers",
        serde_json::json!({ "customer_id": customer.id }),
    );
    Ok(customer)
}

/// Customer with every invoice issued to them, matched by customer id or,
/// for invoices that predate customer records, by billed name.
pub fn get_customer(state: &AppState, id: Id) -> AppResult<CustomerDetail> {
    let customer = match state.store.customer(id)? {
        Some(c) => c,
        None => return Err(AppError::not_found("Customer")),
    };

    let invoices = state
        .store
        .invoices()?
        .iter()
        .filter(|inv| match inv.customer_id {
            Some(customer_id) => customer_id == customer.id,
            None => inv.patient_name == customer.name,
        })
        .map(InvoiceSummary::from)
        .collect();

    Ok(CustomerDetail {
        id: customer.id,
        name: customer.name,
        phone: customer.phone,
        address: customer.address,
        created_at: customer.created_at,
        updated_at: customer.updated_at,
        invoices,
    })
}

pub fn hotspots(state: &AppState) -> AppResult<Vec<Hotspot>> {
    Ok(state.store.hotspots()?)
}

pub fn create_walk_in_invoice(
    state: &AppState,
    payload: WalkInInvoiceRequest,
) -> AppResult<WalkInInvoice> {
    let (customer, items) = match (payload.customer, payload.items) {
        (Some(customer), Some(items)) => (customer, items),
        _ => {
            return Err(AppError::BadRequest(
                "customer and items are required".into(),
            ));
        }
    };

    let discount = payload.discount.unwrap_or(0.0);
    let paid_amount = payload.paid_amount.unwrap_or(0.0);
    if !discount.is_finite() || discount < 0.0 {
        return Err(AppError::BadRequest("discount must not be negative".into()));
    }
    if !paid_amount.is_finite() || paid_amount < 0.0 {
        return Err(AppError::BadRequest("paidAmount must not be negative".into()));
    }

    let items: Vec<InvoiceItem> = items
        .into_iter()
        .map(|item| InvoiceItem {
            product_id: item.product_id,
            product_name: item
                .product
                .and_then(|p| p.name)
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| DEFAULT_ITEM_NAME.to_string()),
            quantity: item.quantity.filter(|q| *q > 0).unwrap_or(1),
            unit_price: item.unit_price.filter(|p| p.is_finite()).unwrap_or(0.0),
        })
        .collect();

    let subtotal: f64 = items
        .iter()
        .map(|item| item.unit_price * f64::from(item.quantity))
        .sum();
    if !subtotal.is_finite() {
        return Err(AppError::BadRequest(
            "invoice subtotal is out of range".into(),
        ));
    }
    if discount > subtotal {
        return Err(AppError::BadRequest(
            "discount cannot exceed the invoice subtotal".into(),
        ));
    }
    let total_amount = round_cents(subtotal - discount);
    let status = if paid_amount >= total_amount {
        InvoiceStatus::Paid
    } else {
        InvoiceStatus::Unpaid
    };

    let customer = CustomerDraft {
        name: customer
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| WALK_IN_NAME.to_string()),
        phone: Some(customer.phone.unwrap_or_default()),
        address: Some(customer.address.unwrap_or_default()),
    };
    let draft = InvoiceDraft {
        invoice_number: build_invoice_number(Uuid::new_v4()),
        staff_id: payload.staff_id.unwrap_or(DEFAULT_STAFF_ID),
        payment_method: payload
            .payment_method
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string()),
        total_amount,
        paid_amount,
        discount,
        status,
        items,
    };

    let (customer, invoice) = state.store.insert_walk_in(customer, draft)?;

    log_audit(
        "walk_in_invoice_create",
        "invoices",
        serde_json::json!({
            "invoice_id": invoice.id,
            "invoice_number": invoice.invoice_number,
            "customer_id": customer.id,
            "total_amount": invoice.total_amount,
        }),
    );
    Ok(WalkInInvoice::new(invoice, customer))
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn build_invoice_number(invoice_key: Uuid) -> String {
    let date = Utc::now().format("%Y%m%d");
    let suffix = invoice_key.simple().to_string();
    let short = &suffix[..8];
    format!("INV-{}-{}", date, short)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_number_has_date_and_short_suffix() {
        let number = build_invoice_number(Uuid::new_v4());
        let parts: Vec<&str> = number.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "INV");
        assert_eq!(parts[1].len(), 8);
        assert_eq!(parts[2].len(), 8);
    }

    #[test]
    fn rounding_keeps_cents() {
        assert_eq!(round_cents(15.0), 15.0);
        assert_eq!(round_cents(0.1 + 0.2), 0.3);
        assert_eq!(round_cents(199.99 + 50.0), 249.99);
    }
}
