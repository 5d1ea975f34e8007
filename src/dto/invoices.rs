use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Customer, Id, Invoice, InvoiceItem, InvoiceStatus};

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct WalkInCustomer {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct ProductRef {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalkInItem {
    pub product_id: Option<Id>,
    pub unit_price: Option<f64>,
    pub quantity: Option<u32>,
    pub product: Option<ProductRef>,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalkInInvoiceRequest {
    pub customer: Option<WalkInCustomer>,
    pub items: Option<Vec<WalkInItem>>,
    /// Defaults to `cash`
    pub payment_method: Option<String>,
    /// Defaults to 1
    pub staff_id: Option<Id>,
    /// Defaults to 0
    pub paid_amount: Option<f64>,
    /// Defaults to 0
    pub discount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductName {
    pub name: String,
}

/// Invoice line as the point-of-sale screens render it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Id>,
    pub quantity: u32,
    pub unit_price: f64,
    pub product: ProductName,
}

impl InvoiceLine {
    pub fn lines(items: &[InvoiceItem]) -> Vec<InvoiceLine> {
        items
            .iter()
            .zip(1..)
            .map(|(item, id)| InvoiceLine {
                id,
                product_id: item.product_id,
                quantity: item.quantity,
                unit_price: item.unit_price,
                product: ProductName {
                    name: item.product_name.clone(),
                },
            })
            .collect()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    pub id: Id,
    pub invoice_number: String,
    pub total_amount: f64,
    pub status: InvoiceStatus,
    pub items: Vec<InvoiceLine>,
}

impl From<&Invoice> for InvoiceSummary {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            invoice_number: invoice.invoice_number.clone(),
            total_amount: invoice.total_amount,
            status: invoice.status,
            items: InvoiceLine::lines(&invoice.items),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalkInInvoice {
    pub id: Id,
    pub invoice_number: String,
    pub staff_id: Option<Id>,
    pub payment_method: Option<String>,
    pub paid_amount: f64,
    pub discount: f64,
    pub total_amount: f64,
    pub status: InvoiceStatus,
    pub items: Vec<InvoiceLine>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub customer: Customer,
}

impl WalkInInvoice {
    pub fn new(invoice: Invoice, customer: Customer) -> Self {
        Self {
            id: invoice.id,
            items: InvoiceLine::lines(&invoice.items),
            invoice_number: invoice.invoice_number,
            staff_id: invoice.staff_id,
            payment_method: invoice.payment_method,
            paid_amount: invoice.paid_amount,
            discount: invoice.discount,
            total_amount: invoice.total_amount,
            status: invoice.status,
            created_at: invoice.created_at,
            updated_at: invoice.updated_at,
            customer,
        }
    }
}
