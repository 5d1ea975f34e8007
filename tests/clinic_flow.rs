use staff_optical_api::{
    config::AppConfig,
    dto::{
        customers::CreateCustomerRequest,
        invoices::{ProductRef, WalkInCustomer, WalkInInvoiceRequest, WalkInItem},
        prescriptions::{CreatePrescriptionRequest, IdInput},
    },
    error::AppError,
    models::{EyeMeasurement, InvoiceStatus},
    routes::params::{Pagination, PrescriptionQuery, SearchQuery},
    services::{customer_service, prescription_service},
    state::AppState,
    store::InMemoryStore,
};

fn setup_state() -> AppState {
    AppState::new(InMemoryStore::seeded(), AppConfig::default())
}

// Front desk flow: register a customer, bill a walk-in sale, record a prescription.
#[tokio::test]
async fn front_desk_flow() -> anyhow::Result<()> {
    let state = setup_state();

    let customer = customer_service::create_customer(
        &state,
        CreateCustomerRequest {
            name: Some("Asha Verma".into()),
            phone: Some("555-0101".into()),
            address: Some("Main Street".into()),
        },
    )?;
    assert_eq!(customer.id, 2);

    let invoice = customer_service::create_walk_in_invoice(
        &state,
        WalkInInvoiceRequest {
            customer: Some(WalkInCustomer {
                name: Some("Asha Verma".into()),
                ..Default::default()
            }),
            items: Some(vec![
                WalkInItem {
                    product_id: Some(8),
                    unit_price: Some(161.0),
                    quantity: Some(1),
                    product: Some(ProductRef {
                        name: Some("Ray-Ban Wayfarer Classic".into()),
                    }),
                },
                WalkInItem {
                    unit_price: Some(12.5),
                    quantity: Some(2),
                    ..Default::default()
                },
            ]),
            payment_method: Some("card".into()),
            paid_amount: Some(186.0),
            discount: Some(0.0),
            ..Default::default()
        },
    )?;
    assert_eq!(invoice.total_amount, 186.0);
    assert_eq!(invoice.status, InvoiceStatus::Paid);
    assert_eq!(invoice.items.len(), 2);
    assert_eq!(invoice.items[1].product.name, "Item");
    assert_eq!(invoice.customer.id, 3);

    // Linked invoices belong to their customer only, even when names repeat.
    let detail = customer_service::get_customer(&state, customer.id)?;
    assert!(detail.invoices.is_empty());
    let walk_in = customer_service::get_customer(&state, invoice.customer.id)?;
    assert_eq!(walk_in.invoices.len(), 1);
    assert_eq!(walk_in.invoices[0].invoice_number, invoice.invoice_number);

    let list = customer_service::list_customers(
        &state,
        SearchQuery {
            pagination: Pagination::new(1, 10),
            search: Some("asha".into()),
        },
    )?;
    assert_eq!(list.meta.total, 2);

    let prescription = prescription_service::create_prescription(
        &state,
        CreatePrescriptionRequest {
            patient_id: Some(IdInput::Number(5)),
            right_eye: Some(EyeMeasurement {
                sph: Some(-2.0),
                ..Default::default()
            }),
            left_eye: Some(EyeMeasurement::default()),
        },
    )?;
    assert_eq!(
        prescription.patient.as_ref().map(|p| p.name.as_str()),
        Some("Sunita Patil")
    );

    let listed = prescription_service::list_prescriptions(
        &state,
        PrescriptionQuery {
            pagination: Pagination::default(),
            patient_id: Some("PAT005".into()),
        },
    )?;
    assert_eq!(listed.meta.total, 1);
    assert_eq!(listed.prescriptions[0].prescription.id, prescription.prescription.id);

    Ok(())
}

#[tokio::test]
async fn invalid_patient_code_is_rejected() {
    let state = setup_state();
    let err = prescription_service::create_prescription(
        &state,
        CreatePrescriptionRequest {
            patient_id: Some(IdInput::Text("not-an-id".into())),
            right_eye: Some(EyeMeasurement::default()),
            left_eye: Some(EyeMeasurement::default()),
        },
    )
    .expect_err("invalid id");
    assert!(matches!(err, AppError::BadRequest(_)));
}
