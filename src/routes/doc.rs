use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        customers::{CreateCustomerRequest, CustomerDetail, CustomerList},
        invoices::{
            InvoiceLine, InvoiceSummary, ProductName, ProductRef, WalkInCustomer, WalkInInvoice,
            WalkInInvoiceRequest, WalkInItem,
        },
        patients::{CreatePatientRequest, PatientList},
        prescriptions::{
            CreatePrescriptionRequest, IdInput, PatientSummary, PrescriptionList,
            PrescriptionWithPatient,
        },
    },
    error::ErrorBody,
    models::{
        Account, Address, AdminPaymentNotice, Appointment, AppointmentStatus, Customer,
        EyeMeasurement, EyePair, Hotspot, Invoice, InvoiceItem, InvoiceStatus, LoyaltyTier,
        NoticeStatus, Patient, Prescription, Product, ProductType, PurchaseOrder,
        PurchaseOrderItem, PurchaseOrderStatus, Shop, VisionSummary,
    },
    response::PageMeta,
    routes::{catalog, customers, health, params, patients, prescriptions},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Static staff token, see API_TOKEN"))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        patients::all_patients,
        patients::list_patients,
        patients::get_patient,
        patients::create_patient,
        customers::list_customers,
        customers::create_customer,
        customers::get_customer,
        customers::customer_hotspots,
        customers::create_walk_in_invoice,
        prescriptions::list_prescriptions,
        prescriptions::get_prescription,
        prescriptions::create_prescription,
        catalog::list_products,
        catalog::list_invoices,
        catalog::list_purchase_orders,
        catalog::list_appointments,
        catalog::list_shops,
        catalog::list_doctors,
        catalog::list_staff,
        catalog::list_admins,
        catalog::list_admin_payment_notices
    ),
    components(
        schemas(
            Patient,
            Address,
            EyePair,
            VisionSummary,
            LoyaltyTier,
            Customer,
            Prescription,
            EyeMeasurement,
            Product,
            ProductType,
            Invoice,
            InvoiceItem,
            InvoiceStatus,
            PurchaseOrder,
            PurchaseOrderItem,
            PurchaseOrderStatus,
            Appointment,
            AppointmentStatus,
            Shop,
            Account,
            AdminPaymentNotice,
            NoticeStatus,
            Hotspot,
            CreatePatientRequest,
            PatientList,
            CreateCustomerRequest,
            CustomerList,
            CustomerDetail,
            IdInput,
            CreatePrescriptionRequest,
            PatientSummary,
            PrescriptionWithPatient,
            PrescriptionList,
            WalkInCustomer,
            WalkInItem,
            ProductRef,
            WalkInInvoiceRequest,
            WalkInInvoice,
            InvoiceLine,
            InvoiceSummary,
            ProductName,
            params::Pagination,
            params::SearchQuery,
            params::PrescriptionQuery,
            PageMeta,
            ErrorBody
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Patients", description = "Patient endpoints"),
        (name = "Customers", description = "Customer and walk-in invoice endpoints"),
        (name = "Prescriptions", description = "Prescription endpoints"),
        (name = "Catalog", description = "Products, invoices, purchase orders, appointments and shops"),
        (name = "Staff", description = "Doctors, staff, admins and payment notices"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
