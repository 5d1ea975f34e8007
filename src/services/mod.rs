pub mod catalog_service;
pub mod customer_service;
pub mod patient_service;
pub mod prescription_service;
