pub mod customers;
pub mod invoices;
pub mod patients;
pub mod prescriptions;
