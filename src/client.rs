//! Typed HTTP client for the API, used by dashboards and scripts.
//!
//! GETs are retried with exponential backoff when the failure looks
//! transient (network errors, 5xx, 408, 429); other 4xx answers are final.
//! POSTs are sent exactly once.

use std::{env, time::Duration};

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::{
    config::DEFAULT_API_TOKEN,
    dto::{
        customers::{CreateCustomerRequest, CustomerDetail, CustomerList},
        invoices::{WalkInInvoice, WalkInInvoiceRequest},
        patients::{CreatePatientRequest, PatientList},
        prescriptions::{CreatePrescriptionRequest, PrescriptionList, PrescriptionWithPatient},
    },
    models::{
        Account, AdminPaymentNotice, Appointment, Customer, Hotspot, Id, Invoice, Patient,
        Product, PurchaseOrder, Shop,
    },
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: String,
    pub max_attempts: u32,
    pub timeout: Duration,
    pub backoff_base: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: DEFAULT_API_TOKEN.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            timeout: DEFAULT_TIMEOUT,
            backoff_base: DEFAULT_BACKOFF_BASE,
        }
    }

    /// Reads `API_BASE_URL` and `API_TOKEN`.
    pub fn from_env() -> Self {
        let base_url = env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let config = Self::new(base_url);
        match env::var("API_TOKEN") {
            Ok(token) if !token.is_empty() => config.with_token(token),
            _ => config,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// At least one attempt is always made.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    /// Delay after the given 1-based attempt failed: `base * 2^attempt`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.backoff_base
            .saturating_mul(2u32.saturating_pow(attempt))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to fetch {endpoint}: {status}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },
    #[error("Network error for {endpoint}: {message}")]
    Network { endpoint: String, message: String },
    #[error("Unexpected response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
    #[error("failed to build http client: {0}")]
    Builder(#[source] reqwest::Error),
}

impl ClientError {
    /// HTTP status of the failure; 0 when no response was received.
    pub fn status(&self) -> u16 {
        match self {
            ClientError::Status { status, .. } => *status,
            _ => 0,
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        match self {
            ClientError::Status { endpoint, .. }
            | ClientError::Network { endpoint, .. }
            | ClientError::Decode { endpoint, .. } => Some(endpoint),
            ClientError::Builder(_) => None,
        }
    }

    pub fn is_transient(&self) -> bool {
        match self {
            ClientError::Network { .. } => true,
            ClientError::Status { status, .. } => {
                let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::OK);
                status.is_server_error()
                    || status == StatusCode::REQUEST_TIMEOUT
                    || status == StatusCode::TOO_MANY_REQUESTS
            }
            ClientError::Decode { .. } | ClientError::Builder(_) => false,
        }
    }
}

/// Paging and filter parameters for list endpoints. Unset values are not
/// sent, so the server applies its defaults.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub search: Option<String>,
    pub patient_id: Option<Id>,
}

impl ListParams {
    pub fn page(page: usize, limit: usize) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_patient(mut self, patient_id: Id) -> Self {
        self.patient_id = Some(patient_id);
        self
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(search) = self.search.as_ref().filter(|s| !s.is_empty()) {
            query.push(("search", search.clone()));
        }
        if let Some(patient_id) = self.patient_id {
            query.push(("patientId", patient_id.to_string()));
        }
        query
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Builder)?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // Patients

    pub async fn patients(&self) -> Result<Vec<Patient>, ClientError> {
        self.fetch("patients", &[], false).await
    }

    pub async fn patient_list(&self, params: &ListParams) -> Result<PatientList, ClientError> {
        self.fetch("patient", &params.to_query(), false).await
    }

    pub async fn patient(&self, id: Id) -> Result<Patient, ClientError> {
        self.fetch(&format!("patient/{id}"), &[], false).await
    }

    pub async fn create_patient(&self, patient: &CreatePatientRequest) -> Result<Patient, ClientError> {
        self.post("patient", patient, true).await
    }

    // Customers

    pub async fn customers(&self, params: &ListParams) -> Result<CustomerList, ClientError> {
        self.fetch("customer", &params.to_query(), false).await
    }

    pub async fn customer(&self, id: Id) -> Result<CustomerDetail, ClientError> {
        self.fetch(&format!("customer/{id}"), &[], false).await
    }

    pub async fn create_customer(
        &self,
        customer: &CreateCustomerRequest,
    ) -> Result<Customer, ClientError> {
        self.post("customer", customer, false).await
    }

    pub async fn customer_hotspots(&self) -> Result<Vec<Hotspot>, ClientError> {
        self.fetch("customer/hotspots", &[], false).await
    }

    pub async fn create_walk_in_invoice(
        &self,
        invoice: &WalkInInvoiceRequest,
    ) -> Result<WalkInInvoice, ClientError> {
        self.post("customer/invoice", invoice, false).await
    }

    // Prescriptions

    pub async fn prescriptions(&self, params: &ListParams) -> Result<PrescriptionList, ClientError> {
        self.fetch("prescription", &params.to_query(), false).await
    }

    pub async fn prescription(&self, id: Id) -> Result<PrescriptionWithPatient, ClientError> {
        self.fetch(&format!("prescription/{id}"), &[], false).await
    }

    pub async fn create_prescription(
        &self,
        prescription: &CreatePrescriptionRequest,
    ) -> Result<PrescriptionWithPatient, ClientError> {
        self.post("prescription", prescription, false).await
    }

    // Static collections

    pub async fn products(&self) -> Result<Vec<Product>, ClientError> {
        self.fetch("products", &[], false).await
    }

    pub async fn invoices(&self) -> Result<Vec<Invoice>, ClientError> {
        self.fetch("invoices", &[], false).await
    }

    pub async fn purchase_orders(&self) -> Result<Vec<PurchaseOrder>, ClientError> {
        self.fetch("purchase-orders", &[], false).await
    }

    pub async fn appointments(&self) -> Result<Vec<Appointment>, ClientError> {
        self.fetch("appointments", &[], false).await
    }

    pub async fn shops(&self) -> Result<Vec<Shop>, ClientError> {
        self.fetch("shops", &[], false).await
    }

    pub async fn doctors(&self) -> Result<Vec<Account>, ClientError> {
        self.fetch("doctors", &[], false).await
    }

    pub async fn staff(&self) -> Result<Vec<Account>, ClientError> {
        self.fetch("staff", &[], false).await
    }

    pub async fn admins(&self) -> Result<Vec<Account>, ClientError> {
        self.fetch("admins", &[], false).await
    }

    pub async fn admin_payment_notices(&self) -> Result<Vec<AdminPaymentNotice>, ClientError> {
        self.fetch("admin-payment-notices", &[], false).await
    }

    /// GET `/api/{endpoint}`, retrying transient failures up to the attempt cap.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
        requires_auth: bool,
    ) -> Result<T, ClientError> {
        let mut attempt = 1;
        loop {
            tracing::debug!(endpoint, attempt, "api request");
            let mut request = self.request(Method::GET, endpoint, requires_auth);
            if !query.is_empty() {
                request = request.query(query);
            }

            match self.execute(endpoint, request).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() && attempt < self.config.max_attempts => {
                    let delay = self.config.backoff(attempt);
                    tracing::warn!(
                        endpoint,
                        attempt,
                        status = err.status(),
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "api request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    tracing::error!(endpoint, attempt, status = err.status(), error = %err, "api request failed");
                    return Err(err);
                }
            }
        }
    }

    /// POST a JSON body to `/api/{endpoint}`. Never retried.
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        requires_auth: bool,
    ) -> Result<T, ClientError> {
        tracing::debug!(endpoint, "api post");
        let request = self.request(Method::POST, endpoint, requires_auth).json(body);
        self.execute(endpoint, request).await.inspect_err(|err| {
            tracing::error!(endpoint, status = err.status(), error = %err, "api post failed");
        })
    }

    fn request(&self, method: Method, endpoint: &str, requires_auth: bool) -> RequestBuilder {
        let url = format!("{}/api/{}", self.config.base_url, endpoint);
        let request = self.http.request(method, url);
        if requires_auth {
            request.bearer_auth(&self.config.token)
        } else {
            request
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let network = |err: reqwest::Error| ClientError::Network {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        };

        let response = request.send().await.map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(network)?;
        serde_json::from_slice(&bytes).map_err(|err| ClientError::Decode {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_per_attempt() {
        let config = ClientConfig::default().with_backoff_base(Duration::from_millis(100));
        assert_eq!(config.backoff(1), Duration::from_millis(200));
        assert_eq!(config.backoff(2), Duration::from_millis(400));
        assert_eq!(config.backoff(3), Duration::from_millis(800));
    }

    #[test]
    fn attempts_never_drop_below_one() {
        assert_eq!(ClientConfig::default().with_max_attempts(0).max_attempts, 1);
    }

    #[test]
    fn only_transient_failures_are_retried() {
        let status = |status| ClientError::Status {
            endpoint: "x".into(),
            status,
            body: String::new(),
        };
        assert!(status(500).is_transient());
        assert!(status(503).is_transient());
        assert!(status(408).is_transient());
        assert!(status(429).is_transient());
        assert!(!status(400).is_transient());
        assert!(!status(404).is_transient());

        let network = ClientError::Network {
            endpoint: "x".into(),
            message: "refused".into(),
        };
        assert!(network.is_transient());
        assert_eq!(network.status(), 0);
    }

    #[test]
    fn list_params_skip_unset_values() {
        assert!(ListParams::default().to_query().is_empty());
        let query = ListParams::page(2, 5).with_search("jo").to_query();
        assert_eq!(
            query,
            vec![
                ("page", "2".to_string()),
                ("limit", "5".to_string()),
                ("search", "jo".to_string())
            ]
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        assert_eq!(
            ClientConfig::new("http://example.test/").base_url,
            "http://example.test"
        );
    }
}
