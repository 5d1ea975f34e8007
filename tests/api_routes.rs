use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use staff_optical_api::{
    config::AppConfig, routes::create_router, state::AppState, store::InMemoryStore,
};
use tower::ServiceExt;

const TOKEN: &str = "test-token";

fn app() -> Router {
    let config = AppConfig {
        api_token: TOKEN.to_string(),
        ..AppConfig::default()
    };
    create_router(AppState::new(InMemoryStore::seeded(), config))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

fn post(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

#[tokio::test]
async fn created_customer_can_be_fetched_by_id() {
    let app = app();

    let (status, created) = send(&app, post("/api/customer", json!({ "name": "Test" }), None)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Test");
    let id = created["id"].as_i64().expect("numeric id");
    assert_eq!(id, 2);

    let (status, fetched) = send(&app, get(&format!("/api/customer/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Test");
    assert_eq!(fetched["invoices"], json!([]));
}

#[tokio::test]
async fn customer_requires_a_name() {
    let app = app();
    let (status, body) = send(&app, post("/api/customer", json!({ "phone": "123" }), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "name is required" }));
}

#[tokio::test]
async fn unknown_customer_is_not_found() {
    let app = app();
    for uri in ["/api/customer/999", "/api/customer/abc"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({ "error": "Customer not found" }));
    }
}

#[tokio::test]
async fn customer_search_is_case_insensitive() {
    let app = app();
    send(&app, post("/api/customer", json!({ "name": "John Doe" }), None)).await;

    let (status, body) = send(&app, get("/api/customer?search=JANE")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["customers"][0]["name"], "Jane Smith");

    let (_, body) = send(&app, get("/api/customer?search=")).await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn patient_pages_follow_limit() {
    let app = app();

    let (status, body) = send(&app, get("/api/patient?page=2&limit=2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["patients"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["total"], 5);
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["totalPages"], 3);

    let (_, body) = send(&app, get("/api/patient?page=3&limit=2")).await;
    assert_eq!(body["patients"].as_array().map(Vec::len), Some(1));

    let (_, body) = send(&app, get("/api/patient?page=9&limit=2")).await;
    assert_eq!(body["patients"], json!([]));
    assert_eq!(body["page"], 9);
}

#[tokio::test]
async fn garbage_paging_falls_back_to_defaults() {
    let app = app();
    let (status, body) = send(&app, get("/api/patient?page=abc&limit=0")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["totalPages"], 1);

    let (_, body) = send(&app, get("/api/customer?page=-3&limit=-1")).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 1);
}

#[tokio::test]
async fn patient_lookup_accepts_codes() {
    let app = app();
    let (status, body) = send(&app, get("/api/patient/PAT003")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Anjali Singh");

    let (status, _) = send(&app, get("/api/patient/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patient_create_is_token_gated() {
    let app = app();
    let payload = json!({ "name": "Meera Nair", "age": 41, "gender": "Female" });

    let (status, body) = send(&app, post("/api/patient", payload.clone(), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Unauthorized: Missing Bearer Token" }));

    let (status, body) = send(&app, post("/api/patient", payload.clone(), Some("nope"))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "error": "Forbidden: Invalid Token" }));

    let (status, body) = send(&app, post("/api/patient", payload, Some(TOKEN))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 6);
    assert_eq!(body["name"], "Meera Nair");
    assert_eq!(body["age"], 41);

    let (_, all) = send(&app, get("/api/patients")).await;
    assert_eq!(all.as_array().map(Vec::len), Some(6));
}

#[tokio::test]
async fn patient_without_age_is_rejected_and_not_stored() {
    let app = app();
    let payload = json!({ "name": "No Age", "gender": "Male" });

    let (status, body) = send(&app, post("/api/patient", payload, Some(TOKEN))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "name, age, gender are required" }));

    let (_, all) = send(&app, get("/api/patients")).await;
    assert_eq!(all.as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn unknown_prescription_is_not_found() {
    let app = app();
    let (status, body) = send(&app, get("/api/prescription/99999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Prescription not found" }));
}

#[tokio::test]
async fn prescriptions_embed_their_patient() {
    let app = app();

    let (status, created) = send(
        &app,
        post(
            "/api/prescription",
            json!({
                "patientId": "PAT002",
                "rightEye": { "sph": -1.0, "cyl": -0.25, "axis": 90 },
                "leftEye": { "sph": -1.25 }
            }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 2);
    assert_eq!(created["patientId"], 2);
    assert_eq!(created["patient"]["name"], "Rohan Mehta");

    let (_, list) = send(&app, get("/api/prescription?patientId=2")).await;
    assert_eq!(list["total"], 1);
    assert_eq!(list["prescriptions"][0]["id"], 2);

    let (_, list) = send(&app, get("/api/prescription")).await;
    assert_eq!(list["total"], 2);
    assert_eq!(list["prescriptions"][0]["patient"]["name"], "Priya Sharma");

    let (_, list) = send(&app, get("/api/prescription?patientId=abc")).await;
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn prescription_for_unknown_patient_omits_patient() {
    let app = app();
    let (status, created) = send(
        &app,
        post(
            "/api/prescription",
            json!({ "patientId": 77, "rightEye": {}, "leftEye": {} }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created.get("patient").is_none());
}

#[tokio::test]
async fn prescription_requires_both_eyes() {
    let app = app();
    let (status, body) = send(
        &app,
        post("/api/prescription", json!({ "patientId": 1, "rightEye": {} }), None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "patientId, rightEye, leftEye are required" }));
}

#[tokio::test]
async fn walk_in_invoice_totals_and_links_customer() {
    let app = app();

    let (status, invoice) = send(
        &app,
        post(
            "/api/customer/invoice",
            json!({
                "customer": { "name": "Walk In Test", "phone": "555" },
                "items": [{ "unitPrice": 10, "quantity": 2 }],
                "discount": 5
            }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(invoice["totalAmount"].as_f64(), Some(15.0));
    assert_eq!(invoice["status"], "UNPAID");
    assert_eq!(invoice["paymentMethod"], "cash");
    assert_eq!(invoice["items"][0]["product"]["name"], "Item");
    assert_eq!(invoice["customer"]["id"], 2);

    let (_, customer) = send(&app, get("/api/customer/2")).await;
    assert_eq!(customer["name"], "Walk In Test");
    assert_eq!(customer["invoices"].as_array().map(Vec::len), Some(1));
    assert_eq!(customer["invoices"][0]["totalAmount"].as_f64(), Some(15.0));

    let (_, invoices) = send(&app, get("/api/invoices")).await;
    assert_eq!(invoices.as_array().map(Vec::len), Some(8));
}

#[tokio::test]
async fn default_named_walk_ins_keep_their_own_invoices() {
    let app = app();
    let sale = json!({ "customer": {}, "items": [{ "unitPrice": 10, "quantity": 1 }] });

    let (_, first) = send(&app, post("/api/customer/invoice", sale.clone(), None)).await;
    let (_, second) = send(&app, post("/api/customer/invoice", sale, None)).await;
    assert_eq!(first["customer"]["name"], "Walk-in Customer");
    assert_eq!(second["customer"]["name"], "Walk-in Customer");

    for invoice in [&first, &second] {
        let id = invoice["customer"]["id"].as_i64().expect("customer id");
        let (status, detail) = send(&app, get(&format!("/api/customer/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["invoices"].as_array().map(Vec::len), Some(1));
        assert_eq!(detail["invoices"][0]["id"], invoice["id"]);
    }
}

#[tokio::test]
async fn unlinked_seed_invoices_match_by_name() {
    let app = app();
    let (_, created) = send(&app, post("/api/customer", json!({ "name": "Priya Sharma" }), None)).await;
    let id = created["id"].as_i64().expect("customer id");

    let (_, detail) = send(&app, get(&format!("/api/customer/{id}"))).await;
    let numbers: Vec<&str> = detail["invoices"]
        .as_array()
        .expect("invoices")
        .iter()
        .filter_map(|inv| inv["invoiceNumber"].as_str())
        .collect();
    assert_eq!(numbers, vec!["INV-2024-001", "INV-2024-005"]);
}

#[tokio::test]
async fn walk_in_invoice_rejects_overflowing_total() {
    let app = app();
    let (status, body) = send(
        &app,
        post(
            "/api/customer/invoice",
            json!({ "customer": {}, "items": [{ "unitPrice": 1e308, "quantity": 2 }] }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invoice subtotal is out of range" }));

    let (_, customers) = send(&app, get("/api/customer")).await;
    assert_eq!(customers["total"], 1);
}

#[tokio::test]
async fn walk_in_invoice_paid_in_full_is_paid() {
    let app = app();
    let (status, invoice) = send(
        &app,
        post(
            "/api/customer/invoice",
            json!({
                "customer": {},
                "items": [{ "unitPrice": 20, "quantity": 1, "product": { "name": "Lens Cleaner" } }],
                "paidAmount": 20
            }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(invoice["status"], "PAID");
    assert_eq!(invoice["customer"]["name"], "Walk-in Customer");
    assert_eq!(invoice["items"][0]["product"]["name"], "Lens Cleaner");
}

#[tokio::test]
async fn walk_in_invoice_rejects_bad_input_without_creating_customer() {
    let app = app();

    let (status, body) = send(
        &app,
        post("/api/customer/invoice", json!({ "customer": { "name": "X" } }), None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "customer and items are required" }));

    let (status, _) = send(
        &app,
        post(
            "/api/customer/invoice",
            json!({ "customer": {}, "items": [{ "unitPrice": 1 }], "discount": 5 }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, customers) = send(&app, get("/api/customer")).await;
    assert_eq!(customers["total"], 1);
}

#[tokio::test]
async fn hotspots_are_not_shadowed_by_customer_ids() {
    let app = app();
    let (status, body) = send(&app, get("/api/customer/hotspots")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[0]["address"], "Main Street");
    assert_eq!(body[0]["customerCount"], 15);
}

#[tokio::test]
async fn static_collections_are_served() {
    let app = app();
    let expected = [
        ("/api/products", 11),
        ("/api/invoices", 7),
        ("/api/purchase-orders", 3),
        ("/api/appointments", 5),
        ("/api/shops", 2),
        ("/api/doctors", 3),
        ("/api/staff", 1),
        ("/api/admins", 1),
        ("/api/admin-payment-notices", 1),
    ];
    for (uri, len) in expected {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body.as_array().map(Vec::len), Some(len), "{uri}");
    }
}

#[tokio::test]
async fn unknown_routes_return_json_not_found() {
    let app = app();
    for uri in ["/nope", "/api/unknown"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({ "error": "Not Found" }));
    }
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = app();
    let request = Request::post("/api/customer")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("request");
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
