//! Demo records loaded at process start.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::models::{
    Account, Address, AdminPaymentNotice, Appointment, AppointmentStatus, Customer, EyeMeasurement,
    EyePair, Hotspot, Invoice, InvoiceItem, InvoiceStatus, LoyaltyTier, NoticeStatus, Patient,
    Prescription, Product, ProductType, PurchaseOrder, PurchaseOrderItem, PurchaseOrderStatus,
    Shop, VisionSummary,
};

#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub patients: Vec<Patient>,
    pub customers: Vec<Customer>,
    pub prescriptions: Vec<Prescription>,
    pub products: Vec<Product>,
    pub invoices: Vec<Invoice>,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub appointments: Vec<Appointment>,
    pub shops: Vec<Shop>,
    pub doctors: Vec<Account>,
    pub staff: Vec<Account>,
    pub admins: Vec<Account>,
    pub admin_payment_notices: Vec<AdminPaymentNotice>,
    pub hotspots: Vec<Hotspot>,
}

/// Builds the demo data set. Appointment dates and the payment notice due
/// date are relative to `now`.
pub fn demo_data(now: DateTime<Utc>) -> Collections {
    Collections {
        patients: patients(now),
        customers: vec![Customer {
            id: 1,
            name: "Jane Smith".into(),
            phone: Some("+91-9876543210".into()),
            address: Some("456 Oak Ave, Sometown, USA".into()),
            created_at: at(day(2025, 9, 4), 10, 30),
            updated_at: at(day(2025, 9, 4), 10, 30),
        }],
        prescriptions: vec![Prescription {
            id: 1,
            patient_id: 1,
            right_eye: eye(-1.25, -0.5, 180.0),
            left_eye: eye(-1.5, -0.75, 170.0),
            created_at: at(day(2025, 9, 4), 10, 35),
            updated_at: at(day(2025, 9, 4), 10, 35),
        }],
        products: products(),
        invoices: invoices(),
        purchase_orders: purchase_orders(),
        appointments: appointments(now.date_naive()),
        shops: vec![
            Shop {
                id: 1,
                name: "OptiVision Flagship (Optic City)".into(),
                address: "123 Visionary Ave, Optic City, CA 90210".into(),
                phone: "555-123-4567".into(),
            },
            Shop {
                id: 2,
                name: "OptiVision Visionville".into(),
                address: "456 Lens Lane, Visionville, CA 90211".into(),
                phone: "555-987-6543".into(),
            },
        ],
        doctors: vec![
            account(1, "Dr. Sunita Gupta", "doctor@example.com", "2024-05-20 11:00 AM"),
            account(2, "Dr. Ramesh Sharma", "doctor2@example.com", "2024-05-21 09:30 AM"),
            account(3, "Dr. Meena Iyer", "doctor3@example.com", "2024-05-21 09:30 AM"),
        ],
        staff: vec![account(1, "Raj Patel", "staff@example.com", "2024-05-20 10:00 AM")],
        admins: vec![account(1, "Admin User", "admin@example.com", "2024-05-22 09:00 AM")],
        admin_payment_notices: vec![AdminPaymentNotice {
            admin_email: "admin@example.com".into(),
            amount_due: 250.0,
            due_date: now - Duration::days(5),
            lock_on_expire: true,
            status: NoticeStatus::Pending,
        }],
        hotspots: vec![
            Hotspot {
                address: "Main Street".into(),
                customer_count: 15,
            },
            Hotspot {
                address: "Oak Avenue".into(),
                customer_count: 12,
            },
        ],
    }
}

fn patients(now: DateTime<Utc>) -> Vec<Patient> {
    vec![
        Patient {
            id: 1,
            name: "Priya Sharma".into(),
            age: Some(28),
            gender: Some("Female".into()),
            email: "priya.s@example.com".into(),
            phone: "555-0101".into(),
            address: address("Optic City"),
            medical_history: String::new(),
            insurance_provider: "Global Health".into(),
            insurance_policy_number: "GH-12345678".into(),
            prescription: vision((-1.25, -1.5), (-0.5, -0.75), (180.0, 175.0), (0.0, 0.0)),
            last_visit: day(2023, 10, 15),
            loyalty_points: Some(1250),
            loyalty_tier: Some(LoyaltyTier::Silver),
            shop_id: Some(1),
            created_at: now,
            updated_at: now,
        },
        Patient {
            id: 2,
            name: "Rohan Mehta".into(),
            age: None,
            gender: None,
            email: "rohan.m@example.com".into(),
            phone: "555-0102".into(),
            address: address("Visionville"),
            medical_history: String::new(),
            insurance_provider: "United Coverage".into(),
            insurance_policy_number: "UC-87654321".into(),
            prescription: vision((2.0, 2.25), (0.0, 0.0), (0.0, 0.0), (1.75, 1.75)),
            last_visit: day(2023, 11, 2),
            loyalty_points: Some(800),
            loyalty_tier: Some(LoyaltyTier::Bronze),
            shop_id: Some(2),
            created_at: now,
            updated_at: now,
        },
        Patient {
            id: 3,
            name: "Anjali Singh".into(),
            age: None,
            gender: None,
            email: "anjali.s@example.com".into(),
            phone: "555-0103".into(),
            address: address("Optic City"),
            medical_history: String::new(),
            insurance_provider: "Nile Assurance".into(),
            insurance_policy_number: "NA-10101010".into(),
            prescription: vision((-3.5, -3.75), (-1.25, -1.0), (90.0, 85.0), (0.0, 0.0)),
            last_visit: day(2023, 9, 20),
            loyalty_points: Some(2100),
            loyalty_tier: Some(LoyaltyTier::Gold),
            shop_id: Some(1),
            created_at: now,
            updated_at: now,
        },
        Patient {
            id: 4,
            name: "Vikram Kumar".into(),
            age: None,
            gender: None,
            email: "vikram.k@example.com".into(),
            phone: "555-0104".into(),
            address: address("Lensburg"),
            medical_history: String::new(),
            insurance_provider: "Magic Shield".into(),
            insurance_policy_number: "MS-24681357".into(),
            prescription: vision((0.5, 0.25), (0.0, 0.0), (0.0, 0.0), (2.5, 2.5)),
            last_visit: day(2024, 1, 5),
            loyalty_points: Some(50),
            loyalty_tier: Some(LoyaltyTier::Bronze),
            shop_id: Some(2),
            created_at: now,
            updated_at: now,
        },
        Patient {
            id: 5,
            name: "Sunita Patil".into(),
            age: None,
            gender: None,
            email: "sunita.p@example.com".into(),
            phone: "555-0105".into(),
            address: address("Optic City"),
            medical_history: String::new(),
            insurance_provider: "Global Health".into(),
            insurance_policy_number: "GH-98765432".into(),
            prescription: vision((-2.0, -2.25), (0.0, 0.0), (0.0, 0.0), (0.0, 0.0)),
            last_visit: day(2024, 3, 12),
            loyalty_points: Some(450),
            loyalty_tier: Some(LoyaltyTier::Bronze),
            shop_id: Some(1),
            created_at: now,
            updated_at: now,
        },
    ]
}

fn products() -> Vec<Product> {
    use ProductType::{ContactLenses, Eyewear, Service};

    let rows: [(&str, &str, &str, f64, u32, ProductType, Option<&str>); 11] = [
        ("Z5X-C9V-B2N", "VisionPro Ultra-Thin Frames", "Lightweight and durable frames for all-day comfort.", 199.99, 50, Eyewear, Some("VisionPro")),
        ("A1S-D4F-G7H", "Comprehensive Eye Exam", "Full eye health and vision assessment.", 120.0, 999, Service, None),
        ("Q2W-E5R-T8Y", "AquaSoft Daily Lenses (30-pack)", "Daily disposable contact lenses for ultimate convenience.", 45.5, 200, ContactLenses, Some("AquaSoft")),
        ("U3I-O6P-L9K", "Blue-Light Filtering Add-on", "Protect your eyes from digital screen strain.", 50.0, 999, Service, None),
        ("M4N-B7V-C1X", "Ray-Ban Aviator Classic", "Timeless style and 100% UV protection.", 154.0, 25, Eyewear, Some("Ray-Ban")),
        ("GUC-123-XYZ", "Gucci GG0276S Sunglasses", "Oversized square sunglasses with a bold aesthetic.", 450.0, 15, Eyewear, Some("Gucci")),
        ("ARM-456-ABC", "Armani Exchange AX3050", "Modern and versatile rectangular frames.", 130.0, 30, Eyewear, Some("Armani")),
        ("RAY-789-DEF", "Ray-Ban Wayfarer Classic", "The most recognizable style in the history of sunglasses.", 161.0, 40, Eyewear, Some("Ray-Ban")),
        ("LOCAL-001", "Classic Round Frames", "Simple and elegant round frames for a timeless look.", 79.99, 100, Eyewear, None),
        ("LOCAL-002", "Modern Cat-Eye Glasses", "A stylish cat-eye design with a modern twist.", 89.99, 80, Eyewear, None),
        ("LOCAL-003", "Minimalist Rectangular Frames", "Sleek and professional rectangular frames.", 75.0, 120, Eyewear, None),
    ];

    rows.into_iter()
        .zip(1..)
        .map(|((sku, name, description, price, stock, product_type, brand), id)| Product {
            id,
            sku: sku.into(),
            name: name.into(),
            description: description.into(),
            price,
            stock,
            product_type,
            brand: brand.map(Into::into),
        })
        .collect()
}

fn invoices() -> Vec<Invoice> {
    use InvoiceStatus::{Overdue, Paid, Unpaid};

    vec![
        invoice(1, (1, "Priya Sharma"), (2023, 10, 15), (2023, 11, 14), 249.99, Paid, 1, vec![
            item(1, "VisionPro Ultra-Thin Frames", 199.99),
            item(4, "Blue-Light Filtering Add-on", 50.0),
        ]),
        invoice(2, (2, "Rohan Mehta"), (2023, 11, 2), (2023, 12, 2), 120.0, Overdue, 2, vec![
            item(2, "Comprehensive Eye Exam", 120.0),
        ]),
        invoice(3, (3, "Anjali Singh"), (2023, 9, 20), (2023, 10, 20), 45.5, Paid, 1, vec![
            item(3, "AquaSoft Daily Lenses (30-pack)", 45.5),
        ]),
        invoice(4, (4, "Vikram Kumar"), (2024, 1, 5), (2024, 2, 4), 120.0, Unpaid, 2, vec![
            item(2, "Comprehensive Eye Exam", 120.0),
        ]),
        invoice(5, (1, "Priya Sharma"), (2024, 2, 1), (2024, 3, 1), 161.0, Paid, 1, vec![
            item(8, "Ray-Ban Wayfarer Classic", 161.0),
        ]),
        invoice(6, (5, "Sunita Patil"), (2024, 3, 12), (2024, 4, 11), 329.99, Paid, 1, vec![
            item(6, "Gucci GG0276S Sunglasses", 279.99),
            item(4, "Blue-Light Filtering Add-on", 50.0),
        ]),
        invoice(7, (2, "Rohan Mehta"), (2024, 4, 15), (2024, 5, 15), 130.0, Paid, 2, vec![
            item(7, "Armani Exchange AX3050", 130.0),
        ]),
    ]
}

fn purchase_orders() -> Vec<PurchaseOrder> {
    vec![
        PurchaseOrder {
            id: 1,
            po_number: "PO-2024-001".into(),
            supplier: "VisionPro Optics".into(),
            order_date: day(2024, 1, 10),
            total: 2500.0,
            status: PurchaseOrderStatus::Received,
            items: vec![po_item(1, "VisionPro Ultra-Thin Frames", 25, 100.0, "VisionPro")],
            shop_id: 1,
        },
        PurchaseOrder {
            id: 2,
            po_number: "PO-2024-002".into(),
            supplier: "Ray-Ban Inc.".into(),
            order_date: day(2024, 1, 15),
            total: 3500.0,
            status: PurchaseOrderStatus::Received,
            items: vec![
                po_item(5, "Ray-Ban Aviator Classic", 25, 80.0, "Ray-Ban"),
                po_item(8, "Ray-Ban Wayfarer Classic", 25, 60.0, "Ray-Ban"),
            ],
            shop_id: 1,
        },
        PurchaseOrder {
            id: 3,
            po_number: "PO-2024-003".into(),
            supplier: "AquaSoft Global".into(),
            order_date: day(2024, 2, 5),
            total: 2000.0,
            status: PurchaseOrderStatus::Pending,
            items: vec![po_item(3, "AquaSoft Daily Lenses (30-pack)", 100, 20.0, "AquaSoft")],
            shop_id: 2,
        },
    ]
}

fn appointments(today: NaiveDate) -> Vec<Appointment> {
    let rows = [
        (1, "Priya Sharma", "Dr. Sunita Gupta", 0, "10:00 AM", 1),
        (2, "Rohan Mehta", "Dr. Ramesh Sharma", 2, "11:00 AM", 2),
        (3, "Anjali Singh", "Dr. Sunita Gupta", 2, "02:00 PM", 1),
        (4, "Vikram Kumar", "Dr. Meena Iyer", 4, "09:00 AM", 2),
        (5, "Sunita Patil", "Dr. Ramesh Sharma", 5, "03:00 PM", 1),
    ];

    rows.into_iter()
        .map(|(patient_id, patient_name, doctor_name, offset, time, shop_id)| Appointment {
            id: patient_id,
            patient_id,
            patient_name: patient_name.into(),
            doctor_name: doctor_name.into(),
            date: today + Duration::days(offset),
            time: time.into(),
            status: AppointmentStatus::Scheduled,
            shop_id,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn invoice(
    id: i64,
    (patient_id, patient_name): (i64, &str),
    issued: (i32, u32, u32),
    due: (i32, u32, u32),
    total_amount: f64,
    status: InvoiceStatus,
    shop_id: i64,
    items: Vec<InvoiceItem>,
) -> Invoice {
    let issue_date = day(issued.0, issued.1, issued.2);
    let paid_amount = if status == InvoiceStatus::Paid {
        total_amount
    } else {
        0.0
    };
    Invoice {
        id,
        invoice_number: format!("INV-2024-{id:03}"),
        patient_id: Some(patient_id),
        customer_id: None,
        patient_name: patient_name.into(),
        staff_id: None,
        payment_method: None,
        issue_date,
        due_date: Some(day(due.0, due.1, due.2)),
        total_amount,
        paid_amount,
        discount: 0.0,
        status,
        items,
        shop_id: Some(shop_id),
        created_at: at(issue_date, 0, 0),
        updated_at: at(issue_date, 0, 0),
    }
}

fn item(product_id: i64, product_name: &str, unit_price: f64) -> InvoiceItem {
    InvoiceItem {
        product_id: Some(product_id),
        product_name: product_name.into(),
        quantity: 1,
        unit_price,
    }
}

fn po_item(
    product_id: i64,
    product_name: &str,
    quantity: u32,
    unit_price: f64,
    brand: &str,
) -> PurchaseOrderItem {
    PurchaseOrderItem {
        product_id,
        product_name: product_name.into(),
        quantity,
        unit_price,
        brand: Some(brand.into()),
    }
}

fn account(id: i64, name: &str, email: &str, last_login: &str) -> Account {
    Account {
        id,
        name: name.into(),
        email: email.into(),
        last_login: last_login.into(),
    }
}

fn address(city: &str) -> Address {
    Address {
        city: city.into(),
        state: "CA".into(),
    }
}

fn vision(sphere: (f64, f64), cylinder: (f64, f64), axis: (f64, f64), add: (f64, f64)) -> VisionSummary {
    let pair = |(right, left): (f64, f64)| EyePair { right, left };
    VisionSummary {
        sphere: pair(sphere),
        cylinder: pair(cylinder),
        axis: pair(axis),
        add: pair(add),
    }
}

fn eye(sph: f64, cyl: f64, axis: f64) -> EyeMeasurement {
    EyeMeasurement {
        sph: Some(sph),
        cyl: Some(cyl),
        axis: Some(axis),
        add: Some(0.0),
        pd: Some(32.0),
        bc: Some(8.6),
    }
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar dates")
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    date.and_hms_opt(hour, minute, 0)
        .expect("seed times are valid wall-clock times")
        .and_utc()
}
