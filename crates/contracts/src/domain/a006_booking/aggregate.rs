use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::a001_customer::Customer;
use crate::domain::a002_patient::Patient;
use crate::domain::a003_address::Address;
use crate::domain::a004_lab_test::CatalogItem;
use crate::enums::{ActionType, BookingStatus, DocumentType, ItemType, PaymentMethod};

/// Applied promotional coupon, opaque beyond its id and value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: i64,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub discount: Option<String>,
}

/// Booking line as the server returns it: one (patient, product) pair with
/// the prices captured when the line was created. Exactly one of
/// `lab_test_detail` / `package_detail` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerItem {
    pub id: i64,
    #[serde(default)]
    pub patient: Option<i64>,
    #[serde(default)]
    pub patient_detail: Option<Patient>,
    #[serde(default)]
    pub lab_test_detail: Option<CatalogItem>,
    #[serde(default)]
    pub package_detail: Option<CatalogItem>,
    #[serde(default)]
    pub base_price: String,
    #[serde(default)]
    pub offer_price: String,
}

impl ServerItem {
    pub fn item_type(&self) -> ItemType {
        if self.package_detail.is_some() {
            ItemType::LabPackage
        } else {
            ItemType::LabTest
        }
    }

    pub fn product(&self) -> Option<&CatalogItem> {
        self.lab_test_detail.as_ref().or(self.package_detail.as_ref())
    }

    pub fn product_name(&self) -> String {
        self.product().map(|p| p.name.clone()).unwrap_or_else(|| format!("Item #{}", self.id))
    }

    pub fn patient_name(&self) -> String {
        self.patient_detail
            .as_ref()
            .map(|p| p.full_name())
            .unwrap_or_default()
    }
}

/// The central entity. Money fields stay decimal strings as serialized by
/// the backend; the pricing reducer coerces them when arithmetic is needed.
/// `status` stays a raw code because the server occasionally grows states
/// this client does not know yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub ref_id: String,
    #[serde(default)]
    pub user: Option<i64>,
    #[serde(default)]
    pub user_detail: Option<Customer>,
    #[serde(default)]
    pub user_str: Option<String>,
    #[serde(default)]
    pub address: Option<i64>,
    #[serde(default)]
    pub address_detail: Option<Address>,
    #[serde(default)]
    pub location_str: Option<String>,
    #[serde(default)]
    pub assigned_users: Vec<i64>,
    #[serde(default)]
    pub assigned_users_str: Vec<String>,
    #[serde(default)]
    pub scheduled_date: String,
    #[serde(default)]
    pub scheduled_time_slot: String,
    #[serde(default)]
    pub items: Vec<ServerItem>,
    #[serde(default)]
    pub base_total: String,
    #[serde(default)]
    pub offer_total: String,
    #[serde(default)]
    pub admin_discount: String,
    #[serde(default)]
    pub coupon_discount: String,
    #[serde(default)]
    pub discount_amount: String,
    #[serde(default)]
    pub final_amount: String,
    /// Amount at creation time; never touched by edits, kept for comparison.
    #[serde(default)]
    pub initial_amount: String,
    #[serde(default)]
    pub coupon: Option<Coupon>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub created_by_str: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub payment_count: Option<u32>,
    #[serde(default)]
    pub document_count: Option<u32>,
}

impl Booking {
    pub fn status_enum(&self) -> Option<BookingStatus> {
        BookingStatus::from_code(&self.status)
    }
}

/// Booking line in the wizard's edit buffer. Unpersisted rows carry a
/// negative locally unique id until the server assigns a real one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRow {
    pub id: i64,
    pub patient: Patient,
    pub item_type: ItemType,
    pub item: CatalogItem,
    pub price: String,
    pub offer_price: String,
}

impl ItemRow {
    /// Build the batch of rows for one product across the chosen patients,
    /// one line per (product, patient) pairing.
    pub fn batch(
        product: &CatalogItem,
        item_type: ItemType,
        patients: &[Patient],
        mut next_local_id: impl FnMut() -> i64,
    ) -> Vec<ItemRow> {
        patients
            .iter()
            .map(|patient| ItemRow {
                id: next_local_id(),
                patient: patient.clone(),
                item_type,
                item: product.clone(),
                price: pick_price(&product.price, &product.offer_price),
                offer_price: pick_price(&product.offer_price, &product.price),
            })
            .collect()
    }

    /// Wire shape for create and bulk-update payloads.
    pub fn to_payload(&self, include_id: bool) -> Value {
        let mut payload = json!({
            "patient": self.patient.id,
            "base_price": self.price,
            "offer_price": self.offer_price,
            "product_type": self.item_type.code(),
            "product_id": self.item.id,
        });
        if include_id {
            payload["id"] = json!(self.id);
        }
        payload
    }
}

fn pick_price(preferred: &str, fallback: &str) -> String {
    if preferred.trim().is_empty() {
        if fallback.trim().is_empty() {
            "0".to_string()
        } else {
            fallback.to_string()
        }
    } else {
        preferred.to_string()
    }
}

impl From<&ServerItem> for ItemRow {
    fn from(row: &ServerItem) -> Self {
        ItemRow {
            id: row.id,
            patient: row.patient_detail.clone().unwrap_or(Patient {
                id: row.patient.unwrap_or(0),
                user: 0,
                first_name: String::new(),
                last_name: String::new(),
                gender: None,
                age: None,
            }),
            item_type: row.item_type(),
            item: row.product().cloned().unwrap_or(CatalogItem {
                id: 0,
                name: String::new(),
                price: String::new(),
                offer_price: String::new(),
            }),
            price: row.base_price.clone(),
            offer_price: row.offer_price.clone(),
        }
    }
}

/// Single-field update issued from the action drawer. A closed set of
/// variants keeps invalid combinations (a status update with no status)
/// unrepresentable; `into_payload` produces the `PATCH /bookings/{id}/`
/// body.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionRequest {
    UpdateStatus { to: BookingStatus },
    UpdateAgent { agent_id: i64 },
    UpdatePayment { method: PaymentMethod },
    AddRemark,
}

impl ActionRequest {
    pub fn action_type(&self) -> ActionType {
        match self {
            ActionRequest::UpdateStatus { .. } => ActionType::UpdateStatus,
            ActionRequest::UpdateAgent { .. } => ActionType::UpdateAgent,
            ActionRequest::UpdatePayment { .. } => ActionType::UpdatePayment,
            ActionRequest::AddRemark => ActionType::AddRemark,
        }
    }

    pub fn into_payload(self, remarks: &str) -> Value {
        let mut payload = json!({
            "action_type": self.action_type().code(),
            "remarks": remarks,
        });
        match self {
            ActionRequest::UpdateStatus { to } => {
                payload["status"] = json!(to.code());
            }
            ActionRequest::UpdateAgent { agent_id } => {
                payload["assigned_users"] = json!([agent_id]);
            }
            ActionRequest::UpdatePayment { method } => {
                payload["payment_method"] = json!(method.code());
                // Cash settles on the spot; the server records it as captured.
                if method == PaymentMethod::Cash {
                    payload["payment_status"] = json!("success");
                }
            }
            ActionRequest::AddRemark => {}
        }
        payload
    }
}

/// `POST /bookings/` body assembled by the wizard's review step.
#[derive(Debug, Clone, Serialize)]
pub struct CreateBookingPayload {
    pub user: i64,
    pub address: i64,
    pub scheduled_date: String,
    pub scheduled_time_slot: String,
    pub admin_discount: f64,
    pub coupon_discount: f64,
    pub discount_amount: f64,
    pub base_total: f64,
    pub offer_total: f64,
    pub final_amount: f64,
    pub total_savings: f64,
    pub remarks: String,
    pub items: Vec<Value>,
}

/// Row of `/booking-payments/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPayment {
    pub id: i64,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub txn_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Row of `/booking-documents/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDocument {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub doc_type: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl BookingDocument {
    pub fn doc_type_label(&self) -> String {
        self.doc_type
            .as_deref()
            .and_then(DocumentType::from_code)
            .map(|d| d.display_name().to_string())
            .unwrap_or_else(|| crate::shared::humanize_code(self.doc_type.as_deref().unwrap_or("")))
    }
}

/// Audit-trail row of `/booking-actions/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingActionRow {
    pub id: i64,
    #[serde(default)]
    pub booking: Option<i64>,
    #[serde(default)]
    pub booking_ref: Option<String>,
    #[serde(default)]
    pub action_type: String,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub created_by_str: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(id: i64) -> Patient {
        Patient {
            id,
            user: 9,
            first_name: format!("P{id}"),
            last_name: String::new(),
            gender: None,
            age: Some(30),
        }
    }

    #[test]
    fn batch_appends_one_row_per_patient() {
        let product = CatalogItem {
            id: 11,
            name: "CBC".into(),
            price: "500".into(),
            offer_price: "450".into(),
        };
        let mut next = -1;
        let rows = ItemRow::batch(&product, ItemType::LabTest, &[patient(1), patient(2)], || {
            let id = next;
            next -= 1;
            id
        });
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, -1);
        assert_eq!(rows[1].id, -2);
        assert!(rows.iter().all(|r| r.item.id == 11 && r.price == "500" && r.offer_price == "450"));
    }

    #[test]
    fn batch_falls_back_across_missing_prices() {
        let product = CatalogItem {
            id: 12,
            name: "Thyroid".into(),
            price: String::new(),
            offer_price: "300".into(),
        };
        let rows = ItemRow::batch(&product, ItemType::LabTest, &[patient(1)], || -1);
        assert_eq!(rows[0].price, "300");
        assert_eq!(rows[0].offer_price, "300");
    }

    #[test]
    fn action_payloads_carry_only_their_fields() {
        let patch = ActionRequest::UpdateStatus { to: BookingStatus::Verified }.into_payload("ok");
        assert_eq!(patch["action_type"], "update_status");
        assert_eq!(patch["status"], "verified");
        assert!(patch.get("assigned_users").is_none());

        let patch = ActionRequest::UpdateAgent { agent_id: 7 }.into_payload("assign");
        assert_eq!(patch["assigned_users"], json!([7]));
        assert!(patch.get("status").is_none());

        let patch = ActionRequest::UpdatePayment { method: PaymentMethod::Cash }.into_payload("paid");
        assert_eq!(patch["payment_method"], "cash");
        assert_eq!(patch["payment_status"], "success");

        let patch = ActionRequest::UpdatePayment { method: PaymentMethod::Online }.into_payload("link");
        assert!(patch.get("payment_status").is_none());
    }

    #[test]
    fn server_item_maps_to_edit_row() {
        let server = ServerItem {
            id: 41,
            patient: Some(3),
            patient_detail: Some(patient(3)),
            lab_test_detail: Some(CatalogItem {
                id: 11,
                name: "CBC".into(),
                price: "500".into(),
                offer_price: "450".into(),
            }),
            package_detail: None,
            base_price: "500".into(),
            offer_price: "450".into(),
        };
        let row = ItemRow::from(&server);
        assert_eq!(row.id, 41);
        assert_eq!(row.item_type, ItemType::LabTest);
        assert_eq!(row.item.name, "CBC");
        assert_eq!(row.price, "500");
    }
}
