use serde_json::{json, Value};
use std::collections::HashSet;

use crate::domain::a006_booking::aggregate::{Booking, ItemRow};
use crate::domain::a006_booking::pricing::{format_amount, parse_money};

/// Action tags accepted by `PATCH /bookings-bulk-update/{id}/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    UpdateSchedule,
    UpdateItems,
    UpdateDiscounts,
}

impl BulkAction {
    pub fn code(&self) -> &'static str {
        match self {
            BulkAction::UpdateSchedule => "update_schedule",
            BulkAction::UpdateItems => "update_items",
            BulkAction::UpdateDiscounts => "update_discounts",
        }
    }
}

/// The wizard's in-progress edit buffer, as the diff engine sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSnapshot {
    pub address_id: Option<i64>,
    pub scheduled_date: String,
    pub scheduled_slot: String,
    pub items: Vec<ItemRow>,
    pub admin_discount: f64,
    pub coupon_discount: f64,
    /// Recomputed by the pricing reducer from the current items/discounts.
    pub final_amount: f64,
}

/// One line of the human-readable items diff.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffItem {
    pub id: i64,
    pub item_name: String,
    pub patient_name: String,
}

/// What changed between the loaded booking and the edit buffer.
///
/// Comparison rules are deliberately shallow and match the bulk-update
/// contract: address by id only, schedule by string equality, items by
/// id-set membership (an in-place price edit on an existing id is
/// invisible), amount by stringified comparison against the server's
/// stored text.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingChanges {
    pub address_changed: bool,
    pub date_changed: bool,
    pub slot_changed: bool,
    pub amount_changed: bool,
    pub discounts_changed: bool,
    pub added: Vec<DiffItem>,
    pub removed: Vec<DiffItem>,
}

impl BookingChanges {
    pub fn items_changed(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }

    pub fn schedule_changed(&self) -> bool {
        self.date_changed || self.slot_changed
    }

    /// The confirmation drawer's "No changes detected" condition. Discount
    /// edits surface through `amount_changed`, so they are not consulted
    /// separately here.
    pub fn nothing_changed(&self) -> bool {
        !self.address_changed
            && !self.date_changed
            && !self.slot_changed
            && !self.amount_changed
            && !self.items_changed()
    }

    /// Minimal action list for the bulk-update request, in wire order.
    pub fn actions(&self) -> Vec<BulkAction> {
        let mut actions = Vec::new();
        if self.schedule_changed() {
            actions.push(BulkAction::UpdateSchedule);
        }
        if self.items_changed() {
            actions.push(BulkAction::UpdateItems);
        }
        if self.discounts_changed {
            actions.push(BulkAction::UpdateDiscounts);
        }
        actions
    }
}

/// Compare the loaded booking against the edit buffer. Pure: inputs are
/// untouched and repeated calls yield identical output.
pub fn diff_booking(original: &Booking, updated: &EditSnapshot) -> BookingChanges {
    let address_changed = original.address_detail.as_ref().map(|a| a.id) != updated.address_id;

    let date_changed = original.scheduled_date != updated.scheduled_date;
    let slot_changed = original.scheduled_time_slot != updated.scheduled_slot;

    // String comparison on purpose: the server stores "750.00"-style text and
    // the buffer recomputes a float. Formatting drift misreports as changed;
    // that is the documented contract, not a bug.
    let amount_changed = original.final_amount != format_amount(updated.final_amount);

    let discounts_changed = parse_money(&original.admin_discount) != updated.admin_discount
        || parse_money(&original.coupon_discount) != updated.coupon_discount;

    let original_ids: HashSet<i64> = original.items.iter().map(|i| i.id).collect();
    let updated_ids: HashSet<i64> = updated.items.iter().map(|i| i.id).collect();

    let added = updated
        .items
        .iter()
        .filter(|i| !original_ids.contains(&i.id))
        .map(|i| DiffItem {
            id: i.id,
            item_name: i.item.name.clone(),
            patient_name: i.patient.full_name(),
        })
        .collect();

    let removed = original
        .items
        .iter()
        .filter(|i| !updated_ids.contains(&i.id))
        .map(|i| DiffItem {
            id: i.id,
            item_name: i.product_name(),
            patient_name: i.patient_name(),
        })
        .collect();

    BookingChanges {
        address_changed,
        date_changed,
        slot_changed,
        amount_changed,
        discounts_changed,
        added,
        removed,
    }
}

/// Assemble the single bulk-update PATCH body, or `None` when the action
/// list is empty — the caller must refuse submission then, remark or not.
/// The item list is a full replacement, never a delta.
pub fn build_bulk_update_payload(
    original: &Booking,
    updated: &EditSnapshot,
    remarks: &str,
) -> Option<Value> {
    let changes = diff_booking(original, updated);
    let actions = changes.actions();
    if actions.is_empty() {
        return None;
    }

    let remarks = if remarks.trim().is_empty() { "Updated from CRM" } else { remarks };
    let mut payload = json!({
        "actions": actions.iter().map(|a| a.code()).collect::<Vec<_>>(),
        "remarks": remarks,
    });

    if changes.schedule_changed() {
        payload["scheduled_date"] = json!(updated.scheduled_date);
        payload["scheduled_time_slot"] = json!(updated.scheduled_slot);
    }
    if changes.items_changed() {
        payload["items"] = Value::Array(
            updated.items.iter().map(|i| i.to_payload(true)).collect(),
        );
    }
    if changes.discounts_changed {
        payload["admin_discount"] = json!(updated.admin_discount);
        payload["coupon"] = match original.coupon.as_ref() {
            Some(coupon) => json!(coupon.id),
            None => Value::Null,
        };
    }

    Some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_patient::Patient;
    use crate::domain::a003_address::Address;
    use crate::domain::a004_lab_test::CatalogItem;
    use crate::domain::a006_booking::aggregate::{Coupon, ServerItem};
    use crate::enums::ItemType;

    fn address(id: i64) -> Address {
        Address {
            id,
            user: 9,
            line1: "12 Beach Rd".into(),
            line2: None,
            city: "Chennai".into(),
            state: "TN".into(),
            pincode: "600001".into(),
            location: Some(4),
            is_default: true,
        }
    }

    fn server_item(id: i64) -> ServerItem {
        ServerItem {
            id,
            patient: Some(3),
            patient_detail: Some(Patient {
                id: 3,
                user: 9,
                first_name: "Ravi".into(),
                last_name: String::new(),
                gender: None,
                age: Some(42),
            }),
            lab_test_detail: Some(CatalogItem {
                id: 100 + id,
                name: format!("Test {id}"),
                price: "500".into(),
                offer_price: "450".into(),
            }),
            package_detail: None,
            base_price: "500".into(),
            offer_price: "450".into(),
        }
    }

    fn booking(items: Vec<ServerItem>) -> Booking {
        Booking {
            id: 77,
            ref_id: "BK-0077".into(),
            user: Some(9),
            user_detail: None,
            user_str: None,
            address: Some(5),
            address_detail: Some(address(5)),
            location_str: None,
            assigned_users: vec![],
            assigned_users_str: vec![],
            scheduled_date: "2024-03-20".into(),
            scheduled_time_slot: "6:00 AM - 7:00 AM".into(),
            items,
            base_total: "500".into(),
            offer_total: "450".into(),
            admin_discount: "0".into(),
            coupon_discount: "0".into(),
            discount_amount: "50".into(),
            final_amount: "450".into(),
            initial_amount: "450".into(),
            coupon: None,
            status: "open".into(),
            payment_status: "pending".into(),
            created_by_str: None,
            created_at: None,
            payment_count: None,
            document_count: None,
        }
    }

    fn edit_row(id: i64, price: &str, offer: &str) -> ItemRow {
        ItemRow {
            id,
            patient: Patient {
                id: 3,
                user: 9,
                first_name: "Ravi".into(),
                last_name: String::new(),
                gender: None,
                age: Some(42),
            },
            item_type: ItemType::LabTest,
            item: CatalogItem {
                id: 100 + id,
                name: format!("Test {id}"),
                price: price.into(),
                offer_price: offer.into(),
            },
            price: price.into(),
            offer_price: offer.into(),
        }
    }

    fn unchanged_snapshot(original: &Booking) -> EditSnapshot {
        EditSnapshot {
            address_id: original.address_detail.as_ref().map(|a| a.id),
            scheduled_date: original.scheduled_date.clone(),
            scheduled_slot: original.scheduled_time_slot.clone(),
            items: original.items.iter().map(ItemRow::from).collect(),
            admin_discount: 0.0,
            coupon_discount: 0.0,
            final_amount: 450.0,
        }
    }

    #[test]
    fn untouched_buffer_reports_nothing_changed() {
        let original = booking(vec![server_item(1)]);
        let snapshot = unchanged_snapshot(&original);
        let changes = diff_booking(&original, &snapshot);
        assert!(changes.nothing_changed());
        assert!(changes.actions().is_empty());
        assert_eq!(build_bulk_update_payload(&original, &snapshot, "still nothing"), None);
    }

    // One item added on top of the original one.
    #[test]
    fn added_item_is_reported_by_id() {
        let original = booking(vec![server_item(1)]);
        let mut snapshot = unchanged_snapshot(&original);
        snapshot.items.push(edit_row(-2, "300", "300"));
        snapshot.final_amount = 750.0;

        let changes = diff_booking(&original, &snapshot);
        assert_eq!(changes.added.len(), 1);
        assert_eq!(changes.added[0].id, -2);
        assert!(changes.removed.is_empty());
        assert!(changes.items_changed());
        assert_eq!(changes.actions(), vec![BulkAction::UpdateItems]);
    }

    // In-place edits on an existing id are invisible by design.
    #[test]
    fn price_edit_on_same_id_is_not_a_change() {
        let original = booking(vec![server_item(1)]);
        let mut snapshot = unchanged_snapshot(&original);
        snapshot.items[0].price = "9999".into();
        snapshot.items[0].offer_price = "9999".into();

        let changes = diff_booking(&original, &snapshot);
        assert!(!changes.items_changed());
    }

    #[test]
    fn removed_item_carries_its_display_names() {
        let original = booking(vec![server_item(1), server_item(2)]);
        let mut snapshot = unchanged_snapshot(&original);
        snapshot.items.remove(1);

        let changes = diff_booking(&original, &snapshot);
        assert_eq!(changes.removed.len(), 1);
        assert_eq!(changes.removed[0].item_name, "Test 2");
        assert_eq!(changes.removed[0].patient_name, "Ravi");
    }

    #[test]
    fn address_compares_by_id_only() {
        let original = booking(vec![server_item(1)]);
        let mut snapshot = unchanged_snapshot(&original);
        // Same id, different content: not a change.
        snapshot.address_id = Some(5);
        assert!(!diff_booking(&original, &snapshot).address_changed);

        snapshot.address_id = Some(6);
        assert!(diff_booking(&original, &snapshot).address_changed);
    }

    #[test]
    fn amount_comparison_is_stringly() {
        let mut original = booking(vec![server_item(1)]);
        let snapshot = unchanged_snapshot(&original);

        // "450" vs 450.0 -> "450": equal.
        assert!(!diff_booking(&original, &snapshot).amount_changed);

        // "450.00" vs "450": format drift misreports as changed. Kept.
        original.final_amount = "450.00".into();
        assert!(diff_booking(&original, &snapshot).amount_changed);
    }

    #[test]
    fn discount_change_builds_update_discounts_action() {
        let mut original = booking(vec![server_item(1)]);
        original.coupon = Some(Coupon { id: 12, code: None, discount: None });
        let mut snapshot = unchanged_snapshot(&original);
        snapshot.admin_discount = 25.0;
        snapshot.final_amount = 425.0;

        let payload = build_bulk_update_payload(&original, &snapshot, "applied discount").unwrap();
        assert_eq!(payload["actions"], serde_json::json!(["update_discounts"]));
        assert_eq!(payload["admin_discount"], 25.0);
        assert_eq!(payload["coupon"], 12);
        assert!(payload.get("items").is_none());
    }

    #[test]
    fn schedule_and_items_compose_in_wire_order() {
        let original = booking(vec![server_item(1)]);
        let mut snapshot = unchanged_snapshot(&original);
        snapshot.scheduled_slot = "9:00 AM - 10:00 AM".into();
        snapshot.items.push(edit_row(-7, "300", "300"));

        let payload = build_bulk_update_payload(&original, &snapshot, "resched + add").unwrap();
        assert_eq!(
            payload["actions"],
            serde_json::json!(["update_schedule", "update_items"])
        );
        assert_eq!(payload["scheduled_time_slot"], "9:00 AM - 10:00 AM");
        // Full replacement list, original row included.
        assert_eq!(payload["items"].as_array().unwrap().len(), 2);
        assert_eq!(payload["items"][0]["id"], 1);
        assert_eq!(payload["items"][1]["id"], -7);
    }

    // Two identical calls must agree; the engine owns no hidden state.
    #[test]
    fn diff_is_idempotent_and_does_not_mutate() {
        let original = booking(vec![server_item(1), server_item(2)]);
        let mut snapshot = unchanged_snapshot(&original);
        snapshot.items.remove(0);
        snapshot.items.push(edit_row(-3, "200", "180"));
        snapshot.admin_discount = 10.0;

        let first = diff_booking(&original, &snapshot);
        let second = diff_booking(&original, &snapshot);
        assert_eq!(first, second);
    }
}
