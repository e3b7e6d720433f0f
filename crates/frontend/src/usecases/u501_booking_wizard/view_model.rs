//! ViewModel for the booking wizard (EditDetails MVVM standard).
//!
//! All form state lives in individual signals; derived values (pricing,
//! gating) recompute from source signals on every read instead of being
//! patched incrementally.

use contracts::domain::a001_customer::Customer;
use contracts::domain::a003_address::Address;
use contracts::domain::a006_booking::{
    self as booking, Booking, EditSnapshot, ItemRow, PricingMode, PricingSummary, WizardMode,
    WizardStep,
};
use contracts::domain::a006_booking::aggregate::CreateBookingPayload;
use contracts::domain::a006_booking::pricing::parse_money;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_customer::model as customer_model;
use crate::domain::a006_booking::model as booking_model;

#[derive(Clone, Copy)]
pub struct WizardVm {
    pub mode: WizardMode,
    pub booking_id: Option<i64>,

    /// Server snapshot, only present in edit mode once loaded.
    pub original: RwSignal<Option<Booking>>,

    pub customer: RwSignal<Option<Customer>>,
    pub address: RwSignal<Option<Address>>,
    pub items: RwSignal<Vec<ItemRow>>,
    pub scheduled_date: RwSignal<String>,
    pub scheduled_slot: RwSignal<String>,

    /// Raw admin-discount input text; parsed on read.
    pub admin_discount_input: RwSignal<String>,
    pub coupon_discount: RwSignal<f64>,

    pub active_step: RwSignal<WizardStep>,

    pub loading: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,

    /// Dispenser for client-side item ids (negative until persisted).
    next_local_id: StoredValue<i64>,
}

impl WizardVm {
    pub fn new(mode: WizardMode, booking_id: Option<i64>) -> Self {
        Self {
            mode,
            booking_id,
            original: RwSignal::new(None),
            customer: RwSignal::new(None),
            address: RwSignal::new(None),
            items: RwSignal::new(Vec::new()),
            scheduled_date: RwSignal::new(String::new()),
            scheduled_slot: RwSignal::new(String::new()),
            admin_discount_input: RwSignal::new(String::new()),
            coupon_discount: RwSignal::new(0.0),
            active_step: RwSignal::new(booking::initial_step(mode, "")),
            loading: RwSignal::new(mode == WizardMode::Edit),
            submitting: RwSignal::new(false),
            error: RwSignal::new(None),
            next_local_id: StoredValue::new(-1),
        }
    }

    pub fn next_item_id(&self) -> i64 {
        let id = self.next_local_id.get_value();
        self.next_local_id.update_value(|v| *v -= 1);
        id
    }

    pub fn status(&self) -> String {
        self.original
            .with(|o| o.as_ref().map(|b| b.status.clone()))
            .unwrap_or_default()
    }

    /// Load the booking into the edit buffer (edit mode only), mirroring
    /// the server row into client item rows and landing on the step the
    /// lock rules allow.
    pub fn load_booking(&self) {
        let Some(id) = self.booking_id else { return };
        let vm = *self;
        spawn_local(async move {
            match booking_model::fetch_booking(id).await {
                Ok(data) => {
                    vm.customer.set(data.user_detail.clone());
                    vm.address.set(data.address_detail.clone());
                    vm.items.set(data.items.iter().map(ItemRow::from).collect());
                    vm.scheduled_date.set(data.scheduled_date.clone());
                    vm.scheduled_slot.set(data.scheduled_time_slot.clone());
                    let admin = parse_money(&data.admin_discount);
                    vm.admin_discount_input.set(if admin > 0.0 {
                        booking::format_amount(admin)
                    } else {
                        String::new()
                    });
                    vm.coupon_discount.set(parse_money(&data.coupon_discount));
                    vm.active_step.set(booking::initial_step(vm.mode, &data.status));
                    vm.original.set(Some(data));
                    vm.loading.set(false);
                }
                Err(e) => {
                    vm.error.set(Some(format!("Failed to load booking: {e}")));
                    vm.loading.set(false);
                }
            }
        });
    }

    /// Preselect a customer (wizard opened from the customer list).
    pub fn load_customer(&self, customer_id: i64) {
        let vm = *self;
        spawn_local(async move {
            if let Ok(customer) = customer_model::fetch_customer(customer_id).await {
                vm.customer.set(Some(customer));
            }
        });
    }

    pub fn admin_discount(&self) -> f64 {
        parse_money(&self.admin_discount_input.get())
    }

    pub fn pricing_mode(&self) -> PricingMode {
        match self.mode {
            WizardMode::Create => PricingMode::Create,
            WizardMode::Edit => PricingMode::Edit,
        }
    }

    /// Recompute the summary from the current rows and discounts.
    pub fn pricing(&self) -> PricingSummary {
        self.items.with(|items| {
            booking::price_booking(
                items,
                self.admin_discount(),
                self.coupon_discount.get(),
                self.pricing_mode(),
            )
        })
    }

    pub fn can_continue(&self) -> bool {
        booking::can_continue(
            self.active_step.get(),
            self.customer.get().is_some(),
            self.address.get().is_some(),
            self.items.with(|i| i.len()),
            !self.scheduled_date.get().is_empty(),
            !self.scheduled_slot.get().is_empty(),
        )
    }

    pub fn can_open(&self, step: WizardStep) -> bool {
        booking::can_open_step(self.mode, &self.status(), step)
    }

    pub fn try_open(&self, step: WizardStep) {
        if self.can_open(step) {
            self.active_step.set(step);
        }
    }

    pub fn go_next(&self) {
        let next = self.active_step.get_untracked().next();
        self.try_open(next);
    }

    pub fn go_back(&self) {
        let back = self.active_step.get_untracked().back();
        self.try_open(back);
    }

    pub fn remove_item(&self, id: i64) {
        self.items.update(|items| items.retain(|i| i.id != id));
    }

    pub fn append_items(&self, batch: Vec<ItemRow>) {
        self.items.update(|items| items.extend(batch));
    }

    /// The edit buffer as the diff engine sees it.
    pub fn edit_snapshot(&self) -> EditSnapshot {
        EditSnapshot {
            address_id: self.address.with_untracked(|a| a.as_ref().map(|a| a.id)),
            scheduled_date: self.scheduled_date.get_untracked(),
            scheduled_slot: self.scheduled_slot.get_untracked(),
            items: self.items.get_untracked(),
            admin_discount: self.admin_discount(),
            coupon_discount: self.coupon_discount.get_untracked(),
            final_amount: self.pricing().final_amount,
        }
    }

    /// Create-mode submission: one POST with the full payload.
    pub fn submit_create(&self, on_done: Callback<()>) {
        let Some(customer) = self.customer.get_untracked() else { return };
        let Some(address) = self.address.get_untracked() else { return };
        let summary = self.pricing();

        let payload = CreateBookingPayload {
            user: customer.id,
            address: address.id,
            scheduled_date: self.scheduled_date.get_untracked(),
            scheduled_time_slot: self.scheduled_slot.get_untracked(),
            admin_discount: self.admin_discount(),
            coupon_discount: self.coupon_discount.get_untracked(),
            discount_amount: summary.total_discount,
            base_total: summary.base_total,
            offer_total: summary.offer_total,
            final_amount: summary.final_amount,
            total_savings: summary.base_total - summary.final_amount,
            remarks: "Created from CRM".to_string(),
            items: self
                .items
                .with_untracked(|items| items.iter().map(|i| i.to_payload(false)).collect()),
        };

        let vm = *self;
        vm.submitting.set(true);
        vm.error.set(None);
        spawn_local(async move {
            let result = crate::shared::http::post_json::<Booking, _>("/bookings/", &payload).await;
            vm.submitting.set(false);
            match result {
                Ok(_) => on_done.run(()),
                Err(e) => vm.error.set(Some(format!("Failed to create booking: {e}"))),
            }
        });
    }

    /// Edit-mode submission: the single bulk PATCH assembled by the diff
    /// engine. Refused client-side when nothing changed.
    pub fn submit_bulk(&self, remark: String, on_done: Callback<()>) {
        let Some(original) = self.original.get_untracked() else { return };
        let snapshot = self.edit_snapshot();

        let Some(payload) = booking::build_bulk_update_payload(&original, &snapshot, &remark)
        else {
            self.error.set(Some("No changes detected.".into()));
            return;
        };

        let id = original.id;
        let vm = *self;
        vm.submitting.set(true);
        vm.error.set(None);
        spawn_local(async move {
            let result = booking_model::bulk_update_booking(id, &payload).await;
            vm.submitting.set(false);
            match result {
                Ok(_) => on_done.run(()),
                Err(e) => vm.error.set(Some(format!("Failed to update booking: {e}"))),
            }
        });
    }
}
