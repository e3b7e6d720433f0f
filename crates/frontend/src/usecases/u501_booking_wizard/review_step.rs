//! Step 2: read-only summaries, the pricing breakdown, the bounded admin
//! discount input, and the final submit.

use contracts::domain::a006_booking::pricing::{
    admin_discount_within_bounds, max_admin_discount, parse_money,
};
use contracts::domain::a006_booking::WizardMode;
use leptos::prelude::*;

use super::view_model::WizardVm;
use crate::shared::icons::icon;
use crate::system::auth::context::{current_user, use_auth};

#[component]
pub fn ReviewStep(
    vm: WizardVm,
    /// Edit mode: open the change-confirmation drawer instead of posting.
    on_submit_edit: Callback<()>,
    on_done: Callback<()>,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let role = current_user(auth_state).and_then(|u| u.role);

    // The reducer never clamps; this gate keeps out-of-bounds proposals out
    // of the buffer entirely.
    let discount_error = {
        let role = role.clone();
        move || {
            let raw = vm.admin_discount_input.get();
            if raw.trim().is_empty() {
                return None;
            }
            let proposed = parse_money(&raw);
            let offer_total = vm.pricing().offer_total;
            match &role {
                Some(role) => {
                    if admin_discount_within_bounds(role, offer_total, proposed) {
                        None
                    } else {
                        Some(format!(
                            "Admin discount must be between ₹1 and ₹{}",
                            max_admin_discount(role, offer_total).floor()
                        ))
                    }
                }
                None => Some("No role assigned; discounts unavailable".to_string()),
            }
        }
    };

    let discount_error_for_disable = discount_error.clone();
    let is_submit_disabled =
        move || vm.submitting.get() || discount_error_for_disable().is_some();

    let handle_submit = move |_| {
        match vm.mode {
            WizardMode::Create => vm.submit_create(on_done),
            WizardMode::Edit => on_submit_edit.run(()),
        }
    };

    let summary_panel_style = "border: 1px solid #e5e7eb; border-radius: 10px; padding: 12px 14px; background: #f9fafb; margin-bottom: 12px;";
    let heading_style = "display: flex; align-items: center; gap: 6px; margin: 0 0 8px 0; font-size: 13px; color: #374151;";

    view! {
        <section style="background: white; padding: 18px; border: 1px solid #e5e7eb; border-radius: 10px;">
            <h2 style="margin: 0 0 14px 0; font-size: 16px;">"Review & Confirm"</h2>

            // Customer
            <div style=summary_panel_style>
                <h3 style=heading_style>{icon("check")}" Customer"</h3>
                {move || match vm.customer.get() {
                    Some(customer) => view! {
                        <div style="font-size: 13px; display: flex; gap: 16px; flex-wrap: wrap;">
                            <span style="font-weight: 600;">{customer.full_name()}</span>
                            <span>{customer.mobile.clone()}</span>
                            {customer.email.clone().map(|e| view! { <span>{e}</span> })}
                            {customer.age.map(|a| view! { <span>{format!("Age: {a}")}</span> })}
                            {customer.gender.clone().map(|g| view! { <span>{format!("Gender: {g}")}</span> })}
                        </div>
                    }.into_any(),
                    None => view! { <p style="font-size: 13px; color: #9ca3af; margin: 0;">"No customer selected"</p> }.into_any(),
                }}
            </div>

            // Address
            <div style=summary_panel_style>
                <h3 style=heading_style>{icon("home")}" Address"</h3>
                {move || match vm.address.get() {
                    Some(address) => view! {
                        <div style="font-size: 13px;">{address.summary()}</div>
                    }.into_any(),
                    None => view! { <p style="font-size: 13px; color: #9ca3af; margin: 0;">"No address selected"</p> }.into_any(),
                }}
            </div>

            // Schedule
            <div style=summary_panel_style>
                <h3 style=heading_style>{icon("calendar")}" Schedule"</h3>
                {move || {
                    let date = vm.scheduled_date.get();
                    if date.is_empty() {
                        view! { <p style="font-size: 13px; color: #9ca3af; margin: 0;">"No schedule selected"</p> }.into_any()
                    } else {
                        view! {
                            <div style="font-size: 13px;">
                                <span style="font-weight: 600;">{crate::shared::date_utils::format_date(&date)}</span>
                                <span style="color: #64748b;">{format!("  {}", vm.scheduled_slot.get())}</span>
                            </div>
                        }.into_any()
                    }
                }}
            </div>

            // Items
            <div style=summary_panel_style>
                <h3 style=heading_style>
                    {icon("test-tube")}
                    {move || format!(" Tests & Patients ({})", vm.items.with(|i| i.len()))}
                </h3>
                {move || {
                    let items = vm.items.get();
                    if items.is_empty() {
                        view! { <p style="font-size: 13px; color: #9ca3af; margin: 0;">"No items added"</p> }.into_any()
                    } else {
                        items.into_iter().map(|row| view! {
                            <div style="display: flex; justify-content: space-between; align-items: flex-start; background: white; border: 1px solid #eee; border-radius: 8px; padding: 8px 12px; margin-bottom: 6px; font-size: 13px;">
                                <div>
                                    <div style="font-weight: 500;">{row.item.name.clone()}</div>
                                    <div style="color: #64748b;">"Patient: " <span style="font-weight: 500;">{row.patient.full_name()}</span></div>
                                    <div style="color: #9ca3af; font-size: 12px;">{row.item_type.display_name()}</div>
                                </div>
                                <div style="text-align: right;">
                                    <div style="font-weight: 600;">{format!("₹{}", row.offer_price)}</div>
                                    {(row.offer_price != row.price).then(|| view! {
                                        <div style="text-decoration: line-through; color: #9ca3af; font-size: 12px;">{format!("₹{}", row.price)}</div>
                                    })}
                                </div>
                            </div>
                        }).collect_view().into_any()
                    }
                }}
            </div>

            // Admin discount input
            <div style=summary_panel_style>
                <h3 style=heading_style>{icon("credit-card")}" Admin Discount"</h3>
                <input
                    prop:value=move || vm.admin_discount_input.get()
                    on:input=move |ev| vm.admin_discount_input.set(event_target_value(&ev))
                    placeholder="0"
                    style="width: 160px; padding: 8px 10px; border: 1px solid #ddd; border-radius: 6px;"
                />
                {
                    let discount_error = discount_error.clone();
                    move || discount_error().map(|e| view! {
                        <div style="color: #dc2626; font-size: 12px; margin-top: 4px;">{e}</div>
                    })
                }
            </div>

            // Pricing summary
            {move || {
                let summary = vm.pricing();
                let admin = vm.admin_discount();
                let coupon = vm.coupon_discount.get();
                view! {
                    <div style="border: 1px solid #e5e7eb; border-radius: 10px; padding: 12px 14px; background: #f9fafb; margin-bottom: 14px; font-size: 13px;">
                        <h3 style="margin: 0 0 8px 0; font-size: 13px; color: #374151;">"Pricing Summary"</h3>
                        <div style="display: flex; justify-content: space-between; padding: 2px 0;">
                            <span>"Base Total"</span><span>{format!("₹{}", summary.base_total)}</span>
                        </div>
                        <div style="display: flex; justify-content: space-between; padding: 2px 0;">
                            <span>"Offer Total"</span><span>{format!("₹{}", summary.offer_total)}</span>
                        </div>
                        <div style="display: flex; justify-content: space-between; padding: 2px 0; color: #15803d;">
                            <span>"Core Discount"</span><span>{format!("-₹{}", summary.core_discount)}</span>
                        </div>
                        {(coupon > 0.0).then(|| view! {
                            <div style="display: flex; justify-content: space-between; padding: 2px 0; color: #15803d;">
                                <span>"Coupon Discount"</span><span>{format!("-₹{coupon}")}</span>
                            </div>
                        })}
                        {(admin > 0.0).then(|| view! {
                            <div style="display: flex; justify-content: space-between; padding: 2px 0; color: #15803d;">
                                <span>"Admin Discount"</span><span>{format!("-₹{admin}")}</span>
                            </div>
                        })}
                        <div style="display: flex; justify-content: space-between; padding: 6px 0 2px 0; font-weight: 500; border-top: 1px solid #e5e7eb; margin-top: 6px;">
                            <span>"Total Discount"</span><span>{format!("-₹{}", summary.total_discount)}</span>
                        </div>
                        <div style="display: flex; justify-content: space-between; padding: 2px 0; font-weight: 700; font-size: 15px;">
                            <span>"Final Amount"</span><span>{format!("₹{}", summary.final_amount)}</span>
                        </div>
                    </div>
                }
            }}

            // Footer
            <div style="display: flex; justify-content: flex-end; gap: 8px;">
                <button
                    style="padding: 9px 18px; border: 1px solid #ddd; border-radius: 6px; background: white; font-size: 13px; cursor: pointer;"
                    on:click=move |_| vm.go_back()
                    disabled=move || !vm.can_open(contracts::domain::a006_booking::WizardStep::BookingDetails)
                >
                    "Back"
                </button>
                <button
                    style={
                        let is_submit_disabled = is_submit_disabled.clone();
                        move || format!(
                            "padding: 9px 24px; border: none; border-radius: 6px; color: white; font-size: 13px; {}",
                            if is_submit_disabled() { "background: #cbd5e1; cursor: not-allowed;" } else { "background: #16a34a; cursor: pointer;" }
                        )
                    }
                    disabled=is_submit_disabled
                    on:click=handle_submit
                >
                    {move || {
                        if vm.submitting.get() {
                            "Saving…"
                        } else if vm.mode == WizardMode::Create {
                            "Create Booking"
                        } else {
                            "Update Booking"
                        }
                    }}
                </button>
            </div>
        </section>
    }
}
