//! Step 1: line items plus the collection schedule.

use contracts::enums::time_slot::{is_slot_expired, TIME_SLOTS};
use leptos::prelude::*;

use super::view_model::WizardVm;
use crate::shared::date_utils::{now_local, today_iso};
use crate::shared::icons::icon;

#[component]
pub fn DetailsStep(vm: WizardVm, on_open_items: Callback<()>) -> impl IntoView {
    let today = today_iso();
    let today_for_min = today.clone();

    view! {
        <section style="background: white; padding: 18px; border: 1px solid #e5e7eb; border-radius: 10px;">
            <div style="display: flex; align-items: flex-start; justify-content: space-between; margin-bottom: 14px;">
                <div>
                    <h2 style="margin: 0 0 4px 0; font-size: 16px;">"Booking Details"</h2>
                    <p style="margin: 0; font-size: 13px; color: #64748b;">"Select patient tests & schedule"</p>
                </div>
                <button
                    style=move || format!(
                        "padding: 8px 14px; border: none; border-radius: 6px; font-size: 13px; color: white; {}",
                        if vm.customer.get().is_some() { "background: #4f46e5; cursor: pointer;" } else { "background: #cbd5e1; cursor: not-allowed;" }
                    )
                    disabled=move || vm.customer.get().is_none()
                    on:click=move |_| on_open_items.run(())
                >
                    "Add Items"
                </button>
            </div>

            // Schedule
            <div style="margin-bottom: 16px;">
                <h3 style="margin: 0 0 8px 0; font-size: 14px;">"Schedule"</h3>
                <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 14px;">
                    <div>
                        <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Date"</label>
                        <input
                            type="date"
                            min=today_for_min
                            prop:value=move || vm.scheduled_date.get()
                            on:input=move |ev| {
                                vm.scheduled_date.set(event_target_value(&ev));
                                // A new date invalidates the chosen slot.
                                vm.scheduled_slot.set(String::new());
                            }
                            style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 6px; box-sizing: border-box;"
                        />
                    </div>
                    <div>
                        <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Time Slot"</label>
                        <select
                            prop:value=move || vm.scheduled_slot.get()
                            on:change=move |ev| vm.scheduled_slot.set(event_target_value(&ev))
                            style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 6px;"
                        >
                            <option value="">"Select Slot"</option>
                            {
                                let today = today.clone();
                                move || {
                                    let date = vm.scheduled_date.get();
                                    let is_today = date == today;
                                    TIME_SLOTS.iter().map(|slot| {
                                        // Slots already started are only blocked
                                        // for same-day bookings.
                                        let expired = is_today && is_slot_expired(slot, now_local());
                                        view! {
                                            <option value=*slot disabled=expired>
                                                {if expired { format!("{slot} (Unavailable)") } else { slot.to_string() }}
                                            </option>
                                        }
                                    }).collect_view()
                                }
                            }
                        </select>
                    </div>
                </div>
            </div>

            // Items table
            <div style="margin-bottom: 16px; overflow-x: auto;">
                {move || {
                    let items = vm.items.get();
                    if items.is_empty() {
                        view! { <p style="font-size: 13px; color: #888;">"No items added"</p> }.into_any()
                    } else {
                        view! {
                            <table style="width: 100%; min-width: 600px; border-collapse: collapse; font-size: 13px; border: 1px solid #eee; border-radius: 8px; overflow: hidden;">
                                <thead style="background: #f3f4f6;">
                                    <tr>
                                        <th style="padding: 8px; text-align: left;">"Patient"</th>
                                        <th style="padding: 8px; text-align: left;">"Type"</th>
                                        <th style="padding: 8px; text-align: left;">"Item"</th>
                                        <th style="padding: 8px; text-align: center;">"Price"</th>
                                        <th style="padding: 8px; text-align: center;">"Offer"</th>
                                        <th style="padding: 8px; text-align: right;">"Remove"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {items.into_iter().map(|row| {
                                        let row_id = row.id;
                                        view! {
                                            <tr style="border-top: 1px solid #eee;">
                                                <td style="padding: 8px;">{row.patient.full_name()}</td>
                                                <td style="padding: 8px;">{row.item_type.display_name()}</td>
                                                <td style="padding: 8px;">{row.item.name.clone()}</td>
                                                <td style="padding: 8px; text-align: center;">{format!("₹{}", row.price)}</td>
                                                <td style="padding: 8px; text-align: center;">{format!("₹{}", row.offer_price)}</td>
                                                <td style="padding: 8px; text-align: right;">
                                                    <button
                                                        style="background: none; border: none; cursor: pointer; color: #dc2626; padding: 2px;"
                                                        on:click=move |_| vm.remove_item(row_id)
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }
                }}
            </div>

            // Footer
            <div style="display: flex; justify-content: space-between;">
                <button
                    style="padding: 9px 18px; border: 1px solid #ddd; border-radius: 6px; background: white; font-size: 13px; cursor: pointer;"
                    on:click=move |_| vm.go_back()
                >
                    "Back"
                </button>
                <button
                    style=move || format!(
                        "padding: 9px 22px; border: none; border-radius: 6px; color: white; font-size: 13px; {}",
                        if vm.can_continue() { "background: #635bff; cursor: pointer;" } else { "background: #cbd5e1; cursor: not-allowed;" }
                    )
                    disabled=move || !vm.can_continue()
                    on:click=move |_| vm.go_next()
                >
                    "Continue"
                </button>
            </div>
        </section>
    }
}
