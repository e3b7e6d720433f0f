//! Confirmation drawer for booking edits: a human-readable before/after of
//! the detected changes plus the mandatory remark.

use contracts::domain::a006_booking::{diff_booking, format_amount, BookingChanges};
use leptos::prelude::*;

use super::view_model::WizardVm;
use crate::shared::icons::icon;

#[component]
pub fn ChangesDrawer(vm: WizardVm, on_close: Callback<()>, on_done: Callback<()>) -> impl IntoView {
    let (remark, set_remark) = signal(String::new());

    // One diff per open; the drawer is recreated each time it is shown.
    let changes: Option<BookingChanges> = vm
        .original
        .get_untracked()
        .map(|original| diff_booking(&original, &vm.edit_snapshot()));

    let original = vm.original.get_untracked();

    let nothing_changed = changes.as_ref().map(|c| c.nothing_changed()).unwrap_or(true);
    // A remark is always required; an empty action list still refuses
    // submission even with one.
    let confirm_disabled =
        move || remark.get().trim().is_empty() || vm.submitting.get();

    let handle_confirm = move |_| {
        let text = remark.get().trim().to_string();
        if text.is_empty() {
            return;
        }
        vm.submit_bulk(text, on_done);
    };

    let row_style = "font-size: 13px; padding: 8px 10px; border-radius: 6px; border: 1px solid #fb923c; background: #fff7ed; margin-bottom: 6px;";

    view! {
        <div style="position: fixed; inset: 0; z-index: 140; display: flex;">
            <div style="position: absolute; inset: 0; background: rgba(0,0,0,0.4);" on:click=move |_| on_close.run(()) />
            <aside style="position: absolute; right: 0; top: 0; height: 100%; width: 520px; max-width: 100%; background: white; box-shadow: -4px 0 16px rgba(0,0,0,0.15); display: flex; flex-direction: column; z-index: 150;">
                <div style="display: flex; align-items: center; justify-content: space-between; padding: 14px 16px; border-bottom: 1px solid #eee;">
                    <div style="font-size: 16px; font-weight: 600;">"Confirm Changes"</div>
                    <button style="background: none; border: none; cursor: pointer; padding: 6px; color: #666;" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>

                <div style="flex: 1; overflow-y: auto; padding: 16px;">
                    {nothing_changed.then(|| view! {
                        <div style="text-align: center; color: #64748b; font-size: 13px; padding: 24px 0;">
                            "No changes detected."
                        </div>
                    })}

                    {changes.as_ref().map(|changes| {
                        let mut sections: Vec<AnyView> = Vec::new();

                        if changes.address_changed {
                            let before = original
                                .as_ref()
                                .and_then(|o| o.address_detail.as_ref())
                                .map(|a| a.summary())
                                .unwrap_or_else(|| "—".to_string());
                            let after = vm
                                .address
                                .get_untracked()
                                .map(|a| a.summary())
                                .unwrap_or_else(|| "—".to_string());
                            sections.push(view! {
                                <div style="margin-bottom: 14px;">
                                    <h3 style="margin: 0 0 6px 0; font-size: 13px; color: #374151;">"Address"</h3>
                                    <div style=row_style>
                                        <div style="font-weight: 500;">"Selected Address"</div>
                                        <div style="display: flex; justify-content: space-between; gap: 10px; font-size: 12px; margin-top: 4px;">
                                            <span style="flex: 1;"><span style="color: #9ca3af;">"Before: "</span>{before}</span>
                                            <span style="flex: 1; text-align: right;"><span style="color: #9ca3af;">"After: "</span>{after}</span>
                                        </div>
                                    </div>
                                </div>
                            }.into_any());
                        }

                        if changes.items_changed() {
                            let added = changes.added.clone();
                            let removed = changes.removed.clone();
                            sections.push(view! {
                                <div style="margin-bottom: 14px;">
                                    <h3 style="margin: 0 0 6px 0; font-size: 13px; color: #374151;">"Items"</h3>
                                    {(!added.is_empty()).then(|| view! {
                                        <div style="border-left: 4px solid #22c55e; background: #f0fdf4; padding: 8px 10px; border-radius: 6px; margin-bottom: 6px;">
                                            <div style="font-weight: 600; color: #15803d; font-size: 13px; margin-bottom: 4px;">"Added Items"</div>
                                            {added.iter().map(|item| view! {
                                                <div style="font-size: 13px; color: #15803d;">
                                                    {format!("+ {} ({})", item.item_name, item.patient_name)}
                                                </div>
                                            }).collect_view()}
                                        </div>
                                    })}
                                    {(!removed.is_empty()).then(|| view! {
                                        <div style="border-left: 4px solid #ef4444; background: #fef2f2; padding: 8px 10px; border-radius: 6px;">
                                            <div style="font-weight: 600; color: #b91c1c; font-size: 13px; margin-bottom: 4px;">"Removed Items"</div>
                                            {removed.iter().map(|item| view! {
                                                <div style="font-size: 13px; color: #b91c1c;">
                                                    {format!("− {} ({})", item.item_name, item.patient_name)}
                                                </div>
                                            }).collect_view()}
                                        </div>
                                    })}
                                </div>
                            }.into_any());
                        }

                        if changes.schedule_changed() {
                            let date_row = changes.date_changed.then(|| {
                                let before = original
                                    .as_ref()
                                    .map(|o| o.scheduled_date.clone())
                                    .unwrap_or_default();
                                let after = vm.scheduled_date.get_untracked();
                                view! {
                                    <div style=row_style>
                                        <div style="font-weight: 500;">"Date"</div>
                                        <div style="display: flex; justify-content: space-between; gap: 10px; font-size: 12px; margin-top: 4px;">
                                            <span><span style="color: #9ca3af;">"Before: "</span>{before}</span>
                                            <span><span style="color: #9ca3af;">"After: "</span>{after}</span>
                                        </div>
                                    </div>
                                }
                            });
                            let slot_row = changes.slot_changed.then(|| {
                                let before = original
                                    .as_ref()
                                    .map(|o| o.scheduled_time_slot.clone())
                                    .unwrap_or_default();
                                let after = vm.scheduled_slot.get_untracked();
                                view! {
                                    <div style=row_style>
                                        <div style="font-weight: 500;">"Time Slot"</div>
                                        <div style="display: flex; justify-content: space-between; gap: 10px; font-size: 12px; margin-top: 4px;">
                                            <span><span style="color: #9ca3af;">"Before: "</span>{before}</span>
                                            <span><span style="color: #9ca3af;">"After: "</span>{after}</span>
                                        </div>
                                    </div>
                                }
                            });
                            sections.push(view! {
                                <div style="margin-bottom: 14px;">
                                    <h3 style="margin: 0 0 6px 0; font-size: 13px; color: #374151;">"Schedule"</h3>
                                    {date_row}
                                    {slot_row}
                                </div>
                            }.into_any());
                        }

                        if changes.amount_changed {
                            let before = original
                                .as_ref()
                                .map(|o| o.final_amount.clone())
                                .unwrap_or_default();
                            let after = format_amount(vm.pricing().final_amount);
                            sections.push(view! {
                                <div style="margin-bottom: 14px;">
                                    <h3 style="margin: 0 0 6px 0; font-size: 13px; color: #374151;">"Final Amount"</h3>
                                    <div style=row_style>
                                        <div style="font-weight: 500;">"Amount"</div>
                                        <div style="display: flex; justify-content: space-between; gap: 10px; font-size: 12px; margin-top: 4px;">
                                            <span><span style="color: #9ca3af;">"Before: "</span>{format!("₹{before}")}</span>
                                            <span><span style="color: #9ca3af;">"After: "</span>{format!("₹{after}")}</span>
                                        </div>
                                    </div>
                                </div>
                            }.into_any());
                        }

                        sections.collect_view()
                    })}

                    // Remark
                    <div>
                        <h3 style="margin: 0 0 6px 0; font-size: 13px; color: #374151;">"Remarks (required)"</h3>
                        <textarea
                            rows="3"
                            placeholder="Describe changes made…"
                            style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 6px; box-sizing: border-box; font-family: inherit; font-size: 13px;"
                            prop:value=move || remark.get()
                            on:input=move |ev| set_remark.set(event_target_value(&ev))
                        />
                    </div>

                    {move || vm.error.get().map(|e| view! {
                        <div style="color: #dc2626; font-size: 13px; margin-top: 8px;">{e}</div>
                    })}
                </div>

                <div style="padding: 12px 16px; border-top: 1px solid #eee; display: flex; justify-content: flex-end; gap: 8px;">
                    <button
                        style="padding: 8px 14px; border: 1px solid #ddd; border-radius: 6px; background: white; font-size: 13px; cursor: pointer;"
                        on:click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        style=move || format!(
                            "padding: 8px 20px; border: none; border-radius: 6px; color: white; font-size: 13px; {}",
                            if confirm_disabled() { "background: #9ca3af; cursor: not-allowed;" } else { "background: #16a34a; cursor: pointer;" }
                        )
                        disabled=confirm_disabled
                        on:click=handle_confirm
                    >
                        {move || if vm.submitting.get() { "Saving…" } else { "Confirm Changes" }}
                    </button>
                </div>
            </aside>
        </div>
    }
}
