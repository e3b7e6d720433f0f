use contracts::domain::a006_booking::{roles, Booking};
use contracts::enums::BookingStatus;
use contracts::system::permissions;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::action_drawer::BookingActionDrawer;
use super::documents_drawer::DocumentsDrawer;
use super::history_drawer::HistoryDrawer;
use super::payments_drawer::PaymentsDrawer;
use crate::domain::a006_booking::model::{self, PAGE_SIZE};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::search_box::{RequestGuard, SearchBox};
use crate::shared::status_badge::{PaymentBadge, StatusBadge};
use crate::system::auth::context::{current_user, use_auth};

fn row_tint(status: &str) -> &'static str {
    match status {
        "open" => "#eff6ff",
        "rescheduled" => "#fff7ed",
        "verified" => "#fefce8",
        "root_manager" => "#eef2ff",
        "phlebo" => "#fef3c7",
        "sample_collected" => "#ecfeff",
        "payment_collected" => "#ecfdf5",
        "report_uploaded" => "#f5f3ff",
        "health_manager" => "#f0fdfa",
        "dietitian" => "#fdf2f8",
        "completed" => "#f0fdf4",
        "failed" | "cancelled" => "#fef2f2",
        _ => "#ffffff",
    }
}

/// Full editing stays open while the booking is still in intake; after
/// that only Admin may reopen the wizard.
fn allowed_full_edit(role: &str, status: &str) -> bool {
    role == roles::ADMIN || matches!(status, "open" | "verified")
}

#[component]
pub fn BookingList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let (rows, set_rows) = signal(Vec::<Booking>::new());
    let (total, set_total) = signal(Option::<u64>::None);
    let (page, set_page) = signal(1u32);
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::new());

    let guard = RequestGuard::new();

    let load = move || {
        let token = guard.begin();
        let page_val = page.get_untracked();
        let search_val = search.get_untracked();
        let status_val = status_filter.get_untracked();
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = model::fetch_bookings(page_val, &search_val, &status_val).await;
            // A newer request has superseded this one; drop the response.
            if !guard.is_current(token) {
                return;
            }
            match result {
                Ok((data, count)) => {
                    set_rows.set(data);
                    set_total.set(count);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_is_loading.set(false);
                }
            }
        });
    };

    // Initial load.
    load();

    // Drawer state: which booking each drawer is open for.
    let (drawer_action, set_drawer_action) = signal(Option::<Booking>::None);
    let (drawer_payments, set_drawer_payments) = signal(Option::<i64>::None);
    let (drawer_documents, set_drawer_documents) = signal(Option::<i64>::None);
    let (drawer_history, set_drawer_history) = signal(Option::<i64>::None);

    let role = move || {
        current_user(auth_state)
            .map(|u| u.role_name().to_string())
            .unwrap_or_default()
    };

    let can_create = move || {
        current_user(auth_state)
            .map(|u| u.has_permission(permissions::BOOKINGS_CREATE))
            .unwrap_or(false)
    };

    let total_pages = move || {
        total
            .get()
            .map(|t| ((t as u32) + PAGE_SIZE - 1) / PAGE_SIZE)
            .unwrap_or(1)
            .max(1)
    };

    view! {
        <div style="display: flex; flex-direction: column; height: 100%; overflow: hidden;">
            // Toolbar
            <div style="display: flex; gap: 10px; padding: 10px; background: #f5f5f5; border-bottom: 1px solid #ddd; flex-shrink: 0; align-items: center; flex-wrap: wrap;">
                <SearchBox
                    value=search
                    on_change=Callback::new(move |val: String| {
                        set_search.set(val);
                        set_page.set(1);
                        load();
                    })
                    placeholder="Search ref, customer, mobile...".to_string()
                />

                <select
                    style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;"
                    on:change=move |ev| {
                        set_status_filter.set(event_target_value(&ev));
                        set_page.set(1);
                        load();
                    }
                >
                    <option value="">"All statuses"</option>
                    {BookingStatus::all().into_iter().map(|s| view! {
                        <option value=s.code()>{s.display_name()}</option>
                    }).collect_view()}
                </select>

                <button class="button button--secondary" style="display: inline-flex; align-items: center; gap: 6px; padding: 6px 12px; border: 1px solid #ddd; border-radius: 4px; background: white; cursor: pointer;" on:click=move |_| load()>
                    {icon("refresh")}
                    "Refresh"
                </button>

                <Show when=can_create>
                    <button
                        class="button button--primary"
                        style="display: inline-flex; align-items: center; gap: 6px; padding: 6px 12px; border: none; border-radius: 4px; background: #635bff; color: white; cursor: pointer;"
                        on:click=move |_| tabs_store.open_tab("u501_booking_wizard_new", "New Booking")
                    >
                        {icon("plus")}
                        "New Booking"
                    </button>
                </Show>

                <div style="margin-left: auto; font-size: 14px; color: #666;">
                    "Total: "
                    <strong style="color: #333;">{move || total.get().map(|t| t.to_string()).unwrap_or_else(|| rows.get().len().to_string())}</strong>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error" style="background: #fee; color: #c33; padding: 8px; border-radius: 4px; margin: 8px; font-size: 14px; flex-shrink: 0;">{e}</div>
            })}

            {move || if is_loading.get() {
                view! { <div style="text-align: center; padding: 20px; color: #666;">"Loading..."</div> }.into_any()
            } else {
                let items = rows.get();
                view! {
                    <div style="flex: 1; overflow-y: auto;">
                        <table style="width: 100%; border-collapse: collapse; font-size: 13px;">
                            <thead style="position: sticky; top: 0; background: #f9f9f9; z-index: 10;">
                                <tr style="border-bottom: 2px solid #ddd;">
                                    <th style="padding: 10px 8px; text-align: left; min-width: 90px;">"Ref ID"</th>
                                    <th style="padding: 10px 8px; text-align: left; min-width: 160px;">"Customer"</th>
                                    <th style="padding: 10px 8px; text-align: left; min-width: 180px;">"Location"</th>
                                    <th style="padding: 10px 8px; text-align: left; min-width: 120px;">"Scheduled"</th>
                                    <th style="padding: 10px 8px; text-align: center; min-width: 140px;">"Status"</th>
                                    <th style="padding: 10px 8px; text-align: center; min-width: 90px;">"Payment"</th>
                                    <th style="padding: 10px 8px; text-align: right; min-width: 90px;">"Amount"</th>
                                    <th style="padding: 10px 8px; text-align: right; min-width: 160px;">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {if items.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="8" style="text-align: center; padding: 20px; color: #888;">
                                                "No bookings found"
                                            </td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    items.into_iter().map(|booking| {
                                        let tint = row_tint(&booking.status);
                                        let booking_id = booking.id;
                                        let booking_for_action = booking.clone();
                                        let status_for_edit = booking.status.clone();
                                        view! {
                                            <tr style=format!("background: {tint}; border-bottom: 1px solid #eee;")>
                                                <td style="padding: 8px; font-weight: 500;">{booking.ref_id.clone()}</td>
                                                <td style="padding: 8px;">
                                                    {booking.user_str.clone()
                                                        .or_else(|| booking.user_detail.as_ref().map(|u| u.full_name()))
                                                        .unwrap_or_else(|| "—".to_string())}
                                                </td>
                                                <td style="padding: 8px;">{booking.location_str.clone().unwrap_or_else(|| "—".to_string())}</td>
                                                <td style="padding: 8px;">
                                                    <div>{crate::shared::date_utils::format_date(&booking.scheduled_date)}</div>
                                                    <div style="color: #888; font-size: 12px;">{booking.scheduled_time_slot.clone()}</div>
                                                </td>
                                                <td style="padding: 8px; text-align: center;"><StatusBadge code=booking.status.clone() /></td>
                                                <td style="padding: 8px; text-align: center;"><PaymentBadge code=booking.payment_status.clone() /></td>
                                                <td style="padding: 8px; text-align: right; font-weight: 600;">{format!("₹{}", booking.final_amount)}</td>
                                                <td style="padding: 8px; text-align: right; white-space: nowrap;">
                                                    <button
                                                        title="Update booking"
                                                        style="background: none; border: none; cursor: pointer; padding: 4px; color: #635bff;"
                                                        on:click=move |_| set_drawer_action.set(Some(booking_for_action.clone()))
                                                    >
                                                        {icon("pencil")}
                                                    </button>
                                                    {
                                                        let status = status_for_edit.clone();
                                                        view! {
                                                            <button
                                                                title="Full edit"
                                                                style=move || format!(
                                                                    "background: none; border: none; padding: 4px; {}",
                                                                    if allowed_full_edit(&role(), &status) {
                                                                        "cursor: pointer; color: #0f766e;"
                                                                    } else {
                                                                        "cursor: not-allowed; color: #cbd5e1;"
                                                                    }
                                                                )
                                                                on:click={
                                                                    let status = status_for_edit.clone();
                                                                    move |_| {
                                                                        if allowed_full_edit(&role(), &status) {
                                                                            let key = format!("u501_booking_wizard_edit_{booking_id}");
                                                                            tabs_store.open_tab(&key, "Edit Booking");
                                                                        }
                                                                    }
                                                                }
                                                            >
                                                                {icon("clipboard")}
                                                            </button>
                                                        }
                                                    }
                                                    <button
                                                        title="Payments"
                                                        style="background: none; border: none; cursor: pointer; padding: 4px; color: #374151;"
                                                        on:click=move |_| set_drawer_payments.set(Some(booking_id))
                                                    >
                                                        {icon("credit-card")}
                                                    </button>
                                                    <button
                                                        title="Documents"
                                                        style="background: none; border: none; cursor: pointer; padding: 4px; color: #374151;"
                                                        on:click=move |_| set_drawer_documents.set(Some(booking_id))
                                                    >
                                                        {icon("file-text")}
                                                    </button>
                                                    <button
                                                        title="History"
                                                        style="background: none; border: none; cursor: pointer; padding: 4px; color: #374151;"
                                                        on:click=move |_| set_drawer_history.set(Some(booking_id))
                                                    >
                                                        {icon("history")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}

            // Pager
            <div style="display: flex; align-items: center; justify-content: flex-end; gap: 10px; padding: 8px 12px; border-top: 1px solid #eee; flex-shrink: 0; font-size: 13px;">
                <button
                    style="padding: 4px 10px; border: 1px solid #ddd; border-radius: 4px; background: white; cursor: pointer;"
                    disabled=move || page.get() <= 1
                    on:click=move |_| {
                        set_page.update(|p| *p = p.saturating_sub(1).max(1));
                        load();
                    }
                >
                    "Prev"
                </button>
                <span>{move || format!("Page {} of {}", page.get(), total_pages())}</span>
                <button
                    style="padding: 4px 10px; border: 1px solid #ddd; border-radius: 4px; background: white; cursor: pointer;"
                    disabled=move || page.get() >= total_pages()
                    on:click=move |_| {
                        set_page.update(|p| *p += 1);
                        load();
                    }
                >
                    "Next"
                </button>
            </div>

            // Drawers
            {move || drawer_action.get().map(|booking| view! {
                <BookingActionDrawer
                    booking=booking
                    on_close=Callback::new(move |_| set_drawer_action.set(None))
                    on_success=Callback::new(move |_| {
                        set_drawer_action.set(None);
                        load();
                    })
                />
            })}
            {move || drawer_payments.get().map(|id| view! {
                <PaymentsDrawer booking_id=id on_close=Callback::new(move |_| set_drawer_payments.set(None)) />
            })}
            {move || drawer_documents.get().map(|id| view! {
                <DocumentsDrawer booking_id=id on_close=Callback::new(move |_| set_drawer_documents.set(None)) />
            })}
            {move || drawer_history.get().map(|id| view! {
                <HistoryDrawer booking_id=id on_close=Callback::new(move |_| set_drawer_history.set(None)) />
            })}
        </div>
    }
}
