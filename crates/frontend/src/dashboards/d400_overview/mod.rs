//! Overview dashboard: stat tiles from `/crm/dashboard/` plus the recent
//! booking-action feed.

use contracts::dashboards::d400_overview::DashboardStats;
use contracts::domain::a006_booking::BookingActionRow;
use contracts::shared::humanize_code;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::date_utils::format_datetime;
use crate::shared::http;
use crate::shared::icons::icon;

async fn fetch_stats() -> Result<DashboardStats, contracts::shared::error::ApiError> {
    http::get_json("/crm/dashboard/").await
}

async fn fetch_recent_actions(
) -> Result<Vec<BookingActionRow>, contracts::shared::error::ApiError> {
    http::get_list("/booking-actions/?page_size=15")
        .await
        .map(|(rows, _)| rows)
}

#[component]
fn StatTile(label: &'static str, value: String, accent: &'static str) -> impl IntoView {
    view! {
        <div style=format!("flex: 1; min-width: 150px; background: white; border: 1px solid #e5e7eb; border-left: 4px solid {accent}; border-radius: 10px; padding: 14px 16px;")>
            <div style="font-size: 12px; color: #64748b; margin-bottom: 4px;">{label}</div>
            <div style="font-size: 22px; font-weight: 700;">{value}</div>
        </div>
    }
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (stats, set_stats) = signal(DashboardStats::default());
    let (actions, set_actions) = signal(Vec::<BookingActionRow>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match fetch_stats().await {
                Ok(data) => set_stats.set(data),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            match fetch_recent_actions().await {
                Ok(rows) => set_actions.set(rows),
                Err(e) => log::warn!("Recent actions fetch failed: {e}"),
            }
            set_is_loading.set(false);
        });
    };
    load();

    view! {
        <div style="height: 100%; overflow-y: auto; padding: 16px 20px; background: #f8fafc;">
            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 14px;">
                <h2 style="margin: 0; font-size: 18px;">"Dashboard"</h2>
                <button
                    style="display: inline-flex; align-items: center; gap: 6px; padding: 6px 12px; border: 1px solid #ddd; border-radius: 6px; background: white; cursor: pointer; font-size: 13px;"
                    on:click=move |_| load()
                >
                    {icon("refresh")}
                    "Refresh"
                </button>
            </div>

            {move || error.get().map(|e| view! {
                <div style="background: #fee; color: #c33; padding: 8px 10px; border-radius: 6px; font-size: 13px; margin-bottom: 12px;">{e}</div>
            })}

            {move || if is_loading.get() {
                view! { <div style="padding: 24px; color: #666;">"Loading..."</div> }.into_any()
            } else {
                let s = stats.get();
                view! {
                    <div>
                        <div style="display: flex; gap: 12px; flex-wrap: wrap; margin-bottom: 12px;">
                            <StatTile label="Bookings Today" value=s.bookings_today.to_string() accent="#635bff" />
                            <StatTile label="Open" value=s.open_bookings.to_string() accent="#3b82f6" />
                            <StatTile label="Pending Verification" value=s.pending_verifications.to_string() accent="#eab308" />
                            <StatTile label="Samples Pending" value=s.samples_pending.to_string() accent="#f59e0b" />
                        </div>
                        <div style="display: flex; gap: 12px; flex-wrap: wrap; margin-bottom: 18px;">
                            <StatTile label="Reports Pending" value=s.reports_pending.to_string() accent="#8b5cf6" />
                            <StatTile label="Completed" value=s.completed_bookings.to_string() accent="#22c55e" />
                            <StatTile label="Cancelled" value=s.cancelled_bookings.to_string() accent="#ef4444" />
                            <StatTile label="Revenue Collected" value=format!("₹{}", s.revenue_collected) accent="#14b8a6" />
                        </div>

                        <h3 style="margin: 0 0 8px 0; font-size: 14px;">"Recent Activity"</h3>
                        <div style="background: white; border: 1px solid #e5e7eb; border-radius: 10px; padding: 4px 14px;">
                            {
                                let rows = actions.get();
                                if rows.is_empty() {
                                    view! { <div style="padding: 16px 0; color: #888; font-size: 13px;">"No recent actions"</div> }.into_any()
                                } else {
                                    rows.into_iter().map(|action| view! {
                                        <div style="display: flex; justify-content: space-between; gap: 12px; padding: 10px 0; border-bottom: 1px solid #f3f4f6; font-size: 13px;">
                                            <div>
                                                <span style="font-weight: 500;">{humanize_code(&action.action_type)}</span>
                                                {action.booking_ref.clone().map(|r| view! {
                                                    <span style="color: #635bff;">{format!(" · {r}")}</span>
                                                })}
                                                <div style="color: #64748b; margin-top: 2px;">{action.remarks.clone()}</div>
                                            </div>
                                            <div style="text-align: right; color: #9ca3af; font-size: 12px; white-space: nowrap;">
                                                <div>{action.created_by_str.clone().unwrap_or_default()}</div>
                                                <div>{action.created_at.as_deref().map(format_datetime).unwrap_or_default()}</div>
                                            </div>
                                        </div>
                                    }).collect_view().into_any()
                                }
                            }
                        </div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
