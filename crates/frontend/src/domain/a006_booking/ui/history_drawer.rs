use contracts::domain::a006_booking::BookingActionRow;
use contracts::shared::humanize_code;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_booking::model;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

/// Audit trail of actions applied to one booking, newest first as the
/// backend returns them.
#[component]
pub fn HistoryDrawer(booking_id: i64, on_close: Callback<()>) -> impl IntoView {
    let (rows, set_rows) = signal(Vec::<BookingActionRow>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    spawn_local(async move {
        match model::fetch_history(booking_id).await {
            Ok(data) => {
                set_rows.set(data);
                set_loading.set(false);
            }
            Err(e) => {
                set_error.set(Some(e.to_string()));
                set_loading.set(false);
            }
        }
    });

    view! {
        <div style="position: fixed; inset: 0; z-index: 120; display: flex;">
            <div style="position: absolute; inset: 0; background: rgba(0,0,0,0.4);" on:click=move |_| on_close.run(()) />
            <aside style="position: absolute; right: 0; top: 0; height: 100%; width: 460px; max-width: 100%; background: white; box-shadow: -4px 0 16px rgba(0,0,0,0.15); display: flex; flex-direction: column; z-index: 130;">
                <div style="display: flex; align-items: center; justify-content: space-between; padding: 14px 16px; border-bottom: 1px solid #eee;">
                    <div style="font-size: 16px; font-weight: 600;">"History"</div>
                    <button style="background: none; border: none; cursor: pointer; padding: 6px; color: #666;" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>

                <div style="flex: 1; overflow-y: auto; padding: 12px 16px;">
                    {move || error.get().map(|e| view! { <div style="color: #c33; font-size: 13px; padding: 8px 0;">{e}</div> })}
                    {move || if loading.get() {
                        view! { <div style="text-align: center; padding: 20px; color: #666;">"Loading..."</div> }.into_any()
                    } else {
                        let items = rows.get();
                        if items.is_empty() {
                            view! { <div style="text-align: center; padding: 20px; color: #888;">"No actions yet"</div> }.into_any()
                        } else {
                            items.into_iter().map(|action| view! {
                                <div style="border-left: 3px solid #e0e7ff; padding: 6px 12px; margin-bottom: 10px; font-size: 13px;">
                                    <div style="font-weight: 500;">{humanize_code(&action.action_type)}</div>
                                    <div style="color: #555; margin-top: 2px; white-space: pre-wrap;">{action.remarks.clone()}</div>
                                    <div style="color: #aaa; font-size: 12px; margin-top: 2px;">
                                        {action.created_by_str.clone().unwrap_or_default()}
                                        {action.created_at.as_deref().map(|c| format!(" · {}", format_datetime(c))).unwrap_or_default()}
                                    </div>
                                </div>
                            }).collect_view().into_any()
                        }
                    }}
                </div>
            </aside>
        </div>
    }
}
