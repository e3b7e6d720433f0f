//! Lightweight single-action update drawer for a booking.
//!
//! The action and status dropdowns come straight from the authorization
//! table; changing the action type resets every dependent field.

use contracts::domain::a006_booking::{workflow, ActionRequest};
use contracts::enums::{ActionType, BookingStatus, DocumentType, PaymentMethod};
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::domain::a006_booking::model;
use crate::shared::icons::icon;
use crate::shared::search_box::RequestGuard;
use crate::system::auth::context::{current_user, use_auth};

fn file_from_input(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    let input: web_sys::HtmlInputElement = ev.target()?.dyn_into().ok()?;
    input.files()?.get(0)
}

#[component]
pub fn BookingActionDrawer(
    booking: contracts::domain::a006_booking::Booking,
    on_close: Callback<()>,
    on_success: Callback<()>,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let booking_id = booking.id;
    let ref_id = booking.ref_id.clone();
    let current_status = booking.status.clone();
    let assigned = booking.assigned_users_str.clone();

    let role = current_user(auth_state)
        .map(|u| u.role_name().to_string())
        .unwrap_or_default();

    let actions = workflow::action_options(&role, &current_status);
    let statuses = workflow::status_options(&role, &current_status);

    let (action_type, set_action_type) = signal(Option::<ActionType>::None);
    let (remarks, set_remarks) = signal(String::new());
    let (status_choice, set_status_choice) = signal(Option::<BookingStatus>::None);
    let (payment_method, set_payment_method) = signal(Option::<PaymentMethod>::None);
    let (doc_name, set_doc_name) = signal(String::new());
    let (doc_type, set_doc_type) = signal(DocumentType::Other);
    // Files are JS handles, not Send; they live in thread-local storage.
    let doc_file = RwSignal::new_local(Option::<web_sys::File>::None);
    let payment_proof = RwSignal::new_local(Option::<web_sys::File>::None);

    let (agent_search, set_agent_search) = signal(String::new());
    let (agent_results, set_agent_results) = signal(Vec::<UserInfo>::new());
    let (selected_agent, set_selected_agent) = signal(Option::<UserInfo>::None);
    let (searching_agent, set_searching_agent) = signal(false);

    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let agent_guard = RequestGuard::new();
    let debounce_timeout = StoredValue::new(None::<i32>);

    // Dependent form state resets whenever the action type changes; the
    // authorization table itself is a pure lookup.
    let select_action = move |action: Option<ActionType>| {
        set_action_type.set(action);
        set_error.set(None);
        set_status_choice.set(None);
        set_payment_method.set(None);
        set_agent_search.set(String::new());
        set_agent_results.set(Vec::new());
        set_selected_agent.set(None);
        set_doc_name.set(String::new());
        set_doc_type.set(DocumentType::Other);
        doc_file.set(None);
        payment_proof.set(None);
    };

    // Debounced agent search with a generation guard against out-of-order
    // responses.
    let run_agent_search = move |query: String| {
        set_agent_search.set(query.clone());
        set_selected_agent.set(None);

        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }
        if query.trim().is_empty() {
            set_agent_results.set(Vec::new());
            return;
        }

        let closure = wasm_bindgen::closure::Closure::once_into_js(move || {
            let token = agent_guard.begin();
            set_searching_agent.set(true);
            spawn_local(async move {
                let result = model::search_agents(&query).await;
                if !agent_guard.is_current(token) {
                    return;
                }
                set_searching_agent.set(false);
                match result {
                    Ok(rows) => set_agent_results.set(rows),
                    Err(e) => log::error!("Agent search failed: {e}"),
                }
            });
        });
        let timeout_id = web_sys::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                300,
            )
            .ok()
        });
        debounce_timeout.set_value(timeout_id);
    };

    let is_submit_disabled = move || {
        loading.get()
            || action_type.get().is_none()
            || remarks.get().trim().is_empty()
            || (action_type.get() == Some(ActionType::UpdateStatus) && status_choice.get().is_none())
            || (action_type.get() == Some(ActionType::UpdateAgent) && selected_agent.get().is_none())
            || (action_type.get() == Some(ActionType::UpdatePayment) && payment_method.get().is_none())
            || (action_type.get() == Some(ActionType::UploadDocument) && doc_file.get().is_none())
    };

    let handle_submit = move |_| {
        let Some(action) = action_type.get() else {
            set_error.set(Some("Select action type".into()));
            return;
        };
        let remark_text = remarks.get();
        if remark_text.trim().is_empty() {
            set_error.set(Some("Remarks required".into()));
            return;
        }

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = match action {
                ActionType::UploadDocument => match doc_file.get_untracked() {
                    Some(file) => {
                        let form = web_sys::FormData::new().unwrap();
                        let _ = form.append_with_str("booking", &booking_id.to_string());
                        let _ = form.append_with_str("name", &doc_name.get_untracked());
                        let _ = form.append_with_str("doc_type", doc_type.get_untracked().code());
                        let _ = form.append_with_blob("file", &file);
                        model::upload_document(&form).await.map(|_| ())
                    }
                    None => {
                        set_loading.set(false);
                        set_error.set(Some("Select file".into()));
                        return;
                    }
                },
                ActionType::UpdatePayment
                    if payment_method.get_untracked() == Some(PaymentMethod::Cash) =>
                {
                    // Cash settles immediately; multipart so the proof image
                    // can ride along.
                    let form = web_sys::FormData::new().unwrap();
                    let _ = form.append_with_str("action_type", "update_payment");
                    let _ = form.append_with_str("payment_method", "cash");
                    let _ = form.append_with_str("remarks", &remark_text);
                    let _ = form.append_with_str("payment_status", "success");
                    if let Some(proof) = payment_proof.get_untracked() {
                        let _ = form.append_with_blob("file", &proof);
                    }
                    model::patch_booking_form(booking_id, &form).await.map(|_| ())
                }
                ActionType::UpdateStatus => match status_choice.get_untracked() {
                    Some(to) => {
                        let payload = ActionRequest::UpdateStatus { to }.into_payload(&remark_text);
                        model::patch_booking_action(booking_id, &payload).await.map(|_| ())
                    }
                    None => {
                        set_loading.set(false);
                        return;
                    }
                },
                ActionType::UpdateAgent => match selected_agent.get_untracked() {
                    Some(agent) => {
                        let payload =
                            ActionRequest::UpdateAgent { agent_id: agent.id }.into_payload(&remark_text);
                        model::patch_booking_action(booking_id, &payload).await.map(|_| ())
                    }
                    None => {
                        set_loading.set(false);
                        set_error.set(Some("Please select an agent".into()));
                        return;
                    }
                },
                ActionType::UpdatePayment => match payment_method.get_untracked() {
                    Some(method) => {
                        let payload =
                            ActionRequest::UpdatePayment { method }.into_payload(&remark_text);
                        model::patch_booking_action(booking_id, &payload).await.map(|_| ())
                    }
                    None => {
                        set_loading.set(false);
                        return;
                    }
                },
                ActionType::AddRemark => {
                    let payload = ActionRequest::AddRemark.into_payload(&remark_text);
                    model::patch_booking_action(booking_id, &payload).await.map(|_| ())
                }
            };

            set_loading.set(false);
            match result {
                Ok(()) => on_success.run(()),
                Err(e) => set_error.set(Some(if e.message.is_empty() {
                    "Update failed".to_string()
                } else {
                    e.message
                })),
            }
        });
    };

    view! {
        <div style="position: fixed; inset: 0; z-index: 120; display: flex;">
            // Backdrop
            <div
                style="position: absolute; inset: 0; background: rgba(0,0,0,0.4);"
                on:click=move |_| on_close.run(())
            />

            // Drawer
            <aside style="position: absolute; right: 0; top: 0; height: 100%; width: 480px; max-width: 100%; background: white; box-shadow: -4px 0 16px rgba(0,0,0,0.15); display: flex; flex-direction: column; z-index: 130;">
                // Header
                <div style="display: flex; align-items: center; justify-content: space-between; padding: 14px 16px; border-bottom: 1px solid #eee;">
                    <div style="font-size: 16px; font-weight: 600;">
                        "Update Booking — " <span style="color: #635bff;">{ref_id.clone()}</span>
                    </div>
                    <button
                        style="background: none; border: none; cursor: pointer; padding: 6px; color: #666;"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>

                // Content
                <div style="flex: 1; overflow-y: auto; padding: 16px;">
                    // Action type
                    <div style="margin-bottom: 14px;">
                        <label style="display: block; font-size: 13px; font-weight: 500; margin-bottom: 4px;">"Action Type"</label>
                        <select
                            style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px;"
                            on:change=move |ev| {
                                select_action(ActionType::from_code(&event_target_value(&ev)));
                            }
                        >
                            <option value="">"— Select —"</option>
                            {actions.iter().map(|a| view! {
                                <option value=a.code()>{a.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    // Status choice
                    <Show when=move || action_type.get() == Some(ActionType::UpdateStatus)>
                        <div style="margin-bottom: 14px;">
                            <label style="display: block; font-size: 13px; font-weight: 500; margin-bottom: 4px;">"New Status"</label>
                            <select
                                style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px;"
                                on:change=move |ev| {
                                    set_status_choice.set(BookingStatus::from_code(&event_target_value(&ev)));
                                }
                            >
                                <option value="" disabled selected>"Select status"</option>
                                {statuses.iter().map(|s| view! {
                                    <option value=s.code()>{s.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                    </Show>

                    // Agent assignment
                    <Show when=move || action_type.get() == Some(ActionType::UpdateAgent)>
                        <div style="margin-bottom: 14px;">
                            <label style="display: block; font-size: 13px; font-weight: 500; margin-bottom: 4px;">"Assign Agent"</label>

                            <div style="position: relative;">
                                <input
                                    prop:value=move || agent_search.get()
                                    on:input=move |ev| run_agent_search(event_target_value(&ev))
                                    placeholder="Search agent by name or mobile"
                                    style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px; box-sizing: border-box;"
                                />
                                <Show when=move || searching_agent.get()>
                                    <div style="position: absolute; right: 10px; top: 10px; font-size: 11px; color: #999;">"Searching…"</div>
                                </Show>
                            </div>

                            <Show when=move || !agent_results.get().is_empty() && selected_agent.get().is_none()>
                                <div style="border: 1px solid #ddd; border-radius: 4px; max-height: 190px; overflow-y: auto; margin-top: 6px;">
                                    {move || agent_results.get().into_iter().map(|agent| {
                                        let agent_for_click = agent.clone();
                                        view! {
                                            <div
                                                style="padding: 8px 10px; cursor: pointer; border-bottom: 1px solid #f3f4f6;"
                                                on:click=move |_| {
                                                    set_selected_agent.set(Some(agent_for_click.clone()));
                                                    set_agent_search.set(String::new());
                                                    set_agent_results.set(Vec::new());
                                                }
                                            >
                                                <div style="font-size: 13px; font-weight: 500;">{agent.full_name()}</div>
                                                <div style="font-size: 12px; color: #888;">{agent.mobile.clone()}</div>
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            </Show>

                            {move || selected_agent.get().map(|agent| view! {
                                <div style="display: flex; align-items: center; justify-content: space-between; background: #f9fafb; border: 1px solid #e5e7eb; border-radius: 4px; padding: 8px 10px; margin-top: 6px;">
                                    <div>
                                        <div style="font-size: 13px; font-weight: 500;">{agent.full_name()}</div>
                                        <div style="font-size: 12px; color: #888;">{agent.mobile.clone()}</div>
                                    </div>
                                    <button
                                        style="background: none; border: none; color: #dc2626; font-size: 12px; cursor: pointer;"
                                        on:click=move |_| set_selected_agent.set(None)
                                    >
                                        "Change"
                                    </button>
                                </div>
                            })}
                        </div>
                    </Show>

                    // Payment method
                    <Show when=move || action_type.get() == Some(ActionType::UpdatePayment)>
                        <div style="margin-bottom: 14px;">
                            <label style="display: block; font-size: 13px; font-weight: 500; margin-bottom: 4px;">"Payment Method"</label>
                            <select
                                style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px;"
                                on:change=move |ev| {
                                    set_payment_method.set(PaymentMethod::from_code(&event_target_value(&ev)));
                                }
                            >
                                <option value="">"— Select —"</option>
                                {PaymentMethod::all().into_iter().map(|m| view! {
                                    <option value=m.code()>{m.display_name()}</option>
                                }).collect_view()}
                            </select>

                            <Show when=move || payment_method.get().map(|m| m.wants_proof()).unwrap_or(false)>
                                <div style="margin-top: 10px;">
                                    <label style="display: block; font-size: 13px; font-weight: 500; margin-bottom: 4px;">"Upload Proof"</label>
                                    <input
                                        type="file"
                                        on:change=move |ev| payment_proof.set(file_from_input(&ev))
                                    />
                                </div>
                            </Show>
                        </div>
                    </Show>

                    // Document upload
                    <Show when=move || action_type.get() == Some(ActionType::UploadDocument)>
                        <div style="margin-bottom: 14px;">
                            <label style="display: block; font-size: 13px; font-weight: 500; margin-bottom: 4px;">"Document Name"</label>
                            <input
                                style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px; box-sizing: border-box;"
                                prop:value=move || doc_name.get()
                                on:input=move |ev| set_doc_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div style="margin-bottom: 14px;">
                            <label style="display: block; font-size: 13px; font-weight: 500; margin-bottom: 4px;">"Document Type"</label>
                            <select
                                style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px;"
                                on:change=move |ev| {
                                    if let Some(dt) = DocumentType::from_code(&event_target_value(&ev)) {
                                        set_doc_type.set(dt);
                                    }
                                }
                            >
                                {DocumentType::all().into_iter().map(|d| view! {
                                    <option value=d.code() selected=d == DocumentType::Other>{d.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div style="margin-bottom: 14px;">
                            <label style="display: block; font-size: 13px; font-weight: 500; margin-bottom: 4px;">"Upload File"</label>
                            <input
                                type="file"
                                on:change=move |ev| doc_file.set(file_from_input(&ev))
                            />
                        </div>
                    </Show>

                    // Remarks (always required)
                    <div>
                        <label style="display: block; font-size: 13px; font-weight: 500; margin-bottom: 4px;">"Remarks"</label>
                        <textarea
                            rows="3"
                            style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px; box-sizing: border-box; font-family: inherit;"
                            prop:value=move || remarks.get()
                            on:input=move |ev| set_remarks.set(event_target_value(&ev))
                        />
                    </div>

                    {move || error.get().map(|e| view! {
                        <p style="color: #dc2626; font-size: 13px; margin-top: 8px;">{e}</p>
                    })}
                </div>

                // Assigned agents
                <Show when={
                    let assigned = assigned.clone();
                    move || !assigned.is_empty()
                }>
                    <div style="padding: 10px 16px; border-top: 1px solid #eee;">
                        <div style="font-size: 12px; color: #888; margin-bottom: 6px;">"Assigned Agents"</div>
                        <div style="display: flex; gap: 6px; flex-wrap: wrap;">
                            {assigned.iter().map(|name| view! {
                                <span style="background: #eef2ff; border: 1px solid #c7d2fe; padding: 3px 10px; border-radius: 9999px; font-size: 12px;">
                                    {name.clone()}
                                </span>
                            }).collect_view()}
                        </div>
                    </div>
                </Show>

                // Footer
                <div style="padding: 12px 16px; border-top: 1px solid #eee; display: flex; justify-content: flex-end; gap: 8px;">
                    <button
                        style="padding: 8px 14px; border: 1px solid #ddd; border-radius: 4px; background: white; font-size: 13px; cursor: pointer;"
                        on:click=move |_| on_close.run(())
                        disabled=move || loading.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        style=move || format!(
                            "padding: 8px 18px; border: none; border-radius: 4px; color: white; font-size: 13px; background: #635bff; {}",
                            if is_submit_disabled() { "opacity: 0.5; cursor: not-allowed;" } else { "cursor: pointer;" }
                        )
                        disabled=is_submit_disabled
                        on:click=handle_submit
                    >
                        {move || if loading.get() { "Saving…" } else { "Update" }}
                    </button>
                </div>
            </aside>
        </div>
    }
}
