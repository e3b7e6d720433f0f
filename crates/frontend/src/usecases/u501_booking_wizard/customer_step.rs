//! Step 0: pick or create the customer, then pick or create one address.

use contracts::domain::a001_customer::Customer;
use contracts::domain::a003_address::Address;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::view_model::WizardVm;
use crate::domain::a001_customer::model as customer_model;
use crate::domain::a001_customer::ui::details::{AddressForm, CustomerDetails};
use crate::shared::icons::icon;
use crate::shared::search_box::RequestGuard;

#[component]
pub fn CustomerStep(vm: WizardVm) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (results, set_results) = signal(Vec::<Customer>::new());
    let (searching, set_searching) = signal(false);
    let (show_new_customer, set_show_new_customer) = signal(false);
    let (show_address_form, set_show_address_form) = signal(false);

    let (addresses, set_addresses) = signal(Vec::<Address>::new());

    let guard = RequestGuard::new();
    let debounce_timeout = StoredValue::new(None::<i32>);

    let load_addresses = move || {
        if let Some(customer) = vm.customer.get_untracked() {
            spawn_local(async move {
                if let Ok(rows) = customer_model::fetch_addresses(customer.id).await {
                    set_addresses.set(rows);
                }
            });
        } else {
            set_addresses.set(Vec::new());
        }
    };
    load_addresses();

    let run_search = move |text: String| {
        set_query.set(text.clone());

        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }
        if text.trim().is_empty() {
            set_results.set(Vec::new());
            return;
        }

        use wasm_bindgen::JsCast;
        let closure = wasm_bindgen::closure::Closure::once_into_js(move || {
            let token = guard.begin();
            set_searching.set(true);
            spawn_local(async move {
                let result = customer_model::search_customers(&text).await;
                if !guard.is_current(token) {
                    return;
                }
                set_searching.set(false);
                if let Ok(rows) = result {
                    set_results.set(rows);
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

    let select_customer = move |customer: Customer| {
        vm.customer.set(Some(customer));
        // Address belongs to the customer; switching customers resets it.
        vm.address.set(None);
        set_query.set(String::new());
        set_results.set(Vec::new());
        load_addresses();
    };

    view! {
        <section style="background: white; padding: 18px; border: 1px solid #e5e7eb; border-radius: 10px;">
            <h2 style="margin: 0 0 4px 0; font-size: 16px;">"Customer Details"</h2>
            <p style="margin: 0 0 14px 0; font-size: 13px; color: #64748b;">"Select the customer and the collection address"</p>

            // Customer picker
            {move || match vm.customer.get() {
                Some(customer) => view! {
                    <div style="display: flex; align-items: center; justify-content: space-between; border: 1px solid #e5e7eb; background: #f9fafb; border-radius: 8px; padding: 10px 14px; margin-bottom: 14px;">
                        <div style="display: flex; align-items: center; gap: 10px;">
                            {icon("user")}
                            <div>
                                <div style="font-size: 14px; font-weight: 600;">{customer.full_name()}</div>
                                <div style="font-size: 12px; color: #64748b;">
                                    {customer.mobile.clone()}
                                    {customer.email.clone().map(|e| format!(" · {e}")).unwrap_or_default()}
                                </div>
                            </div>
                        </div>
                        <button
                            style="background: none; border: none; color: #dc2626; font-size: 12px; cursor: pointer;"
                            on:click=move |_| {
                                vm.customer.set(None);
                                vm.address.set(None);
                                set_addresses.set(Vec::new());
                            }
                        >
                            "Change"
                        </button>
                    </div>
                }.into_any(),
                None => view! {
                    <div style="margin-bottom: 14px;">
                        <div style="display: flex; gap: 8px;">
                            <div style="position: relative; flex: 1;">
                                <input
                                    prop:value=move || query.get()
                                    on:input=move |ev| run_search(event_target_value(&ev))
                                    placeholder="Search customer by name or mobile"
                                    style="width: 100%; padding: 9px 10px; border: 1px solid #ddd; border-radius: 6px; box-sizing: border-box;"
                                />
                                <Show when=move || searching.get()>
                                    <div style="position: absolute; right: 10px; top: 11px; font-size: 11px; color: #999;">"Searching…"</div>
                                </Show>
                            </div>
                            <button
                                style="padding: 9px 14px; border: none; border-radius: 6px; background: #635bff; color: white; font-size: 13px; cursor: pointer; white-space: nowrap;"
                                on:click=move |_| set_show_new_customer.set(true)
                            >
                                "+ New Customer"
                            </button>
                        </div>

                        <Show when=move || !results.get().is_empty()>
                            <div style="border: 1px solid #ddd; border-radius: 6px; max-height: 220px; overflow-y: auto; margin-top: 6px; background: white;">
                                {move || results.get().into_iter().map(|customer| {
                                    let customer_for_click = customer.clone();
                                    view! {
                                        <div
                                            style="padding: 8px 12px; cursor: pointer; border-bottom: 1px solid #f3f4f6;"
                                            on:click=move |_| select_customer(customer_for_click.clone())
                                        >
                                            <div style="font-size: 13px; font-weight: 500;">{customer.full_name()}</div>
                                            <div style="font-size: 12px; color: #888;">{customer.mobile.clone()}</div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }.into_any(),
            }}

            // Address picker, once a customer exists.
            <Show when=move || vm.customer.get().is_some()>
                <div style="margin-bottom: 14px;">
                    <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;">
                        <h3 style="margin: 0; font-size: 14px;">"Address"</h3>
                        <button
                            style="font-size: 12px; color: #635bff; background: none; border: none; cursor: pointer;"
                            on:click=move |_| set_show_address_form.update(|v| *v = !*v)
                        >
                            "+ Add address"
                        </button>
                    </div>

                    {move || {
                        let rows = addresses.get();
                        if rows.is_empty() {
                            view! { <p style="font-size: 13px; color: #888; margin: 4px 0;">"No addresses on file"</p> }.into_any()
                        } else {
                            rows.into_iter().map(|address| {
                                let address_id = address.id;
                                let address_for_click = address.clone();
                                let is_selected = move || {
                                    vm.address.get().map(|a| a.id) == Some(address_id)
                                };
                                view! {
                                    <div
                                        style=move || format!(
                                            "border: 1px solid {}; border-radius: 8px; padding: 10px 12px; margin-bottom: 6px; font-size: 13px; cursor: pointer; display: flex; justify-content: space-between; align-items: center; {}",
                                            if is_selected() { "#635bff" } else { "#e5e7eb" },
                                            if is_selected() { "background: #eef2ff;" } else { "" }
                                        )
                                        on:click=move |_| vm.address.set(Some(address_for_click.clone()))
                                    >
                                        <span>{address.summary()}</span>
                                        {address.is_default.then(|| view! {
                                            <span style="font-size: 11px; color: #15803d; background: #dcfce7; padding: 2px 8px; border-radius: 9999px;">"Default"</span>
                                        })}
                                    </div>
                                }
                            }).collect_view().into_any()
                        }
                    }}

                    <Show when=move || show_address_form.get()>
                        {move || vm.customer.get().map(|customer| view! {
                            <AddressForm
                                customer_id=customer.id
                                on_created=Callback::new(move |_| {
                                    set_show_address_form.set(false);
                                    load_addresses();
                                })
                            />
                        })}
                    </Show>
                </div>
            </Show>

            // Footer
            <div style="display: flex; justify-content: flex-end;">
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

            <Show when=move || show_new_customer.get()>
                <CustomerDetails
                    initial=None
                    on_saved=Callback::new(move |_| {
                        set_show_new_customer.set(false);
                    })
                    on_cancel=Callback::new(move |_| set_show_new_customer.set(false))
                />
            </Show>
        </section>
    }
}
