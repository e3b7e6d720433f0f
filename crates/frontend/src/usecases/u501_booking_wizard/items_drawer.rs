//! Add-items sub-drawer: search the catalog, pick one product, pick one or
//! more patients, append one line per (product, patient) pairing.

use contracts::domain::a002_patient::Patient;
use contracts::domain::a004_lab_test::CatalogItem;
use contracts::domain::a006_booking::ItemRow;
use contracts::enums::ItemType;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use super::view_model::WizardVm;
use crate::domain::a001_customer::model as customer_model;
use crate::domain::a001_customer::ui::details::PatientForm;
use crate::domain::a004_lab_test::model as lab_test_model;
use crate::domain::a005_lab_package::model as lab_package_model;
use crate::shared::icons::icon;
use crate::shared::search_box::RequestGuard;

const DEBOUNCE_MS: i32 = 250;

#[component]
pub fn ItemsDrawer(vm: WizardVm, on_close: Callback<()>) -> impl IntoView {
    let (mode, set_mode) = signal(ItemType::LabTest);
    let (query, set_query) = signal(String::new());
    let (products, set_products) = signal(Vec::<CatalogItem>::new());
    let (loading_products, set_loading_products) = signal(false);

    let (patients, set_patients) = signal(Vec::<Patient>::new());
    let (selected_product, set_selected_product) = signal(Option::<CatalogItem>::None);
    let (selected_patients, set_selected_patients) = signal(Vec::<Patient>::new());
    let (show_patient_form, set_show_patient_form) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let guard = RequestGuard::new();
    let debounce_timeout = StoredValue::new(None::<i32>);

    let fetch_products = move || {
        let token = guard.begin();
        let mode_val = mode.get_untracked();
        let query_val = query.get_untracked();
        set_loading_products.set(true);
        spawn_local(async move {
            let result = match mode_val {
                ItemType::LabTest => lab_test_model::search_lab_tests(&query_val)
                    .await
                    .map(|rows| rows.iter().map(CatalogItem::from).collect::<Vec<_>>()),
                ItemType::LabPackage => lab_package_model::search_lab_packages(&query_val)
                    .await
                    .map(|rows| rows.iter().map(CatalogItem::from).collect::<Vec<_>>()),
            };
            if !guard.is_current(token) {
                return;
            }
            set_loading_products.set(false);
            match result {
                Ok(rows) => set_products.set(rows),
                Err(e) => {
                    log::error!("Product fetch error: {e}");
                    set_products.set(Vec::new());
                }
            }
        });
    };

    let fetch_patients = move || {
        if let Some(customer) = vm.customer.get_untracked() {
            spawn_local(async move {
                match customer_model::fetch_patients(customer.id).await {
                    Ok(rows) => set_patients.set(rows),
                    Err(e) => log::error!("Patient fetch error: {e}"),
                }
            });
        }
    };

    fetch_products();
    fetch_patients();

    let run_search = move |text: String| {
        set_query.set(text);
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }
        let closure =
            wasm_bindgen::closure::Closure::once_into_js(move || fetch_products());
        let timeout_id = web_sys::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                DEBOUNCE_MS,
            )
            .ok()
        });
        debounce_timeout.set_value(timeout_id);
    };

    let toggle_patient = move |patient: Patient| {
        set_selected_patients.update(|selected| {
            if let Some(pos) = selected.iter().position(|p| p.id == patient.id) {
                selected.remove(pos);
            } else {
                selected.push(patient);
            }
        });
    };

    let handle_save = move |_| {
        let Some(product) = selected_product.get_untracked() else {
            set_error.set(Some("Select a test/package first".into()));
            return;
        };
        let chosen = selected_patients.get_untracked();
        if chosen.is_empty() {
            set_error.set(Some("Select at least one patient".into()));
            return;
        }

        let batch = ItemRow::batch(&product, mode.get_untracked(), &chosen, || vm.next_item_id());
        vm.append_items(batch);
        set_selected_product.set(None);
        set_selected_patients.set(Vec::new());
        on_close.run(());
    };

    view! {
        <div style="position: fixed; inset: 0; z-index: 140; display: flex;">
            <div style="position: absolute; inset: 0; background: rgba(0,0,0,0.4);" on:click=move |_| on_close.run(()) />
            <aside style="position: absolute; right: 0; top: 0; height: 100%; width: 620px; max-width: 100%; background: white; box-shadow: -4px 0 16px rgba(0,0,0,0.15); display: flex; flex-direction: column; z-index: 150;">
                <div style="display: flex; align-items: center; justify-content: space-between; padding: 14px 16px; border-bottom: 1px solid #eee;">
                    <div style="font-size: 16px; font-weight: 600;">"Add Item"</div>
                    <button style="background: none; border: none; cursor: pointer; padding: 6px; color: #666;" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>

                <div style="flex: 1; overflow-y: auto; padding: 16px;">
                    {move || error.get().map(|e| view! {
                        <div style="background: #fee; color: #c33; padding: 8px 10px; border-radius: 4px; font-size: 13px; margin-bottom: 10px;">{e}</div>
                    })}

                    // Mode + search + add patient
                    <div style="display: flex; gap: 8px; margin-bottom: 12px;">
                        <select
                            style="padding: 8px 10px; border: 1px solid #ddd; border-radius: 6px; font-size: 13px;"
                            on:change=move |ev| {
                                if let Some(item_type) = ItemType::from_code(&event_target_value(&ev)) {
                                    set_mode.set(item_type);
                                    set_selected_product.set(None);
                                    fetch_products();
                                }
                            }
                        >
                            <option value="lab_test">"Lab Tests"</option>
                            <option value="lab_package">"Lab Packages"</option>
                        </select>
                        <input
                            prop:value=move || query.get()
                            on:input=move |ev| run_search(event_target_value(&ev))
                            placeholder="Search tests or packages..."
                            style="flex: 1; padding: 8px 10px; border: 1px solid #ddd; border-radius: 6px; box-sizing: border-box;"
                        />
                        <button
                            style="padding: 8px 12px; border: 1px solid #ddd; border-radius: 6px; background: white; font-size: 13px; cursor: pointer; white-space: nowrap;"
                            on:click=move |_| set_show_patient_form.update(|v| *v = !*v)
                        >
                            "+ Patient"
                        </button>
                    </div>

                    <Show when=move || show_patient_form.get()>
                        {move || vm.customer.get().map(|customer| view! {
                            <PatientForm
                                customer_id=customer.id
                                on_created=Callback::new(move |_| {
                                    set_show_patient_form.set(false);
                                    fetch_patients();
                                })
                            />
                        })}
                    </Show>

                    // Product results
                    <div style="margin-bottom: 14px;">
                        <h3 style="margin: 0 0 6px 0; font-size: 14px;">"Products"</h3>
                        {move || if loading_products.get() {
                            view! { <div style="padding: 10px; color: #666; font-size: 13px;">"Loading..."</div> }.into_any()
                        } else {
                            let rows = products.get();
                            if rows.is_empty() {
                                view! { <div style="padding: 10px; color: #888; font-size: 13px;">"Nothing found"</div> }.into_any()
                            } else {
                                view! {
                                    <div style="border: 1px solid #eee; border-radius: 8px; max-height: 220px; overflow-y: auto;">
                                        {rows.into_iter().map(|product| {
                                            let product_id = product.id;
                                            let product_for_click = product.clone();
                                            let is_selected = move || {
                                                selected_product.get().map(|p| p.id) == Some(product_id)
                                            };
                                            view! {
                                                <div
                                                    style=move || format!(
                                                        "padding: 8px 12px; cursor: pointer; display: flex; justify-content: space-between; font-size: 13px; border-bottom: 1px solid #f3f4f6; {}",
                                                        if is_selected() { "background: #eef2ff;" } else { "" }
                                                    )
                                                    on:click=move |_| set_selected_product.set(Some(product_for_click.clone()))
                                                >
                                                    <span>{product.name.clone()}</span>
                                                    <span style="color: #555;">
                                                        <span style="color: #15803d; font-weight: 600;">{format!("₹{}", product.offer_price)}</span>
                                                        {(product.offer_price != product.price).then(|| view! {
                                                            <span style="text-decoration: line-through; color: #999; margin-left: 6px; font-size: 12px;">
                                                                {format!("₹{}", product.price)}
                                                            </span>
                                                        })}
                                                    </span>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                }.into_any()
                            }
                        }}
                    </div>

                    // Patient multi-select
                    <div>
                        <h3 style="margin: 0 0 6px 0; font-size: 14px;">"Patients"</h3>
                        {move || {
                            let rows = patients.get();
                            if rows.is_empty() {
                                view! { <div style="padding: 10px; color: #888; font-size: 13px;">"No patients for this customer yet"</div> }.into_any()
                            } else {
                                view! {
                                    <div style="display: flex; gap: 8px; flex-wrap: wrap;">
                                        {rows.into_iter().map(|patient| {
                                            let patient_id = patient.id;
                                            let patient_for_toggle = patient.clone();
                                            let is_selected = move || {
                                                selected_patients.get().iter().any(|p| p.id == patient_id)
                                            };
                                            view! {
                                                <button
                                                    style=move || format!(
                                                        "padding: 6px 14px; border-radius: 9999px; font-size: 13px; cursor: pointer; border: 1px solid {}; {}",
                                                        if is_selected() { "#635bff" } else { "#e5e7eb" },
                                                        if is_selected() { "background: #eef2ff; color: #4338ca;" } else { "background: white; color: #374151;" }
                                                    )
                                                    on:click=move |_| toggle_patient(patient_for_toggle.clone())
                                                >
                                                    {patient.full_name()}
                                                    {patient.age.map(|a| format!(" ({a})")).unwrap_or_default()}
                                                </button>
                                            }
                                        }).collect_view()}
                                    </div>
                                }.into_any()
                            }
                        }}
                    </div>
                </div>

                <div style="padding: 12px 16px; border-top: 1px solid #eee; display: flex; justify-content: flex-end; gap: 8px;">
                    <button
                        style="padding: 8px 14px; border: 1px solid #ddd; border-radius: 6px; background: white; font-size: 13px; cursor: pointer;"
                        on:click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        style="padding: 8px 18px; border: none; border-radius: 6px; background: #635bff; color: white; font-size: 13px; cursor: pointer;"
                        on:click=handle_save
                    >
                        "Add to Booking"
                    </button>
                </div>
            </aside>
        </div>
    }
}
