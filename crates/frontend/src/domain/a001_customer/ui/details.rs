//! Customer details drawer: profile form plus the customer's addresses and
//! patients.

use contracts::domain::a001_customer::{Customer, CustomerDto};
use contracts::domain::a002_patient::{Patient, PatientDto};
use contracts::domain::a003_address::{Address, AddressDto, Location};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_customer::model;
use crate::shared::icons::icon;
use crate::shared::search_box::RequestGuard;

fn opt(v: String) -> Option<String> {
    if v.trim().is_empty() {
        None
    } else {
        Some(v)
    }
}

/// Form state as individual RwSignals for thaw two-way binding.
#[derive(Clone)]
struct CustomerVm {
    id: Option<i64>,
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    mobile: RwSignal<String>,
    email: RwSignal<String>,
    gender: RwSignal<String>,
    age: RwSignal<String>,

    saving: RwSignal<bool>,
    error: RwSignal<Option<String>>,
}

impl CustomerVm {
    fn new(initial: &Option<Customer>) -> Self {
        let c = initial.as_ref();
        Self {
            id: c.map(|c| c.id),
            first_name: RwSignal::new(c.map(|c| c.first_name.clone()).unwrap_or_default()),
            last_name: RwSignal::new(c.map(|c| c.last_name.clone()).unwrap_or_default()),
            mobile: RwSignal::new(c.map(|c| c.mobile.clone()).unwrap_or_default()),
            email: RwSignal::new(c.and_then(|c| c.email.clone()).unwrap_or_default()),
            gender: RwSignal::new(c.and_then(|c| c.gender.clone()).unwrap_or_default()),
            age: RwSignal::new(
                c.and_then(|c| c.age).map(|a| a.to_string()).unwrap_or_default(),
            ),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    fn to_dto(&self) -> CustomerDto {
        CustomerDto {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            mobile: self.mobile.get_untracked(),
            email: opt(self.email.get_untracked()),
            gender: opt(self.gender.get_untracked()),
            age: self.age.get_untracked().trim().parse().ok(),
        }
    }
}

#[component]
pub fn CustomerDetails(
    /// None = create a new customer; Some = edit an existing one.
    initial: Option<Customer>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CustomerVm::new(&initial);
    let is_edit = vm.id.is_some();
    let customer_id = vm.id;

    // Dependents, only loaded in edit mode.
    let (addresses, set_addresses) = signal(Vec::<Address>::new());
    let (patients, set_patients) = signal(Vec::<Patient>::new());

    let reload_dependents = move || {
        if let Some(id) = customer_id {
            spawn_local(async move {
                if let Ok(rows) = model::fetch_addresses(id).await {
                    set_addresses.set(rows);
                }
                if let Ok(rows) = model::fetch_patients(id).await {
                    set_patients.set(rows);
                }
            });
        }
    };
    reload_dependents();

    let (show_address_form, set_show_address_form) = signal(false);
    let (show_patient_form, set_show_patient_form) = signal(false);

    let vm_for_save = vm.clone();
    let handle_save = move |_| {
        let vm = vm_for_save.clone();
        let dto = vm.to_dto();
        if let Err(msg) = dto.validate() {
            vm.error.set(Some(msg));
            return;
        }
        vm.saving.set(true);
        vm.error.set(None);
        spawn_local(async move {
            let result = match vm.id {
                Some(id) => model::update_customer(id, &dto).await,
                None => model::create_customer(&dto).await,
            };
            vm.saving.set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => vm.error.set(Some(e.to_string())),
            }
        });
    };

    let vm_for_view = vm.clone();

    view! {
        <div style="position: fixed; inset: 0; z-index: 120; display: flex;">
            <div style="position: absolute; inset: 0; background: rgba(0,0,0,0.4);" on:click=move |_| on_cancel.run(()) />
            <aside style="position: absolute; right: 0; top: 0; height: 100%; width: 520px; max-width: 100%; background: white; box-shadow: -4px 0 16px rgba(0,0,0,0.15); display: flex; flex-direction: column; z-index: 130;">
                <div style="display: flex; align-items: center; justify-content: space-between; padding: 14px 16px; border-bottom: 1px solid #eee;">
                    <div style="font-size: 16px; font-weight: 600;">
                        {if is_edit { "Edit Customer" } else { "New Customer" }}
                    </div>
                    <button style="background: none; border: none; cursor: pointer; padding: 6px; color: #666;" on:click=move |_| on_cancel.run(())>
                        {icon("x")}
                    </button>
                </div>

                <div style="flex: 1; overflow-y: auto; padding: 16px;">
                    {
                        let vm = vm_for_view.clone();
                        move || vm.error.get().map(|e| view! {
                            <div style="background: #fee; color: #c33; padding: 8px 10px; border-radius: 4px; font-size: 13px; margin-bottom: 12px;">{e}</div>
                        })
                    }

                    <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 12px;">
                        <div>
                            <label style="display: block; font-size: 13px; margin-bottom: 4px;">"First Name *"</label>
                            <Input value=vm_for_view.first_name placeholder="First name" />
                        </div>
                        <div>
                            <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Last Name"</label>
                            <Input value=vm_for_view.last_name placeholder="Last name" />
                        </div>
                        <div>
                            <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Mobile *"</label>
                            <Input value=vm_for_view.mobile placeholder="10-digit mobile" />
                        </div>
                        <div>
                            <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Email"</label>
                            <Input value=vm_for_view.email placeholder="name@example.com" />
                        </div>
                        <div>
                            <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Gender"</label>
                            <select
                                style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px;"
                                on:change={
                                    let gender = vm_for_view.gender;
                                    move |ev| gender.set(event_target_value(&ev))
                                }
                            >
                                <option value="" selected=vm_for_view.gender.get_untracked().is_empty()>"—"</option>
                                <option value="Male" selected=vm_for_view.gender.get_untracked() == "Male">"Male"</option>
                                <option value="Female" selected=vm_for_view.gender.get_untracked() == "Female">"Female"</option>
                                <option value="Other" selected=vm_for_view.gender.get_untracked() == "Other">"Other"</option>
                            </select>
                        </div>
                        <div>
                            <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Age"</label>
                            <Input value=vm_for_view.age placeholder="Age" />
                        </div>
                    </div>

                    // Dependents only exist once the customer does.
                    <Show when=move || is_edit>
                        <div style="margin-top: 20px;">
                            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;">
                                <h3 style="margin: 0; font-size: 14px;">"Addresses"</h3>
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
                                    view! { <p style="font-size: 13px; color: #888; margin: 4px 0;">"No addresses"</p> }.into_any()
                                } else {
                                    rows.into_iter().map(|address| view! {
                                        <div style="border: 1px solid #eee; border-radius: 6px; padding: 8px 10px; margin-bottom: 6px; font-size: 13px; display: flex; justify-content: space-between; align-items: center;">
                                            <span>{address.summary()}</span>
                                            {address.is_default.then(|| view! {
                                                <span style="font-size: 11px; color: #15803d; background: #dcfce7; padding: 2px 8px; border-radius: 9999px;">"Default"</span>
                                            })}
                                        </div>
                                    }).collect_view().into_any()
                                }
                            }}
                            <Show when=move || show_address_form.get()>
                                <AddressForm
                                    customer_id=customer_id.unwrap_or_default()
                                    on_created=Callback::new(move |_| {
                                        set_show_address_form.set(false);
                                        reload_dependents();
                                    })
                                />
                            </Show>
                        </div>

                        <div style="margin-top: 20px;">
                            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;">
                                <h3 style="margin: 0; font-size: 14px;">"Patients"</h3>
                                <button
                                    style="font-size: 12px; color: #635bff; background: none; border: none; cursor: pointer;"
                                    on:click=move |_| set_show_patient_form.update(|v| *v = !*v)
                                >
                                    "+ Add patient"
                                </button>
                            </div>
                            {move || {
                                let rows = patients.get();
                                if rows.is_empty() {
                                    view! { <p style="font-size: 13px; color: #888; margin: 4px 0;">"No patients"</p> }.into_any()
                                } else {
                                    rows.into_iter().map(|patient| view! {
                                        <div style="border: 1px solid #eee; border-radius: 6px; padding: 8px 10px; margin-bottom: 6px; font-size: 13px;">
                                            {patient.full_name()}
                                            <span style="color: #888;">
                                                {format!(
                                                    " · {}{}",
                                                    patient.gender.clone().unwrap_or_else(|| "—".into()),
                                                    patient.age.map(|a| format!(", {a}")).unwrap_or_default()
                                                )}
                                            </span>
                                        </div>
                                    }).collect_view().into_any()
                                }
                            }}
                            <Show when=move || show_patient_form.get()>
                                <PatientForm
                                    customer_id=customer_id.unwrap_or_default()
                                    on_created=Callback::new(move |_| {
                                        set_show_patient_form.set(false);
                                        reload_dependents();
                                    })
                                />
                            </Show>
                        </div>
                    </Show>
                </div>

                <div style="padding: 12px 16px; border-top: 1px solid #eee; display: flex; justify-content: flex-end; gap: 8px;">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive({
                            let saving = vm.saving;
                            move || saving.get()
                        })
                        on_click=handle_save
                    >
                        {
                            let saving = vm.saving;
                            move || if saving.get() { "Saving…" } else { "Save" }
                        }
                    </Button>
                </div>
            </aside>
        </div>
    }
}

/// Inline address creation with a debounced locality search.
#[component]
pub fn AddressForm(customer_id: i64, on_created: Callback<()>) -> impl IntoView {
    let line1 = RwSignal::new(String::new());
    let line2 = RwSignal::new(String::new());
    let (location_query, set_location_query) = signal(String::new());
    let (location_results, set_location_results) = signal(Vec::<Location>::new());
    let (selected_location, set_selected_location) = signal(Option::<Location>::None);
    let (is_default, set_is_default) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let guard = RequestGuard::new();

    let run_location_search = move |query: String| {
        set_location_query.set(query.clone());
        set_selected_location.set(None);
        if query.trim().len() < 2 {
            set_location_results.set(Vec::new());
            return;
        }
        let token = guard.begin();
        spawn_local(async move {
            let result = model::search_locations(&query).await;
            if !guard.is_current(token) {
                return;
            }
            if let Ok(rows) = result {
                set_location_results.set(rows);
            }
        });
    };

    let handle_create = move |_| {
        let Some(location) = selected_location.get() else {
            set_error.set(Some("Select a location".into()));
            return;
        };
        let line1_val = line1.get();
        if line1_val.trim().is_empty() {
            set_error.set(Some("Address line is required".into()));
            return;
        }
        let dto = AddressDto {
            user: customer_id,
            line1: line1_val,
            line2: opt(line2.get()),
            location: location.id,
            is_default: is_default.get(),
        };
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = model::create_address(&dto).await;
            set_saving.set(false);
            match result {
                Ok(_) => on_created.run(()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div style="border: 1px dashed #cbd5e1; border-radius: 6px; padding: 10px; margin-top: 6px; font-size: 13px;">
            {move || error.get().map(|e| view! { <div style="color: #c33; margin-bottom: 6px;">{e}</div> })}
            <div style="margin-bottom: 8px;">
                <Input value=line1 placeholder="Line 1 (house, street)" />
            </div>
            <div style="margin-bottom: 8px;">
                <Input value=line2 placeholder="Line 2 (optional)" />
            </div>
            <div style="margin-bottom: 8px; position: relative;">
                <input
                    prop:value=move || location_query.get()
                    on:input=move |ev| run_location_search(event_target_value(&ev))
                    placeholder="Search city / pincode"
                    style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px; box-sizing: border-box;"
                />
                <Show when=move || !location_results.get().is_empty() && selected_location.get().is_none()>
                    <div style="border: 1px solid #ddd; border-radius: 4px; max-height: 140px; overflow-y: auto; margin-top: 4px; background: white;">
                        {move || location_results.get().into_iter().map(|location| {
                            let label = format!("{}, {} – {}", location.city, location.state, location.pincode);
                            let label_for_input = label.clone();
                            let location_for_click = location.clone();
                            view! {
                                <div
                                    style="padding: 6px 10px; cursor: pointer;"
                                    on:click=move |_| {
                                        set_selected_location.set(Some(location_for_click.clone()));
                                        set_location_query.set(label_for_input.clone());
                                        set_location_results.set(Vec::new());
                                    }
                                >
                                    {label}
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </Show>
            </div>
            <label style="display: inline-flex; align-items: center; gap: 6px; margin-bottom: 8px; cursor: pointer;">
                <input
                    type="checkbox"
                    prop:checked=move || is_default.get()
                    on:change=move |ev| set_is_default.set(event_target_checked(&ev))
                />
                "Set as default"
            </label>
            <div>
                <Button appearance=ButtonAppearance::Primary disabled=Signal::derive(move || saving.get()) on_click=handle_create>
                    "Add Address"
                </Button>
            </div>
        </div>
    }
}

/// Inline patient creation under the owning customer.
#[component]
pub fn PatientForm(customer_id: i64, on_created: Callback<()>) -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let (gender, set_gender) = signal(String::new());
    let age = RwSignal::new(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let handle_create = move |_| {
        let first = first_name.get();
        if first.trim().is_empty() {
            set_error.set(Some("First name is required".into()));
            return;
        }
        let Ok(age_val) = age.get().trim().parse::<u32>() else {
            set_error.set(Some("Age is required".into()));
            return;
        };
        let dto = PatientDto {
            user: customer_id,
            first_name: first,
            last_name: last_name.get(),
            gender: opt(gender.get()),
            age: age_val,
        };
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = model::create_patient(&dto).await;
            set_saving.set(false);
            match result {
                Ok(_) => on_created.run(()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div style="border: 1px dashed #cbd5e1; border-radius: 6px; padding: 10px; margin-top: 6px; font-size: 13px;">
            {move || error.get().map(|e| view! { <div style="color: #c33; margin-bottom: 6px;">{e}</div> })}
            <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 8px; margin-bottom: 8px;">
                <Input value=first_name placeholder="First name *" />
                <Input value=last_name placeholder="Last name" />
                <select
                    style="padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px;"
                    on:change=move |ev| set_gender.set(event_target_value(&ev))
                >
                    <option value="">"Gender"</option>
                    <option value="Male">"Male"</option>
                    <option value="Female">"Female"</option>
                    <option value="Other">"Other"</option>
                </select>
                <Input value=age placeholder="Age *" />
            </div>
            <Button appearance=ButtonAppearance::Primary disabled=Signal::derive(move || saving.get()) on_click=handle_create>
                "Add Patient"
            </Button>
        </div>
    }
}
