//! Package editor: base fields plus the member-test multi-select.

use contracts::domain::a004_lab_test::{LabCategory, LabTest};
use contracts::domain::a005_lab_package::{LabPackage, LabPackageDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

use crate::domain::a004_lab_test::model as lab_test_model;
use crate::domain::a005_lab_package::model;
use crate::shared::icons::icon;
use crate::shared::search_box::RequestGuard;

#[component]
pub fn LabPackageDetails(
    /// None = create, Some = edit.
    initial: Option<LabPackage>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = initial.is_some();
    let id = initial.as_ref().map(|p| p.id);

    let name = RwSignal::new(initial.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let price = RwSignal::new(initial.as_ref().map(|p| p.price.clone()).unwrap_or_default());
    let offer_price =
        RwSignal::new(initial.as_ref().map(|p| p.offer_price.clone()).unwrap_or_default());
    let (category, set_category) = signal(initial.as_ref().and_then(|p| p.category));
    let (selected_tests, set_selected_tests) = signal(
        initial
            .as_ref()
            .map(|p| p.test_ids.iter().copied().collect::<HashSet<i64>>())
            .unwrap_or_default(),
    );

    let (categories, set_categories) = signal(Vec::<LabCategory>::new());
    let (test_query, set_test_query) = signal(String::new());
    let (test_results, set_test_results) = signal(Vec::<LabTest>::new());
    // Name cache so chips for already-selected tests can render.
    let (known_tests, set_known_tests) = signal(Vec::<LabTest>::new());

    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let guard = RequestGuard::new();

    spawn_local(async move {
        if let Ok(rows) = lab_test_model::fetch_categories().await {
            set_categories.set(rows);
        }
        // Seed the name cache with the first page of tests.
        if let Ok(rows) = lab_test_model::search_lab_tests("").await {
            set_known_tests.set(rows);
        }
    });

    let run_test_search = move |query: String| {
        set_test_query.set(query.clone());
        if query.trim().is_empty() {
            set_test_results.set(Vec::new());
            return;
        }
        let token = guard.begin();
        spawn_local(async move {
            let result = lab_test_model::search_lab_tests(&query).await;
            if !guard.is_current(token) {
                return;
            }
            if let Ok(rows) = result {
                set_known_tests.update(|known| {
                    for test in &rows {
                        if !known.iter().any(|k| k.id == test.id) {
                            known.push(test.clone());
                        }
                    }
                });
                set_test_results.set(rows);
            }
        });
    };

    let test_name = move |test_id: i64| {
        known_tests
            .get()
            .iter()
            .find(|t| t.id == test_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("Test #{test_id}"))
    };

    let handle_save = move |_| {
        let dto = LabPackageDto {
            name: name.get(),
            price: price.get(),
            offer_price: offer_price.get(),
            category: category.get(),
            test_ids: {
                let mut ids: Vec<i64> = selected_tests.get().into_iter().collect();
                ids.sort_unstable();
                ids
            },
            description: None,
        };
        if let Err(msg) = dto.validate() {
            set_error.set(Some(msg));
            return;
        }
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = match id {
                Some(id) => model::update_lab_package(id, &dto).await,
                None => model::create_lab_package(&dto).await,
            };
            set_saving.set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div style="position: fixed; inset: 0; z-index: 120; display: flex;">
            <div style="position: absolute; inset: 0; background: rgba(0,0,0,0.4);" on:click=move |_| on_cancel.run(()) />
            <aside style="position: absolute; right: 0; top: 0; height: 100%; width: 480px; max-width: 100%; background: white; box-shadow: -4px 0 16px rgba(0,0,0,0.15); display: flex; flex-direction: column; z-index: 130;">
                <div style="display: flex; align-items: center; justify-content: space-between; padding: 14px 16px; border-bottom: 1px solid #eee;">
                    <div style="font-size: 16px; font-weight: 600;">
                        {if is_edit { "Edit Lab Package" } else { "New Lab Package" }}
                    </div>
                    <button style="background: none; border: none; cursor: pointer; padding: 6px; color: #666;" on:click=move |_| on_cancel.run(())>
                        {icon("x")}
                    </button>
                </div>

                <div style="flex: 1; overflow-y: auto; padding: 16px;">
                    {move || error.get().map(|e| view! {
                        <div style="background: #fee; color: #c33; padding: 8px 10px; border-radius: 4px; font-size: 13px; margin-bottom: 12px;">{e}</div>
                    })}

                    <div style="margin-bottom: 12px;">
                        <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Name *"</label>
                        <Input value=name placeholder="Full Body Checkup" />
                    </div>
                    <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-bottom: 12px;">
                        <div>
                            <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Price *"</label>
                            <Input value=price placeholder="2500" />
                        </div>
                        <div>
                            <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Offer Price *"</label>
                            <Input value=offer_price placeholder="1999" />
                        </div>
                    </div>
                    <div style="margin-bottom: 12px;">
                        <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Category"</label>
                        <select
                            style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px;"
                            on:change=move |ev| {
                                set_category.set(event_target_value(&ev).parse::<i64>().ok());
                            }
                        >
                            <option value="">"—"</option>
                            {move || categories.get().into_iter().map(|c| view! {
                                <option value=c.id.to_string() selected=category.get_untracked() == Some(c.id)>{c.name.clone()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    // Member tests
                    <div style="margin-bottom: 12px;">
                        <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Included Tests *"</label>

                        <div style="display: flex; gap: 6px; flex-wrap: wrap; margin-bottom: 8px;">
                            {move || selected_tests.get().into_iter().map(|test_id| view! {
                                <span style="display: inline-flex; align-items: center; gap: 4px; background: #eef2ff; border: 1px solid #c7d2fe; padding: 3px 10px; border-radius: 9999px; font-size: 12px;">
                                    {test_name(test_id)}
                                    <button
                                        style="background: none; border: none; cursor: pointer; padding: 0; display: inline-flex; color: #64748b;"
                                        on:click=move |_| {
                                            set_selected_tests.update(|ids| { ids.remove(&test_id); });
                                        }
                                    >
                                        {icon("x")}
                                    </button>
                                </span>
                            }).collect_view()}
                        </div>

                        <input
                            prop:value=move || test_query.get()
                            on:input=move |ev| run_test_search(event_target_value(&ev))
                            placeholder="Search tests to add"
                            style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px; box-sizing: border-box;"
                        />
                        <Show when=move || !test_results.get().is_empty()>
                            <div style="border: 1px solid #ddd; border-radius: 4px; max-height: 160px; overflow-y: auto; margin-top: 4px;">
                                {move || test_results.get().into_iter().map(|test| {
                                    let test_id = test.id;
                                    view! {
                                        <div
                                            style="padding: 6px 10px; cursor: pointer; display: flex; justify-content: space-between; font-size: 13px;"
                                            on:click=move |_| {
                                                set_selected_tests.update(|ids| { ids.insert(test_id); });
                                                set_test_query.set(String::new());
                                                set_test_results.set(Vec::new());
                                            }
                                        >
                                            <span>{test.name.clone()}</span>
                                            <span style="color: #888;">{format!("₹{}", test.offer_price)}</span>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                </div>

                <div style="padding: 12px 16px; border-top: 1px solid #eee; display: flex; justify-content: flex-end; gap: 8px;">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        "Cancel"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary disabled=saving on_click=handle_save>
                        {move || if saving.get() { "Saving…" } else { "Save" }}
                    </Button>
                </div>
            </aside>
        </div>
    }
}
