use contracts::domain::a005_lab_package::LabPackage;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::details::LabPackageDetails;
use crate::domain::a005_lab_package::model::{self, PAGE_SIZE};
use crate::shared::icons::icon;
use crate::shared::search_box::{RequestGuard, SearchBox};

#[component]
pub fn LabPackageList() -> impl IntoView {
    let (rows, set_rows) = signal(Vec::<LabPackage>::new());
    let (total, set_total) = signal(Option::<u64>::None);
    let (page, set_page) = signal(1u32);
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (search, set_search) = signal(String::new());

    let (drawer, set_drawer) = signal(Option::<Option<LabPackage>>::None);

    let guard = RequestGuard::new();

    let load = move || {
        let token = guard.begin();
        let page_val = page.get_untracked();
        let search_val = search.get_untracked();
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = model::fetch_lab_packages(page_val, &search_val).await;
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

    load();

    let total_pages = move || {
        total
            .get()
            .map(|t| ((t as u32) + PAGE_SIZE - 1) / PAGE_SIZE)
            .unwrap_or(1)
            .max(1)
    };

    view! {
        <div style="display: flex; flex-direction: column; height: 100%; overflow: hidden;">
            <div style="display: flex; gap: 10px; padding: 10px; background: #f5f5f5; border-bottom: 1px solid #ddd; flex-shrink: 0; align-items: center;">
                <SearchBox
                    value=search
                    on_change=Callback::new(move |val: String| {
                        set_search.set(val);
                        set_page.set(1);
                        load();
                    })
                    placeholder="Search packages...".to_string()
                />
                <button style="display: inline-flex; align-items: center; gap: 6px; padding: 6px 12px; border: 1px solid #ddd; border-radius: 4px; background: white; cursor: pointer;" on:click=move |_| load()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button
                    style="display: inline-flex; align-items: center; gap: 6px; padding: 6px 12px; border: none; border-radius: 4px; background: #635bff; color: white; cursor: pointer;"
                    on:click=move |_| set_drawer.set(Some(None))
                >
                    {icon("plus")}
                    "New Package"
                </button>
                <div style="margin-left: auto; font-size: 14px; color: #666;">
                    "Total: "
                    <strong style="color: #333;">{move || total.get().map(|t| t.to_string()).unwrap_or_else(|| rows.get().len().to_string())}</strong>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div style="background: #fee; color: #c33; padding: 8px; border-radius: 4px; margin: 8px; font-size: 14px; flex-shrink: 0;">{e}</div>
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
                                    <th style="padding: 10px 8px; text-align: left;">"Name"</th>
                                    <th style="padding: 10px 8px; text-align: left;">"Category"</th>
                                    <th style="padding: 10px 8px; text-align: center;">"Tests"</th>
                                    <th style="padding: 10px 8px; text-align: right;">"Price"</th>
                                    <th style="padding: 10px 8px; text-align: right;">"Offer Price"</th>
                                    <th style="padding: 10px 8px; text-align: right;">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {if items.is_empty() {
                                    view! {
                                        <tr><td colspan="6" style="text-align: center; padding: 20px; color: #888;">"No packages found"</td></tr>
                                    }.into_any()
                                } else {
                                    items.into_iter().enumerate().map(|(idx, package)| {
                                        let bg = if idx % 2 == 0 { "#fff" } else { "#f9f9f9" };
                                        let package_for_edit = package.clone();
                                        view! {
                                            <tr style=format!("background: {bg}; border-bottom: 1px solid #eee;")>
                                                <td style="padding: 8px; font-weight: 500;">{package.name.clone()}</td>
                                                <td style="padding: 8px;">{package.category_name.clone().unwrap_or_else(|| "—".to_string())}</td>
                                                <td style="padding: 8px; text-align: center;">{package.test_ids.len()}</td>
                                                <td style="padding: 8px; text-align: right;">{format!("₹{}", package.price)}</td>
                                                <td style="padding: 8px; text-align: right; color: #15803d;">{format!("₹{}", package.offer_price)}</td>
                                                <td style="padding: 8px; text-align: right;">
                                                    <button
                                                        title="Edit package"
                                                        style="background: none; border: none; cursor: pointer; padding: 4px; color: #635bff;"
                                                        on:click=move |_| set_drawer.set(Some(Some(package_for_edit.clone())))
                                                    >
                                                        {icon("pencil")}
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

            {move || drawer.get().map(|initial| view! {
                <LabPackageDetails
                    initial=initial
                    on_saved=Callback::new(move |_| {
                        set_drawer.set(None);
                        load();
                    })
                    on_cancel=Callback::new(move |_| set_drawer.set(None))
                />
            })}
        </div>
    }
}
