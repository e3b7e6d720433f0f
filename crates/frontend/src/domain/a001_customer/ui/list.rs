use contracts::domain::a001_customer::Customer;
use contracts::system::permissions;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::details::CustomerDetails;
use crate::domain::a001_customer::model::{self, PAGE_SIZE};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::search_box::{RequestGuard, SearchBox};
use crate::system::auth::context::{current_user, use_auth};

#[component]
pub fn CustomerList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let (rows, set_rows) = signal(Vec::<Customer>::new());
    let (total, set_total) = signal(Option::<u64>::None);
    let (page, set_page) = signal(1u32);
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (search, set_search) = signal(String::new());

    // Details drawer: None = closed, Some(None) = new customer,
    // Some(Some(c)) = edit.
    let (drawer, set_drawer) = signal(Option::<Option<Customer>>::None);

    let guard = RequestGuard::new();

    let load = move || {
        let token = guard.begin();
        let page_val = page.get_untracked();
        let search_val = search.get_untracked();
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = model::fetch_customers(page_val, &search_val).await;
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

    let can_edit = move || {
        current_user(auth_state)
            .map(|u| u.has_permission(permissions::CUSTOMERS_EDIT))
            .unwrap_or(false)
    };

    let can_book = move || {
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
            <div style="display: flex; gap: 10px; padding: 10px; background: #f5f5f5; border-bottom: 1px solid #ddd; flex-shrink: 0; align-items: center;">
                <SearchBox
                    value=search
                    on_change=Callback::new(move |val: String| {
                        set_search.set(val);
                        set_page.set(1);
                        load();
                    })
                    placeholder="Search name, mobile, email...".to_string()
                />
                <button style="display: inline-flex; align-items: center; gap: 6px; padding: 6px 12px; border: 1px solid #ddd; border-radius: 4px; background: white; cursor: pointer;" on:click=move |_| load()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <Show when=can_edit>
                    <button
                        style="display: inline-flex; align-items: center; gap: 6px; padding: 6px 12px; border: none; border-radius: 4px; background: #635bff; color: white; cursor: pointer;"
                        on:click=move |_| set_drawer.set(Some(None))
                    >
                        {icon("plus")}
                        "New Customer"
                    </button>
                </Show>
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
                                    <th style="padding: 10px 8px; text-align: left;">"Mobile"</th>
                                    <th style="padding: 10px 8px; text-align: left;">"Email"</th>
                                    <th style="padding: 10px 8px; text-align: left;">"Gender"</th>
                                    <th style="padding: 10px 8px; text-align: left;">"Age"</th>
                                    <th style="padding: 10px 8px; text-align: right;">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {if items.is_empty() {
                                    view! {
                                        <tr><td colspan="6" style="text-align: center; padding: 20px; color: #888;">"No customers found"</td></tr>
                                    }.into_any()
                                } else {
                                    items.into_iter().enumerate().map(|(idx, customer)| {
                                        let bg = if idx % 2 == 0 { "#fff" } else { "#f9f9f9" };
                                        let customer_id = customer.id;
                                        let customer_for_edit = customer.clone();
                                        view! {
                                            <tr style=format!("background: {bg}; border-bottom: 1px solid #eee;")>
                                                <td style="padding: 8px; font-weight: 500;">{customer.full_name()}</td>
                                                <td style="padding: 8px;">{customer.mobile.clone()}</td>
                                                <td style="padding: 8px;">{customer.email.clone().unwrap_or_else(|| "—".to_string())}</td>
                                                <td style="padding: 8px;">{customer.gender.clone().unwrap_or_else(|| "—".to_string())}</td>
                                                <td style="padding: 8px;">{customer.age.map(|a| a.to_string()).unwrap_or_else(|| "—".to_string())}</td>
                                                <td style="padding: 8px; text-align: right; white-space: nowrap;">
                                                    <Show when=can_edit>
                                                        {
                                                            let customer_for_edit = customer_for_edit.clone();
                                                            view! {
                                                                <button
                                                                    title="Edit customer"
                                                                    style="background: none; border: none; cursor: pointer; padding: 4px; color: #635bff;"
                                                                    on:click=move |_| set_drawer.set(Some(Some(customer_for_edit.clone())))
                                                                >
                                                                    {icon("pencil")}
                                                                </button>
                                                            }
                                                        }
                                                    </Show>
                                                    <Show when=can_book>
                                                        <button
                                                            title="New booking for this customer"
                                                            style="background: none; border: none; cursor: pointer; padding: 4px; color: #0f766e;"
                                                            on:click=move |_| {
                                                                // The wizard fetches the customer itself from the key.
                                                                let key = format!("u501_booking_wizard_new_for_{customer_id}");
                                                                tabs_store.open_tab(&key, "New Booking");
                                                            }
                                                        >
                                                            {icon("plus-circle")}
                                                        </button>
                                                    </Show>
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
                <CustomerDetails
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
