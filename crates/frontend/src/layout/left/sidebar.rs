//! Sidebar with collapsible menu groups, filtered by the user's permissions.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::system::permissions;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    // (tab key, label, icon, required permission)
    items: Vec<(&'static str, &'static str, &'static str, &'static str)>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "operations",
            label: "Operations",
            icon: "activity",
            items: vec![
                ("d400_overview", tab_label_for_key("d400_overview"), "layout-dashboard", permissions::DASHBOARD),
                ("a006_booking", tab_label_for_key("a006_booking"), "clipboard", permissions::BOOKINGS_VIEW),
                ("u501_booking_wizard_new", tab_label_for_key("u501_booking_wizard_new"), "plus-circle", permissions::BOOKINGS_CREATE),
            ],
        },
        MenuGroup {
            id: "directory",
            label: "Directory",
            icon: "database",
            items: vec![
                ("a001_customer", tab_label_for_key("a001_customer"), "users", permissions::CUSTOMERS_VIEW),
                ("a004_lab_test", tab_label_for_key("a004_lab_test"), "test-tube", permissions::LAB_PRODUCTS),
                ("a005_lab_package", tab_label_for_key("a005_lab_package"), "package", permissions::LAB_PRODUCTS),
            ],
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "settings",
            items: vec![
                ("sys_users", tab_label_for_key("sys_users"), "users", permissions::SETTINGS),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    // Permission set is fixed for the session; read once, untracked.
    let user = auth_state.with_untracked(|state| state.user.clone());

    let expanded_groups = RwSignal::new(vec![
        "operations".to_string(),
        "directory".to_string(),
        "administration".to_string(),
    ]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content" style="padding: 10px 0;">
            {groups.into_iter().filter_map(|group| {
                let visible_items: Vec<_> = group
                    .items
                    .into_iter()
                    .filter(|(_, _, _, permission)| {
                        user.as_ref().map(|u| u.has_permission(permission)).unwrap_or(false)
                    })
                    .collect();

                if visible_items.is_empty() {
                    return None;
                }

                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                Some(view! {
                    <div>
                        <div
                            class="app-sidebar__group"
                            style="display: flex; align-items: center; gap: 8px; padding: 8px 12px; cursor: pointer; font-size: 13px; text-transform: uppercase; letter-spacing: 0.05em; color: #94a3b8;"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            {icon(group.icon)}
                            <span>{group.label}</span>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id_for_exp)>
                            {visible_items.clone().into_iter().map(|(key, label, item_icon, _)| {
                                let key_stored = StoredValue::new(key);
                                view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || {
                                            ctx.active.get().as_deref() == Some(key_stored.get_value())
                                        }
                                        style=move || format!(
                                            "display: flex; align-items: center; gap: 8px; padding: 8px 12px 8px 28px; cursor: pointer; font-size: 14px; {}",
                                            if ctx.active.get().as_deref() == Some(key_stored.get_value()) {
                                                "background: #1e293b; color: #fff; border-left: 3px solid #635bff;"
                                            } else {
                                                "color: #cbd5e1;"
                                            }
                                        )
                                        on:click=move |_| {
                                            ctx.open_tab(key, label);
                                        }
                                    >
                                        {icon(item_icon)}
                                        <span>{label}</span>
                                    </div>
                                }
                            }).collect_view()}
                        </Show>
                    </div>
                })
            }).collect_view()}
        </div>
    }
}
