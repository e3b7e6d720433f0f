//! Settings: staff users and roles. Admin only.

use contracts::shared::error::ApiError;
use contracts::system::auth::{Role, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::http;
use crate::shared::icons::icon;
use crate::system::auth::guard::RequireAdmin;

async fn fetch_staff() -> Result<Vec<UserInfo>, ApiError> {
    http::get_list("/crm/users/?staff=true&page_size=100")
        .await
        .map(|(rows, _)| rows)
}

async fn fetch_roles() -> Result<Vec<Role>, ApiError> {
    http::get_list("/crm/roles/?page_size=100")
        .await
        .map(|(rows, _)| rows)
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersAndRoles />
        </RequireAdmin>
    }
}

#[component]
fn UsersAndRoles() -> impl IntoView {
    let (staff, set_staff) = signal(Vec::<UserInfo>::new());
    let (user_roles, set_user_roles) = signal(Vec::<Role>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match fetch_staff().await {
                Ok(rows) => set_staff.set(rows),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            match fetch_roles().await {
                Ok(rows) => set_user_roles.set(rows),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
        });
    };
    load();

    view! {
        <div style="height: 100%; overflow-y: auto; padding: 16px 20px; background: #f8fafc;">
            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 14px;">
                <h2 style="margin: 0; font-size: 18px;">"Users & Roles"</h2>
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
                view! {
                    <div style="display: grid; grid-template-columns: 3fr 2fr; gap: 16px; align-items: start;">
                        // Staff table
                        <div style="background: white; border: 1px solid #e5e7eb; border-radius: 10px; overflow: hidden;">
                            <div style="padding: 10px 14px; border-bottom: 1px solid #eee; font-weight: 600; font-size: 14px;">"Staff"</div>
                            <table style="width: 100%; border-collapse: collapse; font-size: 13px;">
                                <thead style="background: #f9f9f9;">
                                    <tr style="border-bottom: 1px solid #eee;">
                                        <th style="padding: 8px 12px; text-align: left;">"Name"</th>
                                        <th style="padding: 8px 12px; text-align: left;">"Mobile"</th>
                                        <th style="padding: 8px 12px; text-align: left;">"Role"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || staff.get().into_iter().map(|user| {
                                        let role_name = user.role_name().to_string();
                                        view! {
                                            <tr style="border-bottom: 1px solid #f3f4f6;">
                                                <td style="padding: 8px 12px; font-weight: 500;">{user.full_name()}</td>
                                                <td style="padding: 8px 12px;">{user.mobile.clone()}</td>
                                                <td style="padding: 8px 12px;">
                                                    {if role_name.is_empty() {
                                                        view! { <span style="color: #9ca3af;">"—"</span> }.into_any()
                                                    } else {
                                                        view! {
                                                            <span style="background: #eef2ff; border: 1px solid #c7d2fe; padding: 2px 10px; border-radius: 9999px; font-size: 12px;">
                                                                {role_name.clone()}
                                                            </span>
                                                        }.into_any()
                                                    }}
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>

                        // Roles with their grants and discount bounds
                        <div style="display: flex; flex-direction: column; gap: 10px;">
                            {move || user_roles.get().into_iter().map(|role| view! {
                                <div style="background: white; border: 1px solid #e5e7eb; border-radius: 10px; padding: 12px 14px; font-size: 13px;">
                                    <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 6px;">
                                        <span style="font-weight: 600;">{role.name.clone()}</span>
                                        {role.view_all.then(|| view! {
                                            <span style="font-size: 11px; color: #b45309; background: #fef3c7; padding: 2px 8px; border-radius: 9999px;">"view all"</span>
                                        })}
                                    </div>
                                    <div style="color: #64748b; font-size: 12px; margin-bottom: 6px;">
                                        {format!(
                                            "Discount bounds: ₹{} / {}%",
                                            role.max_amount, role.max_percentage
                                        )}
                                    </div>
                                    <div style="display: flex; gap: 4px; flex-wrap: wrap;">
                                        {role.permissions.iter().map(|p| view! {
                                            <span style="background: #f3f4f6; padding: 2px 8px; border-radius: 4px; font-size: 11px; color: #374151;">
                                                {p.clone()}
                                            </span>
                                        }).collect_view()}
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
