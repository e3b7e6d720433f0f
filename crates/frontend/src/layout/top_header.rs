//! Top navigation bar: sidebar toggle, brand, user info, logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (auth_state, set_auth_state) = use_auth();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        do_logout(set_auth_state);
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header" style="display: flex; align-items: center; justify-content: space-between; padding: 8px 16px; background: #1e293b; color: white; flex-shrink: 0;">
            <div class="top-header__brand" style="display: flex; align-items: center; gap: 10px;">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                    style="background: none; border: none; color: inherit; cursor: pointer; padding: 4px; display: inline-flex;"
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title" style="font-weight: 600; font-size: 16px;">"Diagnostics CRM"</span>
            </div>

            <div class="top-header__actions" style="display: flex; align-items: center; gap: 14px;">
                <div class="top-header__user" style="display: inline-flex; align-items: center; gap: 6px; font-size: 14px;">
                    {icon("user")}
                    <span>
                        {move || auth_state.get().user
                            .map(|u| u.full_name())
                            .unwrap_or_else(|| "Guest".to_string())}
                    </span>
                    <span style="opacity: 0.7; font-size: 12px;">
                        {move || auth_state.get().user
                            .and_then(|u| u.role.map(|r| r.name))
                            .unwrap_or_default()}
                    </span>
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=logout
                    title="Log out"
                    style="background: none; border: none; color: inherit; cursor: pointer; padding: 4px; display: inline-flex;"
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
