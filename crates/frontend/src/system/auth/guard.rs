use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires authentication.
/// Shows fallback if not authenticated.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().user.is_some()
            fallback=|| view! { <div>"Not authenticated. Please login."</div> }
        >
            {children()}
        </Show>
    }
}

/// Component that requires a permission grant.
/// Shows fallback when the signed-in user lacks it.
#[component]
pub fn RequirePermission(
    permission: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || {
                auth_state
                    .get()
                    .user
                    .as_ref()
                    .map(|u| u.has_permission(permission))
                    .unwrap_or(false)
            }
            fallback=|| view! { <div style="padding: 20px; color: #888;">"Access denied."</div> }
        >
            {children()}
        </Show>
    }
}

/// Component that requires the admin override (`role.view_all`).
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || {
                auth_state
                    .get()
                    .user
                    .as_ref()
                    .map(|u| u.can_view_all())
                    .unwrap_or(false)
            }
            fallback=|| view! { <div style="padding: 20px; color: #888;">"Access denied. Admin privileges required."</div> }
        >
            {children()}
        </Show>
    }
}
