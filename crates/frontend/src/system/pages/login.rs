use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context::apply_login, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (mobile, set_mobile) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mobile_val = mobile.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(mobile_val, password_val).await {
                Ok(response) => {
                    apply_login(response, set_auth_state);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Login failed: {e}")));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container" style="display: flex; align-items: center; justify-content: center; height: 100vh; background: linear-gradient(135deg, #1e293b, #334155);">
            <div class="login-box" style="background: white; padding: 32px; border-radius: 12px; box-shadow: 0 8px 30px rgba(0,0,0,0.25); width: 360px;">
                <h1 style="margin: 0 0 4px 0; font-size: 20px;">"Diagnostics CRM"</h1>
                <h2 style="margin: 0 0 20px 0; font-size: 14px; color: #64748b; font-weight: 400;">"Staff sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message" style="background: #fee2e2; color: #b91c1c; padding: 8px 10px; border-radius: 6px; font-size: 13px; margin-bottom: 12px;">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group" style="margin-bottom: 12px;">
                        <label for="mobile" style="display: block; font-size: 13px; margin-bottom: 4px;">"Mobile"</label>
                        <input
                            type="text"
                            id="mobile"
                            placeholder="9000000000"
                            style="width: 100%; padding: 8px 10px; border: 1px solid #cbd5e1; border-radius: 6px; box-sizing: border-box;"
                            prop:value=move || mobile.get()
                            on:input=move |ev| set_mobile.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group" style="margin-bottom: 18px;">
                        <label for="password" style="display: block; font-size: 13px; margin-bottom: 4px;">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            style="width: 100%; padding: 8px 10px; border: 1px solid #cbd5e1; border-radius: 6px; box-sizing: border-box;"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        style="width: 100%; padding: 10px; background: #635bff; color: white; border: none; border-radius: 6px; font-size: 14px; cursor: pointer;"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
