//! Debounced search input plus the request-generation guard used at fetch
//! sites.
//!
//! The debounce timer bounds request rate; the guard closes the remaining
//! race where an older in-flight response resolves after a newer one and
//! would overwrite it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

const DEBOUNCE_MS: i32 = 300;

/// Monotonic token dispenser. A fetch site calls [`RequestGuard::begin`]
/// before sending and [`RequestGuard::is_current`] before applying the
/// response; stale generations are discarded.
#[derive(Clone, Copy)]
pub struct RequestGuard(StoredValue<u64>);

impl RequestGuard {
    pub fn new() -> Self {
        Self(StoredValue::new(0))
    }

    pub fn begin(&self) -> u64 {
        self.0.update_value(|gen| *gen += 1);
        self.0.get_value()
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.get_value() == token
    }
}

/// Text input that emits `on_change` only after the user pauses typing.
/// Each keystroke cancels the previous timer.
#[component]
pub fn SearchBox(
    /// Debounced value consumed by the page.
    #[prop(into)]
    value: Signal<String>,
    /// Called with the settled text after the debounce interval.
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Raw input state, ahead of the debounce.
    let (input_value, set_input_value) = signal(value.get_untracked());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }

        let closure = wasm_bindgen::closure::Closure::once_into_js(move || {
            on_change.run(new_value);
        });
        let timeout_id = web_sys::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                DEBOUNCE_MS,
            )
            .ok()
        });
        debounce_timeout.set_value(timeout_id);
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder=placeholder
                style=move || format!(
                    "width: 300px; padding: 6px 30px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px; background: {};",
                    if value.get().is_empty() { "white" } else { "#fffbea" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input(event_target_value(&ev));
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 2px; display: inline-flex; color: #666;"
                        on:click=move |_| {
                            set_input_value.set(String::new());
                            on_change.run(String::new());
                        }
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
