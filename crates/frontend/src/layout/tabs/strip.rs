use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Horizontal strip of opened tabs with close buttons.
#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="tab-strip" style="display: flex; gap: 2px; background: #e2e8f0; padding: 4px 8px 0 8px; flex-shrink: 0; overflow-x: auto;">
            <For
                each=move || ctx.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| {
                    let key_for_click = tab.key.clone();
                    let key_for_close = tab.key.clone();
                    let key_for_active = tab.key.clone();
                    let is_active = move || ctx.active.get().as_ref() == Some(&key_for_active);

                    view! {
                        <div
                            class="tab-strip__tab"
                            style=move || format!(
                                "display: inline-flex; align-items: center; gap: 6px; padding: 6px 10px; border-radius: 6px 6px 0 0; cursor: pointer; font-size: 13px; white-space: nowrap; {}",
                                if is_active() { "background: white; font-weight: 600;" } else { "background: #cbd5e1;" }
                            )
                            on:click=move |_| ctx.activate_tab(&key_for_click)
                        >
                            <span>{tab.title.clone()}</span>
                            <button
                                style="background: none; border: none; cursor: pointer; padding: 0; display: inline-flex; color: #64748b;"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    ctx.close_tab(&key_for_close);
                                }
                                title="Close tab"
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
