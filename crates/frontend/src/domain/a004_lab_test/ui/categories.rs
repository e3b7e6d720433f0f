use contracts::domain::a004_lab_test::LabCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_lab_test::model;
use crate::shared::icons::icon;

/// Category management drawer: list plus inline create.
#[component]
pub fn CategoriesDrawer(on_close: Callback<()>) -> impl IntoView {
    let (rows, set_rows) = signal(Vec::<LabCategory>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);
    let new_name = RwSignal::new(String::new());

    let load = move || {
        spawn_local(async move {
            match model::fetch_categories().await {
                Ok(data) => set_rows.set(data),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };
    load();

    let handle_add = move |_| {
        let name = new_name.get();
        if name.trim().is_empty() {
            set_error.set(Some("Category name is required".into()));
            return;
        }
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = model::create_category(name.trim()).await;
            set_saving.set(false);
            match result {
                Ok(_) => {
                    new_name.set(String::new());
                    load();
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div style="position: fixed; inset: 0; z-index: 120; display: flex;">
            <div style="position: absolute; inset: 0; background: rgba(0,0,0,0.4);" on:click=move |_| on_close.run(()) />
            <aside style="position: absolute; right: 0; top: 0; height: 100%; width: 380px; max-width: 100%; background: white; box-shadow: -4px 0 16px rgba(0,0,0,0.15); display: flex; flex-direction: column; z-index: 130;">
                <div style="display: flex; align-items: center; justify-content: space-between; padding: 14px 16px; border-bottom: 1px solid #eee;">
                    <div style="font-size: 16px; font-weight: 600;">"Lab Categories"</div>
                    <button style="background: none; border: none; cursor: pointer; padding: 6px; color: #666;" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>

                <div style="padding: 12px 16px; border-bottom: 1px solid #eee; display: flex; gap: 8px;">
                    <Input value=new_name placeholder="New category name" />
                    <Button appearance=ButtonAppearance::Primary disabled=saving on_click=handle_add>
                        "Add"
                    </Button>
                </div>

                <div style="flex: 1; overflow-y: auto; padding: 12px 16px;">
                    {move || error.get().map(|e| view! { <div style="color: #c33; font-size: 13px; margin-bottom: 8px;">{e}</div> })}
                    {move || {
                        let items = rows.get();
                        if items.is_empty() {
                            view! { <div style="color: #888; font-size: 13px;">"No categories yet"</div> }.into_any()
                        } else {
                            items.into_iter().map(|c| view! {
                                <div style="padding: 8px 10px; border: 1px solid #eee; border-radius: 6px; margin-bottom: 6px; font-size: 13px;">
                                    {c.name.clone()}
                                </div>
                            }).collect_view().into_any()
                        }
                    }}
                </div>
            </aside>
        </div>
    }
}
