use contracts::domain::a004_lab_test::{LabCategory, LabTest, LabTestDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_lab_test::model;
use crate::shared::icons::icon;

#[component]
pub fn LabTestDetails(
    /// None = create, Some = edit.
    initial: Option<LabTest>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = initial.is_some();
    let id = initial.as_ref().map(|t| t.id);

    let name = RwSignal::new(initial.as_ref().map(|t| t.name.clone()).unwrap_or_default());
    let price = RwSignal::new(initial.as_ref().map(|t| t.price.clone()).unwrap_or_default());
    let offer_price =
        RwSignal::new(initial.as_ref().map(|t| t.offer_price.clone()).unwrap_or_default());
    let description = RwSignal::new(
        initial.as_ref().and_then(|t| t.description.clone()).unwrap_or_default(),
    );
    let (category, set_category) = signal(initial.as_ref().and_then(|t| t.category));

    let (categories, set_categories) = signal(Vec::<LabCategory>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    spawn_local(async move {
        if let Ok(rows) = model::fetch_categories().await {
            set_categories.set(rows);
        }
    });

    let handle_save = move |_| {
        let dto = LabTestDto {
            name: name.get(),
            price: price.get(),
            offer_price: offer_price.get(),
            category: category.get(),
            description: {
                let d = description.get();
                if d.trim().is_empty() { None } else { Some(d) }
            },
        };
        if let Err(msg) = dto.validate() {
            set_error.set(Some(msg));
            return;
        }
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = match id {
                Some(id) => model::update_lab_test(id, &dto).await,
                None => model::create_lab_test(&dto).await,
            };
            set_saving.set(false);
            match result {
                Ok(_) => on_saved.run(()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div style="position: fixed; inset: 0; z-index: 120; display: flex;">
            <div style="position: absolute; inset: 0; background: rgba(0,0,0,0.4);" on:click=move |_| on_cancel.run(()) />
            <aside style="position: absolute; right: 0; top: 0; height: 100%; width: 440px; max-width: 100%; background: white; box-shadow: -4px 0 16px rgba(0,0,0,0.15); display: flex; flex-direction: column; z-index: 130;">
                <div style="display: flex; align-items: center; justify-content: space-between; padding: 14px 16px; border-bottom: 1px solid #eee;">
                    <div style="font-size: 16px; font-weight: 600;">
                        {if is_edit { "Edit Lab Test" } else { "New Lab Test" }}
                    </div>
                    <button style="background: none; border: none; cursor: pointer; padding: 6px; color: #666;" on:click=move |_| on_cancel.run(())>
                        {icon("x")}
                    </button>
                </div>

                <div style="flex: 1; overflow-y: auto; padding: 16px;">
                    {move || error.get().map(|e| view! {
                        <div style="background: #fee; color: #c33; padding: 8px 10px; border-radius: 4px; font-size: 13px; margin-bottom: 12px;">{e}</div>
                    })}

                    <div style="margin-bottom: 12px;">
                        <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Name *"</label>
                        <Input value=name placeholder="Complete Blood Count" />
                    </div>
                    <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-bottom: 12px;">
                        <div>
                            <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Price *"</label>
                            <Input value=price placeholder="500" />
                        </div>
                        <div>
                            <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Offer Price *"</label>
                            <Input value=offer_price placeholder="450" />
                        </div>
                    </div>
                    <div style="margin-bottom: 12px;">
                        <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Category"</label>
                        <select
                            style="width: 100%; padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px;"
                            on:change=move |ev| {
                                set_category.set(event_target_value(&ev).parse::<i64>().ok());
                            }
                        >
                            <option value="">"—"</option>
                            {move || categories.get().into_iter().map(|c| view! {
                                <option value=c.id.to_string() selected=category.get_untracked() == Some(c.id)>{c.name.clone()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div style="margin-bottom: 12px;">
                        <label style="display: block; font-size: 13px; margin-bottom: 4px;">"Description"</label>
                        <Textarea value=description placeholder="Optional notes" attr:rows=3 />
                    </div>
                </div>

                <div style="padding: 12px 16px; border-top: 1px solid #eee; display: flex; justify-content: flex-end; gap: 8px;">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        "Cancel"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary disabled=saving on_click=handle_save>
                        {move || if saving.get() { "Saving…" } else { "Save" }}
                    </Button>
                </div>
            </aside>
        </div>
    }
}
