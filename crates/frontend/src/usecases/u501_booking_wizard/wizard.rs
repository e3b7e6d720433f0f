use contracts::domain::a006_booking::{WizardMode, WizardStep};
use leptos::prelude::*;

use super::changes_drawer::ChangesDrawer;
use super::customer_step::CustomerStep;
use super::details_step::DetailsStep;
use super::items_drawer::ItemsDrawer;
use super::review_step::ReviewStep;
use super::view_model::WizardVm;

#[component]
pub fn BookingWizard(
    mode: WizardMode,
    booking_id: Option<i64>,
    #[prop(optional_no_strip)] prefill_customer: Option<i64>,
    on_done: Callback<()>,
) -> impl IntoView {
    let vm = WizardVm::new(mode, booking_id);

    if mode == WizardMode::Edit {
        vm.load_booking();
    } else if let Some(customer_id) = prefill_customer {
        vm.load_customer(customer_id);
    }

    let (show_items_drawer, set_show_items_drawer) = signal(false);
    let (show_changes_drawer, set_show_changes_drawer) = signal(false);

    view! {
        <div style="height: 100%; overflow-y: auto; padding: 16px 20px; background: #f8fafc;">
            {move || vm.error.get().map(|e| view! {
                <div style="background: #fee; color: #c33; padding: 8px 10px; border-radius: 6px; font-size: 13px; margin-bottom: 12px;">{e}</div>
            })}

            {move || if vm.loading.get() {
                view! { <div style="padding: 24px; color: #666;">"Loading booking…"</div> }.into_any()
            } else {
                view! {
                    <div>
                        // Step tabs
                        <div style="display: flex; gap: 8px; margin-bottom: 18px; flex-wrap: wrap;">
                            {WizardStep::all().into_iter().map(|step| {
                                view! {
                                    <button
                                        style=move || {
                                            let active = vm.active_step.get() == step;
                                            let openable = vm.can_open(step);
                                            format!(
                                                "padding: 8px 16px; border-radius: 8px; font-size: 13px; font-weight: 500; border: none; {} {}",
                                                if active {
                                                    "background: #635bff; color: white; box-shadow: 0 1px 4px rgba(0,0,0,0.15);"
                                                } else {
                                                    "background: #f1f5f9; color: #374151;"
                                                },
                                                if openable { "cursor: pointer;" } else { "cursor: not-allowed; opacity: 0.5;" }
                                            )
                                        }
                                        on:click=move |_| vm.try_open(step)
                                    >
                                        {step.label()}
                                    </button>
                                }
                            }).collect_view()}
                        </div>

                        // Active step panel
                        {move || match vm.active_step.get() {
                            WizardStep::CustomerDetails => view! {
                                <CustomerStep vm=vm />
                            }.into_any(),
                            WizardStep::BookingDetails => view! {
                                <DetailsStep
                                    vm=vm
                                    on_open_items=Callback::new(move |_| set_show_items_drawer.set(true))
                                />
                            }.into_any(),
                            WizardStep::Review => view! {
                                <ReviewStep
                                    vm=vm
                                    on_submit_edit=Callback::new(move |_| set_show_changes_drawer.set(true))
                                    on_done=on_done
                                />
                            }.into_any(),
                        }}
                    </div>
                }.into_any()
            }}

            <Show when=move || show_items_drawer.get()>
                <ItemsDrawer
                    vm=vm
                    on_close=Callback::new(move |_| set_show_items_drawer.set(false))
                />
            </Show>

            <Show when=move || show_changes_drawer.get()>
                <ChangesDrawer
                    vm=vm
                    on_close=Callback::new(move |_| set_show_changes_drawer.set(false))
                    on_done=on_done
                />
            </Show>
        </div>
    }
}
