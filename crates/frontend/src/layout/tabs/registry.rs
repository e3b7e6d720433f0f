//! Tab content registry: the single source of truth for tab.key -> view.

use crate::dashboards::d400_overview::OverviewDashboard;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a004_lab_test::ui::list::LabTestList;
use crate::domain::a005_lab_package::ui::list::LabPackageList;
use crate::domain::a006_booking::ui::list::BookingList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::guard::RequirePermission;
use crate::system::users::ui::list::UsersListPage;
use crate::usecases::u501_booking_wizard::BookingWizard;
use contracts::domain::a006_booking::WizardMode;
use contracts::system::permissions;
use leptos::prelude::*;

/// Render the content for a tab by its key.
///
/// Wizard edit tabs carry the booking id in the key
/// (`u501_booking_wizard_edit_<id>`); everything else is a fixed page.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),

        "a001_customer" => view! {
            <RequirePermission permission=permissions::CUSTOMERS_VIEW>
                <CustomerList />
            </RequirePermission>
        }
        .into_any(),
        "a004_lab_test" => view! {
            <RequirePermission permission=permissions::LAB_PRODUCTS>
                <LabTestList />
            </RequirePermission>
        }
        .into_any(),
        "a005_lab_package" => view! {
            <RequirePermission permission=permissions::LAB_PRODUCTS>
                <LabPackageList />
            </RequirePermission>
        }
        .into_any(),
        "a006_booking" => view! {
            <RequirePermission permission=permissions::BOOKINGS_VIEW>
                <BookingList />
            </RequirePermission>
        }
        .into_any(),

        "u501_booking_wizard_new" => {
            view! {
                <BookingWizard
                    mode=WizardMode::Create
                    booking_id=None
                    on_done=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                            tabs_store.open_tab("a006_booking", "Bookings");
                        }
                    })
                />
            }
            .into_any()
        }

        // New booking preselected for a customer (opened from the customer
        // list).
        k if k.starts_with("u501_booking_wizard_new_for_") => {
            let customer_id = k
                .strip_prefix("u501_booking_wizard_new_for_")
                .and_then(|raw| raw.parse::<i64>().ok());
            view! {
                <BookingWizard
                    mode=WizardMode::Create
                    booking_id=None
                    prefill_customer=customer_id
                    on_done=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                            tabs_store.open_tab("a006_booking", "Bookings");
                        }
                    })
                />
            }
            .into_any()
        }

        k if k.starts_with("u501_booking_wizard_edit_") => {
            let id = k
                .strip_prefix("u501_booking_wizard_edit_")
                .and_then(|raw| raw.parse::<i64>().ok());
            view! {
                <BookingWizard
                    mode=WizardMode::Edit
                    booking_id=id
                    on_done=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                            tabs_store.open_tab("a006_booking", "Bookings");
                        }
                    })
                />
            }
            .into_any()
        }

        "sys_users" => view! { <UsersListPage /> }.into_any(),

        unknown => {
            log::warn!("No tab content registered for key '{unknown}'");
            view! {
                <div style="padding: 20px; color: #888;">
                    {format!("Unknown tab: {unknown}")}
                </div>
            }
            .into_any()
        }
    }
}
