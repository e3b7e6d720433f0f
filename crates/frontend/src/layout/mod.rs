pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// |   (Left)  |     (opened tabs)            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout" style="display: flex; flex-direction: column; height: 100vh;">
            <TopHeader />

            <div class="app-body" style="display: flex; flex: 1; overflow: hidden;">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main" style="flex: 1; display: flex; flex-direction: column; overflow: hidden;">
                    <tabs::TabStrip />
                    <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
                        {center()}
                    </div>
                </div>
            </div>
        </div>
    }
}
