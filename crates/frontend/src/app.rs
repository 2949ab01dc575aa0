use crate::dashboards::d400_inventory_summary::ui::dashboard::InventoryDashboard;
use crate::usecases::u501_import_inventory_csv::ui::imports_page::ImportsPage;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Imports,
}

impl Page {
    fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Imports => "Imports",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Dashboard);

    let open_dashboard = Callback::new(move |_| set_page.set(Page::Dashboard));
    let open_imports = Callback::new(move |_| set_page.set(Page::Imports));

    let nav_item = move |target: Page| {
        view! {
            <button
                class=move || if page.get() == target { "top-nav__item top-nav__item--active" } else { "top-nav__item" }
                on:click=move |_| set_page.set(target)
            >
                {target.title()}
            </button>
        }
    };

    view! {
        <div class="app-layout">
            <nav class="top-nav">
                <span class="top-nav__brand">"InventoryPilot"</span>
                {nav_item(Page::Dashboard)}
                {nav_item(Page::Imports)}
            </nav>
            <main class="app-main">
                // Remounting the dashboard re-reads the stored snapshot
                {move || match page.get() {
                    Page::Dashboard => view! { <InventoryDashboard on_open_imports=open_imports /> }.into_any(),
                    Page::Imports => view! { <ImportsPage on_open_dashboard=open_dashboard /> }.into_any(),
                }}
            </main>
        </div>
    }
}
