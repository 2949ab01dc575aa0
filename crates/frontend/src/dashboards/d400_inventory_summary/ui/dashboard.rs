use contracts::dashboards::d400_inventory_summary::{
    build_dataset, category_options, filter_products, Dataset, ALL_CATEGORIES,
};
use contracts::domain::a001_product::ReorderHeuristics;
use contracts::usecases::u502_run_forecast::ForecastRun;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::super::format::{format_money, format_thousands, urgency_class};
use crate::shared::api_client;
use crate::shared::storage::{clear_snapshot, load_snapshot, LocalStorage};

/// Products from the last import, or the sample set
fn load_dataset() -> (Dataset, Option<String>) {
    let snapshot = load_snapshot(&LocalStorage);
    let filename = snapshot.as_ref().map(|s| s.filename.clone());
    (build_dataset(snapshot.as_ref(), &ReorderHeuristics::default()), filename)
}

#[component]
fn MetricCard(
    title: &'static str,
    value: String,
    subtitle: &'static str,
    #[prop(optional)] warning: bool,
) -> impl IntoView {
    view! {
        <div class="metric-card">
            <p class="metric-card__title">{title}</p>
            <p class=if warning { "metric-card__value metric-card__value--warning" } else { "metric-card__value" }>
                {value}
            </p>
            <p class="metric-card__subtitle">{subtitle}</p>
        </div>
    }
}

/// Inventory health and cashflow at a glance
#[component]
pub fn InventoryDashboard(on_open_imports: Callback<()>) -> impl IntoView {
    let (dataset, set_dataset) = signal(load_dataset());
    let (query, set_query) = signal(String::new());
    let (category, set_category) = signal(ALL_CATEGORIES.to_string());

    let (forecast_run, set_forecast_run) = signal(None::<ForecastRun>);
    let (forecast_error, set_forecast_error) = signal(None::<String>);
    let (forecast_busy, set_forecast_busy) = signal(false);

    let refresh_forecast = move || {
        spawn_local(async move {
            match api_client::fetch_latest_forecast_run().await {
                Ok(run) => {
                    set_forecast_run.set(Some(run));
                    set_forecast_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load latest forecast run: {}", e);
                    set_forecast_error.set(Some(e.to_string()));
                }
            }
        });
    };

    // Load forecast status on mount
    Effect::new(move |_| refresh_forecast());

    let handle_trigger_forecast = move |_| {
        set_forecast_busy.set(true);
        spawn_local(async move {
            match api_client::trigger_forecast().await {
                Ok(response) => {
                    log::info!("Forecast {}: {}", response.status, response.message);
                    refresh_forecast();
                }
                Err(e) => set_forecast_error.set(Some(e.to_string())),
            }
            set_forecast_busy.set(false);
        });
    };

    let handle_reset = move |_| {
        clear_snapshot(&mut LocalStorage);
        set_query.set(String::new());
        set_category.set(ALL_CATEGORIES.to_string());
        set_dataset.set(load_dataset());
    };

    let filtered = Memo::new(move |_| {
        dataset.with(|(data, _)| filter_products(&data.products, &query.get(), &category.get()))
    });

    view! {
        <div class="dashboard-page">
            <div class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <p class="dashboard-page__subtitle">"Inventory health and cashflow at a glance"</p>
                {move || dataset.with(|(_, filename)| match filename {
                    Some(name) => view! {
                        <p class="dashboard-page__source">
                            {format!("Showing imported data from {}", name)}
                            <Button appearance=ButtonAppearance::Subtle on_click=handle_reset>
                                "Reset to sample data"
                            </Button>
                        </p>
                    }.into_any(),
                    None => view! {
                        <p class="dashboard-page__source">
                            "Showing sample data. "
                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_open_imports.run(())>
                                "Import a CSV"
                            </Button>
                        </p>
                    }.into_any(),
                })}
            </div>

            {move || dataset.with(|(data, _)| {
                let m = data.metrics.clone();
                view! {
                    <div class="dashboard-page__metrics">
                        <MetricCard title="Total SKUs" value=format_thousands(m.total_skus) subtitle="Products tracked" />
                        <MetricCard title="At Risk" value=m.at_risk_skus.to_string() subtitle="Stockout warning" warning=true />
                        <MetricCard title="Potential Revenue" value=format_money(m.potential_revenue, 0) subtitle="If reorder fulfilled" />
                        <MetricCard title="Reorder Cost" value=format_money(m.reorder_cost, 0) subtitle="To replenish stock" />
                    </div>
                }
            })}

            <div class="card dashboard-page__forecast">
                <span>
                    {move || match (forecast_run.get(), forecast_error.get()) {
                        (_, Some(e)) => format!("Forecast status unavailable: {}", e),
                        (Some(run), None) => format!(
                            "Last forecast: {} at {} ({}, {} rows)",
                            run.status,
                            run.completed_at.unwrap_or(run.started_at),
                            run.method,
                            format_thousands(run.rows_processed)
                        ),
                        (None, None) => "Loading forecast status...".to_string(),
                    }}
                </span>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=handle_trigger_forecast
                    disabled=Signal::derive(move || forecast_busy.get())
                >
                    "Run forecast"
                </Button>
            </div>

            <div class="card dashboard-page__products">
                <div class="dashboard-page__toolbar">
                    <h2>"At-Risk Products"</h2>
                    <span class="dashboard-page__count">
                        {move || dataset.with(|(data, _)| format!("{} products need reordering", data.products.len()))}
                    </span>
                    <input
                        type="search"
                        placeholder="Search SKU or name"
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| set_category.set(event_target_value(&ev))>
                        {move || dataset.with(|(data, _)| {
                            category_options(&data.products)
                                .into_iter()
                                .map(|option| {
                                    let label = if option == ALL_CATEGORIES {
                                        "All categories".to_string()
                                    } else {
                                        option.clone()
                                    };
                                    let value = option.clone();
                                    view! {
                                        <option value=option selected=move || category.get() == value>
                                            {label}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })}
                    </select>
                </div>

                <table class="table">
                    <thead>
                        <tr>
                            <th>"SKU"</th>
                            <th>"Product"</th>
                            <th>"Category"</th>
                            <th>"Available"</th>
                            <th>"Days Left"</th>
                            <th>"Lead Time"</th>
                            <th>"Reorder Qty"</th>
                            <th>"Reorder Cost"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filtered.with(|products| {
                            if products.is_empty() {
                                return view! {
                                    <tr><td colspan="8" class="table__empty">"No products match the current filters."</td></tr>
                                }.into_any();
                            }
                            products.iter().map(|p| view! {
                                <tr>
                                    <td class="table__mono">{p.sku.clone()}</td>
                                    <td>{p.name.clone()}</td>
                                    <td>{p.category.clone()}</td>
                                    <td>{p.available}</td>
                                    <td><span class=urgency_class(p.days_until_stockout)>{format!("{}d", p.days_until_stockout)}</span></td>
                                    <td>{format!("{}d", p.lead_time_days)}</td>
                                    <td>{p.recommended_qty}</td>
                                    <td>{format_money(p.reorder_cost(), 2)}</td>
                                </tr>
                            }).collect::<Vec<_>>().into_any()
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
