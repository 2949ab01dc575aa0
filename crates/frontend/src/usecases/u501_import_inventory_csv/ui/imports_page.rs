use chrono::{DateTime, Local, SecondsFormat, Utc};
use contracts::usecases::u501_import_inventory_csv::{
    is_csv_filename, ImportResult, PreviewWindow, RawTable, PREVIEW_OPTIONS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

use super::super::reader::read_file_text;
use super::super::session::{UploadOutcome, UploadSession};
use crate::shared::api_client;
use crate::shared::storage::LocalStorage;

const RECOMMENDED_HEADERS: &str = "sku,name,category,available,unit_cost";

fn local_time(iso: &str) -> String {
    DateTime::parse_from_rfc3339(iso)
        .map(|at| at.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

/// Imports page: pick or drop a CSV, preview it and keep it for the dashboard
#[component]
pub fn ImportsPage(on_open_dashboard: Callback<()>) -> impl IntoView {
    let session = StoredValue::new(UploadSession::new());
    // web_sys::File is not Send+Sync, store locally
    let selected_file = StoredValue::new_local(None::<web_sys::File>);

    let (file_name, set_file_name) = signal(None::<String>);
    let (file_size, set_file_size) = signal(0f64);
    let (table, set_table) = signal(None::<RawTable>);
    let (preview_limit, set_preview_limit) = signal(PREVIEW_OPTIONS[0]);
    let (error, set_error) = signal(None::<String>);
    let (saved_at, set_saved_at) = signal(None::<String>);
    let (save_warning, set_save_warning) = signal(None::<String>);
    let (dragging, set_dragging) = signal(false);

    // Server-side validation of the same file
    let (validating, set_validating) = signal(false);
    let (server_result, set_server_result) = signal(None::<ImportResult>);
    let (server_error, set_server_error) = signal(None::<String>);

    let reset = move || {
        selected_file.set_value(None);
        set_file_name.set(None);
        set_file_size.set(0.0);
        set_table.set(None);
        set_preview_limit.set(PREVIEW_OPTIONS[0]);
        set_error.set(None);
        set_saved_at.set(None);
        set_save_warning.set(None);
        set_server_result.set(None);
        set_server_error.set(None);
    };

    let load_file = move |file: web_sys::File| {
        reset();
        let name = file.name();
        set_file_name.set(Some(name.clone()));
        set_file_size.set(file.size());
        selected_file.set_value(Some(file.clone()));

        let session = session.get_value();
        let ticket = session.begin();
        spawn_local(async move {
            let read = read_file_text(&file).await;
            let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            match session.complete(ticket, &name, read, &now, &mut LocalStorage) {
                UploadOutcome::Stale => {}
                UploadOutcome::Failed(e) => set_error.set(Some(e.to_string())),
                UploadOutcome::Loaded {
                    table,
                    saved_at,
                    storage_warning,
                } => {
                    log::info!("Parsed '{}': {} rows", name, table.row_count());
                    set_table.set(Some(table));
                    set_saved_at.set(saved_at);
                    set_save_warning.set(storage_warning.map(|e| e.to_string()));
                }
            }
        });
    };

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                load_file(file);
            }
            // allow picking the same file again after it changed on disk
            input.set_value("");
        }
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        match file {
            Some(file) if is_csv_filename(&file.name()) => load_file(file),
            Some(file) => {
                log::warn!("Ignoring dropped non-CSV file '{}'", file.name());
                set_error.set(Some("Only .csv files can be imported.".to_string()));
            }
            None => {}
        }
    };

    let handle_clear = move |_| {
        // a read still in flight must not repopulate the page
        session.get_value().begin();
        reset();
    };

    let handle_validate = move |_| {
        let Some(file) = selected_file.get_value() else {
            return;
        };
        set_validating.set(true);
        set_server_error.set(None);
        set_server_result.set(None);
        spawn_local(async move {
            match api_client::upload_csv_file(&file).await {
                Ok(result) => set_server_result.set(Some(result)),
                Err(e) => set_server_error.set(Some(e.to_string())),
            }
            set_validating.set(false);
        });
    };

    view! {
        <div class="imports-page">
            <div class="imports-page__header">
                <h1>"Imports"</h1>
                <p class="imports-page__subtitle">
                    "Upload CSV files to import products, inventory, or sales data"
                </p>
            </div>

            <div class="card imports-page__upload">
                <h2>"Upload CSV"</h2>

                <label
                    for="csv-upload"
                    class=move || if dragging.get() {
                        "imports-page__dropzone imports-page__dropzone--active"
                    } else {
                        "imports-page__dropzone"
                    }
                    on:dragover=move |ev: web_sys::DragEvent| {
                        ev.prevent_default();
                        set_dragging.set(true);
                    }
                    on:dragleave=move |_| set_dragging.set(false)
                    on:drop=handle_drop
                >
                    <span class="imports-page__dropzone-title">"Click to upload or drag and drop"</span>
                    <span class="imports-page__dropzone-hint">"CSV files only"</span>
                    <input
                        id="csv-upload"
                        type="file"
                        accept=".csv"
                        class="hidden"
                        on:change=handle_file_select
                    />
                </label>

                <p class="imports-page__hint">
                    "Recommended headers: "
                    <code>{RECOMMENDED_HEADERS}</code>
                </p>

                {move || file_name.get().map(|name| view! {
                    <div class="imports-page__file">
                        <span class="imports-page__file-name">{name}</span>
                        {move || saved_at.get().map(|at| view! {
                            <span class="imports-page__saved">{format!("Saved at {}", local_time(&at))}</span>
                        })}
                        <span class="imports-page__file-size">
                            {format!("{:.1} KB", file_size.get_untracked() / 1024.0)}
                        </span>
                        <Button appearance=ButtonAppearance::Subtle on_click=handle_clear>
                            "Clear"
                        </Button>
                    </div>
                })}

                {move || save_warning.get().map(|w| view! {
                    <div class="warning-box warning-box--warning">{w}</div>
                })}

                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">{e}</div>
                })}

                {move || (file_name.get().is_none() && error.get().is_none()).then(|| view! {
                    <p class="imports-page__empty">"Upload a CSV to preview rows."</p>
                })}

                {move || table.with(|t| t.as_ref().map(|t| {
                    let total = t.row_count();
                    let window = PreviewWindow::new(total, preview_limit.get());
                    view! {
                        <div class="imports-page__preview">
                            <div class="imports-page__preview-controls">
                                <label for="preview-limit">"Rows to preview"</label>
                                <select
                                    id="preview-limit"
                                    on:change=move |ev| {
                                        let limit = event_target_value(&ev)
                                            .parse()
                                            .unwrap_or(PREVIEW_OPTIONS[0]);
                                        set_preview_limit.set(limit);
                                    }
                                >
                                    {PREVIEW_OPTIONS.iter().map(|&option| view! {
                                        <option
                                            value=option.to_string()
                                            selected=move || preview_limit.get() == option
                                            disabled=!PreviewWindow::option_enabled(total, option)
                                        >
                                            {option}
                                        </option>
                                    }).collect::<Vec<_>>()}
                                </select>
                                <span class="imports-page__caption">{window.caption()}</span>
                            </div>

                            {if total == 0 {
                                view! { <p class="imports-page__empty">"No data rows found."</p> }.into_any()
                            } else {
                                view! {
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                {t.headers.iter().map(|h| view! { <th>{h.clone()}</th> }).collect::<Vec<_>>()}
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {t.rows.iter().take(window.shown).map(|row| view! {
                                                <tr>
                                                    {row.iter().map(|cell| view! {
                                                        <td title=cell.clone()>{cell.clone()}</td>
                                                    }).collect::<Vec<_>>()}
                                                </tr>
                                            }).collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }.into_any()
                            }}
                        </div>
                    }
                }))}

                {move || file_name.get().is_some().then(|| view! {
                    <div class="imports-page__server">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=handle_validate
                            disabled=Signal::derive(move || validating.get())
                        >
                            "Validate on server"
                        </Button>
                        {move || server_error.get().map(|e| view! {
                            <div class="warning-box warning-box--error">{e}</div>
                        })}
                        {move || server_result.get().map(|r| view! {
                            <ServerResult result=r />
                        })}
                    </div>
                })}

                {move || saved_at.get().is_some().then(|| view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_open_dashboard.run(())
                    >
                        "Go to Dashboard"
                    </Button>
                })}
            </div>
        </div>
    }
}

/// Counts, warnings and rejected rows from POST /api/v1/imports/upload
#[component]
fn ServerResult(result: ImportResult) -> impl IntoView {
    let summary = format!(
        "{}: {} rows, {} accepted, {} rejected",
        result.csv_type, result.total_rows, result.accepted_count, result.rejected_count
    );

    view! {
        <div class="imports-page__server-result">
            <p>{summary}</p>
            <ul class="imports-page__warnings">
                {result.warnings.into_iter().map(|w| view! { <li>{w}</li> }).collect::<Vec<_>>()}
            </ul>
            <ul class="imports-page__rejected">
                {result.rejected_rows.into_iter().map(|row| view! {
                    <li>{format!("Row {}: {}", row.row_number, row.errors.join("; "))}</li>
                }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
