use super::api;
use super::state::{FileSelection, ImportState};
use crate::shared::icons::icon;
use contracts::shared::ApiError;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_import_from_excel::{
    file::REQUIRED_COLUMN_COUNT, ImportFromExcel, SpreadsheetFile, ACCEPT_ATTR, EXPECTED_COLUMNS,
};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

/// Bulk import panel shown under the create form
#[component]
pub fn ExcelUpload() -> impl IntoView {
    let state = RwSignal::new(ImportState::new());
    let selected = StoredValue::new_local(None::<web_sys::File>);
    let input_ref = NodeRef::<html::Input>::new();

    let clear_input = move || {
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    };

    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));
        let meta = file
            .as_ref()
            .map(|f| SpreadsheetFile::new(f.name(), f.size() as u64, f.type_()));

        match state.try_update(|s| s.select_file(meta)) {
            Some(FileSelection::Accepted) => selected.set_value(file),
            Some(FileSelection::Rejected) => {
                selected.set_value(None);
                input.set_value("");
            }
            Some(FileSelection::Cleared) => selected.set_value(None),
            Some(FileSelection::Busy) | None => {}
        }
    };

    let on_upload = move |_| {
        let meta = match state.try_update(|s| s.begin_upload()) {
            Some(Ok(meta)) => meta,
            Some(Err(reason)) => {
                log::debug!("Upload not started: {:?}", reason);
                return;
            }
            None => return,
        };
        let Some(file) = selected.with_value(|f| f.clone()) else {
            state.update(|s| {
                s.finish_upload(Err(ApiError::Transport(
                    "selected file is no longer available".into(),
                )));
            });
            return;
        };

        log::info!(
            "{}: uploading '{}' ({})",
            ImportFromExcel::full_name(),
            meta.name,
            meta.size_label()
        );
        spawn_local(async move {
            let result = api::upload_excel(&file).await;
            match &result {
                Ok(summary) => log::info!(
                    "Import of '{}': {} processed, {} inserted, {} failed",
                    meta.name,
                    summary.processed_rows,
                    summary.successful_inserts,
                    summary.failed_inserts
                ),
                Err(e) => log::error!("Import of '{}' failed: {}", meta.name, e),
            }
            if state.try_update(|s| s.finish_upload(result)) == Some(true) {
                selected.set_value(None);
                clear_input();
            }
        });
    };

    let columns_hint = format!(
        "Expected columns: {}. The first {} are required.",
        EXPECTED_COLUMNS.join(", "),
        REQUIRED_COLUMN_COUNT
    );

    view! {
        <section class="excel-upload">
            <h3 class="excel-upload__title">
                {icon("upload")} " " {ImportFromExcel::display_name()}
            </h3>
            <p class="excel-upload__description">{ImportFromExcel::description()}</p>
            <p class="excel-upload__hint">{columns_hint}</p>

            <div class="excel-upload__controls">
                <input
                    node_ref=input_ref
                    type="file"
                    accept=ACCEPT_ATTR
                    prop:disabled=move || state.with(|s| s.is_uploading())
                    on:change=on_file_change
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || state.with(|s| !s.can_upload()))
                    on_click=on_upload
                >
                    {move || state.with(|s| s.button_label())}
                </Button>
                <Show when=move || state.with(|s| s.is_uploading())>
                    <Spinner />
                </Show>
            </div>

            {move || state.with(|s| s.file().map(|f| view! {
                <div class="excel-upload__file">
                    {icon("file")} " " {f.name.clone()} " (" {f.size_label()} ")"
                </div>
            }))}

            {move || state.with(|s| s.error().map(|e| view! {
                <div class="alert alert--error">{e.to_string()}</div>
            }))}

            {move || state.with(|s| s.summary().cloned()).map(|summary| {
                let alert_class = if summary.is_partial() {
                    "alert alert--warning"
                } else {
                    "alert alert--success"
                };
                let headline = summary.headline();
                let errors = (!summary.errors.is_empty()).then(|| {
                    let items = summary
                        .errors
                        .iter()
                        .map(|e| view! { <li>{e.clone()}</li> })
                        .collect_view();
                    view! {
                        <details class="excel-upload__errors" open>
                            <summary>"Row errors"</summary>
                            <ul>{items}</ul>
                        </details>
                    }
                });
                view! {
                    <div class=alert_class>
                        <p>{headline}</p>
                        <ul class="excel-upload__counts">
                            <li>"Processed rows: " {summary.processed_rows}</li>
                            <li>"Successful inserts: " {summary.successful_inserts}</li>
                            <li>"Failed inserts: " {summary.failed_inserts}</li>
                        </ul>
                        {errors}
                    </div>
                }
            })}
        </section>
    }
}
