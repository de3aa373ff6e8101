mod model;
pub mod state;

use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use contracts::domain::a001_employee::Employee;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use state::{confirm_message, BrowserState, DeleteRejected, ListView};
use thaw::*;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn employee_row(employee: &Employee, state: RwSignal<BrowserState>) -> impl IntoView {
    let id = employee.id;
    let checkbox = match id {
        Some(id) => view! {
            <TableCheckbox
                checked=Signal::derive(move || state.with(|s| s.is_selected(id)))
                on_change=Callback::new(move |checked| state.update(|s| s.toggle(id, checked)))
                disabled=false
            />
        }
        .into_any(),
        None => view! {
            <TableCheckbox checked=Signal::derive(|| false) on_change=Callback::new(|_| {}) disabled=true />
        }
        .into_any(),
    };
    let edit = id.map(|id| {
        view! {
            <A href=format!("/form/{}", id) attr:class="button button--secondary button--small">
                {icon("edit")}
                "Edit"
            </A>
        }
    });
    let is_selected = move || id.is_some_and(|id| state.with(|s| s.is_selected(id)));

    view! {
        <tr class="table__row" class:table__row--selected=is_selected>
            {checkbox}
            <td class="table__cell">{id.map(|id| id.to_string()).unwrap_or_default()}</td>
            <td class="table__cell">{employee.name.clone()}</td>
            <td class="table__cell">{employee.last_name.clone()}</td>
            <td class="table__cell">{employee.username.clone()}</td>
            <td class="table__cell">{employee.email.clone()}</td>
            <td class="table__cell">{employee.phone_number.clone()}</td>
            <td class="table__cell">{employee.location_branch.clone()}</td>
            <td class="table__cell">{employee.department.clone()}</td>
            <td class="table__cell">{employee.designation.clone()}</td>
            <td class="table__cell">{edit}</td>
        </tr>
    }
}

/// All submitted records with multi-select delete
#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let state = RwSignal::new(BrowserState::new());

    let fetch = move || {
        if state.try_update(|s| s.begin_load()) != Some(true) {
            return;
        }
        spawn_local(async move {
            let result = model::fetch_all().await;
            match &result {
                Ok(items) => log::debug!("Loaded {} submissions", items.len()),
                Err(e) => log::error!("Failed to load submissions: {}", e),
            }
            state.try_update(|s| s.finish_load(result));
        });
    };

    let delete_selected = move || {
        let request = match state.try_update(|s| {
            s.begin_delete(|count| confirm(&confirm_message(count)))
        }) {
            Some(Ok(request)) => request,
            Some(Err(DeleteRejected::Cancelled)) | None => return,
            Some(Err(reason)) => {
                log::debug!("Delete not started: {:?}", reason);
                return;
            }
        };
        spawn_local(async move {
            let result = model::delete_many(&request).await;
            match &result {
                Ok(_) => log::info!("Deleted submissions {:?}", request.ids),
                Err(e) => log::error!("Failed to delete submissions {:?}: {}", request.ids, e),
            }
            state.try_update(|s| s.finish_delete(&request, result));
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{icon("users")} " Submitted Employees"</h1>
                </div>
                <div class="header__actions">
                    <A href="/form" attr:class="button button--primary">
                        {icon("plus")}
                        "New Employee"
                    </A>
                    <button
                        class="button button--secondary"
                        on:click=move |_| fetch()
                        disabled=move || state.with(|s| s.load.is_pending())
                    >
                        {icon("refresh")}
                        "Refresh"
                    </button>
                    <button
                        class="button button--danger"
                        on:click=move |_| delete_selected()
                        disabled=move || state.with(|s| s.is_deleting())
                    >
                        {icon("delete")}
                        {move || state.with(|s| s.delete_label())}
                    </button>
                </div>
            </div>

            {move || state.with(|s| s.refresh_error().map(|e| view! {
                <div class="alert alert--error">{format!("Failed to refresh submissions: {}", e)}</div>
            }))}
            {move || state.with(|s| s.delete.error().map(|e| view! {
                <div class="alert alert--error">{e.to_string()}</div>
            }))}
            {move || state.with(|s| s.delete.succeeded().map(|m| view! {
                <div class="alert alert--success">{m.clone()}</div>
            }))}

            {move || state.with(|s| match s.view() {
                ListView::Loading => view! {
                    <div class="table__status">
                        <Spinner />
                        " Loading submissions..."
                    </div>
                }
                .into_any(),
                ListView::Failed(e) => view! {
                    <div class="alert alert--error">
                        {format!("Failed to load submissions: {}", e)}
                    </div>
                }
                .into_any(),
                ListView::Empty => view! {
                    <p class="table__status">"No submissions found."</p>
                }
                .into_any(),
                ListView::Rows(rows) => {
                    let rows = rows.iter().map(|e| employee_row(e, state)).collect_view();
                    view! {
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell table__header-cell--checkbox">
                                            <input
                                                type="checkbox"
                                                class="table__checkbox"
                                                prop:checked=move || state.with(|s| s.all_selected())
                                                on:change=move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    state.update(|s| s.toggle_all(checked));
                                                }
                                            />
                                        </th>
                                        <th class="table__header-cell">"ID"</th>
                                        <th class="table__header-cell">"First Name"</th>
                                        <th class="table__header-cell">"Last Name"</th>
                                        <th class="table__header-cell">"Username"</th>
                                        <th class="table__header-cell">"Email"</th>
                                        <th class="table__header-cell">"Phone"</th>
                                        <th class="table__header-cell">"Branch"</th>
                                        <th class="table__header-cell">"Department"</th>
                                        <th class="table__header-cell">"Designation"</th>
                                        <th class="table__header-cell">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>{rows}</tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                }
            })}
        </div>
    }
}
