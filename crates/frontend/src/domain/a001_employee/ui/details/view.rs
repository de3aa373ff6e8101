use super::view_model::EmployeeDetailsViewModel;
use crate::shared::icons::icon;
use crate::usecases::u501_import_from_excel::ExcelUpload;
use contracts::domain::a001_employee::{EmployeeField, FormMode};
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

fn field_input(vm: EmployeeDetailsViewModel, field: EmployeeField) -> impl IntoView {
    let mode = vm.mode();
    let key = field.key();
    let label = move || vm.state.with(|s| s.label(field));
    let value = move || vm.state.with(|s| s.field(field).to_string());
    let disabled = move || vm.state.with(|s| s.is_locked());
    let on_input = move |ev: leptos::ev::Event| vm.set_field(field, event_target_value(&ev));

    let control = if field.input_type() == "textarea" {
        view! {
            <textarea
                id=key
                name=key
                rows="3"
                prop:value=value
                on:input=on_input
                disabled=disabled
            />
        }
        .into_any()
    } else {
        let numeric = field.input_type() == "number";
        view! {
            <input
                type=field.input_type()
                id=key
                name=key
                prop:value=value
                on:input=on_input
                disabled=disabled
                required=field.is_required(mode)
                step=numeric.then_some("0.01")
            />
        }
        .into_any()
    };

    let class = if field == EmployeeField::Address {
        "form-group form-group-full-width"
    } else {
        "form-group"
    };

    view! {
        <div class=class>
            <label for=key>{label}</label>
            {control}
        </div>
    }
}

#[component]
pub fn EmployeeDetails(
    mode: FormMode,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = EmployeeDetailsViewModel::new(mode);
    vm.load_if_needed();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(on_saved.clone());
    };

    view! {
        <div class="details-container employee-details form-container">
            <div class="details-header">
                <h1>{move || vm.state.with(|s| s.title())}</h1>
                <button class="button button--secondary" on:click=move |_| (on_cancel)(())>
                    {icon("back")}
                    {"Back to list"}
                </button>
            </div>

            {move || vm.state.with(|s| s.message().map(|m| {
                view! { <p class="form-message success">{m.to_string()}</p> }
            }))}
            {move || vm.state.with(|s| s.error().map(|e| {
                view! { <p class="form-message error">{e.to_string()}</p> }
            }))}

            <Show when=move || vm.state.with(|s| s.is_loading())>
                <div class="form-loading">
                    <Spinner />
                    <span>"Loading employee data..."</span>
                </div>
            </Show>

            <form on:submit=on_submit novalidate>
                <div class="form-grid">
                    {EmployeeField::ALL
                        .into_iter()
                        .map(|field| field_input(vm, field))
                        .collect_view()}
                </div>

                <div class="details-actions">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.state.with(|s| s.is_locked())
                    >
                        {icon("save")}
                        {move || vm.state.with(|s| s.submit_label())}
                    </button>
                </div>
            </form>

            {(!vm.is_edit_mode()).then(|| view! { <ExcelUpload /> })}
        </div>
    }
}
