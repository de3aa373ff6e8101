use super::view::EmployeeDetails;
use contracts::domain::a001_employee::FormMode;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use std::rc::Rc;

/// Route entry for `/form` and `/form/:id`.
///
/// The mode is fixed per mount: a different `:id` mounts a fresh editor
/// instead of switching the mode of the current one.
#[component]
pub fn EmployeeFormPage() -> impl IntoView {
    let params = use_params_map();
    let mode = Memo::new(move |_| {
        params.with(|p| FormMode::from_route_param(p.get("id").as_deref()))
    });

    move || match mode.get() {
        Ok(mode) => {
            let navigate = use_navigate();
            let to_list: Rc<dyn Fn(())> = Rc::new(move |_| navigate("/list", Default::default()));
            view! {
                <EmployeeDetails mode=mode on_saved=to_list.clone() on_cancel=to_list />
            }
            .into_any()
        }
        Err(e) => {
            log::warn!("Editor opened with a bad identifier: {}", e);
            view! {
                <div class="form-container">
                    <p class="form-message error">{e}</p>
                </div>
            }
            .into_any()
        }
    }
}
