use super::model;
use super::state::{EditorState, SubmitOutcome, SubmitRejected};
use crate::shared::config::config;
use contracts::domain::a001_employee::{EmployeeField, FormMode};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

/// ViewModel for the employee form
#[derive(Clone, Copy)]
pub struct EmployeeDetailsViewModel {
    pub state: RwSignal<EditorState>,
    redirect_delay_ms: u32,
}

impl EmployeeDetailsViewModel {
    pub fn new(mode: FormMode) -> Self {
        Self {
            state: RwSignal::new(EditorState::new(mode)),
            redirect_delay_ms: config().editor.redirect_delay_ms,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.state.with_untracked(|s| s.mode())
    }

    pub fn is_edit_mode(&self) -> bool {
        self.mode().is_edit()
    }

    /// Fetch the record once when the form opens in edit mode
    pub fn load_if_needed(&self) {
        let Some(id) = self.state.try_update(|s| s.begin_load()).flatten() else {
            return;
        };
        log::debug!("Edit mode: fetching employee {}", id);

        let state = self.state;
        spawn_local(async move {
            let result = model::fetch_by_id(id).await;
            if let Err(e) = &result {
                log::error!("Failed to fetch employee {}: {}", id, e);
            }
            state.try_update(|s| s.finish_load(result));
        });
    }

    pub fn set_field(&self, field: EmployeeField, value: String) {
        self.state.update(|s| s.set_field(field, value));
    }

    /// Validate and save. `on_saved` runs after a successful update, once the
    /// success banner has been visible for the configured delay.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let plan = match self.state.try_update(|s| s.begin_submit()) {
            Some(Ok(plan)) => plan,
            Some(Err(SubmitRejected::Invalid(e))) => {
                log::debug!("Save rejected locally: {}", e);
                return;
            }
            Some(Err(reason)) => {
                log::debug!("Save ignored: {:?}", reason);
                return;
            }
            None => return,
        };

        let state = self.state;
        let delay = self.redirect_delay_ms;
        spawn_local(async move {
            let result = model::save(&plan).await;
            match &result {
                Ok(_) => log::info!("Employee '{}' saved", plan.payload().username),
                Err(e) => log::error!("Failed to save employee '{}': {}", plan.payload().username, e),
            }
            let outcome = state.try_update(|s| s.finish_submit(result));
            if outcome == Some(SubmitOutcome::ReturnToList) {
                TimeoutFuture::new(delay).await;
                (on_saved)(());
            }
        });
    }
}
