//! Editor state without any signals, so every transition is testable on the host.
//!
//! Hydration (edit mode) and saving are tracked by separate `OpState`s. The
//! view model executes the plans produced here and reports back.

use crate::shared::state::operation::OpState;
use contracts::domain::a001_employee::{
    Employee, EmployeeField, EmployeeForm, EmployeeId, EmployeePayload, FormMode, ValidationError,
};
use contracts::shared::ApiError;

pub const CREATED_MESSAGE: &str = "Form submitted successfully!";
pub const UPDATED_MESSAGE: &str = "Submission updated successfully!";

/// Request the view model must send for a validated save
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPlan {
    /// `POST /submit`
    Create(EmployeePayload),
    /// `PUT /submission/{id}`
    Update(EmployeeId, EmployeePayload),
}

impl SubmitPlan {
    pub fn payload(&self) -> &EmployeePayload {
        match self {
            SubmitPlan::Create(payload) | SubmitPlan::Update(_, payload) => payload,
        }
    }
}

/// Why a save did not start. None of these reach the network.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRejected {
    /// A save is already in flight
    Busy,
    /// The record is still being fetched
    Loading,
    Invalid(ValidationError),
}

/// What the view does after a save completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Create succeeded: the form is empty again, stay for the next entry
    ResetForm,
    /// Update succeeded: go back to the list after the configured delay
    ReturnToList,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    mode: FormMode,
    pub form: EmployeeForm,
    pub load: OpState<()>,
    /// Success holds the banner message
    pub submit: OpState<String>,
}

impl EditorState {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            form: EmployeeForm::default(),
            load: OpState::Idle,
            submit: OpState::Idle,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_pending()
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.is_pending()
    }

    /// An update went through and the return to the list is scheduled
    pub fn is_leaving(&self) -> bool {
        self.mode.is_edit() && self.submit.succeeded().is_some()
    }

    /// Inputs are read-only while the record is fetched or saved, and after
    /// a successful update until the editor is left
    pub fn is_locked(&self) -> bool {
        self.is_loading() || self.is_submitting() || self.is_leaving()
    }

    pub fn title(&self) -> &'static str {
        if self.mode.is_edit() {
            "Edit Employee Information"
        } else {
            "Add Employee Information"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Saving..."
        } else if self.mode.is_edit() {
            "Update Employee Data"
        } else {
            "Submit Employee Data"
        }
    }

    /// Id to fetch, if this is edit mode and no fetch is running
    pub fn begin_load(&mut self) -> Option<EmployeeId> {
        let id = self.mode.id()?;
        if !self.load.begin() {
            return None;
        }
        self.submit.reset();
        Some(id)
    }

    /// On failure the form keeps its current values
    pub fn finish_load(&mut self, result: Result<Employee, ApiError>) {
        match result {
            Ok(employee) => {
                self.form = EmployeeForm::from_employee(&employee);
                self.load.succeed(());
            }
            Err(e) => self.load.fail(format!(
                "Failed to load data: {}. Please go back to the list.",
                e
            )),
        }
    }

    /// Apply an edit and drop the previous save outcome
    pub fn set_field(&mut self, field: EmployeeField, value: String) {
        if self.is_leaving() {
            return;
        }
        field.set(&mut self.form, value);
        self.submit.reset();
    }

    pub fn field(&self, field: EmployeeField) -> &str {
        field.get(&self.form)
    }

    /// Field label; in edit mode the confirmation becomes required once a
    /// new password is typed
    pub fn label(&self, field: EmployeeField) -> String {
        if field == EmployeeField::PasswordConfirmation
            && self.mode.is_edit()
            && !self.form.password.is_empty()
        {
            return format!("{} *", field.title());
        }
        field.label(self.mode)
    }

    /// Validate and enter `Pending`, returning the request to send
    pub fn begin_submit(&mut self) -> Result<SubmitPlan, SubmitRejected> {
        if self.is_submitting() || self.is_leaving() {
            return Err(SubmitRejected::Busy);
        }
        if self.is_loading() {
            return Err(SubmitRejected::Loading);
        }
        let payload = match self.form.to_payload(self.mode) {
            Ok(payload) => payload,
            Err(e) => {
                self.submit.fail(e.to_string());
                return Err(SubmitRejected::Invalid(e));
            }
        };
        self.submit.begin();
        Ok(match self.mode {
            FormMode::Create => SubmitPlan::Create(payload),
            FormMode::Edit(id) => SubmitPlan::Update(id, payload),
        })
    }

    /// Record the response. `message` is the service's own success text, if any.
    pub fn finish_submit(&mut self, result: Result<Option<String>, ApiError>) -> SubmitOutcome {
        match result {
            Ok(message) => {
                let default = if self.mode.is_edit() {
                    UPDATED_MESSAGE
                } else {
                    CREATED_MESSAGE
                };
                self.submit
                    .succeed(message.unwrap_or_else(|| default.to_string()));
                if self.mode.is_edit() {
                    SubmitOutcome::ReturnToList
                } else {
                    self.form = EmployeeForm::default();
                    SubmitOutcome::ResetForm
                }
            }
            Err(ApiError::Conflict(message)) => {
                self.submit.fail(message);
                SubmitOutcome::Failed
            }
            Err(e) => {
                let action = if self.mode.is_edit() {
                    "Update"
                } else {
                    "Submission"
                };
                self.submit.fail(format!("{} failed: {}", action, e));
                SubmitOutcome::Failed
            }
        }
    }

    /// Banner text: error first, then success
    pub fn error(&self) -> Option<&str> {
        self.submit.error().or_else(|| self.load.error())
    }

    pub fn message(&self) -> Option<&str> {
        self.submit.succeeded().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(state: &mut EditorState, values: &[(EmployeeField, &str)]) {
        for (field, value) in values {
            state.set_field(*field, value.to_string());
        }
    }

    fn scenario_fields() -> Vec<(EmployeeField, &'static str)> {
        vec![
            (EmployeeField::Name, "A"),
            (EmployeeField::LastName, "B"),
            (EmployeeField::Username, "ab"),
            (EmployeeField::Email, "a@b.co"),
            (EmployeeField::Password, "x"),
            (EmployeeField::PasswordConfirmation, "x"),
        ]
    }

    #[test]
    fn test_create_submits_once_and_resets() {
        let mut state = EditorState::new(FormMode::Create);
        assert_eq!(state.begin_load(), None);
        fill(&mut state, &scenario_fields());

        let plan = state.begin_submit().unwrap();
        let SubmitPlan::Create(payload) = &plan else {
            panic!("expected create plan, got {:?}", plan);
        };
        assert_eq!(payload.basic_salary, 0.0);
        assert_eq!(payload.gross_salary, 0.0);
        assert!(state.is_submitting());
        assert_eq!(state.submit_label(), "Saving...");

        // second click while pending
        assert_eq!(state.begin_submit(), Err(SubmitRejected::Busy));

        assert_eq!(state.finish_submit(Ok(None)), SubmitOutcome::ResetForm);
        assert_eq!(state.form, EmployeeForm::default());
        assert_eq!(state.message(), Some(CREATED_MESSAGE));
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_invalid_form_never_produces_a_plan() {
        let mut state = EditorState::new(FormMode::Create);
        fill(&mut state, &scenario_fields());
        state.set_field(EmployeeField::Username, "   ".into());

        let rejected = state.begin_submit().unwrap_err();
        assert_eq!(
            rejected,
            SubmitRejected::Invalid(ValidationError::Required(EmployeeField::Username))
        );
        assert!(!state.is_submitting());
        assert_eq!(state.error(), Some("Please fill in the 'Username' field."));
    }

    #[test]
    fn test_editing_clears_previous_outcome() {
        let mut state = EditorState::new(FormMode::Create);
        assert!(state.begin_submit().is_err());
        assert!(state.error().is_some());

        state.set_field(EmployeeField::Name, "A".into());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_edit_scenario_keeps_salary_and_omits_password() {
        let id = EmployeeId(7);
        let mut state = EditorState::new(FormMode::Edit(id));
        assert_eq!(state.begin_load(), Some(id));
        assert!(state.is_loading());
        assert_eq!(state.begin_load(), None);
        assert_eq!(state.begin_submit(), Err(SubmitRejected::Loading));

        state.finish_load(Ok(Employee {
            id: Some(id),
            name: "A".into(),
            last_name: "B".into(),
            username: "ab".into(),
            email: "a@b.co".into(),
            department: "Sales".into(),
            basic_salary: 1000.0,
            ..Default::default()
        }));
        assert!(!state.is_loading());
        assert_eq!(state.field(EmployeeField::Password), "");

        state.set_field(EmployeeField::Department, "Finance".into());
        let plan = state.begin_submit().unwrap();
        let SubmitPlan::Update(plan_id, payload) = &plan else {
            panic!("expected update plan, got {:?}", plan);
        };
        assert_eq!(*plan_id, id);

        let body = serde_json::to_value(payload).unwrap();
        assert_eq!(body["basicSalary"].as_f64(), Some(1000.0));
        assert_eq!(body["department"], "Finance");
        assert!(body.get("password").is_none());

        assert_eq!(state.finish_submit(Ok(None)), SubmitOutcome::ReturnToList);
        assert_eq!(state.message(), Some(UPDATED_MESSAGE));
        // form is left as saved until navigation
        assert_eq!(state.field(EmployeeField::Department), "Finance");
    }

    #[test]
    fn test_successful_update_locks_until_redirect() {
        let mut state = EditorState::new(FormMode::Edit(EmployeeId(4)));
        fill(&mut state, &scenario_fields());
        state.begin_submit().unwrap();
        assert_eq!(state.finish_submit(Ok(None)), SubmitOutcome::ReturnToList);

        assert!(state.is_locked());
        assert_eq!(state.begin_submit(), Err(SubmitRejected::Busy));

        state.set_field(EmployeeField::Name, "changed".into());
        assert_eq!(state.field(EmployeeField::Name), "A");
        assert_eq!(state.message(), Some(UPDATED_MESSAGE));
    }

    #[test]
    fn test_create_success_stays_editable() {
        let mut state = EditorState::new(FormMode::Create);
        fill(&mut state, &scenario_fields());
        state.begin_submit().unwrap();
        state.finish_submit(Ok(None));

        assert!(!state.is_locked());
        state.set_field(EmployeeField::Name, "Next".into());
        assert_eq!(state.field(EmployeeField::Name), "Next");
    }

    #[test]
    fn test_failed_load_leaves_form_untouched() {
        let mut state = EditorState::new(FormMode::Edit(EmployeeId(3)));
        state.set_field(EmployeeField::Name, "typed".into());
        state.begin_load();
        state.finish_load(Err(ApiError::from_response(404, "submission not found")));

        assert_eq!(state.field(EmployeeField::Name), "typed");
        assert_eq!(
            state.error(),
            Some("Failed to load data: submission not found. Please go back to the list.")
        );
    }

    #[test]
    fn test_conflict_is_reported_as_duplicate() {
        let mut state = EditorState::new(FormMode::Edit(EmployeeId(1)));
        fill(&mut state, &scenario_fields());
        state.begin_submit().unwrap();

        let outcome = state.finish_submit(Err(ApiError::from_response(409, "")));
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(state.error(), Some("Username or Email already exists."));
        assert_eq!(state.field(EmployeeField::Username), "ab");
    }

    #[test]
    fn test_other_failures_are_prefixed_and_retryable() {
        let mut state = EditorState::new(FormMode::Create);
        fill(&mut state, &scenario_fields());
        state.begin_submit().unwrap();

        state.finish_submit(Err(ApiError::from_response(500, "")));
        assert_eq!(
            state.error(),
            Some("Submission failed: HTTP error! Status: 500")
        );
        // form kept for a manual retry
        assert_eq!(state.field(EmployeeField::Email), "a@b.co");
        assert!(state.begin_submit().is_ok());
    }

    #[test]
    fn test_confirmation_label_follows_password_in_edit_mode() {
        let mut state = EditorState::new(FormMode::Edit(EmployeeId(2)));
        assert_eq!(state.label(EmployeeField::PasswordConfirmation), "Confirm Password");
        state.set_field(EmployeeField::Password, "n".into());
        assert_eq!(state.label(EmployeeField::PasswordConfirmation), "Confirm Password *");
    }

    #[test]
    fn test_service_message_wins() {
        let mut state = EditorState::new(FormMode::Create);
        fill(&mut state, &scenario_fields());
        state.begin_submit().unwrap();
        state.finish_submit(Ok(Some("Saved!".into())));
        assert_eq!(state.message(), Some("Saved!"));
    }
}
