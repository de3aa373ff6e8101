use super::aggregate::{Employee, EmployeeId};
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Mode
// ============================================================================

/// Whether the editor creates a new record or replaces an existing one.
///
/// Decided once from the route when the editor mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormMode {
    Create,
    Edit(EmployeeId),
}

impl FormMode {
    /// Mode for an optional `:id` route segment.
    ///
    /// A missing or empty segment means create mode. A segment that is not a
    /// valid id is an error rather than a silent fall back to create mode.
    pub fn from_route_param(param: Option<&str>) -> Result<Self, String> {
        match param.map(str::trim) {
            None | Some("") => Ok(FormMode::Create),
            Some(raw) => EmployeeId::from_string(raw).map(FormMode::Edit),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn id(&self) -> Option<EmployeeId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }
}

// ============================================================================
// Fields
// ============================================================================

/// Every editable field of the employee form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    Name,
    LastName,
    Username,
    Email,
    Password,
    PasswordConfirmation,
    PhoneNumber,
    LocationBranch,
    BasicSalary,
    GrossSalary,
    Address,
    Department,
    Designation,
    UserRole,
    AccessLevel,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 15] = [
        EmployeeField::Name,
        EmployeeField::LastName,
        EmployeeField::Username,
        EmployeeField::Email,
        EmployeeField::Password,
        EmployeeField::PasswordConfirmation,
        EmployeeField::PhoneNumber,
        EmployeeField::LocationBranch,
        EmployeeField::BasicSalary,
        EmployeeField::GrossSalary,
        EmployeeField::Address,
        EmployeeField::Department,
        EmployeeField::Designation,
        EmployeeField::UserRole,
        EmployeeField::AccessLevel,
    ];

    /// Wire key, also used as the DOM id and name of the input
    pub fn key(&self) -> &'static str {
        match self {
            EmployeeField::Name => "name",
            EmployeeField::LastName => "lastName",
            EmployeeField::Username => "username",
            EmployeeField::Email => "email",
            EmployeeField::Password => "password",
            EmployeeField::PasswordConfirmation => "passwordConfirmation",
            EmployeeField::PhoneNumber => "phoneNumber",
            EmployeeField::LocationBranch => "locationBranch",
            EmployeeField::BasicSalary => "basicSalary",
            EmployeeField::GrossSalary => "grossSalary",
            EmployeeField::Address => "address",
            EmployeeField::Department => "department",
            EmployeeField::Designation => "designation",
            EmployeeField::UserRole => "userRole",
            EmployeeField::AccessLevel => "accessLevel",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EmployeeField::Name => "First Name",
            EmployeeField::LastName => "Last Name",
            EmployeeField::Username => "Username",
            EmployeeField::Email => "Email ID",
            EmployeeField::Password => "Password",
            EmployeeField::PasswordConfirmation => "Confirm Password",
            EmployeeField::PhoneNumber => "Phone Number",
            EmployeeField::LocationBranch => "Location Branch",
            EmployeeField::BasicSalary => "Basic Salary",
            EmployeeField::GrossSalary => "Gross Salary",
            EmployeeField::Address => "Address",
            EmployeeField::Department => "Department",
            EmployeeField::Designation => "Designation",
            EmployeeField::UserRole => "User Role",
            EmployeeField::AccessLevel => "Access Level",
        }
    }

    /// Label with the required marker or the edit-mode password hint
    pub fn label(&self, mode: FormMode) -> String {
        match self {
            EmployeeField::Password if mode.is_edit() => {
                format!("{} (Leave blank to keep unchanged)", self.title())
            }
            _ if self.is_required(mode) => format!("{} *", self.title()),
            _ => self.title().to_string(),
        }
    }

    /// `type` attribute of the input; "textarea" renders a textarea
    pub fn input_type(&self) -> &'static str {
        match self {
            EmployeeField::Email => "email",
            EmployeeField::Password | EmployeeField::PasswordConfirmation => "password",
            EmployeeField::PhoneNumber => "tel",
            EmployeeField::BasicSalary | EmployeeField::GrossSalary => "number",
            EmployeeField::Address => "textarea",
            _ => "text",
        }
    }

    pub fn is_required(&self, mode: FormMode) -> bool {
        match self {
            EmployeeField::Name
            | EmployeeField::LastName
            | EmployeeField::Username
            | EmployeeField::Email => true,
            EmployeeField::Password | EmployeeField::PasswordConfirmation => !mode.is_edit(),
            _ => false,
        }
    }

    pub fn get<'a>(&self, form: &'a EmployeeForm) -> &'a str {
        match self {
            EmployeeField::Name => &form.name,
            EmployeeField::LastName => &form.last_name,
            EmployeeField::Username => &form.username,
            EmployeeField::Email => &form.email,
            EmployeeField::Password => &form.password,
            EmployeeField::PasswordConfirmation => &form.password_confirmation,
            EmployeeField::PhoneNumber => &form.phone_number,
            EmployeeField::LocationBranch => &form.location_branch,
            EmployeeField::BasicSalary => &form.basic_salary,
            EmployeeField::GrossSalary => &form.gross_salary,
            EmployeeField::Address => &form.address,
            EmployeeField::Department => &form.department,
            EmployeeField::Designation => &form.designation,
            EmployeeField::UserRole => &form.user_role,
            EmployeeField::AccessLevel => &form.access_level,
        }
    }

    pub fn set(&self, form: &mut EmployeeForm, value: String) {
        let slot = match self {
            EmployeeField::Name => &mut form.name,
            EmployeeField::LastName => &mut form.last_name,
            EmployeeField::Username => &mut form.username,
            EmployeeField::Email => &mut form.email,
            EmployeeField::Password => &mut form.password,
            EmployeeField::PasswordConfirmation => &mut form.password_confirmation,
            EmployeeField::PhoneNumber => &mut form.phone_number,
            EmployeeField::LocationBranch => &mut form.location_branch,
            EmployeeField::BasicSalary => &mut form.basic_salary,
            EmployeeField::GrossSalary => &mut form.gross_salary,
            EmployeeField::Address => &mut form.address,
            EmployeeField::Department => &mut form.department,
            EmployeeField::Designation => &mut form.designation,
            EmployeeField::UserRole => &mut form.user_role,
            EmployeeField::AccessLevel => &mut form.access_level,
        };
        *slot = value;
    }
}

// ============================================================================
// Validation
// ============================================================================

/// A rule broken before anything is sent. `Display` is the banner text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the '{}' field.", .0.title())]
    Required(EmployeeField),
    #[error("Please fill in *both* Password and Confirm Password fields if changing the password.")]
    PasswordPairIncomplete,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("'{}' must be a number, got '{value}'.", .field.title())]
    InvalidSalary { field: EmployeeField, value: String },
}

impl ValidationError {
    /// Field the message refers to, if any
    pub fn field(&self) -> Option<EmployeeField> {
        match self {
            ValidationError::Required(field) => Some(*field),
            ValidationError::PasswordPairIncomplete | ValidationError::PasswordMismatch => {
                Some(EmployeeField::Password)
            }
            ValidationError::InvalidEmail => Some(EmployeeField::Email),
            ValidationError::InvalidSalary { field, .. } => Some(*field),
        }
    }
}

/// Minimal shape check: `local@domain.tld` without whitespace
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn parse_salary(field: EmployeeField, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidSalary {
            field,
            value: raw.to_string(),
        }),
    }
}

fn format_salary(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

// ============================================================================
// Form / Payload
// ============================================================================

/// Editable state of the employee form. Every value is kept as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeForm {
    pub name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub phone_number: String,
    pub location_branch: String,
    pub basic_salary: String,
    pub gross_salary: String,
    pub address: String,
    pub department: String,
    pub designation: String,
    pub user_role: String,
    pub access_level: String,
}

impl EmployeeForm {
    /// Populate the form from a fetched record.
    ///
    /// Password fields always start empty: the stored password is never
    /// shown and must be re-entered to change it.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            last_name: employee.last_name.clone(),
            username: employee.username.clone(),
            email: employee.email.clone(),
            password: String::new(),
            password_confirmation: String::new(),
            phone_number: employee.phone_number.clone(),
            location_branch: employee.location_branch.clone(),
            basic_salary: format_salary(employee.basic_salary),
            gross_salary: format_salary(employee.gross_salary),
            address: employee.address.clone(),
            department: employee.department.clone(),
            designation: employee.designation.clone(),
            user_role: employee.user_role.clone(),
            access_level: employee.access_level.clone(),
        }
    }

    pub fn validate(&self, mode: FormMode) -> Result<(), ValidationError> {
        self.to_payload(mode).map(|_| ())
    }

    /// Check every client-side rule and build the outgoing body.
    ///
    /// Rules run in a fixed order and the first violation is returned.
    pub fn to_payload(&self, mode: FormMode) -> Result<EmployeePayload, ValidationError> {
        for field in [
            EmployeeField::Name,
            EmployeeField::LastName,
            EmployeeField::Username,
            EmployeeField::Email,
        ] {
            if is_blank(field.get(self)) {
                return Err(ValidationError::Required(field));
            }
        }

        let send_password = match mode {
            FormMode::Create => {
                if is_blank(&self.password) {
                    return Err(ValidationError::Required(EmployeeField::Password));
                }
                if is_blank(&self.password_confirmation) {
                    return Err(ValidationError::Required(EmployeeField::PasswordConfirmation));
                }
                true
            }
            // any typed character counts, whitespace included
            FormMode::Edit(_) => {
                let password_given = !self.password.is_empty();
                if password_given != !self.password_confirmation.is_empty() {
                    return Err(ValidationError::PasswordPairIncomplete);
                }
                password_given
            }
        };
        if send_password && self.password != self.password_confirmation {
            return Err(ValidationError::PasswordMismatch);
        }

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        let basic_salary = parse_salary(EmployeeField::BasicSalary, &self.basic_salary)?;
        let gross_salary = parse_salary(EmployeeField::GrossSalary, &self.gross_salary)?;

        let (password, password_confirmation) = if send_password {
            (
                Some(self.password.clone()),
                Some(self.password_confirmation.clone()),
            )
        } else {
            (None, None)
        };

        Ok(EmployeePayload {
            name: self.name.clone(),
            last_name: self.last_name.clone(),
            username: self.username.clone(),
            email: self.email.trim().to_string(),
            password,
            password_confirmation,
            phone_number: self.phone_number.clone(),
            location_branch: self.location_branch.clone(),
            basic_salary,
            gross_salary,
            address: self.address.clone(),
            department: self.department.clone(),
            designation: self.designation.clone(),
            user_role: self.user_role.clone(),
            access_level: self.access_level.clone(),
        })
    }
}

/// Body of `POST /submit` and `PUT /submission/{id}`.
///
/// The password keys are left out entirely when an edit keeps the current
/// password, so "unchanged" is never confused with "cleared".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "passwordConfirmation", skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "locationBranch")]
    pub location_branch: String,
    #[serde(rename = "basicSalary")]
    pub basic_salary: f64,
    #[serde(rename = "grossSalary")]
    pub gross_salary: f64,
    pub address: String,
    pub department: String,
    pub designation: String,
    #[serde(rename = "userRole")]
    pub user_role: String,
    #[serde(rename = "accessLevel")]
    pub access_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn filled_form() -> EmployeeForm {
        EmployeeForm {
            name: "A".into(),
            last_name: "B".into(),
            username: "ab".into(),
            email: "a@b.co".into(),
            password: "x".into(),
            password_confirmation: "x".into(),
            ..Default::default()
        }
    }

    const EDIT: FormMode = FormMode::Edit(EmployeeId(7));

    #[test]
    fn test_create_payload_defaults_salaries_to_zero() {
        let payload = filled_form().to_payload(FormMode::Create).unwrap();
        let body = serde_json::to_value(&payload).unwrap();

        assert_eq!(body["basicSalary"].as_f64(), Some(0.0));
        assert_eq!(body["grossSalary"].as_f64(), Some(0.0));
        assert_eq!(body["password"], "x");
        assert_eq!(body["passwordConfirmation"], "x");
        assert_eq!(body["lastName"], "B");
    }

    #[test]
    fn test_every_blank_required_field_is_rejected() {
        let required = [
            EmployeeField::Name,
            EmployeeField::LastName,
            EmployeeField::Username,
            EmployeeField::Email,
        ];
        for field in required {
            for blank in ["", "   ", "\t"] {
                let mut form = filled_form();
                field.set(&mut form, blank.to_string());
                for mode in [FormMode::Create, EDIT] {
                    assert_eq!(
                        form.to_payload(mode),
                        Err(ValidationError::Required(field)),
                        "{:?} = {:?} in {:?}",
                        field,
                        blank,
                        mode
                    );
                }
            }
        }
    }

    #[test]
    fn test_first_blank_field_wins() {
        let form = EmployeeForm::default();
        assert_eq!(
            form.validate(FormMode::Create),
            Err(ValidationError::Required(EmployeeField::Name))
        );
    }

    #[test]
    fn test_create_requires_both_passwords() {
        let mut form = filled_form();
        form.password.clear();
        assert_eq!(
            form.validate(FormMode::Create),
            Err(ValidationError::Required(EmployeeField::Password))
        );

        let mut form = filled_form();
        form.password_confirmation = "  ".into();
        assert_eq!(
            form.validate(FormMode::Create),
            Err(ValidationError::Required(EmployeeField::PasswordConfirmation))
        );
    }

    #[test]
    fn test_create_rejects_mismatched_passwords() {
        let mut form = filled_form();
        form.password_confirmation = "y".into();
        assert_eq!(
            form.validate(FormMode::Create),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_edit_rejects_half_filled_password_pair() {
        let mut form = filled_form();
        form.password_confirmation.clear();
        assert_eq!(form.validate(EDIT), Err(ValidationError::PasswordPairIncomplete));

        let mut form = filled_form();
        form.password.clear();
        assert_eq!(form.validate(EDIT), Err(ValidationError::PasswordPairIncomplete));
    }

    #[test]
    fn test_edit_whitespace_password_is_not_dropped() {
        let mut form = filled_form();
        form.password = "   ".into();
        form.password_confirmation.clear();
        assert_eq!(form.validate(EDIT), Err(ValidationError::PasswordPairIncomplete));

        form.password = "  ".into();
        form.password_confirmation = " ".into();
        assert_eq!(form.validate(EDIT), Err(ValidationError::PasswordMismatch));

        form.password_confirmation = "  ".into();
        let payload = form.to_payload(EDIT).unwrap();
        assert_eq!(payload.password.as_deref(), Some("  "));
    }

    #[test]
    fn test_edit_rejects_mismatched_passwords() {
        let mut form = filled_form();
        form.password = "new".into();
        form.password_confirmation = "other".into();
        assert_eq!(form.validate(EDIT), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_edit_without_password_omits_password_keys() {
        let mut form = filled_form();
        form.password.clear();
        form.password_confirmation.clear();

        let body = serde_json::to_value(form.to_payload(EDIT).unwrap()).unwrap();
        let object = body.as_object().unwrap();

        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("passwordConfirmation"));
    }

    #[test]
    fn test_edit_with_new_password_sends_it() {
        let mut form = filled_form();
        form.password = "secret".into();
        form.password_confirmation = "secret".into();

        let body = serde_json::to_value(form.to_payload(EDIT).unwrap()).unwrap();
        assert_eq!(body["password"], Value::from("secret"));
    }

    #[test]
    fn test_malformed_emails_are_rejected() {
        for email in ["ab.co", "a@bco", "@b.co", "a@.co", "a@b.", "a b@c.de"] {
            let mut form = filled_form();
            form.email = email.into();
            assert_eq!(
                form.validate(FormMode::Create),
                Err(ValidationError::InvalidEmail),
                "{}",
                email
            );
        }
    }

    #[test]
    fn test_email_is_sent_trimmed() {
        let mut form = filled_form();
        form.email = " a@b.co ".into();
        let payload = form.to_payload(FormMode::Create).unwrap();
        assert_eq!(payload.email, "a@b.co");
    }

    #[test]
    fn test_email_shape_accepts_common_addresses() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email(" padded@example.com "));
    }

    #[test]
    fn test_salaries_parse_as_floats() {
        let mut form = filled_form();
        form.basic_salary = "1234.50".into();
        form.gross_salary = " 2000 ".into();

        let payload = form.to_payload(FormMode::Create).unwrap();
        assert_eq!(payload.basic_salary, 1234.5);
        assert_eq!(payload.gross_salary, 2000.0);
    }

    #[test]
    fn test_bad_salary_is_rejected() {
        for raw in ["abc", "1,000", "NaN", "inf"] {
            let mut form = filled_form();
            form.gross_salary = raw.into();
            assert!(matches!(
                form.validate(FormMode::Create),
                Err(ValidationError::InvalidSalary {
                    field: EmployeeField::GrossSalary,
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_negative_salary_is_passed_through() {
        let mut form = filled_form();
        form.basic_salary = "-5".into();
        let payload = form.to_payload(FormMode::Create).unwrap();
        assert_eq!(payload.basic_salary, -5.0);
    }

    #[test]
    fn test_hydration_resets_passwords_and_keeps_salary() {
        let employee = Employee {
            id: Some(EmployeeId(7)),
            name: "A".into(),
            last_name: "B".into(),
            username: "ab".into(),
            email: "a@b.co".into(),
            basic_salary: 1000.0,
            ..Default::default()
        };
        let form = EmployeeForm::from_employee(&employee);

        assert_eq!(form.password, "");
        assert_eq!(form.password_confirmation, "");
        assert_eq!(form.basic_salary, "1000");
        assert_eq!(form.gross_salary, "");

        let payload = form.to_payload(EDIT).unwrap();
        assert_eq!(payload.basic_salary, 1000.0);
        assert_eq!(payload.password, None);
    }

    #[test]
    fn test_route_param_selects_mode() {
        assert_eq!(FormMode::from_route_param(None), Ok(FormMode::Create));
        assert_eq!(FormMode::from_route_param(Some("")), Ok(FormMode::Create));
        assert_eq!(
            FormMode::from_route_param(Some("7")),
            Ok(FormMode::Edit(EmployeeId(7)))
        );
        assert!(FormMode::from_route_param(Some("seven")).is_err());
    }

    #[test]
    fn test_labels_follow_mode() {
        assert_eq!(EmployeeField::Password.label(FormMode::Create), "Password *");
        assert_eq!(
            EmployeeField::Password.label(EDIT),
            "Password (Leave blank to keep unchanged)"
        );
        assert_eq!(EmployeeField::PasswordConfirmation.label(EDIT), "Confirm Password");
        assert_eq!(EmployeeField::Department.label(EDIT), "Department");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::Required(EmployeeField::LastName).to_string(),
            "Please fill in the 'Last Name' field."
        );
        assert_eq!(
            ValidationError::InvalidSalary {
                field: EmployeeField::BasicSalary,
                value: "x".into()
            }
            .to_string(),
            "'Basic Salary' must be a number, got 'x'."
        );
    }
}
