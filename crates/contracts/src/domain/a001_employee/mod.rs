pub mod aggregate;
pub mod form;

pub use aggregate::{DeleteRequest, Employee, EmployeeId};
pub use form::{is_valid_email, EmployeeField, EmployeeForm, EmployeePayload, FormMode, ValidationError};
