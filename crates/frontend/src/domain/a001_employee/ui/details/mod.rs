//! Employee Details UI Module
//!
//! MVVM split:
//! - state.rs: pure editor state machine (validation, plans, outcomes)
//! - model.rs: API functions (fetch, save)
//! - view_model.rs: signals and async commands
//! - view.rs: Leptos component (pure UI)
//! - page.rs: route entry reading the optional `:id`

mod model;
mod page;
pub mod state;
mod view;
mod view_model;

pub use page::EmployeeFormPage;
pub use view::EmployeeDetails;
pub use view_model::EmployeeDetailsViewModel;
