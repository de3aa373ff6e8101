//! Types shared between the employee intake frontend and its HTTP collaborator.
//!
//! Nothing in this crate touches the browser, so every validation rule and
//! wire-format detail can be exercised with plain `cargo test`.

pub mod domain;
pub mod shared;
pub mod usecases;
