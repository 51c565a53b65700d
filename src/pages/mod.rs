//! Route-level pages.
//!
//! Each page evaluates the access guard on mount and wires the REST
//! services into minimal markup; rendering polish is not this crate's
//! concern.

pub mod defect_detail;
pub mod defects;
pub mod home;
pub mod login;
pub mod project_detail;
pub mod projects;
pub mod register;
pub mod reports;
pub mod users;
