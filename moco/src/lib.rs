mod auth;
mod client;
pub mod domain;
mod moco_url;

pub use auth::*;
pub use client::*;
pub use domain::{Customer, NewTimeEntry, Project, Task, TimeEntry};
pub use moco_url::MocoURL;
