mod activity;
mod project;

pub use activity::*;
pub use project::*;
