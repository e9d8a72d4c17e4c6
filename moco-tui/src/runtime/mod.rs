mod action_queue;
mod actions;
mod event_loop;
mod views;

pub(crate) use actions::reload_entries;
pub use event_loop::run_app;
