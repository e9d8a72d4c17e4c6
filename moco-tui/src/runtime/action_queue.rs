use crate::last_task::LastTask;
use moco::NewTimeEntry;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Side effects requested by key handlers, run by the event loop in order.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    SubmitEntry(NewTimeEntry),
    DeleteEntry { id: i64 },
    ReloadEntries,
    SaveLastTask(LastTask),
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
