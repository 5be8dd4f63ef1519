use std::collections::HashMap;
use std::fmt;

use iced::task::Handle;

use crate::task::TaskId;

/// The pending deletion timers, at most one per row.
///
/// A handle is recorded when a row is checked and removed when the row is
/// unchecked or the timer fires. Aborting a handle whose task already
/// finished is a no-op, so cancelling is always safe.
#[derive(Default)]
pub struct DeletionTimers {
    handles: HashMap<TaskId, Handle>,
}

impl DeletionTimers {
    pub fn record(&mut self, id: TaskId, handle: Handle) {
        if let Some(previous) = self.handles.insert(id, handle) {
            previous.abort();
        }
    }

    /// Aborts and forgets the pending timer for `id`, if any.
    pub fn cancel(&mut self, id: TaskId) {
        if let Some(handle) = self.handles.remove(&id) {
            handle.abort();
        }
    }

    /// Drops the record of a timer that has already fired.
    pub fn forget(&mut self, id: TaskId) {
        self.handles.remove(&id);
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.handles.contains_key(&id)
    }

    pub fn pending(&self) -> usize {
        self.handles.len()
    }
}

impl fmt::Debug for DeletionTimers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeletionTimers")
            .field("pending", &self.handles.len())
            .finish()
    }
}
