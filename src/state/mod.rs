pub mod timers;

use crate::task::{TaskId, TaskRow};
pub use timers::DeletionTimers;

/// Everything the window owns: the entry field contents, the visible rows
/// (newest first) and the pending deletion timers.
#[derive(Debug, Default)]
pub struct State {
    pub input_value: String,
    pub input_hovered: bool,
    pub rows: Vec<TaskRow>,
    pub timers: DeletionTimers,
    next_id: u64,
}

impl State {
    /// Issues the identifier for a new row. Ids are unique for the lifetime
    /// of the process and never reused.
    pub fn issue_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId::new(self.next_id)
    }
}
