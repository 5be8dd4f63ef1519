pub mod view;

use iced::Element;

/// Stable identifier issued to a row at creation time, used to correlate the
/// row with its pending deletion timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// One visible checklist entry. The text is fixed once created; only the
/// toggle state changes.
#[derive(Debug, Clone)]
pub struct TaskRow {
    id: TaskId,
    text: String,
    completed: bool,
}

#[derive(Debug, Clone)]
pub enum TaskMessage {
    Completed(bool),
}

impl TaskRow {
    pub fn new(id: TaskId, text: String) -> Self {
        TaskRow {
            id,
            text,
            completed: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn update(&mut self, message: TaskMessage) {
        match message {
            TaskMessage::Completed(completed) => {
                self.completed = completed;
            }
        }
    }

    pub fn view(&self) -> Element<'_, TaskMessage> {
        view::task_view(self)
    }
}
