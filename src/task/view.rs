use iced::widget::{checkbox, container};
use iced::{Element, Fill};

use crate::ui::styles;

use super::{TaskMessage, TaskRow};

pub fn task_view(task: &TaskRow) -> Element<'_, TaskMessage> {
    let checkbox = checkbox(task.text(), task.completed())
        .on_toggle(TaskMessage::Completed)
        .size(24)
        .text_size(styles::ENTRY_TEXT_SIZE)
        .text_shaping(iced::widget::text::Shaping::Advanced)
        .style(styles::task_checkbox);

    container(checkbox)
        .padding([5, 5])
        .width(Fill)
        .into()
}
