use std::time::Duration;

use iced::keyboard::{self, key};
use iced::widget::{
    button, column, container, keyed_column, mouse_area, row, scrollable, text, text_input,
};
use iced::{window, Center, Element, Fill, Length, Subscription, Task};

use crate::state::State;
use crate::task::{TaskId, TaskMessage, TaskRow};
use crate::ui;
use crate::ui::styles;

/// How long a checked row stays visible before it is removed.
pub const DELETION_DELAY: Duration = Duration::from_secs(7);

const ENTRY_INPUT: &str = "task-entry";

#[derive(Debug)]
pub struct Checklist {
    state: State,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    InputHovered,
    InputUnhovered,
    AddTask,
    TaskMessage(TaskId, TaskMessage),
    DeletionElapsed(TaskId),
    TabPressed { shift: bool },
    ToggleFullscreen(window::Mode),
}

impl Checklist {
    pub fn new() -> (Self, Task<Message>) {
        (
            Checklist {
                state: State::default(),
            },
            text_input::focus(text_input::Id::new(ENTRY_INPUT)),
        )
    }

    pub fn title(&self) -> String {
        String::from("My Todo List")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(value) => {
                self.state.input_value = value;
                Task::none()
            }
            Message::InputHovered => {
                self.state.input_hovered = true;
                Task::none()
            }
            Message::InputUnhovered => {
                self.state.input_hovered = false;
                Task::none()
            }
            Message::AddTask => {
                let text = self.state.input_value.trim().to_string();

                if text.is_empty() {
                    return Task::none();
                }

                let id = self.state.issue_id();
                tracing::debug!(id = id.raw(), text, "adding task");

                let row = TaskRow::new(id, text);
                self.state.rows.insert(0, row);
                self.state.input_value.clear();

                Task::none()
            }
            Message::TaskMessage(id, message) => {
                let Some(task) = self.state.rows.iter_mut().find(|task| task.id() == id)
                else {
                    return Task::none();
                };

                let TaskMessage::Completed(completed) = message;
                task.update(TaskMessage::Completed(completed));

                if completed {
                    let (timer, handle) = Task::perform(
                        async { tokio::time::sleep(DELETION_DELAY).await },
                        move |_| Message::DeletionElapsed(id),
                    )
                    .abortable();

                    tracing::debug!(id = id.raw(), "deletion scheduled");
                    self.state.timers.record(id, handle);
                    timer
                } else {
                    tracing::debug!(id = id.raw(), "deletion cancelled");
                    self.state.timers.cancel(id);
                    Task::none()
                }
            }
            Message::DeletionElapsed(id) => {
                tracing::debug!(id = id.raw(), "deleting task");
                self.state.rows.retain(|task| task.id() != id);
                self.state.timers.forget(id);
                Task::none()
            }
            Message::TabPressed { shift } => {
                if shift {
                    iced::widget::focus_previous()
                } else {
                    iced::widget::focus_next()
                }
            }
            Message::ToggleFullscreen(mode) => {
                window::get_latest().and_then(move |window| window::change_mode(window, mode))
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let title_band = ui::panel(self.title_view()).width(Fill).height(Length::FillPortion(1));

        let content = column![self.entry_view(), self.tasks_view()]
            .spacing(10)
            .padding(10);
        let content_band = ui::panel(content).width(Fill).height(Length::FillPortion(3));

        column![title_band, content_band]
            .width(Fill)
            .height(Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| {
            let keyboard::Key::Named(key) = key else {
                return None;
            };

            match (key, modifiers) {
                (key::Named::Tab, _) => Some(Message::TabPressed {
                    shift: modifiers.shift(),
                }),
                (key::Named::ArrowUp, keyboard::Modifiers::SHIFT) => {
                    Some(Message::ToggleFullscreen(window::Mode::Fullscreen))
                }
                (key::Named::ArrowDown, keyboard::Modifiers::SHIFT) => {
                    Some(Message::ToggleFullscreen(window::Mode::Windowed))
                }
                _ => None,
            }
        })
    }

    fn title_view(&self) -> Element<'_, Message> {
        container(
            text("My Todo List")
                .size(styles::TITLE_TEXT_SIZE)
                .style(styles::muted)
                .width(Fill)
                .align_x(Center),
        )
        .style(styles::title_surface)
        .width(Fill)
        .height(Fill)
        .align_y(Center)
        .into()
    }

    fn entry_view(&self) -> Element<'_, Message> {
        let label = container(
            text("Add task:")
                .size(styles::ENTRY_TEXT_SIZE)
                .style(styles::muted),
        )
        .style(styles::entry_label)
        .padding([2, 8])
        .width(Length::FillPortion(1));

        let input = text_input("", &self.state.input_value)
            .id(text_input::Id::new(ENTRY_INPUT))
            .on_input(Message::InputChanged)
            .on_submit(Message::AddTask)
            .size(styles::ENTRY_TEXT_SIZE);

        let hovered = self.state.input_hovered;
        let input = mouse_area(
            container(input)
                .style(move |theme| styles::entry_field(theme, hovered))
                .width(Length::FillPortion(2)),
        )
        .on_enter(Message::InputHovered)
        .on_exit(Message::InputUnhovered);

        let add = button(
            text("Add")
                .size(styles::BUTTON_TEXT_SIZE)
                .width(Fill)
                .align_x(Center),
        )
        .on_press(Message::AddTask)
        .style(styles::add_button)
        .padding([6, 8])
        .width(Length::FillPortion(1));

        row![label, input, add].spacing(8).into()
    }

    fn tasks_view(&self) -> Element<'_, Message> {
        if self.state.rows.is_empty() {
            return container(
                text("No tasks yet")
                    .size(styles::ENTRY_TEXT_SIZE)
                    .style(styles::light),
            )
            .width(Fill)
            .height(Fill)
            .align_x(Center)
            .into();
        }

        let rows = keyed_column(self.state.rows.iter().map(|task| {
            let id = task.id();
            (
                id,
                task.view()
                    .map(move |message| Message::TaskMessage(id, message)),
            )
        }))
        .spacing(5)
        .width(Fill);

        scrollable(rows).height(Fill).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;

    fn checklist() -> Checklist {
        Checklist::new().0
    }

    fn add(app: &mut Checklist, text: &str) {
        let _ = app.update(Message::InputChanged(text.to_string()));
        let _ = app.update(Message::AddTask);
    }

    fn toggle(app: &mut Checklist, id: TaskId, completed: bool) {
        let _ = app.update(Message::TaskMessage(id, TaskMessage::Completed(completed)));
    }

    #[test]
    fn adding_a_task_puts_it_on_top() {
        let mut app = checklist();

        add(&mut app, "Buy milk");

        assert_eq!(app.state.rows.len(), 1);
        assert_eq!(app.state.rows[0].text(), "Buy milk");
        assert!(!app.state.rows[0].completed());
        assert!(app.state.input_value.is_empty());
    }

    #[test]
    fn newest_task_comes_first() {
        let mut app = checklist();

        add(&mut app, "A");
        add(&mut app, "B");

        let texts: Vec<&str> = app.state.rows.iter().map(|task| task.text()).collect();
        assert_eq!(texts, ["B", "A"]);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut app = checklist();

        add(&mut app, "");
        add(&mut app, "   ");

        assert!(app.state.rows.is_empty());
    }

    #[test]
    fn input_is_trimmed() {
        let mut app = checklist();

        add(&mut app, "  Buy milk  ");

        assert_eq!(app.state.rows[0].text(), "Buy milk");
    }

    #[test]
    fn rejected_input_consumes_no_id() {
        let mut clean = checklist();
        let mut noisy = checklist();

        add(&mut noisy, "");
        add(&mut noisy, "   ");

        add(&mut clean, "task");
        add(&mut noisy, "task");

        assert_eq!(clean.state.rows[0].id(), noisy.state.rows[0].id());
    }

    #[test]
    fn task_ids_are_unique() {
        let mut app = checklist();

        add(&mut app, "A");
        add(&mut app, "B");

        assert_ne!(app.state.rows[0].id(), app.state.rows[1].id());
    }

    #[test]
    fn checking_schedules_one_deletion() {
        let mut app = checklist();

        add(&mut app, "A");
        let id = app.state.rows[0].id();

        toggle(&mut app, id, true);

        assert!(app.state.rows[0].completed());
        assert!(app.state.timers.is_pending(id));
        assert_eq!(app.state.timers.pending(), 1);
    }

    #[test]
    fn unchecking_cancels_the_pending_deletion() {
        let mut app = checklist();

        add(&mut app, "A");
        let id = app.state.rows[0].id();

        toggle(&mut app, id, true);
        toggle(&mut app, id, false);

        assert!(!app.state.rows[0].completed());
        assert!(!app.state.timers.is_pending(id));
        assert_eq!(app.state.rows.len(), 1);
    }

    #[test]
    fn elapsed_timer_removes_only_its_row() {
        let mut app = checklist();

        add(&mut app, "A");
        add(&mut app, "B");
        let a = app.state.rows[1].id();

        toggle(&mut app, a, true);
        let _ = app.update(Message::DeletionElapsed(a));

        let texts: Vec<&str> = app.state.rows.iter().map(|task| task.text()).collect();
        assert_eq!(texts, ["B"]);
        assert_eq!(app.state.timers.pending(), 0);
    }

    #[test]
    fn timers_are_independent_per_row() {
        let mut app = checklist();

        add(&mut app, "A");
        add(&mut app, "B");
        let b = app.state.rows[0].id();
        let a = app.state.rows[1].id();

        toggle(&mut app, a, true);
        toggle(&mut app, b, true);
        assert_eq!(app.state.timers.pending(), 2);

        toggle(&mut app, a, false);

        assert!(!app.state.timers.is_pending(a));
        assert!(app.state.timers.is_pending(b));
    }

    #[test]
    fn toggle_for_a_removed_row_is_ignored() {
        let mut app = checklist();

        add(&mut app, "A");
        let id = app.state.rows[0].id();

        toggle(&mut app, id, true);
        let _ = app.update(Message::DeletionElapsed(id));

        toggle(&mut app, id, true);

        assert!(app.state.rows.is_empty());
        assert_eq!(app.state.timers.pending(), 0);
    }
}
