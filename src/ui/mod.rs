pub mod styles;

use iced::widget::{container, Container};
use iced::Element;

/// Layout container: a styled rectangular region that holds arbitrary
/// content. Returns the underlying `Container` so callers keep the toolkit's
/// full sizing and styling surface.
pub fn panel<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> Container<'a, Message> {
    container(content).style(styles::background)
}
