use iced::widget::{button, checkbox, container, text};
use iced::{Border, Color, Theme};

const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
        a: 1.0,
    }
}

pub const COLOUR_PRIMARY: Color = rgb8(0x2e, 0x3f, 0x4f);
pub const COLOUR_SECONDARY: Color = rgb8(0x29, 0x38, 0x46);
pub const COLOUR_LIGHT_BACKGROUND: Color = rgb8(0xff, 0xff, 0xff);
pub const COLOUR_LIGHT_TEXT: Color = rgb8(0xee, 0xee, 0xee);
pub const COLOUR_DARK_TEXT: Color = rgb8(0x80, 0x95, 0xa8);

pub const TITLE_TEXT_SIZE: f32 = 48.0;
pub const ENTRY_TEXT_SIZE: f32 = 24.0;
pub const BUTTON_TEXT_SIZE: f32 = 18.0;

pub fn background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(COLOUR_PRIMARY.into()),
        ..container::Style::default()
    }
}

/// The light surface behind the title label.
pub fn title_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(COLOUR_LIGHT_BACKGROUND.into()),
        ..container::Style::default()
    }
}

pub fn muted(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(COLOUR_DARK_TEXT),
    }
}

pub fn light(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(COLOUR_LIGHT_TEXT),
    }
}

/// The bordered label next to the entry field.
pub fn entry_label(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(COLOUR_LIGHT_BACKGROUND.into()),
        border: Border {
            color: COLOUR_DARK_TEXT,
            width: 2.0,
            radius: 2.0.into(),
        },
        ..container::Style::default()
    }
}

pub fn entry_field(_theme: &Theme, hovered: bool) -> container::Style {
    let border_color = if hovered {
        COLOUR_DARK_TEXT
    } else {
        COLOUR_SECONDARY
    };

    container::Style {
        background: Some(COLOUR_LIGHT_BACKGROUND.into()),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 2.0.into(),
        },
        ..container::Style::default()
    }
}

/// The add button, switching from the secondary to the primary colour while
/// hovered or pressed.
pub fn add_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => COLOUR_PRIMARY,
        button::Status::Active | button::Status::Disabled => COLOUR_SECONDARY,
    };

    button::Style {
        background: Some(background.into()),
        text_color: COLOUR_LIGHT_TEXT,
        border: Border {
            color: COLOUR_SECONDARY,
            width: 1.0,
            radius: 2.0.into(),
        },
        ..button::Style::default()
    }
}

pub fn task_checkbox(theme: &Theme, status: checkbox::Status) -> checkbox::Style {
    let mut style = checkbox::primary(theme, status);
    style.text_color = Some(COLOUR_LIGHT_TEXT);
    style
}
