use iced::widget::{button, container, pick_list, text_editor, text_input};
use iced::{Background, Border, Color, Theme};

use crate::http::render::Tone;

pub const BG: Color = Color {
    r: 16.0 / 255.0,
    g: 18.0 / 255.0,
    b: 23.0 / 255.0,
    a: 1.0,
};
pub const SURFACE_0: Color = Color {
    r: 22.0 / 255.0,
    g: 25.0 / 255.0,
    b: 32.0 / 255.0,
    a: 1.0,
};
pub const SURFACE_1: Color = Color {
    r: 28.0 / 255.0,
    g: 32.0 / 255.0,
    b: 41.0 / 255.0,
    a: 1.0,
};
pub const SURFACE_2: Color = Color {
    r: 36.0 / 255.0,
    g: 41.0 / 255.0,
    b: 52.0 / 255.0,
    a: 1.0,
};
pub const BORDER: Color = Color {
    r: 52.0 / 255.0,
    g: 59.0 / 255.0,
    b: 73.0 / 255.0,
    a: 1.0,
};
pub const TEXT: Color = Color {
    r: 232.0 / 255.0,
    g: 236.0 / 255.0,
    b: 242.0 / 255.0,
    a: 1.0,
};
pub const TEXT_MUTED: Color = Color {
    r: 138.0 / 255.0,
    g: 148.0 / 255.0,
    b: 162.0 / 255.0,
    a: 1.0,
};
pub const PRIMARY: Color = Color {
    r: 10.0 / 255.0,
    g: 132.0 / 255.0,
    b: 1.0,
    a: 1.0,
};
pub const PRIMARY_HOVER: Color = Color {
    r: 50.0 / 255.0,
    g: 153.0 / 255.0,
    b: 1.0,
    a: 1.0,
};
pub const SEND: Color = Color {
    r: 48.0 / 255.0,
    g: 209.0 / 255.0,
    b: 88.0 / 255.0,
    a: 1.0,
};
pub const SEND_HOVER: Color = Color {
    r: 74.0 / 255.0,
    g: 222.0 / 255.0,
    b: 109.0 / 255.0,
    a: 1.0,
};
pub const DANGER: Color = Color {
    r: 1.0,
    g: 79.0 / 255.0,
    b: 68.0 / 255.0,
    a: 1.0,
};

/// Response text color for a rendered exchange.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => TEXT,
        Tone::Attention => DANGER,
    }
}

pub fn app_theme() -> Theme {
    Theme::custom(
        "Demobench".to_string(),
        iced::theme::Palette {
            background: BG,
            text: TEXT,
            primary: PRIMARY,
            success: SEND,
            danger: DANGER,
        },
    )
}

pub fn surface_style(color: Color, border_radius: f32) -> container::Style {
    container::Style::default()
        .background(Background::Color(color))
        .color(TEXT)
        .border(Border {
            radius: border_radius.into(),
            width: 1.0,
            color: BORDER,
        })
}

pub fn flat_surface_style(color: Color) -> container::Style {
    container::Style::default()
        .background(Background::Color(color))
        .color(TEXT)
}

pub fn tab_button(active: bool, _theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Active => {
            if active {
                SURFACE_1
            } else {
                SURFACE_0
            }
        }
        button::Status::Hovered => SURFACE_1,
        button::Status::Pressed => SURFACE_2,
        button::Status::Disabled => SURFACE_0,
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: if active { TEXT } else { TEXT_MUTED },
        border: Border {
            radius: 0.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Default::default(),
    }
}

fn filled_button(fill: Color, hover: Color, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Active | button::Status::Pressed => fill,
        button::Status::Hovered => hover,
        button::Status::Disabled => SURFACE_2,
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: if matches!(status, button::Status::Disabled) {
            TEXT_MUTED
        } else {
            TEXT
        },
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: bg,
        },
        shadow: Default::default(),
    }
}

pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button(PRIMARY, PRIMARY_HOVER, status)
}

pub fn send_button(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button(SEND, SEND_HOVER, status)
}

pub fn danger_button(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button(DANGER, DANGER, status)
}

pub fn subtle_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Active => SURFACE_1,
        button::Status::Hovered | button::Status::Pressed => SURFACE_2,
        button::Status::Disabled => SURFACE_1,
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: if matches!(status, button::Status::Disabled) {
            TEXT_MUTED
        } else {
            TEXT
        },
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: BORDER,
        },
        shadow: Default::default(),
    }
}

pub fn input_style(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let base = text_input::Style {
        background: Background::Color(SURFACE_1),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: BORDER,
        },
        icon: TEXT_MUTED,
        placeholder: TEXT_MUTED,
        value: TEXT,
        selection: Color::from_rgba(0.04, 0.52, 1.0, 0.35),
    };

    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            border: Border {
                color: SURFACE_2,
                ..base.border
            },
            ..base
        },
        text_input::Status::Focused => text_input::Style {
            border: Border {
                color: PRIMARY,
                ..base.border
            },
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            value: TEXT_MUTED,
            ..base
        },
    }
}

pub fn editor_style(_theme: &Theme, status: text_editor::Status) -> text_editor::Style {
    let base = text_editor::Style {
        background: Background::Color(SURFACE_1),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: BORDER,
        },
        icon: TEXT_MUTED,
        placeholder: TEXT_MUTED,
        value: TEXT,
        selection: Color::from_rgba(0.04, 0.52, 1.0, 0.35),
    };

    match status {
        text_editor::Status::Active => base,
        text_editor::Status::Hovered => text_editor::Style {
            border: Border {
                color: SURFACE_2,
                ..base.border
            },
            ..base
        },
        text_editor::Status::Focused => text_editor::Style {
            border: Border {
                color: PRIMARY,
                ..base.border
            },
            ..base
        },
        text_editor::Status::Disabled => text_editor::Style {
            value: TEXT_MUTED,
            ..base
        },
    }
}

pub fn pick_list_style(_theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let base = pick_list::Style {
        text_color: TEXT,
        background: Background::Color(SURFACE_1),
        placeholder_color: TEXT_MUTED,
        handle_color: TEXT_MUTED,
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: BORDER,
        },
    };

    match status {
        pick_list::Status::Active => base,
        pick_list::Status::Hovered | pick_list::Status::Opened => pick_list::Style {
            border: Border {
                color: PRIMARY,
                ..base.border
            },
            ..base
        },
    }
}
