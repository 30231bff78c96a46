pub mod button;
pub mod card;
pub mod checkbox;
pub mod container;
pub mod notification;
pub mod palette;
pub mod rule;
pub mod text;
pub mod text_input;

/// Corner rounding shared by the widget catalogs. Cards and banners get the
/// larger radius, interactive controls the smaller one.
pub const CARD_RADIUS: f32 = 12.0;
pub const CONTROL_RADIUS: f32 = 8.0;

pub(crate) fn rounded(color: Option<iced::Color>, radius: f32) -> iced::Border {
    match color {
        Some(color) => iced::Border {
            radius: radius.into(),
            width: 1.0,
            color,
        },
        None => iced::Border {
            radius: radius.into(),
            ..Default::default()
        },
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Theme {
    pub colors: palette::Palette,
}

impl iced::application::DefaultStyle for Theme {
    fn default_style(&self) -> iced::application::Appearance {
        iced::application::Appearance {
            background_color: self.colors.general.background,
            text_color: self.colors.text.primary,
        }
    }
}
