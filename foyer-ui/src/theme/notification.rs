use iced::widget::container::Style;
use iced::Background;

use super::palette::ContainerPalette;
use super::{Theme, CARD_RADIUS};

fn notification(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: super::rounded(palette.border, CARD_RADIUS),
        ..Default::default()
    }
}

pub fn success(theme: &Theme) -> Style {
    notification(&theme.colors.notifications.success)
}

pub fn error(theme: &Theme) -> Style {
    notification(&theme.colors.notifications.error)
}
