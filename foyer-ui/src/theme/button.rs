use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Color};

use super::palette::{Button, ButtonPalette};
use super::{Theme, CONTROL_RADIUS};

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status)
}

pub fn secondary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.secondary, status)
}

pub fn link(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.link, status)
}

pub fn container(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.container, status)
}

fn styled(p: &ButtonPalette) -> Style {
    Style {
        background: Some(Background::Color(p.background)),
        text_color: p.text,
        border: super::rounded(p.border, CONTROL_RADIUS),
        ..Default::default()
    }
}

fn button(p: &Button, status: Status) -> Style {
    match status {
        Status::Active => styled(&p.active),
        Status::Hovered => styled(&p.hovered),
        Status::Pressed => styled(p.pressed.as_ref().unwrap_or(&p.active)),
        Status::Disabled => {
            // A variant without an explicit disabled palette is dimmed instead.
            let base = styled(p.disabled.as_ref().unwrap_or(&p.active));
            Style {
                text_color: Color {
                    a: 0.2,
                    ..base.text_color
                },
                ..base
            }
        }
    }
}
