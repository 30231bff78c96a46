use iced::{
    widget::checkbox::{Catalog, Status, Style, StyleFn},
    Border,
};

use super::Theme;

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
    let boxes = &theme.colors.checkboxes;
    Style {
        icon_color: boxes.icon,
        text_color: Some(boxes.text),
        background: boxes.background.into(),
        border: Border {
            radius: 4.0.into(),
            width: 1.0,
            color: match status {
                Status::Hovered { .. } => boxes.border_hovered,
                _ => boxes.border,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hovering_highlights_the_box() {
        let theme = <Theme as Default>::default();
        let idle = primary(&theme, Status::Active { is_checked: false });
        let hovered = primary(&theme, Status::Hovered { is_checked: false });
        assert_ne!(idle.border.color, hovered.border.color);
    }
}
