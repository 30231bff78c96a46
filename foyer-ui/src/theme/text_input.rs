use iced::{
    widget::text_input::{Catalog, Status, Style, StyleFn},
    Background,
};

use super::{palette::TextInputPalette, Theme, CONTROL_RADIUS};

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
    let input = &theme.colors.text_inputs.primary;
    styled(match status {
        Status::Disabled => &input.disabled,
        _ => &input.active,
    })
}

pub fn invalid(theme: &Theme, status: Status) -> Style {
    let input = &theme.colors.text_inputs.invalid;
    styled(match status {
        Status::Disabled => &input.disabled,
        _ => &input.active,
    })
}

fn styled(p: &TextInputPalette) -> Style {
    Style {
        background: Background::Color(p.background),
        border: super::rounded(p.border, CONTROL_RADIUS),
        icon: p.icon,
        placeholder: p.placeholder,
        value: p.value,
        selection: p.selection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn invalid_inputs_keep_their_border_while_disabled() {
        let theme = <Theme as Default>::default();
        for status in [Status::Active, Status::Disabled] {
            assert_eq!(invalid(&theme, status).border.color, color::RED);
        }
    }

    #[test]
    fn disabled_inputs_mute_their_value_color() {
        let theme = <Theme as Default>::default();
        let active = primary(&theme, Status::Active);
        let disabled = primary(&theme, Status::Disabled);
        assert_ne!(active.value, disabled.value);
        assert_eq!(active.border.radius, CONTROL_RADIUS.into());
        assert_eq!(disabled.border.radius, CONTROL_RADIUS.into());
    }
}
