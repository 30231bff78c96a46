use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
    pub checkboxes: Checkboxes,
    pub rule: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub warning: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub link: Button,
    pub container: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub success: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Checkboxes {
    pub icon: iced::Color,
    pub text: iced::Color,
    pub background: iced::Color,
    pub border: iced::Color,
    pub border_hovered: iced::Color,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::NIGHT,
                foreground: color::SLATE,
            },
            text: Text {
                primary: color::GREY_1,
                secondary: color::GREY_3,
                warning: color::ORANGE,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::INDIGO,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::LIGHT_INDIGO,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::INDIGO,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_4,
                        text: color::GREY_1,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::SLATE,
                        text: color::GREY_1,
                        border: color::GREY_4.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::SLATE,
                        text: color::WHITE,
                        border: color::LIGHT_INDIGO.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::SLATE,
                        text: color::WHITE,
                        border: color::INDIGO.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::SLATE,
                        text: color::GREY_3,
                        border: color::GREY_4.into(),
                    }),
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::LIGHT_INDIGO,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::LIGHT_INDIGO,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_3,
                        border: None,
                    }),
                },
                container: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_1,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::SLATE,
                    text: None,
                    border: color::GREY_4.into(),
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::TRANSPARENT_GREEN,
                    text: color::GREEN.into(),
                    border: color::GREEN.into(),
                },
                error: ContainerPalette {
                    background: color::TRANSPARENT_RED,
                    text: color::RED.into(),
                    border: color::RED.into(),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::NIGHT,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_1,
                        selection: color::TRANSPARENT_INDIGO,
                        border: color::GREY_4.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::NIGHT,
                        icon: color::GREY_4,
                        placeholder: color::GREY_4,
                        value: color::GREY_3,
                        selection: color::TRANSPARENT_INDIGO,
                        border: color::GREY_4.into(),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::NIGHT,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_1,
                        selection: color::TRANSPARENT_INDIGO,
                        border: color::RED.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::NIGHT,
                        icon: color::GREY_4,
                        placeholder: color::GREY_4,
                        value: color::GREY_3,
                        selection: color::TRANSPARENT_INDIGO,
                        border: color::RED.into(),
                    },
                },
            },
            checkboxes: Checkboxes {
                icon: color::WHITE,
                text: color::GREY_1,
                background: color::NIGHT,
                border: color::GREY_4,
                border_hovered: color::LIGHT_INDIGO,
            },
            rule: color::GREY_4,
        }
    }
}
