use iced::Color;
pub const BLACK: Color = iced::Color::BLACK;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const NIGHT: Color = Color::from_rgb(
    0x0F as f32 / 255.0,
    0x11 as f32 / 255.0,
    0x1A as f32 / 255.0,
);
pub const SLATE: Color = Color::from_rgb(
    0x1B as f32 / 255.0,
    0x1E as f32 / 255.0,
    0x2B as f32 / 255.0,
);
pub const GREY_4: Color = Color::from_rgb(
    0x42 as f32 / 255.0,
    0x45 as f32 / 255.0,
    0x53 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x75 as f32 / 255.0,
    0x85 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCE as f32 / 255.0,
    0xD6 as f32 / 255.0,
);
pub const GREY_1: Color = Color::from_rgb(
    0xE6 as f32 / 255.0,
    0xE7 as f32 / 255.0,
    0xEB as f32 / 255.0,
);
pub const WHITE: Color = iced::Color::WHITE;
pub const INDIGO: Color = Color::from_rgb(
    0x63 as f32 / 255.0,
    0x66 as f32 / 255.0,
    0xF1 as f32 / 255.0,
);
pub const LIGHT_INDIGO: Color = Color::from_rgb(
    0x81 as f32 / 255.0,
    0x8C as f32 / 255.0,
    0xF8 as f32 / 255.0,
);
pub const TRANSPARENT_INDIGO: Color = Color::from_rgba(
    0x63 as f32 / 255.0,
    0x66 as f32 / 255.0,
    0xF1 as f32 / 255.0,
    0.3,
);
pub const GREEN: Color = Color::from_rgb(
    0x22 as f32 / 255.0,
    0xC5 as f32 / 255.0,
    0x5E as f32 / 255.0,
);
pub const TRANSPARENT_GREEN: Color = Color::from_rgba(
    0x22 as f32 / 255.0,
    0xC5 as f32 / 255.0,
    0x5E as f32 / 255.0,
    0.15,
);
pub const RED: Color = Color::from_rgb(
    0xEF as f32 / 255.0,
    0x44 as f32 / 255.0,
    0x44 as f32 / 255.0,
);
pub const TRANSPARENT_RED: Color = Color::from_rgba(
    0xEF as f32 / 255.0,
    0x44 as f32 / 255.0,
    0x44 as f32 / 255.0,
    0.15,
);
pub const ORANGE: Color =
    Color::from_rgb(0xFF as f32 / 255.0, 0xA7 as f32 / 255.0, 0x0 as f32 / 255.0);
