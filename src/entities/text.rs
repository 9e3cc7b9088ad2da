//! Text bundle helpers shared by every page section.

use bevy::{prelude::*, text::TextBounds};

use crate::systems::colors::{ColorAnchor, Palette, ThemeRole};

pub fn heading(value: &str, size: f32, palette: &Palette) -> impl Bundle {
    (
        Text2d::new(value),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(palette.ink),
        ThemeRole::Ink,
        ColorAnchor::default(),
        TextLayout {
            justify: Justify::Center,
            ..default()
        },
    )
}

pub fn body(value: &str, size: f32, palette: &Palette) -> impl Bundle {
    (
        Text2d::new(value),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(palette.muted),
        ThemeRole::Muted,
        ColorAnchor::default(),
        TextLayout {
            justify: Justify::Center,
            ..default()
        },
    )
}

/// Word-wrapped body copy constrained to `width`.
pub fn paragraph(value: &str, size: f32, width: f32, palette: &Palette) -> impl Bundle {
    (
        body(value, size, palette),
        TextBounds {
            width: Some(width),
            height: None,
        },
    )
}

/// Fixed-color text; accent-tag glyphs keep their hue in both themes.
pub fn glyph(value: &str, size: f32, color: Color) -> impl Bundle {
    (
        Text2d::new(value),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        ColorAnchor::default(),
        TextLayout {
            justify: Justify::Center,
            ..default()
        },
    )
}
