use bevy::prelude::*;

use crate::{
    entities::text,
    systems::{
        colors::{ColorAnchor, Palette, ThemeRole, INDIGO_DEEP},
        interaction::{Clickable, HoverScale, Hoverable},
        motion::Reveal,
    },
};

use super::{nav::NavAction, Section};

const TITLE_Y: f32 = 150.0;
const BUTTON_SIZE: Vec2 = Vec2::new(210.0, 54.0);
const REVEAL_RISE: Vec2 = Vec2::new(0.0, -70.0);
const REVEAL_STAGGER: f32 = 0.2;

pub fn spawn(commands: &mut Commands, scene: Entity, palette: &Palette) {
    commands.entity(scene).with_children(|parent| {
        parent.spawn((
            text::heading("RAJESH", 104.0, palette),
            Transform::from_xyz(0.0, TITLE_Y + 62.0, 1.0),
            Reveal::new(REVEAL_RISE, 0.0, 1.0),
        ));
        parent.spawn((
            text::glyph("KUMAR JHA", 104.0, palette.accent),
            ThemeRole::Accent,
            Transform::from_xyz(0.0, TITLE_Y - 62.0, 1.0),
            Reveal::new(REVEAL_RISE, 0.0, 1.0),
        ));

        parent.spawn((
            text::body(
                "Full Stack Developer crafting visually striking & high-performance applications.",
                20.0,
                palette,
            ),
            Transform::from_xyz(0.0, -40.0, 1.0),
            Reveal::new(REVEAL_RISE, REVEAL_STAGGER, 1.0),
        ));

        parent
            .spawn((
                Sprite {
                    color: INDIGO_DEEP,
                    custom_size: Some(BUTTON_SIZE),
                    ..default()
                },
                ColorAnchor::default(),
                Transform::from_xyz(-120.0, -130.0, 1.0),
                Hoverable::new(BUTTON_SIZE),
                HoverScale::new(1.05),
                Clickable::new(NavAction::Jump(Section::Projects), BUTTON_SIZE),
                Reveal::new(REVEAL_RISE, 2.0 * REVEAL_STAGGER, 1.0),
            ))
            .with_children(|button| {
                button.spawn((
                    text::glyph("VIEW PROJECTS", 15.0, Color::WHITE),
                    Transform::from_xyz(0.0, 0.0, 1.0),
                    Reveal::new(Vec2::ZERO, 2.0 * REVEAL_STAGGER, 1.0),
                ));
            });

        parent
            .spawn((
                Sprite {
                    color: palette.surface,
                    custom_size: Some(BUTTON_SIZE),
                    ..default()
                },
                ThemeRole::Surface,
                ColorAnchor::default(),
                Transform::from_xyz(120.0, -130.0, 1.0),
                Hoverable::new(BUTTON_SIZE),
                HoverScale::new(1.05),
                Clickable::new(NavAction::Jump(Section::Contact), BUTTON_SIZE),
                Reveal::new(REVEAL_RISE, 2.0 * REVEAL_STAGGER, 1.0),
            ))
            .with_children(|button| {
                button.spawn((
                    text::heading("CONTACT ME", 15.0, palette),
                    Transform::from_xyz(0.0, 0.0, 1.0),
                    Reveal::new(Vec2::ZERO, 2.0 * REVEAL_STAGGER, 1.0),
                ));
            });
    });
}
