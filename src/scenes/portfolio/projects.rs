use bevy::prelude::*;

use crate::{
    entities::text,
    systems::{
        colors::{ColorAnchor, Palette, ThemeRole},
        interaction::{HoverScale, Hoverable},
        motion::{Reveal, RevealOnApproach},
    },
};

use super::{content, Section};

const CARD_SIZE: Vec2 = Vec2::new(420.0, 300.0);
const CARD_GAP: f32 = 480.0;
const TAG_SPACING: f32 = 90.0;

pub fn spawn(commands: &mut Commands, scene: Entity, palette: &Palette) {
    let anchor = Section::Projects.anchor_y();

    commands.entity(scene).with_children(|parent| {
        parent.spawn((
            text::heading("FEATURED WORK", 42.0, palette),
            Transform::from_xyz(0.0, anchor + 280.0, 1.0),
            RevealOnApproach::new(Reveal::new(Vec2::new(0.0, -30.0), 0.0, 0.8)),
        ));

        for (index, project) in content::PROJECTS.iter().enumerate() {
            let offset = content::PROJECTS.len() as f32 / 2.0 - 0.5;
            let x = (index as f32 - offset) * CARD_GAP;

            parent
                .spawn((
                    Name::new("project_card"),
                    Sprite {
                        color: palette.surface,
                        custom_size: Some(CARD_SIZE),
                        ..default()
                    },
                    ThemeRole::Surface,
                    ColorAnchor::default(),
                    Transform::from_xyz(x, anchor - 60.0, 1.0),
                    Hoverable::new(CARD_SIZE),
                    HoverScale::new(1.03),
                ))
                .with_children(|card| {
                    card.spawn((
                        Sprite {
                            color: palette.outline,
                            custom_size: Some(CARD_SIZE + Vec2::splat(4.0)),
                            ..default()
                        },
                        ThemeRole::Outline,
                        ColorAnchor::default(),
                        Transform::from_xyz(0.0, 0.0, -1.0),
                    ));

                    card.spawn((
                        text::heading(&project.title, 24.0, palette),
                        Transform::from_xyz(0.0, 104.0, 1.0),
                    ));
                    card.spawn((
                        text::paragraph(&project.summary, 15.0, 360.0, palette),
                        Transform::from_xyz(0.0, 30.0, 1.0),
                    ));

                    for (tag_index, tag) in project.tags.iter().enumerate() {
                        let tag_offset = project.tags.len() as f32 / 2.0 - 0.5;
                        card.spawn((
                            text::glyph(tag, 11.0, palette.accent),
                            ThemeRole::Accent,
                            Transform::from_xyz(
                                (tag_index as f32 - tag_offset) * TAG_SPACING,
                                -70.0,
                                1.0,
                            ),
                        ));
                    }

                    card.spawn((
                        text::body(
                            &format!(
                                "{}  {}",
                                content::icon_glyph("github"),
                                content::icon_glyph("external")
                            ),
                            14.0,
                            palette,
                        ),
                        Transform::from_xyz(140.0, -120.0, 1.0),
                    ));
                });
        }
    });
}
