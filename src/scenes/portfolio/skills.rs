use std::f32::consts::TAU;

use bevy::{color::Alpha, ecs::system::EntityCommands, prelude::*, window::PrimaryWindow};

use crate::{
    data::states::Theme,
    entities::text,
    systems::{
        colors::{ColorAnchor, Palette, ThemePalette, ThemeRole, INDIGO_DEEP},
        interaction::{HoverScale, Hoverable},
        motion::{Reveal, RevealOnApproach},
        orbit::{OrbitSchedule, Spin, SpinDirection},
        viewport::{ResizeDebounce, ViewportClass},
    },
};

use super::{content, Section};

const TITLE_OFFSET: f32 = 280.0;
const HUB_OFFSET: f32 = -80.0;
pub const ORBIT_PERIOD: f32 = 25.0;
pub const RING_PERIOD: f32 = 60.0;
const RING_RADIUS: f32 = 160.0;
const RING_DASHES: usize = 48;
const BADGE_RADIUS: f32 = 72.0;
const CARD_SIZE: Vec2 = Vec2::new(64.0, 64.0);
const GRID_CELL: Vec2 = Vec2::new(104.0, 96.0);

/// Orbit radius for the current window width; narrower pages pull the ring in
/// before the compact-grid breakpoint removes it entirely.
pub fn orbit_radius(width: f32) -> f32 {
    (width * 0.18).clamp(150.0, 230.0)
}

/// Root of the part of the section that depends on the viewport class; its
/// children are torn down and respawned on reclassification or resize.
#[derive(Component)]
#[require(Transform, Visibility)]
pub struct SkillsDisplay;

#[derive(Component)]
pub struct SkillCard;

#[derive(Component)]
pub struct Tooltip;

pub fn spawn_section(
    commands: &mut Commands,
    scene: Entity,
    palette: &Palette,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
) {
    let anchor = Section::Skills.anchor_y();

    commands.entity(scene).with_children(|parent| {
        parent.spawn((
            text::heading("TECHNICAL STACK", 42.0, palette),
            Transform::from_xyz(0.0, anchor + TITLE_OFFSET, 1.0),
            RevealOnApproach::new(Reveal::new(Vec2::new(0.0, -30.0), 0.0, 0.8)),
        ));

        parent
            .spawn((
                Name::new("skills_hub"),
                Transform::from_xyz(0.0, anchor + HUB_OFFSET, 2.0),
                Visibility::default(),
            ))
            .with_children(|hub| {
                // slowly revolving dashed ring
                hub.spawn((
                    Spin::new(RING_PERIOD, 0.0, SpinDirection::Forward),
                    Visibility::default(),
                ))
                .with_children(|ring| {
                    for index in 0..RING_DASHES {
                        let angle = TAU * index as f32 / RING_DASHES as f32;
                        ring.spawn((
                            Sprite {
                                color: INDIGO_DEEP.with_alpha(0.3),
                                custom_size: Some(Vec2::new(2.5, 9.0)),
                                ..default()
                            },
                            Transform {
                                translation: Vec3::new(
                                    RING_RADIUS * angle.cos(),
                                    RING_RADIUS * angle.sin(),
                                    0.0,
                                ),
                                rotation: Quat::from_rotation_z(angle),
                                ..default()
                            },
                        ));
                    }
                });

                // center badge
                hub.spawn((
                    Mesh2d(meshes.add(Circle::new(BADGE_RADIUS))),
                    MeshMaterial2d(materials.add(ColorMaterial::from_color(INDIGO_DEEP))),
                    Transform::from_xyz(0.0, 0.0, 3.0),
                ))
                .with_children(|badge| {
                    badge.spawn((
                        text::glyph("MY\nSTACK", 20.0, Color::WHITE),
                        Transform::from_xyz(0.0, 0.0, 1.0),
                    ));
                });

                hub.spawn((SkillsDisplay, Transform::from_xyz(0.0, 0.0, 4.0)));
            });
    });
}

impl SkillsDisplay {
    /// Rebuilds the orbit (or the compact grid) when the viewport class flips
    /// or a resize settles.
    pub fn rebuild(
        mut commands: Commands,
        class: Res<ViewportClass>,
        debounce: Res<ResizeDebounce>,
        window: Single<&Window, With<PrimaryWindow>>,
        display: Single<Entity, With<SkillsDisplay>>,
        theme: Res<State<Theme>>,
        palettes: Res<ThemePalette>,
    ) {
        if !class.is_changed() && !debounce.timer.just_finished() {
            return;
        }

        let palette = palettes.for_theme(*theme.get());
        let mut root = commands.entity(*display);
        root.despawn_related::<Children>();

        let skills = content::SKILLS.as_slice();
        match *class {
            ViewportClass::Wide => {
                spawn_orbit(&mut root, skills, orbit_radius(window.width()), palette)
            }
            ViewportClass::Compact => spawn_grid(&mut root, skills, palette),
        }
    }
}

fn spawn_orbit(
    root: &mut EntityCommands,
    skills: &[content::SkillItem],
    radius: f32,
    palette: &Palette,
) {
    let schedule = OrbitSchedule::evenly_spaced(skills.len(), ORBIT_PERIOD, radius);
    if schedule.is_empty() {
        return;
    }

    root.with_children(|display| {
        for (index, skill) in skills.iter().enumerate() {
            display
                .spawn((schedule.arm(index), Visibility::default()))
                .with_children(|arm| {
                    arm.spawn((
                        Transform::from_translation(schedule.offset()),
                        Visibility::default(),
                    ))
                    .with_children(|carrier| {
                        spawn_card(carrier, skill, schedule.counter(index), palette);
                    });
                });
        }
    });
}

fn spawn_card(
    carrier: &mut ChildSpawnerCommands<'_>,
    skill: &content::SkillItem,
    counter: Spin,
    palette: &Palette,
) {
    carrier
        .spawn((
            counter,
            SkillCard,
            Sprite {
                color: palette.surface,
                custom_size: Some(CARD_SIZE),
                ..default()
            },
            ThemeRole::Surface,
            ColorAnchor::default(),
            Hoverable::new(CARD_SIZE),
            HoverScale::new(1.25),
            Visibility::default(),
        ))
        .with_children(|card| {
            card.spawn((
                text::glyph(content::icon_glyph(&skill.icon_ref), 22.0, skill.color_tag.color()),
                Transform::from_xyz(0.0, 0.0, 1.0),
            ));

            card.spawn((
                Tooltip,
                Sprite {
                    color: INDIGO_DEEP,
                    custom_size: Some(Vec2::new(86.0, 24.0)),
                    ..default()
                },
                Visibility::Hidden,
                Transform::from_xyz(0.0, 52.0, 1.0),
            ))
            .with_children(|tooltip| {
                tooltip.spawn((
                    text::glyph(&skill.label, 12.0, Color::WHITE),
                    Transform::from_xyz(0.0, 0.0, 1.0),
                ));
            });
        });
}

fn spawn_grid(root: &mut EntityCommands, skills: &[content::SkillItem], palette: &Palette) {
    root.with_children(|display| {
        for (index, skill) in skills.iter().enumerate() {
            let column = (index % 3) as f32;
            let row = (index / 3) as f32;
            display
                .spawn((
                    Sprite {
                        color: palette.surface,
                        custom_size: Some(GRID_CELL),
                        ..default()
                    },
                    ThemeRole::Surface,
                    ColorAnchor::default(),
                    Transform::from_xyz((column - 1.0) * 120.0, 60.0 - row * 120.0, 0.0),
                ))
                .with_children(|cell| {
                    cell.spawn((
                        text::glyph(
                            content::icon_glyph(&skill.icon_ref),
                            20.0,
                            skill.color_tag.color(),
                        ),
                        Transform::from_xyz(0.0, 16.0, 1.0),
                    ));
                    cell.spawn((
                        text::body(&skill.label, 11.0, palette),
                        Transform::from_xyz(0.0, -26.0, 1.0),
                    ));
                });
        }
    });
}

/// Shows a hovered card's label tooltip; the card itself scales via
/// `HoverScale`.
pub fn show_tooltips(
    cards: Query<(&Hoverable, &Children), With<SkillCard>>,
    mut tooltips: Query<&mut Visibility, With<Tooltip>>,
) {
    for (hoverable, children) in &cards {
        for child in children.iter() {
            if let Ok(mut visibility) = tooltips.get_mut(child) {
                *visibility = if hoverable.hovered {
                    Visibility::Inherited
                } else {
                    Visibility::Hidden
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_radius_shrinks_with_the_window_but_stays_bounded() {
        assert_eq!(orbit_radius(1920.0), 230.0);
        assert_eq!(orbit_radius(1000.0), 180.0);
        assert_eq!(orbit_radius(640.0), 150.0);
        assert!(orbit_radius(1100.0) < orbit_radius(1300.0));
    }
}
