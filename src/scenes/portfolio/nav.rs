use std::time::Duration;

use bevy::{color::Alpha, prelude::*, window::PrimaryWindow};

use crate::{
    data::states::{MenuState, Theme},
    entities::text,
    startup::render::PageCamera,
    systems::{
        colors::{ColorAnchor, HoverAccent, ThemePalette, ThemeRole, Palette},
        interaction::{Clickable, Hoverable},
        motion::{Easing, Glide},
    },
};

use super::{content, Section};

const NAVBAR_Z: f32 = 50.0;
const OVERLAY_Z: f32 = 90.0;
const NAVBAR_HEIGHT: f32 = 64.0;
const LINK_REGION: Vec2 = Vec2::new(92.0, 36.0);
const GLYPH_REGION: Vec2 = Vec2::new(44.0, 36.0);
const OVERLAY_LINK_REGION: Vec2 = Vec2::new(420.0, 90.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Jump(Section),
    ToggleTheme,
    ToggleMenu,
    CloseMenu,
}

impl NavAction {
    pub fn handle(
        query: Query<&Clickable<NavAction>>,
        mut commands: Commands,
        camera: Single<Entity, With<PageCamera>>,
        theme: Res<State<Theme>>,
        mut next_theme: ResMut<NextState<Theme>>,
        menu: Res<State<MenuState>>,
        mut next_menu: ResMut<NextState<MenuState>>,
    ) {
        for clickable in &query {
            if !clickable.just_clicked {
                continue;
            }
            match clickable.action {
                NavAction::Jump(section) => {
                    if *menu.get() == MenuState::Open {
                        next_menu.set(MenuState::Closed);
                    }
                    commands.entity(*camera).insert(Glide::new(
                        Vec3::new(0.0, section.anchor_y(), 0.0),
                        Duration::from_secs_f32(super::GLIDE_SECONDS),
                        Easing::QuartOut,
                    ));
                }
                NavAction::ToggleTheme => next_theme.set(theme.get().toggled()),
                NavAction::ToggleMenu => next_menu.set(menu.get().toggled()),
                NavAction::CloseMenu => next_menu.set(MenuState::Closed),
            }
        }
    }
}

/// Bar fixed to the top of the window, parented to the page camera so it
/// ignores page scrolling.
#[derive(Component)]
#[require(Transform, Visibility)]
pub struct Navbar;

/// Window-relative placement: `align` picks an edge fraction per axis
/// (-1 left/bottom, 0 center, 1 right/top), `offset` is added in pixels.
#[derive(Component, Clone, Copy)]
pub struct NavAligned {
    pub align: Vec2,
    pub offset: Vec2,
}

#[derive(Component)]
pub struct NavbarFill;

#[derive(Component)]
pub struct OverlayFill;

#[derive(Component)]
pub struct ThemeToggleGlyph;

impl Navbar {
    /// Continuous window-driven layout; cheap enough to skip resize events.
    pub fn layout(
        window: Single<&Window, With<PrimaryWindow>>,
        mut roots: Query<&mut Transform, (With<Navbar>, Without<NavAligned>)>,
        mut items: Query<(&NavAligned, &mut Transform), Without<Navbar>>,
        mut bar_fills: Query<&mut Sprite, (With<NavbarFill>, Without<OverlayFill>)>,
        mut overlay_fills: Query<&mut Sprite, (With<OverlayFill>, Without<NavbarFill>)>,
    ) {
        let half_width = window.width() / 2.0;
        let half_height = window.height() / 2.0;

        for mut transform in roots.iter_mut() {
            transform.translation.x = 0.0;
            transform.translation.y = half_height - NAVBAR_HEIGHT / 2.0;
        }
        for (aligned, mut transform) in items.iter_mut() {
            transform.translation.x = aligned.align.x * half_width + aligned.offset.x;
            transform.translation.y = aligned.align.y * half_height + aligned.offset.y;
        }
        for mut sprite in bar_fills.iter_mut() {
            sprite.custom_size = Some(Vec2::new(window.width(), NAVBAR_HEIGHT));
        }
        for mut sprite in overlay_fills.iter_mut() {
            sprite.custom_size = Some(Vec2::new(window.width(), window.height()));
        }
    }
}

pub fn spawn_navbar(commands: &mut Commands, camera: Entity, palette: &Palette) {
    commands.entity(camera).with_children(|parent| {
        parent
            .spawn((
                Name::new("navbar"),
                Navbar,
                Transform::from_xyz(0.0, 0.0, NAVBAR_Z),
            ))
            .with_children(|bar| {
                bar.spawn((
                    NavbarFill,
                    Sprite {
                        color: palette.surface,
                        custom_size: Some(Vec2::new(1280.0, NAVBAR_HEIGHT)),
                        ..default()
                    },
                    ThemeRole::Surface,
                    ColorAnchor::default(),
                    Transform::from_xyz(0.0, 0.0, -1.0),
                ));

                bar.spawn((
                    text::glyph("RAJESH.JHA", 22.0, palette.accent),
                    ThemeRole::Accent,
                    NavAligned {
                        align: Vec2::new(-1.0, 0.0),
                        offset: Vec2::new(110.0, 0.0),
                    },
                ));

                for (index, entry) in content::NAV_LINKS.iter().enumerate() {
                    let section = resolve_target(entry);
                    bar.spawn((
                        text::body(&entry.label, 14.0, palette),
                        Hoverable::new(LINK_REGION),
                        HoverAccent,
                        Clickable::new(NavAction::Jump(section), LINK_REGION),
                        NavAligned {
                            align: Vec2::new(1.0, 0.0),
                            offset: Vec2::new(-430.0 + index as f32 * 110.0, 0.0),
                        },
                    ));
                }

                bar.spawn((
                    text::glyph(content::icon_glyph("sun"), 18.0, palette.ink),
                    ThemeToggleGlyph,
                    ThemeRole::Ink,
                    Hoverable::new(GLYPH_REGION),
                    HoverAccent,
                    Clickable::new(NavAction::ToggleTheme, GLYPH_REGION),
                    NavAligned {
                        align: Vec2::new(1.0, 0.0),
                        offset: Vec2::new(-116.0, 0.0),
                    },
                ));

                bar.spawn((
                    text::glyph(content::icon_glyph("menu"), 18.0, palette.ink),
                    ThemeRole::Ink,
                    Hoverable::new(GLYPH_REGION),
                    HoverAccent,
                    Clickable::new(NavAction::ToggleMenu, GLYPH_REGION),
                    NavAligned {
                        align: Vec2::new(1.0, 0.0),
                        offset: Vec2::new(-54.0, 0.0),
                    },
                ));
            });
    });
}

fn resolve_target(entry: &content::NavEntry) -> Section {
    Section::from_anchor(&entry.target)
        .unwrap_or_else(|| panic!("unknown nav target `{}`", entry.target))
}

/// Sun glyph in dark mode, moon in light.
pub fn swap_theme_glyph(
    theme: Res<State<Theme>>,
    mut query: Query<&mut Text2d, With<ThemeToggleGlyph>>,
) {
    let icon = match theme.get() {
        Theme::Dark => "sun",
        Theme::Light => "moon",
    };
    for mut label in query.iter_mut() {
        label.0 = content::icon_glyph(icon).to_string();
    }
}

/// Full-screen link overlay, alive only while the menu state is open.
pub fn spawn_overlay(
    mut commands: Commands,
    theme: Res<State<Theme>>,
    palettes: Res<ThemePalette>,
    window: Single<&Window, With<PrimaryWindow>>,
    camera: Single<Entity, With<PageCamera>>,
) {
    let palette = palettes.for_theme(*theme.get());
    let window_size = Vec2::new(window.width(), window.height());

    commands.entity(*camera).with_children(|parent| {
        parent
            .spawn((
                Name::new("menu_overlay"),
                DespawnOnExit(MenuState::Open),
                Transform::from_xyz(0.0, 0.0, OVERLAY_Z),
                Visibility::default(),
            ))
            .with_children(|overlay| {
                overlay.spawn((
                    OverlayFill,
                    Sprite {
                        color: palette.page.with_alpha(0.96),
                        custom_size: Some(window_size),
                        ..default()
                    },
                ));

                overlay.spawn((
                    text::glyph(content::icon_glyph("close"), 26.0, palette.ink),
                    ThemeRole::Ink,
                    Hoverable::overlay(GLYPH_REGION),
                    HoverAccent,
                    Clickable::overlay(NavAction::CloseMenu, GLYPH_REGION),
                    NavAligned {
                        align: Vec2::new(1.0, 1.0),
                        offset: Vec2::new(-54.0, -56.0),
                    },
                    Transform::from_xyz(0.0, 0.0, 1.0),
                ));

                for (index, entry) in content::NAV_LINKS.iter().enumerate() {
                    let section = resolve_target(entry);
                    overlay.spawn((
                        text::heading(&entry.label, 64.0, palette),
                        Hoverable::overlay(OVERLAY_LINK_REGION),
                        HoverAccent,
                        Clickable::overlay(NavAction::Jump(section), OVERLAY_LINK_REGION),
                        Transform::from_xyz(0.0, 140.0 - index as f32 * 140.0, 1.0),
                    ));
                }
            });
    });
}
