//! The single page: hero, skills orbit, projects, contact, footer, laid out
//! vertically in world space and viewed by the scrolling page camera.

pub mod contact;
pub mod content;
pub mod hero;
pub mod nav;
pub mod projects;
pub mod skills;

#[cfg(test)]
mod flow_tests;

use bevy::{
    input::mouse::{MouseScrollUnit, MouseWheel},
    prelude::*,
};

use crate::{
    data::states::{MenuState, Theme},
    startup::render::{setup_cameras, PageCamera},
    systems::{
        colors::{Palette, ThemePalette},
        interaction::{Clickable, Hoverable},
        motion::Glide,
        particles,
    },
};

use contact::ContactAction;
use nav::NavAction;

/// Vertical section anchors the camera glides between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub fn anchor_y(self) -> f32 {
        match self {
            Section::Hero => 0.0,
            Section::Skills => -900.0,
            Section::Projects => -1800.0,
            Section::Contact => -2700.0,
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        match anchor {
            "hero" => Some(Section::Hero),
            "skills" => Some(Section::Skills),
            "projects" => Some(Section::Projects),
            "contact" => Some(Section::Contact),
            _ => None,
        }
    }
}

const FOOTER_Y: f32 = -3150.0;
/// Lowest the camera may scroll; keeps the footer on screen without
/// overshooting into empty space.
const PAGE_BOTTOM: f32 = -3000.0;
const LINE_SCROLL: f32 = 56.0;
pub(crate) const GLIDE_SECONDS: f32 = 0.9;

pub struct PortfolioScenePlugin;

impl Plugin for PortfolioScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<contact::ContactDraft>()
            .init_resource::<contact::CaretBlink>()
            .add_systems(Startup, PortfolioScene::setup.after(setup_cameras))
            .add_systems(
                Update,
                (
                    Clickable::<NavAction>::enact,
                    NavAction::handle.after(Clickable::<NavAction>::enact),
                    Clickable::<ContactAction>::enact,
                    contact::apply_focus_clicks.after(Clickable::<ContactAction>::enact),
                    scroll_page,
                    close_menu_on_escape,
                ),
            )
            .add_systems(
                Update,
                (
                    nav::Navbar::layout,
                    nav::swap_theme_glyph.run_if(state_changed::<Theme>),
                    skills::SkillsDisplay::rebuild,
                    skills::show_tooltips.after(Hoverable::enact),
                    contact::type_into_focused,
                    contact::CaretBlink::tick,
                    contact::sync_field_text,
                ),
            )
            .add_systems(OnEnter(MenuState::Open), nav::spawn_overlay);
    }
}

#[derive(Component)]
#[require(Transform, Visibility)]
pub struct PortfolioScene;

impl PortfolioScene {
    fn setup(
        mut commands: Commands,
        theme: Res<State<Theme>>,
        palettes: Res<ThemePalette>,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<ColorMaterial>>,
        camera: Single<Entity, With<PageCamera>>,
    ) {
        let palette = palettes.for_theme(*theme.get());

        particles::spawn_backdrop(&mut commands, palette.particle);

        let scene = commands
            .spawn((Name::new("portfolio_page"), PortfolioScene))
            .id();
        hero::spawn(&mut commands, scene, palette);
        skills::spawn_section(&mut commands, scene, palette, &mut meshes, &mut materials);
        projects::spawn(&mut commands, scene, palette);
        contact::spawn(&mut commands, scene, palette);
        spawn_footer(&mut commands, scene, palette);

        nav::spawn_navbar(&mut commands, *camera, palette);
    }
}

fn spawn_footer(commands: &mut Commands, scene: Entity, palette: &Palette) {
    commands.entity(scene).with_children(|parent| {
        parent.spawn((
            crate::entities::text::body("(c) 2026 RAJESH.JHA - CRAFTED WITH RUST & BEVY", 13.0, palette),
            Transform::from_xyz(0.0, FOOTER_Y, 1.0),
        ));
    });
}

/// Mouse-wheel scrolling of the page camera, clamped to the page extent.
/// Manual scrolling interrupts an in-flight nav glide.
fn scroll_page(
    mut wheel: MessageReader<MouseWheel>,
    menu: Res<State<MenuState>>,
    mut commands: Commands,
    camera: Single<(Entity, &mut Transform), With<PageCamera>>,
) {
    let mut delta = 0.0;
    for event in wheel.read() {
        delta += match event.unit {
            MouseScrollUnit::Line => event.y * LINE_SCROLL,
            MouseScrollUnit::Pixel => event.y,
        };
    }
    if delta == 0.0 || *menu.get() == MenuState::Open {
        return;
    }

    let (entity, mut transform) = camera.into_inner();
    commands.entity(entity).remove::<Glide>();
    transform.translation.y = (transform.translation.y + delta).clamp(PAGE_BOTTOM, 0.0);
}

pub(crate) fn close_menu_on_escape(
    keys: Res<ButtonInput<KeyCode>>,
    menu: Res<State<MenuState>>,
    mut next_menu: ResMut<NextState<MenuState>>,
) {
    if keys.just_pressed(KeyCode::Escape) && *menu.get() == MenuState::Open {
        next_menu.set(MenuState::Closed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_anchors_resolve_and_descend() {
        assert_eq!(Section::from_anchor("skills"), Some(Section::Skills));
        assert_eq!(Section::from_anchor("projects"), Some(Section::Projects));
        assert_eq!(Section::from_anchor("contact"), Some(Section::Contact));
        assert_eq!(Section::from_anchor("blog"), None);

        let sections = [
            Section::Hero,
            Section::Skills,
            Section::Projects,
            Section::Contact,
        ];
        for pair in sections.windows(2) {
            assert!(pair[1].anchor_y() < pair[0].anchor_y());
        }
        assert!(PAGE_BOTTOM <= Section::Contact.anchor_y());
    }
}
