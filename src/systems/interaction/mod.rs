//! Cursor-driven interaction primitives.
//!
//! Hit testing happens in world space against a rectangular region in the
//! entity's local frame, so regions follow their entity through translation,
//! rotation, and scale (orbiting skill cards included). `Clickable` is
//! generic over a per-surface action enum; each scene registers
//! `Clickable::<A>::enact` for the action types it spawns.

use bevy::{prelude::*, window::PrimaryWindow};

use crate::{
    data::states::MenuState, startup::render::PageCamera, systems::motion::TransformAnchor,
};

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, Hoverable::enact)
            .add_systems(Update, HoverScale::enact.after(Hoverable::enact));
    }
}

/// Cursor position in page-camera world coordinates, if the cursor is inside
/// the window.
pub fn cursor_world_position(
    window: &Window,
    camera: &Camera,
    camera_transform: &GlobalTransform,
) -> Option<Vec2> {
    let cursor = window.cursor_position()?;
    camera.viewport_to_world_2d(camera_transform, cursor).ok()
}

/// Rectangle test in the entity's local frame.
pub fn point_in_region(point: Vec2, global: &GlobalTransform, region: Vec2) -> bool {
    let local = global.affine().inverse().transform_point3(point.extend(0.0));
    local.x.abs() <= region.x / 2.0 && local.y.abs() <= region.y / 2.0
}

/// Which input surface a region belongs to. While the overlay menu is open it
/// captures the cursor; page surfaces underneath it go quiet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputLayer {
    #[default]
    Page,
    Overlay,
}

impl InputLayer {
    pub fn active(menu: MenuState) -> Self {
        match menu {
            MenuState::Closed => InputLayer::Page,
            MenuState::Open => InputLayer::Overlay,
        }
    }
}

#[derive(Component, Clone)]
pub struct Hoverable {
    pub region: Vec2,
    pub layer: InputLayer,
    pub hovered: bool,
}

impl Hoverable {
    pub fn new(region: Vec2) -> Self {
        Self {
            region,
            layer: InputLayer::Page,
            hovered: false,
        }
    }

    pub fn overlay(region: Vec2) -> Self {
        Self {
            layer: InputLayer::Overlay,
            ..Self::new(region)
        }
    }

    pub fn enact(
        window: Single<&Window, With<PrimaryWindow>>,
        camera: Single<(&Camera, &GlobalTransform), With<PageCamera>>,
        menu: Res<State<MenuState>>,
        mut query: Query<(&mut Hoverable, &GlobalTransform)>,
    ) {
        let (camera, camera_transform) = *camera;
        let active = InputLayer::active(*menu.get());
        let cursor = cursor_world_position(&window, camera, camera_transform);
        for (mut hoverable, global) in query.iter_mut() {
            hoverable.hovered = hoverable.layer == active
                && cursor
                    .map_or(false, |point| point_in_region(point, global, hoverable.region));
        }
    }
}

/// Single-action click surface. `just_clicked` is recomputed every frame;
/// consumers read it the same frame via ordering after this system.
#[derive(Component, Clone)]
pub struct Clickable<A: Copy + Send + Sync + 'static> {
    pub action: A,
    pub region: Vec2,
    pub layer: InputLayer,
    pub just_clicked: bool,
}

impl<A: Copy + Send + Sync + 'static> Clickable<A> {
    pub fn new(action: A, region: Vec2) -> Self {
        Self {
            action,
            region,
            layer: InputLayer::Page,
            just_clicked: false,
        }
    }

    pub fn overlay(action: A, region: Vec2) -> Self {
        Self {
            layer: InputLayer::Overlay,
            ..Self::new(action, region)
        }
    }

    pub fn enact(
        window: Single<&Window, With<PrimaryWindow>>,
        camera: Single<(&Camera, &GlobalTransform), With<PageCamera>>,
        menu: Res<State<MenuState>>,
        mouse: Res<ButtonInput<MouseButton>>,
        mut query: Query<(&mut Clickable<A>, &GlobalTransform)>,
    ) {
        let (camera, camera_transform) = *camera;
        let active = InputLayer::active(*menu.get());
        let pressed = mouse.just_pressed(MouseButton::Left);
        let cursor = cursor_world_position(&window, camera, camera_transform);
        for (mut clickable, global) in query.iter_mut() {
            clickable.just_clicked = pressed
                && clickable.layer == active
                && cursor
                    .map_or(false, |point| point_in_region(point, global, clickable.region));
        }
    }
}

/// Scales an entity up from its anchored size while hovered.
#[derive(Component, Clone)]
#[require(TransformAnchor)]
pub struct HoverScale {
    pub factor: f32,
}

impl HoverScale {
    pub fn new(factor: f32) -> Self {
        Self { factor }
    }

    pub fn enact(
        mut query: Query<(&Hoverable, &HoverScale, &TransformAnchor, &mut Transform)>,
    ) {
        for (hoverable, hover_scale, anchor, mut transform) in query.iter_mut() {
            let factor = if hoverable.hovered {
                hover_scale.factor
            } else {
                1.0
            };
            transform.scale = anchor.0.scale * factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn overlay_layer_captures_input_while_the_menu_is_open() {
        assert_eq!(InputLayer::active(MenuState::Closed), InputLayer::Page);
        assert_eq!(InputLayer::active(MenuState::Open), InputLayer::Overlay);
        assert_eq!(Hoverable::new(Vec2::ONE).layer, InputLayer::Page);
        assert_eq!(Hoverable::overlay(Vec2::ONE).layer, InputLayer::Overlay);
        assert_eq!(
            Clickable::overlay((), Vec2::ONE).layer,
            InputLayer::Overlay
        );
    }

    #[test]
    fn region_test_at_identity() {
        let global = GlobalTransform::IDENTITY;
        let region = Vec2::new(100.0, 40.0);
        assert!(point_in_region(Vec2::new(49.0, 19.0), &global, region));
        assert!(!point_in_region(Vec2::new(51.0, 0.0), &global, region));
        assert!(!point_in_region(Vec2::new(0.0, 21.0), &global, region));
    }

    #[test]
    fn region_test_follows_translation() {
        let global = GlobalTransform::from(Transform::from_xyz(200.0, -50.0, 0.0));
        let region = Vec2::new(10.0, 10.0);
        assert!(point_in_region(Vec2::new(203.0, -48.0), &global, region));
        assert!(!point_in_region(Vec2::new(0.0, 0.0), &global, region));
    }

    #[test]
    fn region_test_follows_rotation_and_scale() {
        // a wide flat region rotated a quarter turn becomes tall and thin
        let global = GlobalTransform::from(
            Transform::from_rotation(Quat::from_rotation_z(FRAC_PI_2)),
        );
        let region = Vec2::new(100.0, 10.0);
        assert!(point_in_region(Vec2::new(0.0, 45.0), &global, region));
        assert!(!point_in_region(Vec2::new(45.0, 0.0), &global, region));

        let scaled = GlobalTransform::from(Transform::from_scale(Vec3::splat(2.0)));
        assert!(point_in_region(Vec2::new(90.0, 0.0), &scaled, region));
    }
}
