use bevy::{camera::visibility::RenderLayers, prelude::*};

/// 2-D page content.
pub const PAGE_LAYER: usize = 0;
/// 3-D particle backdrop, composited beneath the page.
pub const BACKDROP_LAYER: usize = 1;

#[derive(Component)]
pub struct PageCamera;

#[derive(Component)]
pub struct BackdropCamera;

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_cameras);
    }
}

pub fn setup_cameras(mut commands: Commands) {
    // Backdrop camera draws first and clears to the page color; it only sees
    // the particle layer.
    commands.spawn((
        Camera3d::default(),
        BackdropCamera,
        RenderLayers::layer(BACKDROP_LAYER),
        Camera {
            order: 0,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Page camera composites the scrolling 2-D content on top.
    commands.spawn((
        Camera2d,
        PageCamera,
        RenderLayers::layer(PAGE_LAYER),
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
    ));
}
