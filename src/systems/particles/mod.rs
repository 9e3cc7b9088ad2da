//! Decorative particle backdrop.
//!
//! A fixed set of points is sampled once, uniformly inside a sphere, when the
//! field is inserted. The set is immutable afterwards; every frame the whole
//! field receives a small additional rotation as one rigid body. Individual
//! points never move relative to each other.

use bevy::{
    camera::visibility::RenderLayers,
    color::Alpha,
    ecs::{lifecycle::HookContext, world::DeferredWorld},
    prelude::*,
};
use rand_distr::{Distribution, UnitBall};
use rand_pcg::Pcg64Mcg;
use std::f32::consts::FRAC_PI_4;

use crate::{
    data::{rng::GlobalRng, states::Theme},
    startup::render::BACKDROP_LAYER,
    systems::colors::ThemePalette,
};

pub const FIELD_POINT_COUNT: usize = 5000;
pub const FIELD_RADIUS: f32 = 1.5;
pub const FIELD_POINT_SIZE: f32 = 0.006;
pub const FIELD_OPACITY: f32 = 0.6;

/// Fixed tilt of the whole backdrop group.
const FIELD_TILT: f32 = FRAC_PI_4;

// rigid drift, radians per second
const DRIFT_X: f32 = 1.0 / 15.0;
const DRIFT_Y: f32 = 1.0 / 20.0;

pub struct ParticlePlugin;

impl Plugin for ParticlePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                ParticleField::drift,
                ParticleField::retint.run_if(state_changed::<Theme>),
            ),
        );
    }
}

/// What the field hands to the rendering backend, besides the points.
#[derive(Clone, Copy, Debug)]
pub struct PointCloudStyle {
    pub color: Color,
    pub point_size: f32,
    pub opacity: f32,
}

/// Handle to the one material shared by every point, kept for theme retints.
#[derive(Resource)]
pub struct FieldMaterial(pub Handle<StandardMaterial>);

/// Uniform draw inside a sphere of the given radius.
pub fn sample_in_sphere(rng: &mut Pcg64Mcg, count: usize, radius: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let point: [f32; 3] = UnitBall.sample(rng);
            Vec3::from_array(point) * radius
        })
        .collect()
}

#[derive(Component, Clone)]
#[require(Transform, Visibility)]
#[component(on_insert = ParticleField::on_insert)]
pub struct ParticleField {
    pub count: usize,
    pub radius: f32,
    pub style: PointCloudStyle,
}

impl ParticleField {
    pub fn new(color: Color) -> Self {
        Self {
            count: FIELD_POINT_COUNT,
            radius: FIELD_RADIUS,
            style: PointCloudStyle {
                color,
                point_size: FIELD_POINT_SIZE,
                opacity: FIELD_OPACITY,
            },
        }
    }

    fn on_insert(mut world: DeferredWorld, HookContext { entity, .. }: HookContext) {
        let Some(field) = world.entity(entity).get::<ParticleField>().cloned() else {
            return;
        };

        if world.get_resource::<GlobalRng>().is_none() {
            warn!("GlobalRng not found! Cannot spawn particle field.");
            return;
        }

        let points = {
            let mut rng = world.resource_mut::<GlobalRng>();
            sample_in_sphere(&mut rng.uniform, field.count, field.radius)
        };

        let mesh = {
            let mut meshes = world.resource_mut::<Assets<Mesh>>();
            meshes.add(Sphere::new(field.style.point_size * 0.5))
        };
        let material = {
            let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
            materials.add(StandardMaterial {
                base_color: field.style.color.with_alpha(field.style.opacity),
                unlit: true,
                alpha_mode: AlphaMode::Blend,
                ..Default::default()
            })
        };
        world.commands().insert_resource(FieldMaterial(material.clone()));

        let mut commands = world.commands();
        let mut parent_commands = commands.entity(entity);
        for point in points {
            parent_commands.with_children(|parent| {
                parent.spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(point),
                    RenderLayers::layer(BACKDROP_LAYER),
                ));
            });
        }
    }

    /// Rigid whole-field drift; the fixed tilt lives on the parent group.
    pub fn drift(time: Res<Time>, mut query: Query<&mut Transform, With<ParticleField>>) {
        let delta = time.delta_secs();
        for mut transform in query.iter_mut() {
            transform.rotate_x(-delta * DRIFT_X);
            transform.rotate_y(-delta * DRIFT_Y);
        }
    }

    pub fn retint(
        theme: Res<State<Theme>>,
        palette: Res<ThemePalette>,
        material: Option<Res<FieldMaterial>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
    ) {
        let Some(material) = material else { return };
        if let Some(standard) = materials.get_mut(&material.0) {
            standard.base_color = palette
                .for_theme(*theme.get())
                .particle
                .with_alpha(FIELD_OPACITY);
        }
    }
}

/// Tilted group carrying the field, drawn only by the backdrop camera.
pub fn spawn_backdrop(commands: &mut Commands, color: Color) {
    commands.spawn((
        Name::new("particle_backdrop"),
        Transform::from_rotation(Quat::from_rotation_z(FIELD_TILT)),
        Visibility::default(),
        RenderLayers::layer(BACKDROP_LAYER),
        children![ParticleField::new(color)],
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn sampling_yields_the_requested_count() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        assert_eq!(sample_in_sphere(&mut rng, 5000, 1.5).len(), 5000);
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        assert!(sample_in_sphere(&mut rng, 0, 1.5).is_empty());
    }

    #[test]
    fn samples_stay_inside_the_sphere() {
        let mut rng = Pcg64Mcg::seed_from_u64(11);
        let points = sample_in_sphere(&mut rng, 5000, 1.5);
        for point in &points {
            assert!(point.length() <= 1.5 + 1e-4);
        }
        // uniform in the volume, not on the shell
        assert!(points.iter().any(|point| point.length() < 0.75));
    }

    #[test]
    fn same_seed_reproduces_the_field() {
        let mut a = Pcg64Mcg::seed_from_u64(99);
        let mut b = Pcg64Mcg::seed_from_u64(99);
        assert_eq!(
            sample_in_sphere(&mut a, 256, 1.5),
            sample_in_sphere(&mut b, 256, 1.5)
        );
    }

    #[test]
    fn field_spawns_one_child_per_point() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(GlobalRng::default());
        app.init_resource::<Assets<Mesh>>();
        app.init_resource::<Assets<StandardMaterial>>();

        let field = app
            .world_mut()
            .spawn(ParticleField::new(Color::WHITE))
            .id();
        app.update();

        let children = app.world().entity(field).get::<Children>().unwrap();
        assert_eq!(children.len(), FIELD_POINT_COUNT);
        assert!(app.world().get_resource::<FieldMaterial>().is_some());
    }
}
