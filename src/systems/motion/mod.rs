use std::time::Duration;

use bevy::{
    color::Alpha,
    ecs::{lifecycle::HookContext, world::DeferredWorld},
    prelude::*,
    window::PrimaryWindow,
};

use crate::{startup::render::PageCamera, systems::colors::ColorAnchor};

#[derive(Default, States, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MotionSystemsActive {
    #[default]
    False,
    True,
}

pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<MotionSystemsActive>()
            .add_systems(Update, activate_systems)
            .add_systems(
                Update,
                (Glide::enact, RevealOnApproach::enact, Reveal::enact)
                    .run_if(in_state(MotionSystemsActive::True)),
            );
    }
}

fn activate_systems(
    mut state: ResMut<NextState<MotionSystemsActive>>,
    query: Query<(), Or<(With<Glide>, With<Reveal>, With<RevealOnApproach>)>>,
) {
    if !query.is_empty() {
        state.set(MotionSystemsActive::True)
    } else {
        state.set(MotionSystemsActive::False)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    QuartOut,
}

impl Easing {
    /// Maps timer progress in [0, 1] to eased progress in [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),
        }
    }
}

/// Remembers the transform an entity was spawned with, so motion systems can
/// displace and restore it without accumulating drift.
#[derive(Clone, Component, Default)]
#[component(on_insert = TransformAnchor::on_insert)]
pub struct TransformAnchor(pub Transform);

impl TransformAnchor {
    fn on_insert(mut world: DeferredWorld, HookContext { entity, .. }: HookContext) {
        let Some(transform) = world.entity(entity).get::<Transform>().cloned() else {
            warn!("TransformAnchor inserted without a Transform on {entity:?}");
            return;
        };
        if let Some(mut anchor) = world.get_mut::<TransformAnchor>(entity) {
            anchor.0 = transform;
        }
    }
}

/// One-shot eased translation toward a fixed point. The starting point is
/// captured when the component is inserted; the component removes itself on
/// arrival.
#[derive(Component, Clone)]
#[component(on_insert = Glide::on_insert)]
pub struct Glide {
    pub from: Vec3,
    pub to: Vec3,
    pub easing: Easing,
    pub timer: Timer,
}

impl Glide {
    pub fn new(to: Vec3, duration: Duration, easing: Easing) -> Self {
        Self {
            from: Vec3::ZERO,
            to,
            easing,
            timer: Timer::new(duration, TimerMode::Once),
        }
    }

    fn on_insert(mut world: DeferredWorld, HookContext { entity, .. }: HookContext) {
        let current = world
            .entity(entity)
            .get::<Transform>()
            .map(|transform| transform.translation);
        match current {
            Some(translation) => {
                if let Some(mut glide) = world.get_mut::<Glide>(entity) {
                    glide.from = translation;
                }
            }
            None => warn!("Glide inserted without a Transform on {entity:?}"),
        }
    }

    pub fn enact(
        mut commands: Commands,
        time: Res<Time>,
        mut query: Query<(Entity, &mut Glide, &mut Transform)>,
    ) {
        for (entity, mut glide, mut transform) in query.iter_mut() {
            glide.timer.tick(time.delta());

            if glide.timer.is_finished() {
                transform.translation = glide.to;
                commands.entity(entity).remove::<Glide>();
            } else {
                let fraction = glide.easing.apply(glide.timer.fraction());
                transform.translation = glide.from + (glide.to - glide.from) * fraction;
            }
        }
    }
}

/// Entrance animation: the entity starts displaced by `offset` and fully
/// transparent, then eases back to its anchored pose while fading in. Both
/// the displacement and the fade follow the same easing, mirroring a single
/// tween. Removes itself once settled.
#[derive(Component, Clone)]
#[require(TransformAnchor, ColorAnchor)]
pub struct Reveal {
    pub offset: Vec2,
    pub delay: Timer,
    pub motion: Timer,
    pub easing: Easing,
}

impl Reveal {
    pub fn new(offset: Vec2, delay: f32, duration: f32) -> Self {
        let mut delay_timer = Timer::from_seconds(delay, TimerMode::Once);
        if delay <= 0.0 {
            // zero-length timers report finished only after a tick
            delay_timer.tick(Duration::ZERO);
        }
        Self {
            offset,
            delay: delay_timer,
            motion: Timer::from_seconds(duration, TimerMode::Once),
            easing: Easing::QuartOut,
        }
    }

    pub fn enact(
        mut commands: Commands,
        time: Res<Time>,
        mut query: Query<(
            Entity,
            &mut Reveal,
            &TransformAnchor,
            &ColorAnchor,
            &mut Transform,
            Option<&mut TextColor>,
            Option<&mut Sprite>,
        )>,
    ) {
        for (entity, mut reveal, anchor, color_anchor, mut transform, text, sprite) in
            query.iter_mut()
        {
            reveal.delay.tick(time.delta());

            let fraction = if reveal.delay.is_finished() {
                reveal.motion.tick(time.delta());
                reveal.easing.apply(reveal.motion.fraction())
            } else {
                0.0
            };

            let rest = anchor.0.translation;
            transform.translation =
                rest + (reveal.offset * (1.0 - fraction)).extend(0.0);

            let faded = color_anchor
                .0
                .with_alpha(color_anchor.0.alpha() * fraction);
            if let Some(mut text_color) = text {
                text_color.0 = faded;
            }
            if let Some(mut sprite) = sprite {
                sprite.color = faded;
            }

            if reveal.motion.is_finished() {
                transform.translation = rest;
                commands.entity(entity).remove::<Reveal>();
            }
        }
    }
}

/// Whether a point at `element_y` has scrolled far enough into a viewport of
/// height `viewport_height` centered on `camera_y`. `fraction` is measured up
/// from the bottom edge.
pub fn approach_triggered(
    camera_y: f32,
    viewport_height: f32,
    fraction: f32,
    element_y: f32,
) -> bool {
    element_y >= camera_y - viewport_height / 2.0 + fraction * viewport_height
}

/// Holds an entity hidden at its reveal start pose until the scrolling page
/// camera brings it into view, then hands over to the carried [`Reveal`].
#[derive(Component, Clone)]
#[require(TransformAnchor, ColorAnchor)]
pub struct RevealOnApproach {
    pub fraction: f32,
    pub reveal: Reveal,
}

impl RevealOnApproach {
    pub fn new(reveal: Reveal) -> Self {
        Self {
            fraction: 0.15,
            reveal,
        }
    }

    pub fn enact(
        mut commands: Commands,
        window: Single<&Window, With<PrimaryWindow>>,
        camera: Query<&Transform, With<PageCamera>>,
        mut query: Query<
            (
                Entity,
                &RevealOnApproach,
                &TransformAnchor,
                &ColorAnchor,
                &mut Transform,
                Option<&mut TextColor>,
                Option<&mut Sprite>,
            ),
            Without<PageCamera>,
        >,
    ) {
        let Ok(camera_transform) = camera.single() else {
            return;
        };

        for (entity, approach, anchor, color_anchor, mut transform, text, sprite) in
            query.iter_mut()
        {
            if approach_triggered(
                camera_transform.translation.y,
                window.height(),
                approach.fraction,
                transform.translation.y,
            ) {
                commands
                    .entity(entity)
                    .insert(approach.reveal.clone())
                    .remove::<RevealOnApproach>();
                continue;
            }

            // hold the hidden start pose while waiting
            transform.translation =
                anchor.0.translation + approach.reveal.offset.extend(0.0);
            let hidden = color_anchor.0.with_alpha(0.0);
            if let Some(mut text_color) = text {
                text_color.0 = hidden;
            }
            if let Some(mut sprite) = sprite {
                sprite.color = hidden;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;
    use bevy::time::TimePlugin;

    #[test]
    fn easing_endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::QuartOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert_eq!(Easing::QuartOut.apply(0.5), 1.0 - 0.5_f32.powi(4));
    }

    #[test]
    fn quart_out_is_monotonic() {
        let samples: Vec<f32> = (0..=20)
            .map(|i| Easing::QuartOut.apply(i as f32 / 20.0))
            .collect();
        for pair in samples.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn approach_trigger_line_matches_viewport_fraction() {
        // camera at hero, target three sections down: not yet visible
        assert!(!approach_triggered(0.0, 720.0, 0.15, -600.0));
        // camera scrolled to the section: triggered
        assert!(approach_triggered(-900.0, 720.0, 0.15, -600.0));
        // exactly on the line counts
        assert!(approach_triggered(0.0, 720.0, 0.15, -360.0 + 108.0));
    }

    fn make_motion_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins.build().disable::<TimePlugin>());
        app.add_plugins(StatesPlugin);
        app.init_resource::<Time>();
        app.add_plugins(MotionPlugin);
        app
    }

    fn advance(app: &mut App, seconds: f32) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(seconds));
        app.update();
    }

    #[test]
    fn glide_interpolates_then_removes_itself() {
        let mut app = make_motion_app();
        let entity = app
            .world_mut()
            .spawn(Transform::from_xyz(0.0, 0.0, 0.0))
            .id();
        app.world_mut().entity_mut(entity).insert(Glide::new(
            Vec3::new(0.0, -900.0, 0.0),
            Duration::from_secs(1),
            Easing::Linear,
        ));

        // first update flips the activation state on
        app.update();
        advance(&mut app, 0.5);

        let y = app
            .world()
            .entity(entity)
            .get::<Transform>()
            .unwrap()
            .translation
            .y;
        assert!((y + 450.0).abs() < 1.0, "midpoint was {y}");

        advance(&mut app, 0.6);
        let entity_ref = app.world().entity(entity);
        assert_eq!(entity_ref.get::<Transform>().unwrap().translation.y, -900.0);
        assert!(entity_ref.get::<Glide>().is_none());
    }

    #[test]
    fn reveal_fades_in_from_offset_and_settles() {
        let mut app = make_motion_app();
        let entity = app
            .world_mut()
            .spawn((
                Transform::from_xyz(10.0, 100.0, 0.0),
                TextColor(Color::WHITE),
                Reveal::new(Vec2::new(0.0, -70.0), 0.2, 1.0),
            ))
            .id();

        app.update();
        advance(&mut app, 0.1);

        // still inside the delay: displaced and transparent
        let entity_ref = app.world().entity(entity);
        let transform = entity_ref.get::<Transform>().unwrap();
        assert!((transform.translation.y - 30.0).abs() < 1e-3);
        assert_eq!(entity_ref.get::<TextColor>().unwrap().0.alpha(), 0.0);

        advance(&mut app, 0.2);
        advance(&mut app, 2.0);

        let entity_ref = app.world().entity(entity);
        let transform = entity_ref.get::<Transform>().unwrap();
        assert_eq!(transform.translation.y, 100.0);
        assert_eq!(entity_ref.get::<TextColor>().unwrap().0.alpha(), 1.0);
        assert!(entity_ref.get::<Reveal>().is_none());
    }
}
