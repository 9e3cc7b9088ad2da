//! Radial orbit layout.
//!
//! Places N items evenly around a circle by handing every item the same
//! repeating rotation and a per-item phase delay of `-(i * period / n)`
//! seconds. Item content receives the mirrored spin in the opposite
//! direction, so its orientation stays fixed while its position orbits.
//! The schedule is computed once at spawn; [`Spin::enact`] only maps the
//! engine clock through it.

use bevy::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[derive(Default, States, Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrbitSystemsActive {
    #[default]
    False,
    True,
}

pub struct OrbitPlugin;

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<OrbitSystemsActive>()
            .add_systems(Update, activate_systems)
            .add_systems(
                Update,
                Spin::enact.run_if(in_state(OrbitSystemsActive::True)),
            );
    }
}

fn activate_systems(
    mut state: ResMut<NextState<OrbitSystemsActive>>,
    query: Query<(), With<Spin>>,
) {
    if !query.is_empty() {
        state.set(OrbitSystemsActive::True)
    } else {
        state.set(OrbitSystemsActive::False)
    }
}

/// Phase delay in seconds for the item at `index` among `count` items
/// sharing one rotation `period`. Item 0 is always at delay 0; magnitudes
/// grow strictly with the index.
pub fn phase_delay(index: usize, count: usize, period: f32) -> f32 {
    debug_assert!(index < count);
    -(index as f32 * period / count as f32)
}

/// Delays for a full ring. `count == 0` yields an empty schedule; the
/// division in [`phase_delay`] is never reached.
pub fn phase_schedule(count: usize, period: f32) -> SmallVec<[f32; 8]> {
    (0..count).map(|i| phase_delay(i, count, period)).collect()
}

/// Rotation angle (radians) at `elapsed` seconds for a repeating spin that
/// started at `delay` and completes a turn every `period` seconds.
pub fn angle_at(elapsed: f32, delay: f32, period: f32, direction: SpinDirection) -> f32 {
    direction.sign() * TAU * ((elapsed - delay) / period)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinDirection {
    Forward,
    Reverse,
}

impl SpinDirection {
    pub fn sign(self) -> f32 {
        match self {
            SpinDirection::Forward => 1.0,
            SpinDirection::Reverse => -1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SpinDirection::Forward => SpinDirection::Reverse,
            SpinDirection::Reverse => SpinDirection::Forward,
        }
    }
}

/// One ring's worth of layout, fixed at assembly time.
#[derive(Debug, Clone)]
pub struct OrbitSchedule {
    pub period: f32,
    pub radius: f32,
    pub delays: SmallVec<[f32; 8]>,
}

impl OrbitSchedule {
    pub fn evenly_spaced(count: usize, period: f32, radius: f32) -> Self {
        Self {
            period,
            radius,
            delays: phase_schedule(count, period),
        }
    }

    pub fn len(&self) -> usize {
        self.delays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }

    /// Spin for the rotating arm carrying item `index`.
    pub fn arm(&self, index: usize) -> Spin {
        Spin {
            period: self.period,
            delay: self.delays[index],
            direction: SpinDirection::Forward,
        }
    }

    /// Spin for item `index`'s own content: same period and delay, opposite
    /// direction, cancelling the arm's rotation at every instant.
    pub fn counter(&self, index: usize) -> Spin {
        Spin {
            period: self.period,
            delay: self.delays[index],
            direction: SpinDirection::Reverse,
        }
    }

    /// Outward displacement of a carried item from the ring center.
    pub fn offset(&self) -> Vec3 {
        Vec3::new(0.0, self.radius, 0.0)
    }
}

/// Continuous repeating rotation about z. The rotation is written as an
/// absolute function of the engine clock, so restarting the app restarts
/// every phase together.
#[derive(Component, Clone, Debug, PartialEq)]
#[require(Transform)]
pub struct Spin {
    pub period: f32,
    pub delay: f32,
    pub direction: SpinDirection,
}

impl Spin {
    pub fn new(period: f32, delay: f32, direction: SpinDirection) -> Self {
        Self {
            period,
            delay,
            direction,
        }
    }

    pub fn enact(time: Res<Time>, mut query: Query<(&Spin, &mut Transform)>) {
        let elapsed = time.elapsed_secs();
        for (spin, mut transform) in query.iter_mut() {
            transform.rotation = Quat::from_rotation_z(angle_at(
                elapsed,
                spin.delay,
                spin.period,
                spin.direction,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;
    use bevy::time::TimePlugin;
    use bevy::transform::TransformPlugin;
    use std::time::Duration;

    #[test]
    fn delay_matches_even_spacing_formula() {
        let schedule = phase_schedule(6, 25.0);
        assert_eq!(schedule.len(), 6);
        for (i, delay) in schedule.iter().enumerate() {
            assert_eq!(*delay, -(i as f32 * 25.0 / 6.0));
        }
        assert_eq!(schedule[3], -12.5);
    }

    #[test]
    fn item_zero_leads_and_magnitudes_grow() {
        let schedule = phase_schedule(9, 25.0);
        assert_eq!(schedule[0], 0.0);
        for pair in schedule.windows(2) {
            assert!(pair[1].abs() > pair[0].abs());
        }
    }

    #[test]
    fn delays_are_congruent_to_zero_mod_period() {
        let period = 25.0;
        for (i, delay) in phase_schedule(6, period).iter().enumerate() {
            // delay + i * T / N cancels exactly, no rounding slack needed
            assert_eq!(delay + i as f32 * period / 6.0, 0.0);
        }
    }

    #[test]
    fn empty_ring_yields_empty_schedule() {
        let schedule = OrbitSchedule::evenly_spaced(0, 25.0, 230.0);
        assert!(schedule.is_empty());
        assert_eq!(schedule.len(), 0);
    }

    #[test]
    fn single_item_sits_at_phase_zero() {
        let schedule = OrbitSchedule::evenly_spaced(1, 25.0, 230.0);
        assert_eq!(schedule.delays.as_slice(), &[0.0]);
        // full turn over one period
        let quarter = angle_at(25.0 / 4.0, 0.0, 25.0, SpinDirection::Forward);
        assert!((quarter - TAU / 4.0).abs() < 1e-6);
    }

    #[test]
    fn schedule_is_deterministic() {
        let a = phase_schedule(7, 25.0);
        let b = phase_schedule(7, 25.0);
        assert_eq!(a, b);
    }

    #[test]
    fn counter_rotation_cancels_orbit_at_any_instant() {
        let schedule = OrbitSchedule::evenly_spaced(6, 25.0, 230.0);
        for index in 0..schedule.len() {
            let arm = schedule.arm(index);
            let counter = schedule.counter(index);
            assert_eq!(arm.delay, counter.delay);
            assert_eq!(arm.direction, counter.direction.reversed());
            for elapsed in [0.0_f32, 0.3, 4.4, 12.5, 25.0, 26.1, 400.0] {
                let sum = angle_at(elapsed, arm.delay, arm.period, arm.direction)
                    + angle_at(elapsed, counter.delay, counter.period, counter.direction);
                assert!(sum.abs() < 1e-4, "angular sum {sum} at t={elapsed}");
            }
        }
    }

    fn make_orbit_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins.build().disable::<TimePlugin>());
        app.add_plugins((TransformPlugin, StatesPlugin));
        app.init_resource::<Time>();
        app.add_plugins(OrbitPlugin);
        app
    }

    #[test]
    fn carried_content_stays_upright_while_orbiting() {
        let mut app = make_orbit_app();
        let schedule = OrbitSchedule::evenly_spaced(6, 25.0, 230.0);

        let hub = app
            .world_mut()
            .spawn((Transform::default(), Visibility::default()))
            .id();
        let arm = app
            .world_mut()
            .spawn((schedule.arm(3), ChildOf(hub)))
            .id();
        let carrier = app
            .world_mut()
            .spawn((Transform::from_translation(schedule.offset()), ChildOf(arm)))
            .id();
        let content = app
            .world_mut()
            .spawn((schedule.counter(3), ChildOf(carrier)))
            .id();

        // state transition for OrbitSystemsActive, then the spin itself
        app.update();
        app.update();

        // index 3 of 6 starts half a turn ahead: carried item lands at -radius
        let global = *app.world().entity(content).get::<GlobalTransform>().unwrap();
        let translation = global.translation();
        assert!((translation.x - 0.0).abs() < 1e-2);
        assert!((translation.y + 230.0).abs() < 1e-2);
        assert!(global.rotation().angle_between(Quat::IDENTITY) < 1e-4);

        // arbitrary later instant: still on the circle, still upright
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(3.7));
        app.update();

        let global = *app.world().entity(content).get::<GlobalTransform>().unwrap();
        let radius = global.translation().truncate().length();
        assert!((radius - 230.0).abs() < 1e-2);
        assert!(global.rotation().angle_between(Quat::IDENTITY) < 1e-4);
    }

    #[test]
    fn spin_writes_clock_derived_rotation() {
        let mut app = make_orbit_app();
        let ring = app
            .world_mut()
            .spawn(Spin::new(60.0, 0.0, SpinDirection::Forward))
            .id();

        app.update();
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(15.0));
        app.update();

        let rotation = app.world().entity(ring).get::<Transform>().unwrap().rotation;
        let expected = Quat::from_rotation_z(TAU / 4.0);
        assert!(rotation.angle_between(expected) < 1e-4);
    }
}
