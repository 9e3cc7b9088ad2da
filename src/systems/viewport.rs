use bevy::{
    prelude::*,
    window::{PrimaryWindow, WindowResized},
};

/// Below this logical width the skills orbit collapses into the compact grid.
pub const COMPACT_BREAKPOINT: f32 = 900.0;

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ResizeDebounce::default())
            .insert_resource(ViewportClass::Wide)
            .add_systems(Update, (handle_resize, classify_viewport));
    }
}

/// Collapses bursts of resize events into one settled tick.
#[derive(Resource)]
pub struct ResizeDebounce {
    pub timer: Timer,
}

impl Default for ResizeDebounce {
    fn default() -> Self {
        let mut timer = Timer::from_seconds(0.1, TimerMode::Once);
        timer.pause();
        Self { timer }
    }
}

fn handle_resize(
    mut resize_events: MessageReader<WindowResized>,
    time: Res<Time>,
    mut debounce: ResMut<ResizeDebounce>,
) {
    if !resize_events.is_empty() {
        resize_events.clear();
        debounce.timer.reset();
        debounce.timer.unpause();
    }

    debounce.timer.tick(time.delta());
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Wide,
    Compact,
}

impl ViewportClass {
    pub fn from_width(width: f32) -> Self {
        if width < COMPACT_BREAKPOINT {
            ViewportClass::Compact
        } else {
            ViewportClass::Wide
        }
    }
}

fn classify_viewport(
    window: Single<&Window, With<PrimaryWindow>>,
    mut class: ResMut<ViewportClass>,
) {
    let next = ViewportClass::from_width(window.width());
    // guarded write keeps change detection meaningful for rebuild systems
    if *class != next {
        *class = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_splits_wide_and_compact() {
        assert_eq!(ViewportClass::from_width(1280.0), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_width(900.0), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_width(899.0), ViewportClass::Compact);
        assert_eq!(ViewportClass::from_width(420.0), ViewportClass::Compact);
    }
}
