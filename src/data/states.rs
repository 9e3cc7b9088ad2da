use bevy::prelude::*;
use enum_map::Enum;

pub struct PageStatesPlugin;
impl Plugin for PageStatesPlugin {
    fn build(&self, app: &mut App) {
        app
        .init_state::<Theme>()
        .init_state::<MenuState>();
    }
}

/// Page-wide color scheme. Every color-branching system reads the active
/// variant through the palette resource; only the theme toggle writes it.
#[derive(Default, States, Enum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Full-screen navigation overlay. Opened by the menu toggle, closed by the
/// toggle, by picking any link, or by Escape.
#[derive(Default, States, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}
