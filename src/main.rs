use bevy::prelude::*;

mod data;
mod entities;
mod scenes;
mod startup;
mod systems;

use data::{rng::RngPlugin, states::PageStatesPlugin};
use scenes::portfolio::PortfolioScenePlugin;
use startup::render::RenderPlugin;
use systems::{
    colors::ColorsPlugin, interaction::InteractionPlugin, motion::MotionPlugin,
    orbit::OrbitPlugin, particles::ParticlePlugin, viewport::ViewportPlugin,
};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Rajesh Kumar Jha - Portfolio".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PagePlugin)
        .run();
}

struct PagePlugin;

impl Plugin for PagePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            PageStatesPlugin,
            RngPlugin,
            RenderPlugin,
            ViewportPlugin,
            ColorsPlugin,
            MotionPlugin,
            OrbitPlugin,
            InteractionPlugin,
            ParticlePlugin,
            PortfolioScenePlugin,
        ));
    }
}
