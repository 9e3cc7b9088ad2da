//! Headless flows for the two page state machines and nav-driven scrolling.

use bevy::{prelude::*, state::app::StatesPlugin};

use crate::{
    data::states::{MenuState, PageStatesPlugin, Theme},
    startup::render::PageCamera,
    systems::{interaction::Clickable, motion::Glide},
};

use super::{close_menu_on_escape, nav::NavAction, Section};

fn make_nav_app() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.add_plugins(PageStatesPlugin);
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_systems(Update, (NavAction::handle, close_menu_on_escape));
    let camera = app
        .world_mut()
        .spawn((PageCamera, Transform::default()))
        .id();
    (app, camera)
}

fn click(app: &mut App, button: Entity) {
    app.world_mut()
        .entity_mut(button)
        .get_mut::<Clickable<NavAction>>()
        .unwrap()
        .just_clicked = true;
    app.update();
    app.world_mut()
        .entity_mut(button)
        .get_mut::<Clickable<NavAction>>()
        .unwrap()
        .just_clicked = false;
    // second frame applies the queued state transition
    app.update();
}

fn current_theme(app: &App) -> Theme {
    *app.world().resource::<State<Theme>>().get()
}

fn current_menu(app: &App) -> MenuState {
    *app.world().resource::<State<MenuState>>().get()
}

#[test]
fn theme_toggle_twice_restores_the_original() {
    let (mut app, _camera) = make_nav_app();
    let button = app
        .world_mut()
        .spawn(Clickable::new(NavAction::ToggleTheme, Vec2::splat(40.0)))
        .id();

    assert_eq!(current_theme(&app), Theme::Dark);
    click(&mut app, button);
    assert_eq!(current_theme(&app), Theme::Light);
    click(&mut app, button);
    assert_eq!(current_theme(&app), Theme::Dark);
}

#[test]
fn menu_toggle_twice_restores_the_original() {
    let (mut app, _camera) = make_nav_app();
    let button = app
        .world_mut()
        .spawn(Clickable::new(NavAction::ToggleMenu, Vec2::splat(40.0)))
        .id();

    assert_eq!(current_menu(&app), MenuState::Closed);
    click(&mut app, button);
    assert_eq!(current_menu(&app), MenuState::Open);
    click(&mut app, button);
    assert_eq!(current_menu(&app), MenuState::Closed);
}

#[test]
fn picking_a_link_closes_the_menu_and_glides_the_camera() {
    let (mut app, camera) = make_nav_app();
    let link = app
        .world_mut()
        .spawn(Clickable::new(
            NavAction::Jump(Section::Contact),
            Vec2::new(92.0, 36.0),
        ))
        .id();

    app.world_mut()
        .resource_mut::<NextState<MenuState>>()
        .set(MenuState::Open);
    app.update();
    assert_eq!(current_menu(&app), MenuState::Open);

    click(&mut app, link);

    assert_eq!(current_menu(&app), MenuState::Closed);
    let glide = app
        .world()
        .entity(camera)
        .get::<Glide>()
        .expect("nav click should start a camera glide");
    assert_eq!(glide.to.y, Section::Contact.anchor_y());
}

#[test]
fn escape_closes_an_open_menu_and_is_idle_when_closed() {
    let (mut app, _camera) = make_nav_app();

    app.world_mut()
        .resource_mut::<NextState<MenuState>>()
        .set(MenuState::Open);
    app.update();
    assert_eq!(current_menu(&app), MenuState::Open);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Escape);
    app.update();
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();

    assert_eq!(current_menu(&app), MenuState::Closed);

    // pressing escape with the menu closed changes nothing
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Escape);
    app.update();
    app.update();
    assert_eq!(current_menu(&app), MenuState::Closed);
}
