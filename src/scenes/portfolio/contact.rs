//! Static contact form. Fields take focus, caret, and typed text locally;
//! nothing is submitted anywhere. Send has no handler.

use bevy::{color::Alpha, prelude::*, sprite::Anchor, text::TextBounds};
use enum_map::{Enum, EnumMap};

use crate::{
    data::states::Theme,
    entities::text,
    systems::{
        colors::{ColorAnchor, Palette, ThemePalette, ThemeRole, INDIGO_DEEP},
        interaction::{Clickable, HoverScale, Hoverable},
        motion::{Reveal, RevealOnApproach},
    },
};

use super::{content, Section};

const PANEL_SIZE: Vec2 = Vec2::new(640.0, 420.0);
const FIELD_SIZE: Vec2 = Vec2::new(280.0, 44.0);
const MESSAGE_SIZE: Vec2 = Vec2::new(600.0, 150.0);
const SEND_SIZE: Vec2 = Vec2::new(600.0, 54.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Enum)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    fn label(self) -> &'static str {
        match self {
            FormField::Name => "NAME",
            FormField::Email => "EMAIL",
            FormField::Message => "MESSAGE",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Rajesh Jha",
            FormField::Email => "rajesh@example.com",
            FormField::Message => "Tell me about your project...",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactAction {
    Focus(FormField),
    Send,
}

/// Locally-held draft of the form. Nothing ever consumes it.
#[derive(Resource, Default)]
pub struct ContactDraft {
    pub values: EnumMap<FormField, String>,
    pub focus: Option<FormField>,
}

#[derive(Resource)]
pub struct CaretBlink {
    pub timer: Timer,
    pub on: bool,
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
            on: true,
        }
    }
}

impl CaretBlink {
    pub fn tick(time: Res<Time>, mut blink: ResMut<CaretBlink>) {
        if blink.timer.tick(time.delta()).just_finished() {
            blink.on = !blink.on;
        }
    }
}

/// Marks the value text inside a field box.
#[derive(Component)]
pub struct FieldText {
    pub field: FormField,
}

pub fn spawn(commands: &mut Commands, scene: Entity, palette: &Palette) {
    let anchor = Section::Contact.anchor_y();

    commands.entity(scene).with_children(|parent| {
        parent.spawn((
            text::heading("LET'S WORK TOGETHER", 42.0, palette),
            Transform::from_xyz(0.0, anchor + 300.0, 1.0),
            RevealOnApproach::new(Reveal::new(Vec2::new(0.0, -30.0), 0.0, 0.8)),
        ));
        parent.spawn((
            text::body(
                "I'm currently available for freelance work and full-time roles.",
                17.0,
                palette,
            ),
            Transform::from_xyz(0.0, anchor + 240.0, 1.0),
        ));

        parent
            .spawn((
                Name::new("contact_panel"),
                Sprite {
                    color: palette.surface,
                    custom_size: Some(PANEL_SIZE),
                    ..default()
                },
                ThemeRole::Surface,
                ColorAnchor::default(),
                Transform::from_xyz(0.0, anchor - 40.0, 1.0),
            ))
            .with_children(|panel| {
                panel.spawn((
                    Sprite {
                        color: palette.outline,
                        custom_size: Some(PANEL_SIZE + Vec2::splat(4.0)),
                        ..default()
                    },
                    ThemeRole::Outline,
                    ColorAnchor::default(),
                    Transform::from_xyz(0.0, 0.0, -1.0),
                ));

                spawn_field(panel, FormField::Name, Vec2::new(-165.0, 130.0), FIELD_SIZE, palette);
                spawn_field(panel, FormField::Email, Vec2::new(165.0, 130.0), FIELD_SIZE, palette);
                spawn_field(panel, FormField::Message, Vec2::new(0.0, 0.0), MESSAGE_SIZE, palette);

                panel
                    .spawn((
                        Sprite {
                            color: INDIGO_DEEP,
                            custom_size: Some(SEND_SIZE),
                            ..default()
                        },
                        ColorAnchor::default(),
                        Transform::from_xyz(0.0, -150.0, 1.0),
                        Hoverable::new(SEND_SIZE),
                        HoverScale::new(1.02),
                        Clickable::new(ContactAction::Send, SEND_SIZE),
                    ))
                    .with_children(|button| {
                        button.spawn((
                            text::glyph(
                                &format!("SEND MESSAGE {}", content::icon_glyph("send")),
                                16.0,
                                Color::WHITE,
                            ),
                            Transform::from_xyz(0.0, 0.0, 1.0),
                        ));
                    });
            });
    });
}

fn spawn_field(
    panel: &mut ChildSpawnerCommands<'_>,
    field: FormField,
    position: Vec2,
    size: Vec2,
    palette: &Palette,
) {
    panel.spawn((
        text::body(field.label(), 11.0, palette),
        Transform::from_xyz(
            position.x - size.x / 2.0 + 36.0,
            position.y + size.y / 2.0 + 16.0,
            1.0,
        ),
    ));

    panel
        .spawn((
            Sprite {
                color: palette.outline,
                custom_size: Some(size),
                ..default()
            },
            ThemeRole::Outline,
            ColorAnchor::default(),
            Transform::from_translation(position.extend(1.0)),
            Hoverable::new(size),
            Clickable::new(ContactAction::Focus(field), size),
        ))
        .with_children(|field_box| {
            field_box.spawn((
                FieldText { field },
                text::body(field.placeholder(), 14.0, palette),
                Anchor::CENTER_LEFT,
                TextBounds {
                    width: Some(size.x - 24.0),
                    height: Some(size.y - 8.0),
                },
                Transform::from_xyz(-size.x / 2.0 + 12.0, 0.0, 1.0),
            ));
        });
}

/// Click-to-focus; clicking outside every form surface drops focus. Send is
/// deliberately a no-op beyond its press visuals.
pub fn apply_focus_clicks(
    query: Query<&Clickable<ContactAction>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut draft: ResMut<ContactDraft>,
) {
    if mouse.just_pressed(MouseButton::Left)
        && !query.iter().any(|clickable| clickable.just_clicked)
    {
        draft.focus = None;
    }

    for clickable in &query {
        if !clickable.just_clicked {
            continue;
        }
        match clickable.action {
            ContactAction::Focus(field) => draft.focus = Some(field),
            ContactAction::Send => {}
        }
    }
}

/// ASCII typing into the focused field; Enter breaks lines in the message
/// and commits the single-line fields, Escape drops focus.
pub fn type_into_focused(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut draft: ResMut<ContactDraft>,
) {
    let Some(field) = draft.focus else { return };

    let shift =
        keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    for keycode in keyboard.get_just_pressed() {
        match keycode {
            KeyCode::Backspace => {
                draft.values[field].pop();
            }
            KeyCode::Enter => {
                if field == FormField::Message {
                    draft.values[field].push('\n');
                } else {
                    draft.focus = None;
                }
            }
            KeyCode::Escape => draft.focus = None,
            _ => {
                if let Some(character) = keycode_to_ascii_char(*keycode, shift) {
                    draft.values[field].push(character);
                }
            }
        }
        if draft.focus.is_none() {
            break;
        }
    }
}

fn keycode_to_ascii_char(keycode: KeyCode, shift: bool) -> Option<char> {
    let letter = match keycode {
        KeyCode::KeyA => Some('a'),
        KeyCode::KeyB => Some('b'),
        KeyCode::KeyC => Some('c'),
        KeyCode::KeyD => Some('d'),
        KeyCode::KeyE => Some('e'),
        KeyCode::KeyF => Some('f'),
        KeyCode::KeyG => Some('g'),
        KeyCode::KeyH => Some('h'),
        KeyCode::KeyI => Some('i'),
        KeyCode::KeyJ => Some('j'),
        KeyCode::KeyK => Some('k'),
        KeyCode::KeyL => Some('l'),
        KeyCode::KeyM => Some('m'),
        KeyCode::KeyN => Some('n'),
        KeyCode::KeyO => Some('o'),
        KeyCode::KeyP => Some('p'),
        KeyCode::KeyQ => Some('q'),
        KeyCode::KeyR => Some('r'),
        KeyCode::KeyS => Some('s'),
        KeyCode::KeyT => Some('t'),
        KeyCode::KeyU => Some('u'),
        KeyCode::KeyV => Some('v'),
        KeyCode::KeyW => Some('w'),
        KeyCode::KeyX => Some('x'),
        KeyCode::KeyY => Some('y'),
        KeyCode::KeyZ => Some('z'),
        _ => None,
    };

    if let Some(letter) = letter {
        return Some(if shift {
            letter.to_ascii_uppercase()
        } else {
            letter
        });
    }

    match keycode {
        KeyCode::Digit0 => Some('0'),
        KeyCode::Digit1 => Some('1'),
        KeyCode::Digit2 => Some(if shift { '@' } else { '2' }),
        KeyCode::Digit3 => Some('3'),
        KeyCode::Digit4 => Some('4'),
        KeyCode::Digit5 => Some('5'),
        KeyCode::Digit6 => Some('6'),
        KeyCode::Digit7 => Some('7'),
        KeyCode::Digit8 => Some('8'),
        KeyCode::Digit9 => Some('9'),
        KeyCode::Space => Some(' '),
        KeyCode::Period => Some('.'),
        KeyCode::Comma => Some(','),
        KeyCode::Minus => Some(if shift { '_' } else { '-' }),
        KeyCode::Equal => Some(if shift { '+' } else { '=' }),
        _ => None,
    }
}

/// Mirrors the draft into the field texts: placeholder copy while empty and
/// unfocused, value plus blinking caret while focused.
pub fn sync_field_text(
    draft: Res<ContactDraft>,
    blink: Res<CaretBlink>,
    theme: Res<State<Theme>>,
    palettes: Res<ThemePalette>,
    mut query: Query<(&FieldText, &mut Text2d, &mut TextColor)>,
) {
    let palette = palettes.for_theme(*theme.get());
    for (field_text, mut value_text, mut color) in query.iter_mut() {
        let field = field_text.field;
        let value = &draft.values[field];
        let focused = draft.focus == Some(field);

        if value.is_empty() && !focused {
            value_text.0 = field.placeholder().to_string();
            color.0 = palette.muted.with_alpha(0.6);
        } else {
            let caret = if focused && blink.on { "_" } else { "" };
            value_text.0 = format!("{value}{caret}");
            color.0 = palette.ink;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_typing_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<ContactDraft>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_systems(Update, type_into_focused);
        app
    }

    fn tap(app: &mut App, keycode: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(keycode);
        app.update();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
        app.update();
    }

    #[test]
    fn typing_lands_in_the_focused_field_only() {
        let mut app = make_typing_app();
        app.world_mut().resource_mut::<ContactDraft>().focus = Some(FormField::Name);

        tap(&mut app, KeyCode::KeyH);
        tap(&mut app, KeyCode::KeyI);
        tap(&mut app, KeyCode::Space);
        tap(&mut app, KeyCode::Backspace);

        let draft = app.world().resource::<ContactDraft>();
        assert_eq!(draft.values[FormField::Name], "hi");
        assert_eq!(draft.values[FormField::Email], "");
    }

    #[test]
    fn enter_commits_single_line_fields_but_breaks_message_lines() {
        let mut app = make_typing_app();
        app.world_mut().resource_mut::<ContactDraft>().focus = Some(FormField::Email);
        tap(&mut app, KeyCode::KeyA);
        tap(&mut app, KeyCode::Enter);
        {
            let draft = app.world().resource::<ContactDraft>();
            assert_eq!(draft.values[FormField::Email], "a");
            assert_eq!(draft.focus, None);
        }

        app.world_mut().resource_mut::<ContactDraft>().focus = Some(FormField::Message);
        tap(&mut app, KeyCode::KeyA);
        tap(&mut app, KeyCode::Enter);
        tap(&mut app, KeyCode::KeyB);
        let draft = app.world().resource::<ContactDraft>();
        assert_eq!(draft.values[FormField::Message], "a\nb");
        assert_eq!(draft.focus, Some(FormField::Message));
    }

    #[test]
    fn shifted_digit_two_types_an_at_sign() {
        assert_eq!(keycode_to_ascii_char(KeyCode::Digit2, true), Some('@'));
        assert_eq!(keycode_to_ascii_char(KeyCode::Digit2, false), Some('2'));
        assert_eq!(keycode_to_ascii_char(KeyCode::KeyA, true), Some('A'));
        assert_eq!(keycode_to_ascii_char(KeyCode::F1, false), None);
    }
}
