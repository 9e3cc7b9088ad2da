use bevy::{
    color::Alpha,
    ecs::{lifecycle::HookContext, world::DeferredWorld},
    prelude::*,
};
use enum_map::{enum_map, EnumMap};

use crate::{data::states::Theme, systems::interaction::Hoverable};

// page backgrounds
pub const DARK_PAGE: Color = Color::srgb(0.039, 0.039, 0.039);
pub const LIGHT_PAGE: Color = Color::srgb(0.973, 0.980, 0.988);

// foreground ink
pub const DARK_INK: Color = Color::WHITE;
pub const LIGHT_INK: Color = Color::srgb(0.059, 0.090, 0.165);
pub const DARK_MUTED: Color = Color::srgb(0.580, 0.639, 0.722);
pub const LIGHT_MUTED: Color = Color::srgb(0.392, 0.455, 0.545);

// indigo accents; the lighter shade doubles as the dark-mode particle tint
pub const INDIGO_SOFT: Color = Color::srgb(0.506, 0.549, 0.973);
pub const INDIGO_DEEP: Color = Color::srgb(0.310, 0.275, 0.898);

// translucent card surfaces and hairline borders
pub const DARK_SURFACE: Color = Color::srgba(1.0, 1.0, 1.0, 0.08);
pub const LIGHT_SURFACE: Color = Color::srgba(1.0, 1.0, 1.0, 0.85);
pub const DARK_OUTLINE: Color = Color::srgba(1.0, 1.0, 1.0, 0.12);
pub const LIGHT_OUTLINE: Color = Color::srgb(0.886, 0.910, 0.941);

// per-skill accent tags, identical in both themes
pub const ACCENT_BLUE: Color = Color::srgb(0.376, 0.647, 0.980);
pub const ACCENT_GREEN: Color = Color::srgb(0.290, 0.871, 0.502);
pub const ACCENT_PINK: Color = Color::srgb(0.957, 0.447, 0.714);
pub const ACCENT_YELLOW: Color = Color::srgb(0.980, 0.800, 0.082);
pub const ACCENT_PURPLE: Color = Color::srgb(0.753, 0.518, 0.988);
pub const ACCENT_ORANGE: Color = Color::srgb(0.984, 0.573, 0.235);

pub struct ColorsPlugin;

impl Plugin for ColorsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ThemePalette>()
            .add_systems(Startup, apply_page_color)
            .add_systems(
                Update,
                (apply_page_color, recolor_text, recolor_sprites)
                    .run_if(state_changed::<Theme>),
            )
            .add_systems(Update, apply_hover_accent.after(Hoverable::enact));
    }
}

/// One theme's worth of page colors.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub page: Color,
    pub ink: Color,
    pub muted: Color,
    pub accent: Color,
    pub surface: Color,
    pub outline: Color,
    pub particle: Color,
}

impl Palette {
    pub fn color(&self, role: ThemeRole) -> Color {
        match role {
            ThemeRole::Ink => self.ink,
            ThemeRole::Muted => self.muted,
            ThemeRole::Accent => self.accent,
            ThemeRole::Surface => self.surface,
            ThemeRole::Outline => self.outline,
        }
    }
}

#[derive(Resource)]
pub struct ThemePalette(pub EnumMap<Theme, Palette>);

impl Default for ThemePalette {
    fn default() -> Self {
        Self(enum_map! {
            Theme::Dark => Palette {
                page: DARK_PAGE,
                ink: DARK_INK,
                muted: DARK_MUTED,
                accent: INDIGO_SOFT,
                surface: DARK_SURFACE,
                outline: DARK_OUTLINE,
                particle: INDIGO_SOFT,
            },
            Theme::Light => Palette {
                page: LIGHT_PAGE,
                ink: LIGHT_INK,
                muted: LIGHT_MUTED,
                accent: INDIGO_DEEP,
                surface: LIGHT_SURFACE,
                outline: LIGHT_OUTLINE,
                particle: INDIGO_DEEP,
            },
        })
    }
}

impl ThemePalette {
    pub fn for_theme(&self, theme: Theme) -> &Palette {
        &self.0[theme]
    }
}

/// Which palette slot an entity's color follows across theme changes.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeRole {
    Ink,
    Muted,
    Accent,
    Surface,
    Outline,
}

/// Base color captured at spawn; hover and reveal effects restore to it.
#[derive(Clone, Component)]
#[component(on_insert = ColorAnchor::on_insert)]
pub struct ColorAnchor(pub Color);

impl Default for ColorAnchor {
    fn default() -> Self {
        ColorAnchor(Color::WHITE)
    }
}

impl ColorAnchor {
    fn on_insert(mut world: DeferredWorld, HookContext { entity, .. }: HookContext) {
        let entity_ref = world.entity(entity);
        let color = entity_ref
            .get::<TextColor>()
            .map(|text_color| text_color.0)
            .or_else(|| entity_ref.get::<Sprite>().map(|sprite| sprite.color));

        match color {
            Some(color) => {
                if let Some(mut anchor) = world.get_mut::<ColorAnchor>(entity) {
                    anchor.0 = color;
                }
            }
            None => {
                warn!("ColorAnchor inserted without TextColor or Sprite on {entity:?}");
            }
        }
    }
}

fn apply_page_color(
    theme: Res<State<Theme>>,
    palette: Res<ThemePalette>,
    mut clear_color: ResMut<ClearColor>,
) {
    clear_color.0 = palette.for_theme(*theme.get()).page;
}

/// Re-inks every role-tagged text. The current alpha is preserved so a theme
/// flip mid-reveal does not pop the fade.
fn recolor_text(
    theme: Res<State<Theme>>,
    palette: Res<ThemePalette>,
    mut query: Query<(&ThemeRole, &mut TextColor, Option<&mut ColorAnchor>)>,
) {
    let palette = palette.for_theme(*theme.get());
    for (role, mut text_color, anchor) in query.iter_mut() {
        let target = palette.color(*role);
        text_color.0 = target.with_alpha(text_color.0.alpha());
        if let Some(mut anchor) = anchor {
            let rest_alpha = anchor.0.alpha();
            anchor.0 = target.with_alpha(rest_alpha);
        }
    }
}

fn recolor_sprites(
    theme: Res<State<Theme>>,
    palette: Res<ThemePalette>,
    mut query: Query<(&ThemeRole, &mut Sprite, Option<&mut ColorAnchor>)>,
) {
    let palette = palette.for_theme(*theme.get());
    for (role, mut sprite, anchor) in query.iter_mut() {
        let target = palette.color(*role);
        sprite.color = target.with_alpha(sprite.color.alpha());
        if let Some(mut anchor) = anchor {
            let rest_alpha = anchor.0.alpha();
            anchor.0 = target.with_alpha(rest_alpha);
        }
    }
}

/// Text that flips to the accent color while hovered.
#[derive(Component, Default)]
pub struct HoverAccent;

fn apply_hover_accent(
    theme: Res<State<Theme>>,
    palette: Res<ThemePalette>,
    mut query: Query<(&Hoverable, &ColorAnchor, &mut TextColor), With<HoverAccent>>,
) {
    let accent = palette.for_theme(*theme.get()).accent;
    for (hoverable, anchor, mut text_color) in query.iter_mut() {
        text_color.0 = if hoverable.hovered { accent } else { anchor.0 };
    }
}
