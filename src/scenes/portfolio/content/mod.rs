//! Embedded page content.
//!
//! All copy on the page is authored here as JSON and parsed once. Insertion
//! order of the skill list is meaningful: it fixes each skill's angular slot
//! on the orbit.

use bevy::prelude::*;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::systems::colors::{
    ACCENT_BLUE, ACCENT_GREEN, ACCENT_ORANGE, ACCENT_PINK, ACCENT_PURPLE, ACCENT_YELLOW,
};

pub const SKILLS_JSON: &str = include_str!("skills.json");
pub const PROJECTS_JSON: &str = include_str!("projects.json");
pub const NAV_JSON: &str = include_str!("nav.json");

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccentTag {
    Blue,
    Green,
    Pink,
    Yellow,
    Purple,
    Orange,
}

impl AccentTag {
    pub fn color(self) -> Color {
        match self {
            AccentTag::Blue => ACCENT_BLUE,
            AccentTag::Green => ACCENT_GREEN,
            AccentTag::Pink => ACCENT_PINK,
            AccentTag::Yellow => ACCENT_YELLOW,
            AccentTag::Purple => ACCENT_PURPLE,
            AccentTag::Orange => ACCENT_ORANGE,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct SkillItem {
    pub label: String,
    pub color_tag: AccentTag,
    pub icon_ref: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ProjectItem {
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NavEntry {
    pub label: String,
    pub target: String,
}

pub static SKILLS: Lazy<Vec<SkillItem>> = Lazy::new(|| {
    serde_json::from_str(SKILLS_JSON)
        .unwrap_or_else(|err| panic!("invalid skills content: {err}"))
});

pub static PROJECTS: Lazy<Vec<ProjectItem>> = Lazy::new(|| {
    serde_json::from_str(PROJECTS_JSON)
        .unwrap_or_else(|err| panic!("invalid projects content: {err}"))
});

pub static NAV_LINKS: Lazy<Vec<NavEntry>> = Lazy::new(|| {
    serde_json::from_str(NAV_JSON)
        .unwrap_or_else(|err| panic!("invalid nav content: {err}"))
});

/// The default font ships a narrow glyph set, so icons are drawn as short
/// ASCII marks.
static GLYPHS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "code"       => "</>",
    "cpu"        => "[::]",
    "palette"    => "(~)",
    "globe"      => "(@)",
    "smartphone" => "[|]",
    "database"   => "(=)",
    "sun"        => "(*)",
    "moon"       => "(c)",
    "menu"       => "[=]",
    "close"      => "[x]",
    "github"     => "[git]",
    "external"   => "[->]",
    "send"       => "->",
};

const FALLBACK_GLYPH: &str = "[?]";

pub fn icon_glyph(icon_ref: &str) -> &'static str {
    GLYPHS.get(icon_ref).copied().unwrap_or_else(|| {
        log::warn!("unknown icon ref `{icon_ref}`, using fallback glyph");
        FALLBACK_GLYPH
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        assert_eq!(SKILLS.len(), 6);
        assert_eq!(PROJECTS.len(), 2);
        assert_eq!(NAV_LINKS.len(), 3);
        assert_eq!(SKILLS[0].label, "React");
        assert_eq!(SKILLS[0].color_tag, AccentTag::Blue);
    }

    #[test]
    fn every_skill_icon_resolves_without_fallback() {
        for skill in SKILLS.iter() {
            assert_ne!(icon_glyph(&skill.icon_ref), FALLBACK_GLYPH);
        }
    }

    #[test]
    fn unknown_icon_falls_back() {
        assert_eq!(icon_glyph("does-not-exist"), FALLBACK_GLYPH);
    }
}
