//! Realm-dependent colors.
//!
//! The site exposes a single boolean theme flag; everything visual the
//! engines need from it is a small fixed palette.

/// Visual realm chosen by the page's theme flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Realm {
    #[default]
    Light,
    Shadow,
}

impl Realm {
    pub fn from_flag(shadow: bool) -> Self {
        if shadow {
            Realm::Shadow
        } else {
            Realm::Light
        }
    }

    /// Burst particle colors, CSS syntax.
    pub fn burst_palette(self) -> &'static [&'static str] {
        match self {
            Realm::Light => LIGHT_BURST,
            Realm::Shadow => SHADOW_BURST,
        }
    }

    pub fn trail_color(self) -> &'static str {
        match self {
            Realm::Light => "#ffd27a",
            Realm::Shadow => "#b48cff",
        }
    }

    pub fn shockwave_color(self) -> &'static str {
        match self {
            Realm::Light => "255, 244, 214",
            Realm::Shadow => "196, 170, 255",
        }
    }
}

const LIGHT_BURST: &[&str] = &["#ffffff", "#ffe8a3", "#ffc94d", "#ff9b3d"];
const SHADOW_BURST: &[&str] = &["#e9dcff", "#b48cff", "#7a4dff", "#ff4d8d"];
