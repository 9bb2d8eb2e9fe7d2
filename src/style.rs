use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::catalog::{CelestialObject, ObjectType};

pub const COLOR_PLANET: Color32 = Color32::from_rgb(0xff, 0xd4, 0x3b);
pub const COLOR_NEBULA: Color32 = Color32::from_rgb(0xff, 0x6b, 0x9d);
pub const COLOR_GALAXY: Color32 = Color32::from_rgb(0xa5, 0xd8, 0xff);
pub const COLOR_CLUSTER: Color32 = Color32::from_rgb(0xb1, 0x97, 0xfc);
pub const COLOR_STAR_BRIGHT: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
pub const COLOR_STAR_MEDIUM: Color32 = Color32::from_rgb(0xe0, 0xe7, 0xff);
pub const COLOR_STAR_DIM: Color32 = Color32::from_rgb(0xcb, 0xd5, 0xe1);

const LINEAR_SCALE: f32 = 1.5;
const LINEAR_FLOOR: f32 = 2.;

/// How marker size grows with brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerStyle {
    /// Three fixed sizes split at brightness 3 and 4.
    #[default]
    Tiered,
    /// Proportional to brightness, never below a floor.
    Linear,
}

pub fn color_for(o: &CelestialObject) -> Color32 {
    match o.kind {
        ObjectType::Planet => COLOR_PLANET,
        ObjectType::Nebula => COLOR_NEBULA,
        ObjectType::Galaxy => COLOR_GALAXY,
        ObjectType::Cluster => COLOR_CLUSTER,
        ObjectType::Star if o.brightness > 4. => COLOR_STAR_BRIGHT,
        ObjectType::Star if o.brightness > 3. => COLOR_STAR_MEDIUM,
        ObjectType::Star => COLOR_STAR_DIM,
    }
}

/// Marker diameter in pixels.
pub fn size_for(brightness: f32, style: MarkerStyle) -> f32 {
    match style {
        MarkerStyle::Tiered => {
            if brightness > 4. {
                4.
            } else if brightness > 3. {
                3.
            } else {
                2.
            }
        }
        MarkerStyle::Linear => (brightness * LINEAR_SCALE).max(LINEAR_FLOOR),
    }
}

/// Radius of the soft glow around a marker, in pixels.
pub fn glow_for(brightness: f32) -> f32 {
    brightness * 2.
}
