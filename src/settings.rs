use egui::Vec2;

use crate::{
    hit_test::DEFAULT_TOLERANCE,
    style::MarkerStyle,
    viewport::{WHEEL_DAMPING, WHEEL_SENSITIVITY},
};

/// How a click on the map picks an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    /// The click position is converted to plane coordinates and matched against
    /// the filtered objects within [`SettingsNavigation::hit_tolerance`]. With
    /// panning enabled, a press that misses every object starts a pan.
    #[default]
    Tolerance,
    /// Every marker is its own target. Pressing a marker selects it and never
    /// starts a pan.
    Marker,
}

/// Represents map interaction settings.
#[derive(Debug, Clone)]
pub struct SettingsInteraction {
    /// Selecting objects by clicking on the map.
    pub selection_enabled: bool,

    /// Selection strategy, see [`SelectMode`].
    pub select_mode: SelectMode,

    /// Dragging the background pans the map in either [`SelectMode`]. The pan
    /// ends on release or when the pointer leaves the map.
    pub panning_enabled: bool,

    /// Mouse wheel nudges the pan offset. Requires `panning_enabled`.
    pub wheel_panning_enabled: bool,

    /// Hovered markers show their name.
    pub hover_enabled: bool,
}

impl Default for SettingsInteraction {
    fn default() -> Self {
        Self {
            selection_enabled: true,
            select_mode: SelectMode::Tolerance,
            panning_enabled: false,
            wheel_panning_enabled: false,
            hover_enabled: true,
        }
    }
}

impl SettingsInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection_enabled(mut self, enabled: bool) -> Self {
        self.selection_enabled = enabled;
        self
    }

    pub fn with_select_mode(mut self, mode: SelectMode) -> Self {
        self.select_mode = mode;
        self
    }

    /// Enables dragging and, if `wheel` is set, wheel panning too.
    pub fn with_panning_enabled(mut self, enabled: bool, wheel: bool) -> Self {
        self.panning_enabled = enabled;
        self.wheel_panning_enabled = enabled && wheel;
        self
    }

    pub fn with_hover_enabled(mut self, enabled: bool) -> Self {
        self.hover_enabled = enabled;
        self
    }
}

#[derive(Debug, Clone)]
pub struct SettingsNavigation {
    /// Tolerance of [`SelectMode::Tolerance`], in normalized plane units.
    pub hit_tolerance: Vec2,

    /// Extra pixels around a marker that still count as a hit in [`SelectMode::Marker`].
    pub marker_hit_slack: f32,

    /// Multiplier of the raw wheel delta.
    pub wheel_sensitivity: f32,

    /// Damping applied on top of the sensitivity.
    pub wheel_damping: f32,
}

impl Default for SettingsNavigation {
    fn default() -> Self {
        Self {
            hit_tolerance: DEFAULT_TOLERANCE,
            marker_hit_slack: 4.,
            wheel_sensitivity: WHEEL_SENSITIVITY,
            wheel_damping: WHEEL_DAMPING,
        }
    }
}

impl SettingsNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hit_tolerance(mut self, tolerance: Vec2) -> Self {
        self.hit_tolerance = tolerance;
        self
    }

    pub fn with_marker_hit_slack(mut self, slack: f32) -> Self {
        self.marker_hit_slack = slack;
        self
    }

    pub fn with_wheel(mut self, sensitivity: f32, damping: f32) -> Self {
        self.wheel_sensitivity = sensitivity;
        self.wheel_damping = damping;
        self
    }

    pub fn wheel_factor(&self) -> f32 {
        self.wheel_sensitivity * self.wheel_damping
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStyle {
    pub marker_style: MarkerStyle,

    /// Draw every marker's name, not only the hovered one.
    pub labels_always: bool,

    /// Number of decorative background stars. Zero disables the field.
    pub background_stars: usize,

    /// Seed of the background star field.
    pub background_seed: u64,

    /// Soft glow around markers.
    pub glow: bool,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            marker_style: MarkerStyle::Tiered,
            labels_always: false,
            background_stars: 0,
            background_seed: 0,
            glow: true,
        }
    }
}

impl SettingsStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marker_style(mut self, style: MarkerStyle) -> Self {
        self.marker_style = style;
        self
    }

    pub fn with_labels_always(mut self, always: bool) -> Self {
        self.labels_always = always;
        self
    }

    pub fn with_background(mut self, count: usize, seed: u64) -> Self {
        self.background_stars = count;
        self.background_seed = seed;
        self
    }

    pub fn with_glow(mut self, glow: bool) -> Self {
        self.glow = glow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_panning_requires_panning() {
        let s = SettingsInteraction::new().with_panning_enabled(false, true);
        assert!(!s.wheel_panning_enabled);

        let s = SettingsInteraction::new().with_panning_enabled(true, true);
        assert!(s.panning_enabled && s.wheel_panning_enabled);
    }

    #[test]
    fn default_wheel_factor() {
        assert!((SettingsNavigation::default().wheel_factor() - 0.15).abs() < 1e-6);
    }
}
