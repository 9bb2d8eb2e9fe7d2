use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::catalog::CelestialObject;

/// Default multiplier applied to the wheel delta.
pub const WHEEL_SENSITIVITY: f32 = 0.5;
/// Default damping applied on top of [`WHEEL_SENSITIVITY`].
pub const WHEEL_DAMPING: f32 = 0.3;

/// Drag-to-pan state of the map, in pixels.
///
/// Every transition consumes the state and returns the next one. Moves are
/// absolute from the drag start, so the offset after a move does not depend on
/// how many intermediate moves happened. The offset is never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanState {
    pub offset: Vec2,
    pub is_panning: bool,
    pub pan_start: Vec2,
}

impl PanState {
    pub fn with_offset(offset: Vec2) -> Self {
        Self {
            offset,
            ..Default::default()
        }
    }

    /// Pointer pressed on the background.
    pub fn begin(self, pointer: Pos2) -> Self {
        Self {
            is_panning: true,
            pan_start: pointer.to_vec2() - self.offset,
            ..self
        }
    }

    /// Pointer moved. Ignored unless a pan is in progress.
    pub fn drag_to(self, pointer: Pos2) -> Self {
        if !self.is_panning {
            return self;
        }

        Self {
            offset: pointer.to_vec2() - self.pan_start,
            ..self
        }
    }

    /// Pointer released or left the widget.
    pub fn end(self) -> Self {
        Self {
            is_panning: false,
            ..self
        }
    }

    /// Wheel nudge using the default sensitivity and damping.
    pub fn wheel(self, delta_y: f32) -> Self {
        self.wheel_scaled(delta_y, WHEEL_SENSITIVITY * WHEEL_DAMPING)
    }

    /// Wheel nudge: both axes move by `delta_y * factor` at once. This never
    /// changes the scale of the map.
    pub fn wheel_scaled(self, delta_y: f32, factor: f32) -> Self {
        let step = delta_y * factor;
        Self {
            offset: self.offset - Vec2::splat(step),
            ..self
        }
    }

    /// Resets the offset to the origin.
    pub fn centered(self) -> Self {
        Self {
            offset: Vec2::ZERO,
            ..self
        }
    }

    /// Offset that puts `o` at the center of a viewport of the given size.
    pub fn focused_on(self, o: &CelestialObject, viewport: Vec2) -> Self {
        Self {
            offset: Vec2::new(
                (50. - o.x) / 100. * viewport.x,
                (50. - o.y) / 100. * viewport.y,
            ),
            ..self
        }
    }

    pub fn is_panning(&self) -> bool {
        self.is_panning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_moves_are_absolute_from_start() {
        let s = PanState::with_offset(Vec2::new(10., 20.)).begin(Pos2::new(100., 100.));
        assert!(s.is_panning());
        assert_eq!(s.pan_start, Vec2::new(90., 80.));

        let s = s.drag_to(Pos2::new(105., 95.)).drag_to(Pos2::new(130., 140.));
        assert_eq!(s.offset, Vec2::new(40., 60.));

        let s = s.end();
        assert!(!s.is_panning());
        assert_eq!(s.drag_to(Pos2::new(0., 0.)).offset, Vec2::new(40., 60.));
    }

    #[test]
    fn offset_is_unclamped() {
        let s = PanState::default()
            .begin(Pos2::ZERO)
            .drag_to(Pos2::new(-100_000., 250_000.));
        assert_eq!(s.offset, Vec2::new(-100_000., 250_000.));
    }

    #[test]
    fn wheel_nudges_both_axes() {
        let s = PanState::default().wheel(100.);
        assert!((s.offset.x + 15.).abs() < 1e-4);
        assert!((s.offset.y + 15.).abs() < 1e-4);

        let s = s.wheel(-100.);
        assert!(s.offset.length() < 1e-4);
    }

    #[test]
    fn centered_always_resets() {
        let s = PanState::with_offset(Vec2::new(-321., 77.)).centered();
        assert_eq!(s.offset, Vec2::ZERO);
        assert_eq!(PanState::default().centered().offset, Vec2::ZERO);
    }

    #[test]
    fn focus_moves_object_to_center() {
        let o = CelestialObject::new(0, "Вега", 75., 25., 5.1);
        let viewport = Vec2::new(800., 400.);
        let s = PanState::default().focused_on(&o, viewport);
        assert_eq!(s.offset, Vec2::new(-200., 100.));

        let screen_x = o.x / 100. * viewport.x + s.offset.x;
        let screen_y = o.y / 100. * viewport.y + s.offset.y;
        assert_eq!((screen_x, screen_y), (400., 200.));
    }
}
