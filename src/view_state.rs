use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{CelestialObject, ObjectId, Season},
    filter::{BrightnessRange, FilterCriteria, Selector},
    viewport::PanState,
};

/// Everything the user can change during a session: filters, selection and pan.
///
/// The state is a plain value. Transitions take `self` and return the next
/// state, so a previous state can be kept around and compared against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState<G> {
    pub criteria: FilterCriteria<G>,
    pub selected: Option<ObjectId>,
    pub pan: PanState,
}

impl<G> Default for ViewState<G> {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            selected: None,
            pan: PanState::default(),
        }
    }
}

impl<G> ViewState<G> {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.criteria.search = search.into();
        self
    }

    pub fn with_brightness(mut self, brightness: BrightnessRange) -> Self {
        self.criteria.brightness = brightness;
        self
    }

    pub fn with_group(mut self, group: Selector<G>) -> Self {
        self.criteria.group = group;
        self
    }

    pub fn with_season(mut self, season: Selector<Season>) -> Self {
        self.criteria.season = season;
        self
    }

    /// Restores the default filters and clears the search text. Selection and
    /// pan are kept.
    pub fn reset_filters(mut self) -> Self {
        self.criteria = FilterCriteria::default();
        self
    }

    pub fn select(mut self, id: ObjectId) -> Self {
        self.selected = Some(id);
        self
    }

    pub fn clear_selection(mut self) -> Self {
        self.selected = None;
        self
    }

    /// Picks a search suggestion: clears the search text, selects the object and
    /// pans so that it lands in the middle of the viewport.
    pub fn pick_suggestion(mut self, o: &CelestialObject, viewport: Vec2) -> Self {
        self.criteria.search.clear();
        self.selected = Some(o.id);
        self.pan = self.pan.focused_on(o, viewport);
        self
    }

    /// Pans so that `o` lands in the middle of the viewport.
    pub fn focus_on(mut self, o: &CelestialObject, viewport: Vec2) -> Self {
        self.pan = self.pan.focused_on(o, viewport);
        self
    }

    pub fn pan_begin(mut self, pointer: Pos2) -> Self {
        self.pan = self.pan.begin(pointer);
        self
    }

    pub fn pan_drag_to(mut self, pointer: Pos2) -> Self {
        self.pan = self.pan.drag_to(pointer);
        self
    }

    pub fn pan_end(mut self) -> Self {
        self.pan = self.pan.end();
        self
    }

    pub fn wheel(mut self, delta_y: f32, factor: f32) -> Self {
        self.pan = self.pan.wheel_scaled(delta_y, factor);
        self
    }

    pub fn center(mut self) -> Self {
        self.pan = self.pan.centered();
        self
    }
}
