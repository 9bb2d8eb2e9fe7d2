use egui::Vec2;
use log::debug;

use crate::{
    catalog::{Catalog, CelestialObject, ObjectId},
    filter::{find_suggestions, GroupKey},
    filtered::FilteredCatalog,
    view_state::ViewState,
};

/// Catalog together with the current view state and its filtered projection.
///
/// This is what [`crate::StarMapView`] draws and mutates. All state changes go
/// through [`StarMap::apply`], which keeps the filtered projection in sync.
#[derive(Debug, Clone)]
pub struct StarMap<G> {
    catalog: Catalog,
    state: ViewState<G>,
    filtered: FilteredCatalog<G>,
    viewport: Vec2,
    pending_focus: Option<ObjectId>,
}

impl<G: GroupKey> StarMap<G> {
    pub fn new(catalog: Catalog) -> Self {
        let state = ViewState::default();
        let filtered = FilteredCatalog::new(&catalog, &state.criteria);

        Self {
            catalog,
            state,
            filtered,
            viewport: Vec2::ZERO,
            pending_focus: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replaces the catalog. The selection is dropped if it no longer exists.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        if let Some(id) = self.state.selected {
            if self.catalog.get(id).is_none() {
                self.state = self.state.clone().clear_selection();
            }
        }
        self.filtered.refresh(&self.catalog, &self.state.criteria);
    }

    pub fn state(&self) -> &ViewState<G> {
        &self.state
    }

    /// Replaces the view state with the result of `transition`.
    pub fn apply(&mut self, transition: impl FnOnce(ViewState<G>) -> ViewState<G>) {
        let prev_selected = self.state.selected;
        let next = transition(self.state.clone());
        if next.selected != prev_selected {
            debug!("selection changed: {prev_selected:?} -> {:?}", next.selected);
        }
        self.state = next;
        self.filtered.refresh(&self.catalog, &self.state.criteria);
    }

    /// Filtered objects in catalog order.
    pub fn filtered(&self) -> impl Iterator<Item = &CelestialObject> + '_ {
        self.filtered.objects(&self.catalog)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Changes whenever the filtered set was recomputed.
    pub fn filter_revision(&self) -> u64 {
        self.filtered.revision()
    }

    pub fn last_filter_ms(&self) -> f32 {
        self.filtered.last_compute_ms()
    }

    pub fn selected(&self) -> Option<&CelestialObject> {
        self.state.selected.and_then(|id| self.catalog.get(id))
    }

    pub fn object(&self, id: ObjectId) -> Option<&CelestialObject> {
        self.catalog.get(id)
    }

    pub fn suggestions(&self, limit: usize) -> Vec<&CelestialObject> {
        find_suggestions(&self.catalog, &self.state.criteria.search, limit)
    }

    /// Picks a suggestion by id. The object is centered in the last viewport
    /// right away and centered again in the viewport of the next draw, which
    /// may differ once a details panel opens. Unknown ids are ignored.
    pub fn pick_suggestion(&mut self, id: ObjectId) {
        let Some(o) = self.catalog.get(id).cloned() else {
            return;
        };
        let viewport = self.viewport;
        self.apply(|s| s.pick_suggestion(&o, viewport));
        self.pending_focus = Some(id);
    }

    /// Size of the widget the map was last drawn into.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Records the size of the widget and resolves a pending focus against it.
    pub(crate) fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;

        let Some(id) = self.pending_focus.take() else {
            return;
        };
        if self.state.pan.is_panning() {
            return;
        }
        if let Some(o) = self.catalog.get(id).cloned() {
            self.apply(|s| s.focus_on(&o, viewport));
        }
    }
}
