use egui::{Id, Vec2};

use crate::catalog::ObjectId;

const KEY_PREFIX: &str = "egui_starmap_metadata";

/// Per-widget scratch state carried between frames.
///
/// Lives in egui temp memory, so it is dropped with the context and never
/// written to disk.
#[derive(Clone, Debug)]
pub struct Metadata {
    /// Whether the frame is the first one
    pub first_frame: bool,
    /// Object under the pointer during the last frame
    pub hovered: Option<ObjectId>,
    /// Selection seen at the end of the last frame
    pub selected: Option<ObjectId>,
    /// Pan offset seen at the end of the last frame
    pub pan: Vec2,
    /// Filter revision seen at the end of the last frame
    pub filter_revision: u64,
    /// Time spent drawing the last frame
    pub last_draw_time_ms: f32,

    id: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            first_frame: true,
            hovered: None,
            selected: None,
            pan: Vec2::ZERO,
            filter_revision: 0,
            last_draw_time_ms: 0.,
            id: String::new(),
        }
    }
}

impl Metadata {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id: id.unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn load(self, ui: &egui::Ui) -> Self {
        let key = Id::new(self.get_key());
        ui.data_mut(|data| data.get_temp::<Metadata>(key).unwrap_or(self))
    }

    pub fn save(self, ui: &mut egui::Ui) {
        let key = Id::new(self.get_key());
        ui.data_mut(|data| data.insert_temp(key, self));
    }

    /// Get key which is used to store metadata in egui cache.
    pub fn get_key(&self) -> String {
        format!("{KEY_PREFIX}_{}", self.id)
    }
}

/// Resets [`Metadata`] state of the widget with the given custom id.
pub fn reset_metadata(ui: &mut egui::Ui, id: Option<String>) {
    Metadata::new(id).save(ui);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_scoped_by_id() {
        assert_ne!(
            Metadata::new(Some("classic".into())).get_key(),
            Metadata::new(Some("explorer".into())).get_key()
        );
        assert_eq!(Metadata::new(None).get_key(), "egui_starmap_metadata_");
    }
}
