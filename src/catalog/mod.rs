mod builtin;
mod constellations;
mod generator;
mod object;

pub use self::builtin::explorer_catalog;
pub use self::constellations::{
    constellation_by_name, seasonal_guide, Constellation, CONSTELLATIONS,
};
pub use self::generator::{
    background_stars, generate_catalog, BackgroundStar, GENERATED_CATALOG_SIZE, STAR_NAMES,
};
pub use self::object::{Category, CelestialObject, ObjectId, ObjectType, Season};

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Errors produced while importing a catalog from external data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate object id {0}")]
    DuplicateId(ObjectId),

    #[error("object {id} lies outside of the normalized plane: ({x}, {y})")]
    OutOfPlane { id: ObjectId, x: f32, y: f32 },

    #[error("object {0} has non-finite brightness")]
    InvalidBrightness(ObjectId),
}

/// Immutable set of celestial objects held for the lifetime of a session.
///
/// Every catalog gets a process-unique generation number at construction, which
/// lets filter caches detect that the catalog they were computed from has been
/// replaced.
#[derive(Debug, Clone)]
pub struct Catalog {
    objects: Vec<CelestialObject>,
    generation: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogJson {
    List(Vec<CelestialObject>),
    Wrapped { objects: Vec<CelestialObject> },
}

impl Catalog {
    /// Wraps the given objects as is. No validation is performed.
    pub fn new(objects: Vec<CelestialObject>) -> Self {
        Self {
            objects,
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Parses a catalog from JSON. Accepts either a bare array of objects or an
    /// object of the form `{"objects": [...]}`.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the text is not a valid catalog, when ids
    /// repeat, when an object is placed outside `[0, 100]` on either axis or when
    /// brightness is not a finite number.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let objects = match serde_json::from_str::<CatalogJson>(text)? {
            CatalogJson::List(objects) | CatalogJson::Wrapped { objects } => objects,
        };

        if let Err(err) = validate(&objects) {
            warn!("rejected catalog import: {err}");
            return Err(err);
        }

        info!("imported catalog with {} objects", objects.len());
        Ok(Self::new(objects))
    }

    pub fn objects(&self) -> &[CelestialObject] {
        &self.objects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CelestialObject> {
        self.objects.iter()
    }

    pub fn get(&self, id: ObjectId) -> Option<&CelestialObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CelestialObject;
    type IntoIter = std::slice::Iter<'a, CelestialObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

fn validate(objects: &[CelestialObject]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(objects.len());
    for o in objects {
        if !seen.insert(o.id) {
            return Err(CatalogError::DuplicateId(o.id));
        }
        if !o.in_plane() {
            return Err(CatalogError::OutOfPlane {
                id: o.id,
                x: o.x,
                y: o.y,
            });
        }
        if !o.brightness.is_finite() {
            return Err(CatalogError::InvalidBrightness(o.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generations_are_unique() {
        let a = Catalog::default();
        let b = Catalog::default();
        assert_ne!(a.generation(), b.generation());
    }

    #[test]
    fn from_json_accepts_both_shapes() {
        let list = r#"[{"id":1,"name":"Вега","x":10,"y":20,"brightness":5.1,"type":"star","constellation":"Лира"}]"#;
        let c = Catalog::from_json(list).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.objects()[0].constellation.as_deref(), Some("Лира"));

        let wrapped = r#"{"objects":[{"id":2,"name":"Марс","x":1,"y":2,"brightness":3,"type":"planet","category":"planet"}]}"#;
        let c = Catalog::from_json(wrapped).unwrap();
        assert_eq!(c.objects()[0].kind, ObjectType::Planet);
        assert_eq!(c.objects()[0].category, Some(Category::Planet));
    }

    #[test]
    fn from_json_rejects_duplicates() {
        let text = r#"[
            {"id":1,"name":"a","x":1,"y":1,"brightness":1,"type":"star"},
            {"id":1,"name":"b","x":2,"y":2,"brightness":1,"type":"star"}
        ]"#;
        let err = Catalog::from_json(text).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ObjectId(1))));
    }

    #[test]
    fn from_json_rejects_out_of_plane() {
        let text = r#"[{"id":7,"name":"a","x":101,"y":1,"brightness":1,"type":"star"}]"#;
        let err = Catalog::from_json(text).unwrap_err();
        assert!(matches!(err, CatalogError::OutOfPlane { id: ObjectId(7), .. }));
    }

    #[test]
    fn from_json_rejects_unknown_type() {
        let text = r#"[{"id":7,"name":"a","x":1,"y":1,"brightness":1,"type":"comet"}]"#;
        assert!(matches!(
            Catalog::from_json(text).unwrap_err(),
            CatalogError::Json(_)
        ));
    }

    #[test]
    fn get_by_id() {
        let c = explorer_catalog();
        let first = &c.objects()[0];
        assert_eq!(c.get(first.id), Some(first));
        assert!(c.get(ObjectId(u32::MAX)).is_none());
    }
}
