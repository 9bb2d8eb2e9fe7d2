use instant::Instant;
use log::debug;

use crate::{
    catalog::{Catalog, CelestialObject},
    filter::{FilterCriteria, GroupKey},
};

/// Memoized result of filtering a catalog.
///
/// Stores indices into the catalog and the criteria plus catalog generation
/// they were computed for. [`FilteredCatalog::refresh`] only recomputes when one
/// of them changed.
#[derive(Debug, Clone)]
pub struct FilteredCatalog<G> {
    indices: Vec<usize>,
    criteria: Option<FilterCriteria<G>>,
    generation: u64,
    revision: u64,
    last_compute_ms: f32,
}

impl<G> Default for FilteredCatalog<G> {
    fn default() -> Self {
        Self {
            indices: Vec::new(),
            criteria: None,
            generation: 0,
            revision: 0,
            last_compute_ms: 0.,
        }
    }
}

impl<G: GroupKey> FilteredCatalog<G> {
    pub fn new(catalog: &Catalog, criteria: &FilterCriteria<G>) -> Self {
        let mut f = Self::default();
        f.refresh(catalog, criteria);
        f
    }

    /// Recomputes the result if `criteria` or the catalog changed since the last
    /// call. Returns whether a recomputation happened.
    pub fn refresh(&mut self, catalog: &Catalog, criteria: &FilterCriteria<G>) -> bool {
        let fresh =
            self.generation == catalog.generation() && self.criteria.as_ref() == Some(criteria);
        if fresh {
            return false;
        }

        let start = Instant::now();
        self.indices = catalog
            .iter()
            .enumerate()
            .filter(|(_, o)| criteria.matches(o))
            .map(|(i, _)| i)
            .collect();
        self.criteria = Some(criteria.clone());
        self.generation = catalog.generation();
        self.revision += 1;
        self.last_compute_ms = start.elapsed().as_secs_f32() * 1000.;

        debug!(
            "filtered catalog {}: {} of {} objects in {:.3}ms",
            catalog.generation(),
            self.indices.len(),
            catalog.len(),
            self.last_compute_ms
        );

        true
    }

    /// Filtered objects in catalog order.
    ///
    /// `catalog` must be the catalog passed to the last `refresh`.
    pub fn objects<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a CelestialObject> + 'a {
        let objects = catalog.objects();
        self.indices.iter().filter_map(move |&i| objects.get(i))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of recomputations so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn last_compute_ms(&self) -> f32 {
        self.last_compute_ms
    }
}
