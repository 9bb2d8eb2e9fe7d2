use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Category, CelestialObject, ObjectType, Season};

pub const DEFAULT_SUGGESTIONS_LIMIT: usize = 5;
pub const SEARCH_RESULTS_LIMIT: usize = 30;

pub const BRIGHTNESS_MIN: f32 = 1.;
pub const BRIGHTNESS_MAX: f32 = 6.;
/// Granularity of brightness bounds picked in a UI.
pub const BRIGHTNESS_STEP: f32 = 0.5;

/// Field of [`CelestialObject`] used as the grouping axis of a filter.
///
/// The classic map groups by [`ObjectType`], the explorer map by [`Category`].
pub trait GroupKey: Copy + PartialEq {
    fn key_of(o: &CelestialObject) -> Option<Self>;
}

impl GroupKey for ObjectType {
    fn key_of(o: &CelestialObject) -> Option<Self> {
        Some(o.kind)
    }
}

impl GroupKey for Category {
    fn key_of(o: &CelestialObject) -> Option<Self> {
        o.category
    }
}

/// Either matches everything or one concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selector<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    /// An absent value never matches a concrete selector.
    pub fn matches(&self, value: Option<T>) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => value.as_ref() == Some(expected),
        }
    }
}

/// Inclusive brightness interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrightnessRange {
    pub min: f32,
    pub max: f32,
}

impl Default for BrightnessRange {
    fn default() -> Self {
        Self {
            min: BRIGHTNESS_MIN,
            max: BRIGHTNESS_MAX,
        }
    }
}

impl BrightnessRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(self, brightness: f32) -> bool {
        brightness >= self.min && brightness <= self.max
    }
}

/// Current filter criteria. All active predicates are combined with logical AND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria<G> {
    pub search: String,
    pub brightness: BrightnessRange,
    pub group: Selector<G>,
    pub season: Selector<Season>,
}

impl<G> Default for FilterCriteria<G> {
    fn default() -> Self {
        Self {
            search: String::new(),
            brightness: BrightnessRange::default(),
            group: Selector::All,
            season: Selector::All,
        }
    }
}

impl<G: GroupKey> FilterCriteria<G> {
    pub fn matches(&self, o: &CelestialObject) -> bool {
        self.brightness.contains(o.brightness)
            && self.group.matches(G::key_of(o))
            && self.season.matches(o.season)
            && matches_search(o, &self.search)
    }
}

/// Case-insensitive substring match against the name or the constellation.
///
/// An empty query matches everything. A missing constellation never matches.
pub fn matches_search(o: &CelestialObject, query: &str) -> bool {
    matches_lowercase(o, &query.to_lowercase())
}

fn matches_lowercase(o: &CelestialObject, lowercase_query: &str) -> bool {
    contains_lowercase(&o.name, lowercase_query)
        || o
            .constellation
            .as_deref()
            .is_some_and(|c| contains_lowercase(c, lowercase_query))
}

fn contains_lowercase(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

/// Returns objects satisfying `criteria`, in catalog order.
pub fn filter_catalog<'a, G: GroupKey>(
    catalog: &'a Catalog,
    criteria: &FilterCriteria<G>,
) -> Vec<&'a CelestialObject> {
    catalog.iter().filter(|o| criteria.matches(o)).collect()
}

/// First `limit` objects whose name or constellation contains `query`.
/// Empty while the query is empty.
pub fn find_suggestions<'a>(
    catalog: &'a Catalog,
    query: &str,
    limit: usize,
) -> Vec<&'a CelestialObject> {
    if query.is_empty() {
        return Vec::new();
    }

    let query = query.to_lowercase();
    catalog
        .iter()
        .filter(|o| matches_lowercase(o, &query))
        .take(limit)
        .collect()
}

/// Head of the filtered list shown on the search tab.
pub fn search_results<'a, 'b>(filtered: &'b [&'a CelestialObject]) -> &'b [&'a CelestialObject] {
    &filtered[..filtered.len().min(SEARCH_RESULTS_LIMIT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::explorer_catalog;

    fn sample() -> Catalog {
        Catalog::new(vec![
            CelestialObject::new(0, "Сириус", 10., 10., 6.)
                .with_constellation("Большой Пёс")
                .with_season(Season::Winter),
            CelestialObject::new(1, "Вега", 20., 20., 5.1)
                .with_constellation("Лира")
                .with_season(Season::Summer),
            CelestialObject::new(2, "Марс", 30., 30., 4.)
                .with_kind(ObjectType::Planet)
                .with_category(Category::Planet),
            CelestialObject::new(3, "Звезда-3", 40., 40., 1.),
        ])
    }

    fn names(objects: &[&CelestialObject]) -> Vec<String> {
        objects.iter().map(|o| o.name.clone()).collect()
    }

    #[test]
    fn default_criteria_keep_everything() {
        let c = sample();
        let got = filter_catalog(&c, &FilterCriteria::<ObjectType>::default());
        assert_eq!(got.len(), c.len());
    }

    #[test]
    fn search_is_case_insensitive() {
        let c = sample();
        let criteria = FilterCriteria::<ObjectType> {
            search: "сириус".into(),
            ..Default::default()
        };
        assert_eq!(names(&filter_catalog(&c, &criteria)), vec!["Сириус"]);
    }

    #[test]
    fn search_matches_constellation() {
        let c = sample();
        let criteria = FilterCriteria::<ObjectType> {
            search: "лира".into(),
            ..Default::default()
        };
        assert_eq!(names(&filter_catalog(&c, &criteria)), vec!["Вега"]);
    }

    #[test]
    fn missing_constellation_never_matches() {
        let o = CelestialObject::new(0, "Марс", 0., 0., 1.);
        assert!(!matches_search(&o, "лира"));
        assert!(matches_search(&o, ""));
    }

    #[test]
    fn degenerate_brightness_range() {
        let c = sample();
        let criteria = FilterCriteria::<ObjectType> {
            brightness: BrightnessRange::new(5.1, 5.1),
            ..Default::default()
        };
        assert_eq!(names(&filter_catalog(&c, &criteria)), vec!["Вега"]);
    }

    #[test]
    fn brightness_bounds_are_inclusive() {
        let range = BrightnessRange::new(2., 4.5);
        assert!(range.contains(2.) && range.contains(4.5));
        assert!(!range.contains(1.99) && !range.contains(4.51));
        // still usable after the by-value call
        assert_eq!(range.min, 2.);
    }

    #[test]
    fn brightness_step_reaches_both_ends() {
        let steps = (BRIGHTNESS_MAX - BRIGHTNESS_MIN) / BRIGHTNESS_STEP;
        assert_eq!(steps.fract(), 0.);
        assert_eq!(steps as u32, 10);
    }

    #[test]
    fn type_filter_excludes_other_kinds() {
        let c = sample();
        let criteria = FilterCriteria {
            group: Selector::Only(ObjectType::Planet),
            ..Default::default()
        };
        assert_eq!(names(&filter_catalog(&c, &criteria)), vec!["Марс"]);
    }

    #[test]
    fn category_filter_skips_uncategorized() {
        let c = sample();
        let criteria = FilterCriteria {
            group: Selector::Only(Category::Planet),
            ..Default::default()
        };
        assert_eq!(names(&filter_catalog(&c, &criteria)), vec!["Марс"]);

        let criteria = FilterCriteria {
            group: Selector::Only(Category::Brightest),
            ..Default::default()
        };
        assert!(filter_catalog(&c, &criteria).is_empty());
    }

    #[test]
    fn season_filter_skips_objects_without_season() {
        let c = sample();
        let criteria = FilterCriteria::<ObjectType> {
            season: Selector::Only(Season::Summer),
            ..Default::default()
        };
        assert_eq!(names(&filter_catalog(&c, &criteria)), vec!["Вега"]);
    }

    #[test]
    fn suggestions_are_capped() {
        let c = explorer_catalog();
        // "а" occurs in most names of the authored catalog
        let got = find_suggestions(&c, "а", DEFAULT_SUGGESTIONS_LIMIT);
        assert_eq!(got.len(), DEFAULT_SUGGESTIONS_LIMIT);
        assert!(find_suggestions(&c, "", DEFAULT_SUGGESTIONS_LIMIT).is_empty());
    }

    #[test]
    fn search_results_head() {
        let c = Catalog::new(
            (0..40)
                .map(|i| CelestialObject::new(i, format!("Звезда-{i}"), 1., 1., 2.))
                .collect(),
        );
        let filtered = filter_catalog(&c, &FilterCriteria::<ObjectType>::default());
        assert_eq!(search_results(&filtered).len(), SEARCH_RESULTS_LIMIT);
        assert_eq!(search_results(&filtered[..3]).len(), 3);
    }
}
