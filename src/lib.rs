pub mod catalog;
mod filter;
mod filtered;
mod hit_test;
mod metadata;
mod settings;
mod star_map;
mod star_map_view;
mod style;
mod view_state;
mod viewport;

pub use self::catalog::{Catalog, CatalogError, Category, CelestialObject, ObjectId, ObjectType, Season};
pub use self::filter::{
    filter_catalog, find_suggestions, matches_search, search_results, BrightnessRange,
    FilterCriteria, GroupKey, Selector, BRIGHTNESS_MAX, BRIGHTNESS_MIN, BRIGHTNESS_STEP,
    DEFAULT_SUGGESTIONS_LIMIT, SEARCH_RESULTS_LIMIT,
};
pub use self::filtered::FilteredCatalog;
pub use self::hit_test::{denormalize, hit_test, normalize_pointer, DEFAULT_TOLERANCE};
pub use self::metadata::reset_metadata;
pub use self::settings::{SelectMode, SettingsInteraction, SettingsNavigation, SettingsStyle};
pub use self::star_map::StarMap;
pub use self::star_map_view::{last_draw_time_ms, StarMapView};
pub use self::style::{
    color_for, glow_for, size_for, MarkerStyle, COLOR_CLUSTER, COLOR_GALAXY, COLOR_NEBULA,
    COLOR_PLANET, COLOR_STAR_BRIGHT, COLOR_STAR_DIM, COLOR_STAR_MEDIUM,
};
pub use self::view_state::ViewState;
pub use self::viewport::{PanState, WHEEL_DAMPING, WHEEL_SENSITIVITY};

#[cfg(feature = "events")]
pub mod events;
