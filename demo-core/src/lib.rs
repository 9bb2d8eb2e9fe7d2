use eframe::{App, CreationContext};
use egui::{Context, Ui};
use egui_starmap::{
    catalog::{explorer_catalog, generate_catalog},
    Category, MarkerStyle, ObjectType, SelectMode, SettingsInteraction, SettingsNavigation,
    SettingsStyle, StarMap,
};
use instant::Instant;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

mod tabs;
mod widgets;

pub const CLASSIC_ID: &str = "classic";
pub const EXPLORER_ID: &str = "explorer";
pub const BACKGROUND_STARS: usize = 200;
#[cfg(feature = "events")]
pub const EVENTS_LIMIT: usize = 200;

#[cfg(feature = "events")]
pub use crossbeam::channel::{unbounded, Receiver, Sender};
#[cfg(feature = "events")]
pub use egui_starmap::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Classic,
    Explorer,
    Constellations,
    Search,
    Legend,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Classic,
        Tab::Explorer,
        Tab::Constellations,
        Tab::Search,
        Tab::Legend,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Classic => "🗺 Карта",
            Tab::Explorer => "🔭 Исследователь",
            Tab::Constellations => "✨ Созвездия",
            Tab::Search => "🔍 Поиск",
            Tab::Legend => "📖 Легенда",
        }
    }
}

/// Widget settings of one map.
pub struct MapSettings {
    pub interaction: SettingsInteraction,
    pub navigation: SettingsNavigation,
    pub style: SettingsStyle,
}

impl MapSettings {
    /// Click by coordinate, fixed view, tiered markers.
    pub fn classic() -> Self {
        Self {
            interaction: SettingsInteraction::new().with_select_mode(SelectMode::Tolerance),
            navigation: SettingsNavigation::new(),
            style: SettingsStyle::new()
                .with_marker_style(MarkerStyle::Tiered)
                .with_background(BACKGROUND_STARS, 1),
        }
    }

    /// Clickable markers, drag and wheel panning, linear markers.
    pub fn explorer() -> Self {
        Self {
            interaction: SettingsInteraction::new()
                .with_select_mode(SelectMode::Marker)
                .with_panning_enabled(true, true),
            navigation: SettingsNavigation::new(),
            style: SettingsStyle::new()
                .with_marker_style(MarkerStyle::Linear)
                .with_background(BACKGROUND_STARS, 2),
        }
    }
}

pub struct StarMapApp {
    pub tab: Tab,

    pub classic: StarMap<ObjectType>,
    pub classic_settings: MapSettings,
    pub seed: u64,

    pub explorer: StarMap<Category>,
    pub explorer_settings: MapSettings,
    pub import_text: String,
    pub status: Option<String>,

    pub fps: f32,
    pub last_update_time: Instant,
    pub frames_last_time_span: usize,

    #[cfg(feature = "events")]
    pub last_events: Vec<String>,
    #[cfg(feature = "events")]
    pub event_publisher: Sender<Event>,
    #[cfg(feature = "events")]
    pub event_consumer: Receiver<Event>,
}

impl StarMapApp {
    pub fn new(_: &CreationContext<'_>) -> Self {
        let seed = rand::random::<u64>();

        #[cfg(feature = "events")]
        let (event_publisher, event_consumer) = unbounded();

        Self {
            tab: Tab::Classic,

            classic: StarMap::new(generate_catalog(&mut StdRng::seed_from_u64(seed))),
            classic_settings: MapSettings::classic(),
            seed,

            explorer: StarMap::new(explorer_catalog()),
            explorer_settings: MapSettings::explorer(),
            import_text: String::new(),
            status: None,

            fps: 0.,
            last_update_time: Instant::now(),
            frames_last_time_span: 0,

            #[cfg(feature = "events")]
            last_events: Vec::new(),
            #[cfg(feature = "events")]
            event_publisher,
            #[cfg(feature = "events")]
            event_consumer,
        }
    }

    /// Replaces the classic catalog with a freshly generated one.
    pub fn regenerate(&mut self) {
        info!("regenerating classic catalog with seed {}", self.seed);
        self.classic
            .set_catalog(generate_catalog(&mut StdRng::seed_from_u64(self.seed)));
    }

    pub fn update_fps(&mut self) {
        self.frames_last_time_span += 1;
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update_time);
        if elapsed.as_secs() >= 1 {
            self.last_update_time = now;
            self.fps = self.frames_last_time_span as f32 / elapsed.as_secs_f32();
            self.frames_last_time_span = 0;
        }
    }

    #[cfg(feature = "events")]
    pub fn handle_events(&mut self) {
        self.event_consumer.try_iter().for_each(|e| {
            if self.last_events.len() >= EVENTS_LIMIT {
                self.last_events.remove(0);
            }
            self.last_events.push(format!("{e:?}"));
        });
    }

    fn ui_tabs(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            for tab in Tab::ALL {
                ui.selectable_value(&mut self.tab, tab, tab.label());
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.1}", self.fps));
            });
        });
    }
}

impl App for StarMapApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| self.ui_tabs(ui));

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Classic => self.ui_classic_tab(ui),
            Tab::Explorer => self.ui_explorer_tab(ui),
            Tab::Constellations => self.ui_constellations_tab(ui),
            Tab::Search => self.ui_search_tab(ui),
            Tab::Legend => self.ui_legend_tab(ui),
        });

        #[cfg(feature = "events")]
        self.handle_events();

        self.update_fps();
        ctx.request_repaint();
    }
}
