use egui::{RichText, ScrollArea, Ui};
use egui_starmap::{catalog::CONSTELLATIONS, ViewState};

use crate::{StarMapApp, Tab};

impl StarMapApp {
    pub fn ui_constellations_tab(&mut self, ui: &mut Ui) {
        ui.heading("Каталог созвездий");
        ui.add_space(6.);

        ScrollArea::vertical().show(ui, |ui| {
            for c in &CONSTELLATIONS {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(c.name).strong().size(16.));
                        ui.label(format!("{} {}", c.season.icon(), c.season.label()));
                        ui.label(format!("★ {}", c.stars));
                    });
                    ui.label(c.description);
                    ui.label(format!("Главные звёзды: {}", c.main_stars.join(", ")));
                    if ui.small_button("Показать на карте").clicked() {
                        self.classic
                            .apply(|s| ViewState::reset_filters(s).with_search(c.name));
                        self.tab = Tab::Classic;
                    }
                });
                ui.add_space(4.);
            }
        });
    }
}
