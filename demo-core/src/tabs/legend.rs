use egui::{Color32, Sense, Ui, Vec2};
use egui_starmap::{
    catalog::seasonal_guide, size_for, MarkerStyle, ObjectType, Season, COLOR_CLUSTER,
    COLOR_GALAXY, COLOR_NEBULA, COLOR_PLANET, COLOR_STAR_BRIGHT, COLOR_STAR_DIM,
    COLOR_STAR_MEDIUM,
};

use crate::StarMapApp;

fn swatch(ui: &mut Ui, color: Color32, diameter: f32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(16.), Sense::hover());
    ui.painter().circle_filled(rect.center(), diameter / 2., color);
}

impl StarMapApp {
    pub fn ui_legend_tab(&mut self, ui: &mut Ui) {
        ui.heading("Легенда");

        egui::Grid::new("legend_colors").num_columns(2).show(ui, |ui| {
            let rows = [
                (COLOR_STAR_BRIGHT, "Звезда, яркость > 4"),
                (COLOR_STAR_MEDIUM, "Звезда, яркость > 3"),
                (COLOR_STAR_DIM, "Звезда, тусклая"),
                (COLOR_PLANET, ObjectType::Planet.label()),
                (COLOR_NEBULA, ObjectType::Nebula.label()),
                (COLOR_GALAXY, ObjectType::Galaxy.label()),
                (COLOR_CLUSTER, ObjectType::Cluster.label()),
            ];
            for (color, label) in rows {
                swatch(ui, color, 8.);
                ui.label(label);
                ui.end_row();
            }
        });

        ui.separator();
        ui.strong("Размер маркера");
        ui.horizontal(|ui| {
            for b in [1., 2., 3., 4., 5., 6.] {
                ui.vertical(|ui| {
                    swatch(ui, COLOR_STAR_BRIGHT, size_for(b, MarkerStyle::Linear));
                    ui.small(format!("{b:.0}"));
                });
            }
        });

        ui.separator();
        ui.strong("Что смотреть по сезонам");
        egui::Grid::new("legend_seasons").num_columns(2).show(ui, |ui| {
            for s in Season::ALL {
                ui.label(format!("{} {}", s.icon(), s.label()));
                ui.label(seasonal_guide(s).join(", "));
                ui.end_row();
            }
        });
    }
}
