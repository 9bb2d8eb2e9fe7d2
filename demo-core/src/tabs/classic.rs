use egui::{DragValue, Frame, ScrollArea, TextEdit, Ui};
use egui_starmap::{last_draw_time_ms, MarkerStyle, ObjectType, Season, StarMapView, ViewState};

use crate::widgets::{brightness_sliders, info_icon, object_details, selector_combo};
use crate::{StarMapApp, CLASSIC_ID};

impl StarMapApp {
    pub fn ui_classic_tab(&mut self, ui: &mut Ui) {
        egui::SidePanel::left("classic_filters")
            .default_width(240.)
            .show_inside(ui, |ui| {
                ScrollArea::vertical().show(ui, |ui| self.ui_classic_filters(ui));
            });

        if self.classic.selected().is_some() {
            egui::SidePanel::right("classic_details")
                .default_width(260.)
                .show_inside(ui, |ui| {
                    let close = self.classic.selected().is_some_and(|o| object_details(ui, o));
                    if close {
                        self.classic.apply(ViewState::clear_selection);
                    }
                });
        }

        egui::CentralPanel::default()
            .frame(Frame::NONE)
            .show_inside(ui, |ui| {
                let settings = &self.classic_settings;
                let view = StarMapView::new(&mut self.classic)
                    .with_id(Some(CLASSIC_ID.to_string()))
                    .with_interactions(&settings.interaction)
                    .with_navigations(&settings.navigation)
                    .with_styles(&settings.style);
                #[cfg(feature = "events")]
                let view = view.with_events(&self.event_publisher);
                let mut view = view;
                ui.add(&mut view);
            });
    }

    fn ui_classic_filters(&mut self, ui: &mut Ui) {
        ui.heading("Фильтры");

        let criteria = self.classic.state().criteria.clone();

        ui.label("Поиск");
        let mut search = criteria.search.clone();
        let resp = ui.add(TextEdit::singleline(&mut search).hint_text("Название или созвездие"));
        if resp.changed() {
            self.classic.apply(|s| s.with_search(search));
        }

        if let Some(group) = selector_combo(
            ui,
            "classic_type",
            "Тип",
            criteria.group,
            &ObjectType::ALL,
            ObjectType::label,
        ) {
            self.classic.apply(|s| s.with_group(group));
        }

        if let Some(season) = selector_combo(
            ui,
            "classic_season",
            "Сезон",
            criteria.season,
            &Season::ALL,
            Season::label,
        ) {
            self.classic.apply(|s| s.with_season(season));
        }

        if let Some(range) = brightness_sliders(ui, criteria.brightness) {
            self.classic.apply(|s| s.with_brightness(range));
        }

        if ui.button("Сбросить фильтры").clicked() {
            self.classic.apply(ViewState::reset_filters);
        }

        ui.separator();
        ui.label(format!(
            "Показано {} из {}",
            self.classic.filtered_count(),
            self.classic.catalog().len()
        ));
        ui.horizontal(|ui| {
            ui.label("Клик выбирает ближайший объект");
            info_icon(ui, "Объект выбирается, если он ближе 2% ширины и высоты карты к курсору.");
        });

        ui.separator();
        egui::CollapsingHeader::new("Каталог")
            .default_open(false)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Seed");
                    ui.add(DragValue::new(&mut self.seed));
                });
                ui.horizontal(|ui| {
                    if ui.button("Сгенерировать").clicked() {
                        self.regenerate();
                    }
                    if ui.button("Случайный").clicked() {
                        self.seed = rand::random();
                        self.regenerate();
                    }
                });
            });

        egui::CollapsingHeader::new("Стиль")
            .default_open(false)
            .show(ui, |ui| {
                let style = &mut self.classic_settings.style;
                ui.checkbox(&mut style.labels_always, "Подписи всегда");
                ui.checkbox(&mut style.glow, "Свечение");
                ui.horizontal(|ui| {
                    ui.radio_value(&mut style.marker_style, MarkerStyle::Tiered, "Ступенчато");
                    ui.radio_value(&mut style.marker_style, MarkerStyle::Linear, "Линейно");
                });
            });

        egui::CollapsingHeader::new("Отладка")
            .default_open(false)
            .show(ui, |ui| {
                ui.label(format!("Фильтр: {:.3} мс", self.classic.last_filter_ms()));
                ui.label(format!(
                    "Отрисовка: {:.3} мс",
                    last_draw_time_ms(ui, Some(CLASSIC_ID.to_string()))
                ));
            });

        #[cfg(feature = "events")]
        crate::widgets::events_section(ui, &mut self.last_events);
    }
}
