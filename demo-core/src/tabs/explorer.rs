use egui::{Frame, ScrollArea, TextEdit, Ui};
use egui_starmap::{
    catalog::explorer_catalog, last_draw_time_ms, Catalog, Category, ObjectId, Selector,
    StarMapView, ViewState, DEFAULT_SUGGESTIONS_LIMIT,
};
use log::info;

use crate::widgets::{info_icon, object_details, ALL_LABEL};
use crate::{StarMapApp, EXPLORER_ID};

impl StarMapApp {
    pub fn ui_explorer_tab(&mut self, ui: &mut Ui) {
        egui::SidePanel::left("explorer_controls")
            .default_width(260.)
            .show_inside(ui, |ui| {
                ScrollArea::vertical().show(ui, |ui| self.ui_explorer_controls(ui));
            });

        if self.explorer.selected().is_some() {
            egui::SidePanel::right("explorer_details")
                .default_width(280.)
                .show_inside(ui, |ui| {
                    let close = self
                        .explorer
                        .selected()
                        .is_some_and(|o| object_details(ui, o));
                    if close {
                        self.explorer.apply(ViewState::clear_selection);
                    }
                });
        }

        egui::CentralPanel::default()
            .frame(Frame::NONE)
            .show_inside(ui, |ui| {
                let settings = &self.explorer_settings;
                let view = StarMapView::new(&mut self.explorer)
                    .with_id(Some(EXPLORER_ID.to_string()))
                    .with_interactions(&settings.interaction)
                    .with_navigations(&settings.navigation)
                    .with_styles(&settings.style);
                #[cfg(feature = "events")]
                let view = view.with_events(&self.event_publisher);
                let mut view = view;
                ui.add(&mut view);
            });
    }

    fn ui_explorer_controls(&mut self, ui: &mut Ui) {
        ui.heading("Поиск");
        self.ui_explorer_search(ui);

        ui.separator();
        ui.heading("Категории");
        let current = self.explorer.state().criteria.group;
        let mut next = current;
        ui.horizontal_wrapped(|ui| {
            ui.selectable_value(&mut next, Selector::All, ALL_LABEL);
            for c in Category::ALL {
                ui.selectable_value(&mut next, Selector::Only(c), c.label());
            }
        });
        if next != current {
            self.explorer.apply(|s| s.with_group(next));
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("🎯 Центрировать").clicked() {
                self.explorer.apply(ViewState::center);
            }
            info_icon(ui, "Перетаскивайте карту мышью, колесо сдвигает её по диагонали.");
        });
        let pan = self.explorer.state().pan.offset;
        ui.label(format!("Смещение: {:.0}, {:.0}", pan.x, pan.y));
        ui.label(format!(
            "Показано {} из {}",
            self.explorer.filtered_count(),
            self.explorer.catalog().len()
        ));

        ui.separator();
        egui::CollapsingHeader::new("Импорт каталога")
            .default_open(false)
            .show(ui, |ui| self.ui_explorer_import(ui));

        egui::CollapsingHeader::new("Отладка")
            .default_open(false)
            .show(ui, |ui| {
                ui.label(format!("Фильтр: {:.3} мс", self.explorer.last_filter_ms()));
                ui.label(format!(
                    "Отрисовка: {:.3} мс",
                    last_draw_time_ms(ui, Some(EXPLORER_ID.to_string()))
                ));
            });

        #[cfg(feature = "events")]
        crate::widgets::events_section(ui, &mut self.last_events);
    }

    fn ui_explorer_search(&mut self, ui: &mut Ui) {
        let mut search = self.explorer.state().criteria.search.clone();
        let resp = ui.add(TextEdit::singleline(&mut search).hint_text("Найти звезду или созвездие"));
        if resp.changed() {
            self.explorer.apply(|s| s.with_search(search));
        }

        let suggestions: Vec<(ObjectId, String)> = self
            .explorer
            .suggestions(DEFAULT_SUGGESTIONS_LIMIT)
            .into_iter()
            .map(|o| {
                let text = match &o.constellation {
                    Some(c) => format!("{} {} ({c})", o.kind.icon(), o.name),
                    None => format!("{} {}", o.kind.icon(), o.name),
                };
                (o.id, text)
            })
            .collect();

        for (id, text) in suggestions {
            if ui.selectable_label(false, text).clicked() {
                self.explorer.pick_suggestion(id);
            }
        }
    }

    fn ui_explorer_import(&mut self, ui: &mut Ui) {
        ui.label("JSON: массив объектов или {\"objects\": [...]}");
        ui.add(
            TextEdit::multiline(&mut self.import_text)
                .code_editor()
                .desired_rows(6),
        );
        ui.horizontal(|ui| {
            if ui.button("Импортировать").clicked() {
                match Catalog::from_json(&self.import_text) {
                    Ok(catalog) => {
                        self.status = Some(format!("Загружено объектов: {}", catalog.len()));
                        self.explorer.set_catalog(catalog);
                    }
                    Err(err) => self.status = Some(format!("Ошибка: {err}")),
                }
            }
            if ui.button("Встроенный каталог").clicked() {
                info!("restoring built-in explorer catalog");
                self.explorer.set_catalog(explorer_catalog());
                self.status = None;
            }
        });
        if let Some(status) = &self.status {
            ui.label(status);
        }
    }
}
