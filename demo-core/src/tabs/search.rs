use egui::{ScrollArea, TextEdit, Ui};
use egui_starmap::{color_for, search_results, CelestialObject, ObjectId};

use crate::{StarMapApp, Tab};

impl StarMapApp {
    pub fn ui_search_tab(&mut self, ui: &mut Ui) {
        ui.heading("Поиск объектов");

        let mut search = self.classic.state().criteria.search.clone();
        let resp = ui.add(
            TextEdit::singleline(&mut search)
                .hint_text("Название звезды или созвездия")
                .desired_width(320.),
        );
        if resp.changed() {
            self.classic.apply(|s| s.with_search(search));
        }

        if self.classic.state().criteria.search.is_empty() {
            ui.label("Введите запрос, чтобы увидеть результаты.");
            return;
        }

        let filtered: Vec<&CelestialObject> = self.classic.filtered().collect();
        ui.label(format!("Найдено: {}", filtered.len()));

        let mut picked: Option<ObjectId> = None;
        ScrollArea::vertical().show(ui, |ui| {
            for o in search_results(&filtered) {
                ui.horizontal(|ui| {
                    ui.colored_label(color_for(o), o.kind.icon());
                    if ui.link(&o.name).clicked() {
                        picked = Some(o.id);
                    }
                    if let Some(c) = &o.constellation {
                        ui.weak(c);
                    }
                    ui.weak(format!("яркость {:.1}", o.brightness));
                });
            }
        });

        if let Some(id) = picked {
            self.classic.apply(|s| s.select(id));
            self.tab = Tab::Classic;
        }
    }
}
