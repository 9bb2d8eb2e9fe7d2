use egui::{ComboBox, RichText, Slider, Ui};
use egui_starmap::{
    color_for, BrightnessRange, CelestialObject, Selector, BRIGHTNESS_MAX, BRIGHTNESS_MIN,
    BRIGHTNESS_STEP,
};

pub const ALL_LABEL: &str = "Все";

pub fn info_icon(ui: &mut Ui, tip: &str) {
    ui.add_space(4.0);
    ui.small_button("ℹ").on_hover_text(tip);
}

/// Combo box over `All` plus every value of `all`. Returns the new selector if
/// the user picked a different one.
pub fn selector_combo<T: Copy + PartialEq>(
    ui: &mut Ui,
    id_salt: &str,
    label: &str,
    current: Selector<T>,
    all: &[T],
    text: impl Fn(T) -> &'static str,
) -> Option<Selector<T>> {
    let selected_text = match current {
        Selector::All => ALL_LABEL,
        Selector::Only(v) => text(v),
    };

    let mut next = current;
    ComboBox::new(id_salt, label)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut next, Selector::All, ALL_LABEL);
            for v in all {
                ui.selectable_value(&mut next, Selector::Only(*v), text(*v));
            }
        });

    (next != current).then_some(next)
}

/// Two sliders for the brightness interval. Keeps `min <= max` by dragging the
/// other end along.
pub fn brightness_sliders(ui: &mut Ui, current: BrightnessRange) -> Option<BrightnessRange> {
    let (mut min, mut max) = (current.min, current.max);

    ui.label("Яркость");
    let min_changed = ui
        .add(
            Slider::new(&mut min, BRIGHTNESS_MIN..=BRIGHTNESS_MAX)
                .step_by(BRIGHTNESS_STEP.into())
                .text("от"),
        )
        .changed();
    let max_changed = ui
        .add(
            Slider::new(&mut max, BRIGHTNESS_MIN..=BRIGHTNESS_MAX)
                .step_by(BRIGHTNESS_STEP.into())
                .text("до"),
        )
        .changed();

    if !min_changed && !max_changed {
        return None;
    }
    if min > max {
        if min_changed {
            max = min;
        } else {
            min = max;
        }
    }
    Some(BrightnessRange::new(min, max))
}

/// Details card of the selected object. Returns `true` when the close button
/// was pressed.
pub fn object_details(ui: &mut Ui, o: &CelestialObject) -> bool {
    let mut close = false;

    ui.horizontal(|ui| {
        ui.heading(RichText::new(format!("{} {}", o.kind.icon(), o.name)).color(color_for(o)));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            close = ui.button("✕").on_hover_text("Закрыть").clicked();
        });
    });
    ui.separator();

    egui::Grid::new(("details", o.id.index()))
        .num_columns(2)
        .show(ui, |ui| {
            ui.label("Тип");
            ui.label(o.kind.label());
            ui.end_row();

            if let Some(c) = &o.constellation {
                ui.label("Созвездие");
                ui.label(c);
                ui.end_row();
            }
            ui.label("Яркость");
            ui.label(format!("{:.1}", o.brightness));
            ui.end_row();

            if let Some(m) = o.magnitude {
                ui.label("Звёздная величина");
                ui.label(format!("{m:.2}"));
                ui.end_row();
            }
            if let Some(d) = &o.distance {
                ui.label("Расстояние");
                ui.label(d);
                ui.end_row();
            }
            if let Some(s) = o.season {
                ui.label("Сезон");
                ui.label(format!("{} {}", s.icon(), s.label()));
                ui.end_row();
            }
            ui.label("Координаты");
            ui.label(format!("{:.1}, {:.1}", o.x, o.y));
            ui.end_row();
        });

    ui.add_space(6.);
    ui.label(o.description_or_default());

    if !o.facts.is_empty() {
        ui.add_space(6.);
        ui.strong("Интересные факты");
        for f in &o.facts {
            ui.label(format!("• {f}"));
        }
    }

    close
}

#[cfg(feature = "events")]
pub fn events_section(ui: &mut Ui, events: &mut Vec<String>) {
    egui::CollapsingHeader::new("События")
        .default_open(false)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} последних", events.len()));
                if ui.small_button("Очистить").clicked() {
                    events.clear();
                }
            });
            egui::ScrollArea::vertical()
                .max_height(160.)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for e in events.iter() {
                        ui.monospace(e);
                    }
                });
        });
}
