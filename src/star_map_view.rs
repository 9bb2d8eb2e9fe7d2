use egui::{
    Align2, Color32, CursorIcon, FontId, Painter, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2,
    Widget,
};
use instant::Instant;
use log::trace;
use rand::{rngs::StdRng, SeedableRng};

#[cfg(feature = "events")]
use crate::events::{
    Event, EventSink, PayloadCenter, PayloadFiltersChanged, PayloadObjectDeselect,
    PayloadObjectHoverEnter, PayloadObjectHoverLeave, PayloadObjectSelect, PayloadPan,
};
use crate::{
    catalog::{background_stars, CelestialObject, ObjectId},
    filter::GroupKey,
    hit_test::{hit_test, normalize_pointer},
    metadata::Metadata,
    settings::{SelectMode, SettingsInteraction, SettingsNavigation, SettingsStyle},
    star_map::StarMap,
    style::{color_for, glow_for, size_for},
    view_state::ViewState,
};

const COLOR_SKY: Color32 = Color32::from_rgb(0x0b, 0x10, 0x26);
const COLOR_SELECTED: Color32 = Color32::from_rgb(0x74, 0xc0, 0xfc);
const COLOR_LABEL: Color32 = Color32::from_rgb(0xe9, 0xec, 0xef);
const SELECTED_RING_GAP: f32 = 4.;
const LABEL_GAP: f32 = 4.;
const LABEL_FONT_SIZE: f32 = 11.;
const GLOW_ALPHA: f32 = 0.18;

/// Widget drawing a [`StarMap`] and turning pointer input into view-state
/// transitions.
///
/// Objects live on a normalized `[0, 100]` plane which is stretched over the
/// widget rect and shifted by the pan offset.
///
/// ```ignore
/// ui.add(&mut StarMapView::new(&mut map).with_interactions(&interactions));
/// ```
pub struct StarMapView<'a, G: GroupKey> {
    map: &'a mut StarMap<G>,

    settings_interaction: SettingsInteraction,
    settings_navigation: SettingsNavigation,
    settings_style: SettingsStyle,
    custom_id: Option<String>,

    #[cfg(feature = "events")]
    events_sink: Option<&'a dyn EventSink>,
}

impl<G: GroupKey> Widget for &mut StarMapView<'_, G> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (resp, p) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());

        let mut meta = Metadata::new(self.custom_id.clone()).load(ui);
        self.map.set_viewport(resp.rect.size());

        self.handle_hover(ui, &resp, &mut meta);
        self.handle_press(ui, &resp);
        self.handle_click(&resp);
        self.handle_wheel(ui, &resp);

        let t0 = Instant::now();
        self.draw(&p, resp.rect, meta.hovered);
        meta.last_draw_time_ms = t0.elapsed().as_secs_f32() * 1000.;

        self.sync_changes(&mut meta);
        meta.save(ui);

        resp
    }
}

impl<'a, G: GroupKey> StarMapView<'a, G> {
    pub fn new(map: &'a mut StarMap<G>) -> Self {
        Self {
            map,

            settings_interaction: SettingsInteraction::default(),
            settings_navigation: SettingsNavigation::default(),
            settings_style: SettingsStyle::default(),
            custom_id: None,

            #[cfg(feature = "events")]
            events_sink: None,
        }
    }

    /// Makes every widget with the same `custom_id` share hover and change
    /// tracking state. Needed when two maps are shown at once.
    pub fn with_id(mut self, custom_id: Option<String>) -> Self {
        self.custom_id = custom_id;
        self
    }

    pub fn with_interactions(mut self, settings_interaction: &SettingsInteraction) -> Self {
        self.settings_interaction = settings_interaction.clone();
        self
    }

    pub fn with_navigations(mut self, settings_navigation: &SettingsNavigation) -> Self {
        self.settings_navigation = settings_navigation.clone();
        self
    }

    pub fn with_styles(mut self, settings_style: &SettingsStyle) -> Self {
        self.settings_style = settings_style.clone();
        self
    }

    #[cfg(feature = "events")]
    /// Supply a generic sink that will receive interaction events.
    pub fn with_event_sink(mut self, sink: &'a dyn EventSink) -> Self {
        self.events_sink = Some(sink);
        self
    }

    #[cfg(feature = "events")]
    /// Shorthand for [`StarMapView::with_event_sink`] with a crossbeam sender.
    pub fn with_events(self, events_publisher: &'a crossbeam::channel::Sender<Event>) -> Self {
        self.with_event_sink(events_publisher)
    }

    /// Screen position of a point of the normalized plane.
    fn project(&self, rect: Rect, x: f32, y: f32) -> Pos2 {
        let size = rect.size();
        rect.min + Vec2::new(x / 100. * size.x, y / 100. * size.y) + self.map.state().pan.offset
    }

    fn marker_radius(&self, o: &CelestialObject) -> f32 {
        size_for(o.brightness, self.settings_style.marker_style) / 2.
    }

    /// Object that a press at `pos` would pick, according to the select mode.
    fn object_at(&self, rect: Rect, pos: Pos2) -> Option<ObjectId> {
        match self.settings_interaction.select_mode {
            SelectMode::Tolerance => {
                let local = pos - rect.min - self.map.state().pan.offset;
                let point = normalize_pointer(local.to_pos2(), rect.size());
                hit_test(self.map.filtered(), point, self.settings_navigation.hit_tolerance)
                    .map(|o| o.id)
            }
            SelectMode::Marker => {
                let slack = self.settings_navigation.marker_hit_slack;
                self.map
                    .filtered()
                    .filter_map(|o| {
                        let dist = (self.project(rect, o.x, o.y) - pos).length();
                        (dist <= self.marker_radius(o) + slack).then_some((o.id, dist))
                    })
                    .min_by(|a, b| a.1.total_cmp(&b.1))
                    .map(|(id, _)| id)
            }
        }
    }

    fn handle_hover(&mut self, ui: &Ui, resp: &Response, meta: &mut Metadata) {
        let hovered_now = if self.settings_interaction.hover_enabled {
            resp.hover_pos().and_then(|pos| self.object_at(resp.rect, pos))
        } else {
            None
        };

        if self.map.state().pan.is_panning() {
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        } else if hovered_now.is_some() && self.settings_interaction.selection_enabled {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        } else if self.settings_interaction.panning_enabled && resp.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::Grab);
        }

        let prev = meta.hovered;
        if hovered_now == prev {
            return;
        }

        if let Some(prev_id) = prev {
            trace!("hover leave {prev_id}");
            #[cfg(feature = "events")]
            self.publish_event(Event::ObjectHoverLeave(PayloadObjectHoverLeave {
                id: prev_id.index(),
            }));
        }
        if let Some(cur_id) = hovered_now {
            trace!("hover enter {cur_id}");
            #[cfg(feature = "events")]
            self.publish_event(Event::ObjectHoverEnter(PayloadObjectHoverEnter {
                id: cur_id.index(),
            }));
        }
        meta.hovered = hovered_now;
    }

    /// Press, drag and release. A press on a marker selects it, a press on the
    /// background starts a pan which follows the pointer until the button is
    /// up or the pointer leaves the widget.
    fn handle_press(&mut self, ui: &Ui, resp: &Response) {
        let (pressed, down, pointer) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.latest_pos(),
            )
        });
        let rect = resp.rect;

        if self.map.state().pan.is_panning() {
            // PointerGone clears the position, a release outside the window is never reported.
            match pointer {
                Some(pos) if down && rect.contains(pos) => {
                    let local = (pos - rect.min).to_pos2();
                    self.map.apply(|s| s.pan_drag_to(local));
                }
                _ => self.map.apply(ViewState::pan_end),
            }
            return;
        }

        if !pressed || !resp.contains_pointer() {
            return;
        }
        let Some(pos) = pointer else {
            return;
        };

        let target = if self.settings_interaction.selection_enabled {
            self.object_at(rect, pos)
        } else {
            None
        };
        match (self.settings_interaction.select_mode, target) {
            (SelectMode::Marker, Some(id)) => {
                self.map.apply(|s| s.select(id));
                return;
            }
            // selected on release by `handle_click`
            (SelectMode::Tolerance, Some(_)) => return,
            _ => {}
        }

        if self.settings_interaction.panning_enabled {
            let local = (pos - rect.min).to_pos2();
            self.map.apply(|s| s.pan_begin(local));
        }
    }

    /// Click selection for [`SelectMode::Tolerance`]. A miss keeps the current
    /// selection.
    fn handle_click(&mut self, resp: &Response) {
        if !self.settings_interaction.selection_enabled
            || self.settings_interaction.select_mode != SelectMode::Tolerance
            || !resp.clicked()
        {
            return;
        }

        let Some(pos) = resp.interact_pointer_pos() else {
            return;
        };
        if let Some(id) = self.object_at(resp.rect, pos) {
            self.map.apply(|s| s.select(id));
        }
    }

    fn handle_wheel(&mut self, ui: &Ui, resp: &Response) {
        if !self.settings_interaction.wheel_panning_enabled || !resp.contains_pointer() {
            return;
        }

        // egui reports scrolling down as negative y, the nudge expects the opposite.
        let delta_y = -ui.input(|i| i.raw_scroll_delta.y);
        if delta_y == 0. {
            return;
        }

        let factor = self.settings_navigation.wheel_factor();
        self.map.apply(|s| s.wheel(delta_y, factor));
    }

    fn draw(&self, p: &Painter, rect: Rect, hovered: Option<ObjectId>) {
        p.rect_filled(rect, 0., COLOR_SKY);

        self.draw_background(p, rect);

        let selected = self.map.state().selected;
        for o in self.map.filtered() {
            self.draw_object(p, rect, o, selected == Some(o.id), hovered == Some(o.id));
        }
    }

    fn draw_background(&self, p: &Painter, rect: Rect) {
        let count = self.settings_style.background_stars;
        if count == 0 {
            return;
        }

        let mut rng = StdRng::seed_from_u64(self.settings_style.background_seed);
        for star in background_stars(&mut rng, count) {
            let (x, y) = star.viewport_percent();
            let pos = self.project(rect, x, y);
            if !rect.contains(pos) {
                continue;
            }
            let alpha = (star.opacity * 255.) as u8;
            p.circle_filled(pos, star.size / 2., Color32::from_white_alpha(alpha));
        }
    }

    fn draw_object(
        &self,
        p: &Painter,
        rect: Rect,
        o: &CelestialObject,
        selected: bool,
        hovered: bool,
    ) {
        let pos = self.project(rect, o.x, o.y);
        let glow = glow_for(o.brightness);
        if !rect.expand(glow).contains(pos) {
            return;
        }

        let color = color_for(o);
        let radius = self.marker_radius(o);

        if self.settings_style.glow {
            p.circle_filled(pos, glow, color.gamma_multiply(GLOW_ALPHA));
        }
        p.circle_filled(pos, radius, color);

        if selected {
            p.circle_stroke(
                pos,
                radius + SELECTED_RING_GAP,
                Stroke::new(1.5, COLOR_SELECTED),
            );
        } else if hovered {
            p.circle_stroke(
                pos,
                radius + SELECTED_RING_GAP,
                Stroke::new(1., color.gamma_multiply(0.6)),
            );
        }

        if hovered || selected || self.settings_style.labels_always {
            p.text(
                pos + Vec2::new(radius + LABEL_GAP, 0.),
                Align2::LEFT_CENTER,
                &o.name,
                FontId::proportional(LABEL_FONT_SIZE),
                COLOR_LABEL,
            );
        }
    }

    /// Compares the map with what was seen at the end of the last frame and
    /// reports the differences. Catches both widget input and transitions the
    /// application applied between frames.
    fn sync_changes(&self, meta: &mut Metadata) {
        let state = self.map.state();
        let (selected, pan, revision) = (state.selected, state.pan.offset, self.map.filter_revision());

        if meta.first_frame {
            meta.first_frame = false;
            meta.selected = selected;
            meta.pan = pan;
            meta.filter_revision = revision;
            return;
        }

        if pan != meta.pan {
            trace!("pan {:?} -> {:?}", meta.pan, pan);
            #[cfg(feature = "events")]
            {
                if pan == Vec2::ZERO {
                    self.publish_event(Event::Center(PayloadCenter {
                        prev_pan: meta.pan.into(),
                    }));
                } else {
                    self.publish_event(Event::Pan(PayloadPan {
                        diff: (pan - meta.pan).into(),
                        new_pan: pan.into(),
                    }));
                }
            }
            meta.pan = pan;
        }

        if selected != meta.selected {
            #[cfg(feature = "events")]
            {
                if let Some(prev) = meta.selected {
                    self.publish_event(Event::ObjectDeselect(PayloadObjectDeselect {
                        id: prev.index(),
                    }));
                }
                if let Some(cur) = selected {
                    self.publish_event(Event::ObjectSelect(PayloadObjectSelect {
                        id: cur.index(),
                    }));
                }
            }
            meta.selected = selected;
        }

        if revision != meta.filter_revision {
            trace!(
                "filters changed: {} of {} visible",
                self.map.filtered_count(),
                self.map.catalog().len()
            );
            #[cfg(feature = "events")]
            self.publish_event(Event::FiltersChanged(PayloadFiltersChanged {
                visible: self.map.filtered_count(),
                total: self.map.catalog().len(),
            }));
            meta.filter_revision = revision;
        }
    }

    #[cfg(feature = "events")]
    fn publish_event(&self, event: Event) {
        if let Some(sink) = self.events_sink {
            sink.send(event);
        }
    }
}

/// Last draw time of the widget with the given custom id, in milliseconds.
pub fn last_draw_time_ms(ui: &Ui, custom_id: Option<String>) -> f32 {
    Metadata::new(custom_id).load(ui).last_draw_time_ms
}
