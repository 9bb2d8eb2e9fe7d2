use egui::{Pos2, Vec2};
use egui_starmap::{
    catalog::explorer_catalog, hit_test, normalize_pointer, CelestialObject, ObjectId, PanState,
    ViewState, DEFAULT_TOLERANCE,
};

#[test]
fn hit_at_exact_position_selects() {
    let objects = vec![
        CelestialObject::new(1, "a", 40., 40., 3.),
        CelestialObject::new(2, "b", 60., 60., 3.),
    ];

    let hit = hit_test(&objects, Pos2::new(60., 60.), DEFAULT_TOLERANCE);
    assert_eq!(hit.map(|o| o.id), Some(ObjectId(2)));

    assert!(hit_test(&objects, Pos2::new(63., 60.), DEFAULT_TOLERANCE).is_none());
}

#[test]
fn hit_from_pointer_pixels() {
    let objects = vec![CelestialObject::new(1, "a", 25., 50., 3.)];
    let size = Vec2::new(800., 400.);

    let point = normalize_pointer(Pos2::new(200., 200.), size);
    assert!(hit_test(&objects, point, DEFAULT_TOLERANCE).is_some());

    let point = normalize_pointer(Pos2::new(224., 200.), size);
    assert!(hit_test(&objects, point, DEFAULT_TOLERANCE).is_none());
}

#[test]
fn pan_moves_are_absolute_from_start() {
    let start = PanState::with_offset(Vec2::new(10., 10.)).begin(Pos2::new(100., 100.));

    let direct = start.drag_to(Pos2::new(150., 80.));
    let stepped = start
        .drag_to(Pos2::new(120., 90.))
        .drag_to(Pos2::new(300., 300.))
        .drag_to(Pos2::new(150., 80.));

    assert_eq!(direct.offset, Vec2::new(60., -10.));
    assert_eq!(direct.offset, stepped.offset);
}

#[test]
fn release_stops_following_pointer() {
    let s = PanState::default()
        .begin(Pos2::ZERO)
        .drag_to(Pos2::new(5., 5.))
        .end()
        .drag_to(Pos2::new(50., 50.));
    assert_eq!(s.offset, Vec2::new(5., 5.));
    assert!(!s.is_panning());
}

#[test]
fn center_always_returns_to_origin() {
    let states = [
        PanState::default(),
        PanState::with_offset(Vec2::new(-300., 12.)),
        PanState::default().begin(Pos2::ZERO).drag_to(Pos2::new(7., 9.)),
        PanState::default().wheel(-1000.),
    ];
    for s in states {
        assert_eq!(s.centered().offset, Vec2::ZERO);
    }
}

#[test]
fn suggestion_pick_lands_object_in_center() {
    let catalog = explorer_catalog();
    let vega = catalog.iter().find(|o| o.name == "Вега").unwrap();
    let viewport = Vec2::new(900., 600.);

    let s = ViewState::<egui_starmap::Category>::default()
        .with_search("ве")
        .pick_suggestion(vega, viewport);

    let screen = Pos2::new(vega.x / 100. * viewport.x, vega.y / 100. * viewport.y) + s.pan.offset;
    assert!((screen - (viewport / 2.).to_pos2()).length() < 1e-3);
    assert_eq!(s.selected, Some(vega.id));
    assert!(s.criteria.search.is_empty());
}
