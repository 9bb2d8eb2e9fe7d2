use egui::{Pos2, Vec2};

use crate::catalog::CelestialObject;

/// Default hit-test tolerance, in normalized plane units, on both axes.
pub const DEFAULT_TOLERANCE: Vec2 = Vec2::new(2., 2.);

/// Converts a pointer offset inside the widget (pixels, origin at the widget's
/// top-left corner) into normalized plane coordinates.
pub fn normalize_pointer(local: Pos2, size: Vec2) -> Pos2 {
    Pos2::new(local.x / size.x * 100., local.y / size.y * 100.)
}

/// Inverse of [`normalize_pointer`].
pub fn denormalize(point: Pos2, size: Vec2) -> Pos2 {
    Pos2::new(point.x / 100. * size.x, point.y / 100. * size.y)
}

/// Returns the first object lying strictly within `tolerance` of `point` on
/// both axes. Overlapping objects resolve to the one that comes first.
pub fn hit_test<'a, I>(objects: I, point: Pos2, tolerance: Vec2) -> Option<&'a CelestialObject>
where
    I: IntoIterator<Item = &'a CelestialObject>,
{
    objects
        .into_iter()
        .find(|o| (o.x - point.x).abs() < tolerance.x && (o.y - point.y).abs() < tolerance.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objects() -> Vec<CelestialObject> {
        vec![
            CelestialObject::new(0, "Вега", 40., 40., 5.1),
            CelestialObject::new(1, "Альтаир", 41., 41., 4.5),
            CelestialObject::new(2, "Денеб", 80., 10., 4.),
        ]
    }

    #[test]
    fn pointer_normalization() {
        let p = normalize_pointer(Pos2::new(200., 50.), Vec2::new(800., 500.));
        assert_eq!(p, Pos2::new(25., 10.));
        assert_eq!(denormalize(p, Vec2::new(800., 500.)), Pos2::new(200., 50.));
    }

    #[test]
    fn exact_position_hits() {
        let objs = objects();
        let hit = hit_test(&objs, Pos2::new(80., 10.), DEFAULT_TOLERANCE).unwrap();
        assert_eq!(hit.name, "Денеб");
    }

    #[test]
    fn outside_tolerance_misses() {
        let objs = objects();
        assert!(hit_test(&objs, Pos2::new(83., 10.), DEFAULT_TOLERANCE).is_none());
        assert!(hit_test(&objs, Pos2::new(80., 12.), DEFAULT_TOLERANCE).is_none());
    }

    #[test]
    fn overlap_resolves_to_first() {
        let objs = objects();
        let hit = hit_test(&objs, Pos2::new(40.5, 40.5), DEFAULT_TOLERANCE).unwrap();
        assert_eq!(hit.name, "Вега");

        let hit = hit_test(objs.iter().rev(), Pos2::new(40.5, 40.5), DEFAULT_TOLERANCE).unwrap();
        assert_eq!(hit.name, "Альтаир");
    }
}
