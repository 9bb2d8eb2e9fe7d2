use rand::Rng;

use super::{Catalog, CelestialObject, ObjectType, Season, CONSTELLATIONS};

pub const GENERATED_CATALOG_SIZE: u32 = 150;

/// Entries below this index draw a random type, the rest are plain stars.
const TYPED_ENTRIES: u32 = 25;
/// Entries below this index belong to a random reference constellation.
const CONSTELLATION_ENTRIES: u32 = 30;

const GENERATED_TYPES: [ObjectType; 4] = [
    ObjectType::Star,
    ObjectType::Planet,
    ObjectType::Nebula,
    ObjectType::Galaxy,
];

pub const STAR_NAMES: [&str; 29] = [
    "Сириус",
    "Канопус",
    "Арктур",
    "Вега",
    "Капелла",
    "Ригель",
    "Процион",
    "Бетельгейзе",
    "Альтаир",
    "Альдебаран",
    "Антарес",
    "Спика",
    "Поллукс",
    "Фомальгаут",
    "Денеб",
    "Регул",
    "Кастор",
    "Шаула",
    "Беллатрикс",
    "Альнилам",
    "Минтака",
    "Дубхе",
    "Алиот",
    "Мицар",
    "Альбирео",
    "Садр",
    "Шедар",
    "Каф",
    "Нави",
];

/// Generates the classic procedural catalog.
///
/// All randomness is drawn from `rng`, so seeding it (for instance with
/// `StdRng::seed_from_u64`) yields the same catalog every time.
pub fn generate_catalog<R: Rng>(rng: &mut R) -> Catalog {
    let objects = (0..GENERATED_CATALOG_SIZE)
        .map(|i| generate_object(rng, i))
        .collect();

    Catalog::new(objects)
}

fn generate_object<R: Rng>(rng: &mut R, i: u32) -> CelestialObject {
    let kind = if i < TYPED_ENTRIES {
        GENERATED_TYPES[rng.random_range(0..GENERATED_TYPES.len())]
    } else {
        ObjectType::Star
    };

    let name = STAR_NAMES
        .get(i as usize)
        .map_or_else(|| format!("Звезда-{i}"), |n| (*n).to_string());

    let mut o = CelestialObject::new(
        i,
        name,
        rng.random_range(0. ..100.),
        rng.random_range(0. ..100.),
        rng.random_range(1. ..6.),
    )
    .with_kind(kind);

    if i < CONSTELLATION_ENTRIES {
        let c = &CONSTELLATIONS[rng.random_range(0..CONSTELLATIONS.len())];
        o = o.with_constellation(c.name);
    }

    o = o.with_season(Season::ALL[rng.random_range(0..Season::ALL.len())]);

    if kind != ObjectType::Star {
        o = o.with_description(format!("{} в созвездии", kind.label()));
    }

    o
}

/// Decorative point of the background star field.
///
/// Coordinates are in `[0, 100]` of a field twice the size of the viewport on
/// each axis, offset by half a viewport up and left, so the field still covers
/// the view after moderate panning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundStar {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
}

impl BackgroundStar {
    /// Position in viewport percent, i.e. the field mapped to `[-50, 150]`.
    pub fn viewport_percent(&self) -> (f32, f32) {
        (self.x * 2. - 50., self.y * 2. - 50.)
    }
}

pub fn background_stars<R: Rng>(rng: &mut R, count: usize) -> Vec<BackgroundStar> {
    (0..count)
        .map(|_| BackgroundStar {
            x: rng.random_range(0. ..100.),
            y: rng.random_range(0. ..100.),
            size: rng.random_range(0.5..2.),
            opacity: rng.random_range(0.2..0.9),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn generated_catalog_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let c = generate_catalog(&mut rng);

        assert_eq!(c.len(), GENERATED_CATALOG_SIZE as usize);
        for (i, o) in c.iter().enumerate() {
            assert_eq!(o.id.index() as usize, i);
            assert!(o.in_plane());
            assert!(o.brightness >= 1. && o.brightness < 6.);
            assert!(o.season.is_some());

            if i >= TYPED_ENTRIES as usize {
                assert_eq!(o.kind, ObjectType::Star);
            }
            assert_eq!(o.constellation.is_some(), i < CONSTELLATION_ENTRIES as usize);
            assert_eq!(o.description.is_some(), o.kind != ObjectType::Star);
        }

        assert_eq!(c.objects()[0].name, "Сириус");
        assert_eq!(c.objects()[28].name, "Нави");
        assert_eq!(c.objects()[29].name, "Звезда-29");
    }

    #[test]
    fn same_seed_same_catalog() {
        let a = generate_catalog(&mut StdRng::seed_from_u64(7));
        let b = generate_catalog(&mut StdRng::seed_from_u64(7));
        assert_eq!(a.objects(), b.objects());

        let c = generate_catalog(&mut StdRng::seed_from_u64(8));
        assert_ne!(a.objects(), c.objects());
    }

    #[test]
    fn background_is_deterministic_and_covers_wide_field() {
        let a = background_stars(&mut StdRng::seed_from_u64(1), 200);
        let b = background_stars(&mut StdRng::seed_from_u64(1), 200);
        assert_eq!(a, b);
        assert_eq!(a.len(), 200);

        for s in &a {
            let (vx, vy) = s.viewport_percent();
            assert!((-50. ..=150.).contains(&vx));
            assert!((-50. ..=150.).contains(&vy));
        }
    }
}
