use std::fmt;

use serde::{Deserialize, Serialize};

const DEFAULT_DESCRIPTION: &str = "Небесный объект, видимый в ночном небе.";

/// Stable identifier of a catalog entry. Never reused within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u32);

impl ObjectId {
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of a celestial object. Determines marker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectType {
    Star,
    Planet,
    Nebula,
    Galaxy,
    Cluster,
}

impl ObjectType {
    pub const ALL: [ObjectType; 5] = [
        ObjectType::Star,
        ObjectType::Planet,
        ObjectType::Nebula,
        ObjectType::Galaxy,
        ObjectType::Cluster,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ObjectType::Star => "Звезда",
            ObjectType::Planet => "Планета",
            ObjectType::Nebula => "Туманность",
            ObjectType::Galaxy => "Галактика",
            ObjectType::Cluster => "Скопление",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ObjectType::Star => "⭐",
            ObjectType::Planet => "🪐",
            ObjectType::Nebula => "🌸",
            ObjectType::Galaxy => "🌌",
            ObjectType::Cluster => "✨",
        }
    }
}

/// Side-panel grouping used by the explorer catalog, independent of [`ObjectType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Brightest,
    Planet,
    DeepSpace,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Brightest, Category::Planet, Category::DeepSpace];

    pub fn label(self) -> &'static str {
        match self {
            Category::Brightest => "Яркие звёзды",
            Category::Planet => "Планеты",
            Category::DeepSpace => "Глубокий космос",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
    AllYear,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Winter,
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::AllYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Season::Winter => "Зима",
            Season::Spring => "Весна",
            Season::Summer => "Лето",
            Season::Autumn => "Осень",
            Season::AllYear => "Весь год",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Season::Winter => "❄️",
            Season::Spring => "🌸",
            Season::Summer => "☀️",
            Season::Autumn => "🍂",
            Season::AllYear => "🌍",
        }
    }
}

/// One catalog entry.
///
/// `x` and `y` are normalized plane coordinates in `[0, 100]`, i.e. percent of the
/// viewport width and height. Optional metadata is treated as "nothing to show"
/// when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialObject {
    pub id: ObjectId,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub brightness: f32,
    #[serde(rename = "type")]
    pub kind: ObjectType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constellation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facts: Vec<String>,
}

impl CelestialObject {
    pub fn new(id: u32, name: impl Into<String>, x: f32, y: f32, brightness: f32) -> Self {
        Self {
            id: ObjectId(id),
            name: name.into(),
            x,
            y,
            brightness,
            kind: ObjectType::Star,

            category: None,
            constellation: None,
            season: None,
            distance: None,
            magnitude: None,
            description: None,
            facts: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: ObjectType) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_constellation(mut self, constellation: impl Into<String>) -> Self {
        self.constellation = Some(constellation.into());
        self
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn with_distance(mut self, distance: impl Into<String>) -> Self {
        self.distance = Some(distance.into());
        self
    }

    pub fn with_magnitude(mut self, magnitude: f32) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_facts<I, S>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facts = facts.into_iter().map(Into::into).collect();
        self
    }

    /// Description shown in the details panel, with the generic fallback text.
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }

    pub fn in_plane(&self) -> bool {
        (0. ..=100.).contains(&self.x) && (0. ..=100.).contains(&self.y)
    }
}
