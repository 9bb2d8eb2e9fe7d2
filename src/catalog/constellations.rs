use serde::Serialize;

use super::Season;

/// Reference entry for the constellation directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constellation {
    pub name: &'static str,
    pub stars: u32,
    pub season: Season,
    pub description: &'static str,
    pub main_stars: &'static [&'static str],
}

pub static CONSTELLATIONS: [Constellation; 6] = [
    Constellation {
        name: "Большая Медведица",
        stars: 7,
        season: Season::AllYear,
        description: "Одно из самых узнаваемых созвездий северного полушария. Содержит знаменитый астеризм \"Большой Ковш\".",
        main_stars: &["Дубхе", "Мерак", "Фекда", "Мегрец", "Алиот", "Мицар", "Бенетнаш"],
    },
    Constellation {
        name: "Орион",
        stars: 7,
        season: Season::Winter,
        description: "Яркое экваториальное созвездие, известное поясом Ориона из трёх звёзд и туманностью Ориона.",
        main_stars: &["Бетельгейзе", "Ригель", "Беллатрикс", "Альнилам", "Минтака"],
    },
    Constellation {
        name: "Кассиопея",
        stars: 5,
        season: Season::Autumn,
        description: "Созвездие в форме буквы \"W\", названное в честь мифической царицы Эфиопии.",
        main_stars: &["Шедар", "Каф", "Нави", "Рукбах", "Сегин"],
    },
    Constellation {
        name: "Лебедь",
        stars: 5,
        season: Season::Summer,
        description: "Крестообразное созвездие, представляющее летящего лебедя. Содержит яркую звезду Денеб.",
        main_stars: &["Денеб", "Альбирео", "Садр", "Гиенах"],
    },
    Constellation {
        name: "Лев",
        stars: 9,
        season: Season::Spring,
        description: "Зодиакальное созвездие, представляющее льва. Главная звезда — Регул.",
        main_stars: &["Регул", "Денебола", "Альгиеба", "Зосма"],
    },
    Constellation {
        name: "Скорпион",
        stars: 18,
        season: Season::Summer,
        description: "Яркое зодиакальное созвездие с красной звездой Антарес в центре.",
        main_stars: &["Антарес", "Шаула", "Саргас", "Акраб"],
    },
];

/// Constellations best seen in each season, for the seasonal visibility guide.
pub fn seasonal_guide(season: Season) -> &'static [&'static str] {
    match season {
        Season::Winter => &["Орион", "Телец", "Близнецы"],
        Season::Spring => &["Лев", "Дева", "Волопас"],
        Season::Summer => &["Лебедь", "Скорпион", "Стрелец"],
        Season::Autumn => &["Кассиопея", "Пегас", "Андромеда"],
        Season::AllYear => &["Большая Медведица", "Малая Медведица"],
    }
}

pub fn constellation_by_name(name: &str) -> Option<&'static Constellation> {
    CONSTELLATIONS.iter().find(|c| c.name == name)
}
