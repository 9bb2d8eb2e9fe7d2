use super::{Catalog, Category, CelestialObject, ObjectType};

/// Authored catalog of the explorer map. Coordinates are hand placed on the
/// normalized plane.
pub fn explorer_catalog() -> Catalog {
    Catalog::new(vec![
        CelestialObject::new(1, "Сириус", 22., 64., 6.)
            .with_category(Category::Brightest)
            .with_constellation("Большой Пёс")
            .with_distance("8.6 св. лет")
            .with_magnitude(-1.46)
            .with_description("Ярчайшая звезда ночного неба, двойная система с белым карликом.")
            .with_facts([
                "Сириус B — один из первых открытых белых карликов",
                "Восход Сириуса отмечал начало разлива Нила",
            ]),
        CelestialObject::new(2, "Канопус", 14., 82., 5.8)
            .with_category(Category::Brightest)
            .with_constellation("Киль")
            .with_distance("310 св. лет")
            .with_magnitude(-0.74)
            .with_description("Вторая по яркости звезда неба, жёлто-белый яркий гигант.")
            .with_facts(["Используется космическими аппаратами для ориентации"]),
        CelestialObject::new(3, "Арктур", 58., 30., 5.5)
            .with_category(Category::Brightest)
            .with_constellation("Волопас")
            .with_distance("37 св. лет")
            .with_magnitude(-0.05)
            .with_description("Оранжевый гигант, ярчайшая звезда северного полушария неба."),
        CelestialObject::new(4, "Вега", 71., 18., 5.1)
            .with_category(Category::Brightest)
            .with_constellation("Лира")
            .with_distance("25 св. лет")
            .with_magnitude(0.03)
            .with_description("Бело-голубая звезда, вершина Летне-осеннего треугольника.")
            .with_facts([
                "Через 12 000 лет станет Полярной звездой",
                "Первая звезда после Солнца, сфотографированная в 1850 году",
            ]),
        CelestialObject::new(5, "Капелла", 40., 12., 5.)
            .with_category(Category::Brightest)
            .with_constellation("Возничий")
            .with_distance("43 св. лет")
            .with_magnitude(0.08)
            .with_description("Кратная система из двух жёлтых гигантов и пары красных карликов."),
        CelestialObject::new(6, "Ригель", 30., 48., 4.9)
            .with_category(Category::Brightest)
            .with_constellation("Орион")
            .with_distance("860 св. лет")
            .with_magnitude(0.13)
            .with_description("Голубой сверхгигант, самая яркая звезда Ориона."),
        CelestialObject::new(7, "Бетельгейзе", 35., 36., 4.7)
            .with_category(Category::Brightest)
            .with_constellation("Орион")
            .with_distance("550 св. лет")
            .with_magnitude(0.5)
            .with_description("Красный сверхгигант, кандидат во вспышку сверхновой.")
            .with_facts(["Диаметр превышает орбиту Марса"]),
        CelestialObject::new(8, "Процион", 26., 55., 4.6)
            .with_category(Category::Brightest)
            .with_constellation("Малый Пёс")
            .with_distance("11.5 св. лет")
            .with_magnitude(0.34)
            .with_description("Жёлто-белая звезда, одна из ближайших к Солнцу."),
        CelestialObject::new(9, "Альтаир", 80., 40., 4.5)
            .with_category(Category::Brightest)
            .with_constellation("Орёл")
            .with_distance("16.7 св. лет")
            .with_magnitude(0.76)
            .with_description("Быстро вращающаяся звезда, сплюснутая у полюсов."),
        CelestialObject::new(10, "Антарес", 62., 76., 4.4)
            .with_category(Category::Brightest)
            .with_constellation("Скорпион")
            .with_distance("550 св. лет")
            .with_magnitude(1.06)
            .with_description("Красный сверхгигант, «сердце Скорпиона»."),
        CelestialObject::new(11, "Полярная", 50., 4., 4.)
            .with_category(Category::Brightest)
            .with_constellation("Малая Медведица")
            .with_distance("430 св. лет")
            .with_magnitude(1.98)
            .with_description("Звезда у северного полюса мира, ориентир для навигации."),
        CelestialObject::new(12, "Венера", 46., 60., 6.)
            .with_kind(ObjectType::Planet)
            .with_category(Category::Planet)
            .with_distance("0.28–1.74 а.е.")
            .with_magnitude(-4.6)
            .with_description("Самая яркая планета, «утренняя и вечерняя звезда».")
            .with_facts(["Сутки на Венере длиннее года", "Вращается в обратную сторону"]),
        CelestialObject::new(13, "Марс", 54., 52., 4.2)
            .with_kind(ObjectType::Planet)
            .with_category(Category::Planet)
            .with_distance("0.37–2.68 а.е.")
            .with_magnitude(-2.9)
            .with_description("Красная планета с самым высоким вулканом Солнечной системы."),
        CelestialObject::new(14, "Юпитер", 66., 58., 5.6)
            .with_kind(ObjectType::Planet)
            .with_category(Category::Planet)
            .with_distance("3.95–6.45 а.е.")
            .with_magnitude(-2.94)
            .with_description("Газовый гигант, крупнейшая планета Солнечной системы.")
            .with_facts(["Большое красное пятно — шторм старше трёх веков"]),
        CelestialObject::new(15, "Сатурн", 76., 66., 4.8)
            .with_kind(ObjectType::Planet)
            .with_category(Category::Planet)
            .with_distance("8–11 а.е.")
            .with_magnitude(-0.55)
            .with_description("Планета с яркой системой колец из льда и камня."),
        CelestialObject::new(16, "Туманность Ориона", 32., 44., 3.8)
            .with_kind(ObjectType::Nebula)
            .with_category(Category::DeepSpace)
            .with_constellation("Орион")
            .with_distance("1 344 св. лет")
            .with_magnitude(4.)
            .with_description("Ближайшая к Земле область активного звездообразования.")
            .with_facts(["Видна невооружённым глазом как «средняя звезда» меча Ориона"]),
        CelestialObject::new(17, "Галактика Андромеды", 86., 22., 3.5)
            .with_kind(ObjectType::Galaxy)
            .with_category(Category::DeepSpace)
            .with_constellation("Андромеда")
            .with_distance("2.5 млн св. лет")
            .with_magnitude(3.44)
            .with_description("Ближайшая крупная спиральная галактика, сближается с Млечным Путём.")
            .with_facts(["Самый далёкий объект, видимый невооружённым глазом"]),
        CelestialObject::new(18, "Плеяды", 38., 24., 3.6)
            .with_kind(ObjectType::Cluster)
            .with_category(Category::DeepSpace)
            .with_constellation("Телец")
            .with_distance("444 св. лет")
            .with_magnitude(1.6)
            .with_description("Рассеянное звёздное скопление, «Семь сестёр»."),
        CelestialObject::new(19, "Крабовидная туманность", 44., 28., 2.6)
            .with_kind(ObjectType::Nebula)
            .with_category(Category::DeepSpace)
            .with_constellation("Телец")
            .with_distance("6 500 св. лет")
            .with_magnitude(8.4)
            .with_description("Остаток сверхновой 1054 года с пульсаром в центре."),
        CelestialObject::new(20, "Омега Центавра", 68., 88., 3.)
            .with_kind(ObjectType::Cluster)
            .with_category(Category::DeepSpace)
            .with_constellation("Центавр")
            .with_distance("17 000 св. лет")
            .with_magnitude(3.9)
            .with_description("Крупнейшее шаровое скопление Млечного Пути."),
        CelestialObject::new(21, "Галактика Водоворот", 56., 14., 2.4)
            .with_kind(ObjectType::Galaxy)
            .with_category(Category::DeepSpace)
            .with_constellation("Гончие Псы")
            .with_distance("23 млн св. лет")
            .with_magnitude(8.4)
            .with_description("Спиральная галактика, взаимодействующая с соседним спутником."),
    ])
}
