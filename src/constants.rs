//! Fixed Enumerations
//!
//! Closed lists the dashboard matches backend text against.

/// Known residential complexes, in matching priority order.
/// The first entry doubles as the fallback when a title matches none.
pub const RESIDENTIAL_COMPLEXES: [&str; 4] = [
    "ЖК Знак",
    "ЖК Игикай",
    "ЖК Зарядное",
    "ЖК Город Новаторов",
];

/// Cities always offered in the city selector.
pub const CITIES: [&str; 3] = ["Киров", "Ульяновск", "Ижевск"];

/// City assumed when neither title nor address names one.
pub const DEFAULT_CITY: &str = "Киров";

/// Selector value meaning "no filter".
pub const ALL_OPTION: &str = "all";

/// Row labels for the indicators table when an indicator carries no section name.
pub const DEFAULT_INDICATOR_NAMES: [&str; 17] = [
    "Площадь застройки",
    "Количество этажей",
    "Этажность здания",
    "Строительный объем",
    "Общая площадь здания",
    "Площадь квартир",
    "Количество квартир (общее)",
    "Студии",
    "1-комнатные",
    "2-комнатные",
    "3-комнатные",
    "4-комнатные",
    "Количество кладовых",
    "Площадь кладовых",
    "Площадь коммерческих помещений",
    "Высота этажа жилой части",
    "Высота здания",
];

/// District shown when an address has no second comma-separated part.
pub const DEFAULT_DISTRICT: &str = "Центральный район";
