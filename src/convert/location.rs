//! Location Heuristics
//!
//! City, residential complex and display name are not separate backend
//! fields; they are recovered from free-text titles and addresses.

use regex::Regex;

use crate::constants::{DEFAULT_CITY, RESIDENTIAL_COMPLEXES};

const CITY_MARKER: &str = "г.";

/// Text after the first `г.` up to the next comma (or end), trimmed.
fn city_after_marker(text: &str) -> Option<&str> {
    let mut rest = text;
    while let Some(pos) = rest.find(CITY_MARKER) {
        let after = &rest[pos + CITY_MARKER.len()..];
        let candidate = after.split(',').next().unwrap_or_default();
        if !candidate.is_empty() {
            return Some(candidate.trim()).filter(|city| !city.is_empty());
        }
        rest = after;
    }
    None
}

/// City named in the title, else in the address, else the default city.
pub fn extract_city(title: &str, address: &str) -> String {
    city_after_marker(title)
        .or_else(|| city_after_marker(address))
        .unwrap_or(DEFAULT_CITY)
        .to_string()
}

/// First known complex contained in the title; falls back to the first entry.
pub fn resolve_residential_complex(title: &str) -> &'static str {
    RESIDENTIAL_COMPLEXES
        .iter()
        .copied()
        .find(|complex| title.contains(complex))
        .unwrap_or(RESIDENTIAL_COMPLEXES[0])
}

/// Strip the `г.<city>` prefix (with its trailing comma/spaces) from a title.
///
/// Names such as "ЖК Знак, корпус 1", "МЖД №3" are otherwise kept verbatim.
pub fn normalize_project_name(title: &str, city: &str) -> String {
    if title.is_empty() {
        return String::new();
    }

    let pattern = format!(r"(?i)г\.{}\s*,?\s*", regex::escape(city));
    let stripped = match Regex::new(&pattern) {
        Ok(re) => re.replace_all(title, "").into_owned(),
        Err(e) => {
            log::warn!("city pattern for {:?} rejected: {}", city, e);
            title.to_string()
        }
    };

    stripped
        .trim_matches(|c: char| c.is_whitespace() || c == ',')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_city_wins_over_address() {
        assert_eq!(
            extract_city("г.Ульяновск, ЖК Игикай", "г.Киров, ул. Ленина"),
            "Ульяновск"
        );
    }

    #[test]
    fn test_address_city_used_when_title_has_none() {
        assert_eq!(extract_city("ЖК Зарядное", "г.Ижевск, ул. Мира, 5"), "Ижевск");
    }

    #[test]
    fn test_city_defaults() {
        assert_eq!(extract_city("", ""), DEFAULT_CITY);
        assert_eq!(extract_city("ЖК Знак", "ул. Ленина"), DEFAULT_CITY);
    }

    #[test]
    fn test_city_without_trailing_comma() {
        assert_eq!(extract_city("Объект г.Киров", ""), "Киров");
    }

    #[test]
    fn test_blank_city_falls_through() {
        assert_eq!(extract_city("г. , ЖК Знак", "г.Ижевск"), "Ижевск");
    }

    #[test]
    fn test_complex_matching() {
        assert_eq!(resolve_residential_complex("г.Киров, ЖК Игикай, дом 2"), "ЖК Игикай");
        assert_eq!(
            resolve_residential_complex("ЖК Город Новаторов, очередь 1"),
            "ЖК Город Новаторов"
        );
        assert_eq!(resolve_residential_complex("МЖД №3"), "ЖК Знак");
    }

    #[test]
    fn test_normalize_strips_city_prefix() {
        assert_eq!(
            normalize_project_name("г.Киров, ЖК Знак, корпус 1", "Киров"),
            "ЖК Знак, корпус 1"
        );
        assert_eq!(normalize_project_name("г.Киров МЖД №3", "Киров"), "МЖД №3");
    }

    #[test]
    fn test_normalize_is_case_insensitive_and_city_specific() {
        assert_eq!(normalize_project_name("Г.КИРОВ, ЖК Знак", "Киров"), "ЖК Знак");
        assert_eq!(
            normalize_project_name("г.Ижевск, ЖК Знак", "Киров"),
            "г.Ижевск, ЖК Знак"
        );
    }

    #[test]
    fn test_normalize_trims_commas_and_spaces() {
        assert_eq!(normalize_project_name(" , ЖК Знак ,", "Киров"), "ЖК Знак");
        assert_eq!(normalize_project_name("", "Киров"), "");
    }
}
