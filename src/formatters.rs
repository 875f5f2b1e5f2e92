//! Display Formatting
//!
//! Helpers for the details panel and indicators table.

use crate::constants::{DEFAULT_DISTRICT, DEFAULT_INDICATOR_NAMES};
use crate::models::{Indicator, ProjIndicators};

/// Table cell text: "-" for zero, integers as-is, otherwise two decimals
/// with a comma separator.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        "-".to_string()
    } else if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        format!("{:.2}", value).replace('.', ",")
    }
}

/// Row label: the indicator's own name when known, else the default name
/// for its position.
pub fn indicator_name(indicator: &Indicator, index: usize) -> String {
    match indicator.section.first() {
        Some(section) if !section.name.is_empty() => section.name.clone(),
        _ => DEFAULT_INDICATOR_NAMES
            .get(index)
            .map(|name| name.to_string())
            .unwrap_or_else(|| format!("Показатель {}", index + 1)),
    }
}

pub fn section_headers(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Секция №{}", i)).collect()
}

/// Widest indicator, i.e. the number of section columns the table needs.
pub fn max_sections(indicators: &ProjIndicators) -> usize {
    indicators
        .indicators
        .iter()
        .map(|i| i.section.len())
        .max()
        .unwrap_or(0)
}

pub fn find_indicator_by_name<'a>(indicators: &'a ProjIndicators, name: &str) -> Option<&'a Indicator> {
    let needle = name.to_lowercase();
    indicators.indicators.iter().find(|indicator| {
        indicator
            .section
            .iter()
            .any(|section| section.name.to_lowercase().contains(&needle))
    })
}

pub fn indicator_value(indicators: &ProjIndicators, name: &str) -> Option<f64> {
    find_indicator_by_name(indicators, name).map(|i| i.sum)
}

/// "1200,5 м²"-style text; `None` when the indicator is missing or zero.
pub fn indicator_value_with_unit(indicators: &ProjIndicators, name: &str) -> Option<String> {
    let indicator = find_indicator_by_name(indicators, name)?;
    if indicator.sum == 0.0 {
        return None;
    }

    let value = format_value(indicator.sum);
    Some(match indicator.section.first().map(|s| s.unit.as_str()) {
        Some(unit) if !unit.is_empty() => format!("{} {}", value, unit),
        _ => value,
    })
}

pub fn is_web_resource(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Icon by document kind, guessed from the link text.
pub fn resource_icon(url: &str) -> &'static str {
    if url.contains("docs.google.com") {
        "📄"
    } else if url.contains("autocad") || url.contains("dwg") {
        "📐"
    } else if url.contains("1c") {
        "💼"
    } else if url.contains("pdf") {
        "📋"
    } else {
        "🔗"
    }
}

/// Second comma-separated part of an address.
pub fn extract_district(full_address: &str) -> String {
    full_address
        .split(',')
        .nth(1)
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_DISTRICT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;

    fn indicator(name: &str, sum: f64, unit: &str, sections: usize) -> Indicator {
        Indicator {
            sum,
            section: (0..sections)
                .map(|_| Section {
                    name: name.to_string(),
                    value: sum / sections as f64,
                    unit: unit.to_string(),
                })
                .collect(),
        }
    }

    fn sample() -> ProjIndicators {
        let indicators = vec![
            indicator("Площадь застройки", 1200.5, "м²", 2),
            indicator("Количество этажей", 9.0, "эт.", 3),
            indicator("Студии", 0.0, "шт", 1),
        ];
        ProjIndicators {
            size: indicators.len(),
            indicators,
        }
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.0), "-");
        assert_eq!(format_value(12.0), "12");
        assert_eq!(format_value(123.456), "123,46");
        assert_eq!(format_value(0.5), "0,50");
    }

    #[test]
    fn test_indicator_name_fallbacks() {
        let named = indicator("Высота здания", 30.0, "м", 1);
        assert_eq!(indicator_name(&named, 0), "Высота здания");

        let unnamed = Indicator::default();
        assert_eq!(indicator_name(&unnamed, 0), "Площадь застройки");
        assert_eq!(indicator_name(&unnamed, 16), "Высота здания");
        assert_eq!(indicator_name(&unnamed, 17), "Показатель 18");
    }

    #[test]
    fn test_section_headers() {
        assert_eq!(section_headers(2), vec!["Секция №1", "Секция №2"]);
        assert_eq!(max_sections(&sample()), 3);
        assert_eq!(max_sections(&ProjIndicators::default()), 0);
    }

    #[test]
    fn test_indicator_lookup() {
        let indicators = sample();
        assert_eq!(indicator_value(&indicators, "этажей"), Some(9.0));
        assert_eq!(indicator_value(&indicators, "Высота"), None);
        assert_eq!(
            indicator_value_with_unit(&indicators, "площадь"),
            Some("1200,50 м²".to_string())
        );
        assert_eq!(indicator_value_with_unit(&indicators, "Студии"), None);
    }

    #[test]
    fn test_resources_and_district() {
        assert!(is_web_resource("https://docs.google.com/x"));
        assert!(!is_web_resource("\\\\server\\share\\plan.dwg"));
        assert_eq!(extract_district("г.Киров, Ленинский район, ул. Мира"), "Ленинский район");
        assert_eq!(extract_district("ул. Мира"), DEFAULT_DISTRICT);
    }

    #[test]
    fn test_resource_icon_by_document_kind() {
        assert_eq!(resource_icon("https://docs.google.com/spreadsheets/d/1"), "📄");
        assert_eq!(resource_icon("\\\\server\\share\\plan.dwg"), "📐");
        assert_eq!(resource_icon("https://autocad.com/share/42"), "📐");
        assert_eq!(resource_icon("https://portal.1c.ru/doc/7"), "💼");
        assert_eq!(resource_icon("https://files.local/passport.pdf"), "📋");
        assert_eq!(resource_icon("https://example.com/page"), "🔗");
    }
}
