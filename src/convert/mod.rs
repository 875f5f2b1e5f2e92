//! View-Model Conversion
//!
//! Maps raw backend project cards to [`ConstructionObject`]s. Conversion never
//! fails: malformed numbers become 0, unmatched heuristics fall back to
//! defaults, and fields the backend does not provide are zero-filled.

mod encoding;
mod indicators;
mod location;

use crate::api::{ApiDocumentLink, ApiProjectCard, ApiResponsiblePerson};
use crate::models::{Area, ConstructionObject, DocumentLink, Metrics, ResponsiblePerson};

pub use encoding::{fix_encoding, MOJIBAKE_MARKER};
pub use indicators::{convert_indicators, parse_decimal, unit_for_indicator};
pub use location::{extract_city, normalize_project_name, resolve_residential_complex};

fn non_empty(text: String) -> Option<String> {
    Some(text).filter(|t| !t.is_empty())
}

pub fn convert_responsible_person(person: &ApiResponsiblePerson) -> ResponsiblePerson {
    ResponsiblePerson {
        role: fix_encoding(&person.position),
        name: fix_encoding(&person.fio),
        phone: non_empty(fix_encoding(&person.phone)),
        email: non_empty(fix_encoding(&person.email)),
        comment: non_empty(fix_encoding(&person.description)),
    }
}

pub fn convert_document_links(links: &[ApiDocumentLink]) -> Vec<DocumentLink> {
    links
        .iter()
        .map(|link| DocumentLink {
            document_type: fix_encoding(&link.document_type),
            url: link.url.clone(),
        })
        .collect()
}

/// Leading integer of an id string ("17", " 17a"), else 0.
fn parse_id(raw: &str) -> i64 {
    let text = raw.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    text[..sign_len + digits].parse().unwrap_or(0)
}

/// Convert one card, stamping `last_update` with the given date.
pub fn convert_project_card(card: &ApiProjectCard, last_update: &str) -> ConstructionObject {
    let title = fix_encoding(&card.title);
    let address = fix_encoding(&card.address);
    let status = fix_encoding(&card.status);

    let city = extract_city(&title, &address);
    let residential_complex = resolve_residential_complex(&title);
    let project_name = normalize_project_name(&title, &city);

    log::debug!(
        "parsed project {:?}: city={:?} complex={:?} name={:?}",
        card.id,
        city,
        residential_complex,
        project_name
    );

    ConstructionObject {
        id: parse_id(&card.id),
        project_name,
        residential_complex: residential_complex.to_string(),
        city,
        full_address: address,
        start_date: card.start_date.clone(),
        end_date: card.end_date.clone(),
        last_update: last_update.to_string(),
        status,
        project_indicators: convert_indicators(&card.indicators),
        // not provided by the backend
        area: Area::default(),
        metrics: Metrics::default(),
        responsible_persons: card
            .responsible_persons
            .iter()
            .map(convert_responsible_person)
            .collect(),
        related_projects: Vec::new(),
        document_links: convert_document_links(&card.document_links),
    }
}

/// Convert a fetch response, preserving order.
pub fn convert_project_cards(cards: &[ApiProjectCard]) -> Vec<ConstructionObject> {
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let converted: Vec<ConstructionObject> = cards
        .iter()
        .map(|card| convert_project_card(card, &today))
        .collect();

    log::info!("converted {} project cards", converted.len());
    converted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_CITY, RESIDENTIAL_COMPLEXES};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn card(value: serde_json::Value) -> ApiProjectCard {
        serde_json::from_value(value).unwrap()
    }

    fn garble(text: &str) -> String {
        text.bytes().map(char::from).collect()
    }

    #[test]
    fn test_empty_card_converts_to_defaults() {
        let object = convert_project_card(&ApiProjectCard::default(), "2026-10-17");

        assert_eq!(object.id, 0);
        assert_eq!(object.project_name, "");
        assert_eq!(object.city, DEFAULT_CITY);
        assert_eq!(object.residential_complex, RESIDENTIAL_COMPLEXES[0]);
        assert_eq!(object.full_address, "");
        assert_eq!(object.status, "");
        assert_eq!(object.last_update, "2026-10-17");
        assert_eq!(object.area, Area::default());
        assert_eq!(object.metrics, Metrics::default());
        assert_eq!(object.project_indicators.size, 0);
        assert!(object.responsible_persons.is_empty());
        assert!(object.related_projects.is_empty());
        assert!(object.document_links.is_empty());
    }

    #[test]
    fn test_full_card() {
        let object = convert_project_card(
            &card(json!({
                "id": "17",
                "title": "г.Ульяновск, ЖК Игикай, дом 2",
                "address": "г.Киров, ул. Ленина, 1",
                "startDate": "2023-01-10",
                "endDate": "2025-06-30",
                "status": "Строительство",
                "indicators": { "Площадь застройки": { "total": "123,45", "s1": "100" } },
                "responsiblePersons": [
                    { "fio": "Иванов И.И.", "position": "ГИП", "phone": "+7 900 000-00-00", "email": "", "description": "" }
                ],
                "documentLinks": [ { "documentType": "РД", "url": "https://docs.google.com/d/1" } ]
            })),
            "2026-10-17",
        );

        assert_eq!(object.id, 17);
        assert_eq!(object.city, "Ульяновск");
        assert_eq!(object.residential_complex, "ЖК Игикай");
        assert_eq!(object.project_name, "ЖК Игикай, дом 2");
        assert_eq!(object.full_address, "г.Киров, ул. Ленина, 1");
        assert_eq!(object.start_date, "2023-01-10");
        assert_eq!(object.project_indicators.indicators[0].sum, 123.45);
        assert_eq!(
            object.responsible_persons,
            vec![ResponsiblePerson {
                role: "ГИП".into(),
                name: "Иванов И.И.".into(),
                phone: Some("+7 900 000-00-00".into()),
                email: None,
                comment: None,
            }]
        );
        assert_eq!(object.document_links[0].url, "https://docs.google.com/d/1");
    }

    #[test]
    fn test_garbled_fields_are_repaired_before_parsing() {
        let object = convert_project_card(
            &card(json!({
                "title": garble("г.Ижевск, ЖК Зарядное"),
                "status": garble("Сдан"),
                "responsiblePersons": [ { "fio": garble("Петрова А.С."), "position": garble("Аналитик") } ],
                "documentLinks": [ { "documentType": garble("Проект"), "url": "x" } ]
            })),
            "2026-10-17",
        );

        assert_eq!(object.city, "Ижевск");
        assert_eq!(object.residential_complex, "ЖК Зарядное");
        assert_eq!(object.project_name, "ЖК Зарядное");
        assert_eq!(object.status, "Сдан");
        assert_eq!(object.responsible_persons[0].name, "Петрова А.С.");
        assert_eq!(object.responsible_persons[0].role, "Аналитик");
        assert_eq!(object.document_links[0].document_type, "Проект");
    }

    #[test]
    fn test_id_parsing() {
        assert_eq!(parse_id("42"), 42);
        assert_eq!(parse_id(" 7abc"), 7);
        assert_eq!(parse_id("-3"), -3);
        assert_eq!(parse_id("abc"), 0);
        assert_eq!(parse_id(""), 0);
    }

    #[test]
    fn test_batch_conversion_preserves_order() {
        let cards = vec![
            card(json!({ "id": "3", "title": "г.Киров, ЖК Знак" })),
            card(json!({ "id": "1", "title": "г.Ижевск, ЖК Игикай" })),
            card(json!({ "id": "2" })),
        ];

        let objects = convert_project_cards(&cards);
        let ids: Vec<i64> = objects.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(objects[0].last_update.len(), 10);
    }

    #[test]
    fn test_last_update_uses_local_date() {
        let local_today = || chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
        let before = local_today();
        let objects = convert_project_cards(&[card(json!({ "id": "5" }))]);
        let after = local_today();

        assert!(objects[0].last_update == before || objects[0].last_update == after);
    }
}
