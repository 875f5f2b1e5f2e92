//! Roster Filtering
//!
//! Incremental lookup used by the person picker: exclusions, an exact role
//! filter and a free-text query, recomputed whenever any input changes.

use crate::models::PersonFromExcel;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFilter {
    pub query: String,
    /// Exact role to keep; empty keeps every role
    pub role: String,
}

impl PersonFilter {
    pub fn clear(&mut self) {
        self.query.clear();
        self.role.clear();
    }

    /// Visible roster entries, in roster order.
    pub fn apply(&self, roster: &[PersonFromExcel], exclude: &[PersonFromExcel]) -> Vec<PersonFromExcel> {
        let query = (!self.query.trim().is_empty()).then(|| self.query.to_lowercase());

        roster
            .iter()
            .filter(|person| !exclude.iter().any(|excluded| excluded.same_person(person)))
            .filter(|person| self.role.is_empty() || person.role.as_deref() == Some(self.role.as_str()))
            .filter(|person| query.as_deref().map_or(true, |q| matches_query(person, q)))
            .cloned()
            .collect()
    }
}

/// `query` must already be lowercased. Phones are compared as written.
fn matches_query(person: &PersonFromExcel, query: &str) -> bool {
    let folded = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|value| value.to_lowercase().contains(query))
    };

    person.name.to_lowercase().contains(query)
        || folded(&person.role)
        || folded(&person.department)
        || person.phone.as_deref().is_some_and(|phone| phone.contains(query))
        || folded(&person.email)
}

/// Plain text search over the whole roster; a blank query returns everyone.
pub fn search_people(roster: &[PersonFromExcel], query: &str) -> Vec<PersonFromExcel> {
    PersonFilter {
        query: query.to_string(),
        role: String::new(),
    }
    .apply(roster, &[])
}

/// Distinct non-blank roles, in first-seen order.
pub fn available_roles(roster: &[PersonFromExcel]) -> Vec<String> {
    let mut roles: Vec<String> = Vec::new();
    for role in roster.iter().filter_map(|p| p.role.as_deref()) {
        if !role.trim().is_empty() && !roles.iter().any(|r| r == role) {
            roles.push(role.to_string());
        }
    }
    roles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personnel::fallback_roster;
    use pretty_assertions::assert_eq;

    fn names(people: &[PersonFromExcel]) -> Vec<&str> {
        people.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_roster() {
        let roster = fallback_roster();
        assert_eq!(PersonFilter::default().apply(&roster, &[]), roster);
        assert_eq!(search_people(&roster, "  "), roster);
    }

    #[test]
    fn test_excluded_people_disappear_but_roster_is_untouched() {
        let roster = fallback_roster();
        let picked = vec![roster[1].clone()];

        let visible = PersonFilter::default().apply(&roster, &picked);
        assert_eq!(visible.len(), 4);
        assert!(!visible.iter().any(|p| p.name == roster[1].name));
        assert_eq!(roster.len(), 5);
    }

    #[test]
    fn test_exclusion_needs_name_role_and_phone() {
        let roster = fallback_roster();
        let mut namesake = roster[0].clone();
        namesake.phone = Some("+7 (000) 000-00-00".to_string());

        assert_eq!(PersonFilter::default().apply(&roster, &[namesake]).len(), 5);
    }

    #[test]
    fn test_role_filter_is_exact() {
        let roster = fallback_roster();
        let filter = PersonFilter {
            role: "Разработчик".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&roster, &[])), vec!["Сидоров Петр Александрович"]);

        let filter = PersonFilter {
            role: "разработчик".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&roster, &[]).is_empty());
    }

    #[test]
    fn test_query_matches_any_field() {
        let roster = fallback_roster();

        assert_eq!(names(&search_people(&roster, "ПЕТРОВА")), vec!["Петрова Анна Сергеевна"]);
        assert_eq!(
            names(&search_people(&roster, "отдел разработки")),
            vec!["Иванов Иван Иванович", "Сидоров Петр Александрович"]
        );
        assert_eq!(names(&search_people(&roster, "456-78")), vec!["Козлова Мария Дмитриевна"]);
        assert_eq!(names(&search_people(&roster, "MOROZOV@")), vec!["Морозов Алексей Владимирович"]);
    }

    #[test]
    fn test_role_and_query_combine() {
        let roster = fallback_roster();
        let mut filter = PersonFilter {
            query: "иван".to_string(),
            role: "Разработчик".to_string(),
        };
        assert!(filter.apply(&roster, &[]).is_empty());

        filter.clear();
        assert_eq!(filter.apply(&roster, &[]).len(), 5);
    }

    #[test]
    fn test_available_roles() {
        let mut roster = fallback_roster();
        roster.push(PersonFromExcel {
            id: "x".into(),
            name: "Новиков".into(),
            role: Some("Аналитик".into()),
            ..Default::default()
        });
        roster.push(PersonFromExcel {
            id: "y".into(),
            name: "Орлов".into(),
            role: Some("  ".into()),
            ..Default::default()
        });

        assert_eq!(
            available_roles(&roster),
            vec!["Руководитель проекта", "Аналитик", "Разработчик", "Дизайнер", "Тестировщик"]
        );
    }
}
