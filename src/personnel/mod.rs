//! Personnel Lookup
//!
//! Loads the team roster from a spreadsheet served next to the page. Each
//! candidate path is tried in turn; when none yields anyone, a built-in
//! sample roster is used instead.

mod filter;
mod parser;

use std::future::Future;

use url::Url;

use crate::api::{page_url, with_timeout};
use crate::config::DashboardConfig;
use crate::models::PersonFromExcel;

pub use filter::{available_roles, search_people, PersonFilter};
pub use parser::{parse_workbook, people_from_rows};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersonnelError {
    #[error("cannot resolve roster path {0:?}")]
    BadPath(String),
    #[error("roster request failed: {0}")]
    Fetch(String),
    #[error("roster request returned HTTP {0}")]
    Status(u16),
    #[error("unreadable workbook: {0}")]
    Workbook(String),
    #[error("workbook has no sheets")]
    EmptyWorkbook,
}

fn sample_person(id: &str, name: &str, role: &str, department: &str, phone: &str, email: &str) -> PersonFromExcel {
    PersonFromExcel {
        id: id.to_string(),
        name: name.to_string(),
        role: Some(role.to_string()),
        department: Some(department.to_string()),
        phone: Some(phone.to_string()),
        email: Some(email.to_string()),
    }
}

/// Roster used when no spreadsheet could be loaded.
pub fn fallback_roster() -> Vec<PersonFromExcel> {
    vec![
        sample_person(
            "test_1",
            "Иванов Иван Иванович",
            "Руководитель проекта",
            "Отдел разработки",
            "+7 (999) 123-45-67",
            "ivanov@company.com",
        ),
        sample_person(
            "test_2",
            "Петрова Анна Сергеевна",
            "Аналитик",
            "Отдел аналитики",
            "+7 (999) 234-56-78",
            "petrova@company.com",
        ),
        sample_person(
            "test_3",
            "Сидоров Петр Александрович",
            "Разработчик",
            "Отдел разработки",
            "+7 (999) 345-67-89",
            "sidorov@company.com",
        ),
        sample_person(
            "test_4",
            "Козлова Мария Дмитриевна",
            "Дизайнер",
            "Отдел дизайна",
            "+7 (999) 456-78-90",
            "kozlova@company.com",
        ),
        sample_person(
            "test_5",
            "Морозов Алексей Владимирович",
            "Тестировщик",
            "Отдел тестирования",
            "+7 (999) 567-89-01",
            "morozov@company.com",
        ),
    ]
}

/// Try each path in order; the first non-empty roster wins. Failures are
/// logged and skipped.
pub async fn load_first_available<F, Fut>(paths: &[String], mut fetch: F) -> Vec<PersonFromExcel>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Vec<PersonFromExcel>, PersonnelError>>,
{
    for path in paths {
        match fetch(path.clone()).await {
            Ok(people) if !people.is_empty() => {
                log::info!("loaded {} people from {}", people.len(), path);
                return people;
            }
            Ok(_) => log::debug!("roster at {} is empty", path),
            Err(e) => log::debug!("roster at {} unavailable: {}", path, e),
        }
    }

    log::info!("no roster spreadsheet found, using built-in sample");
    fallback_roster()
}

/// Resolve a roster path against the page URL.
pub fn resolve_resource(base: &Url, path: &str) -> Result<Url, PersonnelError> {
    base.join(path)
        .map_err(|_| PersonnelError::BadPath(path.to_string()))
}

async fn fetch_roster(
    client: &reqwest::Client,
    base: Option<&Url>,
    path: &str,
    timeout_ms: u32,
) -> Result<Vec<PersonFromExcel>, PersonnelError> {
    let base = base.ok_or_else(|| PersonnelError::BadPath(path.to_string()))?;
    let url = resolve_resource(base, path)?;

    let response = with_timeout(timeout_ms, client.get(url).send())
        .await
        .map_err(|e| PersonnelError::Fetch(e.to_string()))?
        .map_err(|e| PersonnelError::Fetch(e.to_string()))?;
    if !response.status().is_success() {
        return Err(PersonnelError::Status(response.status().as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| PersonnelError::Fetch(e.to_string()))?;
    parser::parse_workbook(bytes.to_vec())
}

/// Load the roster from the configured spreadsheet paths.
pub async fn load_roster(config: &DashboardConfig) -> Vec<PersonFromExcel> {
    let client = reqwest::Client::new();
    let base = page_url();
    let timeout_ms = config.request_timeout_ms;

    load_first_available(&config.personnel_paths, |path| {
        let client = client.clone();
        let base = base.clone();
        async move { fetch_roster(&client, base.as_ref(), &path, timeout_ms).await }
    })
    .await
}
