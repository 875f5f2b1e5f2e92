//! Roster Spreadsheet Parsing
//!
//! Row 1 holds headers, every later row is a person. Column order is not
//! fixed: the first column is the name, the rest are classified by header
//! keywords.

use std::io::Cursor;

use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};

use super::PersonnelError;
use crate::models::PersonFromExcel;

const ROLE_KEYWORDS: &[&str] = &["должность", "роль", "позиция", "position", "должн"];
const DEPARTMENT_KEYWORDS: &[&str] = &[
    "отдел",
    "департамент",
    "подразделение",
    "department",
    "команда",
    "team",
];
const PHONE_KEYWORDS: &[&str] = &["телефон", "тел", "phone", "мобильный", "контакт"];
const EMAIL_KEYWORDS: &[&str] = &["почта", "email", "e-mail", "mail", "электронная почта"];
const NAME_KEYWORDS: &[&str] = &["имя", "фио", "фамилия", "name", "ф.и.о", "полное имя"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Name,
    Role,
    Department,
    Phone,
    Email,
    /// Name column used only while no name has been found
    NameFallback,
    Ignored,
}

fn classify_header(index: usize, header: &str) -> Column {
    if index == 0 {
        return Column::Name;
    }

    let header = header.to_lowercase();
    let has = |keywords: &[&str]| keywords.iter().any(|k| header.contains(k));
    if has(ROLE_KEYWORDS) {
        Column::Role
    } else if has(DEPARTMENT_KEYWORDS) {
        Column::Department
    } else if has(PHONE_KEYWORDS) {
        Column::Phone
    } else if has(EMAIL_KEYWORDS) {
        Column::Email
    } else if has(NAME_KEYWORDS) {
        Column::NameFallback
    } else {
        Column::Ignored
    }
}

/// Build roster entries from a grid of trimmed cell texts.
///
/// Blank rows are skipped before ids are assigned; rows without a name are
/// dropped afterwards.
pub fn people_from_rows(rows: &[Vec<String>]) -> Vec<PersonFromExcel> {
    let Some((headers, records)) = rows.split_first() else {
        return Vec::new();
    };
    if headers.is_empty() {
        return Vec::new();
    }
    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| classify_header(i, h))
        .collect();

    records
        .iter()
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .enumerate()
        .map(|(index, row)| {
            let mut person = PersonFromExcel {
                id: format!("person_{}", index),
                ..Default::default()
            };
            for (column, value) in columns.iter().zip(row) {
                if value.is_empty() {
                    continue;
                }
                let value = value.clone();
                match column {
                    Column::Name => person.name = value,
                    Column::Role => person.role = Some(value),
                    Column::Department => person.department = Some(value),
                    Column::Phone => person.phone = Some(value),
                    Column::Email => person.email = Some(value),
                    Column::NameFallback if person.name.is_empty() => person.name = value,
                    Column::NameFallback | Column::Ignored => {}
                }
            }
            person
        })
        .filter(|person| !person.name.is_empty())
        .collect()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

/// Parse the first sheet of an xlsx workbook.
pub fn parse_workbook(bytes: Vec<u8>) -> Result<Vec<PersonFromExcel>, PersonnelError> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))
        .map_err(|e: calamine::XlsxError| PersonnelError::Workbook(e.to_string()))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(PersonnelError::EmptyWorkbook)?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| PersonnelError::Workbook(e.to_string()))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    Ok(people_from_rows(&rows))
}
