//! Frontend Models
//!
//! Display-side structures produced from backend project cards.

use serde::{Deserialize, Serialize};

/// Person responsible for some part of a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsiblePerson {
    pub role: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub total: f64,
    pub residential: f64,
    pub commercial: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub promotions_count: u32,
    pub apartments_count: u32,
    pub residents_count: u32,
}

/// One column of an indicator (a building section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Name of the owning indicator, not of the section itself
    pub name: String,
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub sum: f64,
    pub section: Vec<Section>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjIndicators {
    pub size: usize,
    pub indicators: Vec<Indicator>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentLink {
    pub document_type: String,
    pub url: String,
}

/// Construction object (project card) as shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstructionObject {
    pub id: i64,
    /// Title with the city prefix removed
    pub project_name: String,
    pub residential_complex: String,
    pub city: String,
    pub full_address: String,
    pub start_date: String,
    pub end_date: String,
    pub last_update: String,
    pub status: String,
    pub project_indicators: ProjIndicators,
    pub area: Area,
    pub metrics: Metrics,
    pub responsible_persons: Vec<ResponsiblePerson>,
    pub related_projects: Vec<String>,
    pub document_links: Vec<DocumentLink>,
}

/// Roster entry loaded from the team spreadsheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonFromExcel {
    pub id: String,
    pub name: String,
    pub role: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl PersonFromExcel {
    /// Identity used when excluding people already picked elsewhere
    pub fn same_person(&self, other: &PersonFromExcel) -> bool {
        self.name == other.name && self.role == other.role && self.phone == other.phone
    }
}

impl From<&ResponsiblePerson> for PersonFromExcel {
    fn from(person: &ResponsiblePerson) -> Self {
        Self {
            id: String::new(),
            name: person.name.clone(),
            role: Some(person.role.clone()).filter(|r| !r.is_empty()),
            department: None,
            phone: person.phone.clone().filter(|p| !p.is_empty()),
            email: person.email.clone().filter(|e| !e.is_empty()),
        }
    }
}
