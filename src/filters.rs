//! Object Filtering
//!
//! Free-text, city and residential complex filters over the working set.
//! All three clauses must pass; an empty clause passes everything.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::{ALL_OPTION, CITIES, RESIDENTIAL_COMPLEXES};
use crate::models::ConstructionObject;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub city: String,
    pub residential_complex: String,
    pub search_query: String,
}

impl FilterState {
    /// Select a city ("all" clears it). Complex choices are per city, so the
    /// complex selection is always cleared.
    pub fn set_city(&mut self, city: &str) {
        self.city = if city == ALL_OPTION { String::new() } else { city.to_string() };
        self.residential_complex.clear();
    }

    pub fn set_residential_complex(&mut self, complex: &str) {
        self.residential_complex = if complex == ALL_OPTION {
            String::new()
        } else {
            complex.to_string()
        };
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.residential_complex.is_empty() && self.search_query.is_empty()
    }
}

/// Lowercased text the search clause matches against.
fn searchable_text(object: &ConstructionObject) -> String {
    let mut parts: Vec<&str> = vec![
        object.project_name.as_str(),
        object.residential_complex.as_str(),
        object.city.as_str(),
        object.full_address.as_str(),
        object.status.as_str(),
    ];
    parts.extend(object.responsible_persons.iter().map(|p| p.name.as_str()));
    parts.join(" ").to_lowercase()
}

pub fn matches_filters(object: &ConstructionObject, filters: &FilterState) -> bool {
    let matches_search = filters.search_query.is_empty()
        || searchable_text(object).contains(&filters.search_query.to_lowercase());
    let matches_city = filters.city.is_empty() || object.city == filters.city;
    let matches_complex = filters.residential_complex.is_empty()
        || object.residential_complex == filters.residential_complex;

    matches_search && matches_city && matches_complex
}

/// Objects passing every clause, in input order.
pub fn filter_objects(objects: &[ConstructionObject], filters: &FilterState) -> Vec<ConstructionObject> {
    let filtered: Vec<ConstructionObject> = objects
        .iter()
        .filter(|object| matches_filters(object, filters))
        .cloned()
        .collect();

    log::debug!("filter {:?}: {} of {} objects", filters, filtered.len(), objects.len());
    filtered
}

/// Cities for the city selector: those present plus the fixed list, sorted.
pub fn unique_cities(objects: &[ConstructionObject]) -> Vec<String> {
    objects
        .iter()
        .map(|o| o.city.as_str())
        .chain(CITIES)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Complex selector options: the known complexes present among the city's
/// objects, in enumeration order. Every known complex is offered when no
/// city is chosen or the city has no objects.
pub fn residential_complexes_by_city(objects: &[ConstructionObject], city: &str) -> Vec<String> {
    let present: Vec<&str> = RESIDENTIAL_COMPLEXES
        .into_iter()
        .filter(|complex| {
            objects
                .iter()
                .any(|o| o.city == city && o.residential_complex == *complex)
        })
        .collect();

    if present.is_empty() {
        RESIDENTIAL_COMPLEXES.iter().map(|c| c.to_string()).collect()
    } else {
        present.into_iter().map(str::to_string).collect()
    }
}
