//! Project Endpoints
//!
//! Listing and full-text search over project cards.

use super::{ApiClient, ApiProjectCard, ApiResult, SearchParams};

const PROJECTS_PATH: &str = "/api/v1/projects";
const SEARCH_PATH: &str = "/api/v1/projects/search";

impl ApiClient {
    pub async fn get_all_projects(&self) -> ApiResult<Vec<ApiProjectCard>> {
        self.get_json::<_, ()>(PROJECTS_PATH, None).await
    }

    pub async fn search_projects(&self, params: &SearchParams) -> ApiResult<Vec<ApiProjectCard>> {
        self.get_json(SEARCH_PATH, Some(params)).await
    }

    // The backend has a single search index; these only document intent at call sites.

    pub async fn search_by_address(&self, address: &str) -> ApiResult<Vec<ApiProjectCard>> {
        self.search_projects(&SearchParams::new(address)).await
    }

    pub async fn search_by_status(&self, status: &str) -> ApiResult<Vec<ApiProjectCard>> {
        self.search_projects(&SearchParams::new(status)).await
    }

    pub async fn search_by_person(&self, person_name: &str) -> ApiResult<Vec<ApiProjectCard>> {
        self.search_projects(&SearchParams::new(person_name)).await
    }

    pub async fn search_by_year(&self, year: &str) -> ApiResult<Vec<ApiProjectCard>> {
        self.search_projects(&SearchParams::new(year)).await
    }
}
