//! Health Endpoint

use serde_json::Value;

use super::{ApiClient, ApiResult};

const HEALTH_PATH: &str = "/actuator/health";

impl ApiClient {
    /// Raw health payload; only reachability matters to the dashboard.
    pub async fn check_health(&self) -> ApiResult<Value> {
        self.get_json::<_, ()>(HEALTH_PATH, None).await
    }
}
