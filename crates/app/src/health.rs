//! Server liveness.

use serde::Deserialize;

use crate::http::{ApiClient, ApiError};

const HEALTH_PATH: &str = "/api/health";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,

    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Ask the server whether it is up.
///
/// # Errors
///
/// Returns an error when the server cannot be reached or answers with a failure.
pub async fn check(api: &ApiClient) -> Result<HealthStatus, ApiError> {
    api.get_json(HEALTH_PATH).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use testresult::TestResult;

    use crate::{
        http::{ApiResponse, MockTransport},
        session::MemorySessionStore,
    };

    use super::*;

    #[tokio::test]
    async fn healthy_server_reports_ok() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_send()
            .once()
            .withf(|request| request.path == HEALTH_PATH)
            .return_once(|_| {
                Ok(ApiResponse::json(&serde_json::json!({
                    "status": "ok",
                    "message": "El servicio está funcionando correctamente"
                })))
            });

        let api = ApiClient::layered(transport, Arc::new(MemorySessionStore::default()));
        let health = check(&api).await?;

        assert!(health.is_ok());

        Ok(())
    }
}
