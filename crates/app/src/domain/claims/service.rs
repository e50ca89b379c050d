//! Claims service.

use async_trait::async_trait;
use mockall::automock;
use siniestros::{
    claims::{Claim, ClaimUpdate, NewClaim},
    routes::ClaimId,
};
use tracing::info;

use crate::{domain::claims::ClaimsServiceError, http::ApiClient};

const CLAIMS_PATH: &str = "/api/siniestros/";

fn claim_path(claim: ClaimId) -> String {
    format!("/api/siniestros/{claim}")
}

#[derive(Debug, Clone)]
pub struct HttpClaimsService {
    api: ApiClient,
}

impl HttpClaimsService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ClaimsService for HttpClaimsService {
    async fn list_claims(&self) -> Result<Vec<Claim>, ClaimsServiceError> {
        Ok(self.api.get_json(CLAIMS_PATH).await?)
    }

    async fn get_claim(&self, claim: ClaimId) -> Result<Claim, ClaimsServiceError> {
        Ok(self.api.get_json(&claim_path(claim)).await?)
    }

    async fn create_claim(&self, claim: NewClaim) -> Result<Claim, ClaimsServiceError> {
        claim.validate()?;

        let created: Claim = self.api.post_json(CLAIMS_PATH, &claim).await?;

        info!(claim = created.id, "claim created");

        Ok(created)
    }

    async fn update_claim(
        &self,
        claim: ClaimId,
        update: ClaimUpdate,
    ) -> Result<Claim, ClaimsServiceError> {
        if update.is_empty() {
            return Err(ClaimsServiceError::EmptyUpdate);
        }

        Ok(self.api.put_json(&claim_path(claim), &update).await?)
    }

    async fn delete_claim(&self, claim: ClaimId) -> Result<Claim, ClaimsServiceError> {
        let deleted: Claim = self.api.delete(&claim_path(claim)).await?;

        info!(claim = deleted.id, "claim deleted");

        Ok(deleted)
    }
}

#[automock]
#[async_trait]
pub trait ClaimsService: Send + Sync {
    /// Claims visible to the current user: their own, or every claim for agents.
    async fn list_claims(&self) -> Result<Vec<Claim>, ClaimsServiceError>;

    /// Retrieve a single claim.
    async fn get_claim(&self, claim: ClaimId) -> Result<Claim, ClaimsServiceError>;

    /// Validates and files a new claim owned by the current user.
    async fn create_claim(&self, claim: NewClaim) -> Result<Claim, ClaimsServiceError>;

    /// Applies a partial update and returns the stored claim.
    async fn update_claim(
        &self,
        claim: ClaimId,
        update: ClaimUpdate,
    ) -> Result<Claim, ClaimsServiceError>;

    /// Deletes a claim, returning it as it was.
    async fn delete_claim(&self, claim: ClaimId) -> Result<Claim, ClaimsServiceError>;
}
