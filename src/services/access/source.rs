use crate::db;
use crate::models::{AccessPermission, Plan, Subscription};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("storage lookup failed: {0}")]
    Storage(String),
}

/// Read side of the subscription and permission tables.
#[async_trait::async_trait]
pub trait PermissionSource: Send + Sync {
    /// Subscriptions of the user with status `active`. Expiry is checked by the resolver.
    async fn active_subscriptions(&self, user_id: &str) -> Result<Vec<Subscription>, AccessError>;

    async fn permission(
        &self,
        plan_id: Uuid,
        resource_type: &str,
    ) -> Result<Option<AccessPermission>, AccessError>;

    async fn permissions_for_plans(
        &self,
        plan_ids: &[Uuid],
    ) -> Result<Vec<AccessPermission>, AccessError>;

    async fn plan(&self, plan_id: Uuid) -> Result<Option<Plan>, AccessError>;
}

pub struct PgPermissionSource {
    pool: PgPool,
}

impl PgPermissionSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PermissionSource for PgPermissionSource {
    async fn active_subscriptions(&self, user_id: &str) -> Result<Vec<Subscription>, AccessError> {
        db::subscription::fetch_active_by_user(&self.pool, user_id)
            .await
            .map_err(AccessError::Storage)
    }

    async fn permission(
        &self,
        plan_id: Uuid,
        resource_type: &str,
    ) -> Result<Option<AccessPermission>, AccessError> {
        db::permission::fetch(&self.pool, plan_id, resource_type)
            .await
            .map_err(AccessError::Storage)
    }

    async fn permissions_for_plans(
        &self,
        plan_ids: &[Uuid],
    ) -> Result<Vec<AccessPermission>, AccessError> {
        db::permission::fetch_by_plans(&self.pool, plan_ids)
            .await
            .map_err(AccessError::Storage)
    }

    async fn plan(&self, plan_id: Uuid) -> Result<Option<Plan>, AccessError> {
        db::plan::fetch(&self.pool, plan_id)
            .await
            .map_err(AccessError::Storage)
    }
}
