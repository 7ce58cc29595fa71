use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use sqlx::PgPool;

use super::source::{AccessError, PermissionSource, PgPermissionSource};
use crate::models::{AccessPermission, Plan, Subscription};

/// Single entry point for every "may this user see X" decision.
pub struct AccessResolver {
    source: Arc<dyn PermissionSource>,
}

impl AccessResolver {
    pub fn new(source: Arc<dyn PermissionSource>) -> Self {
        Self { source }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(Arc::new(PgPermissionSource::new(pool)))
    }

    /// Active subscriptions still inside their period, newest first.
    async fn current_subscriptions(&self, user_id: &str) -> Result<Vec<Subscription>, AccessError> {
        let now = Utc::now();
        let mut subscriptions = self.source.active_subscriptions(user_id).await?;
        subscriptions.retain(|s| s.is_current(now));
        subscriptions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(subscriptions)
    }

    async fn resolve(&self, user_id: &str, resource_type: &str) -> Result<bool, AccessError> {
        for subscription in self.current_subscriptions(user_id).await? {
            let permission = self
                .source
                .permission(subscription.plan_id, resource_type)
                .await?;
            if permission.map_or(false, |p| p.can_access) {
                return Ok(true);
            }
        }

        Ok(false)
    }

    #[tracing::instrument(name = "Check resource access.", skip(self))]
    pub async fn check_access(&self, user_id: Option<&str>, resource_type: &str) -> bool {
        let Some(user_id) = user_id.filter(|id| !id.is_empty()) else {
            tracing::debug!("anonymous user denied");
            return false;
        };

        match self.resolve(user_id, resource_type).await {
            Ok(allowed) => {
                tracing::debug!(allowed, "access decision");
                allowed
            }
            Err(err) => {
                tracing::warn!("access lookup failed, denying: {}", err);
                false
            }
        }
    }

    pub async fn has_active_subscription(&self, user_id: Option<&str>) -> bool {
        let Some(user_id) = user_id.filter(|id| !id.is_empty()) else {
            return false;
        };

        match self.current_subscriptions(user_id).await {
            Ok(subscriptions) => !subscriptions.is_empty(),
            Err(err) => {
                tracing::warn!("subscription lookup failed: {}", err);
                false
            }
        }
    }

    /// Every resource type granted by any current plan, merged by resource type.
    #[tracing::instrument(name = "List user permissions.", skip(self))]
    pub async fn user_permissions(&self, user_id: Option<&str>) -> Vec<AccessPermission> {
        let Some(user_id) = user_id.filter(|id| !id.is_empty()) else {
            return vec![];
        };

        let result = async {
            let plan_ids: Vec<_> = self
                .current_subscriptions(user_id)
                .await?
                .into_iter()
                .map(|s| s.plan_id)
                .collect();
            if plan_ids.is_empty() {
                return Ok(vec![]);
            }
            self.source.permissions_for_plans(&plan_ids).await
        }
        .await;

        match result {
            Ok(permissions) => merge_permissions(permissions),
            Err(err) => {
                tracing::warn!("permission lookup failed: {}", err);
                vec![]
            }
        }
    }

    /// Plan of the most recently updated current subscription.
    pub async fn active_plan(&self, user_id: Option<&str>) -> Option<Plan> {
        let user_id = user_id.filter(|id| !id.is_empty())?;

        let result = async {
            match self.current_subscriptions(user_id).await?.first() {
                Some(subscription) => self.source.plan(subscription.plan_id).await,
                None => Ok(None),
            }
        }
        .await;

        result.unwrap_or_else(|err| {
            tracing::warn!("active plan lookup failed: {}", err);
            None
        })
    }
}

fn merge_permissions(permissions: Vec<AccessPermission>) -> Vec<AccessPermission> {
    let mut merged: BTreeMap<String, AccessPermission> = BTreeMap::new();
    for permission in permissions {
        merged
            .entry(permission.resource_type.clone())
            .and_modify(|existing| existing.can_access |= permission.can_access)
            .or_insert(permission);
    }
    merged.into_values().collect()
}
