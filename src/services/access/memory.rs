use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{Duration, Utc};
use uuid::Uuid;

use super::{AccessError, PermissionSource};
use crate::models::{AccessPermission, Plan, Subscription, SubscriptionStatus};

/// Permission tables held in memory, for resolver and handler tests.
#[derive(Default)]
pub(crate) struct MemorySource {
    subscriptions: Vec<Subscription>,
    permissions: HashMap<(Uuid, String), bool>,
    plans: Vec<Plan>,
    broken: bool,
    lookups: AtomicUsize,
}

impl MemorySource {
    pub(crate) fn with_plan(mut self, name: &str) -> (Self, Uuid) {
        let id = Uuid::new_v4();
        self.plans.push(Plan {
            id,
            name: name.to_string(),
            price: 19.99,
            description: None,
            features: vec![],
            created_at: None,
        });
        (self, id)
    }

    pub(crate) fn grant(mut self, plan_id: Uuid, resource_type: &str, can_access: bool) -> Self {
        self.permissions
            .insert((plan_id, resource_type.to_string()), can_access);
        self
    }

    pub(crate) fn subscribe(
        mut self,
        user_id: &str,
        plan_id: Uuid,
        status: SubscriptionStatus,
        ends_in: Duration,
    ) -> Self {
        let now = Utc::now();
        self.subscriptions.push(Subscription {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            plan_id,
            status,
            stripe_id: None,
            current_period_start: now - Duration::days(1),
            current_period_end: now + ends_in,
            created_at: now,
            updated_at: now,
        });
        self
    }

    pub(crate) fn failing(mut self) -> Self {
        self.broken = true;
        self
    }

    /// Number of storage calls served so far.
    pub(crate) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), AccessError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.broken {
            Err(AccessError::Storage("connection reset".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl PermissionSource for MemorySource {
    async fn active_subscriptions(&self, user_id: &str) -> Result<Vec<Subscription>, AccessError> {
        self.check()?;
        Ok(self
            .subscriptions
            .iter()
            .filter(|s| s.user_id == user_id && s.status == SubscriptionStatus::Active)
            .cloned()
            .collect())
    }

    async fn permission(
        &self,
        plan_id: Uuid,
        resource_type: &str,
    ) -> Result<Option<AccessPermission>, AccessError> {
        self.check()?;
        Ok(self
            .permissions
            .get(&(plan_id, resource_type.to_string()))
            .map(|can_access| AccessPermission {
                plan_id,
                resource_type: resource_type.to_string(),
                can_access: *can_access,
            }))
    }

    async fn permissions_for_plans(
        &self,
        plan_ids: &[Uuid],
    ) -> Result<Vec<AccessPermission>, AccessError> {
        self.check()?;
        Ok(self
            .permissions
            .iter()
            .filter(|((plan_id, _), _)| plan_ids.contains(plan_id))
            .map(|((plan_id, resource_type), can_access)| AccessPermission {
                plan_id: *plan_id,
                resource_type: resource_type.clone(),
                can_access: *can_access,
            })
            .collect())
    }

    async fn plan(&self, plan_id: Uuid) -> Result<Option<Plan>, AccessError> {
        self.check()?;
        Ok(self.plans.iter().find(|p| p.id == plan_id).cloned())
    }
}
