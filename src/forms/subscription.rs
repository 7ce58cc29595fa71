use crate::models::SubscriptionStatus;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

/// Body of `POST /subscription`. The user always comes from the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSubscription {
    pub plan_id: Option<Uuid>,
    #[validate(max_length = 255)]
    pub stripe_subscription_id: Option<String>,
    pub status: Option<SubscriptionStatus>,
}

impl UpsertSubscription {
    pub fn status(&self) -> SubscriptionStatus {
        self.status.unwrap_or(SubscriptionStatus::Active)
    }
}
