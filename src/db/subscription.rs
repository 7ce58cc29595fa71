use crate::models::{Subscription, SubscriptionStatus};
use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

const COLUMNS: &str = "id, user_id, plan_id, status, stripe_id, current_period_start, \
    current_period_end, created_at, updated_at";

/// Subscriptions with status `active` whose period has not ended, newest first.
pub async fn fetch_active_by_user(
    pool: &PgPool,
    user_id: &str,
) -> Result<Vec<Subscription>, String> {
    let query_span = tracing::info_span!("Fetch active subscriptions.", user_id = %user_id);
    let sql = format!(
        "SELECT {COLUMNS} FROM subscriptions \
        WHERE user_id = $1 AND status = 'active' AND current_period_end > NOW() \
        ORDER BY updated_at DESC"
    );

    sqlx::query_as::<_, Subscription>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch subscriptions, error: {:?}", err);
            "Internal Server Error".to_string()
        })
}

/// Updates the row keyed by (user, plan) in place, or inserts one valid for `period_days`.
pub async fn upsert(
    pool: &PgPool,
    user_id: &str,
    plan_id: Uuid,
    stripe_id: Option<&str>,
    status: SubscriptionStatus,
    period_days: i64,
) -> Result<Subscription, String> {
    let query_span = tracing::info_span!(
        "Upsert subscription.",
        user_id = %user_id,
        plan_id = %plan_id,
        status = %status
    );
    let now = Utc::now();
    let sql = format!(
        "INSERT INTO subscriptions \
            (user_id, plan_id, status, stripe_id, current_period_start, current_period_end) \
        VALUES ($1, $2, $3, $4, $5, $6) \
        ON CONFLICT (user_id, plan_id) DO UPDATE SET \
            status = EXCLUDED.status, \
            stripe_id = COALESCE(EXCLUDED.stripe_id, subscriptions.stripe_id), \
            updated_at = NOW() \
        RETURNING {COLUMNS}"
    );

    sqlx::query_as::<_, Subscription>(&sql)
        .bind(user_id)
        .bind(plan_id)
        .bind(status)
        .bind(stripe_id)
        .bind(now)
        .bind(now + Duration::days(period_days))
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to upsert subscription, error: {:?}", err);
            "Failed to update subscription".to_string()
        })
}
