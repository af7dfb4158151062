use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{EmailAddress, NewContact};
use crate::errors::InfrastructureError;

const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct StoredContact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, serde::Serialize, sqlx::FromRow)]
pub struct StoredSubscription {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub subscribed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionOutcome {
    Created,
    AlreadyActive,
    Reactivated,
}

#[tracing::instrument(name = "Saving contact submission in the database", skip(pool, contact))]
pub async fn insert_contact(
    pool: &PgPool,
    contact: &NewContact,
) -> Result<Uuid, InfrastructureError> {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO contacts (id, name, email, subject, message, phone, company, is_read, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE, $8)",
    )
    .bind(id)
    .bind(contact.name.as_ref())
    .bind(contact.email.as_ref())
    .bind(contact.subject.as_deref())
    .bind(contact.message.as_ref())
    .bind(contact.phone.as_deref())
    .bind(contact.company.as_deref())
    .bind(Utc::now())
    .execute(pool)
    .await?;
    Ok(id)
}

/// Find-or-create over the normalized email. The unique index on `email` is
/// the sole concurrency control: when two first-time subscriptions race past
/// the SELECT, the losing INSERT hits a unique violation and is treated as
/// "already subscribed", not retried.
#[tracing::instrument(name = "Recording newsletter subscription", skip(pool), fields(email = %email))]
pub async fn find_or_create_subscription(
    pool: &PgPool,
    email: &EmailAddress,
) -> Result<SubscriptionOutcome, InfrastructureError> {
    let existing = sqlx::query_as::<_, StoredSubscription>(
        "SELECT id, email, is_active, subscribed_at
         FROM newsletter_subscriptions
         WHERE email = $1",
    )
    .bind(email.as_ref())
    .fetch_optional(pool)
    .await?;

    match existing {
        Some(subscription) if subscription.is_active => Ok(SubscriptionOutcome::AlreadyActive),
        Some(subscription) => {
            sqlx::query("UPDATE newsletter_subscriptions SET is_active = TRUE WHERE id = $1")
                .bind(subscription.id)
                .execute(pool)
                .await?;
            Ok(SubscriptionOutcome::Reactivated)
        }
        None => insert_subscription(pool, email).await,
    }
}

/// Inserts a fresh subscription row. A unique violation means another request
/// inserted the same email between our SELECT and this INSERT; the subscriber
/// is active either way, so it maps to `AlreadyActive`.
pub async fn insert_subscription(
    pool: &PgPool,
    email: &EmailAddress,
) -> Result<SubscriptionOutcome, InfrastructureError> {
    let insert = sqlx::query(
        "INSERT INTO newsletter_subscriptions (id, email, is_active, subscribed_at)
         VALUES ($1, $2, TRUE, $3)",
    )
    .bind(Uuid::new_v4())
    .bind(email.as_ref())
    .bind(Utc::now())
    .execute(pool)
    .await;

    match insert {
        Ok(_) => Ok(SubscriptionOutcome::Created),
        Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            Ok(SubscriptionOutcome::AlreadyActive)
        }
        Err(e) => Err(e.into()),
    }
}

#[tracing::instrument(name = "Listing contact submissions", skip(pool))]
pub async fn list_contacts(pool: &PgPool) -> Result<Vec<StoredContact>, InfrastructureError> {
    let contacts = sqlx::query_as::<_, StoredContact>(
        "SELECT id, name, email, subject, message, phone, company, is_read, created_at
         FROM contacts
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(contacts)
}

#[tracing::instrument(name = "Listing newsletter subscriptions", skip(pool))]
pub async fn list_subscriptions(
    pool: &PgPool,
) -> Result<Vec<StoredSubscription>, InfrastructureError> {
    let subscriptions = sqlx::query_as::<_, StoredSubscription>(
        "SELECT id, email, is_active, subscribed_at
         FROM newsletter_subscriptions
         ORDER BY subscribed_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(subscriptions)
}

/// Flips the read flag. Returns `false` when no contact has the given id.
#[tracing::instrument(name = "Marking contact as read", skip(pool))]
pub async fn mark_contact_read(
    pool: &PgPool,
    contact_id: Uuid,
) -> Result<bool, InfrastructureError> {
    let result = sqlx::query("UPDATE contacts SET is_read = TRUE WHERE id = $1")
        .bind(contact_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
