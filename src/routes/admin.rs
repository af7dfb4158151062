//! Read endpoints for persisted submissions. These carry no authentication,
//! matching the system they replace; they are not a security boundary.

use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::persistence;
use crate::utils::{opaque_error_500, ApiResponse};

pub async fn list_contacts(pool: web::Data<PgPool>) -> Result<HttpResponse, actix_web::Error> {
    let contacts = persistence::list_contacts(&pool)
        .await
        .map_err(opaque_error_500)?;
    Ok(HttpResponse::Ok().json(contacts))
}

pub async fn list_subscriptions(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, actix_web::Error> {
    let subscriptions = persistence::list_subscriptions(&pool)
        .await
        .map_err(opaque_error_500)?;
    Ok(HttpResponse::Ok().json(subscriptions))
}

pub async fn mark_contact_read(
    contact_id: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, actix_web::Error> {
    let updated = persistence::mark_contact_read(&pool, *contact_id)
        .await
        .map_err(opaque_error_500)?;
    if updated {
        Ok(ApiResponse::success("Contact marked as read"))
    } else {
        Ok(ApiResponse::not_found("Contact not found"))
    }
}
