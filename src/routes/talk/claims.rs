use actix_web::{delete, post, web, HttpRequest};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use tracing::error;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::mail::mail_talk_claim_rejected;
use crate::utils::webutils::{base_url, parse_item_id, require_user};
use crate::API_VERSION;

fn claims_uri(base: &str, talk_id: i32) -> String {
    format!("{}/{}/talks/{}/claims", base, API_VERSION, talk_id)
}

#[post("/{talk_id}/claims")]
pub async fn create_claim(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    auth: Option<BearerAuth>,
) -> ApiResult<()> {
    let current = require_user(&db, auth, "You must be logged in to create data").await?;

    let talk_id = parse_item_id(&path.into_inner(), "Talk not found")?;
    let talk = db
        .get_talk_by_id(talk_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Talk not found".to_string()))?;

    db.create_claim(talk.id, current.id).await?;

    Ok(ApiResponse::CreatedAt(claims_uri(&base_url(&req), talk.id)))
}

#[delete("/{talk_id}/claims/{claim_id}")]
pub async fn reject_claim(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<(String, String)>,
    auth: Option<BearerAuth>,
) -> ApiResult<()> {
    let current = require_user(&db, auth, "You must be logged in to remove data").await?;

    let (talk_raw, claim_raw) = path.into_inner();
    let talk_id = parse_item_id(&talk_raw, "Talk not found")?;
    let claim_id = parse_item_id(&claim_raw, "Claim not found")?;

    let talk = db
        .get_talk_by_id(talk_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Talk not found".to_string()))?;

    // claims are decided by admins of the talk's event
    if !db.user_has_admin_on(current.id, talk.event_id).await? {
        return Err(AppError::Forbidden(
            "You do not have permission to reject talk claims for this event".to_string(),
        ));
    }

    let claim = db
        .get_claim_by_id(claim_id)
        .await?
        .filter(|claim| claim.talk_id == talk.id)
        .ok_or_else(|| AppError::NotFound("Claim not found".to_string()))?;

    db.delete_claim(claim.id).await?;

    // the claim is gone either way; a failed notification only gets logged
    if let Some(claimant) = db.get_user_by_id(claim.user_id).await? {
        let event = db.get_event_by_id(talk.event_id).await?;
        mail_talk_claim_rejected(vec![claimant.email], &event, &talk)
            .await
            .map_err(|err| error!("talk claim rejection mail failed: {}", err))
            .ok();
    }

    Ok(ApiResponse::NoContentAt(claims_uri(&base_url(&req), talk.id)))
}
