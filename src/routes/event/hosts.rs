use actix_web::{delete, get, post, web, HttpRequest};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use tracing::error;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::event::{HostInfo, HostListResponse, ListMeta, RAddHost};
use crate::types::request::PagingParams;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::{base_url, escape_html, parse_item_id, require_user};
use crate::API_VERSION;

fn hosts_uri(base: &str, event_id: i32) -> String {
    format!("{}/{}/events/{}/hosts", base, API_VERSION, event_id)
}

#[get("/{event_id}/hosts")]
pub async fn list_hosts(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    params: web::Query<PagingParams>,
) -> ApiResult<HostListResponse> {
    let event_id = parse_item_id(&path.into_inner(), "Event not found")?;

    let verbose = params.verbose();

    let Some((rows, total)) = db
        .get_hosts_by_event_id(event_id, params.results_per_page(), params.start())
        .await?
    else {
        return Err(AppError::NotFound("Event not found".to_string()));
    };

    let base = base_url(&req);
    let hosts: Vec<HostInfo> = rows
        .into_iter()
        .map(|(host, user)| HostInfo {
            host_uri: format!("{}/{}/users/{}", base, API_VERSION, user.id),
            host_name: user.full_name,
            username: verbose.then_some(user.username),
            joined_at: verbose.then_some(host.created_at),
        })
        .collect();

    Ok(ApiResponse::Ok(HostListResponse {
        meta: ListMeta {
            count: hosts.len() as u64,
            total,
        },
        hosts,
    }))
}

#[post("/{event_id}/hosts")]
pub async fn add_host(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
    data: web::Json<RAddHost>,
    auth: Option<BearerAuth>,
) -> ApiResult<()> {
    // 0) auth
    let current = require_user(&db, auth, "You must be logged in to create data").await?;

    // 1) event must exist, result only matters as an existence check
    let event_id = parse_item_id(&path.into_inner(), "Event not found")?;
    db.get_event_by_id(event_id).await?;

    // 2) only event admins manage the host list
    if !db.user_has_admin_on(current.id, event_id).await? {
        return Err(AppError::Forbidden(
            "You do not have permission to add hosts to this event".to_string(),
        ));
    }

    // 3) resolve the target user by name
    let username = escape_html(&data.host_name);
    let user_id = db
        .get_user_id_from_username(&username)
        .await?
        .ok_or_else(|| AppError::NotFound("No User found".to_string()))?;

    // 4) no duplicate host rows
    if db.is_user_a_host_on(user_id, event_id).await? {
        return Err(AppError::BadRequest("User is already a host".to_string()));
    }

    // 5) execute
    if let Err(err) = db.add_host_to_event(event_id, user_id).await {
        error!("adding host {} to event {} failed: {}", user_id, event_id, err);
        return Err(AppError::BadRequest("Something went wrong".to_string()));
    }

    Ok(ApiResponse::CreatedAt(hosts_uri(&base_url(&req), event_id)))
}

#[delete("/{event_id}/hosts/{user_id}")]
pub async fn remove_host(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<(String, String)>,
    auth: Option<BearerAuth>,
) -> ApiResult<()> {
    // 0) auth
    let current = require_user(&db, auth, "You must be logged in to remove data").await?;

    let (event_id_raw, target_raw) = path.into_inner();
    let event_id = parse_item_id(&event_id_raw, "Event not found")?;

    // 1) hosts may not remove themselves, admin or not
    let target_id = target_raw.parse::<i32>().ok();
    if target_id == Some(current.id) {
        return Err(AppError::Forbidden(
            "You are not allowed to remove yourself from the host-list".to_string(),
        ));
    }

    // 2) event must exist, result only matters as an existence check
    db.get_event_by_id(event_id).await?;

    // 3) only event admins manage the host list
    if !db.user_has_admin_on(current.id, event_id).await? {
        return Err(AppError::Forbidden(
            "You do not have permission to remove hosts from this event".to_string(),
        ));
    }

    // 4) target must exist; a malformed id behaves like an unknown user
    let target = match target_id {
        Some(id) => db.get_user_by_id(id).await?,
        None => None,
    };
    let target = target.ok_or_else(|| AppError::NotFound("No User found".to_string()))?;

    // 5) execute
    if let Err(err) = db.remove_host_from_event(target.id, event_id).await {
        error!(
            "removing host {} from event {} failed: {}",
            target.id, event_id, err
        );
        return Err(AppError::BadRequest("Something went wrong".to_string()));
    }

    Ok(ApiResponse::NoContentAt(hosts_uri(&base_url(&req), event_id)))
}
