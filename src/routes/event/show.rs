use actix_web::{get, web, HttpRequest};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::event::EventInfo;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::{base_url, parse_item_id};

#[get("/{event_id}")]
pub async fn show_event(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<String>,
) -> ApiResult<EventInfo> {
    let event_id = parse_item_id(&path.into_inner(), "Event not found")?;
    let event = db.get_event_by_id(event_id).await?;

    Ok(ApiResponse::Ok(EventInfo::from_model(&base_url(&req), &event)))
}
