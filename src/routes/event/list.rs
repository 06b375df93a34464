use actix_web::{get, web, HttpRequest};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::event::{EventInfo, EventListResponse, ListMeta};
use crate::types::request::PagingParams;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::base_url;

#[get("")]
pub async fn list_events(
    req: HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    params: web::Query<PagingParams>,
) -> ApiResult<EventListResponse> {
    let (events, total) = db
        .list_events_paginated(params.start(), params.results_per_page())
        .await?;

    let base = base_url(&req);
    let events: Vec<EventInfo> = events
        .iter()
        .map(|event| EventInfo::from_model(&base, event))
        .collect();

    Ok(ApiResponse::Ok(EventListResponse {
        meta: ListMeta {
            count: events.len() as u64,
            total,
        },
        events,
    }))
}
