use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::{DateTime, Utc};
use entity::event::{ActiveModel as EventActive, Entity as Event, Model as EventModel};
use entity::event_admin::{ActiveModel as AdminActive, Entity as EventAdmin};
use entity::event_host::Entity as EventHost;
use sea_orm::{
    ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    SqlErr,
};

impl PostgresService {
    pub async fn get_event_by_id(&self, id: i32) -> Result<EventModel, AppError> {
        Ok(Event::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Event not found".to_string()))?)
    }

    /// The "admin on event" authorization relation.
    pub async fn user_has_admin_on(&self, user_id: i32, event_id: i32) -> Result<bool, AppError> {
        Ok(EventAdmin::find()
            .filter(entity::event_admin::Column::EventId.eq(event_id))
            .filter(entity::event_admin::Column::UserId.eq(user_id))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn is_user_a_host_on(&self, user_id: i32, event_id: i32) -> Result<bool, AppError> {
        Ok(EventHost::find()
            .filter(entity::event_host::Column::EventId.eq(event_id))
            .filter(entity::event_host::Column::UserId.eq(user_id))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn create_event(
        &self,
        name: String,
        description: Option<String>,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<i32, AppError> {
        let now = Utc::now();
        let res = Event::insert(EventActive {
            name: Set(name),
            description: Set(description),
            starts_at: Set(starts_at),
            ends_at: Set(ends_at),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;
        Ok(res.last_insert_id)
    }

    pub async fn add_admin_to_event(&self, event_id: i32, user_id: i32) -> Result<(), AppError> {
        match EventAdmin::insert(AdminActive {
            event_id: Set(event_id),
            user_id: Set(user_id),
        })
        .exec(&self.db)
        .await
        {
            Ok(_) => Ok(()),
            Err(err) => {
                if let Some(sql_err) = err.sql_err() {
                    return match sql_err {
                        SqlErr::UniqueConstraintViolation(_) => Err(AppError::AlreadyExists),
                        SqlErr::ForeignKeyConstraintViolation(_) => {
                            Err(AppError::BadRequest("Related record missing".to_string()))
                        }
                        _ => Err(err.into()),
                    };
                }
                Err(err.into())
            }
        }
    }

    pub async fn list_events_paginated(
        &self,
        start: u64,
        per_page: u64,
    ) -> Result<(Vec<EventModel>, u64), AppError> {
        let finder = Event::find().order_by_asc(entity::event::Column::StartsAt);
        let total = finder.clone().count(&self.db).await?;
        let items = finder.offset(start).limit(per_page).all(&self.db).await?;
        Ok((items, total))
    }
}
