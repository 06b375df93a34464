use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::event::Entity as Event;
use entity::event_host::{ActiveModel as EventHostActive, Entity as EventHost, Model as EventHostModel};
use entity::user::Model as UserModel;
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
};

impl PostgresService {
    /// Host rows joined with their user records, oldest first, plus the
    /// total before paging. `None` means the event itself does not exist.
    pub async fn get_hosts_by_event_id(
        &self,
        event_id: i32,
        per_page: u64,
        start: u64,
    ) -> Result<Option<(Vec<(EventHostModel, UserModel)>, u64)>, AppError> {
        if Event::find_by_id(event_id).one(&self.db).await?.is_none() {
            return Ok(None);
        }

        let finder = EventHost::find()
            .filter(entity::event_host::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_host::Column::CreatedAt);
        let total = finder.clone().count(&self.db).await?;
        let rows = finder
            .find_also_related(entity::user::Entity)
            .offset(start)
            .limit(per_page)
            .all(&self.db)
            .await?;

        let rows = rows
            .into_iter()
            .filter_map(|(host, user)| user.map(|user| (host, user)))
            .collect();

        Ok(Some((rows, total)))
    }

    pub async fn add_host_to_event(&self, event_id: i32, user_id: i32) -> Result<(), AppError> {
        match EventHost::insert(EventHostActive {
            event_id: Set(event_id),
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
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

    /// Deleting a row that is not there is not an error; the host list
    /// ends up in the requested state either way.
    pub async fn remove_host_from_event(&self, user_id: i32, event_id: i32) -> Result<u64, AppError> {
        let res = EventHost::delete_many()
            .filter(entity::event_host::Column::EventId.eq(event_id))
            .filter(entity::event_host::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }
}
