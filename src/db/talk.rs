use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::talk::{ActiveModel as TalkActive, Entity as Talk, Model as TalkModel};
use entity::talk_claim::{ActiveModel as ClaimActive, Entity as TalkClaim, Model as TalkClaimModel};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr};

impl PostgresService {
    pub async fn create_talk(
        &self,
        event_id: i32,
        title: String,
        speaker_name: Option<String>,
    ) -> Result<i32, AppError> {
        // Validate the related record so callers get a domain error
        // instead of a constraint violation.
        self.get_event_by_id(event_id).await?;

        let now = Utc::now();
        let res = Talk::insert(TalkActive {
            event_id: Set(event_id),
            title: Set(title),
            speaker_name: Set(speaker_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;
        Ok(res.last_insert_id)
    }

    pub async fn get_talk_by_id(&self, id: i32) -> Result<Option<TalkModel>, AppError> {
        Ok(Talk::find_by_id(id).one(&self.db).await?)
    }

    pub async fn has_claim(&self, talk_id: i32, user_id: i32) -> Result<bool, AppError> {
        Ok(TalkClaim::find()
            .filter(entity::talk_claim::Column::TalkId.eq(talk_id))
            .filter(entity::talk_claim::Column::UserId.eq(user_id))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn create_claim(&self, talk_id: i32, user_id: i32) -> Result<i32, AppError> {
        if self.has_claim(talk_id, user_id).await? {
            return Err(AppError::AlreadyExists);
        }
        match TalkClaim::insert(ClaimActive {
            talk_id: Set(talk_id),
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        })
        .exec(&self.db)
        .await
        {
            Ok(res) => Ok(res.last_insert_id),
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

    pub async fn get_claim_by_id(&self, id: i32) -> Result<Option<TalkClaimModel>, AppError> {
        Ok(TalkClaim::find_by_id(id).one(&self.db).await?)
    }

    pub async fn delete_claim(&self, id: i32) -> Result<(), AppError> {
        let res = TalkClaim::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound("Claim not found".to_string()).into());
        }
        Ok(())
    }
}
