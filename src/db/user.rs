use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl PostgresService {
    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<Option<UserModel>, AppError> {
        Ok(User::find_by_id(id).one(&self.db).await?)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    pub async fn get_user_id_from_username(&self, username: &str) -> Result<Option<i32>, AppError> {
        Ok(self.get_user_by_username(username).await?.map(|u| u.id))
    }

    /// Signup: create user.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<i32, AppError> {
        if self.user_exists_by_username(&payload.username).await? {
            return Err(AppError::AlreadyExists);
        }
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let now = Utc::now();
        let res = User::insert(UserActive {
            username: Set(payload.username),
            full_name: Set(payload.full_name),
            email: Set(payload.email),
            auth_hash: Set(payload.auth_hash),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;
        Ok(res.last_insert_id)
    }
}
