use actix_web::{web, App};
use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use eventdir::{
    db::postgres_service::PostgresService,
    types::user::DBUserCreate,
    utils::token::{construct_token, encrypt, new_token},
};

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(eventdir::routes::configure_routes)
    }

    /// Creates a user and returns `(id, bearer token)`. Pass a username to
    /// control the name looked up by host management; emails are always
    /// randomized.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, username: Option<&str>) -> (i32, String) {
        let secret = new_token();
        let auth_hash = encrypt(&secret).expect("Failed to hash token");
        let unique = Uuid::new_v4().simple().to_string();

        let username = username
            .map(str::to_string)
            .unwrap_or_else(|| format!("user-{}", &unique[..8]));

        let user_id = self
            .db
            .create_user(DBUserCreate {
                username: username.clone(),
                full_name: "Test User".to_string(),
                email: format!("{}-{}@test.com", username, unique),
                auth_hash,
            })
            .await
            .expect("Failed to create user");

        (user_id, construct_token(user_id, &secret))
    }

    #[allow(dead_code)]
    pub async fn create_test_event(&self) -> i32 {
        let starts = Utc::now() + Duration::days(30);
        self.db
            .create_event(
                "Test Conference".to_string(),
                Some("A conference that only exists in tests".to_string()),
                starts,
                starts + Duration::days(2),
            )
            .await
            .expect("Failed to create event")
    }

    #[allow(dead_code)]
    pub async fn create_event_with_admin(&self, admin_id: i32) -> i32 {
        let event_id = self.create_test_event().await;
        self.db
            .add_admin_to_event(event_id, admin_id)
            .await
            .expect("Failed to add admin");
        event_id
    }

    #[allow(dead_code)]
    pub async fn create_test_talk(&self, event_id: i32) -> i32 {
        self.db
            .create_talk(event_id, "A Talk About Things".to_string(), None)
            .await
            .expect("Failed to create talk")
    }
}
