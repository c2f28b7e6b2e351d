use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use practice_alarm_api::Application;
use practice_alarm_domain::{NotificationPermission, ID};
use practice_alarm_infra::{AlarmContext, Config, EmailConfig};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;

pub struct TestApp {
    pub config: Config,
    pub address: String,
    pub client: Client,
}

#[derive(Serialize)]
struct Claims {
    exp: usize,
    iat: usize,
    user_id: String,
    email: Option<String>,
}

impl TestApp {
    pub fn token(&self, user_id: &ID, email: Option<&str>) -> String {
        let claims = Claims {
            exp: 5609418990, // year 2147
            iat: 19,
            user_id: user_id.to_string(),
            email: email.map(String::from),
        };
        let enc_key = EncodingKey::from_secret(self.config.session_jwt_secret.as_bytes());
        encode(&Header::new(Algorithm::HS256), &claims, &enc_key).unwrap()
    }

    pub fn get(&self, path: &str, token: &str) -> RequestBuilder {
        self.client
            .get(format!("{}/api/v1{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn post(&self, path: &str, token: &str) -> RequestBuilder {
        self.client
            .post(format!("{}/api/v1{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn put(&self, path: &str, token: &str) -> RequestBuilder {
        self.client
            .put(format!("{}/api/v1{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn delete(&self, path: &str, token: &str) -> RequestBuilder {
        self.client
            .delete(format!("{}/api/v1{}", self.address, path))
            .bearer_auth(token)
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> TestApp {
    let config = Config {
        port: 0, // Random port
        session_token: None,
        email: EmailConfig::default(),
        notification_worker: None,
        notification_permission: NotificationPermission::Granted,
        ..Config::default()
    };
    let ctx = AlarmContext::create_inmemory(config);

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    TestApp {
        config,
        address,
        client: Client::new(),
    }
}
