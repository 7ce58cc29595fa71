#![allow(dead_code)]

use actix_web::{dev::Server, get, web, App, HttpRequest, HttpResponse, HttpServer};
use componentry::configuration::{get_configuration, DatabaseSettings, Settings};
use componentry::connectors::GithubConfig;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use uuid::Uuid;

/// Bearer token the mock identity provider rejects.
pub const INVALID_TOKEN: &str = "invalid";

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

impl TestApp {
    pub async fn plan_id(&self, name: &str) -> Uuid {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM plans WHERE name = $1")
            .bind(name)
            .fetch_one(&self.db_pool)
            .await
            .expect("seeded plan")
    }

    pub async fn subscribe(&self, user_id: &str, plan: &str) {
        sqlx::query(
            "INSERT INTO subscriptions (user_id, plan_id, status, current_period_end) \
            VALUES ($1, $2, 'active', NOW() + INTERVAL '30 days')",
        )
        .bind(user_id)
        .bind(self.plan_id(plan).await)
        .execute(&self.db_pool)
        .await
        .expect("Failed to insert subscription");
    }

    pub async fn insert_component(&self, language_type: &str, is_premium: bool) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO components (name, description, language_type, category, is_premium, code) \
            VALUES ($1, 'test component', $2, 'Buttons', $3, 'export const Button = () => null') \
            RETURNING id",
        )
        .bind(format!("{language_type} button"))
        .bind(language_type)
        .bind(is_premium)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to insert component")
    }
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = componentry::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);

    Some(TestApp {
        address,
        db_pool: connection_pool,
    })
}

/// App with a mock identity provider and the offline GitHub connector.
pub async fn spawn_app() -> Option<TestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.connectors.github = Some(GithubConfig {
        enabled: false,
        ..Default::default()
    });

    let listener =
        TcpListener::bind("127.0.0.1:0").expect("Failed to bind port for testing auth server");
    configuration.auth_url = format!(
        "http://127.0.0.1:{}/auth/v1/user",
        listener.local_addr().unwrap().port()
    );

    let auth_server = mock_auth_server(listener).expect("Failed to start mock auth server");
    let _ = tokio::spawn(auth_server);

    spawn_app_with_configuration(configuration).await
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

/// Identity provider stand-in: the bearer token doubles as the user id.
#[get("/user")]
async fn mock_auth(req: HttpRequest) -> HttpResponse {
    let token = req
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or_default();

    if token.is_empty() || token == INVALID_TOKEN {
        return HttpResponse::Unauthorized().finish();
    }

    HttpResponse::Ok().json(serde_json::json!({
        "id": token,
        "email": format!("{token}@example.com"),
        "role": "authenticated",
    }))
}

fn mock_auth_server(listener: TcpListener) -> std::io::Result<Server> {
    Ok(
        HttpServer::new(|| App::new().service(web::scope("/auth/v1").service(mock_auth)))
            .listen(listener)?
            .run(),
    )
}
