use crate::configuration::Settings;
use crate::connectors;
use crate::middleware;
use crate::routes;
use crate::services::AccessResolver;
use actix_cors::Cors;
use actix_web::{dev::Server, error, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let access_resolver = web::Data::new(AccessResolver::postgres(pg_pool.clone()));
    let github_connector = connectors::init_github(&settings.connectors);

    let oauth_http_client = reqwest::Client::builder()
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let oauth_http_client = web::Data::new(oauth_http_client);

    let oauth_cache = web::Data::new(middleware::authentication::OAuthCache::new(
        Duration::from_secs(settings.auth_cache_ttl_secs),
    ));

    let settings = web::Data::new(settings);
    let pg_pool = web::Data::new(pg_pool);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match &err {
            error::JsonPayloadError::Deserialize(err) => serde_json::json!({
                "kind": "deserialize",
                "line": err.line(),
                "column": err.column(),
                "msg": err.to_string(),
            }),
            _ => serde_json::json!({ "kind": "other", "msg": err.to_string() }),
        };
        let response = actix_web::HttpResponse::BadRequest().json(msg);
        error::InternalError::from_response(err, response).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::authentication::Manager::new())
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(json_config.clone())
            .app_data(pg_pool.clone())
            .app_data(settings.clone())
            .app_data(oauth_http_client.clone())
            .app_data(oauth_cache.clone())
            .app_data(access_resolver.clone())
            .app_data(github_connector.clone())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(web::scope("/plans").service(routes::plan::list_handler))
            .service(
                web::scope("/subscription")
                    .service(routes::subscription::upsert_handler)
                    .service(routes::subscription::active_plan_handler),
            )
            .service(
                web::scope("/access")
                    .service(routes::access::list_handler)
                    .service(routes::access::item_handler),
            )
            .service(
                web::scope("/components")
                    .service(routes::component::query_handler)
                    .service(routes::component::save_handler)
                    .service(routes::component::link_repository_handler)
                    .service(routes::component::detail_handler),
            )
            .service(
                web::scope("/dashboard").service(routes::dashboard::saved_components_handler),
            )
            .service(web::scope("/projects").service(routes::project::list_handler))
            .service(web::scope("/profile").service(routes::profile::profile_handler))
            .service(web::scope("/github").service(routes::github::proxy_handler))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
