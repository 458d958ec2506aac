use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use friends_graphql::{config::Config, database::Database, routes, schema};
use std::sync::Arc;

#[actix_rt::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info,actix_web=info"))
        .init();

    let config = Config::from_env();
    let database = Arc::new(Database::seeded().context("building user data")?);
    log::info!("loaded {} users", database.users().len());

    schema::export(&schema::init(), &config.schema_path)
        .with_context(|| format!("writing schema to {}", config.schema_path.display()))?;
    log::info!("schema written to {}", config.schema_path.display());

    let app_config = config.clone();
    log::info!("listening on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors())
            .wrap(Logger::default())
            .app_data(web::Data::new(schema::init()))
            .app_data(web::Data::new(database.clone()))
            .app_data(web::Data::new(app_config.clone()))
            .configure(routes::configure)
    })
    .bind(config.bind_address())
    .with_context(|| format!("binding {}:{}", config.host, config.port))?
    .run()
    .await?;

    Ok(())
}
