use crate::{
    config::Config, context::GraphqlContext, database::Database, models::Health,
    schema::GraphqlRoot,
};
use actix_cors::Cors;
use actix_web::{get, http::StatusCode, post, web, Error, HttpResponse, Responder};
use juniper::http::{graphiql::graphiql_source, GraphQLBatchRequest};
use std::sync::Arc;

pub const GRAPHQL_PATH: &str = "/graphql";

#[get("/")]
async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(Health::ok())
}

#[get("/graphql")]
async fn graphiql_handler() -> impl Responder {
    let html = graphiql_source(GRAPHQL_PATH, None);
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html)
}

#[post("/graphql")]
async fn graphql_handler(
    graphql_root: web::Data<GraphqlRoot>,
    req: web::Json<GraphQLBatchRequest>,
    database: web::Data<Arc<Database>>,
) -> impl Responder {
    let context = GraphqlContext::from(database.get_ref().clone());
    let res = req.execute(graphql_root.get_ref(), &context).await;
    let status = if res.is_ok() {
        StatusCode::OK
    } else {
        log::debug!("graphql request failed: {}", serde_json::to_string(&res).unwrap_or_default());
        StatusCode::BAD_REQUEST
    };
    HttpResponse::build(status).json(res)
}

/// Serves the schema file exported at startup.
#[get("/schema.graphqls")]
async fn schema_handler(config: web::Data<Config>) -> Result<HttpResponse, Error> {
    let path = config.schema_path.clone();
    let sdl = web::block(move || std::fs::read_to_string(path)).await?;
    match sdl {
        Ok(text) => Ok(HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(text)),
        Err(error) => {
            log::warn!("cannot read {}: {}", config.schema_path.display(), error);
            Ok(HttpResponse::NotFound().finish())
        }
    }
}

/// Open CORS policy: every origin, method and header, with credentials.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_handler)
        .service(graphiql_handler)
        .service(graphql_handler)
        .service(schema_handler);
}
