pub mod config;
pub mod context;
pub mod database;
pub mod error;
pub mod models;
pub mod routes;
pub mod schema;
