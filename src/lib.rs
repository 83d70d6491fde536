//! Account REST API service: CRUD for Account records over PostgreSQL.

pub mod app;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
