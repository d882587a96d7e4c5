//! Employee records service: a validated SQLite-backed record store, the
//! actix-web handlers in front of it, and the salary-prediction collaborator
//! (model trainer plus prediction endpoint).

pub mod api;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod logging;
pub mod model;
pub mod prediction;
pub mod routes;
pub mod store;
pub mod utils;
