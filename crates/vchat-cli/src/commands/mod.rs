pub mod config;
pub mod open;
pub mod routes;
