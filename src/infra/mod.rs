pub mod config;
pub mod db_internal;
pub mod route_store;
pub mod timezone_client;
