pub mod route;
pub mod timezone;
