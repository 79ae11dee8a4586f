pub mod codeshare;
pub mod route_query;
pub mod route_search;
