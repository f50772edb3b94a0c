pub mod filters;
pub mod repository;
pub mod routes;
