pub mod queries;
pub mod repository;
